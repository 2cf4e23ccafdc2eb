use super::*;
use crate::source_map::SourceMap;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn kinds_have_expected_severity() {
    assert_eq!(
        DiagnosticKind::InvalidOptionalParameters.default_severity(),
        Severity::Error
    );
    assert_eq!(
        DiagnosticKind::UnresolvedClass.default_severity(),
        Severity::Warning
    );
    assert_eq!(
        DiagnosticKind::OverloadDropped.default_severity(),
        Severity::Warning
    );
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::UnresolvedClass).emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    insta::assert_snapshot!(diagnostics.printer().render(), @"warning: class not found");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnresolvedInterface)
        .message("Disposable")
        .subject("Mesh")
        .emit();

    insta::assert_snapshot!(
        diagnostics.printer().render(),
        @"warning: interface `Disposable` not found (in `Mesh`)"
    );
}

#[test]
fn counts_split_by_severity() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::OverloadDropped).emit();
    diagnostics
        .report(DiagnosticKind::InvalidOptionalParameters)
        .message("Mesh.draw")
        .emit();
    diagnostics.report(DiagnosticKind::UnresolvedClass).emit();

    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 2);
    assert_eq!(
        diagnostics.kinds(),
        vec![
            DiagnosticKind::OverloadDropped,
            DiagnosticKind::InvalidOptionalParameters,
            DiagnosticKind::UnresolvedClass,
        ]
    );
}

#[test]
fn extend_keeps_order() {
    let mut first = Diagnostics::new();
    first.report(DiagnosticKind::SyntaxError).emit();
    let mut second = Diagnostics::new();
    second.report(DiagnosticKind::UnresolvedPlaceholder).emit();

    first.extend(second);

    assert_eq!(
        first.kinds(),
        vec![
            DiagnosticKind::SyntaxError,
            DiagnosticKind::UnresolvedPlaceholder
        ]
    );
}

#[test]
fn plain_lines_joined_by_newline() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnresolvedClass)
        .message("Base")
        .emit();
    diagnostics
        .report(DiagnosticKind::UnresolvedPlaceholder)
        .message("#T")
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    warning: class `Base` not found
    warning: `#T` does not occur in its pattern
    ");
}

#[test]
fn span_renders_source_excerpt() {
    let mut sources = SourceMap::new();
    let id = sources.add_file("engine.d.ts", "declare class Engine {}\n");

    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::SyntaxError)
        .span(Span::new(id, 14..20))
        .emit();

    let rendered = diagnostics.printer().sources(&sources).render();

    assert!(rendered.starts_with("warning: syntax error in declaration file"));
    assert!(rendered.contains("engine.d.ts"));
    assert!(rendered.contains("declare class Engine {}"));
    assert!(rendered.contains("^^^^^^"));
}

#[test]
fn span_without_sources_falls_back_to_plain() {
    let mut sources = SourceMap::new();
    let id = sources.add_inline("class A {}");

    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::SyntaxError)
        .span(Span::new(id, 0..5))
        .emit();

    insta::assert_snapshot!(
        diagnostics.printer().render(),
        @"warning: syntax error in declaration file"
    );
}

#[test]
fn empty_range_is_widened() {
    let mut sources = SourceMap::new();
    let id = sources.add_inline("class A {");

    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::SyntaxError)
        .span(Span::new(id, 9..9))
        .emit();

    let rendered = diagnostics.printer().sources(&sources).render();
    assert!(rendered.contains("<inline>"));
}
