//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};
use crate::source_map::SourceMap;

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    sources: Option<&'s SourceMap>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            sources: None,
            colored: false,
        }
    }

    /// Sources that spans point into. Without them every message renders as one plain line.
    pub fn sources(mut self, sources: &'s SourceMap) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            self.format_one(w, &renderer, diag)?;
        }

        Ok(())
    }

    fn format_one(
        &self,
        w: &mut impl Write,
        renderer: &Renderer,
        diag: &DiagnosticMessage,
    ) -> std::fmt::Result {
        let (Some(sources), Some(span)) = (self.sources, &diag.span) else {
            return write!(w, "{}", diag);
        };

        let source = sources.get(span.source);
        let content = source.as_str();
        let range = adjust_range(span.range.clone(), content.len());

        let label = match &diag.subject {
            Some(subject) => format!("in `{}`", subject),
            None => diag.message.clone(),
        };

        let snippet = Snippet::source(content)
            .line_start(1)
            .path(source.display_name())
            .annotation(AnnotationKind::Primary.span(range).label(&label));

        let level = severity_to_level(diag.severity());
        let report = vec![level.primary_title(&diag.message).element(snippet)];

        write!(w, "{}", renderer.render(&report))
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    let start = range.start.min(limit);
    let end = range.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
