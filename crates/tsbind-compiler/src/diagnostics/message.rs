use std::ops::Range;

use crate::source_map::SourceId;

/// Diagnostic kinds ordered by pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Extraction
    SyntaxError,
    OverloadDropped,

    // Normalization: name lookups that found nothing
    UnresolvedClass,
    UnresolvedInterface,

    // Substitution
    UnresolvedPlaceholder,

    // Emission
    InvalidOptionalParameters,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::InvalidOptionalParameters => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::SyntaxError => "syntax error in declaration file",
            Self::OverloadDropped => "overloaded signature dropped",
            Self::UnresolvedClass => "class not found",
            Self::UnresolvedInterface => "interface not found",
            Self::UnresolvedPlaceholder => "placeholder not bound by pattern",
            Self::InvalidOptionalParameters => {
                "optional parameters must form a trailing group"
            }
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnresolvedClass => "class `{}` not found".to_string(),
            Self::UnresolvedInterface => "interface `{}` not found".to_string(),
            Self::OverloadDropped => "overload of `{}` dropped; only the first signature is kept"
                .to_string(),
            Self::UnresolvedPlaceholder => "`{}` does not occur in its pattern".to_string(),
            Self::InvalidOptionalParameters => {
                "`{}` mixes required and optional parameters outside a trailing group".to_string()
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Byte range within one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub source: SourceId,
    pub range: Range<usize>,
}

impl Span {
    pub fn new(source: SourceId, range: Range<usize>) -> Self {
        Self { source, range }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Where in the input this points, when known. Hierarchy lookups have no span.
    pub(crate) span: Option<Span>,
    /// Declaration the diagnostic is about (class, interface or `Class.member`).
    pub(crate) subject: Option<String>,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            span: None,
            subject: None,
            message: kind.fallback_message().to_string(),
        }
    }

    pub(crate) fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message)?;
        if let Some(subject) = &self.subject {
            write!(f, " (in `{}`)", subject)?;
        }
        Ok(())
    }
}
