mod message;
mod printer;

#[cfg(test)]
mod tests;

pub use message::{DiagnosticKind, Severity, Span};
pub use printer::DiagnosticsPrinter;

pub(crate) use message::DiagnosticMessage;

/// Problems collected across a generation run.
///
/// Warnings never stop a run. Errors stop it before any file is written.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    /// Kinds in report order.
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.messages.iter().map(|m| m.kind).collect()
    }

    /// Rendered messages in report order, without source excerpts.
    pub fn messages(&self) -> Vec<String> {
        self.messages.iter().map(|m| m.message.clone()).collect()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.message.span = Some(span);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.message.subject = Some(subject.into());
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
