use crate::lang::token::Span;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct LangError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexError,
    ParseError,
    NameError,
    ArityError,
}

impl LangError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn lex(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LexError, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError, message)
    }

    pub fn name(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameError, message)
    }

    pub fn arity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArityError, message)
    }

    /// Render the error against its source with a caret line under the span.
    pub fn render(&self, source: &str) -> String {
        match self.span {
            Some(span) => format!("{}\n{}", self, underline(source, span)),
            None => self.to_string(),
        }
    }
}

/// The source line with carets under `span`, both indented two spaces.
pub fn underline(source: &str, span: Span) -> String {
    let width = span.end.saturating_sub(span.start).max(1);
    format!("  {}\n  {}{}", source, " ".repeat(span.start), "^".repeat(width))
}

impl fmt::Display for LangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "{:?} at {}: {}", self.kind, span.start, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for LangError {}

pub type LangResult<T> = Result<T, LangError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_offset() {
        let err = LangError::parse("expected expression").with_span(Span::new(4, 5));
        assert_eq!(err.to_string(), "ParseError at 4: expected expression");
    }

    #[test]
    fn test_render_caret_under_span() {
        let err = LangError::name("unknown identifier 'q'").with_span(Span::new(4, 5));
        let rendered = err.render("x + q");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "  x + q");
        assert_eq!(lines[2], "      ^");
    }

    #[test]
    fn test_render_without_span() {
        let err = LangError::parse("empty expression");
        assert_eq!(err.render(""), "ParseError: empty expression");
    }
}
