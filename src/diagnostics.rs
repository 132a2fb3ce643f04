//! Non-fatal problems reported alongside the generated program.

use std::fmt;

use crate::geom::shape::ShapeKind;
use crate::geom::tessellate::TessellateError;
use crate::lang::error::LangError;
use crate::lang::token::Span;
use crate::plot::types::FunctionId;

/// What a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Position in the shape collection.
    Shape { index: usize, kind: ShapeKind },
    Function { id: FunctionId },
    Viewport,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub subject: Subject,
    pub message: String,
    /// Offending range of the expression text, functions only.
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn shape(index: usize, err: &TessellateError) -> Self {
        Self {
            subject: Subject::Shape {
                index,
                kind: err.kind,
            },
            message: err.to_string(),
            span: None,
        }
    }

    pub fn function(id: FunctionId, err: &LangError) -> Self {
        Self {
            subject: Subject::Function { id },
            message: err.to_string(),
            span: err.span,
        }
    }

    pub fn viewport(message: impl Into<String>) -> Self {
        Self {
            subject: Subject::Viewport,
            message: message.into(),
            span: None,
        }
    }

    pub fn function_message(id: FunctionId, message: impl Into<String>) -> Self {
        Self {
            subject: Subject::Function { id },
            message: message.into(),
            span: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.subject {
            Subject::Shape { index, kind } => {
                write!(f, "shape {} ({}): {}", index + 1, kind, self.message)
            }
            Subject::Function { id } => write!(f, "function {}: {}", id, self.message),
            Subject::Viewport => write!(f, "viewport: {}", self.message),
        }
    }
}
