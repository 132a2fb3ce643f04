use crate::lang::token::Span;

/// Expression node as written by the user, before name resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal: `42`, `3.14`
    Number(f64, Span),

    /// Variable or constant reference: `x`, `pi`
    Ident(String, Span),

    /// Binary operation: `a + b`, `x^2`
    BinOp {
        op: BinOpKind,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: Span,
    },

    /// Unary operation: `-x`
    UnaryOp {
        op: UnaryOpKind,
        operand: Box<Expr>,
        span: Span,
    },

    /// Function call: `sin(x)`
    Call {
        name: String,
        name_span: Span,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Number(_, s) => *s,
            Expr::Ident(_, s) => *s,
            Expr::BinOp { span, .. } => *span,
            Expr::UnaryOp { span, .. } => *span,
            Expr::Call { span, .. } => *span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOpKind {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOpKind::Add => lhs + rhs,
            BinOpKind::Sub => lhs - rhs,
            BinOpKind::Mul => lhs * rhs,
            BinOpKind::Div => lhs / rhs,
            BinOpKind::Pow => lhs.powf(rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Neg,
    Plus,
}

/// A classified equation line.
#[derive(Debug, Clone, PartialEq)]
pub enum Equation {
    /// `x = c`: a vertical line at the constant.
    Vertical(f64),
    /// `y = f(x)` or a bare `f(x)`.
    Function(Expr),
}
