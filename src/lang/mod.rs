//! Plot equation language: lexer, Pratt parser and tree-walking evaluator.

pub mod ast;
pub mod builtins;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;

use crate::lang::ast::Equation;
use crate::lang::error::LangResult;
use crate::lang::eval::CompiledExpr;
use crate::lang::lexer::Lexer;
use crate::lang::parser::Parser;

/// An equation after parsing and name resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// `x = c`
    Vertical(f64),
    /// `y = f(x)`
    Function(CompiledExpr),
}

/// Tokenize, parse and compile one equation line.
pub fn classify(source: &str) -> LangResult<Classified> {
    let tokens = Lexer::new(source).tokenize()?;
    match Parser::new(tokens).parse_equation()? {
        Equation::Vertical(value) => Ok(Classified::Vertical(value)),
        Equation::Function(expr) => Ok(Classified::Function(CompiledExpr::compile(&expr)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_vertical() {
        assert_eq!(classify("x = 5").unwrap(), Classified::Vertical(5.0));
    }

    #[test]
    fn test_classify_function() {
        match classify("y = sin(x)").unwrap() {
            Classified::Function(f) => assert_eq!(f.eval(0.0), 0.0),
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_reports_offset() {
        let err = classify("y = x + foo").unwrap_err();
        assert_eq!(err.span.map(|s| s.start), Some(8));
    }
}
