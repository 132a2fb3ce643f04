use crate::lang::ast::*;
use crate::lang::builtins::{self, UnaryFn};
use crate::lang::error::{LangError, LangResult};

/// Name-resolved expression tree, ready for repeated evaluation.
#[derive(Debug, Clone, PartialEq)]
enum Node {
    Const(f64),
    Var,
    Neg(Box<Node>),
    Unary(UnaryFn, Box<Node>),
    Binary(BinOpKind, Box<Node>, Box<Node>),
}

/// A compiled `f(x)`.
///
/// Compilation resolves every identifier against the builtin tables, so
/// evaluation itself cannot fail: domain errors surface as NaN or infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    root: Node,
}

impl CompiledExpr {
    pub fn compile(expr: &Expr) -> LangResult<Self> {
        Ok(Self {
            root: compile_node(expr)?,
        })
    }

    pub fn eval(&self, x: f64) -> f64 {
        eval_node(&self.root, x)
    }
}

fn compile_node(expr: &Expr) -> LangResult<Node> {
    match expr {
        Expr::Number(n, _) => Ok(Node::Const(*n)),

        Expr::Ident(name, span) => {
            if name == builtins::VARIABLE {
                return Ok(Node::Var);
            }
            if let Some(value) = builtins::lookup_constant(name) {
                return Ok(Node::Const(value));
            }
            let hint = if builtins::lookup_function(name).is_some() {
                format!("'{}' is a function and needs an argument, e.g. {}(x)", name, name)
            } else {
                format!("unknown identifier '{}' (the only variable is x)", name)
            };
            Err(LangError::name(hint).with_span(*span))
        }

        Expr::BinOp { op, lhs, rhs, .. } => Ok(Node::Binary(
            *op,
            Box::new(compile_node(lhs)?),
            Box::new(compile_node(rhs)?),
        )),

        Expr::UnaryOp { op, operand, .. } => {
            let inner = compile_node(operand)?;
            Ok(match op {
                UnaryOpKind::Neg => Node::Neg(Box::new(inner)),
                UnaryOpKind::Plus => inner,
            })
        }

        Expr::Call {
            name,
            name_span,
            args,
            span,
        } => {
            let func = builtins::lookup_function(name).ok_or_else(|| {
                let names: Vec<&str> = builtins::function_names().collect();
                LangError::name(format!(
                    "unknown function '{}' (available: {})",
                    name,
                    names.join(", ")
                ))
                .with_span(*name_span)
            })?;
            if args.len() != 1 {
                return Err(LangError::arity(format!(
                    "{} takes 1 argument, got {}",
                    name,
                    args.len()
                ))
                .with_span(*span));
            }
            Ok(Node::Unary(func, Box::new(compile_node(&args[0])?)))
        }
    }
}

fn eval_node(node: &Node, x: f64) -> f64 {
    match node {
        Node::Const(v) => *v,
        Node::Var => x,
        Node::Neg(inner) => -eval_node(inner, x),
        Node::Unary(func, inner) => func.apply(eval_node(inner, x)),
        Node::Binary(op, lhs, rhs) => op.apply(eval_node(lhs, x), eval_node(rhs, x)),
    }
}
