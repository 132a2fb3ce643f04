use crate::lang::ast::*;
use crate::lang::error::{LangError, LangResult};
use crate::lang::token::{Token, TokenKind};

/// Deepest expression nesting accepted before giving up.
const MAX_DEPTH: usize = 256;

/// Pratt parser for plot equations.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Classify and parse one equation line.
    ///
    /// `x = <number>` becomes a vertical line; otherwise an optional
    /// leading `y =` is dropped and the rest must be an expression in `x`.
    pub fn parse_equation(&mut self) -> LangResult<Equation> {
        if self.is_at_end() {
            return Err(LangError::parse("empty expression").with_span(self.peek().span));
        }

        if self.is_ident_at(0, "x") && self.kind_at(1) == Some(&TokenKind::Eq) {
            self.advance();
            self.advance();
            return self.parse_vertical();
        }

        if self.is_ident_at(0, "y") && self.kind_at(1) == Some(&TokenKind::Eq) {
            self.advance();
            self.advance();
        }

        let expr = self.parse_expr(0)?;
        self.expect_end()?;
        Ok(Equation::Function(expr))
    }

    /// Parse a standalone expression (no `x =` / `y =` prefix).
    pub fn parse_expression(&mut self) -> LangResult<Expr> {
        let expr = self.parse_expr(0)?;
        self.expect_end()?;
        Ok(expr)
    }

    fn parse_vertical(&mut self) -> LangResult<Equation> {
        let start = self.peek().span;
        let negative = match self.peek_kind() {
            TokenKind::Minus => {
                self.advance();
                true
            }
            TokenKind::Plus => {
                self.advance();
                false
            }
            _ => false,
        };

        let tok = self.advance();
        let TokenKind::Number(value) = tok.kind else {
            return Err(LangError::parse(format!(
                "vertical line needs a constant (x = <number>), found {}",
                tok.kind.describe()
            ))
            .with_span(start.merge(tok.span)));
        };
        self.expect_end()?;
        Ok(Equation::Vertical(if negative { -value } else { value }))
    }

    /// Pratt parser: parse expression with given minimum binding power.
    fn parse_expr(&mut self, min_bp: u8) -> LangResult<Expr> {
        if self.depth >= MAX_DEPTH {
            let span = self.peek().span;
            return Err(LangError::parse("expression nested too deeply").with_span(span));
        }
        self.depth += 1;
        let result = self.parse_binary(min_bp);
        self.depth -= 1;
        result
    }

    fn parse_binary(&mut self, min_bp: u8) -> LangResult<Expr> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let (op, left_bp, right_bp) = match self.peek_kind() {
                TokenKind::Plus => (BinOpKind::Add, 9, 10),
                TokenKind::Minus => (BinOpKind::Sub, 9, 10),
                TokenKind::Star => (BinOpKind::Mul, 11, 12),
                TokenKind::Slash => (BinOpKind::Div, 11, 12),
                TokenKind::Caret => (BinOpKind::Pow, 16, 15), // right-associative
                _ => break,
            };

            if left_bp < min_bp {
                break;
            }

            self.advance(); // consume operator
            let rhs = self.parse_expr(right_bp)?;
            let span = lhs.span().merge(rhs.span());
            lhs = Expr::BinOp {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }

        Ok(lhs)
    }

    /// Parse prefix expression (atom or unary operator).
    fn parse_prefix(&mut self) -> LangResult<Expr> {
        match self.peek_kind() {
            TokenKind::Number(_) => {
                let tok = self.advance();
                match tok.kind {
                    TokenKind::Number(n) => Ok(Expr::Number(n, tok.span)),
                    _ => unreachable!(),
                }
            }
            TokenKind::Ident(_) => self.parse_ident_or_call(),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::Pipe => self.parse_abs(),
            TokenKind::Minus | TokenKind::Plus => {
                let tok = self.advance();
                let op = if tok.kind == TokenKind::Minus {
                    UnaryOpKind::Neg
                } else {
                    UnaryOpKind::Plus
                };
                let operand = self.parse_expr(13)?; // binds tighter than + - * /, looser than ^
                let span = tok.span.merge(operand.span());
                Ok(Expr::UnaryOp {
                    op,
                    operand: Box::new(operand),
                    span,
                })
            }
            _ => {
                let tok = self.peek();
                Err(LangError::parse(format!(
                    "expected expression, found {}",
                    tok.kind.describe()
                ))
                .with_span(tok.span))
            }
        }
    }

    fn parse_ident_or_call(&mut self) -> LangResult<Expr> {
        let tok = self.advance();
        let TokenKind::Ident(name) = tok.kind else {
            unreachable!()
        };
        if self.peek_kind() != TokenKind::LParen {
            return Ok(Expr::Ident(name, tok.span));
        }

        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if self.peek_kind() != TokenKind::RParen {
            args.push(self.parse_expr(0)?);
            while self.peek_kind() == TokenKind::Comma {
                self.advance();
                args.push(self.parse_expr(0)?);
            }
        }
        let end = self.expect(TokenKind::RParen)?.span;
        Ok(Expr::Call {
            name,
            name_span: tok.span,
            args,
            span: tok.span.merge(end),
        })
    }

    fn parse_grouped(&mut self) -> LangResult<Expr> {
        self.expect(TokenKind::LParen)?;
        let expr = self.parse_expr(0)?;
        self.expect(TokenKind::RParen)?;
        Ok(expr)
    }

    fn parse_abs(&mut self) -> LangResult<Expr> {
        let start = self.expect(TokenKind::Pipe)?.span;
        let inner = self.parse_expr(0)?;
        let end = self.expect(TokenKind::Pipe)?.span;
        // Desugar |x| to abs(x)
        Ok(Expr::Call {
            name: "abs".to_string(),
            name_span: start,
            args: vec![inner],
            span: start.merge(end),
        })
    }

    // --- Token helpers ---

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind.clone()
    }

    fn kind_at(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| &t.kind)
    }

    fn is_ident_at(&self, offset: usize, name: &str) -> bool {
        matches!(self.kind_at(offset), Some(TokenKind::Ident(n)) if n == name)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> LangResult<Token> {
        let tok = self.peek().clone();
        if std::mem::discriminant(&tok.kind) == std::mem::discriminant(&kind) {
            Ok(self.advance())
        } else {
            Err(LangError::parse(format!(
                "expected {}, found {}",
                kind.describe(),
                tok.kind.describe()
            ))
            .with_span(tok.span))
        }
    }

    fn expect_end(&mut self) -> LangResult<()> {
        if self.is_at_end() {
            return Ok(());
        }
        let tok = self.peek();
        Err(LangError::parse(format!("unexpected {}", tok.kind.describe())).with_span(tok.span))
    }

    fn is_at_end(&self) -> bool {
        matches!(self.tokens[self.pos].kind, TokenKind::Eof)
    }
}
