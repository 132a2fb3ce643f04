use crate::lang::error::{LangError, LangResult};
use crate::lang::token::{Span, Token, TokenKind};

pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> LangResult<Vec<Token>> {
        while !self.is_at_end() {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            let token = self.next_token()?;
            self.tokens.push(token);
        }
        self.tokens.push(Token::new(TokenKind::Eof, Span::new(self.pos, self.pos)));
        Ok(self.tokens)
    }

    fn next_token(&mut self) -> LangResult<Token> {
        let start = self.pos;
        let ch = self.advance();

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' | '\u{2212}' => TokenKind::Minus,
            '*' => {
                if self.peek() == Some('*') {
                    self.advance();
                    TokenKind::Caret
                } else {
                    TokenKind::Star
                }
            }
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '=' => TokenKind::Eq,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '|' => TokenKind::Pipe,
            '\u{00D7}' | '\u{22C5}' => TokenKind::Star, // × ⋅
            '\u{00F7}' => TokenKind::Slash,             // ÷
            '\u{03C0}' => TokenKind::Ident("pi".to_string()), // π
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                return self.read_number(start)
            }
            c if c.is_ascii_digit() => return self.read_number(start),
            c if is_ident_start(c) => return Ok(self.read_identifier(start)),
            _ => {
                return Err(LangError::lex(format!("unexpected character: '{}'", ch))
                    .with_span(Span::new(start, self.pos)))
            }
        };

        Ok(Token::new(kind, Span::new(start, self.pos)))
    }

    fn read_number(&mut self, start: usize) -> LangResult<Token> {
        self.eat_digits();

        if self.source[start] != '.' && self.peek() == Some('.') {
            self.advance();
            self.eat_digits();
        }

        // Exponent only when digits follow, so `2e` stays a number then `e`.
        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_at = match self.peek_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digit_at {
                    self.advance();
                }
                self.eat_digits();
            }
        }

        let text: String = self.source[start..self.pos].iter().collect();
        let value: f64 = text.parse().map_err(|_| {
            LangError::lex(format!("invalid number: {}", text))
                .with_span(Span::new(start, self.pos))
        })?;
        Ok(Token::new(TokenKind::Number(value), Span::new(start, self.pos)))
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.source[start..self.pos].iter().collect();
        Token::new(TokenKind::Ident(text), Span::new(start, self.pos))
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn advance(&mut self) -> char {
        let ch = self.source[self.pos];
        self.pos += 1;
        ch
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
