//! Read position over a token slice.
//!
//! Every lookahead and consume operation of the parser goes through here.
//! Whitespace never reaches this layer; the lexer drops it.

use crate::ast::{Keyword, Spanned, Token};

#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tokens: &'t [Spanned],
    position: usize,
    // Byte offset reported once the tokens run out.
    end_offset: usize,
}

impl<'t> Cursor<'t> {
    pub fn new(tokens: &'t [Spanned], end_offset: usize) -> Self {
        Cursor {
            tokens,
            position: 0,
            end_offset,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Index of the next token within the slice.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position).map(|spanned| &spanned.token)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&'t Token> {
        self.tokens.get(self.position + n).map(|spanned| &spanned.token)
    }

    pub fn peek_spanned(&self) -> Option<&'t Spanned> {
        self.tokens.get(self.position)
    }

    pub fn peek_keyword(&self) -> Option<Keyword> {
        match self.peek() {
            Some(Token::Keyword(keyword)) => Some(*keyword),
            _ => None,
        }
    }

    /// Byte offset of the next token, or of the end of input.
    pub fn offset(&self) -> usize {
        self.peek_spanned()
            .map(|spanned| spanned.span.start)
            .unwrap_or(self.end_offset)
    }

    /// Consume the next token unconditionally.
    pub fn bump(&mut self) -> Option<&'t Spanned> {
        let spanned = self.tokens.get(self.position)?;
        self.position += 1;
        Some(spanned)
    }

    /// Consume the next token if it equals `expected`.
    pub fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.eat(&Token::Keyword(keyword))
    }

    /// Tokens in `start..end`, by index.
    pub fn slice(&self, start: usize, end: usize) -> &'t [Spanned] {
        &self.tokens[start..end]
    }

    pub fn end_offset(&self) -> usize {
        self.end_offset
    }
}
