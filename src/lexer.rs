use crate::ast::{Keyword, Span, Spanned, Token};
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    // A word right after `.` is a property name, never a keyword.
    after_dot: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            after_dot: false,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input[self.position..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
        &self.input[start..self.position]
    }

    fn read_string(&mut self, quote: char) -> Token {
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Token::String(result);
                }
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        // \\ \' \" and anything else stand for themselves
                        Some(other) => result.push(other),
                        None => break,
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Token::OpenString(result)
    }

    /// A digit run glued to letters or `_` (`2024_logs`) is a name.
    fn digits_run_into_word(&self) -> bool {
        let rest = &self.input[self.position..];
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        rest[digits..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        let mut is_fraction = false;

        if self.current_char() == Some('-') {
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.'
                && !is_fraction
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_fraction = true;
                self.advance();
            } else {
                break;
            }
        }

        let literal = &self.input[start..self.position];
        match Decimal::from_str(literal) {
            Ok(n) => Token::Number(n),
            // A plain digit run always parses as f64, at worst to infinity
            Err(_) => Token::Float(literal.parse().unwrap_or(f64::INFINITY)),
        }
    }

    fn read_param(&mut self) -> Token {
        let start = self.position;
        self.advance(); // @
        if self.current_char() == Some('@') {
            self.advance();
        }

        if self
            .current_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.read_identifier();
            Token::Param(self.input[start..self.position].to_string())
        } else {
            self.position = start;
            self.advance();
            Token::Symbol('@')
        }
    }

    fn read_word(&mut self, after_dot: bool) -> Token {
        let word = self.read_identifier();
        if after_dot {
            return Token::Identifier(word.to_string());
        }

        if word.eq_ignore_ascii_case("true") {
            Token::Boolean(true)
        } else if word.eq_ignore_ascii_case("false") {
            Token::Boolean(false)
        } else if word.eq_ignore_ascii_case("null") {
            Token::Null
        } else if let Some(keyword) = Keyword::from_word(word) {
            Token::Keyword(keyword)
        } else {
            Token::Identifier(word.to_string())
        }
    }

    /// Read the next token along with its span. Returns `Token::Eof` once the
    /// input is exhausted.
    pub fn next_spanned(&mut self) -> Spanned {
        self.skip_whitespace();

        let start = self.position;
        let after_dot = std::mem::replace(&mut self.after_dot, false);

        let token = match self.current_char() {
            None => Token::Eof,
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some('.') => {
                self.advance();
                self.after_dot = true;
                Token::Dot
            }
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::EqEq
                } else {
                    self.advance();
                    Token::Assign
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::NotEq
                } else {
                    self.advance();
                    Token::Symbol('!')
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::GtEq
                } else {
                    self.advance();
                    Token::Gt
                }
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::LtEq
                } else {
                    self.advance();
                    Token::Lt
                }
            }
            Some('&') if self.peek_char(1) == Some('&') => {
                self.advance();
                self.advance();
                Token::AmpAmp
            }
            Some('|') if self.peek_char(1) == Some('|') => {
                self.advance();
                self.advance();
                Token::PipePipe
            }
            Some(quote @ ('"' | '\'')) => self.read_string(quote),
            Some('@') => self.read_param(),
            Some('-') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.read_number()
            }
            Some(ch) if ch.is_ascii_digit() && self.digits_run_into_word() => {
                Token::Identifier(self.read_identifier().to_string())
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => self.read_word(after_dot),
            Some(ch) => {
                self.advance();
                Token::Symbol(ch)
            }
        };

        Spanned {
            token,
            span: Span {
                start,
                end: self.position,
            },
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.next_spanned().token
    }
}

/// Tokenize a whole query. The trailing `Eof` is not included.
pub fn tokenize(input: &str) -> Vec<Spanned> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let spanned = lexer.next_spanned();
        if spanned.token == Token::Eof {
            break;
        }
        tokens.push(spanned);
    }

    tokens
}

#[test]
fn test_statement_keywords() {
    let mut lexer = Lexer::new("for Filter SORT limit LET");
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::For));
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Filter));
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Sort));
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Limit));
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Let));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_filter_clause() {
    let mut lexer = Lexer::new("FILTER a.event == 'reindex'");
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Filter));
    assert_eq!(lexer.next_token(), Token::Identifier("a".to_string()));
    assert_eq!(lexer.next_token(), Token::Dot);
    assert_eq!(lexer.next_token(), Token::Identifier("event".to_string()));
    assert_eq!(lexer.next_token(), Token::EqEq);
    assert_eq!(lexer.next_token(), Token::String("reindex".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = tokenize("  LIMIT  @n");
    assert_eq!(tokens[0].span, Span { start: 2, end: 7 });
    assert_eq!(tokens[1].span, Span { start: 9, end: 11 });
}

#[test]
fn test_open_quote_swallows_rest_of_input() {
    let tokens = tokenize("RETURN 'it FILTER x");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].token, Token::OpenString("it FILTER x".to_string()));
    assert_eq!(tokens[1].span, Span { start: 7, end: 19 });
}

#[test]
fn test_digit_led_word_is_identifier() {
    let mut lexer = Lexer::new("2024_logs 7days 42");
    assert_eq!(lexer.next_token(), Token::Identifier("2024_logs".to_string()));
    assert_eq!(lexer.next_token(), Token::Identifier("7days".to_string()));
    assert_eq!(lexer.next_token(), Token::Number(Decimal::from(42)));
}
