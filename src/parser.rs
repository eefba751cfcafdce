use crate::{
    ast::{
        BinOp, Direction, Expr, Keyword, LimitValue, Literal, Omittable, Query, SortCriterion,
        Spanned, Statement, Token,
    },
    cursor::Cursor,
    error::{ParseError, ParseResult},
    lexer::tokenize,
};
use log::{debug, trace, warn};
use rust_decimal::Decimal;

/// Knobs for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of expressions and subqueries before the parse is
    /// rejected with [`ParseError::NestingTooDeep`].
    pub max_depth: usize,
    /// Treat the input as LET-bound even when it contains no `LET` itself,
    /// for callers parsing a fragment of a larger query.
    pub let_context: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: 64,
            let_context: false,
        }
    }
}

/// Parser for one query string.
///
/// A `Parser` is consumed by [`Parser::parse`]; build a new one per query.
pub struct Parser<'a> {
    input: &'a str,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser { input, options }
    }

    /// Parse the whole input into a [`Query`].
    pub fn parse(self) -> ParseResult<Query> {
        let tokens = tokenize(self.input);

        // Coarse on purpose: one LET anywhere elides every FILTER/SORT body.
        let let_context = self.options.let_context
            || tokens
                .iter()
                .any(|spanned| spanned.token == Token::Keyword(Keyword::Let));

        debug!(
            "parsing {} bytes ({} tokens), let_context={}",
            self.input.len(),
            tokens.len(),
            let_context
        );

        let mut session = Session {
            cursor: Cursor::new(&tokens, self.input.len()),
            options: &self.options,
            subquery: false,
            let_context,
            depth: 0,
        };
        session.parse_query()
    }
}

/// Parse `input` with default options.
pub fn parse(input: &str) -> ParseResult<Query> {
    Parser::new(input).parse()
}

/// Mutable state of one (sub)query parse.
struct Session<'t> {
    cursor: Cursor<'t>,
    options: &'t ParseOptions,
    subquery: bool,
    let_context: bool,
    depth: usize,
}

impl<'t> Session<'t> {
    fn parse_query(&mut self) -> ParseResult<Query> {
        let mut body = Vec::new();

        while !self.cursor.is_at_end() {
            let before = self.cursor.position();

            if let Some(statement) = self.parse_statement()? {
                body.push(statement);
            } else if self.cursor.position() == before {
                warn!("no progress at offset {}, stopping", self.cursor.offset());
                break;
            }
        }

        Ok(Query::new(body))
    }

    fn parse_statement(&mut self) -> ParseResult<Option<Statement>> {
        let statement = match self.cursor.peek_keyword() {
            Some(Keyword::For) => self.parse_for()?,
            Some(Keyword::Filter) => self.parse_filter()?,
            Some(Keyword::Sort) => self.parse_sort()?,
            Some(Keyword::Limit) => self.parse_limit()?,
            Some(Keyword::Let) => self.parse_let()?,
            _ => {
                self.skip_unsupported();
                return Ok(None);
            }
        };
        Ok(Some(statement))
    }

    /// FILTER and SORT bodies are only resolved at the true top level.
    fn elides_bodies(&self) -> bool {
        self.subquery || self.let_context
    }

    fn take_identifier(&mut self) -> Option<String> {
        match self.cursor.peek() {
            Some(Token::Identifier(name)) => {
                self.cursor.bump();
                Some(name.clone())
            }
            _ => None,
        }
    }

    fn parse_for(&mut self) -> ParseResult<Statement> {
        self.cursor.eat_keyword(Keyword::For);

        let variable_name = self
            .take_identifier()
            .ok_or(ParseError::ExpectedVariableName {
                offset: self.cursor.offset(),
            })?;

        self.cursor.eat_keyword(Keyword::In);

        let collection_name = match self.cursor.peek() {
            Some(Token::Identifier(name) | Token::Param(name)) => name.clone(),
            Some(Token::Number(n)) => n.to_string(),
            Some(Token::Float(n)) => n.to_string(),
            _ => {
                return Err(ParseError::ExpectedCollectionName {
                    offset: self.cursor.offset(),
                });
            }
        };
        self.cursor.bump();

        Ok(Statement::For {
            variable_name,
            collection_name,
        })
    }

    fn parse_filter(&mut self) -> ParseResult<Statement> {
        self.cursor.eat_keyword(Keyword::Filter);

        if self.elides_bodies() {
            self.skip_clause();
            return Ok(Statement::Filter {
                condition: Omittable::Omitted,
            });
        }

        let condition = self.parse_expression()?;
        Ok(Statement::Filter {
            condition: Omittable::Parsed(condition),
        })
    }

    fn parse_sort(&mut self) -> ParseResult<Statement> {
        self.cursor.eat_keyword(Keyword::Sort);

        if self.elides_bodies() {
            self.skip_clause();
            return Ok(Statement::Sort {
                criteria: Omittable::Omitted,
            });
        }

        let mut criteria = Vec::new();
        loop {
            let expression = self.parse_expression()?;

            let direction = if self.cursor.eat_keyword(Keyword::Desc) {
                Direction::Desc
            } else {
                self.cursor.eat_keyword(Keyword::Asc);
                Direction::Asc
            };

            criteria.push(SortCriterion {
                expression,
                direction,
            });

            if !self.cursor.eat(&Token::Comma) {
                break;
            }
        }

        Ok(Statement::Sort {
            criteria: Omittable::Parsed(criteria),
        })
    }

    fn parse_limit(&mut self) -> ParseResult<Statement> {
        self.cursor.eat_keyword(Keyword::Limit);

        let first = self.parse_primary()?;

        if self.cursor.eat(&Token::Comma) {
            let second = self.parse_primary()?;
            return Ok(Statement::Limit {
                offset: LimitValue::Expr(first),
                count: LimitValue::Expr(second),
            });
        }

        let count = match first {
            Expr::Literal(Literal::Number(n)) => LimitValue::Number(n),
            other => LimitValue::Expr(other),
        };

        Ok(Statement::Limit {
            offset: LimitValue::Number(Decimal::ZERO),
            count,
        })
    }

    fn parse_let(&mut self) -> ParseResult<Statement> {
        self.cursor.eat_keyword(Keyword::Let);

        let variable_name = self
            .take_identifier()
            .ok_or(ParseError::ExpectedVariableName {
                offset: self.cursor.offset(),
            })?;

        self.cursor.eat(&Token::Assign);

        let expression = self.parse_expression()?;

        Ok(Statement::Let {
            variable_name,
            expression,
        })
    }

    fn skip_unsupported(&mut self) {
        if let Some(spanned) = self.cursor.bump() {
            trace!(
                "skipping unsupported clause {} at offset {}",
                spanned.token, spanned.span.start
            );
            self.skip_clause();
        }
    }

    /// Step over the rest of a clause without building anything.
    ///
    /// Stops in front of a clause keyword at nesting zero, right after an
    /// unmatched `)`, or at end of input. Strings are single tokens, so
    /// keywords inside them never end a skip.
    fn skip_clause(&mut self) {
        let start = self.cursor.offset();
        let mut nesting = 0usize;

        while let Some(token) = self.cursor.peek() {
            match token {
                Token::Keyword(keyword) if nesting == 0 && keyword.starts_clause() => break,
                Token::LParen => nesting += 1,
                Token::RParen => {
                    if nesting == 0 {
                        self.cursor.bump();
                        break;
                    }
                    nesting -= 1;
                }
                _ => {}
            }
            self.cursor.bump();
        }

        trace!("skipped bytes {}..{}", start, self.cursor.offset());
    }
}

// Expressions
impl<'t> Session<'t> {
    fn parse_expression(&mut self) -> ParseResult<Expr> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }

        self.depth += 1;
        let expr = self.parse_logical();
        self.depth -= 1;
        expr
    }

    fn parse_logical(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;

        loop {
            let op = match self.cursor.peek() {
                Some(Token::Keyword(Keyword::And) | Token::AmpAmp) => BinOp::And,
                Some(Token::Keyword(Keyword::Or) | Token::PipePipe) => BinOp::Or,
                _ => break,
            };

            self.cursor.bump();
            let right = self.parse_comparison()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// At most one comparison per level; both operands are primaries.
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let left = self.parse_primary()?;

        let op = match self.cursor.peek() {
            Some(Token::EqEq) => BinOp::Equal,
            Some(Token::NotEq) => BinOp::NotEqual,
            Some(Token::GtEq) => BinOp::GreaterEqual,
            Some(Token::LtEq) => BinOp::LessEqual,
            Some(Token::Gt) => BinOp::GreaterThan,
            Some(Token::Lt) => BinOp::LessThan,
            Some(Token::Keyword(Keyword::Like)) => BinOp::Like,
            Some(Token::Keyword(Keyword::In)) => BinOp::In,
            _ => return Ok(left),
        };

        self.cursor.bump();
        let right = self.parse_primary()?;
        Ok(Expr::binary(op, left, right))
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let offset = self.cursor.offset();
        let Some(token) = self.cursor.peek() else {
            return Err(ParseError::ExpectedExpression {
                found: Token::Eof.to_string(),
                offset,
            });
        };

        let expr = match token {
            Token::LParen => {
                self.cursor.bump();
                return self.parse_subquery();
            }
            Token::String(s) => Expr::Literal(Literal::String(s.clone())),
            Token::Number(n) => Expr::Literal(Literal::Number(*n)),
            Token::Float(n) => Expr::Literal(Literal::Float(*n)),
            Token::OpenString(_) => return Err(ParseError::UnterminatedString { offset }),
            Token::Boolean(b) => Expr::Literal(Literal::Boolean(*b)),
            Token::Null => Expr::Literal(Literal::Null),

            // NAME( ... ); keywords double as function names, e.g. LIKE(a, b)
            Token::Identifier(_) | Token::Keyword(_)
                if self.cursor.peek_nth(1) == Some(&Token::LParen) =>
            {
                let name = match token {
                    Token::Identifier(name) => name.to_uppercase(),
                    Token::Keyword(keyword) => keyword.as_str().to_string(),
                    _ => unreachable!(),
                };
                self.cursor.bump(); // name
                self.cursor.bump(); // (
                return self.parse_call_arguments(name);
            }

            Token::Identifier(name) | Token::Param(name) => {
                self.cursor.bump();
                return Ok(self.parse_member_chain(Expr::Identifier(name.clone())));
            }

            other => {
                return Err(ParseError::ExpectedExpression {
                    found: other.to_string(),
                    offset,
                });
            }
        };

        self.cursor.bump();
        Ok(expr)
    }

    fn parse_call_arguments(&mut self, name: String) -> ParseResult<Expr> {
        let mut args = Vec::new();

        if !self.cursor.eat(&Token::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.cursor.eat(&Token::Comma) {
                    break;
                }
            }
            // tolerated when missing
            self.cursor.eat(&Token::RParen);
        }

        Ok(Expr::FunctionCall { name, args })
    }

    fn parse_member_chain(&mut self, root: Expr) -> Expr {
        let mut expr = root;

        while self.cursor.peek() == Some(&Token::Dot) {
            let Some(Token::Identifier(property)) = self.cursor.peek_nth(1) else {
                break;
            };
            self.cursor.bump(); // .
            self.cursor.bump(); // property
            expr = Expr::member(expr, property.clone());
        }
        expr
    }

    /// Parse a parenthesized group as a subquery. The opening `(` has been
    /// consumed; an unterminated group runs to the end of input.
    fn parse_subquery(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.position();
        let mut nesting = 1usize;
        let mut closing: Option<&Spanned> = None;

        while let Some(spanned) = self.cursor.bump() {
            match spanned.token {
                Token::LParen => nesting += 1,
                Token::RParen => {
                    nesting -= 1;
                    if nesting == 0 {
                        closing = Some(spanned);
                        break;
                    }
                }
                _ => {}
            }
        }

        let (end, end_offset) = match closing {
            Some(spanned) => (self.cursor.position() - 1, spanned.span.start),
            None => {
                warn!("unterminated group, reading subquery to end of input");
                (self.cursor.position(), self.cursor.end_offset())
            }
        };

        let depth = self.depth + 1;
        if depth > self.options.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }

        debug!("entering subquery of {} tokens at depth {}", end - start, depth);

        let mut child = Session {
            cursor: Cursor::new(self.cursor.slice(start, end), end_offset),
            options: self.options,
            subquery: true,
            let_context: self.let_context,
            depth,
        };
        let query = child.parse_query()?;

        // Authoritative regardless of what the child produced.
        let body = query.body.into_iter().map(Statement::into_elided).collect();
        Ok(Expr::Subquery(Box::new(Query::new(body))))
    }
}
