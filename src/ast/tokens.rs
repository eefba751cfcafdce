use rust_decimal::Decimal;
use std::fmt;

/// Reserved words of the query language.
///
/// Keywords are matched case-insensitively. A word that directly follows a
/// `.` is never a keyword (`doc.limit` is a property access).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    For,
    Filter,
    Sort,
    Limit,
    Let,
    Return,
    Collect,
    In,
    And,
    Or,
    Like,
    Asc,
    Desc,
}

impl Keyword {
    pub fn from_word(word: &str) -> Option<Keyword> {
        let keyword = match word.to_ascii_uppercase().as_str() {
            "FOR" => Keyword::For,
            "FILTER" => Keyword::Filter,
            "SORT" => Keyword::Sort,
            "LIMIT" => Keyword::Limit,
            "LET" => Keyword::Let,
            "RETURN" => Keyword::Return,
            "COLLECT" => Keyword::Collect,
            "IN" => Keyword::In,
            "AND" => Keyword::And,
            "OR" => Keyword::Or,
            "LIKE" => Keyword::Like,
            "ASC" => Keyword::Asc,
            "DESC" => Keyword::Desc,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::For => "FOR",
            Keyword::Filter => "FILTER",
            Keyword::Sort => "SORT",
            Keyword::Limit => "LIMIT",
            Keyword::Let => "LET",
            Keyword::Return => "RETURN",
            Keyword::Collect => "COLLECT",
            Keyword::In => "IN",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Like => "LIKE",
            Keyword::Asc => "ASC",
            Keyword::Desc => "DESC",
        }
    }

    /// Keywords that open a top-level clause. Skipping stops in front of them.
    pub fn starts_clause(&self) -> bool {
        matches!(
            self,
            Keyword::For
                | Keyword::Filter
                | Keyword::Sort
                | Keyword::Limit
                | Keyword::Let
                | Keyword::Return
                | Keyword::Collect
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Numeric literal, with an optional leading minus
    ///
    /// # Examples
    /// ```text
    /// 10
    /// -1
    /// 0.5
    /// ```
    Number(Decimal),

    /// Numeric literal too large for [`Decimal`], kept as a float
    Float(f64),

    /// String literal in single or double quotes
    ///
    /// # Examples
    /// ```text
    /// 'monthly'
    /// "day"
    /// ```
    String(String),

    /// Opening quote that is never closed. Holds everything up to the end of
    /// input; the parser rejects it only where it needs a value.
    OpenString(String),

    /// `true` / `false`, any casing
    Boolean(bool),

    /// `null`, any casing
    Null,

    // Names
    /// Variable, collection, property or function name
    ///
    /// # Examples
    /// ```text
    /// users
    /// _key
    /// DATE_NOW
    /// ```
    Identifier(String),

    /// Bound parameter, sigil included
    ///
    /// # Examples
    /// ```text
    /// @userId
    /// @@collection
    /// ```
    Param(String),

    /// Reserved word
    Keyword(Keyword),

    // Operators
    /// `=` in `LET name = ...`
    Assign,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    /// `&&`, alias of `AND`
    AmpAmp,
    /// `||`, alias of `OR`
    PipePipe,

    // Delimiters
    LParen,
    RParen,
    Comma,
    Dot,

    /// Any other single character (`[`, `{`, `*`, `:` ...). The parser only
    /// ever skips over these.
    Symbol(char),

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Float(n) => write!(f, "number {}", n),
            Token::String(s) => write!(f, "string {:?}", s),
            Token::OpenString(_) => write!(f, "unterminated string"),
            Token::Boolean(b) => write!(f, "'{}'", b),
            Token::Null => write!(f, "'null'"),
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::Param(name) => write!(f, "parameter '{}'", name),
            Token::Keyword(k) => write!(f, "keyword '{}'", k.as_str()),
            Token::Assign => write!(f, "'='"),
            Token::EqEq => write!(f, "'=='"),
            Token::NotEq => write!(f, "'!='"),
            Token::Lt => write!(f, "'<'"),
            Token::Gt => write!(f, "'>'"),
            Token::LtEq => write!(f, "'<='"),
            Token::GtEq => write!(f, "'>='"),
            Token::AmpAmp => write!(f, "'&&'"),
            Token::PipePipe => write!(f, "'||'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
            Token::Dot => write!(f, "'.'"),
            Token::Symbol(c) => write!(f, "'{}'", c),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// Byte range of a token in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A token together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}
