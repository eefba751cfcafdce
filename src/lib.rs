pub mod ast;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{
    BinOp, Direction, Expr, Keyword, LimitValue, Literal, Omittable, Query, SortCriterion,
    Statement, Token,
};
pub use error::{ParseError, ParseResult};
pub use lexer::{Lexer, tokenize};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseOptions, Parser, parse};
