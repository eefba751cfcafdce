use thiserror::Error;

/// Errors that abort a parse.
///
/// Offsets are byte offsets into the query text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expected variable name at offset {offset}")]
    ExpectedVariableName { offset: usize },

    #[error("Expected collection name at offset {offset}")]
    ExpectedCollectionName { offset: usize },

    #[error("Expected expression at offset {offset}, found {found}")]
    ExpectedExpression { found: String, offset: usize },

    #[error("Unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("Query nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;
