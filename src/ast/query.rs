use crate::ast::Statement;

/// Root of every parse result, including each parsed subquery.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    /// Statements in source order
    pub body: Vec<Statement>,
}

impl Query {
    pub fn new(body: Vec<Statement>) -> Self {
        Query { body }
    }
}
