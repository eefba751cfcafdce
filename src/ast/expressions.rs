use crate::ast::{BinOp, Query};
use rust_decimal::Decimal;

/// Literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Unquoted string contents
    String(String),
    /// Numeric literal, kept exact
    Number(Decimal),
    /// Numeric literal beyond `Decimal` range
    Float(f64),
    Boolean(bool),
    Null,
}

/// IR node for an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value
    ///
    /// # Examples
    /// ```text
    /// 'monthly'
    /// 30
    /// true
    /// null
    /// ```
    Literal(Literal),

    /// Variable or bound parameter
    ///
    /// Bound parameters keep their sigil, so `@userId` is
    /// `Identifier("@userId")`.
    Identifier(String),

    /// Property access
    ///
    /// Dotted chains nest to the left: `q.metadata.isSaved` is
    /// `Member { object: Member { object: q, property: metadata }, property: isSaved }`.
    Member {
        object: Box<Expr>,
        property: String,
    },

    /// Function call, name normalized to uppercase
    ///
    /// # Example
    /// ```text
    /// lower(u.name)    // FunctionCall { name: "LOWER", .. }
    /// ```
    FunctionCall {
        name: String,
        args: Vec<Expr>,
    },

    /// Logical or comparison operation
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Parenthesized group, parsed as its own statement sequence
    ///
    /// # Example
    /// ```text
    /// ( FOR a IN analytics FILTER a.type == 'query' RETURN a )
    /// ```
    Subquery(Box<Query>),
}

impl Expr {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn number(value: impl Into<Decimal>) -> Self {
        Expr::Literal(Literal::Number(value.into()))
    }

    pub fn member(object: Expr, property: impl Into<String>) -> Self {
        Expr::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
