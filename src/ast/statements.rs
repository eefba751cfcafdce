use crate::ast::Expr;
use rust_decimal::Decimal;

/// Either a parsed body, or the marker saying it was skipped on purpose.
///
/// `Omitted` is not an error: the clause was recognized and stepped over
/// syntactically but never resolved into a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Omittable<T> {
    Parsed(T),
    Omitted,
}

impl<T> Omittable<T> {
    pub fn as_parsed(&self) -> Option<&T> {
        match self {
            Omittable::Parsed(value) => Some(value),
            Omittable::Omitted => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// One `expression [ASC|DESC]` entry of a SORT clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SortCriterion {
    pub expression: Expr,
    pub direction: Direction,
}

/// Offset or count of a LIMIT clause.
#[derive(Debug, Clone, PartialEq)]
pub enum LimitValue {
    /// Raw number (implicit offset, or an unwrapped single-argument count)
    Number(Decimal),
    /// Anything else, e.g. a bound parameter
    Expr(Expr),
}

/// Query statement.
///
/// A query body is an ordered sequence of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Iteration over a collection or bound parameter
    ///
    /// # Example
    /// ```text
    /// FOR u IN users
    /// FOR word IN @words
    /// ```
    For {
        variable_name: String,
        collection_name: String,
    },

    /// Filter condition
    ///
    /// # Example
    /// ```text
    /// FILTER u.age > 30 AND u.status == "active"
    /// ```
    Filter { condition: Omittable<Expr> },

    /// Sort criteria
    ///
    /// # Example
    /// ```text
    /// SORT folder.order ASC, folder.created ASC
    /// ```
    Sort {
        criteria: Omittable<Vec<SortCriterion>>,
    },

    /// Result window
    ///
    /// # Example
    /// ```text
    /// LIMIT 10          // offset 0, count 10
    /// LIMIT @o, @l
    /// ```
    Limit { offset: LimitValue, count: LimitValue },

    /// Variable binding
    ///
    /// # Example
    /// ```text
    /// LET conversation = DOCUMENT(edge._to)
    /// ```
    Let {
        variable_name: String,
        expression: Expr,
    },
}

impl Statement {
    /// Replace FILTER/SORT bodies with `Omitted`; other statements are
    /// returned as they are.
    pub fn into_elided(self) -> Statement {
        match self {
            Statement::Filter { .. } => Statement::Filter {
                condition: Omittable::Omitted,
            },
            Statement::Sort { .. } => Statement::Sort {
                criteria: Omittable::Omitted,
            },
            other => other,
        }
    }
}
