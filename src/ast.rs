//! # Query IR
//!
//! The intermediate representation produced by the parser. Downstream
//! tooling walks this tree to learn the shape of a query (loop variables,
//! filters, sort keys, limits, bindings) without re-reading the text.
//!
//! ## Layout
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, names, access, calls, operations)
//! - **[operators]** - Logical and comparison operators
//! - **[statements]** - The five statement kinds and the `Omitted` marker
//! - **[query]** - The root node
//!
//! ## Example
//!
//! ```text
//! FOR u IN users FILTER u.age > 30 SORT u.name LIMIT 10
//! ```
//!
//! parses to a [`Query`] whose body is
//!
//! ```text
//! For { u, users }
//! Filter { BinaryOp(>, Member(u, age), 30) }
//! Sort { [Member(u, name) ASC] }
//! Limit { offset: 0, count: 10 }
//! ```
//!
//! ## Omitted bodies
//!
//! FILTER and SORT clauses inside a parenthesized subquery, or anywhere in a
//! query that binds variables with `LET`, are stepped over and recorded as
//! [`Omittable::Omitted`]. Only their position in the body is kept.
pub mod tokens;
pub mod expressions;
pub mod operators;
pub mod statements;
pub mod query;

pub use tokens::{Keyword, Span, Spanned, Token};
pub use expressions::{Expr, Literal};
pub use operators::BinOp;
pub use statements::{Direction, LimitValue, Omittable, SortCriterion, Statement};
pub use query::Query;
