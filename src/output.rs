//! JSON rendering of the query IR.
//!
//! The shape is the one the translation stage downstream consumes: every node
//! is an object with a `"type"` tag and camelCase fields, and the `Omitted`
//! marker is the bare string `"Omitted"`.
//!
//! # Examples
//!
//! ```
//! use aqlir::output::to_value;
//! use serde_json::json;
//!
//! let query = aqlir::parse("FOR s IN sessions").unwrap();
//! assert_eq!(
//!     to_value(&query),
//!     json!({
//!         "type": "Query",
//!         "body": [{ "type": "ForStatement", "variableName": "s", "collectionName": "sessions" }]
//!     })
//! );
//! ```

use crate::ast::{Expr, LimitValue, Literal, Query, SortCriterion, Statement};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde_json::{Value, json};

const OMITTED: &str = "Omitted";

/// Convert a query to a JSON value.
pub fn to_value(query: &Query) -> Value {
    let body: Vec<Value> = query.body.iter().map(statement_to_value).collect();
    json!({ "type": "Query", "body": body })
}

pub fn statement_to_value(statement: &Statement) -> Value {
    match statement {
        Statement::For {
            variable_name,
            collection_name,
        } => json!({
            "type": "ForStatement",
            "variableName": variable_name,
            "collectionName": collection_name,
        }),
        Statement::Filter { condition } => {
            let condition = condition
                .as_parsed()
                .map_or_else(|| Value::from(OMITTED), expr_to_value);
            json!({ "type": "FilterStatement", "condition": condition })
        }
        Statement::Sort { criteria } => {
            let criteria = criteria.as_parsed().map_or_else(
                || Value::from(OMITTED),
                |criteria| Value::Array(criteria.iter().map(criterion_to_value).collect()),
            );
            json!({ "type": "SortStatement", "criteria": criteria })
        }
        Statement::Limit { offset, count } => json!({
            "type": "LimitStatement",
            "offset": limit_to_value(offset),
            "count": limit_to_value(count),
        }),
        Statement::Let {
            variable_name,
            expression,
        } => json!({
            "type": "LetStatement",
            "variableName": variable_name,
            "expression": expr_to_value(expression),
        }),
    }
}

fn criterion_to_value(criterion: &SortCriterion) -> Value {
    json!({
        "expression": expr_to_value(&criterion.expression),
        "direction": criterion.direction.as_str(),
    })
}

fn limit_to_value(value: &LimitValue) -> Value {
    match value {
        LimitValue::Number(n) => number_to_value(n),
        LimitValue::Expr(expr) => expr_to_value(expr),
    }
}

pub fn expr_to_value(expr: &Expr) -> Value {
    match expr {
        Expr::Literal(literal) => json!({
            "type": "Literal",
            "value": literal_to_value(literal),
        }),
        Expr::Identifier(name) => json!({
            "type": "Identifier",
            "name": name,
        }),
        Expr::Member { object, property } => json!({
            "type": "MemberExpression",
            "object": expr_to_value(object),
            "property": property,
        }),
        Expr::FunctionCall { name, args } => {
            let args: Vec<Value> = args.iter().map(expr_to_value).collect();
            json!({ "type": "FunctionCall", "functionName": name, "args": args })
        }
        Expr::BinaryOp { op, left, right } => json!({
            "type": "BinaryOperation",
            "operator": op.as_str(),
            "left": expr_to_value(left),
            "right": expr_to_value(right),
        }),
        Expr::Subquery(query) => to_value(query),
    }
}

fn literal_to_value(literal: &Literal) -> Value {
    match literal {
        Literal::String(s) => Value::from(s.as_str()),
        Literal::Number(n) => number_to_value(n),
        Literal::Float(n) => float_to_value(*n),
        Literal::Boolean(b) => Value::Bool(*b),
        Literal::Null => Value::Null,
    }
}

/// Whole numbers become JSON integers (`1.0` renders as `1`); everything
/// else goes through `f64`.
fn number_to_value(n: &Decimal) -> Value {
    if n.fract().is_zero()
        && let Some(i) = n.to_i64()
    {
        return Value::from(i);
    }

    n.to_f64().map_or(Value::Null, float_to_value)
}

/// Non-finite values have no JSON form and render as `null`.
fn float_to_value(n: f64) -> Value {
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Compact JSON.
pub fn to_json(query: &Query) -> String {
    to_value(query).to_string()
}

/// JSON with 2-space indentation.
pub fn to_json_pretty(query: &Query) -> String {
    // Serializing a `Value` cannot fail.
    serde_json::to_string_pretty(&to_value(query)).unwrap_or_default()
}
