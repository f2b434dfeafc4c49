//! The three coercions of the `JSON` scalar.
//!
//! - [`serialize`] — internal value → output value (identity)
//! - [`parse_value`] — variable value → internal value (identity)
//! - [`parse_literal`] — literal node → internal value (recursive walk)
//!
//! Values handed to `serialize` and `parse_value` are already in the JSON
//! value model, so both are the identity on [`serde_json::Value`]. Only
//! literals need conversion: `parse_literal` dispatches on the node kind,
//! copies primitives, rebuilds lists and objects from their coerced children,
//! and rejects the kinds JSON has no counterpart for.

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{JsonScalarError, Result};
use crate::literal::Literal;

/// Coerce an internal value for output. Never fails.
pub fn serialize(value: Value) -> Value {
    value
}

/// Coerce a variable value into the internal representation. Never fails.
pub fn parse_value(value: Value) -> Value {
    value
}

/// Coerce a literal node into a JSON value.
///
/// The result shares nothing with `node`. Object fields are inserted in
/// source order, so a repeated field name keeps its first position and its
/// last value.
///
/// # Errors
///
/// - [`JsonScalarError::InvalidLiteralKind`] for `EnumValue` and `Variable`
///   nodes anywhere in the tree.
/// - [`JsonScalarError::InvalidNumber`] for a numeric literal that is not a
///   finite number.
pub fn parse_literal(node: &Literal) -> Result<Value> {
    match node {
        Literal::Int(digits) => parse_int(digits).map(Value::Number),
        Literal::Float(digits) => parse_float(digits).map(Value::Number),
        Literal::String(s) => Ok(Value::String(s.clone())),
        Literal::Boolean(b) => Ok(Value::Bool(*b)),
        Literal::Null => Ok(Value::Null),
        Literal::List(items) => items
            .iter()
            .map(parse_literal)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Literal::Object(fields) => {
            let mut map = Map::with_capacity(fields.len());
            for (name, value) in fields {
                map.insert(name.clone(), parse_literal(value)?);
            }
            Ok(Value::Object(map))
        }
        Literal::Enum(_) | Literal::Variable(_) => {
            let kind = node.kind();
            debug!(%kind, "rejecting literal with no JSON counterpart");
            Err(JsonScalarError::invalid_kind(kind.as_str()))
        }
    }
}

/// Integers try `i64`, then `u64`, then fall back to a (possibly lossy) `f64`.
fn parse_int(digits: &str) -> Result<Number> {
    if let Ok(n) = digits.parse::<i64>() {
        return Ok(n.into());
    }
    if let Ok(n) = digits.parse::<u64>() {
        return Ok(n.into());
    }
    parse_float(digits)
}

fn parse_float(digits: &str) -> Result<Number> {
    digits
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| {
            debug!(literal = digits, "rejecting non-finite number literal");
            JsonScalarError::InvalidNumber {
                literal: digits.to_string(),
            }
        })
}
