//! `JSON` scalar for async-graphql schemas.
//!
//! async-graphql resolves variables before handing an input value to a scalar,
//! so literals and variables both arrive at [`ScalarType::parse`] as a
//! [`Value`]. The value is turned back into a [`Literal`] and goes through the
//! same walk as any other literal; enum values inside it are rejected there.

use async_graphql::{InputValueError, InputValueResult, Name, Scalar, ScalarType, Value};

use crate::coerce;
use crate::error::{self, JsonScalarError};
use crate::literal::Literal;

/// An arbitrary JSON value exposed as the `JSON` scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Json(pub serde_json::Value);

impl Json {
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Json {
    fn from(value: serde_json::Value) -> Self {
        Json(coerce::parse_value(value))
    }
}

/// The `JSON` scalar type represents JSON values as specified by
/// [ECMA-404](http://www.ecma-international.org/publications/files/ECMA-ST/ECMA-404.pdf).
#[Scalar(name = "JSON")]
impl ScalarType for Json {
    fn parse(value: Value) -> InputValueResult<Self> {
        let literal = literal_from_value(value).map_err(InputValueError::custom)?;
        let json = coerce::parse_literal(&literal).map_err(InputValueError::custom)?;
        Ok(Json(json))
    }

    fn is_valid(value: &Value) -> bool {
        literal_from_value(value.clone())
            .and_then(|literal| coerce::parse_literal(&literal))
            .is_ok()
    }

    fn to_value(&self) -> Value {
        value_from_json(coerce::serialize(self.0.clone()))
    }
}

/// Rebuild the literal tree for an engine value. Numbers written with a
/// fraction or exponent come back as floats, everything else as integers.
fn literal_from_value(value: Value) -> error::Result<Literal> {
    Ok(match value {
        Value::Null => Literal::Null,
        Value::Number(n) if n.is_f64() => Literal::Float(n.to_string()),
        Value::Number(n) => Literal::Int(n.to_string()),
        Value::String(s) => Literal::String(s),
        Value::Boolean(b) => Literal::Boolean(b),
        Value::Enum(name) => Literal::Enum(name.to_string()),
        Value::List(items) => Literal::List(
            items
                .into_iter()
                .map(literal_from_value)
                .collect::<error::Result<Vec<_>>>()?,
        ),
        Value::Object(map) => Literal::Object(
            map.into_iter()
                .map(|(name, value)| literal_from_value(value).map(|l| (name.to_string(), l)))
                .collect::<error::Result<Vec<_>>>()?,
        ),
        Value::Binary(_) => return Err(JsonScalarError::invalid_kind("Binary")),
    })
}

fn value_from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::List(items.into_iter().map(value_from_json).collect())
        }
        serde_json::Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (Name::new(key), value_from_json(value)))
                .collect(),
        ),
    }
}
