//! Type descriptor for registering the `JSON` scalar into a schema.

use serde_json::Value;

use crate::coerce;
use crate::error::Result;
use crate::literal::Literal;

/// Name under which the scalar is registered.
pub const JSON_SCALAR_NAME: &str = "JSON";

/// Human-readable description carried by the scalar type.
pub const JSON_SCALAR_DESCRIPTION: &str = "The `JSON` scalar type represents JSON values as \
     specified by [ECMA-404](http://www.ecma-international.org/publications/files/ECMA-ST/ECMA-404.pdf).";

/// A custom scalar type: its identity plus its three coercion functions.
///
/// Schema builders read the name and description and call the function
/// pointers at output, variable binding and literal embedding.
#[derive(Debug, Clone, Copy)]
pub struct ScalarDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub serialize: fn(Value) -> Value,
    pub parse_value: fn(Value) -> Value,
    pub parse_literal: fn(&Literal) -> Result<Value>,
}

/// The `JSON` scalar.
pub const JSON_SCALAR: ScalarDescriptor = ScalarDescriptor {
    name: JSON_SCALAR_NAME,
    description: JSON_SCALAR_DESCRIPTION,
    serialize: coerce::serialize,
    parse_value: coerce::parse_value,
    parse_literal: coerce::parse_literal,
};

impl ScalarDescriptor {
    pub fn serialize(&self, value: Value) -> Value {
        (self.serialize)(value)
    }

    pub fn parse_value(&self, value: Value) -> Value {
        (self.parse_value)(value)
    }

    pub fn parse_literal(&self, node: &Literal) -> Result<Value> {
        (self.parse_literal)(node)
    }
}
