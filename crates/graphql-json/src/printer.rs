//! JSON value → GraphQL literal syntax.
//!
//! The inverse of [`crate::parser`] followed by [`crate::coerce::parse_literal`]:
//! a JSON value is turned back into a [`Literal`] tree, which prints as a
//! single-line value that can be pasted into a query document.
//!
//! Object keys must be GraphQL names. JSON allows any string as a key, so
//! conversion fails with [`JsonScalarError::InvalidName`] for keys such as
//! `"first name"` or `"1st"`.

use std::fmt::{self, Write};

use serde_json::Value;

use crate::error::{JsonScalarError, Result};
use crate::literal::Literal;
use crate::parser::is_name;

/// Convert a JSON value into the literal that coerces back to it.
pub fn value_to_literal(value: &Value) -> Result<Literal> {
    Ok(match value {
        Value::Null => Literal::Null,
        Value::Bool(b) => Literal::Boolean(*b),
        Value::Number(n) if n.is_f64() => Literal::Float(n.to_string()),
        Value::Number(n) => Literal::Int(n.to_string()),
        Value::String(s) => Literal::String(s.clone()),
        Value::Array(items) => Literal::List(
            items
                .iter()
                .map(value_to_literal)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(map) => {
            let mut fields = Vec::with_capacity(map.len());
            for (key, value) in map {
                if !is_name(key) {
                    return Err(JsonScalarError::InvalidName { name: key.clone() });
                }
                fields.push((key.clone(), value_to_literal(value)?));
            }
            Literal::Object(fields)
        }
    })
}

/// Print a JSON value in GraphQL literal syntax.
pub fn print_value(value: &Value) -> Result<String> {
    Ok(value_to_literal(value)?.to_string())
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(digits) | Literal::Float(digits) => f.write_str(digits),
            Literal::String(s) => write_quoted(f, s),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::Null => f.write_str("null"),
            Literal::Enum(name) => f.write_str(name),
            Literal::Variable(name) => write!(f, "${name}"),
            Literal::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Literal::Object(fields) => {
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str(" }")
            }
        }
    }
}

/// Write `s` as a quoted string, escaping quotes, backslashes and control
/// characters.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
