//! Literal syntax-tree nodes for GraphQL constant values.
//!
//! A [`Literal`] is the parsed, typed form of one value written inline in a
//! query document. Its variants mirror the literal grammar of the query
//! language: the seven kinds that have a JSON counterpart, plus the two kinds
//! that do not ([`Literal::Enum`] and [`Literal::Variable`]). Coercion into
//! JSON lives in [`crate::coerce`]; this module only describes the tree.

use std::fmt;

/// Kind discriminator of a [`Literal`], named after the query-language grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
    Variable,
}

impl LiteralKind {
    /// Grammar name of the kind, e.g. `IntValue`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LiteralKind::Int => "IntValue",
            LiteralKind::Float => "FloatValue",
            LiteralKind::String => "StringValue",
            LiteralKind::Boolean => "BooleanValue",
            LiteralKind::Null => "NullValue",
            LiteralKind::Enum => "EnumValue",
            LiteralKind::List => "ListValue",
            LiteralKind::Object => "ObjectValue",
            LiteralKind::Variable => "Variable",
        }
    }

    /// Whether literals of this kind have a JSON counterpart.
    pub fn is_json(&self) -> bool {
        !matches!(self, LiteralKind::Enum | LiteralKind::Variable)
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal syntax-tree node.
///
/// Numbers keep their source digit strings; turning them into numeric values
/// is part of coercion. Object fields are kept in source order and may repeat.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Decimal digit string, optionally signed: `-12`.
    Int(String),
    /// Decimal string with fraction and/or exponent: `3.14`, `1e-7`.
    Float(String),
    String(String),
    Boolean(bool),
    Null,
    /// Bare name that is not `true`, `false` or `null`.
    Enum(String),
    List(Vec<Literal>),
    /// Field name and value pairs in source order.
    Object(Vec<(String, Literal)>),
    /// Variable reference, without the leading `$`.
    Variable(String),
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Int(_) => LiteralKind::Int,
            Literal::Float(_) => LiteralKind::Float,
            Literal::String(_) => LiteralKind::String,
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::Null => LiteralKind::Null,
            Literal::Enum(_) => LiteralKind::Enum,
            Literal::List(_) => LiteralKind::List,
            Literal::Object(_) => LiteralKind::Object,
            Literal::Variable(_) => LiteralKind::Variable,
        }
    }

    /// Look up the last field named `name` of an object literal.
    ///
    /// Returns `None` for non-object literals. The last occurrence wins, the
    /// same rule coercion applies to duplicated field names.
    pub fn field(&self, name: &str) -> Option<&Literal> {
        match self {
            Literal::Object(fields) => fields
                .iter()
                .rev()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n.to_string())
    }
}

impl From<Vec<Literal>> for Literal {
    fn from(items: Vec<Literal>) -> Self {
        Literal::List(items)
    }
}
