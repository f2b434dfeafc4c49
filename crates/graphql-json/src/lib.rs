//! # graphql-json
//!
//! The `JSON` custom scalar for GraphQL: a scalar whose values are arbitrary
//! JSON (strings, numbers, booleans, null, nested objects and arrays) in a type
//! system that otherwise wants every value to have a named type.
//!
//! A custom scalar supplies three coercions. Two are trivial for JSON, because
//! output values and variable values are already JSON; the third walks a
//! literal written inline in a query document and rebuilds it as JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use graphql_json::{coerce_str, parse_literal, Literal, JSON_SCALAR};
//! use serde_json::json;
//!
//! // Literal text → JSON
//! let value = coerce_str(r#"{ name: "Alice", scores: [95, 87.5], admin: null }"#).unwrap();
//! assert_eq!(value, json!({"name": "Alice", "scores": [95, 87.5], "admin": null}));
//!
//! // Enum values have no JSON counterpart
//! assert!(parse_literal(&Literal::Enum("NaN".into())).is_err());
//!
//! // The scalar descriptor a schema builder registers
//! assert_eq!(JSON_SCALAR.name, "JSON");
//! assert_eq!(JSON_SCALAR.serialize(json!([1, 2])), json!([1, 2]));
//! ```
//!
//! ## Modules
//!
//! - [`literal`] — `Literal` syntax-tree nodes and their kinds
//! - [`coerce`] — `serialize`, `parse_value`, `parse_literal`
//! - [`scalar`] — `ScalarDescriptor` and the `JSON_SCALAR` constant
//! - [`parser`] — literal text → `Literal`
//! - [`printer`] — JSON value → `Literal` / literal text
//! - [`error`] — Error types for coercion and parse failures
//! - `graphql` — `Json` scalar for async-graphql schemas (feature `async-graphql`)

pub mod coerce;
pub mod error;
#[cfg(feature = "async-graphql")]
pub mod graphql;
pub mod literal;
pub mod parser;
pub mod printer;
pub mod scalar;

pub use coerce::{parse_literal, parse_value, serialize};
pub use error::JsonScalarError;
#[cfg(feature = "async-graphql")]
pub use graphql::Json;
pub use literal::{Literal, LiteralKind};
pub use parser::{coerce_str, parse_literal_str, MAX_DEPTH};
pub use printer::{print_value, value_to_literal};
pub use scalar::{ScalarDescriptor, JSON_SCALAR, JSON_SCALAR_DESCRIPTION, JSON_SCALAR_NAME};
