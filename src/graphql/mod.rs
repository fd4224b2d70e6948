//! Minimal GraphQL-over-HTTP plumbing: one POST per document, raw outcome back.

pub mod client;
pub mod envelope;
pub mod error;

pub use client::*;
pub use envelope::*;
pub use error::*;

/// Render `value` as a GraphQL string literal.
///
/// JSON string escapes are a subset of GraphQL's, so the JSON encoding is a
/// valid literal.
pub fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}
