//! Identifier helpers for schema names that end up as Go symbols.
//!
//! ## Notes
//! - Go exports a symbol when its first character is an upper-case letter; [`to_exported`] applies exactly that rule
//!   and nothing else (no snake/camel case conversion).
//! - Identifier legality follows the Go specification restricted to ASCII, which is what schema identifiers
//!   produce in practice.

use crate::lang::keywords;

/// Upper-case the first character of `name`, leaving the rest untouched.
///
/// ## Examples
/// ```rust
/// use dubbogen_core::idents::to_exported;
///
/// assert_eq!(to_exported("getOrder"), "GetOrder");
/// assert_eq!(to_exported("GetOrder"), "GetOrder");
/// assert_eq!(to_exported(""), "");
/// ```
pub fn to_exported(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check whether `name` is a syntactically legal Go identifier (ASCII subset).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic()) && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Check whether `name` can be declared as a Go identifier (legal and not a keyword).
pub fn is_declarable(name: &str) -> bool {
    is_identifier(name) && !keywords::is_keyword(name) && name != "_"
}

/// Flatten a dotted schema package (`shop.v1`) into a single label (`shop_v1`).
pub fn package_label(proto_package: &str) -> String {
    proto_package.replace('.', "_")
}
