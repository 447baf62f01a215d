//! Reserved Go keywords (for identifier validation in the IR).
//!
//! ## Notes
//! - Predeclared identifiers (`string`, `nil`, `len`, ...) are *not* keywords: Go lets a declaration shadow them. The
//!   ones generated code relies on are reserved separately, see [`super::bindings`].

/// The 25 reserved keywords of the Go specification.
pub const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for", "func", "go", "goto",
    "if", "import", "interface", "map", "package", "range", "return", "select", "struct", "switch", "type", "var",
];

/// Check whether an identifier is a Go keyword.
pub fn is_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}
