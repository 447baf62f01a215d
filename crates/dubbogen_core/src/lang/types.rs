//! Go builtin type vocabulary.
//!
//! This registry covers Go's predeclared *basic* types (booleans, strings and numerics) together with the literal
//! spelling of their zero value. The emitter uses it to pick the value returned alongside an error, and to decide
//! whether a response holder is dereferenced before it crosses the interface boundary.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (Go identifiers are).
//! - `byte` and `rune` are aliases of `uint8` and `int32`, exactly as in the Go specification.
//! - [`classify`] works on arbitrary type expressions (`*Foo`, `[]string`, `map[string]int`, `pkg.Reply`, ...).
//!
//! ## Examples
//! ```rust
//! use dubbogen_core::lang::types::{self, GoTypeId, TypeShape};
//!
//! assert_eq!(types::from_str("byte"), Some(GoTypeId::Uint8));
//! assert_eq!(types::as_str(GoTypeId::Uint8), "uint8");
//! assert_eq!(types::classify("[]string"), TypeShape::Nilable);
//! assert_eq!(types::zero_value_of("GetOrderReply"), "*new(GetOrderReply)");
//! ```

use std::borrow::Cow;

/// Stable identifier for Go basic types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoTypeId {
    Bool,
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
}

/// Kind grouping that decides the zero-value literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoTypeKind {
    Boolean,
    String,
    Integer,
    Float,
    Complex,
}

/// Metadata for a Go basic type.
#[derive(Debug, Clone, Copy)]
pub struct GoTypeInfo {
    pub id: GoTypeId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: GoTypeKind,
    /// Literal spelling of the zero value.
    pub zero: &'static str,
}

/// Registry of Go basic types.
pub const GO_TYPES: &[GoTypeInfo] = &[
    info(GoTypeId::Bool, "bool", &[], GoTypeKind::Boolean),
    info(GoTypeId::String, "string", &[], GoTypeKind::String),
    info(GoTypeId::Int, "int", &[], GoTypeKind::Integer),
    info(GoTypeId::Int8, "int8", &[], GoTypeKind::Integer),
    info(GoTypeId::Int16, "int16", &[], GoTypeKind::Integer),
    info(GoTypeId::Int32, "int32", &["rune"], GoTypeKind::Integer),
    info(GoTypeId::Int64, "int64", &[], GoTypeKind::Integer),
    info(GoTypeId::Uint, "uint", &[], GoTypeKind::Integer),
    info(GoTypeId::Uint8, "uint8", &["byte"], GoTypeKind::Integer),
    info(GoTypeId::Uint16, "uint16", &[], GoTypeKind::Integer),
    info(GoTypeId::Uint32, "uint32", &[], GoTypeKind::Integer),
    info(GoTypeId::Uint64, "uint64", &[], GoTypeKind::Integer),
    info(GoTypeId::Uintptr, "uintptr", &[], GoTypeKind::Integer),
    info(GoTypeId::Float32, "float32", &[], GoTypeKind::Float),
    info(GoTypeId::Float64, "float64", &[], GoTypeKind::Float),
    info(GoTypeId::Complex64, "complex64", &[], GoTypeKind::Complex),
    info(GoTypeId::Complex128, "complex128", &[], GoTypeKind::Complex),
];

/// Resolve a type spelling to a [`GoTypeId`].
///
/// ## Returns
/// - `Some(GoTypeId)` if the spelling is a basic type (canonical or alias).
/// - `None` otherwise (named types, pointers, slices, ...).
pub fn from_str(name: &str) -> Option<GoTypeId> {
    GO_TYPES
        .iter()
        .find(|t| t.canonical == name || t.aliases.contains(&name))
        .map(|t| t.id)
}

/// Return the canonical spelling for a basic type.
pub fn as_str(id: GoTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the zero-value literal for a basic type.
pub fn zero_value(id: GoTypeId) -> &'static str {
    info_for(id).zero
}

/// Return the full metadata entry for a basic type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: GoTypeId) -> &'static GoTypeInfo {
    GO_TYPES.iter().find(|t| t.id == id).expect("go type info missing")
}

/// Coarse shape of an arbitrary Go type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// A predeclared basic type with a literal zero value.
    Basic(GoTypeId),
    /// Pointer, slice, map, channel, function or interface: the zero value is `nil`.
    Nilable,
    /// Anything else (named struct types, arrays, qualified types).
    Composite,
}

const NILABLE_PREFIXES: &[&str] = &["*", "[]", "map[", "chan ", "chan<-", "<-chan", "func(", "interface{", "interface {"];
const NILABLE_NAMES: &[&str] = &["any", "error"];

/// Classify a type expression.
///
/// ## Notes
/// - Leading/trailing whitespace is ignored.
/// - Fixed-size arrays (`[4]byte`) are composite: their zero value is not `nil`.
pub fn classify(ty: &str) -> TypeShape {
    let ty = ty.trim();
    if let Some(id) = from_str(ty) {
        return TypeShape::Basic(id);
    }
    if NILABLE_NAMES.contains(&ty) || NILABLE_PREFIXES.iter().any(|p| ty.starts_with(p)) {
        return TypeShape::Nilable;
    }
    TypeShape::Composite
}

/// Return a Go expression evaluating to the zero value of `ty`.
///
/// ## Returns
/// - The registry literal for basic types (`false`, `""`, `0`).
/// - `nil` for nil-able kinds.
/// - `*new(T)` for every other type, which is valid Go for any `T`.
pub fn zero_value_of(ty: &str) -> Cow<'static, str> {
    match classify(ty) {
        TypeShape::Basic(id) => Cow::Borrowed(zero_value(id)),
        TypeShape::Nilable => Cow::Borrowed("nil"),
        TypeShape::Composite => Cow::Owned(format!("*new({})", ty.trim())),
    }
}

const fn info(
    id: GoTypeId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    kind: GoTypeKind,
) -> GoTypeInfo {
    let zero = match kind {
        GoTypeKind::Boolean => "false",
        GoTypeKind::String => "\"\"",
        GoTypeKind::Integer | GoTypeKind::Float | GoTypeKind::Complex => "0",
    };
    GoTypeInfo {
        id,
        canonical,
        aliases,
        kind,
        zero,
    }
}
