//! Go language vocabulary registries.
//!
//! This module is the "front door" for target-language vocabulary: builtin types (with zero values), reserved
//! keywords, the identifiers generated code binds, and the dubbo-go runtime modules every generated file imports.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IR types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use dubbogen_core::lang::types::{self, GoTypeId};
//!
//! assert_eq!(types::from_str("int64"), Some(GoTypeId::Int64));
//! assert_eq!(types::zero_value(GoTypeId::String), "\"\"");
//! ```

pub mod bindings;
pub mod keywords;
pub mod runtime;
pub mod types;
