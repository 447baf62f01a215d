//! Provide the Go target vocabulary shared by the `dubbogen` emitter and its tooling.
//!
//! This crate is intentionally small and dependency-free. It answers questions the emitter would otherwise answer with
//! scattered string literals:
//! - which spellings are Go builtin types, and what their zero value is,
//! - which spellings are reserved Go keywords,
//! - which identifiers generated code binds or calls itself,
//! - which dubbo-go runtime modules a generated file imports,
//! - how schema identifiers are turned into exported Go identifiers.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no emitter-specific types.
//! - Registries are `const` tables keyed by stable IDs; prefer the IDs over raw strings at call sites.

pub mod idents;
pub mod lang;
