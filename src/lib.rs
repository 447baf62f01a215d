#![forbid(unsafe_code)]
//! dubbogen: Go stub generator for the dubbo-go RPC runtime
//!
//! Given a normalized description of RPC services (the IR, built upstream from a schema), this crate deterministically
//! produces one Go source unit containing client stubs, server handler interfaces and the metadata tables the dubbo-go
//! runtime uses for dynamic dispatch.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: registry lookups in `dubbogen_core` use `.expect(...)` for entries that are guaranteed to
//!   exist, and document it under `## Panics`.

pub mod backend;
pub mod cli;
pub mod config;
pub mod ir;
pub mod version;

pub use backend::{Codegen, GenerationError};
pub use config::GeneratorConfig;
pub use ir::{Dubbogo, Method, Service};
