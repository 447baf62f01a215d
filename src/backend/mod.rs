//! dubbogen backend
//!
//! This module turns a service IR into Go source text for the dubbo-go runtime.
//!
//! The pipeline is:
//! 1. IR (programmatic or JSON) → optional validation ([`crate::ir::validate`])
//! 2. `GoEmitter` runs the nine emission passes into one `GoWriter`
//! 3. The caller writes the returned text wherever it wants; the backend performs no IO
//!
//! ## Module Organization
//!
//! - `codegen.rs` - `Codegen` facade and `GenerationError`
//! - `emit/` - Emission passes
//!   - `mod.rs` - `GoEmitter` and the fixed pass order
//!   - `naming.rs` - Generated symbol names
//!   - `signature.rs` - Argument-list and return-type builders
//!   - `header.rs`, `consts.rs`, `client.rs`, `client_info.rs`, `handler.rs`, `service_info.rs` - One file per pass group
//! - `go_writer.rs` - Low-level Go source string builder

#![deny(clippy::unwrap_used)]

pub mod codegen;
pub mod emit;
pub mod go_writer;

pub use codegen::{Codegen, GenerationError};
pub use emit::{EmitPass, GoEmitter};
pub use go_writer::GoWriter;
