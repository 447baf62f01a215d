//! Emit Go stub source from the service IR.
//!
//! This module defines [`GoEmitter`] and the fixed list of emission passes. Each pass lives in its own submodule and
//! appends to one [`GoWriter`]; `mod.rs` only orders them.
//!
//! ## Notes
//! - Emission is pure: no validation, no IO, no state carried between runs. The same IR always yields the same bytes.
//! - Later passes refer to symbols declared by earlier ones (`<S>_ClientInfo` is used by the constructor before its
//!   declaration); Go resolves package-level declarations regardless of order.
//!
//! ## See also
//! - [`naming`]: the generated symbol scheme
//! - [`signature`]: argument-list and return-type builders shared by the client, handler and dispatch passes

mod client;
mod client_info;
mod consts;
mod handler;
mod header;
pub mod naming;
mod service_info;
mod signature;

use std::fmt;

use super::go_writer::GoWriter;
use crate::config::GeneratorConfig;
use crate::ir::Dubbogo;

/// One emission pass. [`EmitPass::ALL`] is the order passes run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitPass {
    /// Machine-generated marker and provenance comment.
    Preamble,
    /// Package clause.
    Package,
    /// Fixed runtime import block.
    Imports,
    /// Service-name and procedure-path constants.
    Constants,
    /// Compile-time interface satisfaction checks.
    TypeCheck,
    /// Client interface, constructor, consumer hook and implementation.
    Client,
    /// Client metadata tables.
    ClientInfo,
    /// Handler interface, registration function and provider hook.
    Handler,
    /// Server dispatch tables.
    ServiceInfo,
}

impl EmitPass {
    pub const ALL: [EmitPass; 9] = [
        EmitPass::Preamble,
        EmitPass::Package,
        EmitPass::Imports,
        EmitPass::Constants,
        EmitPass::TypeCheck,
        EmitPass::Client,
        EmitPass::ClientInfo,
        EmitPass::Handler,
        EmitPass::ServiceInfo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EmitPass::Preamble => "preamble",
            EmitPass::Package => "package",
            EmitPass::Imports => "imports",
            EmitPass::Constants => "constants",
            EmitPass::TypeCheck => "type-check",
            EmitPass::Client => "client",
            EmitPass::ClientInfo => "client-info",
            EmitPass::Handler => "handler",
            EmitPass::ServiceInfo => "service-info",
        }
    }
}

impl fmt::Display for EmitPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Emit Go stub source from the service IR.
pub struct GoEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> GoEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run every pass in order and return the complete source unit.
    #[tracing::instrument(skip_all, fields(services = ir.services.len()))]
    pub fn emit_file(&self, ir: &Dubbogo) -> String {
        let mut w = GoWriter::with_indent(self.config.indent.unit());
        for pass in EmitPass::ALL {
            let before = w.len();
            self.emit_pass(pass, ir, &mut w);
            tracing::debug!(pass = pass.name(), bytes = w.len() - before, "emitted pass");
        }
        w.finish()
    }

    /// Run a single pass.
    pub fn emit_pass(&self, pass: EmitPass, ir: &Dubbogo, w: &mut GoWriter) {
        match pass {
            EmitPass::Preamble => self.emit_preamble(ir, w),
            EmitPass::Package => self.emit_package(ir, w),
            EmitPass::Imports => self.emit_imports(w),
            EmitPass::Constants => self.emit_constants(ir, w),
            EmitPass::TypeCheck => self.emit_type_check(ir, w),
            EmitPass::Client => self.emit_clients(ir, w),
            EmitPass::ClientInfo => self.emit_client_infos(ir, w),
            EmitPass::Handler => self.emit_handlers(ir, w),
            EmitPass::ServiceInfo => self.emit_service_infos(ir, w),
        }
    }
}
