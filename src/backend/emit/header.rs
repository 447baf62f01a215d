//! Preamble, package clause and import block.

use dubbogen_core::idents;
use dubbogen_core::lang::runtime::RUNTIME_MODULES;

use super::GoEmitter;
use crate::backend::go_writer::GoWriter;
use crate::ir::Dubbogo;

impl GoEmitter<'_> {
    pub(super) fn emit_preamble(&self, ir: &Dubbogo, w: &mut GoWriter) {
        w.comment(&format!("Code generated by {}. DO NOT EDIT.", self.config.generator_name));
        w.blank_line();
        w.comment(&format!("Source: {}", ir.source));
        w.comment(&format!("Package: {}", idents::package_label(&ir.proto_package)));
        w.blank_line();
    }

    pub(super) fn emit_package(&self, ir: &Dubbogo, w: &mut GoWriter) {
        w.linef(format_args!("package {}", ir.go_package_name));
        w.blank_line();
    }

    /// The import block is fixed: standard library first, then the runtime modules.
    pub(super) fn emit_imports(&self, w: &mut GoWriter) {
        w.group("import", |w| {
            let mut previous_std = None;
            for module in RUNTIME_MODULES {
                if previous_std.is_some_and(|was_std| was_std != module.std) {
                    w.blank_line();
                }
                w.linef(format_args!("\"{}\"", module.path));
                previous_std = Some(module.std);
            }
        });
        w.blank_line();
    }
}
