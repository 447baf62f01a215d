//! Client metadata tables (`<S>_ClientInfo`).
//!
//! The table lets the generic client runtime bind a connection to a concrete `<S>Impl` it knows nothing about:
//! `ConnectionInjectFunc` recovers the concrete type from an opaque value and stores the connection on it.

use dubbogen_core::lang::runtime::{self, RuntimeModuleId};

use super::{GoEmitter, naming};
use crate::backend::go_writer::GoWriter;
use crate::ir::{Dubbogo, Service};

impl GoEmitter<'_> {
    pub(super) fn emit_client_infos(&self, ir: &Dubbogo, w: &mut GoWriter) {
        for service in &ir.services {
            self.emit_client_info(service, w);
        }
    }

    fn emit_client_info(&self, service: &Service, w: &mut GoWriter) {
        let header = format!(
            "var {} = {}",
            naming::client_info(service),
            runtime::qualify(RuntimeModuleId::Client, "ClientInfo")
        );
        w.literal(&header, "", |w| {
            w.linef(format_args!("InterfaceName: \"{}\",", service.interface_name));
            w.literal("MethodNames: []string", ",", |w| {
                for method in &service.methods {
                    w.linef(format_args!("\"{}\",", method.invoke_name));
                }
            });
            let inject = format!(
                "ConnectionInjectFunc: func(dubboCliRaw interface{{}}, conn *{})",
                runtime::qualify(RuntimeModuleId::Client, "Connection")
            );
            w.block_with(&inject, ",", |w| {
                w.linef(format_args!("dubboCli := dubboCliRaw.(*{})", naming::impl_type(service)));
                w.line("dubboCli.conn = conn");
            });
        });
        w.blank_line();
    }
}
