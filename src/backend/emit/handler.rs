//! Handler interface, registration function and provider hook.

use dubbogen_core::lang::runtime::{self, RuntimeModuleId};

use super::{GoEmitter, naming, signature};
use crate::backend::go_writer::GoWriter;
use crate::ir::{Dubbogo, Service};

impl GoEmitter<'_> {
    pub(super) fn emit_handlers(&self, ir: &Dubbogo, w: &mut GoWriter) {
        for service in &ir.services {
            self.emit_handler(service, w);
        }
    }

    fn emit_handler(&self, service: &Service, w: &mut GoWriter) {
        let handler = naming::handler_type(service);
        w.comment(&format!(
            "{handler} is an implementation of the {} service.",
            service.interface_name
        ));
        w.block(&format!("type {handler} interface"), |w| {
            for method in &service.methods {
                w.line(&signature::handler_signature(method));
            }
        });
        w.blank_line();

        let register = format!(
            "func {}(srv *{}, hdlr {handler}, opts ...{}) error",
            naming::register_handler(service),
            runtime::qualify(RuntimeModuleId::Server, "Server"),
            runtime::qualify(RuntimeModuleId::Server, "ServiceOption")
        );
        w.block(&register, |w| {
            w.linef(format_args!(
                "return srv.Register(hdlr, &{}, opts...)",
                naming::service_info(service)
            ));
        });
        w.blank_line();

        let provider = format!(
            "func {}(srv {})",
            naming::set_provider(service),
            runtime::qualify(RuntimeModuleId::Common, "RPCService")
        );
        w.block(&provider, |w| {
            w.linef(format_args!(
                "{}(srv, &{})",
                runtime::qualify(RuntimeModuleId::Dubbo, "SetProviderServiceWithInfo"),
                naming::service_info(service)
            ));
        });
        w.blank_line();
    }
}
