//! Client interface, constructor, consumer hook and implementation.

use dubbogen_core::lang::bindings::{RECEIVER, RESP};
use dubbogen_core::lang::runtime::{self, RuntimeModuleId};

use super::{GoEmitter, naming, signature};
use crate::backend::go_writer::GoWriter;
use crate::ir::{Dubbogo, Method, Service};

impl GoEmitter<'_> {
    pub(super) fn emit_clients(&self, ir: &Dubbogo, w: &mut GoWriter) {
        for service in &ir.services {
            self.emit_client_interface(service, w);
            self.emit_constructor(service, w);
            self.emit_consumer_hook(service, w);
            self.emit_client_impl(service, w);
        }
    }

    fn emit_client_interface(&self, service: &Service, w: &mut GoWriter) {
        w.block(&format!("type {} interface", service.service_name), |w| {
            for method in &service.methods {
                w.line(&signature::client_signature(method));
            }
        });
        w.blank_line();
    }

    fn emit_constructor(&self, service: &Service, w: &mut GoWriter) {
        let constructor = naming::constructor(service);
        w.comment(&format!(
            "{constructor} constructs a client for the {} service.",
            service.interface_name
        ));
        let header = format!(
            "func {constructor}(cli *{}, opts ...{}) ({}, error)",
            runtime::qualify(RuntimeModuleId::Client, "Client"),
            runtime::qualify(RuntimeModuleId::Client, "ReferenceOption"),
            service.service_name
        );
        w.block(&header, |w| {
            w.linef(format_args!(
                "conn, err := cli.DialWithInfo(\"{}\", &{}, opts...)",
                service.interface_name,
                naming::client_info(service)
            ));
            w.block("if err != nil", |w| w.line("return nil, err"));
            w.literal(&format!("return &{}", naming::impl_type(service)), ", nil", |w| {
                w.line("conn: conn,");
            });
        });
        w.blank_line();
    }

    fn emit_consumer_hook(&self, service: &Service, w: &mut GoWriter) {
        let header = format!(
            "func {}(srv {})",
            naming::set_consumer(service),
            runtime::qualify(RuntimeModuleId::Common, "RPCService")
        );
        w.block(&header, |w| {
            w.linef(format_args!(
                "{}(srv, &{})",
                runtime::qualify(RuntimeModuleId::Dubbo, "SetConsumerServiceWithInfo"),
                naming::client_info(service)
            ));
        });
        w.blank_line();
    }

    fn emit_client_impl(&self, service: &Service, w: &mut GoWriter) {
        let impl_type = naming::impl_type(service);
        w.comment(&format!("{impl_type} implements {}.", service.service_name));
        w.block(&format!("type {impl_type} struct"), |w| {
            w.linef(format_args!(
                "conn *{}",
                runtime::qualify(RuntimeModuleId::Client, "Connection")
            ));
        });
        w.blank_line();

        for method in &service.methods {
            self.emit_client_method(&impl_type, method, w);
        }
    }

    /// Allocate the response holder, issue the unary call, return by the method's response shape.
    fn emit_client_method(&self, impl_type: &str, method: &Method, w: &mut GoWriter) {
        let response = method.response();
        let header = format!(
            "func ({RECEIVER} *{impl_type}) {}",
            signature::client_signature(method)
        );
        w.block(&header, |w| {
            w.linef(format_args!("{RESP} := new({})", response.declared()));
            let call = format!(
                "if err := {RECEIVER}.conn.CallUnary(ctx, []interface{{}}{{{}}}, {RESP}, \"{}\", opts...); err != nil",
                signature::invoke_args(&method.request()),
                method.invoke_name
            );
            w.block(&call, |w| {
                w.linef(format_args!("return {}, err", signature::zero_return(response)));
            });
            w.linef(format_args!("return {}, nil", signature::success_return(response)));
        });
        w.blank_line();
    }
}
