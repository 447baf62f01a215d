//! Server dispatch tables (`<S>_ServiceInfo`).
//!
//! Each entry maps an invoke name to a request allocator and an invocation closure. The runtime hands the closure an
//! untyped argument list; recovery asserts `args[i]` to the i-th declared type, so the recovery order must be the
//! declared argument order.

use dubbogen_core::lang::bindings::{ARGS, ERR, HANDLER, RES};
use dubbogen_core::lang::runtime::{self, RuntimeModuleId};

use super::{GoEmitter, naming, signature};
use crate::backend::go_writer::GoWriter;
use crate::ir::{Dubbogo, Method, Service};

impl GoEmitter<'_> {
    pub(super) fn emit_service_infos(&self, ir: &Dubbogo, w: &mut GoWriter) {
        for service in &ir.services {
            self.emit_service_info(service, w);
        }
    }

    fn emit_service_info(&self, service: &Service, w: &mut GoWriter) {
        let header = format!(
            "var {} = {}",
            naming::service_info(service),
            runtime::qualify(RuntimeModuleId::Server, "ServiceInfo")
        );
        w.literal(&header, "", |w| {
            w.linef(format_args!("InterfaceName: \"{}\",", service.interface_name));
            w.linef(format_args!("ServiceType: (*{})(nil),", naming::handler_type(service)));
            let methods = format!("Methods: []{}", runtime::qualify(RuntimeModuleId::Server, "MethodInfo"));
            w.literal(&methods, ",", |w| {
                for method in &service.methods {
                    self.emit_method_info(service, method, w);
                }
            });
        });
        w.blank_line();
    }

    fn emit_method_info(&self, service: &Service, method: &Method, w: &mut GoWriter) {
        let request = method.request();
        w.literal("", ",", |w| {
            w.linef(format_args!("Name: \"{}\",", method.invoke_name));
            w.linef(format_args!(
                "Type: {},",
                runtime::qualify(RuntimeModuleId::Constant, "CallUnary")
            ));
            w.block_with("ReqInitFunc: func() interface{}", ",", |w| {
                w.linef(format_args!("return {}", signature::request_allocator(&request)));
            });
            let invoke = format!(
                "MethodFunc: func(ctx {}, {ARGS} []interface{{}}, {HANDLER} interface{{}}) (interface{{}}, error)",
                runtime::qualify(RuntimeModuleId::Context, "Context")
            );
            w.block_with(&invoke, ",", |w| {
                for statement in signature::recover_args(&request) {
                    w.line(&statement);
                }
                w.linef(format_args!(
                    "{RES}, {ERR} := {HANDLER}.({}).{}({})",
                    naming::handler_type(service),
                    method.go_name(),
                    signature::handler_call_args(&request)
                ));
                w.linef(format_args!("return {RES}, {ERR}"));
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::config::GeneratorConfig;

    fn emit(service: Service) -> String {
        let config = GeneratorConfig::default();
        let ir = Dubbogo::new("a.proto", "shop", "shop").with_service(service);
        let mut w = GoWriter::new();
        GoEmitter::new(&config).emit_service_infos(&ir, &mut w);
        w.finish()
    }

    #[test]
    fn single_request_dispatch_entry() {
        let out = emit(
            Service::new("OrderService", "shop.OrderService")
                .with_method(Method::unary("GetOrder", "GetOrderRequest", "GetOrderReply")),
        );
        assert_eq!(
            out,
            indoc! {r#"
                var OrderService_ServiceInfo = server.ServiceInfo{
                	InterfaceName: "shop.OrderService",
                	ServiceType: (*OrderServiceHandler)(nil),
                	Methods: []server.MethodInfo{
                		{
                			Name: "GetOrder",
                			Type: constant.CallUnary,
                			ReqInitFunc: func() interface{} {
                				return new(GetOrderRequest)
                			},
                			MethodFunc: func(ctx context.Context, args []interface{}, handler interface{}) (interface{}, error) {
                				req := args[0].(*GetOrderRequest)
                				res, err := handler.(OrderServiceHandler).GetOrder(ctx, req)
                				return res, err
                			},
                		},
                	},
                }
            "#}
        );
    }

    #[test]
    fn expanded_dispatch_recovers_positionally() {
        let out = emit(
            Service::new("OrderService", "shop.OrderService").with_method(
                Method::extended("ping", [("id", "string"), ("count", "int32")], "string")
                    .with_invoke_name("Ping")
                    .with_value_return(),
            ),
        );
        assert!(out.contains("\t\t\tName: \"Ping\",\n"));
        assert!(out.contains("\t\t\t\treturn []interface{}{new(string), new(int32)}\n"));
        assert!(out.contains(concat!(
            "\t\t\t\tid := args[0].(string)\n",
            "\t\t\t\tcount := args[1].(int32)\n",
            "\t\t\t\tres, err := handler.(OrderServiceHandler).Ping(ctx, id, count)\n",
        )));
    }
}
