//! Generated symbol names.
//!
//! The dubbo-go runtime and hand-written user code refer to generated symbols by name, so the scheme below is part of
//! the output contract. Every pass asks this module for a name instead of formatting one inline.

use crate::ir::{Method, Service};

/// `<S>Name`: constant holding the wire-level interface name.
pub fn service_name_const(service: &Service) -> String {
    format!("{}Name", service.service_name)
}

/// `<S><M>Procedure`: constant holding the procedure path. Uses the schema method name verbatim.
pub fn procedure_const(service: &Service, method: &Method) -> String {
    format!("{}{}Procedure", service.service_name, method.method_name)
}

/// `/<InterfaceName>/<InvokeName>`: the procedure path itself.
pub fn procedure_path(service: &Service, method: &Method) -> String {
    format!("/{}/{}", service.interface_name, method.invoke_name)
}

/// `<S>Impl`: concrete client type.
pub fn impl_type(service: &Service) -> String {
    format!("{}Impl", service.service_name)
}

/// `<S>_ClientInfo`: client metadata table.
pub fn client_info(service: &Service) -> String {
    format!("{}_ClientInfo", service.service_name)
}

/// `New<S>`: client constructor.
pub fn constructor(service: &Service) -> String {
    format!("New{}", service.service_name)
}

/// `SetConsumer<S>`: consumer registration hook.
pub fn set_consumer(service: &Service) -> String {
    format!("SetConsumer{}", service.service_name)
}

/// `<S>Handler`: server-side handler interface.
pub fn handler_type(service: &Service) -> String {
    format!("{}Handler", service.service_name)
}

/// `Register<S>Handler`: handler registration function.
pub fn register_handler(service: &Service) -> String {
    format!("Register{}Handler", service.service_name)
}

/// `SetProvider<S>`: provider registration hook.
pub fn set_provider(service: &Service) -> String {
    format!("SetProvider{}", service.service_name)
}

/// `<S>_ServiceInfo`: server dispatch table.
pub fn service_info(service: &Service) -> String {
    format!("{}_ServiceInfo", service.service_name)
}
