//! Input model consumed by the emitter.
//!
//! The IR is produced upstream (schema parsing, import resolution and type naming all happen before `dubbogen` runs)
//! and handed over either programmatically or as JSON. It is immutable for the whole emission: the emitter only
//! reads it.
//!
//! ## Calling conventions
//!
//! A method's raw `RequestExtendArgs`/`ResponseExtendArgs` flags are never inspected by emission passes directly.
//! Passes go through [`Method::request`] and [`Method::response`], which fold the flags into the two tagged variants
//! [`RequestShape`] and [`ResponseShape`]. Every pass that branches on a convention therefore branches on the same
//! value.
//!
//! ## Wire format
//!
//! Field names are PascalCase on the wire (`ServiceName`, `InvokeName`, `ArgsType`, ...):
//!
//! ```rust
//! use dubbogen::ir::Dubbogo;
//!
//! let ir = Dubbogo::from_json(r#"{
//!     "Source": "shop/order.proto",
//!     "ProtoPackage": "shop",
//!     "GoPackageName": "shop",
//!     "Services": [{
//!         "ServiceName": "OrderService",
//!         "InterfaceName": "shop.OrderService",
//!         "Methods": [{
//!             "MethodName": "GetOrder",
//!             "InvokeName": "GetOrder",
//!             "RequestType": "GetOrderRequest",
//!             "ReturnType": "GetOrderReply"
//!         }]
//!     }]
//! }"#).unwrap();
//! assert_eq!(ir.services[0].methods[0].invoke_name, "GetOrder");
//! ```

pub mod validate;

pub use validate::{TextField, ValidationError, ValidationErrors, validate};

use dubbogen_core::idents;
use serde::{Deserialize, Serialize};

/// Root of the IR: one generated source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dubbogo {
    /// Path of the schema file the IR was built from (provenance only).
    #[serde(default)]
    pub source: String,
    /// Dotted schema package (`shop.v1`).
    #[serde(default)]
    pub proto_package: String,
    /// Go package clause of the generated file.
    pub go_package_name: String,
    /// Services in emission order.
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Dubbogo {
    pub fn new(source: impl Into<String>, proto_package: impl Into<String>, go_package_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            proto_package: proto_package.into(),
            go_package_name: go_package_name.into(),
            services: Vec::new(),
        }
    }

    /// Append a service (builder style).
    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Parse the JSON form handed over by the IR builder.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize back to the JSON form (pretty-printed).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One RPC service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    /// Symbol-safe identifier, prefix of every generated symbol for this service.
    pub service_name: String,
    /// Fully-qualified wire identifier (`pkg.Service`).
    pub interface_name: String,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Service {
    pub fn new(service_name: impl Into<String>, interface_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            interface_name: interface_name.into(),
            methods: Vec::new(),
        }
    }

    /// Append a method (builder style).
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

/// One RPC operation within a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Method {
    pub method_name: String,
    /// Wire-level name: procedure path segment and dispatch key.
    pub invoke_name: String,
    #[serde(default)]
    pub request_type: String,
    pub return_type: String,
    #[serde(default)]
    pub request_extend_args: bool,
    #[serde(default)]
    pub response_extend_args: bool,
    #[serde(default)]
    pub args_name: Vec<String>,
    #[serde(default)]
    pub args_type: Vec<String>,
}

impl Method {
    /// A single-request method whose response is returned as an owned reference.
    pub fn unary(
        method_name: impl Into<String>,
        request_type: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Self {
        let method_name = method_name.into();
        Self {
            invoke_name: method_name.clone(),
            method_name,
            request_type: request_type.into(),
            return_type: return_type.into(),
            request_extend_args: false,
            response_extend_args: false,
            args_name: Vec::new(),
            args_type: Vec::new(),
        }
    }

    /// A method exposing each parameter individually, in the given order.
    pub fn extended<N, T>(
        method_name: impl Into<String>,
        args: impl IntoIterator<Item = (N, T)>,
        return_type: impl Into<String>,
    ) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        let (args_name, args_type): (Vec<String>, Vec<String>) =
            args.into_iter().map(|(n, t)| (n.into(), t.into())).unzip();
        let method_name = method_name.into();
        Self {
            invoke_name: method_name.clone(),
            method_name,
            request_type: String::new(),
            return_type: return_type.into(),
            request_extend_args: true,
            response_extend_args: false,
            args_name,
            args_type,
        }
    }

    /// Override the wire-level name (defaults to the method name).
    pub fn with_invoke_name(mut self, invoke_name: impl Into<String>) -> Self {
        self.invoke_name = invoke_name.into();
        self
    }

    /// Return the declared type by value instead of as an owned reference.
    pub fn with_value_return(mut self) -> Self {
        self.response_extend_args = true;
        self
    }

    /// Exported Go method name.
    pub fn go_name(&self) -> String {
        idents::to_exported(&self.method_name)
    }

    /// Request calling convention of this method.
    ///
    /// ## Notes
    /// - Under the expanded convention, names and types are paired positionally. If the lists differ in length (only
    ///   possible with validation disabled) the surplus entries are dropped.
    pub fn request(&self) -> RequestShape<'_> {
        if self.request_extend_args {
            RequestShape::Expanded(
                self.args_name
                    .iter()
                    .zip(&self.args_type)
                    .enumerate()
                    .map(|(index, (name, ty))| Arg {
                        index,
                        name: name.as_str(),
                        ty: ty.as_str(),
                    })
                    .collect(),
            )
        } else {
            RequestShape::Single {
                request_type: &self.request_type,
            }
        }
    }

    /// Response convention of this method.
    pub fn response(&self) -> ResponseShape<'_> {
        if self.response_extend_args {
            ResponseShape::Value(&self.return_type)
        } else {
            ResponseShape::Owned(&self.return_type)
        }
    }
}

/// One positional argument of an expanded-convention method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arg<'a> {
    /// Position in the untyped argument list the runtime supplies.
    pub index: usize,
    pub name: &'a str,
    pub ty: &'a str,
}

/// How a method receives its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestShape<'a> {
    /// Each parameter exposed individually, in declared order.
    Expanded(Vec<Arg<'a>>),
    /// One request object, passed by reference.
    Single { request_type: &'a str },
}

/// How a method hands back its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape<'a> {
    /// The declared type, by value.
    Value(&'a str),
    /// An owned reference to a freshly allocated value of the declared type.
    Owned(&'a str),
}

impl<'a> ResponseShape<'a> {
    /// The declared return type, without any reference wrapping.
    pub fn declared(self) -> &'a str {
        match self {
            ResponseShape::Value(ty) | ResponseShape::Owned(ty) => ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_method_is_single_owned() {
        let m = Method::unary("GetOrder", "GetOrderRequest", "GetOrderReply");
        assert_eq!(m.invoke_name, "GetOrder");
        assert_eq!(
            m.request(),
            RequestShape::Single {
                request_type: "GetOrderRequest"
            }
        );
        assert_eq!(m.response(), ResponseShape::Owned("GetOrderReply"));
    }

    #[test]
    fn extended_method_keeps_argument_order() {
        let m = Method::extended("ping", [("id", "string"), ("count", "int32")], "string").with_value_return();
        let RequestShape::Expanded(args) = m.request() else {
            panic!("expected expanded request");
        };
        assert_eq!(
            args,
            vec![
                Arg {
                    index: 0,
                    name: "id",
                    ty: "string"
                },
                Arg {
                    index: 1,
                    name: "count",
                    ty: "int32"
                },
            ]
        );
        assert_eq!(m.response(), ResponseShape::Value("string"));
        assert_eq!(m.go_name(), "Ping");
    }

    #[test]
    fn json_defaults_optional_fields() {
        let json = r#"{
            "GoPackageName": "shop",
            "Services": [{
                "ServiceName": "OrderService",
                "InterfaceName": "shop.OrderService",
                "Methods": [{
                    "MethodName": "Ping",
                    "InvokeName": "ping",
                    "ReturnType": "string",
                    "RequestExtendArgs": true,
                    "ArgsName": ["id"],
                    "ArgsType": ["string"]
                }]
            }]
        }"#;
        let ir = Dubbogo::from_json(json).unwrap();
        let m = &ir.services[0].methods[0];
        assert!(m.request_extend_args);
        assert!(!m.response_extend_args);
        assert!(m.request_type.is_empty());
        assert_eq!(ir.source, "");
    }

    #[test]
    fn json_round_trip_preserves_ir() {
        let ir = Dubbogo::new("a.proto", "a", "a").with_service(
            Service::new("Echo", "a.Echo").with_method(Method::unary("Say", "SayRequest", "SayReply")),
        );
        let json = ir.to_json().unwrap();
        assert!(json.contains("\"InvokeName\": \"Say\""));
        assert_eq!(Dubbogo::from_json(&json).unwrap(), ir);
    }
}
