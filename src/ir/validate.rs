//! Upfront validation of the IR.
//!
//! Emission itself is a pure textual transform: an inconsistent IR (mismatched argument lists, duplicate dispatch
//! keys, illegal identifiers) turns into Go that fails to compile, or worse, into Go that compiles and then fails a
//! type assertion at call time. This pass rejects such an IR before any text is produced.
//!
//! ## Notes
//!
//! - Every problem is collected; callers get the full list, not just the first error.
//! - Validation can be switched off through [`crate::config::GeneratorConfig::with_validation`] to reproduce the
//!   permissive contract of `protoc-gen-go-dubbo`.

use std::collections::{HashMap, HashSet};
use std::fmt;

use dubbogen_core::idents;
use dubbogen_core::lang::runtime::RUNTIME_MODULES;
use dubbogen_core::lang::{bindings, types};
use miette::Diagnostic;
use thiserror::Error;

use super::{Dubbogo, Method, Service};

/// Which IR identifier failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    Package,
    Service,
    Method,
    Argument,
}

impl fmt::Display for IdentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentKind::Package => write!(f, "package name"),
            IdentKind::Service => write!(f, "service name"),
            IdentKind::Method => write!(f, "method name"),
            IdentKind::Argument => write!(f, "argument name"),
        }
    }
}

/// IR text field that is spliced verbatim into a Go string literal or `//` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Source,
    ProtoPackage,
    InterfaceName,
    InvokeName,
}

impl TextField {
    /// Whether `c` would break out of the position this field is emitted in.
    fn rejects(self, c: char) -> bool {
        match self {
            // Comment lines.
            TextField::Source | TextField::ProtoPackage => c.is_control(),
            // Interpreted string literals.
            TextField::InterfaceName => c.is_control() || c == '"' || c == '\\',
            // Also the last segment of `/<interface>/<invoke>`.
            TextField::InvokeName => c.is_control() || c == '"' || c == '\\' || c == '/',
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextField::Source => write!(f, "Source"),
            TextField::ProtoPackage => write!(f, "ProtoPackage"),
            TextField::InterfaceName => write!(f, "InterfaceName"),
            TextField::InvokeName => write!(f, "InvokeName"),
        }
    }
}

/// Which type slot of a method is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSlot {
    Request,
    Return,
    Argument(usize),
}

impl fmt::Display for TypeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSlot::Request => write!(f, "request"),
            TypeSlot::Return => write!(f, "return"),
            TypeSlot::Argument(i) => write!(f, "argument #{i}"),
        }
    }
}

/// A single reason the IR cannot be emitted safely.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("no services declared")]
    #[diagnostic(
        code(dubbogen::validate::empty_services),
        help("a generated file needs at least one service")
    )]
    EmptyServices,

    #[error("{kind} `{name}` is not a declarable Go identifier")]
    #[diagnostic(
        code(dubbogen::validate::invalid_identifier),
        help("identifiers must match [A-Za-z_][A-Za-z0-9_]* and must not be a Go keyword")
    )]
    InvalidIdentifier { kind: IdentKind, name: String },

    #[error("{field} {value:?} contains a character that cannot be emitted verbatim")]
    #[diagnostic(
        code(dubbogen::validate::unsafe_text),
        help("control characters are never allowed; names also exclude `\"` and `\\`, and InvokeName excludes `/`")
    )]
    UnsafeText { field: TextField, value: String },

    #[error("service name `{service}` shadows the `{service}` runtime package the generated code imports")]
    #[diagnostic(code(dubbogen::validate::reserved_service_name), help("rename the service in the schema"))]
    ReservedServiceName { service: String },

    #[error("service `{service}` is declared more than once")]
    #[diagnostic(code(dubbogen::validate::duplicate_service))]
    DuplicateService { service: String },

    #[error("service `{service}` has an empty InterfaceName")]
    #[diagnostic(
        code(dubbogen::validate::empty_interface_name),
        help("the InterfaceName is the wire identifier, e.g. `pkg.Service`")
    )]
    EmptyInterfaceName { service: String },

    #[error("methods `{first}` and `{second}` of service `{service}` both generate Go method `{go_name}`")]
    #[diagnostic(code(dubbogen::validate::duplicate_method))]
    DuplicateMethod {
        service: String,
        first: String,
        second: String,
        go_name: String,
    },

    #[error("method `{service}.{method}` has an empty InvokeName")]
    #[diagnostic(code(dubbogen::validate::empty_invoke_name))]
    EmptyInvokeName { service: String, method: String },

    #[error("InvokeName `{invoke_name}` is used by more than one method of service `{service}`")]
    #[diagnostic(
        code(dubbogen::validate::duplicate_invoke_name),
        help("the InvokeName is the dispatch key; it must be unique within a service")
    )]
    DuplicateInvokeName { service: String, invoke_name: String },

    #[error("method `{service}.{method}` declares {names} argument names but {types} argument types")]
    #[diagnostic(
        code(dubbogen::validate::args_length_mismatch),
        help("ArgsName and ArgsType are paired by position and must have the same length")
    )]
    ArgsLengthMismatch {
        service: String,
        method: String,
        names: usize,
        types: usize,
    },

    #[error("argument `{arg}` of method `{service}.{method}` is declared more than once")]
    #[diagnostic(code(dubbogen::validate::duplicate_arg))]
    DuplicateArg { service: String, method: String, arg: String },

    #[error("argument `{arg}` of method `{service}.{method}` collides with an identifier used by the generated code")]
    #[diagnostic(
        code(dubbogen::validate::reserved_arg_name),
        help("generated bodies use their own locals, `new`, `nil`, the basic type names and the runtime packages; rename the argument in the schema")
    )]
    ReservedArgName { service: String, method: String, arg: String },

    #[error("method `{service}.{method}` is missing its {slot} type")]
    #[diagnostic(code(dubbogen::validate::missing_type))]
    MissingType {
        service: String,
        method: String,
        slot: TypeSlot,
    },
}

/// Collection of validation errors for one IR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    /// `Some` if `errors` is non-empty, `None` otherwise.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() { None } else { Some(Self(errors)) }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&ValidationError> {
        self.0.first()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() == 1 {
            write!(f, "{}", self.0[0])
        } else {
            writeln!(f, "{} validation errors:", self.0.len())?;
            for (i, err) in self.0.iter().enumerate() {
                writeln!(f, "  {}: {}", i + 1, err)?;
            }
            Ok(())
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl Diagnostic for ValidationErrors {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("dubbogen::validate"))
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn Diagnostic> + 'a>> {
        Some(Box::new(self.0.iter().map(|e| e as &dyn Diagnostic)))
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

/// Check the whole IR, collecting every problem.
#[tracing::instrument(skip_all, fields(services = ir.services.len()))]
pub fn validate(ir: &Dubbogo) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if !idents::is_declarable(&ir.go_package_name) {
        errors.push(ValidationError::InvalidIdentifier {
            kind: IdentKind::Package,
            name: ir.go_package_name.clone(),
        });
    }
    if ir.services.is_empty() {
        errors.push(ValidationError::EmptyServices);
    }
    check_text(TextField::Source, &ir.source, &mut errors);
    check_text(TextField::ProtoPackage, &ir.proto_package, &mut errors);

    let mut seen = HashSet::new();
    for service in &ir.services {
        if !seen.insert(service.service_name.as_str()) {
            errors.push(ValidationError::DuplicateService {
                service: service.service_name.clone(),
            });
        }
        validate_service(service, &mut errors);
    }

    match ValidationErrors::from_vec(errors) {
        Some(errors) => {
            tracing::debug!(count = errors.len(), "IR rejected");
            Err(errors)
        }
        None => Ok(()),
    }
}

fn validate_service(service: &Service, errors: &mut Vec<ValidationError>) {
    if !idents::is_declarable(&service.service_name) {
        errors.push(ValidationError::InvalidIdentifier {
            kind: IdentKind::Service,
            name: service.service_name.clone(),
        });
    } else if is_runtime_package(&service.service_name) {
        errors.push(ValidationError::ReservedServiceName {
            service: service.service_name.clone(),
        });
    }
    if service.interface_name.is_empty() {
        errors.push(ValidationError::EmptyInterfaceName {
            service: service.service_name.clone(),
        });
    } else {
        check_text(TextField::InterfaceName, &service.interface_name, errors);
    }

    let mut go_names: HashMap<String, &str> = HashMap::new();
    let mut invoke_names = HashSet::new();
    for method in &service.methods {
        if let Some(first) = go_names.insert(method.go_name(), &method.method_name) {
            errors.push(ValidationError::DuplicateMethod {
                service: service.service_name.clone(),
                first: first.to_string(),
                second: method.method_name.clone(),
                go_name: method.go_name(),
            });
        }
        if method.invoke_name.is_empty() {
            errors.push(ValidationError::EmptyInvokeName {
                service: service.service_name.clone(),
                method: method.method_name.clone(),
            });
        } else if !invoke_names.insert(method.invoke_name.as_str()) {
            errors.push(ValidationError::DuplicateInvokeName {
                service: service.service_name.clone(),
                invoke_name: method.invoke_name.clone(),
            });
        } else {
            check_text(TextField::InvokeName, &method.invoke_name, errors);
        }
        validate_method(&service.service_name, method, errors);
    }
}

fn validate_method(service: &str, method: &Method, errors: &mut Vec<ValidationError>) {
    let missing = |slot| ValidationError::MissingType {
        service: service.to_string(),
        method: method.method_name.clone(),
        slot,
    };

    if !idents::is_declarable(&method.method_name) {
        errors.push(ValidationError::InvalidIdentifier {
            kind: IdentKind::Method,
            name: method.method_name.clone(),
        });
    }
    if method.return_type.trim().is_empty() {
        errors.push(missing(TypeSlot::Return));
    }

    if !method.request_extend_args {
        if method.request_type.trim().is_empty() {
            errors.push(missing(TypeSlot::Request));
        }
        return;
    }

    if method.args_name.len() != method.args_type.len() {
        errors.push(ValidationError::ArgsLengthMismatch {
            service: service.to_string(),
            method: method.method_name.clone(),
            names: method.args_name.len(),
            types: method.args_type.len(),
        });
    }
    for (i, ty) in method.args_type.iter().enumerate() {
        if ty.trim().is_empty() {
            errors.push(missing(TypeSlot::Argument(i)));
        }
    }

    let mut seen = HashSet::new();
    for arg in &method.args_name {
        if !idents::is_declarable(arg) {
            errors.push(ValidationError::InvalidIdentifier {
                kind: IdentKind::Argument,
                name: arg.clone(),
            });
        } else if is_reserved(arg) {
            errors.push(ValidationError::ReservedArgName {
                service: service.to_string(),
                method: method.method_name.clone(),
                arg: arg.clone(),
            });
        }
        if !seen.insert(arg.as_str()) {
            errors.push(ValidationError::DuplicateArg {
                service: service.to_string(),
                method: method.method_name.clone(),
                arg: arg.clone(),
            });
        }
    }
}

fn check_text(field: TextField, value: &str, errors: &mut Vec<ValidationError>) {
    if value.chars().any(|c| field.rejects(c)) {
        errors.push(ValidationError::UnsafeText {
            field,
            value: value.to_string(),
        });
    }
}

fn is_runtime_package(name: &str) -> bool {
    RUNTIME_MODULES.iter().any(|m| m.package == name)
}

/// Argument names that would shadow a generated local, a builtin the bodies call, a basic type the bodies spell, or
/// an imported package.
fn is_reserved(name: &str) -> bool {
    bindings::is_bound(name) || types::from_str(name).is_some() || is_runtime_package(name)
}
