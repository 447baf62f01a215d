//! Argument-list and return-type builders shared by the client, handler and dispatch passes.
//!
//! All convention branching happens here, on [`RequestShape`] and [`ResponseShape`]. The passes only splice the
//! returned text into their templates, so the client interface, the client implementation, the handler interface and
//! the dispatch table cannot disagree about a method's shape.

use std::borrow::Cow;

use dubbogen_core::lang::bindings::{ARGS, CTX, OPTS, REQ, RESP};
use dubbogen_core::lang::runtime::{self, RuntimeModuleId};
use dubbogen_core::lang::types;

use crate::ir::{Method, RequestShape, ResponseShape};

/// `ctx context.Context`
fn context_param() -> String {
    format!("{CTX} {}", runtime::qualify(RuntimeModuleId::Context, "Context"))
}

/// Request parameters in declaration order: `id string, count int32` or `req *GetOrderRequest`.
pub(super) fn request_params(request: &RequestShape<'_>) -> Vec<String> {
    match request {
        RequestShape::Expanded(args) => args.iter().map(|a| format!("{} {}", a.name, a.ty)).collect(),
        RequestShape::Single { request_type } => vec![format!("{REQ} *{request_type}")],
    }
}

/// Client-side parameter list: context, request parameters, variadic call options.
pub(super) fn client_params(request: &RequestShape<'_>) -> String {
    let mut params = vec![context_param()];
    params.extend(request_params(request));
    params.push(format!("{OPTS} ...{}", runtime::qualify(RuntimeModuleId::Client, "CallOption")));
    params.join(", ")
}

/// Server-side parameter list: context and request parameters, no call options.
pub(super) fn handler_params(request: &RequestShape<'_>) -> String {
    let mut params = vec![context_param()];
    params.extend(request_params(request));
    params.join(", ")
}

/// Arguments forwarded to the runtime or the handler: `id, count` or `req`.
pub(super) fn invoke_args(request: &RequestShape<'_>) -> String {
    match request {
        RequestShape::Expanded(args) => args.iter().map(|a| a.name).collect::<Vec<_>>().join(", "),
        RequestShape::Single { .. } => REQ.to_string(),
    }
}

/// Handler call arguments: the context followed by the forwarded request arguments.
pub(super) fn handler_call_args(request: &RequestShape<'_>) -> String {
    let forwarded = invoke_args(request);
    if forwarded.is_empty() {
        CTX.to_string()
    } else {
        format!("{CTX}, {forwarded}")
    }
}

/// Request allocator body value: `new(T)` for a single request, `[]interface{}{new(T0), ...}` when expanded.
pub(super) fn request_allocator(request: &RequestShape<'_>) -> String {
    match request {
        RequestShape::Expanded(args) => {
            let holders: Vec<_> = args.iter().map(|a| format!("new({})", a.ty)).collect();
            format!("[]interface{{}}{{{}}}", holders.join(", "))
        }
        RequestShape::Single { request_type } => format!("new({request_type})"),
    }
}

/// Statements recovering typed arguments from the untyped dispatch list, in declared order.
pub(super) fn recover_args(request: &RequestShape<'_>) -> Vec<String> {
    match request {
        RequestShape::Expanded(args) => args
            .iter()
            .map(|a| format!("{} := {ARGS}[{}].({})", a.name, a.index, a.ty))
            .collect(),
        RequestShape::Single { request_type } => vec![format!("{REQ} := {ARGS}[0].(*{request_type})")],
    }
}

/// Declared return type: `T` for value semantics, `*T` for an owned reference.
pub(super) fn return_type(response: ResponseShape<'_>) -> String {
    match response {
        ResponseShape::Value(ty) => ty.to_string(),
        ResponseShape::Owned(ty) => format!("*{ty}"),
    }
}

/// Value returned next to an error: the zero value of the declared return type.
pub(super) fn zero_return(response: ResponseShape<'_>) -> Cow<'static, str> {
    match response {
        ResponseShape::Value(ty) => types::zero_value_of(ty),
        ResponseShape::Owned(_) => Cow::Borrowed("nil"),
    }
}

/// Value returned on success, given a `resp := new(T)` holder.
pub(super) fn success_return(response: ResponseShape<'_>) -> String {
    match response {
        ResponseShape::Value(_) => format!("*{RESP}"),
        ResponseShape::Owned(_) => RESP.to_string(),
    }
}

/// Client interface and implementation method signature (without receiver).
pub(super) fn client_signature(method: &Method) -> String {
    format!(
        "{}({}) ({}, error)",
        method.go_name(),
        client_params(&method.request()),
        return_type(method.response())
    )
}

/// Handler interface method signature.
pub(super) fn handler_signature(method: &Method) -> String {
    format!(
        "{}({}) ({}, error)",
        method.go_name(),
        handler_params(&method.request()),
        return_type(method.response())
    )
}
