//! Identifiers the generated stubs bind or call themselves.
//!
//! Generated method bodies and dispatch closures declare a handful of locals and call a couple of Go builtins. A
//! schema argument spelled like any of them would shadow (or be shadowed by) generated code, so the validator reserves
//! them and the emitter declares its locals from the same constants.
//!
//! ## Examples
//! ```rust
//! use dubbogen_core::lang::bindings;
//!
//! assert!(bindings::is_bound("ctx"));
//! assert!(bindings::is_bound("nil"));
//! assert!(!bindings::is_bound("orderId"));
//! ```

pub const CTX: &str = "ctx";
pub const OPTS: &str = "opts";
pub const RESP: &str = "resp";
pub const ERR: &str = "err";
pub const RECEIVER: &str = "c";
pub const ARGS: &str = "args";
pub const HANDLER: &str = "handler";
pub const RES: &str = "res";
pub const REQ: &str = "req";

/// Locals declared by generated method bodies and dispatch closures.
pub const GENERATED_BINDINGS: &[&str] = &[CTX, OPTS, RESP, ERR, RECEIVER, ARGS, HANDLER, RES, REQ];

/// Predeclared identifiers referenced inside generated bodies (`new(T)`, `return nil, err`, `(T, error)`).
pub const PREDECLARED_USES: &[&str] = &["new", "nil", "error"];

/// Check whether `name` is a local or builtin the generated code relies on.
pub fn is_bound(name: &str) -> bool {
    GENERATED_BINDINGS.contains(&name) || PREDECLARED_USES.contains(&name)
}
