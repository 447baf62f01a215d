//! Runtime modules imported by every generated file.
//!
//! A generated stub file talks to exactly two worlds: the Go standard library (`context`) and the dubbo-go runtime.
//! The import list is fixed and independent of the input IR, so it lives here as a registry rather than inside the
//! emitter.
//!
//! ## Examples
//! ```rust
//! use dubbogen_core::lang::runtime::{self, RuntimeModuleId};
//!
//! assert_eq!(runtime::package_name(RuntimeModuleId::Client), "client");
//! assert_eq!(runtime::qualify(RuntimeModuleId::Client, "CallOption"), "client.CallOption");
//! ```

/// Root import path of the dubbo-go runtime.
pub const DUBBO_GO_ROOT: &str = "dubbo.apache.org/dubbo-go/v3";

/// Stable identifier for an imported module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeModuleId {
    /// `context`: cancellable call contexts.
    Context,
    /// Top-level runtime (consumer/provider registration helpers).
    Dubbo,
    Client,
    Common,
    /// `common/constant`: call-kind tags such as `CallUnary`.
    Constant,
    Server,
}

/// Metadata for an imported module.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeModuleInfo {
    pub id: RuntimeModuleId,
    /// Full import path.
    pub path: &'static str,
    /// Package identifier used to qualify symbols in generated code.
    pub package: &'static str,
    /// Whether the module belongs to the Go standard library (grouped first in the import block).
    pub std: bool,
}

/// Registry of imported modules, in import-block order.
pub const RUNTIME_MODULES: &[RuntimeModuleInfo] = &[
    RuntimeModuleInfo {
        id: RuntimeModuleId::Context,
        path: "context",
        package: "context",
        std: true,
    },
    RuntimeModuleInfo {
        id: RuntimeModuleId::Dubbo,
        path: DUBBO_GO_ROOT,
        package: "dubbo",
        std: false,
    },
    RuntimeModuleInfo {
        id: RuntimeModuleId::Client,
        path: "dubbo.apache.org/dubbo-go/v3/client",
        package: "client",
        std: false,
    },
    RuntimeModuleInfo {
        id: RuntimeModuleId::Common,
        path: "dubbo.apache.org/dubbo-go/v3/common",
        package: "common",
        std: false,
    },
    RuntimeModuleInfo {
        id: RuntimeModuleId::Constant,
        path: "dubbo.apache.org/dubbo-go/v3/common/constant",
        package: "constant",
        std: false,
    },
    RuntimeModuleInfo {
        id: RuntimeModuleId::Server,
        path: "dubbo.apache.org/dubbo-go/v3/server",
        package: "server",
        std: false,
    },
];

/// Return the metadata entry for a module.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: RuntimeModuleId) -> &'static RuntimeModuleInfo {
    RUNTIME_MODULES
        .iter()
        .find(|m| m.id == id)
        .expect("runtime module info missing")
}

/// Return the import path of a module.
pub fn import_path(id: RuntimeModuleId) -> &'static str {
    info_for(id).path
}

/// Return the package identifier of a module.
pub fn package_name(id: RuntimeModuleId) -> &'static str {
    info_for(id).package
}

/// Qualify a symbol with its module's package identifier (`client` + `Connection` → `client.Connection`).
pub fn qualify(id: RuntimeModuleId, symbol: &str) -> String {
    format!("{}.{}", package_name(id), symbol)
}
