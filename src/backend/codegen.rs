//! Go stub generation facade
//!
//! This module provides [`Codegen`], the single entry point that ties validation and emission together:
//!
//! ```text
//! JSON / Dubbogo → validate (optional) → GoEmitter → Go source
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dubbogen::backend::Codegen;
//! use dubbogen::config::GeneratorConfig;
//! use dubbogen::ir::{Dubbogo, Method, Service};
//!
//! let ir = Dubbogo::new("shop/order.proto", "shop", "shop").with_service(
//!     Service::new("OrderService", "shop.OrderService")
//!         .with_method(Method::unary("GetOrder", "GetOrderRequest", "GetOrderReply")),
//! );
//!
//! // Fallible API (recommended):
//! let go = Codegen::new(GeneratorConfig::default()).try_generate(&ir)?;
//! assert!(go.contains(r#"OrderServiceGetOrderProcedure = "/shop.OrderService/GetOrder""#));
//! # Ok::<(), dubbogen::backend::GenerationError>(())
//! ```
//!
//! ## Error Handling
//!
//! The `try_generate*` methods return `Result<_, GenerationError>`. [`Codegen::generate`] is a convenience wrapper that
//! renders failures as a Go comment block instead; the result is not a compilable file.

use miette::Diagnostic;
use thiserror::Error;

use super::emit::GoEmitter;
use super::go_writer::GoWriter;
use crate::config::GeneratorConfig;
use crate::ir::{self, Dubbogo, ValidationErrors};

/// Error during Go stub generation.
///
/// ## Examples
///
/// ```rust
/// use dubbogen::backend::{Codegen, GenerationError};
/// use dubbogen::config::GeneratorConfig;
/// use dubbogen::ir::Dubbogo;
///
/// let codegen = Codegen::new(GeneratorConfig::default());
/// match codegen.try_generate(&Dubbogo::new("a.proto", "a", "a")) {
///     Ok(code) => println!("{code}"),
///     Err(GenerationError::Validation(errors)) => {
///         for err in errors.iter() {
///             eprintln!("validation error: {err}");
///         }
///     }
///     Err(GenerationError::Input(e)) => eprintln!("bad input: {e}"),
/// }
/// ```
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    /// The IR was rejected before emission (may contain multiple errors)
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationErrors),
    /// The IR could not be decoded from JSON
    #[error("invalid IR input: {0}")]
    #[diagnostic(code(dubbogen::input), help("the IR is a JSON object with PascalCase fields"))]
    Input(#[from] serde_json::Error),
}

/// Go stub generator
#[derive(Debug, Clone, Default)]
pub struct Codegen {
    config: GeneratorConfig,
}

impl Codegen {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one Go source unit from the IR.
    ///
    /// ## Errors
    ///
    /// Returns `GenerationError::Validation` with every problem found when validation is enabled and the IR is
    /// malformed. Emission itself cannot fail.
    #[tracing::instrument(skip_all, fields(package = %ir.go_package_name, validate = self.config.validate))]
    pub fn try_generate(&self, ir: &Dubbogo) -> Result<String, GenerationError> {
        if self.config.validate {
            ir::validate(ir)?;
        } else {
            tracing::warn!("IR validation disabled; malformed input is emitted as-is");
        }
        Ok(GoEmitter::new(&self.config).emit_file(ir))
    }

    /// Decode the JSON form of the IR, then generate.
    ///
    /// ## Errors
    ///
    /// `GenerationError::Input` if the JSON does not describe an IR, otherwise as [`Codegen::try_generate`].
    pub fn generate_from_json(&self, json: &str) -> Result<String, GenerationError> {
        let ir = Dubbogo::from_json(json)?;
        self.try_generate(&ir)
    }

    /// Generate, rendering failures as a Go comment block.
    ///
    /// **Note**: prefer [`try_generate`](Self::try_generate); the error text is not a compilable Go file.
    pub fn generate(&self, ir: &Dubbogo) -> String {
        match self.try_generate(ir) {
            Ok(code) => code,
            Err(e) => {
                let mut w = GoWriter::new();
                w.comment("Generation error:");
                w.comment_lines(&e.to_string());
                w.finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Method, Service, ValidationError};

    fn mismatched() -> Dubbogo {
        let mut method = Method::extended("Ping", [("id", "string")], "string");
        method.args_type.push("int32".to_string());
        Dubbogo::new("a.proto", "a", "a").with_service(Service::new("Echo", "a.Echo").with_method(method))
    }

    #[test]
    fn validation_blocks_emission() {
        let err = Codegen::default().try_generate(&mismatched()).unwrap_err();
        let GenerationError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(matches!(errors.first(), Some(ValidationError::ArgsLengthMismatch { .. })));
    }

    #[test]
    fn permissive_mode_emits_malformed_ir() {
        let codegen = Codegen::new(GeneratorConfig::default().with_validation(false));
        let out = codegen.try_generate(&mismatched()).unwrap();
        assert!(out.contains("id := args[0].(string)"));
        assert!(!out.contains("args[1]"));
    }

    #[test]
    fn generate_renders_errors_as_comments() {
        let out = Codegen::default().generate(&Dubbogo::new("a.proto", "a", "a"));
        assert!(out.starts_with("// Generation error:\n// "));
        assert!(out.lines().all(|l| l.starts_with("//")));
    }

    #[test]
    fn json_input_errors_are_reported() {
        let err = Codegen::default().generate_from_json("{\"Services\": 3}").unwrap_err();
        assert!(matches!(err, GenerationError::Input(_)));
        assert!(err.to_string().starts_with("invalid IR input:"));
    }
}
