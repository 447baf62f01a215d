//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path};

use crate::backend::{Codegen, EmitPass, GenerationError};
use crate::config::GeneratorConfig;
use crate::ir::{self, Dubbogo};

use super::{CliError, CliResult, ExitCode};

/// Maximum IR file size (16 MiB)
///
/// A service IR is a few kilobytes; anything this large is not one.
const MAX_INPUT_SIZE: u64 = 16 * 1024 * 1024;

/// Validate the output path to prevent path traversal.
///
/// Paths containing `..` components are rejected. Absolute paths are allowed with a warning.
pub fn validate_output_path(path: &Path) -> CliResult<()> {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(CliError::failure(format!(
            "Output path '{}' contains path traversal (..)",
            path.display()
        )));
    }
    if path.is_absolute() {
        tracing::warn!(path = %path.display(), "using absolute output path");
    }
    Ok(())
}

/// Read an IR file.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_INPUT_SIZE` (16 MiB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_INPUT_SIZE {
        return Err(CliError::failure(format!(
            "IR file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_INPUT_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Read and decode an IR file.
fn load_ir(path: &Path) -> CliResult<Dubbogo> {
    let source = read_source(path)?;
    Dubbogo::from_json(&source).map_err(|e| render(path, GenerationError::Input(e)))
}

/// Render a generation error as a miette report headed by the input path.
fn render(path: &Path, error: GenerationError) -> CliError {
    let report = miette::Report::new(error);
    CliError::failure(format!("{}: {:?}", path.display(), report))
}

/// Generate Go stubs from an IR file and write them to `output` or stdout.
#[tracing::instrument(skip_all, fields(input = %input.display()))]
pub fn generate(input: &Path, output: Option<&Path>, config: GeneratorConfig) -> CliResult<ExitCode> {
    if let Some(path) = output {
        validate_output_path(path)?;
    }
    let ir = load_ir(input)?;
    let code = Codegen::new(config).try_generate(&ir).map_err(|e| render(input, e))?;

    match output {
        Some(path) => {
            fs::write(path, &code)
                .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))?;
            tracing::info!(output = %path.display(), bytes = code.len(), "wrote Go stubs");
        }
        None => {
            io::stdout()
                .write_all(code.as_bytes())
                .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Validate an IR file, reporting every problem.
pub fn check(input: &Path) -> CliResult<ExitCode> {
    let ir = load_ir(input)?;
    ir::validate(&ir).map_err(|e| render(input, GenerationError::Validation(e)))?;

    let methods: usize = ir.services.iter().map(|s| s.methods.len()).sum();
    println!(
        "{}: ok ({} services, {} methods)",
        input.display(),
        ir.services.len(),
        methods
    );
    Ok(ExitCode::SUCCESS)
}

/// Print the emission passes in the order they run.
pub fn list_passes() -> CliResult<ExitCode> {
    for (i, pass) in EmitPass::ALL.iter().enumerate() {
        println!("{:>2}. {}", i + 1, pass);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dubbogen_{}_{}", std::process::id(), name))
    }

    const IR: &str = r#"{
        "Source": "echo.proto",
        "ProtoPackage": "echo",
        "GoPackageName": "echo",
        "Services": [{
            "ServiceName": "Echo",
            "InterfaceName": "echo.Echo",
            "Methods": [{"MethodName": "Say", "InvokeName": "Say", "RequestType": "SayRequest", "ReturnType": "SayReply"}]
        }]
    }"#;

    #[test]
    fn test_output_path_traversal_rejected() {
        assert!(validate_output_path(Path::new("../out.go")).is_err());
        assert!(validate_output_path(Path::new("gen/../../out.go")).is_err());
        assert!(validate_output_path(Path::new("gen/echo.dubbo.go")).is_ok());
    }

    #[test]
    fn test_missing_input_is_reported() {
        let err = read_source(&scratch("does_not_exist.json")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_generate_writes_output_file() {
        let input = scratch("generate_in.json");
        let output = scratch("generate_out.go");
        fs::write(&input, IR).unwrap();

        let code = generate(&input, Some(output.as_path()), GeneratorConfig::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let go = fs::read_to_string(&output).unwrap();
        assert!(go.starts_with("// Code generated by protoc-gen-go-dubbo. DO NOT EDIT.\n"));
        assert!(go.contains("package echo\n"));

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn test_check_reports_validation_errors() {
        let input = scratch("check_in.json");
        fs::write(&input, IR.replace("\"InterfaceName\": \"echo.Echo\"", "\"InterfaceName\": \"\"")).unwrap();

        let err = check(&input).unwrap_err();
        assert!(err.message.contains("empty InterfaceName"));

        let _ = fs::remove_file(&input);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let input = scratch("malformed.json");
        fs::write(&input, "{ not json").unwrap();

        let err = check(&input).unwrap_err();
        assert!(err.message.contains("invalid IR input"));

        let _ = fs::remove_file(&input);
    }
}
