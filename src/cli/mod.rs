//! CLI module for dubbogen
//!
//! ## Commands
//!
//! - `generate <IR.json>` - Emit Go stubs to a file or stdout
//! - `check <IR.json>` - Validate the IR without emitting
//! - `passes` - List the emission passes in order
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::GeneratorConfig;
use crate::version::DUBBOGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Go stub generator for the dubbo-go RPC runtime
#[derive(Parser, Debug)]
#[command(name = "dubbogen")]
#[command(version = DUBBOGEN_VERSION)]
#[command(about = "Generate dubbo-go client and server stubs from a service IR", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit Go stubs for an IR file
    Generate {
        /// IR in JSON form
        #[arg(value_name = "IR")]
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Emit without validating the IR first
        #[arg(long)]
        no_validate: bool,
        /// Tool name written into the generated-file marker
        #[arg(long, value_name = "NAME")]
        generator: Option<String>,
    },

    /// Validate an IR file without emitting anything
    Check {
        #[arg(value_name = "IR")]
        input: PathBuf,
    },

    /// List the emission passes in order
    Passes,
}

impl Command {
    /// Generator configuration implied by the command's flags.
    fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Command::Generate {
            no_validate, generator, ..
        } = self
        {
            config = config.with_validation(!no_validate);
            if let Some(name) = generator {
                config = config.with_generator_name(name.clone());
            }
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.command.config();
    match cli.command {
        Command::Generate { input, output, .. } => commands::generate(&input, output.as_deref(), config),
        Command::Check { input } => commands::check(&input),
        Command::Passes => commands::list_passes(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["dubbogen", "generate", "order.json", "-o", "order.dubbo.go"]).unwrap();
        if let Command::Generate {
            input,
            output,
            no_validate,
            generator,
        } = &cli.command
        {
            assert_eq!(input, &PathBuf::from("order.json"));
            assert_eq!(output.as_deref(), Some(std::path::Path::new("order.dubbo.go")));
            assert!(!no_validate);
            assert!(generator.is_none());
        } else {
            panic!("Expected Generate command");
        }
        assert!(cli.command.config().validate);
    }

    #[test]
    fn test_cli_flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "dubbogen",
            "generate",
            "order.json",
            "--no-validate",
            "--generator",
            "dubbogen",
        ])
        .unwrap();
        let config = cli.command.config();
        assert!(!config.validate);
        assert_eq!(config.generator_name, "dubbogen");
    }

    #[test]
    fn test_cli_parse_check_and_passes() {
        let cli = Cli::try_parse_from(["dubbogen", "check", "order.json"]).unwrap();
        assert!(matches!(cli.command, Command::Check { .. }));

        let cli = Cli::try_parse_from(["dubbogen", "passes"]).unwrap();
        assert!(matches!(cli.command, Command::Passes));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["dubbogen"]).is_err());
        assert!(Cli::try_parse_from(["dubbogen", "generate"]).is_err());
    }
}
