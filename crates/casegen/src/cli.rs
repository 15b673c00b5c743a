//! Command-line surface: argument parsing, error types and exit codes.

use casegen_codegen::{CodegenError, Preset};
use clap::{Parser, Subcommand, ValueEnum};
use miette::{Diagnostic, Report};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::tracing::{LogLevel, TracingFormat};

/// Success exit code
pub const EXIT_OK: i32 = 0;
/// `--check` found stale regions
pub const EXIT_STALE: i32 = 1;
/// CLI or configuration error exit code
pub const EXIT_CLI: i32 = 2;
/// Generation error exit code
pub const EXIT_GENERATE: i32 = 3;

/// Environment variable holding the default formatter command line
pub const FORMATTER_ENV: &str = "CASEGEN_FORMATTER";

#[derive(Parser, Debug)]
#[command(name = "casegen")]
#[command(about = "Regenerate sentinel-marked type-switch case clauses in Go sources")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Log output format",
        default_value = "compact",
        value_enum
    )]
    pub log_format: TracingFormat,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Regenerate the marked regions of a source file")]
    Generate {
        #[arg(help = "Source file containing __BEG_GEN/__END_GEN sentinels")]
        file: PathBuf,
        #[arg(long, short = 'p', help = "Generation preset", value_enum)]
        preset: Preset,
        #[arg(long, help = "Do not write; fail if any region is out of date")]
        check: bool,
        #[arg(long, help = "Skip the formatter step")]
        no_format: bool,
        #[arg(
            long,
            env = FORMATTER_ENV,
            help = "Formatter command line; {path} is replaced by the file, otherwise appended",
            default_value = "go fmt"
        )]
        formatter: String,
        #[arg(long, help = "Report format", default_value = "text", value_enum)]
        output: OutputFormat,
    },
    #[command(about = "Show the regions and clauses a preset generates")]
    Plan {
        #[arg(long, short = 'p', help = "Generation preset", value_enum)]
        preset: Preset,
        #[arg(long, help = "Output format", default_value = "text", value_enum)]
        output: OutputFormat,
    },
}

/// Output format for command results
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON document
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Json => "json",
        };
        write!(f, "{s}")
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

/// CLI-specific error types with proper exit code mapping
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Invalid configuration or arguments (exit code 2)
    #[error("CLI/configuration error: {message}")]
    #[diagnostic(code(casegen::cli::config))]
    Config {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },

    /// Generated regions are out of date (exit code 1)
    #[error("{message}")]
    #[diagnostic(
        code(casegen::cli::stale),
        help("Run the same command without --check to regenerate")
    )]
    Stale {
        /// The error message
        message: String,
    },

    /// Generation failed (exit code 3)
    #[error("Generation error: {message}")]
    #[diagnostic(code(casegen::cli::generate))]
    Generate {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },

    /// Writing command output failed (exit code 3)
    #[error("Failed to write output: {0}")]
    #[diagnostic(code(casegen::cli::output))]
    Output(#[from] io::Error),
}

impl CliError {
    /// Create a new configuration error with help text
    #[must_use]
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

/// Convert `casegen_codegen::CodegenError` to the matching `CliError` variant.
impl From<CodegenError> for CliError {
    fn from(err: CodegenError) -> Self {
        match err {
            CodegenError::Stale { .. } => Self::Stale {
                message: err.to_string(),
            },
            CodegenError::Inject(inner) => Self::Generate {
                message: inner.to_string(),
                help: Some(
                    "Each region needs its __BEG_GEN line before its __END_GEN line".to_string(),
                ),
            },
            CodegenError::Io { .. } => Self::Generate {
                message: err.to_string(),
                help: Some("Check file permissions and ensure the path exists".to_string()),
            },
        }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(err: &CliError) -> i32 {
    match err {
        CliError::Stale { .. } => EXIT_STALE,
        CliError::Config { .. } => EXIT_CLI,
        CliError::Generate { .. } | CliError::Output(_) => EXIT_GENERATE,
    }
}

/// Print an error to stderr, as JSON or as a miette report.
#[allow(clippy::print_stderr)]
pub fn render_error(err: CliError, json_mode: bool) {
    if json_mode {
        let envelope = serde_json::json!({
            "status": "error",
            "error": {
                "code": match &err {
                    CliError::Config { .. } => "config",
                    CliError::Stale { .. } => "stale",
                    CliError::Generate { .. } => "generate",
                    CliError::Output(_) => "output",
                },
                "message": err.to_string(),
            }
        });
        eprintln!("{envelope}");
    } else {
        let report = Report::new(err);
        eprintln!("{report:?}");
    }
    let _ = io::stderr().flush();
}
