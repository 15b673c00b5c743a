//! Command implementations.
//!
//! Commands write their report to the given writer so the binary can pass
//! stdout and tests can capture it.

pub mod generate;
pub mod plan;

use crate::cli::{CliError, Commands, OutputFormat};
use casegen_codegen::Preset;
use std::io::Write;

/// A parsed command, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Regenerate the regions of one file.
    Generate(generate::GenerateArgs),
    /// Print what a preset generates.
    Plan {
        /// Preset to describe.
        preset: Preset,
        /// Output format.
        output: OutputFormat,
    },
}

impl Command {
    /// Short name used in the command span.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Generate(_) => "generate",
            Self::Plan { .. } => "plan",
        }
    }
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Generate {
                file,
                preset,
                check,
                no_format,
                formatter,
                output,
            } => Self::Generate(generate::GenerateArgs {
                file,
                preset,
                check,
                format: !no_format,
                formatter,
                output,
            }),
            Commands::Plan { preset, output } => Self::Plan { preset, output },
        }
    }
}

/// Execute a command, writing its report to `out`.
///
/// # Errors
///
/// Returns an error if the command fails or its report cannot be written.
pub fn execute<W: Write>(command: Command, out: &mut W) -> Result<(), CliError> {
    let span = crate::command_span!(command.name());
    let _guard = span.enter();

    match command {
        Command::Generate(args) => generate::execute(&args, out),
        Command::Plan { preset, output } => plan::execute(preset, output, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_command_conversion() {
        let command: Command = Commands::Generate {
            file: PathBuf::from("funcs.go"),
            preset: Preset::BoundOperand,
            check: true,
            no_format: true,
            formatter: "go fmt".to_string(),
            output: OutputFormat::Text,
        }
        .into();

        let Command::Generate(args) = command else {
            panic!("expected generate command");
        };
        assert!(args.check);
        assert!(!args.format);
        assert_eq!(args.preset, Preset::BoundOperand);
    }

    #[test]
    fn test_command_names() {
        let plan = Command::Plan {
            preset: Preset::AssertOperands,
            output: OutputFormat::Json,
        };
        assert_eq!(plan.name(), "plan");
    }
}
