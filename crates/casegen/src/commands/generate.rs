//! `casegen generate`: regenerate the marked regions of a file.

use crate::cli::{CliError, OutputFormat};
use casegen_codegen::{
    FormatOutcome, Formatter, GenerateOptions, GeneratedFile, Generator, Preset,
};
use std::io::Write;
use std::path::PathBuf;

/// Arguments of the generate command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Target file.
    pub file: PathBuf,
    /// Preset to apply.
    pub preset: Preset,
    /// Check instead of writing.
    pub check: bool,
    /// Run the formatter after writing.
    pub format: bool,
    /// Formatter command line.
    pub formatter: String,
    /// Report format.
    pub output: OutputFormat,
}

/// Run the generator and write the report.
///
/// # Errors
///
/// Returns an error if the formatter command line is blank, generation fails,
/// check mode finds stale regions, or the report cannot be written.
pub fn execute<W: Write>(args: &GenerateArgs, out: &mut W) -> Result<(), CliError> {
    tracing::info!(
        file = %args.file.display(),
        preset = %args.preset,
        check = args.check,
        "Generating regions"
    );

    let mut generator = Generator::new(args.preset.plan());
    if args.format {
        let formatter = Formatter::from_command_line(&args.formatter).ok_or_else(|| {
            CliError::config_with_help(
                "formatter command line is empty",
                "Pass --formatter '<program> [args]' or use --no-format",
            )
        })?;
        generator = generator.with_formatter(formatter);
    }
    let options = GenerateOptions {
        check: args.check,
        format: args.format,
    };
    let generated = generator.generate(&args.file, &options)?;

    match args.output {
        OutputFormat::Text => write_text(&generated, out)?,
        OutputFormat::Json => write_json(&generated, out)?,
    }
    Ok(())
}

fn describe_format(outcome: Option<&FormatOutcome>) -> String {
    match outcome {
        None => "not run".to_string(),
        Some(FormatOutcome::Formatted) => "formatted".to_string(),
        Some(FormatOutcome::Failed { code: Some(code) }) => {
            format!("failed (exit {code}), ignored")
        }
        Some(FormatOutcome::Failed { code: None }) => "failed (terminated), ignored".to_string(),
        Some(FormatOutcome::Unavailable { reason }) => format!("unavailable ({reason}), ignored"),
    }
}

fn write_text<W: Write>(generated: &GeneratedFile, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}: {}", generated.path.display(), generated.status)?;
    for region in &generated.regions {
        writeln!(
            out,
            "  {:<8} {:>3} clauses  {}",
            region.key, region.clauses, region.status
        )?;
    }
    if generated.formatted.is_some() {
        writeln!(
            out,
            "  formatter: {}",
            describe_format(generated.formatted.as_ref())
        )?;
    }
    Ok(())
}

fn write_json<W: Write>(generated: &GeneratedFile, out: &mut W) -> std::io::Result<()> {
    let report = serde_json::json!({
        "path": generated.path.display().to_string(),
        "status": generated.status,
        "regions": generated.regions,
        "formatter": describe_format(generated.formatted.as_ref()),
    });
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
