//! `casegen plan`: print the regions a preset generates.
//!
//! The text form is ready to paste into a skeleton file: each region is
//! printed between its sentinel comments.

use crate::cli::{CliError, OutputFormat};
use casegen_codegen::{Plan, Preset};
use std::io::Write;

/// Write the plan for `preset` to `out`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn execute<W: Write>(
    preset: Preset,
    output: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let plan = preset.plan();
    tracing::debug!(preset = %preset, regions = plan.regions.len(), "Describing plan");

    match output {
        OutputFormat::Text => write_text(&plan, out)?,
        OutputFormat::Json => {
            let regions: Vec<_> = plan
                .regions
                .iter()
                .map(|region| {
                    serde_json::json!({
                        "key": region.region_key().as_str(),
                        "template": region.template,
                        "group": region.group,
                        "lines": region.lines(),
                    })
                })
                .collect();
            let document = serde_json::json!({ "preset": plan.preset, "regions": regions });
            serde_json::to_writer_pretty(&mut *out, &document).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(plan: &Plan, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "// preset: {}", plan.preset)?;
    for region in &plan.regions {
        let key = region.region_key();
        writeln!(out)?;
        writeln!(
            out,
            "// {} ({}, {} {} types)",
            key.begin_marker(),
            region.template,
            region.group.len(),
            region.group.name()
        )?;
        for line in region.lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "// {}", key.end_marker())?;
    }
    Ok(())
}
