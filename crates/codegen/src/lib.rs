//! # casegen-codegen
//!
//! Type-switch case clause generation for sentinel-marked Go sources.
//!
//! This crate provides a code generation system that:
//! - Describes primitive types as ordered capability groups
//! - Renders one `case` clause per type from a fixed clause template
//! - Splices the clauses between `__BEG_GEN:<KEY>__` / `__END_GEN:<KEY>__`
//!   sentinels and runs a formatter on the result
//!
//! ## How it works
//!
//! A [`Preset`] names the regions to generate, each with a
//! [`ClauseTemplate`] and a [`CapabilityGroup`]. A [`Generator`] applies
//! the preset's [`Plan`] to a target file, reporting what changed.
//!
//! ## Example
//!
//! ```rust
//! use casegen_codegen::{Generator, Preset, RegionStatus};
//!
//! let source = "switch a := a.(type) {\n// __BEG_GEN:NEG__\n// __END_GEN:NEG__\n}";
//! let generator = Generator::new(Preset::BoundOperand.plan());
//!
//! let (content, regions) = generator.render(source)?;
//! assert!(content.contains("case int8:\n\treturn -a, nil"));
//! assert_eq!(regions[1].status, RegionStatus::Updated);
//! # Ok::<(), casegen_codegen::CodegenError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod formatter;
pub mod generator;
pub mod preset;
pub mod template;
pub mod types;

pub use casegen_inject::Error as InjectError;
pub use formatter::{FormatOutcome, Formatter};
pub use generator::{
    FileStatus, GenerateOptions, GeneratedFile, Generator, RegionReport, RegionStatus,
};
pub use preset::{Plan, Preset, RegionSpec};
pub use template::{CaseClause, ClauseTemplate, generate_cases, render_lines};
pub use types::{CapabilityGroup, TypeName};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A region could not be spliced
    #[error("Injection error: {0}")]
    Inject(#[from] casegen_inject::Error),

    /// The target file could not be read or written
    #[error("Failed to {operation} {}: {source}", .path.display())]
    Io {
        /// What was being attempted ("read" or "write")
        operation: &'static str,
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Check mode found regions that would change
    #[error("Generated regions are out of date in {}: {}", .path.display(), .regions.join(", "))]
    Stale {
        /// Target file
        path: PathBuf,
        /// Keys of the regions that would change
        regions: Vec<String>,
    },
}

impl CodegenError {
    pub(crate) fn io(operation: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codegen_error_inject_from() {
        let inject_error = casegen_inject::Error::MisorderedSentinels {
            key: "ADD".to_string(),
            begin_line: 4,
            end_line: 2,
        };
        let error: CodegenError = inject_error.into();
        assert!(matches!(error, CodegenError::Inject(_)));
        assert!(error.to_string().starts_with("Injection error: Sentinels for region 'ADD'"));
    }

    #[test]
    fn test_codegen_error_io_display() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = CodegenError::io("read", Path::new("funcs.go"), io_error);
        assert_eq!(error.to_string(), "Failed to read funcs.go: file not found");
    }

    #[test]
    fn test_codegen_error_stale_display() {
        let error = CodegenError::Stale {
            path: PathBuf::from("funcs.go"),
            regions: vec!["ADD".to_string(), "NEG".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Generated regions are out of date in funcs.go: ADD, NEG"
        );
    }
}
