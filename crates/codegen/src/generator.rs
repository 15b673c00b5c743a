//! File generation engine
//!
//! This module handles the core file generation logic, including:
//! - Splicing every region of a plan into the target text
//! - Checking whether a file is up to date
//! - Writing the file and running the formatter

use crate::formatter::{FormatOutcome, Formatter};
use crate::preset::Plan;
use crate::{CodegenError, Result};
use casegen_inject::{inject, read_region};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Status of a single region after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionStatus {
    /// The region's clauses changed.
    Updated,
    /// The region already held the generated clauses.
    Unchanged,
    /// The file has no sentinels for this region.
    Skipped,
}

impl fmt::Display for RegionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "Updated"),
            Self::Unchanged => write!(f, "Unchanged"),
            Self::Skipped => write!(f, "Skipped"),
        }
    }
}

/// Result for one region of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionReport {
    /// Normalized region key.
    pub key: String,
    /// Number of clauses generated for the region.
    pub clauses: usize,
    /// What happened to the region.
    pub status: RegionStatus,
}

/// Status of the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// File was rewritten.
    Updated,
    /// File content was already up to date.
    Unchanged,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "Updated"),
            Self::Unchanged => write!(f, "Unchanged"),
        }
    }
}

/// Generated file information
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path of the target file
    pub path: PathBuf,
    /// Spliced content, before formatting
    pub content: String,
    /// File status
    pub status: FileStatus,
    /// Per-region results, in plan order
    pub regions: Vec<RegionReport>,
    /// Formatter result, if the formatter ran
    pub formatted: Option<FormatOutcome>,
}

/// Options for file generation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Check mode: don't write the file, fail if any region is stale
    pub check: bool,
    /// Run the formatter after writing
    pub format: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            check: false,
            format: true,
        }
    }
}

/// Applies a [`Plan`] to target files.
#[derive(Debug)]
pub struct Generator {
    plan: Plan,
    formatter: Formatter,
}

impl Generator {
    /// Create a generator for a plan, formatting with `go fmt`.
    #[must_use]
    pub fn new(plan: Plan) -> Self {
        Self {
            plan,
            formatter: Formatter::default(),
        }
    }

    /// Use a different formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// The plan being applied.
    #[must_use]
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Splice every region of the plan into `content`.
    ///
    /// Regions are applied in plan order. A region whose sentinels are
    /// missing is reported as [`RegionStatus::Skipped`] and left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if a region's sentinels are out of order.
    pub fn render(&self, content: &str) -> Result<(String, Vec<RegionReport>)> {
        let mut content = content.to_string();
        let mut reports = Vec::with_capacity(self.plan.regions.len());

        for spec in &self.plan.regions {
            let key = spec.region_key();
            let lines = spec.lines();

            let status = match read_region(&content, &key)? {
                None => RegionStatus::Skipped,
                Some(existing) if matches_ignoring_layout(&existing, &lines) => {
                    RegionStatus::Unchanged
                }
                Some(_) => RegionStatus::Updated,
            };

            if status != RegionStatus::Skipped {
                content = inject(&content, &key, &lines)?;
            }

            tracing::debug!(
                key = %key,
                status = %status,
                clauses = spec.group.len(),
                "Rendered region"
            );
            reports.push(RegionReport {
                key: key.to_string(),
                clauses: spec.group.len(),
                status,
            });
        }

        Ok((content, reports))
    }

    /// Generate the regions of `path`.
    ///
    /// The file is only written when at least one region changed; the
    /// formatter only runs after a write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, if a region's
    /// sentinels are out of order, or in check mode if any region is stale.
    pub fn generate(&self, path: &Path, options: &GenerateOptions) -> Result<GeneratedFile> {
        let original =
            std::fs::read_to_string(path).map_err(|e| CodegenError::io("read", path, e))?;
        let (content, regions) = self.render(&original)?;

        let stale: Vec<String> = regions
            .iter()
            .filter(|r| r.status == RegionStatus::Updated)
            .map(|r| r.key.clone())
            .collect();

        if regions.iter().all(|r| r.status == RegionStatus::Skipped) {
            tracing::warn!(
                path = %path.display(),
                preset = %self.plan.preset,
                "No generated regions found"
            );
        }

        let (status, formatted) = if stale.is_empty() {
            (FileStatus::Unchanged, None)
        } else if options.check {
            return Err(CodegenError::Stale {
                path: path.to_path_buf(),
                regions: stale,
            });
        } else {
            std::fs::write(path, &content).map_err(|e| CodegenError::io("write", path, e))?;
            tracing::info!(path = %path.display(), regions = ?stale, "Generated");

            let formatted = options.format.then(|| self.formatter.run(path));
            (FileStatus::Updated, formatted)
        };

        Ok(GeneratedFile {
            path: path.to_path_buf(),
            content,
            status,
            regions,
            formatted,
        })
    }
}

/// Compare region interiors ignoring leading and trailing whitespace on each
/// line. Indentation belongs to the formatter, so a formatted region still
/// counts as up to date.
fn matches_ignoring_layout<A: AsRef<str>, B: AsRef<str>>(existing: &[A], generated: &[B]) -> bool {
    existing.len() == generated.len()
        && existing
            .iter()
            .zip(generated)
            .all(|(a, b)| a.as_ref().trim() == b.as_ref().trim())
}
