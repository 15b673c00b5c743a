//! Sentinel-delimited region splicing for generated source files.
//!
//! A hand-maintained file marks the places where generated code lives with a
//! pair of sentinel lines:
//!
//! ```text
//!     // __BEG_GEN:ADD__
//!     ... generated lines, replaced on every run ...
//!     // __END_GEN:ADD__
//! ```
//!
//! This crate finds such a pair for a [`RegionKey`] and replaces everything
//! strictly between the two sentinel lines. The sentinel lines themselves are
//! never touched, so the file can be regenerated any number of times.
//!
//! # Example
//!
//! ```rust
//! use casegen_inject::{inject, RegionKey};
//!
//! let source = "switch a {\n// __BEG_GEN:ADD__\nstale\n// __END_GEN:ADD__\n}";
//! let key = RegionKey::new("add");
//!
//! let updated = inject(source, &key, &["case int:", "\treturn a + b.(int), nil"])?;
//! assert_eq!(
//!     updated,
//!     "switch a {\n// __BEG_GEN:ADD__\ncase int:\n\treturn a + b.(int), nil\n// __END_GEN:ADD__\n}"
//! );
//! # Ok::<(), casegen_inject::Error>(())
//! ```
//!
//! # Matching rules
//!
//! - Sentinels are found by substring search, so comment syntax, indentation
//!   and extra decoration around the marker are ignored.
//! - When several lines carry the same marker, the last one wins. Begin and
//!   end markers are resolved independently.
//! - A key whose begin or end marker is absent is skipped: the input comes
//!   back unchanged and no error is raised.
//! - A begin sentinel at or after its end sentinel is rejected with
//!   [`Error::MisorderedSentinels`].

#![warn(missing_docs)]

mod marker;
mod region;

pub use marker::RegionKey;
pub use region::{Region, inject, locate_region, read_region, splice_interior};

/// Errors that can occur while splicing a region.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The begin sentinel was found on or after the end sentinel.
    #[error(
        "Sentinels for region '{key}' are out of order: begin on line {begin_line}, end on line {end_line}"
    )]
    MisorderedSentinels {
        /// Normalized region key.
        key: String,
        /// One-based line of the begin sentinel.
        begin_line: usize,
        /// One-based line of the end sentinel.
        end_line: usize,
    },

    /// A region does not fit the text it is being applied to.
    #[error("Region '{key}' ends on line {end_line} but the text only has {line_count} lines")]
    RegionOutOfBounds {
        /// Normalized region key.
        key: String,
        /// One-based line of the end sentinel.
        end_line: usize,
        /// Number of lines in the text.
        line_count: usize,
    },
}

/// Result type for region operations.
pub type Result<T> = std::result::Result<T, Error>;
