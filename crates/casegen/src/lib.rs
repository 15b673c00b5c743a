//! casegen: regenerate sentinel-marked type-switch case clauses.
//!
//! The binary is a thin shell over [`casegen_codegen`]; this library holds
//! the argument parsing, logging setup and command implementations so they
//! can be tested without spawning a process.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod cli;
pub mod commands;
pub mod tracing;
