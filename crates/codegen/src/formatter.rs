//! External source formatter integration
//!
//! After a file is rewritten the formatter is run on it to normalize layout.
//! The run is best effort: a missing tool or a non-zero exit is logged and
//! otherwise ignored, so a generation run never fails because of formatting.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Argument replaced by the target path.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// What happened when the formatter ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The formatter exited successfully.
    Formatted,
    /// The formatter ran and exited unsuccessfully.
    Failed {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
    },
    /// The formatter could not be started.
    Unavailable {
        /// Reason the process could not be spawned.
        reason: String,
    },
}

/// A formatter command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    program: String,
    args: Vec<String>,
}

impl Formatter {
    /// Create a formatter from a program and its arguments.
    ///
    /// An argument equal to `{path}` is replaced by the target path. If no
    /// argument is, the path is appended.
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `go fmt <path>`
    #[must_use]
    pub fn go_fmt() -> Self {
        Self::new("go", ["fmt"])
    }

    /// Parse a whitespace-separated command line. Returns `None` when the
    /// line is blank.
    #[must_use]
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    /// Program to run.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments to pass when formatting `path`.
    #[must_use]
    pub fn args_for(&self, path: &Path) -> Vec<OsString> {
        let mut substituted = false;
        let mut args: Vec<OsString> = self
            .args
            .iter()
            .map(|arg| {
                if arg == PATH_PLACEHOLDER {
                    substituted = true;
                    path.as_os_str().to_os_string()
                } else {
                    OsString::from(arg)
                }
            })
            .collect();

        if !substituted {
            args.push(path.as_os_str().to_os_string());
        }
        args
    }

    /// Run the formatter on `path` and wait for it to finish.
    ///
    /// Never fails; the outcome is returned for reporting only.
    pub fn run(&self, path: &Path) -> FormatOutcome {
        tracing::debug!(
            program = %self.program,
            path = %path.display(),
            "Running formatter"
        );

        let output = Command::new(&self.program)
            .args(self.args_for(path))
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) if output.status.success() => {
                tracing::info!(path = %path.display(), "Formatted");
                FormatOutcome::Formatted
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                tracing::warn!(
                    program = %self.program,
                    code = ?output.status.code(),
                    stderr = %stderr.trim(),
                    "Formatter exited unsuccessfully, ignoring"
                );
                FormatOutcome::Failed {
                    code: output.status.code(),
                }
            }
            Err(e) => {
                tracing::warn!(
                    program = %self.program,
                    error = %e,
                    "Formatter could not be started, ignoring"
                );
                FormatOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::go_fmt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_is_go_fmt() {
        let formatter = Formatter::default();
        assert_eq!(formatter.program(), "go");
        assert_eq!(
            formatter.args_for(Path::new("funcs.go")),
            vec![OsString::from("fmt"), OsString::from("funcs.go")]
        );
    }

    #[test]
    fn test_from_command_line() {
        let formatter = Formatter::from_command_line("  gofmt   -w ").unwrap();
        assert_eq!(formatter, Formatter::new("gofmt", ["-w"]));
        assert!(Formatter::from_command_line("   ").is_none());
    }

    #[test]
    fn test_path_placeholder() {
        let formatter = Formatter::new("fmt-tool", ["--in", "{path}", "--quiet"]);
        let path = PathBuf::from("pkg/funcs.go");
        assert_eq!(
            formatter.args_for(&path),
            vec![
                OsString::from("--in"),
                OsString::from("pkg/funcs.go"),
                OsString::from("--quiet"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_success() {
        let formatter = Formatter::new("true", Vec::<String>::new());
        assert_eq!(formatter.run(Path::new("ignored")), FormatOutcome::Formatted);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failure_is_reported() {
        let formatter = Formatter::new("false", Vec::<String>::new());
        assert_eq!(
            formatter.run(Path::new("ignored")),
            FormatOutcome::Failed { code: Some(1) }
        );
    }

    #[test]
    fn test_run_missing_program() {
        let formatter = Formatter::new("casegen-no-such-formatter", Vec::<String>::new());
        assert!(matches!(
            formatter.run(Path::new("ignored")),
            FormatOutcome::Unavailable { .. }
        ));
    }
}
