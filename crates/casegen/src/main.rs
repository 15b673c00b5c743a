//! casegen CLI entry point.

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stderr)]

use casegen::cli::{self, EXIT_OK, exit_code_for, render_error};
use casegen::commands::{self, Command};
use casegen::tracing::{TracingConfig, TracingFormat, init_tracing};
use std::io::Write;

fn main() {
    // NOTE: Using eprintln! in panic hook is intentional - tracing infrastructure
    // may be corrupted during a panic, so we use the most reliable output method.
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    let cli = cli::parse();

    let tracing_config = TracingConfig {
        format: if cli.json {
            TracingFormat::Json
        } else {
            cli.log_format
        },
        level: cli.level.into(),
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("{e:?}");
        std::process::exit(cli::EXIT_CLI);
    }

    let json_mode = cli.json;
    let command: Command = cli.command.into();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = commands::execute(command, &mut out);
    let _ = out.flush();
    drop(out);

    match result {
        Ok(()) => std::process::exit(EXIT_OK),
        Err(err) => {
            let code = exit_code_for(&err);
            render_error(err, json_mode);
            std::process::exit(code);
        }
    }
}
