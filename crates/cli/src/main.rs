// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

mod cmd_run;

use torq::cli::parse_args_from;
use torq::error::{Error, ExitCode};
use torq::{Pipeline, all_actions};
use tracing_subscriber::EnvFilter;

fn main() -> std::process::ExitCode {
    init_logging();

    let registry = all_actions();
    let invocation = match parse_args_from(&registry, std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };

    match cmd_run::run(invocation, &Pipeline::new(registry)) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("torq: {:#}", e);
            e.downcast_ref::<Error>().map_or(ExitCode::InternalError, Error::exit_code).into()
        }
    }
}

/// Diagnostics go to stderr, filtered by `TORQ_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_env("TORQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
