// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixpass: deterministic two-tone pixel-art identity document renderer
//
// Entry point. Initialises logging, loads the configuration and dispatches
// the requested subcommand. Exit status is 2 for invalid input and 1 for
// any other failure.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use pixpass_core::{DocumentConfig, ErrorClass, PixpassError};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries JSON results only.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Pixpass starting");

    let result = match load_config(cli.config.as_deref()) {
        Ok(config) => commands::run(cli.command, config).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("error: {err}");
            exit_code(&err)
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<DocumentConfig, PixpassError> {
    match path {
        Some(path) => DocumentConfig::from_json_file(path),
        None => Ok(DocumentConfig::default()),
    }
}

fn exit_code(err: &PixpassError) -> ExitCode {
    match err.class() {
        ErrorClass::InvalidInput => ExitCode::from(2),
        ErrorClass::Rendering => ExitCode::FAILURE,
    }
}
