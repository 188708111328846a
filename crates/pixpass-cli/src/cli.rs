// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Renders two-tone pixel-art identity documents.
#[derive(Debug, Parser)]
#[command(name = "pixpass", version, about)]
pub struct Cli {
    /// JSON file overriding the default rendering configuration.
    #[arg(long, global = true, value_name = "JSON")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Turn a photo into a two-tone portrait at the configured photo size.
    Stylize {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Luminance cut-off in [0, 1]. Values outside are clamped.
        #[arg(long, default_value_t = 0.5)]
        threshold: f64,
    },
    /// Accept an already-pixelized portrait unchanged.
    Validate {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Render a string with the bitmap font.
    Text {
        text: String,
        #[arg(short, long)]
        output: PathBuf,
        /// Ink as `#rrggbb`; defaults to the palette's dark colour.
        #[arg(long)]
        color: Option<String>,
    },
    /// Compose a finished document.
    Generate {
        /// Country code, or `all` to render every country.
        #[arg(long)]
        country: String,
        /// Stylised portrait PNG.
        #[arg(long)]
        photo: PathBuf,
        /// JSON object with name, dob, sex, city, number and expiry.
        #[arg(long)]
        fields: PathBuf,
        /// Output PNG, or a directory when `--country all`.
        #[arg(short, long)]
        output: PathBuf,
        /// Directory holding `passport_<code>.png` templates.
        #[arg(long)]
        templates: Option<PathBuf>,
    },
    /// Print the country catalogue as JSON.
    Countries,
    /// List country codes with a template asset in `dir`.
    Templates {
        #[arg(long)]
        dir: PathBuf,
    },
    /// Print format, size and channel count of an image.
    Inspect { input: PathBuf },
}
