// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Subcommand handlers. Each reads its inputs from disk, calls into the
// render crate, writes any output files and prints a JSON result on stdout.
//
// Document generation is CPU-bound, so it runs on tokio's blocking pool.
// `--country all` fans out one blocking task per country through a
// `JoinSet`; every task shares the same compositor and template cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use image::DynamicImage;
use pixpass_core::{Color, DocumentConfig, FieldValues, PixpassError, Result, profiles};
use pixpass_render::image::processor::encode_png;
use pixpass_render::{
    DirectoryTemplates, DocumentCompositor, GeneratedDocument, Pixelizer, TemplateCache, inspect,
    render_text,
};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{info, instrument};

use crate::cli::Command;

/// `--country` value that renders the whole catalogue.
pub const ALL_COUNTRIES: &str = "all";

/// What `generate` reports for every document it writes.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub country: String,
    pub width: u32,
    pub height: u32,
    pub fingerprint: String,
    pub generated_at: DateTime<Utc>,
    pub path: PathBuf,
}

impl DocumentSummary {
    fn new(document: &GeneratedDocument, path: PathBuf) -> Self {
        Self {
            country: document.country.clone(),
            width: document.width,
            height: document.height,
            fingerprint: document.fingerprint.clone(),
            generated_at: Utc::now(),
            path,
        }
    }
}

/// Run one subcommand to completion.
pub async fn run(command: Command, config: DocumentConfig) -> Result<()> {
    match command {
        Command::Stylize {
            input,
            output,
            threshold,
        } => {
            let png = Pixelizer::from_config(&config).stylize(&std::fs::read(&input)?, threshold)?;
            write_image(&output, &png)
        }
        Command::Validate { input, output } => {
            let png = Pixelizer::from_config(&config).validate_preprocessed(&std::fs::read(&input)?)?;
            write_image(&output, &png)
        }
        Command::Text {
            text,
            output,
            color,
        } => {
            let color = match color {
                Some(raw) => raw.parse::<Color>()?,
                None => config.palette.dark,
            };
            let run = render_text(&text, color);
            write_image(&output, &encode_png(&DynamicImage::ImageRgba8(run))?)
        }
        Command::Generate {
            country,
            photo,
            fields,
            output,
            templates,
        } => {
            let summaries =
                generate(config, &country, &photo, &fields, &output, templates.as_deref()).await?;
            print_json(&summaries)
        }
        Command::Countries => print_json(&profiles().collect::<Vec<_>>()),
        Command::Templates { dir } => {
            print_json(&DirectoryTemplates::from_config(dir, &config).available())
        }
        Command::Inspect { input } => print_json(&inspect(&std::fs::read(&input)?)?),
    }
}

/// Render one country, or every country when `country` is `all`.
///
/// With `all`, `output` is a directory that receives `<code>.png` per
/// country. Summaries come back in catalogue code order.
#[instrument(skip(config, templates))]
pub async fn generate(
    config: DocumentConfig,
    country: &str,
    photo: &Path,
    fields: &Path,
    output: &Path,
    templates: Option<&Path>,
) -> Result<Vec<DocumentSummary>> {
    let photo = Arc::new(std::fs::read(photo)?);
    let fields = Arc::new(load_fields(fields)?);
    let cache = match templates {
        Some(dir) => TemplateCache::new(DirectoryTemplates::from_config(dir, &config)),
        None => TemplateCache::empty(),
    };
    let compositor = DocumentCompositor::new(config, Arc::new(cache));

    if country != ALL_COUNTRIES {
        let task = render_task(compositor, country.to_owned(), photo, fields, output.to_owned());
        let summary = tokio::task::spawn_blocking(task)
            .await
            .map_err(join_error)??;
        return Ok(vec![summary]);
    }

    std::fs::create_dir_all(output)?;
    let mut tasks = JoinSet::new();
    for profile in profiles() {
        let path = output.join(format!("{}.png", profile.code));
        tasks.spawn_blocking(render_task(
            compositor.clone(),
            profile.code.to_owned(),
            Arc::clone(&photo),
            Arc::clone(&fields),
            path,
        ));
    }

    let mut summaries = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        summaries.push(joined.map_err(join_error)??);
    }
    summaries.sort_by(|a, b| a.country.cmp(&b.country));
    info!(count = summaries.len(), dir = %output.display(), "All countries generated");
    Ok(summaries)
}

fn render_task(
    compositor: DocumentCompositor,
    country: String,
    photo: Arc<Vec<u8>>,
    fields: Arc<FieldValues>,
    path: PathBuf,
) -> impl FnOnce() -> Result<DocumentSummary> + Send + 'static {
    move || {
        let document = compositor.generate(&country, &photo, &fields)?;
        std::fs::write(&path, &document.png)?;
        Ok(DocumentSummary::new(&document, path))
    }
}

/// Parse a fields file. Malformed JSON is reported as `Config`.
pub fn load_fields(path: &Path) -> Result<FieldValues> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        PixpassError::Config(format!("invalid fields file {}: {}", path.display(), err))
    })
}

fn join_error(err: tokio::task::JoinError) -> PixpassError {
    PixpassError::Io(std::io::Error::other(err.to_string()))
}

/// Write `png` to `path` and print what was written.
fn write_image(path: &Path, png: &[u8]) -> Result<()> {
    std::fs::write(path, png)?;
    info!(path = %path.display(), len = png.len(), "Image written");
    print_json(&inspect(png)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
