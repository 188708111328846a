// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Template assets: where decoded country templates come from, and a
// single-flight cache that loads each one at most once.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use image::{DynamicImage, RgbaImage};
use pixpass_core::{DocumentConfig, PixpassError, Result};
use tracing::{debug, info, instrument, warn};

/// Supplies decoded template rasters by country code.
///
/// `Ok(None)` means no asset exists; `Err` means one exists but could not
/// be read or decoded. The compositor treats both as "synthesise instead".
pub trait TemplateSource: Send + Sync {
    fn load(&self, country_code: &str) -> Result<Option<DynamicImage>>;
}

/// Never has a template; every document gets a synthesised one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTemplates;

impl TemplateSource for NoTemplates {
    fn load(&self, _country_code: &str) -> Result<Option<DynamicImage>> {
        Ok(None)
    }
}

/// Templates stored as `<root>/<prefix><code><extension>`.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
    prefix: String,
    extension: String,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// Use the naming convention from `config`.
    pub fn from_config(root: impl Into<PathBuf>, config: &DocumentConfig) -> Self {
        Self::new(
            root,
            config.template_prefix.clone(),
            config.template_extension.clone(),
        )
    }

    pub fn path_for(&self, country_code: &str) -> PathBuf {
        self.root
            .join(format!("{}{}{}", self.prefix, country_code, self.extension))
    }

    /// Country codes with a template file present, sorted.
    ///
    /// An unreadable directory yields an empty list.
    pub fn available(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(root = %self.root.display(), error = %err, "Template directory unreadable");
                return Vec::new();
            }
        };
        let mut codes: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter_map(|name| {
                name.strip_prefix(self.prefix.as_str())
                    .and_then(|rest| rest.strip_suffix(self.extension.as_str()))
                    .filter(|code| !code.is_empty())
                    .map(str::to_owned)
            })
            .collect();
        codes.sort();
        codes
    }
}

impl TemplateSource for DirectoryTemplates {
    #[instrument(skip(self))]
    fn load(&self, country_code: &str) -> Result<Option<DynamicImage>> {
        let path = self.path_for(country_code);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No template asset");
                return Ok(None);
            }
            Err(err) => return Err(PixpassError::Io(err)),
        };
        let image = image::load_from_memory(&bytes).map_err(|err| {
            PixpassError::ImageError(format!(
                "failed to decode template {}: {}",
                path.display(),
                err
            ))
        })?;
        info!(path = %path.display(), width = image.width(), height = image.height(), "Template loaded");
        Ok(Some(image))
    }
}

type Slot = Arc<OnceLock<Option<Arc<RgbaImage>>>>;

/// Decoded templates keyed by country code.
///
/// Each key is loaded at most once, even under concurrent first access:
/// the first caller runs the load while the rest wait on the same slot.
/// Entries are immutable once stored. Failed and missing loads are cached
/// as `None`.
pub struct TemplateCache {
    source: Box<dyn TemplateSource>,
    slots: Mutex<HashMap<String, Slot>>,
}

impl TemplateCache {
    pub fn new(source: impl TemplateSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// A cache that never finds a template.
    pub fn empty() -> Self {
        Self::new(NoTemplates)
    }

    /// The template for `country_code`, loading it on first use.
    pub fn get(&self, country_code: &str) -> Option<Arc<RgbaImage>> {
        let slot = {
            let mut slots = self
                .slots
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            Arc::clone(slots.entry(country_code.to_owned()).or_default())
        };
        slot.get_or_init(|| self.load(country_code)).clone()
    }

    /// Number of keys that have been requested so far.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load(&self, country_code: &str) -> Option<Arc<RgbaImage>> {
        match self.source.load(country_code) {
            Ok(Some(image)) => Some(Arc::new(image.into_rgba8())),
            Ok(None) => None,
            Err(err) => {
                warn!(country = country_code, error = %err, "Template asset unusable");
                None
            }
        }
    }
}

impl std::fmt::Debug for TemplateCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateCache")
            .field("entries", &self.len())
            .finish()
    }
}
