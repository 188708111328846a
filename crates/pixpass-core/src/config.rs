// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document rendering configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PixpassError, Result};
use crate::types::{Color, Palette, Size, SourceFormat};

/// Longest side, in pixels, of a finished document.
pub const MAX_OUTPUT_SIDE: u32 = 16_384;

/// Rendering settings shared by the pixelizer and the compositor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Two-tone palette for stylised photos and default ink.
    pub palette: Palette,
    /// Background of synthesised templates.
    pub paper: Color,
    /// Native (base) template resolution.
    pub template: Size,
    /// Exact size of a stylised photo.
    pub photo: Size,
    /// Integer nearest-neighbour upscale applied to the finished document.
    pub export_scale: u32,
    /// Template asset naming: `<prefix><country><extension>`.
    pub template_prefix: String,
    pub template_extension: String,
    /// Limits enforced on source images.
    pub limits: ProcessingLimits,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            palette: Palette::DEFAULT,
            paper: Color::hex(0xd4c8be),
            template: Size::new(130, 162),
            photo: Size::new(40, 48),
            export_scale: 6,
            template_prefix: "passport_".into(),
            template_extension: ".png".into(),
            limits: ProcessingLimits::default(),
        }
    }
}

impl DocumentConfig {
    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would produce empty or oversized rasters.
    pub fn validate(&self) -> Result<()> {
        if self.template.width == 0 || self.template.height == 0 {
            return Err(PixpassError::Config(format!(
                "template size must be non-zero, got {}",
                self.template
            )));
        }
        if self.photo.width == 0 || self.photo.height == 0 {
            return Err(PixpassError::Config(format!(
                "photo size must be non-zero, got {}",
                self.photo
            )));
        }
        if self.export_scale == 0 {
            return Err(PixpassError::Config("export scale must be at least 1".into()));
        }
        self.output_size()?;
        Ok(())
    }

    /// Final document size after upscaling.
    ///
    /// Fails when either side is zero, overflows, or exceeds [`MAX_OUTPUT_SIDE`].
    pub fn output_size(&self) -> Result<Size> {
        let scaled = |side: u32| {
            side.checked_mul(self.export_scale)
                .filter(|&px| px > 0 && px <= MAX_OUTPUT_SIDE)
        };
        match (scaled(self.template.width), scaled(self.template.height)) {
            (Some(width), Some(height)) => Ok(Size::new(width, height)),
            _ => Err(PixpassError::Config(format!(
                "export scale {} takes the {} template past {} px",
                self.export_scale, self.template, MAX_OUTPUT_SIDE
            ))),
        }
    }
}

/// Limits applied to raw source images before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingLimits {
    /// Maximum encoded size in bytes.
    pub max_file_size: usize,
    pub allowed_formats: Vec<SourceFormat>,
}

impl Default for ProcessingLimits {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            allowed_formats: vec![SourceFormat::Jpeg, SourceFormat::Png, SourceFormat::Gif],
        }
    }
}
