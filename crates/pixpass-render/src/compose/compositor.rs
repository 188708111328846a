// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document compositor: template, photo and field text assembled at base
// resolution, then upscaled by the integer export factor.
//
// Pipeline:
//   1. acquire the country template (or synthesise one)
//   2. nearest-neighbour normalise it to the base size
//   3. paste the stylised photo at the profile's photo anchor
//   4. render and paste every supplied field
//   5. nearest-neighbour upscale by the export scale
//   6. encode to PNG

use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use pixpass_core::{
    Align, CountryProfile, DocumentConfig, FieldLayout, FieldName, FieldValues, Result,
    require_profile,
};
use tracing::{debug, info, instrument, warn};

use super::cache::TemplateCache;
use super::normalize::normalize_field;
use super::template::synthesize_template;
use crate::fingerprint::fingerprint;
use crate::glyph::{GLYPH_HEIGHT, render_text};
use crate::image::processor::{ImageProcessor, encode_png};

/// An encoded, finished document.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub country: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
    /// SHA-256 of `png`, lowercase hex.
    pub fingerprint: String,
}

/// Top-left corner for a rendered run of `run_width` pixels in `layout`.
///
/// Runs sit in the 8 rows directly above the anchor line. Right-aligned
/// runs end at column `layout.x - 1`.
pub fn field_origin(layout: &FieldLayout, run_width: u32) -> (i64, i64) {
    let y = i64::from(layout.y) - i64::from(GLYPH_HEIGHT);
    let x = match layout.align {
        Align::Left => i64::from(layout.x),
        Align::Right => i64::from(layout.x) - i64::from(run_width),
    };
    (x, y)
}

/// Assembles documents. Cheap to clone; clones share the template cache.
#[derive(Debug, Clone)]
pub struct DocumentCompositor {
    config: DocumentConfig,
    templates: Arc<TemplateCache>,
}

impl DocumentCompositor {
    pub fn new(config: DocumentConfig, templates: Arc<TemplateCache>) -> Self {
        Self { config, templates }
    }

    /// A compositor that always synthesises templates.
    pub fn without_templates(config: DocumentConfig) -> Self {
        Self::new(config, Arc::new(TemplateCache::empty()))
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Generate an encoded document from an encoded stylised photo.
    ///
    /// The photo must decode to exactly the configured photo size.
    #[instrument(skip(self, photo_png, fields), fields(photo_len = photo_png.len()))]
    pub fn generate(
        &self,
        country_code: &str,
        photo_png: &[u8],
        fields: &FieldValues,
    ) -> Result<GeneratedDocument> {
        require_profile(country_code)?;
        let photo = ImageProcessor::from_bytes(photo_png)?
            .require_size(self.config.photo)?
            .into_rgba8();

        let document = self.generate_image(country_code, &photo, fields)?;
        let (width, height) = document.dimensions();
        let png = encode_png(&DynamicImage::ImageRgba8(document))?;
        let fingerprint = fingerprint(&png);
        info!(country = country_code, width, height, %fingerprint, "Document generated");

        Ok(GeneratedDocument {
            country: country_code.to_owned(),
            width,
            height,
            png,
            fingerprint,
        })
    }

    /// Generate the upscaled document raster without encoding it.
    pub fn generate_image(
        &self,
        country_code: &str,
        photo: &RgbaImage,
        fields: &FieldValues,
    ) -> Result<RgbaImage> {
        let profile = require_profile(country_code)?;
        let output = self.config.output_size()?;
        let mut page = self.base_template(profile);

        let anchor = profile.photo_anchor;
        debug!(x = anchor.x, y = anchor.y, "Placing photo");
        imageops::overlay(&mut page, photo, i64::from(anchor.x), i64::from(anchor.y));

        self.place_fields(&mut page, profile, fields);

        // Integer factor: nearest sampling replicates each pixel as a block.
        Ok(imageops::resize(&page, output.width, output.height, FilterType::Nearest))
    }

    /// Acquire the template at base size, synthesising when unavailable.
    fn base_template(&self, profile: &CountryProfile) -> RgbaImage {
        let page = match self.templates.get(profile.code) {
            Some(template) => template.as_ref().clone(),
            None => {
                warn!(country = profile.code, "Template unavailable, synthesising");
                synthesize_template(profile, &self.config)
            }
        };
        if page.dimensions() != (self.config.template.width, self.config.template.height) {
            debug!(
                from_w = page.width(),
                from_h = page.height(),
                "Normalising template size"
            );
            return imageops::resize(
                &page,
                self.config.template.width,
                self.config.template.height,
                FilterType::Nearest,
            );
        }
        page
    }

    fn place_fields(&self, page: &mut RgbaImage, profile: &CountryProfile, fields: &FieldValues) {
        for layout in profile.fields {
            let Some(raw) = fields.get(layout.field) else {
                continue;
            };
            if layout.field == FieldName::City && !profile.is_allowed_city(raw) {
                warn!(country = profile.code, city = raw, "City is not on the allowed list");
            }

            let text = normalize_field(layout, raw);
            let run = render_text(&text, profile.field_color(layout.field));
            let (x, y) = field_origin(layout, run.width());
            debug!(field = layout.field.as_str(), %text, x, y, "Placing field");
            imageops::overlay(page, &run, x, y);
        }
    }
}
