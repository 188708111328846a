// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Palette pixelizer: turns an arbitrary photo into a fixed-size two-tone
// portrait by luminance thresholding, plus the pass-through validator for
// photos that were pixelized elsewhere.

use image::{DynamicImage, Rgba, RgbaImage};
use pixpass_core::{DocumentConfig, Palette, PixpassError, ProcessingLimits, Result, Size};
use tracing::{info, instrument, warn};

use super::processor::{ImageProcessor, encode_png};

/// Rec. 601 luma of an 8-bit RGB triple, normalised to `[0, 1]`.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

/// Clamp a caller-supplied threshold into `[0, 1]`. NaN is rejected.
pub fn normalize_threshold(threshold: f64) -> Result<f64> {
    if threshold.is_nan() {
        return Err(PixpassError::InvalidThreshold(threshold));
    }
    let clamped = threshold.clamp(0.0, 1.0);
    if clamped != threshold {
        warn!(threshold, clamped, "Threshold outside [0, 1] clamped");
    }
    Ok(clamped)
}

/// Two-tone stylizer bound to one palette and photo size.
#[derive(Debug, Clone)]
pub struct Pixelizer {
    palette: Palette,
    photo: Size,
    limits: ProcessingLimits,
}

impl Pixelizer {
    pub fn new(palette: Palette, photo: Size, limits: ProcessingLimits) -> Self {
        Self {
            palette,
            photo,
            limits,
        }
    }

    pub fn from_config(config: &DocumentConfig) -> Self {
        Self::new(config.palette, config.photo, config.limits.clone())
    }

    /// Validate, decode, stylize and re-encode a source photo as PNG.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub fn stylize(&self, data: &[u8], threshold: f64) -> Result<Vec<u8>> {
        let source = ImageProcessor::from_source(data, &self.limits)?;
        let styled = self.stylize_image(source.as_dynamic(), threshold)?;
        let png = encode_png(&DynamicImage::ImageRgba8(styled))?;
        info!(png_len = png.len(), "Photo stylized");
        Ok(png)
    }

    /// Cover-fit `image` to the photo size and classify every pixel.
    ///
    /// Luminance above the threshold maps to the light colour, everything
    /// else to the dark one. Source alpha is kept; opaque sources stay opaque.
    pub fn stylize_image(&self, image: &DynamicImage, threshold: f64) -> Result<RgbaImage> {
        let threshold = normalize_threshold(threshold)?;
        let resized = ImageProcessor::from_dynamic(image.clone())
            .cover(self.photo)
            .into_rgba8();

        let light = self.palette.light.to_rgba();
        let dark = self.palette.dark.to_rgba();
        let styled = RgbaImage::from_fn(resized.width(), resized.height(), |x, y| {
            let Rgba([r, g, b, a]) = *resized.get_pixel(x, y);
            let [pr, pg, pb, _] = if luminance(r, g, b) > threshold {
                light
            } else {
                dark
            };
            Rgba([pr, pg, pb, a])
        });
        Ok(styled)
    }

    /// Accept an already-pixelized photo unchanged, re-encoded as PNG.
    ///
    /// Fails unless the decoded image is exactly the photo size. Pixels are
    /// never resized or reclassified.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub fn validate_preprocessed(&self, data: &[u8]) -> Result<Vec<u8>> {
        let png = ImageProcessor::from_source(data, &self.limits)?
            .require_size(self.photo)?
            .to_png_bytes()?;
        info!(png_len = png.len(), "Pre-processed photo accepted");
        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn pixelizer() -> Pixelizer {
        Pixelizer::from_config(&DocumentConfig::default())
    }

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let v = ((x * 255) / width.max(1)) as u8;
            Rgb([v, v.wrapping_add(y as u8), 255 - v])
        }))
    }

    fn light_count(img: &RgbaImage) -> usize {
        let light = Palette::DEFAULT.light.to_rgba();
        img.pixels()
            .filter(|p| [p[0], p[1], p[2]] == [light[0], light[1], light[2]])
            .count()
    }

    #[test]
    fn luminance_weights() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        assert!((luminance(255, 255, 255) - 1.0).abs() < 1e-12);
        assert!((luminance(255, 0, 0) - 0.299).abs() < 1e-12);
    }

    #[test]
    fn output_is_photo_sized_two_tone() {
        let styled = pixelizer()
            .stylize_image(&gradient(320, 200), 0.5)
            .expect("stylize");
        assert_eq!(styled.dimensions(), (40, 48));
        let light = Palette::DEFAULT.light.to_rgba();
        let dark = Palette::DEFAULT.dark.to_rgba();
        for p in styled.pixels() {
            assert!(p.0 == light || p.0 == dark, "off-palette pixel {p:?}");
        }
    }

    #[test]
    fn raising_threshold_never_adds_light_pixels() {
        let p = pixelizer();
        let source = gradient(90, 70);
        let mut previous = usize::MAX;
        for step in 0..=20 {
            let styled = p
                .stylize_image(&source, f64::from(step) / 20.0)
                .expect("stylize");
            let count = light_count(&styled);
            assert!(count <= previous, "threshold step {step} increased light pixels");
            previous = count;
        }
        assert_eq!(previous, 0, "threshold 1.0 leaves nothing light");
    }

    #[test]
    fn out_of_range_threshold_is_clamped_and_nan_rejected() {
        let p = pixelizer();
        let source = gradient(40, 48);
        assert_eq!(
            p.stylize_image(&source, -3.0).expect("low"),
            p.stylize_image(&source, 0.0).expect("zero")
        );
        assert_eq!(
            p.stylize_image(&source, 7.5).expect("high"),
            p.stylize_image(&source, 1.0).expect("one")
        );
        assert!(matches!(
            p.stylize_image(&source, f64::NAN),
            Err(PixpassError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn alpha_is_preserved_from_rgba_sources() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 48, Rgba([250, 250, 250, 77])));
        let styled = pixelizer().stylize_image(&source, 0.5).expect("stylize");
        assert!(styled.pixels().all(|p| p[3] == 77));

        let opaque = pixelizer()
            .stylize_image(&gradient(40, 48), 0.5)
            .expect("stylize");
        assert!(opaque.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn validate_preprocessed_is_idempotent() {
        let photo = DynamicImage::ImageRgba8(RgbaImage::from_fn(40, 48, |x, _| {
            if x % 2 == 0 {
                Rgba(Palette::DEFAULT.dark.to_rgba())
            } else {
                Rgba(Palette::DEFAULT.light.to_rgba())
            }
        }));
        let first = pixelizer()
            .validate_preprocessed(&encode_png(&photo).expect("encode"))
            .expect("first pass");
        let second = pixelizer().validate_preprocessed(&first).expect("second pass");
        assert_eq!(first, second);
    }

    #[test]
    fn validate_preprocessed_rejects_wrong_size() {
        let png = encode_png(&gradient(41, 48)).expect("encode");
        assert!(matches!(
            pixelizer().validate_preprocessed(&png),
            Err(PixpassError::PhotoDimensions { actual_width: 41, .. })
        ));
    }

    #[test]
    fn stylize_rejects_empty_input() {
        assert!(matches!(
            pixelizer().stylize(&[], 0.5),
            Err(PixpassError::EmptyInput)
        ));
    }
}
