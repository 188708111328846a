// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor: source validation, decoding, cover-fit and PNG
// encoding. Operates on in-memory
// images using the `image` crate.

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use pixpass_core::{PixpassError, ProcessingLimits, Result, Size, SourceFormat};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Metadata reported for an encoded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub byte_len: usize,
}

/// Check an encoded source against the processing limits without decoding it.
///
/// Returns the sniffed format. Checks run in order: empty buffer, format,
/// then size.
pub fn validate_source(data: &[u8], limits: &ProcessingLimits) -> Result<SourceFormat> {
    if data.is_empty() {
        return Err(PixpassError::EmptyInput);
    }

    let format = sniff_format(data)?;
    if !limits.allowed_formats.contains(&format) {
        return Err(PixpassError::UnsupportedFormat(format.name().to_owned()));
    }

    if data.len() > limits.max_file_size {
        return Err(PixpassError::FileTooLarge {
            size: data.len(),
            max: limits.max_file_size,
        });
    }

    debug!(format = format.name(), len = data.len(), "Source validated");
    Ok(format)
}

/// Decode `data` far enough to report its format, size and channel count.
pub fn inspect(data: &[u8]) -> Result<ImageInfo> {
    let format = match sniff_format(data) {
        Ok(format) => format.name().to_owned(),
        Err(PixpassError::UnsupportedFormat(name)) => name,
        Err(_) => "unknown".to_owned(),
    };
    let processor = ImageProcessor::from_bytes(data)?;
    Ok(ImageInfo {
        format,
        width: processor.width(),
        height: processor.height(),
        channels: processor.image.color().channel_count(),
        byte_len: data.len(),
    })
}

fn sniff_format(data: &[u8]) -> Result<SourceFormat> {
    match image::guess_format(data) {
        Ok(ImageFormat::Jpeg) => Ok(SourceFormat::Jpeg),
        Ok(ImageFormat::Png) => Ok(SourceFormat::Png),
        Ok(ImageFormat::Gif) => Ok(SourceFormat::Gif),
        Ok(other) => Err(PixpassError::UnsupportedFormat(
            other
                .extensions_str()
                .first()
                .copied()
                .unwrap_or("unknown")
                .to_owned(),
        )),
        Err(_) => Err(PixpassError::UnsupportedFormat("unknown".into())),
    }
}

/// Image pipeline over a single in-memory image.
///
/// Transformations consume `self` and return a new `ImageProcessor`, so
/// steps chain:
///
/// ```ignore
/// let png = ImageProcessor::from_source(&bytes, &limits)?
///     .cover(Size::new(40, 48))
///     .to_png_bytes()?;
/// ```
pub struct ImageProcessor {
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Decode raw encoded bytes (JPEG, PNG, GIF, ...).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(PixpassError::EmptyInput);
        }
        let img = image::load_from_memory(data).map_err(|err| {
            PixpassError::ImageError(format!("failed to decode image: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Validate `data` against `limits`, then decode it.
    pub fn from_source(data: &[u8], limits: &ProcessingLimits) -> Result<Self> {
        validate_source(data, limits)?;
        Self::from_bytes(data)
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the processor and return the image as 8-bit RGBA.
    ///
    /// Sources without an alpha channel come back fully opaque.
    pub fn into_rgba8(self) -> RgbaImage {
        self.image.into_rgba8()
    }

    /// Fail unless the image is exactly `expected`.
    pub fn require_size(self, expected: Size) -> Result<Self> {
        if self.size() != expected {
            return Err(PixpassError::PhotoDimensions {
                expected_width: expected.width,
                expected_height: expected.height,
                actual_width: self.width(),
                actual_height: self.height(),
            });
        }
        Ok(self)
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Cover-fit to exactly `target`: scale until both sides cover the
    /// target, then crop the overflow around the centre. Never letterboxes.
    #[instrument(skip(self), fields(width = target.width, height = target.height))]
    pub fn cover(self, target: Size) -> Self {
        info!(
            from_w = self.image.width(),
            from_h = self.image.height(),
            "Cover-fitting image"
        );
        let resized = self
            .image
            .resize_to_fill(target.width, target.height, FilterType::Lanczos3);
        Self { image: resized }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes at maximum compression.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        encode_png(&self.image)
    }
}

/// Encode any image as PNG with the best compression level.
///
/// Output is a pure function of the pixels, so identical rasters always
/// encode to identical bytes.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilter::Adaptive);
    image.write_with_encoder(encoder).map_err(|err| {
        PixpassError::ImageError(format!("PNG encoding failed: {}", err))
    })?;
    Ok(buffer)
}
