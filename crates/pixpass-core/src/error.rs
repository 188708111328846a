// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Pixpass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for all Pixpass operations.
#[derive(Debug, Error)]
pub enum PixpassError {
    // -- Input validation --
    #[error("empty image buffer")]
    EmptyInput,

    #[error("image format not allowed: {0}")]
    UnsupportedFormat(String),

    #[error("image exceeds maximum size of {max} bytes (got {size})")]
    FileTooLarge { size: usize, max: usize },

    #[error(
        "image must be exactly {expected_width}x{expected_height} pixels, got {actual_width}x{actual_height}"
    )]
    PhotoDimensions {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("unknown country code: {0}")]
    UnknownCountry(String),

    #[error("threshold is not a number: {0}")]
    InvalidThreshold(f64),

    #[error("invalid colour: {0}")]
    InvalidColor(String),

    // -- Rendering / codec --
    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Configuration / process --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of errors, used by callers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorClass {
    /// The caller supplied something unusable. Never retried.
    InvalidInput,
    /// Decoding, encoding or process-level failure for this request.
    Rendering,
}

impl PixpassError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::EmptyInput
            | Self::UnsupportedFormat(_)
            | Self::FileTooLarge { .. }
            | Self::PhotoDimensions { .. }
            | Self::UnknownCountry(_)
            | Self::InvalidThreshold(_)
            | Self::InvalidColor(_)
            | Self::Config(_) => ErrorClass::InvalidInput,
            Self::ImageError(_) | Self::Io(_) | Self::Serialization(_) => ErrorClass::Rendering,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PixpassError>;
