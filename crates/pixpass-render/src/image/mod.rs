// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module: source validation, codec helpers, and the two-tone palette
// pixelizer.

pub mod pixelize;
pub mod processor;

pub use pixelize::Pixelizer;
pub use processor::{ImageInfo, ImageProcessor, inspect, validate_source};
