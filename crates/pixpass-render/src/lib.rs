// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixpass-render: Rendering for the Pixpass document generator.
//
// Provides the bitmap glyph rasterizer, the two-tone palette pixelizer with
// its source validation, and the document compositor with its template
// cache.

pub mod compose;
pub mod fingerprint;
pub mod glyph;
pub mod image;

// Re-export the primary entry points so callers can use `pixpass_render::Pixelizer` etc.
pub use compose::{
    DirectoryTemplates, DocumentCompositor, GeneratedDocument, NoTemplates, TemplateCache,
    TemplateSource,
};
pub use fingerprint::fingerprint;
pub use glyph::{render_text, text_width};
pub use self::image::{ImageInfo, ImageProcessor, Pixelizer, inspect, validate_source};
