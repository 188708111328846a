// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph module: static bitmap font table and the text rasterizer.

pub mod rasterizer;
pub mod table;

pub use rasterizer::{render_text, text_width};
pub use table::{GLYPH_HEIGHT, GlyphMask};
