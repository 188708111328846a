// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph rasterizer: turns a string into a tightly bounded, transparent
// RGBA run of 8-px bitmap text. No anti-aliasing: every output pixel is
// either fully transparent or exactly the requested colour.

use image::{Rgba, RgbaImage};
use pixpass_core::Color;

use super::table::{self, GLYPH_HEIGHT, GlyphMask, MISSING_GLYPH_WIDTH};

/// Gap between the visible ink of adjacent glyphs.
const GLYPH_SPACING: u32 = 1;

/// A glyph resolved for layout: its mask (if any) and packed metrics.
#[derive(Debug, Clone, Copy)]
struct PlacedGlyph {
    mask: Option<&'static GlyphMask>,
    width: u32,
    offset: u32,
}

impl PlacedGlyph {
    fn resolve(ch: char) -> Self {
        match table::lookup(ch) {
            Some(mask) => Self {
                mask: Some(mask),
                width: mask.tight_width(),
                offset: mask.left_offset(),
            },
            // Unknown characters render as a blank 3-px gap.
            None => Self {
                mask: None,
                width: MISSING_GLYPH_WIDTH,
                offset: 0,
            },
        }
    }
}

fn layout(text: &str) -> Vec<PlacedGlyph> {
    text.chars().map(PlacedGlyph::resolve).collect()
}

fn packed_width(glyphs: &[PlacedGlyph]) -> u32 {
    let ink: u32 = glyphs.iter().map(|g| g.width).sum();
    let gaps = glyphs.len().saturating_sub(1) as u32 * GLYPH_SPACING;
    ink + gaps
}

/// Width in pixels of `text` once rendered (at least 1).
pub fn text_width(text: &str) -> u32 {
    packed_width(&layout(text)).max(1)
}

/// Render `text` in `color` onto a transparent `width x 8` canvas.
///
/// Glyphs are packed by their lit columns: each one is drawn at the cursor
/// shifted left by its own offset, and the cursor advances by its tight
/// width plus one spacer column. An empty string yields a 1-px canvas.
pub fn render_text(text: &str, color: Color) -> RgbaImage {
    let glyphs = layout(text);
    let width = packed_width(&glyphs).max(1);
    let ink = Rgba(color.to_rgba());
    let mut canvas = RgbaImage::new(width, GLYPH_HEIGHT);

    let mut cursor = 0u32;
    for (i, glyph) in glyphs.iter().enumerate() {
        if let Some(mask) = glyph.mask {
            for y in 0..GLYPH_HEIGHT {
                for x in 0..mask.cell_width() {
                    if mask.is_lit(x, y) {
                        canvas.put_pixel(cursor + x - glyph.offset, y, ink);
                    }
                }
            }
        }
        cursor += glyph.width;
        if i + 1 < glyphs.len() {
            cursor += GLYPH_SPACING;
        }
    }

    canvas
}
