// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph table: the 8-px bitmap font used for every line of document text.
//
// Each glyph is a fixed-width cell of eight row bit-strings ('1' = ink).
// Cells carry dead padding columns; the rasterizer packs glyphs by their
// lit columns only, so the padding never reaches the output.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Height of every glyph cell, in pixels.
pub const GLYPH_HEIGHT: u32 = 8;

/// Advance used for characters missing from the table.
pub const MISSING_GLYPH_WIDTH: u32 = 3;

/// One character's pixel mask.
#[derive(Debug)]
pub struct GlyphMask {
    pub ch: char,
    rows: [&'static str; GLYPH_HEIGHT as usize],
}

impl GlyphMask {
    /// Nominal cell width, including padding columns.
    pub fn cell_width(&self) -> u32 {
        self.rows[0].len() as u32
    }

    pub fn is_lit(&self, x: u32, y: u32) -> bool {
        self.rows
            .get(y as usize)
            .and_then(|row| row.as_bytes().get(x as usize))
            .is_some_and(|&bit| bit == b'1')
    }

    /// First and last lit columns, or `None` for a blank glyph.
    pub fn lit_columns(&self) -> Option<(u32, u32)> {
        let lit = |x: u32| (0..GLYPH_HEIGHT).any(|y| self.is_lit(x, y));
        let first = (0..self.cell_width()).find(|&x| lit(x))?;
        let last = (0..self.cell_width()).rev().find(|&x| lit(x))?;
        Some((first, last))
    }

    /// Width from the first to the last lit column; 0 when blank.
    pub fn tight_width(&self) -> u32 {
        self.lit_columns().map_or(0, |(first, last)| last - first + 1)
    }

    /// Column of the first lit pixel; 0 when blank.
    pub fn left_offset(&self) -> u32 {
        self.lit_columns().map_or(0, |(first, _)| first)
    }
}

const fn glyph(ch: char, rows: [&'static str; GLYPH_HEIGHT as usize]) -> GlyphMask {
    GlyphMask { ch, rows }
}

static GLYPH_INDEX: LazyLock<HashMap<char, &'static GlyphMask>> =
    LazyLock::new(|| GLYPHS.iter().map(|mask| (mask.ch, mask)).collect());

/// Look up the mask for `ch`.
pub fn lookup(ch: char) -> Option<&'static GlyphMask> {
    GLYPH_INDEX.get(&ch).copied()
}

/// Every glyph in the table.
pub fn glyphs() -> &'static [GlyphMask] {
    &GLYPHS
}

static GLYPHS: [GlyphMask; 67] = [
    glyph('A', ["0000", "0111", "1001", "1001", "1111", "1001", "1001", "0000"]),
    glyph('B', ["0000", "1110", "1001", "1110", "1001", "1001", "1110", "0000"]),
    glyph('C', ["0000", "0111", "1000", "1000", "1000", "1000", "0111", "0000"]),
    glyph('D', ["0000", "1110", "1001", "1001", "1001", "1001", "1110", "0000"]),
    glyph('E', ["0000", "0111", "1000", "1110", "1000", "1000", "1111", "0000"]),
    glyph('F', ["0000", "0111", "1000", "1110", "1000", "1000", "1000", "0000"]),
    glyph('G', ["0000", "0111", "1000", "1011", "1001", "1001", "0111", "0000"]),
    glyph('H', ["0000", "1001", "1001", "1111", "1001", "1001", "1001", "0000"]),
    glyph('I', ["000", "111", "010", "010", "010", "010", "111", "000"]),
    glyph('J', ["0000", "0011", "0001", "0001", "0001", "0001", "1110", "0000"]),
    glyph('K', ["0000", "1001", "1001", "1110", "1001", "1001", "1001", "0000"]),
    glyph('L', ["0000", "1000", "1000", "1000", "1000", "1000", "0111", "0000"]),
    glyph('M', ["00000", "10001", "11011", "10101", "10001", "10001", "10001", "00000"]),
    glyph('N', ["0000", "1001", "1101", "1011", "1001", "1001", "1001", "0000"]),
    glyph('O', ["0000", "0110", "1001", "1001", "1001", "1001", "0110", "0000"]),
    glyph('P', ["0000", "1110", "1001", "1001", "1110", "1000", "1000", "0000"]),
    glyph('Q', ["0000", "0110", "1001", "1001", "1101", "1011", "0111", "0000"]),
    glyph('R', ["0000", "1110", "1001", "1001", "1111", "1001", "1001", "0000"]),
    glyph('S', ["0000", "0111", "1000", "0100", "0010", "0001", "1110", "0000"]),
    glyph('T', ["00000", "11111", "00100", "00100", "00100", "00100", "00100", "00000"]),
    glyph('U', ["0000", "1001", "1001", "1001", "1001", "1001", "0110", "0000"]),
    glyph('V', ["0000", "1001", "1001", "1001", "1010", "1100", "1000", "0000"]),
    glyph('W', ["00000", "10001", "10001", "10001", "10101", "10101", "01010", "00000"]),
    glyph('X', ["0000", "1001", "1000", "0110", "0110", "1001", "1001", "0000"]),
    glyph('Y', ["0000", "1001", "1001", "0111", "0001", "0001", "0110", "0000"]),
    glyph('Z', ["0000", "1111", "0001", "0010", "0100", "1000", "1111", "0000"]),
    glyph('a', ["0000", "0000", "0000", "0111", "1001", "1001", "0111", "0000"]),
    glyph('b', ["0000", "1000", "1000", "1110", "1001", "1001", "0110", "0000"]),
    glyph('c', ["0000", "0000", "0000", "0111", "1000", "1000", "0111", "0000"]),
    glyph('d', ["0000", "0001", "0001", "0111", "1001", "1001", "0111", "0000"]),
    glyph('e', ["0000", "0000", "0000", "0110", "1011", "1100", "0110", "0000"]),
    glyph('f', ["000", "011", "100", "110", "100", "100", "100", "000"]),
    glyph('g', ["0000", "0000", "0111", "1001", "0111", "0001", "0110", "0000"]),
    glyph('h', ["0000", "0000", "1000", "1000", "1110", "1001", "1001", "0000"]),
    glyph('i', ["0", "1", "0", "1", "1", "1", "1", "0"]),
    glyph('j', ["00", "01", "00", "01", "01", "01", "10", "00"]),
    glyph('k', ["0000", "1000", "1000", "1001", "1110", "1001", "1001", "0000"]),
    glyph('l', ["0", "1", "1", "1", "1", "1", "1", "0"]),
    glyph('m', ["00000", "00000", "00000", "11110", "10101", "10101", "10101", "00000"]),
    glyph('n', ["0000", "0000", "0000", "1110", "1001", "1001", "1001", "0000"]),
    glyph('o', ["0000", "0000", "0000", "0110", "1001", "1001", "0110", "0000"]),
    glyph('p', ["0000", "0000", "1110", "1001", "1001", "1110", "1000", "1000"]),
    glyph('q', ["0000", "0111", "1001", "1001", "0111", "0001", "0001", "0000"]),
    glyph('r', ["0000", "0000", "0000", "1011", "1100", "1000", "1000", "0000"]),
    glyph('s', ["0000", "0000", "0000", "0111", "1100", "0011", "1110", "0000"]),
    glyph('t', ["0000", "0000", "0100", "0111", "0100", "0100", "0011", "0000"]),
    glyph('u', ["0000", "0000", "0000", "1001", "1001", "1001", "0111", "0000"]),
    glyph('v', ["0000", "0000", "0000", "1001", "1001", "0110", "0110", "0000"]),
    glyph('w', ["00000", "00000", "00000", "10101", "10101", "10101", "01111", "00000"]),
    glyph('x', ["0000", "0000", "0000", "1001", "0110", "0110", "1001", "0000"]),
    glyph('y', ["0000", "0000", "0000", "1001", "1001", "0111", "0001", "0110"]),
    glyph('z', ["0000", "0000", "0000", "1111", "0010", "0100", "1111", "0000"]),
    glyph('0', ["0000", "0110", "1001", "1011", "1101", "1001", "0110", "0000"]),
    glyph('1', ["00", "01", "11", "01", "01", "01", "01", "00"]),
    glyph('2', ["0000", "0110", "1001", "0010", "0100", "1000", "1111", "0000"]),
    glyph('3', ["0000", "0110", "1001", "0010", "0001", "1001", "0110", "0000"]),
    glyph('4', ["00000", "00010", "00110", "01010", "11111", "00010", "00010", "00000"]),
    glyph('5', ["0000", "1111", "1000", "1110", "0001", "0001", "1110", "0000"]),
    glyph('6', ["0000", "0110", "1000", "1110", "1001", "1001", "0110", "0000"]),
    glyph('7', ["0000", "1111", "1001", "0010", "0010", "0100", "0100", "0000"]),
    glyph('8', ["0000", "0110", "1001", "0110", "1001", "1001", "0110", "0000"]),
    glyph('9', ["0000", "0110", "1001", "1001", "0111", "0001", "0110", "0000"]),
    glyph('.', ["0", "0", "0", "0", "0", "0", "1", "0"]),
    glyph(',', ["00", "00", "00", "00", "00", "00", "01", "10"]),
    glyph(' ', ["000", "000", "000", "000", "000", "000", "000", "000"]),
    glyph('-', ["000", "000", "000", "111", "000", "000", "000", "000"]),
    glyph(':', ["000", "000", "000", "010", "000", "010", "000", "000"]),
];
