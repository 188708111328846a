// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Generic template synthesis: a deterministic stand-in booklet page used
// whenever a country's template asset is missing or unreadable.

use image::imageops::overlay;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use pixpass_core::{CountryProfile, DocumentConfig};
use tracing::debug;

use crate::glyph::{GLYPH_HEIGHT, render_text};

const BORDER: u32 = 2;
const RULE_Y: i32 = 20;
const RULE_INSET: u32 = 10;
const TITLE_Y: i64 = 5;
const LABEL_X: i64 = 5;
const SEAL_SIZE: u32 = 15;
/// Distance of the seal's top-left corner from the right and bottom edges.
const SEAL_INSET: u32 = 25;

/// Build a base-resolution template for `profile` from scratch.
pub fn synthesize_template(profile: &CountryProfile, config: &DocumentConfig) -> RgbaImage {
    let (width, height) = (config.template.width, config.template.height);
    let accent = Rgba(profile.primary_color.to_rgba());
    let mut page = RgbaImage::from_pixel(width, height, Rgba(config.paper.to_rgba()));

    // Border: top, bottom, left, right.
    let border = BORDER.min(width).min(height);
    draw_filled_rect_mut(&mut page, Rect::at(0, 0).of_size(width, border), accent);
    draw_filled_rect_mut(
        &mut page,
        Rect::at(0, (height - border) as i32).of_size(width, border),
        accent,
    );
    draw_filled_rect_mut(&mut page, Rect::at(0, 0).of_size(border, height), accent);
    draw_filled_rect_mut(
        &mut page,
        Rect::at((width - border) as i32, 0).of_size(border, height),
        accent,
    );

    // Decorative rule under the title.
    if width > 2 * RULE_INSET {
        draw_filled_rect_mut(
            &mut page,
            Rect::at(RULE_INSET as i32, RULE_Y).of_size(width - 2 * RULE_INSET, 1),
            accent,
        );
    }

    let title = render_text(&profile.display_name.to_uppercase(), profile.primary_color);
    let title_x = (i64::from(width) - i64::from(title.width())).div_euclid(2);
    overlay(&mut page, &title, title_x, TITLE_Y);

    let label_color = profile.label_color();
    for layout in profile.fields {
        if let Some(label) = layout.label {
            let run = render_text(label, label_color);
            overlay(
                &mut page,
                &run,
                LABEL_X,
                i64::from(layout.y) - i64::from(GLYPH_HEIGHT),
            );
        }
    }

    // Seal block, clipped by the canvas.
    let seal_x = i64::from(width) - i64::from(SEAL_INSET);
    let seal_y = i64::from(height) - i64::from(SEAL_INSET);
    draw_filled_rect_mut(
        &mut page,
        Rect::at(seal_x as i32, seal_y as i32).of_size(SEAL_SIZE, SEAL_SIZE),
        accent,
    );

    debug!(country = profile.code, width, height, "Synthesised generic template");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::text_width;
    use pixpass_core::{Color, require_profile};

    fn synth(code: &str) -> (RgbaImage, &'static CountryProfile, DocumentConfig) {
        let config = DocumentConfig::default();
        let profile = require_profile(code).expect("profile");
        (synthesize_template(profile, &config), profile, config)
    }

    #[test]
    fn template_has_base_size() {
        let (page, _, config) = synth("arstotzka");
        assert_eq!(page.dimensions(), (config.template.width, config.template.height));
    }

    #[test]
    fn border_rule_and_seal_use_accent() {
        let (page, profile, config) = synth("kolechia");
        let accent = Rgba(profile.primary_color.to_rgba());
        let paper = Rgba(config.paper.to_rgba());
        for (x, y) in [(0, 0), (1, 1), (129, 161), (128, 80), (60, 0), (60, 161)] {
            assert_eq!(*page.get_pixel(x, y), accent, "border at ({x},{y})");
        }
        assert_eq!(*page.get_pixel(2, 80), paper);
        assert_eq!(*page.get_pixel(10, 20), accent);
        assert_eq!(*page.get_pixel(119, 20), accent);
        assert_eq!(*page.get_pixel(120, 20), paper);
        assert_eq!(*page.get_pixel(105, 137), accent);
        assert_eq!(*page.get_pixel(119, 151), accent);
        assert_eq!(*page.get_pixel(120, 151), paper);
    }

    #[test]
    fn title_is_centred() {
        let (page, profile, _) = synth("impor");
        let accent = Rgba(profile.primary_color.to_rgba());
        let width = text_width("IMPOR");
        let left = (130 - width) / 2;
        let title_cols: Vec<u32> = (3..127)
            .filter(|&x| (5..13).any(|y| *page.get_pixel(x, y) == accent))
            .collect();
        assert_eq!(title_cols.first(), Some(&left));
        assert_eq!(title_cols.last(), Some(&(left + width - 1)));
    }

    #[test]
    fn labels_follow_the_label_colour_policy() {
        let (page, profile, _) = synth("obristan");
        let override_color = Rgba(Color::hex(0xefe4dd).to_rgba());
        let dob_y = profile.fields.iter().find(|l| l.label == Some("DOB:")).expect("dob").y;
        let top = (dob_y - 8) as u32;
        assert!((top..top + 8).any(|y| *page.get_pixel(5, y) == override_color));

        let (page, profile, _) = synth("republia");
        let print = Rgba(profile.print_color.to_rgba());
        let exp_y = profile.fields.iter().find(|l| l.label == Some("EXP:")).expect("exp").y;
        let top = (exp_y - 8) as u32;
        assert!((top..top + 8).any(|y| *page.get_pixel(5, y) == print));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let (a, _, _) = synth("united_federation");
        let (b, _, _) = synth("united_federation");
        assert_eq!(a, b);
    }
}
