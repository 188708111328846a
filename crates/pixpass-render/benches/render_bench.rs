// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pixpass-render crate: text rasterisation,
// photo stylisation and full document generation.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use pixpass_core::{DocumentConfig, FieldValues};
use pixpass_render::{DocumentCompositor, Pixelizer, render_text};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A 640x480 colour gradient, roughly the size of a webcam capture.
fn source_photo() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(640, 480, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

fn sample_fields() -> FieldValues {
    FieldValues {
        name: "Jorji Costava".into(),
        dob: "1955-03-12".into(),
        sex: "M".into(),
        city: "Orvech Vonor".into(),
        number: "ab12c-d34ef".into(),
        expiry: "01.12.1983".into(),
    }
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_render_text(c: &mut Criterion) {
    let color = DocumentConfig::default().palette.dark;
    c.bench_function("render_text (20 chars)", |b| {
        b.iter(|| black_box(render_text(black_box("Costava, Jorji M.12"), color)));
    });
}

/// Cover-fit and threshold a 640x480 source down to the photo size.
fn bench_stylize(c: &mut Criterion) {
    let pixelizer = Pixelizer::from_config(&DocumentConfig::default());
    let source = source_photo();
    c.bench_function("stylize_image (640x480 -> 40x48)", |b| {
        b.iter(|| black_box(pixelizer.stylize_image(black_box(&source), 0.5)));
    });
}

/// Synthesised template, photo, six fields and a 6x upscale, without encoding.
fn bench_generate_image(c: &mut Criterion) {
    let config = DocumentConfig::default();
    let photo = Pixelizer::from_config(&config)
        .stylize_image(&source_photo(), 0.5)
        .expect("stylize fixture");
    let compositor = DocumentCompositor::without_templates(config);
    let fields = sample_fields();

    c.bench_function("generate_image (arstotzka, 6x)", |b| {
        b.iter(|| black_box(compositor.generate_image("arstotzka", black_box(&photo), &fields)));
    });
}

criterion_group!(benches, bench_render_text, bench_stylize, bench_generate_image);
criterion_main!(benches);
