// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end pipeline tests: source photo to stylised portrait to finished
// document, through the public API only.

use std::sync::Arc;

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use pixpass_core::{DocumentConfig, FieldValues, Palette, PixpassError, profiles};
use pixpass_render::image::processor::encode_png;
use pixpass_render::{
    DirectoryTemplates, DocumentCompositor, Pixelizer, TemplateCache, fingerprint,
};

fn source_png() -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(200, 150, |x, y| {
        Rgb([(x + y) as u8, (x * 2) as u8, (255 - y) as u8])
    }));
    encode_png(&img).expect("encode source")
}

fn fields() -> FieldValues {
    FieldValues {
        name: "Jorji Costava".into(),
        dob: "12/3/1955".into(),
        sex: "m".into(),
        city: "Orvech Vonor".into(),
        number: "ab12c-d34ef".into(),
        expiry: "01.12.1983".into(),
    }
}

#[test]
fn stylise_then_generate_produces_full_size_document() {
    let config = DocumentConfig::default();
    let photo = Pixelizer::from_config(&config)
        .stylize(&source_png(), 0.5)
        .expect("stylize");
    let doc = DocumentCompositor::without_templates(config)
        .generate("arstotzka", &photo, &fields())
        .expect("generate");

    assert_eq!((doc.width, doc.height), (780, 972));
    assert_eq!(doc.fingerprint, fingerprint(&doc.png));

    let page = image::load_from_memory(&doc.png).expect("decode").into_rgba8();
    assert_eq!(page.dimensions(), (780, 972));
    // Photo anchor (8, 98) scaled by 6.
    let corner = page.get_pixel(48, 588).0;
    let palette = Palette::DEFAULT;
    assert!(corner == palette.light.to_rgba() || corner == palette.dark.to_rgba());
}

#[test]
fn generation_is_deterministic() {
    let config = DocumentConfig::default();
    let photo = Pixelizer::from_config(&config)
        .stylize(&source_png(), 0.42)
        .expect("stylize");
    let compositor = DocumentCompositor::without_templates(config);

    let a = compositor.generate("kolechia", &photo, &fields()).expect("first");
    let b = compositor.generate("kolechia", &photo, &fields()).expect("second");
    assert_eq!(a.png, b.png);
    assert_eq!(a.fingerprint, b.fingerprint);
}

#[test]
fn every_country_renders() {
    let config = DocumentConfig::default();
    let photo = Pixelizer::from_config(&config)
        .stylize(&source_png(), 0.5)
        .expect("stylize");
    let compositor = DocumentCompositor::without_templates(config);

    let mut prints: Vec<String> = profiles()
        .map(|p| {
            compositor
                .generate(p.code, &photo, &fields())
                .expect("generate")
                .fingerprint
        })
        .collect();
    prints.sort();
    prints.dedup();
    assert_eq!(prints.len(), profiles().count());
}

#[test]
fn parallel_generation_matches_serial() {
    let config = DocumentConfig::default();
    let photo = Arc::new(
        Pixelizer::from_config(&config)
            .stylize(&source_png(), 0.5)
            .expect("stylize"),
    );
    let compositor = DocumentCompositor::without_templates(config);
    let codes: Vec<&'static str> = profiles().map(|p| p.code).collect();

    let serial: Vec<String> = codes
        .iter()
        .map(|code| {
            compositor
                .generate(code, &photo, &fields())
                .expect("serial")
                .fingerprint
        })
        .collect();

    let handles: Vec<_> = codes
        .iter()
        .map(|&code| {
            let compositor = compositor.clone();
            let photo = Arc::clone(&photo);
            std::thread::spawn(move || {
                compositor
                    .generate(code, &photo, &fields())
                    .expect("parallel")
                    .fingerprint
            })
        })
        .collect();
    let parallel: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .collect();

    assert_eq!(serial, parallel);
}

#[test]
fn directory_templates_are_used_and_normalised() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Half-size template: nearest-neighbour normalised back to 130x162.
    let template = RgbaImage::from_pixel(65, 81, Rgba([10, 120, 30, 255]));
    std::fs::write(
        dir.path().join("passport_impor.png"),
        encode_png(&DynamicImage::ImageRgba8(template)).expect("encode"),
    )
    .expect("write");

    let config = DocumentConfig::default();
    let cache = Arc::new(TemplateCache::new(DirectoryTemplates::from_config(
        dir.path(),
        &config,
    )));
    let photo = Pixelizer::from_config(&config)
        .stylize(&source_png(), 0.5)
        .expect("stylize");
    let compositor = DocumentCompositor::new(config, Arc::clone(&cache));

    let doc = compositor
        .generate("impor", &photo, &FieldValues::default())
        .expect("generate");
    let page = image::load_from_memory(&doc.png).expect("decode").into_rgba8();
    assert_eq!(*page.get_pixel(0, 0), Rgba([10, 120, 30, 255]));
    assert_eq!(*page.get_pixel(779, 971), Rgba([10, 120, 30, 255]));

    // A country with no asset falls back to the synthesised template.
    let fallback = compositor
        .generate("republia", &photo, &FieldValues::default())
        .expect("fallback");
    let page = image::load_from_memory(&fallback.png).expect("decode").into_rgba8();
    assert_ne!(*page.get_pixel(0, 0), Rgba([10, 120, 30, 255]));
    assert_eq!(cache.len(), 2);
}

#[test]
fn preprocessed_photos_pass_through() {
    let config = DocumentConfig::default();
    let pixelizer = Pixelizer::from_config(&config);
    let styled = pixelizer.stylize(&source_png(), 0.5).expect("stylize");
    let accepted = pixelizer.validate_preprocessed(&styled).expect("validate");

    let compositor = DocumentCompositor::without_templates(config);
    let a = compositor.generate("obristan", &styled, &fields()).expect("styled");
    let b = compositor.generate("obristan", &accepted, &fields()).expect("accepted");
    assert_eq!(a.fingerprint, b.fingerprint);
}

#[test]
fn oversized_sources_are_rejected_before_decoding() {
    let mut config = DocumentConfig::default();
    config.limits.max_file_size = 16;
    let err = Pixelizer::from_config(&config)
        .stylize(&source_png(), 0.5)
        .unwrap_err();
    assert!(matches!(err, PixpassError::FileTooLarge { max: 16, .. }));
    assert_eq!(err.class(), pixpass_core::ErrorClass::InvalidInput);
}
