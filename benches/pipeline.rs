//! Benchmarks for the appicon pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use appicon::{build_manifest, compose, manifest_json, SizeCatalog, SourceAsset};

fn synthetic_logo(edge: u32) -> SourceAsset {
    let mut image = RgbaImage::new(edge, edge);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        // A gradient with a transparent ring, so resize and blend both
        // have real work to do.
        let alpha = if (x + y) % 7 == 0 { 0 } else { 255 };
        *pixel = Rgba([(x % 256) as u8, (y % 256) as u8, 128, alpha]);
    }
    SourceAsset::from_image(image)
}

// -- Compositing benchmarks --

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    let source = synthetic_logo(512);

    for size in [48u32, 192, 1024] {
        group.bench_function(format!("compose_{size}"), |b| {
            b.iter(|| compose(black_box(&source), black_box(size), black_box(15.0)).unwrap())
        });
    }

    group.finish();
}

// -- Manifest benchmarks --

fn bench_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest");

    let slots = SizeCatalog::ios_slots();

    group.bench_function("build_manifest", |b| {
        b.iter(|| build_manifest(black_box(&slots)))
    });

    let manifest = build_manifest(&slots);
    group.bench_function("manifest_json", |b| {
        b.iter(|| manifest_json(black_box(&manifest)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_manifest);
criterion_main!(benches);
