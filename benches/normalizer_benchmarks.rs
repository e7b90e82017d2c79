//! Benchmarks for video reference normalization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multiview::normalizer;

fn bench_extract_shapes(c: &mut Criterion) {
    let inputs = [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
        "https://youtu.be/dQw4w9WgXcQ",
        "https://www.youtube.com/shorts/dQw4w9WgXcQ",
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "dQw4w9WgXcQ",
        "not a recognizable reference at all",
    ];

    c.bench_function("extract_video_id_all_shapes", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = normalizer::extract_video_id(black_box(input));
            }
        })
    });
}

fn bench_embed_address(c: &mut Criterion) {
    c.bench_function("embed_address_watch_url", |b| {
        b.iter(|| {
            normalizer::embed_address(black_box(
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL0&index=4",
            ))
        })
    });
}

criterion_group!(benches, bench_extract_shapes, bench_embed_address);
criterion_main!(benches);
