// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_media_path::{MediaLibrary, MediaSize, MediaUrls};

fn bench_image_urls(c: &mut Criterion) {
    let urls = MediaUrls::new(
        "https://media.example.com",
        "https://media.example.com/ui",
        "https://uploads.example.com",
    );

    c.bench_function("media_path/image_upload", |b| {
        b.iter(|| {
            black_box(urls.image(
                black_box(MediaLibrary::User),
                MediaSize::Thumb,
                "2f1c6a2e-9a59-4f0e-8d6e-0c6a3a4b5c6d",
            ))
        });
    });

    c.bench_function("media_path/image_mock", |b| {
        b.iter(|| black_box(urls.image(black_box(MediaLibrary::Mock), MediaSize::Full, "cat.jpg")));
    });
}

criterion_group!(benches, bench_image_urls);
criterion_main!(benches);
