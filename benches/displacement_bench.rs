use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use liquid_glass::{compute_displacement, encode_as_image, LensProfile};

fn bench_compute_displacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_displacement");

    // Typical header surfaces: wide and short.
    for &(w, h) in &[(256, 64), (1024, 96), (1920, 128)] {
        group.bench_with_input(
            BenchmarkId::new("convex", format!("{w}x{h}")),
            &(w, h),
            |b, &(w, h)| b.iter(|| compute_displacement(w, h, LensProfile::Convex)),
        );
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let map = compute_displacement(1024, 96, LensProfile::Convex);
    c.bench_function("encode_as_image/1024x96", |b| {
        b.iter(|| encode_as_image(&map).unwrap())
    });
}

criterion_group!(benches, bench_compute_displacement, bench_encode);
criterion_main!(benches);
