use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use disintegration::geometry::primitives::icosahedron;
use disintegration::geometry::{annotate, AttributeSet};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");

    for detail in [3u32, 16, 64] {
        let mesh = icosahedron(1.0, detail);
        group.throughput(Throughput::Elements(mesh.triangle_count() as u64));

        for (name, set) in [("random", AttributeSet::Random), ("random_center", AttributeSet::RandomAndCenter)] {
            group.bench_with_input(BenchmarkId::new(name, mesh.triangle_count()), &mesh, |b, mesh| {
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| annotate(black_box(mesh), set, &mut rng))
            });
        }
    }

    group.finish();
}

fn bench_icosahedron(c: &mut Criterion) {
    c.bench_function("icosahedron_detail_3", |b| b.iter(|| icosahedron(black_box(1.0), black_box(3))));
}

criterion_group!(benches, bench_annotate, bench_icosahedron);
criterion_main!(benches);
