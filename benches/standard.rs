use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use simplepoly::{EarClipper, contains, formats};
use simplepoly::tests::util;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("regular");
    for n in [16, 64, 256, 1024] {
        let polygon = util::polygon::regular(n, 100.);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("triangulate", n), &polygon, |b, p| {
            b.iter(|| simplepoly::triangulate(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("reused_clipper", n), &polygon, |b, p| {
            let mut clipper = EarClipper::new();
            let mut output = Vec::<usize>::new();
            b.iter(|| {
                output.clear();
                clipper.triangulate(black_box(p), formats::IndexedListFormat::new(&mut output)).expect("Triangulation failed");
            })
        });
        group.bench_with_input(BenchmarkId::new("contains", n), &polygon, |b, p| {
            b.iter(|| contains(black_box(p), &[25., 25.]))
        });
    }
    group.finish();

    let comb = util::load_polygon(util::polygons_path().join("comb.txt").to_str().unwrap()).unwrap();
    c.bench_function("comb", |b| b.iter(|| simplepoly::triangulate(black_box(&comb))));

    let star = util::polygon::random_star(500, 0);
    c.bench_function("random_star", |b| b.iter(|| simplepoly::triangulate(black_box(&star))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
