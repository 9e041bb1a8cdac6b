use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{pairing, G1Affine, G2Affine, Group, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> ScalarField {
    ScalarField::random(rng)
}

fn bench_g1_double(c: &mut Criterion) {
    let g = G1Affine::generator();
    c.bench_function("g1_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_g1_add(c: &mut Criterion) {
    let g = G1Affine::generator();
    let h = g.mul_u64(7);
    c.bench_function("g1_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_g1_scalar_mul(c: &mut Criterion) {
    let g = G1Affine::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("g1_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_g2_add(c: &mut Criterion) {
    let g = G2Affine::generator();
    let h = g.mul_u64(7);
    c.bench_function("g2_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_g2_scalar_mul(c: &mut Criterion) {
    let g = G2Affine::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("g2_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_g2_validate(c: &mut Criterion) {
    let g = G2Affine::generator().mul_u64(12345);
    c.bench_function("g2_validate", |bencher| {
        bencher.iter(|| black_box(black_box(g).validate()))
    });
}

fn bench_pairing(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = G1Affine::generator() * random_scalar(&mut rng);
    let q = G2Affine::generator() * random_scalar(&mut rng);

    let mut group = c.benchmark_group("pairing");
    group.sample_size(20);
    group.bench_function("optimal_ate", |bencher| {
        bencher.iter(|| black_box(pairing(black_box(&q), black_box(&p))))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_g1_double,
    bench_g1_add,
    bench_g1_scalar_mul,
    bench_g2_add,
    bench_g2_scalar_mul,
    bench_g2_validate,
    bench_pairing
);
criterion_main!(benches);
