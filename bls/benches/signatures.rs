use bls::{HashToCurve, Keypair, SchemeConfig};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

const MSG: &[u8] = b"hello bls";

fn bench_hash_to_curve(c: &mut Criterion) {
    let strategy = HashToCurve::default();
    c.bench_function("hash_to_curve_try_and_increment", |bencher| {
        bencher.iter(|| black_box(strategy.hash(black_box(MSG)).expect("hash")))
    });
}

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let keypair = Keypair::generate(&mut rng).expect("keygen");
    let config = SchemeConfig::default();

    c.bench_function("bls_sign", |bencher| {
        bencher.iter(|| {
            let sig = keypair.sign(&config, black_box(MSG)).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let keypair = Keypair::generate(&mut rng).expect("keygen");
    let config = SchemeConfig::default();
    let sig = keypair.sign(&config, MSG).expect("sign");

    let mut group = c.benchmark_group("bls_verify");
    group.sample_size(20);
    group.bench_function("pairing_check", |bencher| {
        bencher.iter(|| {
            let ok = keypair
                .public
                .verify(&config, black_box(MSG), black_box(&sig))
                .expect("verify");
            black_box(ok);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_hash_to_curve, bench_sign, bench_verify);
criterion_main!(benches);
