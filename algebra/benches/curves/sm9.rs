use criterion::{criterion_group, criterion_main, Criterion};
use gm_algebra::{
    curves::{
        sm9::{G1Affine, G2Affine, Sm9},
        AffineCurve, PairingEngine,
    },
    fields::{sm9::Fr, PrimeField},
    rand::UniformRand,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_g1_mul(c: &mut Criterion) {
    let mut rng = XorShiftRng::from_seed(*b"sm9-bench-seed01");
    let g = G1Affine::prime_subgroup_generator();
    let k = Fr::rand(&mut rng).into_repr();
    c.bench_function("sm9: G1 scalar multiplication", move |b| {
        b.iter(|| g.mul(k))
    });
}

fn bench_miller_loop(c: &mut Criterion) {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();
    c.bench_function("sm9: Miller loop", move |b| {
        b.iter(|| Sm9::miller_loop(&g1, &g2))
    });
}

fn bench_pairing(c: &mut Criterion) {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();
    c.bench_function("sm9: full pairing", move |b| {
        b.iter(|| Sm9::pairing(g1, g2))
    });
}

criterion_group!(benches, bench_g1_mul, bench_miller_loop, bench_pairing);
criterion_main!(benches);
