use criterion::{criterion_group, criterion_main, Criterion};
use gm_primitives::{crh::Hash, Sm3, Sm2};

fn bench_sm3(c: &mut Criterion) {
    let data = vec![0xabu8; 1024];
    c.bench_function("sm3: 1 KiB digest", move |b| b.iter(|| Sm3::hash(&data)));
}

fn bench_sm2_sign(c: &mut Criterion) {
    let mut sm2 = Sm2::new();
    let (sk, _) = sm2.generate_keypair();
    sm2.set_secret_key(&sk).unwrap();
    sm2.set_uid(b"1234567812345678");
    c.bench_function("sm2: sign", move |b| {
        b.iter(|| sm2.sign(b"message digest").unwrap())
    });
}

fn bench_sm2_encrypt(c: &mut Criterion) {
    let mut sm2 = Sm2::new();
    let (sk, _) = sm2.generate_keypair();
    sm2.set_secret_key(&sk).unwrap();
    c.bench_function("sm2: encrypt 19 bytes", move |b| {
        b.iter(|| sm2.encrypt(b"encryption standard").unwrap())
    });
}

criterion_group!(benches, bench_sm3, bench_sm2_sign, bench_sm2_encrypt);
criterion_main!(benches);
