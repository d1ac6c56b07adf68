use crate::{
    fields::{
        sm9::{Fq, Fq12, Fq2, Fq4, Fr},
        tests::{
            field_laws, field_serialization, frobenius_is_pow_p, prime_field_bytes,
            sqrt_roundtrip, TEST_SEED,
        },
        Field, FpParameters, PrimeField, SquareRootField,
    },
    rand::UniformRand,
    to_bytes,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

#[test]
fn fq_laws() {
    field_laws::<Fq>();
    field_serialization::<Fq>();
    prime_field_bytes::<Fq>();
}

#[test]
fn fr_laws() {
    field_laws::<Fr>();
    field_serialization::<Fr>();
    prime_field_bytes::<Fr>();
}

#[test]
fn fq2_laws() {
    field_laws::<Fq2>();
    field_serialization::<Fq2>();
}

#[test]
fn fq4_laws() {
    field_laws::<Fq4>();
    field_serialization::<Fq4>();
}

#[test]
fn fq12_laws() {
    field_laws::<Fq12>();
    field_serialization::<Fq12>();
}

#[test]
fn fq_modulus_is_five_mod_eight() {
    assert_eq!(<Fq as PrimeField>::Params::MODULUS.0[0] & 7, 5);
}

#[test]
fn fq_sqrt() {
    sqrt_roundtrip::<Fq>();
    // 2 is a quadratic non-residue mod q, which is what makes u^2 = -2 work
    assert!(Fq::from(2u64).legendre().is_qnr());
    assert!(Fq::from(2u64).sqrt().is_none());
}

#[test]
fn fq2_sqrt() {
    sqrt_roundtrip::<Fq2>();
}

#[test]
fn tower_structure() {
    let u = Fq2::new(Fq::zero(), Fq::one());
    assert_eq!(u.square(), Fq2::new(-Fq::from(2u64), Fq::zero()));

    let v = Fq4::new(Fq2::zero(), Fq2::one());
    assert_eq!(v.square(), Fq4::new(u, Fq2::zero()));

    let w = Fq12::new(Fq4::zero(), Fq4::one(), Fq4::zero());
    assert_eq!(
        w.square() * w,
        Fq12::new(Fq4::new(Fq2::zero(), Fq2::one()), Fq4::zero(), Fq4::zero())
    );
}

#[test]
fn frobenius_tables_match_pow() {
    let q_limbs = <Fq as PrimeField>::Params::MODULUS.0;
    frobenius_is_pow_p::<Fq2, _>(q_limbs);
    frobenius_is_pow_p::<Fq4, _>(q_limbs);
    frobenius_is_pow_p::<Fq12, _>(q_limbs);
}

#[test]
fn frobenius_order_twelve() {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);
    let a = Fq12::rand(&mut rng);
    let mut b = a;
    for _ in 0..12 {
        b.frobenius_map(1);
    }
    assert_eq!(a, b);
}

#[test]
fn wire_order_is_high_component_first() {
    let a = Fq2::new(Fq::from(1u64), Fq::from(2u64));
    let bytes = to_bytes![a].unwrap();
    assert_eq!(bytes.len(), 64);
    // c1 = 2 leads, c0 = 1 trails
    assert_eq!(bytes[31], 2);
    assert_eq!(bytes[63], 1);

    let g = Fq12::new(
        Fq4::new(Fq2::new(Fq::from(9u64), Fq::zero()), Fq2::zero()),
        Fq4::zero(),
        Fq4::zero(),
    );
    let bytes = to_bytes![g].unwrap();
    assert_eq!(bytes.len(), 384);
    // the constant term is the last 32-byte block
    assert_eq!(bytes[383], 9);
    assert!(bytes[..352].iter().all(|&b| b == 0));
}
