use crate::{
    curves::{
        sm9::{G1Affine, G2Affine, Sm9},
        AffineCurve, PairingCurve, PairingEngine, PcMode,
    },
    error::Error,
    fields::{sm9::{Fq12, Fr}, Field, FpParameters, PrimeField},
    rand::UniformRand,
    to_bytes,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

const TEST_SEED: [u8; 16] = *b"sm9-curves-seed1";

#[test]
fn generators_are_on_their_curves() {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();
    assert!(g1.is_on_curve());
    assert!(g2.is_on_curve());
}

#[test]
fn generators_have_order_n() {
    let n = <Fr as PrimeField>::Params::MODULUS;
    assert!(G1Affine::prime_subgroup_generator().mul(n).is_zero());
    assert!(G2Affine::prime_subgroup_generator().mul(n).is_zero());
}

#[test]
fn twist_group_laws() {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);
    for _ in 0..4 {
        let a = G2Affine::rand(&mut rng);
        let b = G2Affine::rand(&mut rng);
        assert!(a.is_on_curve());
        assert_eq!(a + b, b + a);
        assert_eq!(a + a, a.double());
        assert!((a - a).is_zero());
    }
}

#[test]
fn known_master_public_keys() {
    // master keys of the GM/T 0044 examples
    let msk_s =
        hex::decode("0130E78459D78545CB54C587E02CF480CE0B66340F319F348A1D5B1F2DC5F4").unwrap();
    let mpk_s = G2Affine::prime_subgroup_generator()
        .mul(Fr::from_be_bytes_mod_order(&msk_s).into_repr());
    let expected = G2Affine::from_pc_bytes(
        &hex::decode(
            "049f64080b3084f733e48aff4b41b565011ce0711c5e392cfb0ab1b6791b94c408\
             29dba116152d1f786ce843ed24a3b573414d2177386a92dd8f14d65696ea5e32\
             69850938abea0112b57329f447e3a0cbad3e2fdb1a77f335e89e1408d0ef1c25\
             41e00a53dda532da1a7ce027b7a46f741006e85f5cdff0730e75c05fb4e3216d",
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(mpk_s, expected);

    let msk_e =
        hex::decode("02E65B0762D042F51F0D23542B13ED8CFA2E9A0E7206361E013A283905E31F").unwrap();
    let mpk_e = G1Affine::prime_subgroup_generator()
        .mul(Fr::from_be_bytes_mod_order(&msk_e).into_repr());
    let expected = G1Affine::from_pc_bytes(
        &hex::decode(
            "049174542668e8f14ab273c0945c3690c66e5dd09678b86f734c4350567ed06283\
             54e598c6bf749a3dacc9fffedd9db6866c50457cfc7aa2a4ad65c3168ff74210",
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(mpk_e, expected);
}

#[test]
fn pairing_of_generators_matches_vector() {
    let g = Sm9::pairing(
        G1Affine::prime_subgroup_generator(),
        G2Affine::prime_subgroup_generator(),
    );
    let expected = hex::decode(
        "256943fbdb2bf87ab91ae7fbeaff14e146cf7e2279b9d155d13461e09b22f523\
         0167b0280051495c6af1ec23ba2cd2ff1cdcdeca461a5ab0b5449e9091308310\
         5e7addaddf7fbfe16291b4e89af50b8217ddc47ba3cba833c6e77c3fb027685e\
         79d0c8337072c93fef482bb055f44d6247ccac8e8e12525854b3566236337ebe\
         082cde173022da8cd09b28a2d80a8cee53894436a52007f978dc37f36116d39b\
         3fa7ed741eaed99a58f53e3df82df7ccd3407bcc7b1d44a9441920ced5fb824f\
         7fc6eb2aa771d99c9234fddd31752edfd60723e05a4ebfdeb5c33fbd47e0cf06\
         6fa6b6fa6dd6b6d3b19a959a110e748154eef796dc0fc2dd766ea414de786968\
         8ffe1c0e9de45fd0fed790ac26be91f6b3f0a49c084fe29a3fb6ed288ad7994d\
         1664a1366beb3196f0443e15f5f9042a947354a5678430d45ba031cff06db927\
         7f7c6d52b475e6aaa827fdc5b4175ac6929320f782d998f86b6b57cda42a0426\
         36a699de7c136f78eee2dbac4ca9727bff0cee02ee920f5822e65ea170aa9669",
    )
    .unwrap();
    assert_eq!(to_bytes![g].unwrap(), expected);
}

#[test]
fn pairing_is_bilinear() {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();
    let base = Sm9::pairing(g1, g2);

    let a = 123456789u64;
    let b = 987654321u64;
    let lhs = Sm9::pairing(g1.mul([a]), g2.mul([b]));
    // a * b fits one limb
    assert_eq!(lhs, base.pow(&[a * b]));
    assert_eq!(
        Sm9::pairing(g1.mul([a]), g2),
        Sm9::pairing(g1, g2.mul([a]))
    );
}

#[test]
fn pairing_is_non_degenerate() {
    let g = G1Affine::prime_subgroup_generator()
        .pairing_with(&G2Affine::prime_subgroup_generator());
    assert!(!g.is_one());
    assert!(!g.is_zero());
    // the target group has order n
    assert!(g.pow(<Fr as PrimeField>::Params::MODULUS).is_one());
}

#[test]
fn miller_value_needs_final_exponentiation() {
    let f = Sm9::miller_loop(
        &G1Affine::prime_subgroup_generator(),
        &G2Affine::prime_subgroup_generator(),
    );
    assert!(!f.pow(<Fr as PrimeField>::Params::MODULUS).is_one());
    assert_eq!(Sm9::final_exponentiation(&Fq12::zero()), None);
}

#[test]
fn twist_pc_roundtrip() {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);
    for _ in 0..4 {
        let p = G2Affine::rand(&mut rng);
        for &mode in &[PcMode::Raw, PcMode::Compressed, PcMode::Mixed] {
            let bytes = p.to_pc_bytes(mode);
            assert_eq!(G2Affine::from_pc_bytes(&bytes).unwrap(), p);
        }
    }
}

#[test]
fn g1_pc_rejects_x_off_curve() {
    // x = 0 gives y^2 = 5, a non-residue mod q
    let mut bytes = vec![0x03];
    bytes.extend_from_slice(&[0u8; 32]);
    assert_eq!(G1Affine::from_pc_bytes(&bytes), Err(Error::PointNotOnCurve));
}
