use crate::{
    curves::{sm2p256v1::Affine, AffineCurve, PcMode},
    error::Error,
    fields::{sm2::Fr, FpParameters, PrimeField},
    rand::UniformRand,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

const TEST_SEED: [u8; 16] = *b"sm2p256v1-seed01";

fn scalar(hex: &str) -> <Fr as PrimeField>::BigInt {
    Fr::from_be_bytes_mod_order(&hex::decode(hex).unwrap()).into_repr()
}

#[test]
fn generator_is_on_curve() {
    let g = Affine::prime_subgroup_generator();
    assert!(g.is_on_curve());
    assert!(!g.is_zero());
}

#[test]
fn generator_has_order_n() {
    let g = Affine::prime_subgroup_generator();
    assert!(g.mul(<Fr as PrimeField>::Params::MODULUS).is_zero());
}

#[test]
fn group_laws() {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);
    let zero = Affine::zero();
    assert!(zero.is_zero());
    assert!(zero.is_on_curve());

    for _ in 0..8 {
        let a = Affine::rand(&mut rng);
        let b = Affine::rand(&mut rng);
        let c = Affine::rand(&mut rng);
        assert!(a.is_on_curve());

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + zero, a);
        assert!((a - a).is_zero());
        assert_eq!(a + a, a.double());
        assert_eq!(a.double() + a, a.mul([3u64]));
    }
}

#[test]
fn scalar_multiplication_distributes() {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);
    let g = Affine::rand(&mut rng);
    let a = Fr::rand(&mut rng);
    let b = Fr::rand(&mut rng);
    let lhs = g.mul((a + b).into_repr());
    let rhs = g.mul(a.into_repr()) + g.mul(b.into_repr());
    assert_eq!(lhs, rhs);
    assert!(g.mul([0u64]).is_zero());
}

#[test]
fn known_scalar_multiples() {
    let g = Affine::prime_subgroup_generator();

    // d * G for the GB/T 32918 signing example key
    let d = scalar("3945208F7B2144B13F36E38AC6D39F95889393692860B51A42FB81EF4DF7C5B8");
    let pk = Affine::from_pc_bytes(
        &hex::decode(
            "0409F9DF311E5421A150DD7D161E4BC5C672179FAD1833FC076BB08FF356F35020\
             CCEA490CE26775A52DC6EA718CC1AA600AED05FBF35E084A6632F6072DA9AD13",
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(g.mul(d), pk);

    // k * G from the encryption example (the C1 point)
    let k = scalar("59276E27D506861A16680F3AD9C02DCCEF3CC1FA3CDBE4CE6D54B80DEAC1BC21");
    let c1 = Affine::from_pc_bytes(
        &hex::decode(
            "0404EBFC718E8D1798620432268E77FEB6415E2EDE0E073C0F4F640ECD2E149A73\
             E858F9D81E5430A57B36DAAB8F950A3C64E6EE6A63094D99283AFF767E124DF0",
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(g.mul(k), c1);
}

#[test]
fn pc_roundtrip_all_modes() {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);
    for _ in 0..8 {
        let p = Affine::rand(&mut rng);
        for &mode in &[PcMode::Raw, PcMode::Compressed, PcMode::Mixed] {
            let bytes = p.to_pc_bytes(mode);
            let q = Affine::from_pc_bytes(&bytes).unwrap();
            assert_eq!(p, q, "mode {:?}", mode);
        }
    }
    // infinity is the single byte 0x00 in every mode
    let inf = Affine::zero();
    assert_eq!(inf.to_pc_bytes(PcMode::Raw), vec![0x00]);
    assert_eq!(Affine::from_pc_bytes(&[0x00]).unwrap(), inf);
}

#[test]
fn pc_rejects_bad_prefix() {
    let g = Affine::prime_subgroup_generator();
    let mut bytes = g.to_pc_bytes(PcMode::Raw);
    bytes[0] = 0x05;
    assert_eq!(
        Affine::from_pc_bytes(&bytes),
        Err(Error::InvalidPcByte(0x05))
    );
}

#[test]
fn pc_rejects_x_off_curve() {
    // x = 2 gives a y^2 with no root in the base field
    let mut bytes = vec![0x02];
    bytes.extend_from_slice(&[0u8; 31]);
    bytes.push(2);
    assert_eq!(Affine::from_pc_bytes(&bytes), Err(Error::PointNotOnCurve));
}
