use crate::{
    biginteger::BigInteger256,
    bytes::FromBytes,
    fields::{Field, Fp256, Fp256Parameters, FpParameters, PrimeField, SquareRootField},
    rand::UniformRand,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

pub(crate) const TEST_SEED: [u8; 16] = *b"gm-algebra-seed1";
pub(crate) const ITERATIONS: usize = 32;

pub(crate) fn field_laws<F: Field>() {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);

    assert!(F::zero().is_zero());
    assert!(F::one().is_one());
    assert_eq!(F::one() + F::zero(), F::one());

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let b = F::rand(&mut rng);
        let c = F::rand(&mut rng);

        // commutativity and associativity
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a * b) * c, a * (b * c));

        // distributivity
        assert_eq!(a * (b + c), a * b + a * c);

        // identities and negation
        assert_eq!(a + F::zero(), a);
        assert_eq!(a * F::one(), a);
        assert_eq!(a + (-a), F::zero());
        assert_eq!(a - b, a + (-b));

        // doubling and squaring agree with the ring operations
        assert_eq!(a.double(), a + a);
        assert_eq!(a.square(), a * a);

        // inversion
        if !a.is_zero() {
            assert_eq!(a * a.inverse().unwrap(), F::one());
            assert_eq!(a / a, F::one());
        }
    }
    assert!(F::zero().inverse().is_none());
}

pub(crate) fn field_serialization<F: Field>() {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);
    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let bytes = crate::to_bytes![a].unwrap();
        let b = F::read(&bytes[..]).unwrap();
        assert_eq!(a, b);
    }
}

pub(crate) fn sqrt_roundtrip<F: SquareRootField>() {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);
    assert_eq!(F::zero().sqrt(), Some(F::zero()));
    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let square = a.square();
        let root = square.sqrt().expect("squares have roots");
        assert!(root == a || root == -a);
    }
}

pub(crate) fn frobenius_is_pow_p<F: Field, B: AsRef<[u64]> + Copy>(modulus: B) {
    let mut rng = XorShiftRng::from_seed(TEST_SEED);
    for _ in 0..ITERATIONS / 4 {
        let a = F::rand(&mut rng);
        let mut b = a;
        for power in 0..4 {
            let mut c = a;
            c.frobenius_map(power);
            assert_eq!(b, c, "frobenius power {}", power);
            b = b.pow(modulus);
        }
    }
}

pub(crate) fn prime_field_bytes<F: PrimeField<BigInt = BigInteger256>>() {
    // big-endian, fixed width
    assert_eq!(F::size_in_bytes(), 32);
    let two = F::from(2u64);
    let bytes = crate::to_bytes![two].unwrap();
    assert_eq!(bytes[31], 2);
    assert!(bytes[..31].iter().all(|&b| b == 0));

    // wide reduction: 2^256 + 5 mod p
    let mut wide = vec![1u8];
    wide.extend_from_slice(&[0u8; 31]);
    wide.push(5);
    let expected = {
        // 2^256 mod p = (2^256 - p) + ... computed through the field itself
        let mut r = P256Pow2::<F>::two_to_256();
        r += F::from(5u64);
        r
    };
    assert_eq!(F::from_be_bytes_mod_order(&wide), expected);
}

// Helper computing 2^256 in the field by repeated doubling.
struct P256Pow2<F>(std::marker::PhantomData<F>);
impl<F: PrimeField> P256Pow2<F> {
    fn two_to_256() -> F {
        let mut r = F::one();
        for _ in 0..256 {
            r.double_in_place();
        }
        r
    }
}

/// A 256-bit prime with p = 1 (mod 8), exercising the Lucas-sequence branch
/// of the square root that the GM/T moduli never reach.
mod lucas {
    use super::*;

    pub type LucasFq = Fp256<LucasFqParameters>;

    pub struct LucasFqParameters;

    impl Fp256Parameters for LucasFqParameters {}
    impl FpParameters for LucasFqParameters {
        type BigInt = BigInteger256;

        /// MODULUS = 2^255 + 1073
        const MODULUS: BigInteger256 = BigInteger256([
            0x431,
            0x0,
            0x0,
            0x8000000000000000,
        ]);

        const MODULUS_BITS: u32 = 256;

        const REPR_SHAVE_BITS: u32 = 0;

        const R: BigInteger256 = BigInteger256([
            0xfffffffffffffbcf,
            0xffffffffffffffff,
            0xffffffffffffffff,
            0x7fffffffffffffff,
        ]);

        const R2: BigInteger256 = BigInteger256([
            0x464584,
            0x0,
            0x0,
            0x0,
        ]);

        const INV: u64 = 0xdbf951d5883b2b2f;

        const MODULUS_MINUS_ONE_DIV_TWO: BigInteger256 = BigInteger256([
            0x218,
            0x0,
            0x0,
            0x4000000000000000,
        ]);
    }

    #[test]
    fn modulus_is_one_mod_eight() {
        assert_eq!(LucasFqParameters::MODULUS.0[0] & 7, 1);
    }

    #[test]
    fn lucas_sqrt_of_known_square() {
        let x = LucasFq::from(0x1234567890abcdefu64);
        let square = x.square();
        let root = square.sqrt().expect("square has a root");
        assert!(root == x || root == -x);
    }

    #[test]
    fn lucas_sqrt_rejects_non_square() {
        // 7 is a quadratic non-residue of this modulus
        let x = LucasFq::from(7u64);
        assert!(x.legendre().is_qnr());
        assert!(x.sqrt().is_none());
    }

    #[test]
    fn lucas_field_laws() {
        field_laws::<LucasFq>();
        sqrt_roundtrip::<LucasFq>();
    }
}

#[test]
fn bit_iterator_is_msb_first() {
    let bits: Vec<bool> = crate::fields::BitIterator::new([0b101u64]).collect();
    assert_eq!(bits.len(), 64);
    assert!(!bits[60]);
    assert!(bits[61]);
    assert!(!bits[62]);
    assert!(bits[63]);
}
