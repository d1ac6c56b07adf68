//! Model for Barreto-Naehrig curves and their R-ate pairing.
//!
//! The embedding field is the tower Fp12 = Fp4[w]/(w^3 - v) over
//! Fp4 = Fp2[v]/(v^2 - u), and G2 lives on the sextic twist
//! E': y^2 = x^3 + b * u over Fp2. The Miller loop runs over the bits of
//! a = 6t + 2 with the twist points carried on E' and the line functions
//! evaluated in Fp12 through the twist embedding
//!
//! phi(x, y) = (x * w^-2, y * w^-3),
//!
//! and the final exponentiation splits into the Frobenius easy part and the
//! fixed hard-part product for BN curves.

use crate::{
    curves::{
        models::{ModelParameters, SWModelParameters},
        short_weierstrass_affine::GroupAffine,
        PairingEngine,
    },
    fields::{
        fp12_3over4::{Fp12, Fp12Parameters},
        fp2::{Fp2, Fp2Parameters},
        fp4::{Fp4, Fp4Parameters},
        Field, PrimeField, SquareRootField,
    },
};
use derivative::Derivative;
use std::marker::PhantomData;

pub mod g1;
pub mod g2;

pub use self::{g1::G1Affine, g2::G2Affine};

/// Parameters of a BN curve E: y^2 = x^3 + b mod p as needed for the R-ate
/// pairing.
pub trait BnParameters: 'static {
    /// The Miller loop count a = 6t + 2, iterated from the bit below the
    /// most significant one.
    const ATE_LOOP_COUNT: &'static [u64];

    /// The curve parameter t, the exponent of the hard part.
    const T: &'static [u64];

    /// 1/(-2) mod p, the scalar of the twist embedding.
    const TWIST_PHI_FACTOR: Self::Fp;

    /// Factors turning coordinate conjugation into the twist Frobenius
    /// pi: (x, y) -> (x^p * gamma_x, y^p * gamma_y), for pi and pi^2.
    const TWIST_FROBENIUS_COEFF_X_1: Fp2<Self::Fp2Params>;
    const TWIST_FROBENIUS_COEFF_Y_1: Fp2<Self::Fp2Params>;
    const TWIST_FROBENIUS_COEFF_X_2: Fp2<Self::Fp2Params>;
    const TWIST_FROBENIUS_COEFF_Y_2: Fp2<Self::Fp2Params>;

    type Fp: PrimeField + SquareRootField;
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    type Fp4Params: Fp4Parameters<Fp2Params = Self::Fp2Params>;
    type Fp12Params: Fp12Parameters<Fp4Params = Self::Fp4Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp2<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

#[derive(Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Bn<P: BnParameters>(PhantomData<fn() -> P>);

impl<P: BnParameters> Bn<P> {
    /// Embeds a twist point into E(Fp12).
    ///
    /// With w^6 = u, the inverses w^-2 = (u/(-2)) v w and w^-3 = (u/(-2)) v
    /// keep both coordinates sparse.
    fn phi(q: &G2Affine<P>) -> (Fp12<P::Fp12Params>, Fp12<P::Fp12Params>) {
        let mut xu = <P::Fp4Params as Fp4Parameters>::mul_fp2_by_nonresidue(&q.x);
        xu.mul_by_fp(&P::TWIST_PHI_FACTOR);
        let mut yu = <P::Fp4Params as Fp4Parameters>::mul_fp2_by_nonresidue(&q.y);
        yu.mul_by_fp(&P::TWIST_PHI_FACTOR);
        let x = Fp12::new(Fp4::zero(), Fp4::new(Fp2::zero(), xu), Fp4::zero());
        let y = Fp12::new(Fp4::new(Fp2::zero(), yu), Fp4::zero(), Fp4::zero());
        (x, y)
    }

    /// Embeds a base-curve point into E(Fp12).
    fn embed_g1(p: &G1Affine<P>) -> (Fp12<P::Fp12Params>, Fp12<P::Fp12Params>) {
        let lift = |e: &P::Fp| {
            Fp12::new(
                Fp4::new(Fp2::new(*e, P::Fp::zero()), Fp2::zero()),
                Fp4::zero(),
                Fp4::zero(),
            )
        };
        (lift(&p.x), lift(&p.y))
    }

    /// The Miller line g_{U,V} through the embedded twist points, evaluated
    /// at the embedded base point (px, py):
    ///
    /// g = lambda (px - xv) - (py - yv),
    ///
    /// with lambda the tangent slope when U = V (the curve has a = 0) and the
    /// chord slope otherwise; a vertical line degenerates to px - xv.
    fn line(
        u: &G2Affine<P>,
        v: &G2Affine<P>,
        px: &Fp12<P::Fp12Params>,
        py: &Fp12<P::Fp12Params>,
    ) -> Fp12<P::Fp12Params> {
        let (xu, yu) = Self::phi(u);
        let (xv, yv) = Self::phi(v);
        if u.x == v.x {
            if (u.y + v.y).is_zero() {
                return *px - xv;
            }
            let x_square = xu.square();
            let lambda =
                (x_square.double() + x_square) * yu.double().inverse().unwrap();
            return lambda * (*px - xv) - (*py - yv);
        }
        let lambda = (yu - yv) * (xu - xv).inverse().unwrap();
        lambda * (*px - xv) - (*py - yv)
    }

    /// pi^power on the twist through phi, by coordinate Frobenius and the
    /// precomputed factors.
    fn frobenius_twist(q: &G2Affine<P>, power: usize) -> G2Affine<P> {
        let mut x = q.x;
        let mut y = q.y;
        x.frobenius_map(power);
        y.frobenius_map(power);
        match power {
            1 => {
                x *= &P::TWIST_FROBENIUS_COEFF_X_1;
                y *= &P::TWIST_FROBENIUS_COEFF_Y_1;
            }
            2 => {
                x *= &P::TWIST_FROBENIUS_COEFF_X_2;
                y *= &P::TWIST_FROBENIUS_COEFF_Y_2;
            }
            _ => unreachable!("only pi and pi^2 appear in the R-ate pairing"),
        }
        GroupAffine::new(x, y)
    }

    fn exp_by_t(f: &Fp12<P::Fp12Params>) -> Fp12<P::Fp12Params> {
        f.pow(P::T)
    }
}

impl<P: BnParameters> PairingEngine for Bn<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Affine = G1Affine<P>;
    type G2Affine = G2Affine<P>;
    type Fq = P::Fp;
    type Fqe = Fp2<P::Fp2Params>;
    type Fqk = Fp12<P::Fp12Params>;

    fn miller_loop(p: &Self::G1Affine, q: &Self::G2Affine) -> Self::Fqk {
        let (px, py) = Self::embed_g1(p);
        let mut f = Self::Fqk::one();
        let mut t = *q;

        let mut found_one = false;
        for bit in crate::fields::BitIterator::new(P::ATE_LOOP_COUNT) {
            if !found_one {
                found_one = bit;
                continue;
            }
            f = f.square() * Self::line(&t, &t, &px, &py);
            t.double_in_place();
            if bit {
                f *= Self::line(&t, q, &px, &py);
                t += q;
            }
        }

        // R-ate tail: two more lines through pi(Q) and -pi^2(Q)
        let q1 = Self::frobenius_twist(q, 1);
        let q2 = -Self::frobenius_twist(q, 2);
        f *= Self::line(&t, &q1, &px, &py);
        t += &q1;
        f *= Self::line(&t, &q2, &px, &py);
        f
    }

    /// f^((p^12 - 1)/n), exactly; pairing values match the GM/T byte vectors.
    fn final_exponentiation(f: &Self::Fqk) -> Option<Self::Fqk> {
        // Easy part: f^((p^6 - 1)(p^2 + 1))
        let f_inv = f.inverse()?;
        let mut easy = *f;
        easy.frobenius_map(6);
        easy *= f_inv;
        let mut tmp = easy;
        tmp.frobenius_map(2);
        easy *= tmp;

        // Hard part: (p^4 - p^2 + 1)/n decomposed over t and the Frobenius.
        let f = easy;
        let ft1 = Self::exp_by_t(&f);
        let ft2 = Self::exp_by_t(&ft1);
        let ft3 = Self::exp_by_t(&ft2);
        let mut fp1 = f;
        fp1.frobenius_map(1);
        let mut fp2 = f;
        fp2.frobenius_map(2);
        let mut fp3 = f;
        fp3.frobenius_map(3);

        let y0 = fp1 * fp2 * fp3;
        let y1 = f.square();
        let mut y2 = ft2;
        y2.frobenius_map(2);
        let y2 = y2.pow(&[6u64]);
        let mut y3 = ft1;
        y3.frobenius_map(1);
        let y3 = y3.pow(&[12u64]);
        let mut ft2_p = ft2;
        ft2_p.frobenius_map(1);
        let y4 = (ft1 * ft2_p).pow(&[18u64]);
        let y5 = ft2.pow(&[30u64]);
        let mut ft3_p = ft3;
        ft3_p.frobenius_map(1);
        let y6 = (ft3 * ft3_p).pow(&[36u64]);

        let numerator = y2 * y0;
        let denominator = y6 * y5 * y4 * y3 * y1;
        denominator.inverse().map(|d| numerator * d)
    }
}
