use rand::Rng;

/// Types that can be sampled uniformly at random from an RNG.
///
/// Field elements are sampled by drawing a shaved big integer and rejecting
/// values outside the canonical range, so the distribution is uniform.
pub trait UniformRand: Sized {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self;
}
