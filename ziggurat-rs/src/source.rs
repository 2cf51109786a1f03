//! Sources of uniform random bits.
//!
//! The samplers never own a generator. They pull words and doubles from
//! anything implementing [`UniformBitSource`], so the same code runs against
//! a seeded [`rand`] generator, a per-thread generator, or a scripted
//! sequence in tests.

use rand::{
    Rng, RngCore, SeedableRng,
    distr::{Open01, StandardUniform},
    rngs::StdRng,
};

/// Raw uniform randomness consumed by the normal samplers.
pub trait UniformBitSource {
    /// Next 64 uniformly random bits.
    fn next_u64(&mut self) -> u64;

    /// Uniform double in `[0, 1)`. May be zero.
    fn next_f64(&mut self) -> f64;

    /// Uniform double in `(0, 1)`. Used wherever the value goes into `ln`.
    fn next_non_zero_f64(&mut self) -> f64 {
        loop {
            let u = self.next_f64();
            if u != 0.0 {
                return u;
            }
        }
    }
}

impl<S: UniformBitSource + ?Sized> UniformBitSource for &mut S {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    #[inline]
    fn next_non_zero_f64(&mut self) -> f64 {
        (**self).next_non_zero_f64()
    }
}

/// [`UniformBitSource`] backed by any [`rand`] generator.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed always yields the same stream.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> UniformBitSource for RngSource<R> {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.rng.sample(StandardUniform)
    }

    #[inline]
    fn next_non_zero_f64(&mut self) -> f64 {
        self.rng.sample(Open01)
    }
}
