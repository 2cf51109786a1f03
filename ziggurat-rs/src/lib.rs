//! # Ziggurat: Fast Standard Normal PRNG
//!
//! Standard normal variates from a 128-block Ziggurat, a polar Box-Muller
//! sampler to compare it against, and the Abramowitz & Stegun error function
//! approximation used to evaluate the normal CDF.
//!
//! The samplers own no generator and no mutable state. Each call pulls what
//! it needs from a [`UniformBitSource`] and reads the process-wide
//! [`tables`], so any number of threads may sample concurrently as long as
//! each brings its own source.
//!
//! ## Performance
//!
//! Almost every Ziggurat draw costs one 64-bit word, one table lookup, one
//! integer compare and one floating-point multiply. Only when the point
//! lands in the sliver of a block that pokes out above the curve, or in the
//! tail, does it fall back to `exp`/`ln`.
//!
//! ```
//! use ziggurat_rs::{RngSource, sample_standard_normal, erf};
//!
//! let mut source = RngSource::from_seed(42);
//! let z = sample_standard_normal(&mut source);
//! assert!(z.is_finite());
//! assert!((erf(1.0) - 0.8427007).abs() < 1e-6);
//! ```

pub mod boxmuller;
pub mod constants;
pub mod erf;
pub mod error;
pub mod source;
pub mod tables;

use constants::*;
use rand::rngs::StdRng;
use tables::gaussian_pdf_denorm;

pub use erf::{erf, normal_cdf, standard_normal_cdf};
pub use error::TableError;
pub use source::{RngSource, UniformBitSource};
pub use tables::ZigguratTables;

/// Draw one standard normal variate with the Ziggurat method.
///
/// Each attempt spends one 64-bit word: the low 3 bits are dropped, bits
/// 3..=9 pick the block, bit 10 is the sign and bits 11..=63 give the
/// horizontal position within the block. Attempts repeat until one is
/// accepted; there is no cap on the number of attempts.
#[inline]
pub fn sample_standard_normal<S: UniformBitSource + ?Sized>(source: &mut S) -> f64 {
    let t = tables::get();
    loop {
        let u = source.next_u64();

        let s = ((u >> DISCARD_BITS) & BLOCK_MASK) as usize;
        let sign = if u & SIGN_BIT == 0 { 1.0 } else { -1.0 };
        let u2 = u >> FRACTION_SHIFT;

        if s == 0 {
            if u2 < t.x_comp[0] {
                // Inside the base rectangle.
                return u2 as f64 * INCR * t.a_div_y0 * sign;
            }
            return sample_tail(source) * sign;
        }

        // Inside the part of the block that is entirely under the curve.
        if u2 < t.x_comp[s] {
            return u2 as f64 * INCR * t.x[s] * sign;
        }

        // Past x[s + 1]; test a random height against the curve.
        let x = u2 as f64 * INCR * t.x[s];
        if t.y[s - 1] + (t.y[s] - t.y[s - 1]) * source.next_f64() < gaussian_pdf_denorm(x) {
            return x * sign;
        }
    }
}

/// Draw from the tail `x >= R` with Marsaglia's exponential rejection:
/// `x = -ln(U1)/R`, `y = -ln(U2)`, until `2y >= x^2`.
fn sample_tail<S: UniformBitSource + ?Sized>(source: &mut S) -> f64 {
    loop {
        let x = -source.next_non_zero_f64().ln() / ZIGGURAT_NOR_R;
        let y = -source.next_non_zero_f64().ln();
        if y + y >= x * x {
            return ZIGGURAT_NOR_R + x;
        }
    }
}

/// Draw one standard normal variate with the polar Box-Muller method.
#[inline]
pub fn sample_standard_normal_box_muller<S: UniformBitSource + ?Sized>(source: &mut S) -> f64 {
    boxmuller::gaussian(source)
}

/// Normal generator owning its source of uniform bits.
pub struct Ziggurat<S = RngSource<StdRng>> {
    source: S,
}

impl Ziggurat {
    /// Create a new Ziggurat generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self::from_source(RngSource::from_seed(seed))
    }
}

impl<S: UniformBitSource> Ziggurat<S> {
    /// Create a generator drawing from `source`, building the tables if needed
    pub fn from_source(source: S) -> Self {
        tables::init();
        Self { source }
    }

    /// Generate a uniform random number in [0, 1)
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.source.next_f64()
    }

    /// Generate a standard normal (Gaussian) random variable (mean=0, stddev=1)
    #[inline]
    pub fn normal(&mut self) -> f64 {
        sample_standard_normal(&mut self.source)
    }

    /// Generate a Gaussian random variable with given standard deviation
    #[inline]
    pub fn gaussian(&mut self, sigma: f64) -> f64 {
        self.normal() * sigma
    }

    /// Standard normal variate from the Box-Muller baseline, sharing this
    /// generator's source.
    #[inline]
    pub fn box_muller(&mut self) -> f64 {
        sample_standard_normal_box_muller(&mut self.source)
    }

    /// Fill `out` with standard normal variates.
    pub fn fill_normal(&mut self, out: &mut [f64]) {
        for v in out.iter_mut() {
            *v = self.normal();
        }
    }
}

impl Default for Ziggurat {
    fn default() -> Self {
        Self::new(17)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed words and doubles, panicking if the sampler asks for
    /// more than was scripted.
    struct Scripted {
        words: VecDeque<u64>,
        doubles: VecDeque<f64>,
    }

    impl Scripted {
        fn new(words: &[u64], doubles: &[f64]) -> Self {
            Self {
                words: words.iter().copied().collect(),
                doubles: doubles.iter().copied().collect(),
            }
        }

        fn exhausted(&self) -> bool {
            self.words.is_empty() && self.doubles.is_empty()
        }
    }

    impl UniformBitSource for Scripted {
        fn next_u64(&mut self) -> u64 {
            self.words.pop_front().expect("script ran out of words")
        }

        fn next_f64(&mut self) -> f64 {
            self.doubles.pop_front().expect("script ran out of doubles")
        }
    }

    fn word(block: u64, negative: bool, fraction: u64) -> u64 {
        let sign = if negative { SIGN_BIT } else { 0 };
        (fraction << FRACTION_SHIFT) | sign | (block << DISCARD_BITS)
    }

    #[test]
    fn test_zero_word_is_zero() {
        let mut src = Scripted::new(&[0], &[]);
        let z = sample_standard_normal(&mut src);
        assert_eq!(z, 0.0);
        assert!(z.is_sign_positive());
        assert!(src.exhausted());
    }

    #[test]
    fn test_low_bits_ignored() {
        let a = sample_standard_normal(&mut Scripted::new(&[word(9, false, 1 << 40)], &[]));
        let b = sample_standard_normal(&mut Scripted::new(&[word(9, false, 1 << 40) | 0b111], &[]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_base_rectangle_fast_path() {
        let t = tables::get();
        let fraction = t.x_comp[0] - 1;
        let mut src = Scripted::new(&[word(0, false, fraction)], &[]);
        let z = sample_standard_normal(&mut src);
        assert_eq!(z, fraction as f64 * INCR * t.a_div_y0);
        assert!(z > 0.0 && z < t.a_div_y0);
        assert!(src.exhausted());
    }

    #[test]
    fn test_base_block_tail() {
        let mut src = Scripted::new(&[word(0, false, MAXINT)], &[0.9, 0.1]);
        let z = sample_standard_normal(&mut src);
        let expected = ZIGGURAT_NOR_R - 0.9f64.ln() / ZIGGURAT_NOR_R;
        assert_eq!(z, expected);
        assert!(z > ZIGGURAT_NOR_R);
        assert!(src.exhausted());
    }

    #[test]
    fn test_negative_tail() {
        let mut src = Scripted::new(&[word(0, true, MAXINT)], &[0.9, 0.1]);
        assert!(sample_standard_normal(&mut src) < -ZIGGURAT_NOR_R);
    }

    #[test]
    fn test_tail_rejection_redraws() {
        // x = -ln(1e-6)/R ~ 4.01 needs 2y >= 16.1, which y = -ln(0.5) fails.
        let mut src = Scripted::new(&[word(0, false, MAXINT)], &[1e-6, 0.5, 0.9, 0.1]);
        let z = sample_standard_normal(&mut src);
        assert_eq!(z, ZIGGURAT_NOR_R - 0.9f64.ln() / ZIGGURAT_NOR_R);
        assert!(src.exhausted());
    }

    #[test]
    fn test_tail_skips_zero_doubles() {
        let mut src = Scripted::new(&[word(0, false, MAXINT)], &[0.0, 0.9, 0.1]);
        let z = sample_standard_normal(&mut src);
        assert!(z.is_finite() && z > ZIGGURAT_NOR_R);
        assert!(src.exhausted());
    }

    #[test]
    fn test_block_fast_path() {
        let t = tables::get();
        let fraction = 1u64 << 50;
        let mut src = Scripted::new(&[word(40, false, fraction)], &[]);
        let z = sample_standard_normal(&mut src);
        assert!(fraction < t.x_comp[40]);
        assert_eq!(z, fraction as f64 * INCR * t.x[40]);
        assert!(src.exhausted());
    }

    #[test]
    fn test_top_block_accepts_under_curve() {
        let t = tables::get();
        let top = BLOCK_COUNT as u64 - 1;
        let mut src = Scripted::new(&[word(top, false, MAXINT / 2)], &[0.0]);
        let z = sample_standard_normal(&mut src);
        assert_eq!(z, (MAXINT / 2) as f64 * INCR * t.x[BLOCK_COUNT - 1]);
        assert!(src.exhausted());
    }

    #[test]
    fn test_top_block_rejection_restarts() {
        // Height near the peak is above the curve for any x > 0, so the
        // first word is rejected and the second is used.
        let top = BLOCK_COUNT as u64 - 1;
        let mut src = Scripted::new(&[word(top, false, MAXINT / 2), 0], &[0.999999]);
        assert_eq!(sample_standard_normal(&mut src), 0.0);
        assert!(src.exhausted());
    }

    #[test]
    fn test_sign_bit_negates() {
        let t = tables::get();
        // Halfway between x[41] and x[40], comfortably under the curve.
        let wedge = t.x_comp[40] / 2 + MAXINT / 2;
        let cases = [
            (word(0, false, 12345), vec![]),
            (word(0, false, MAXINT), vec![0.9, 0.1]),
            (word(40, false, 1 << 50), vec![]),
            (word(40, false, wedge), vec![0.0]),
            (word(BLOCK_COUNT as u64 - 1, false, MAXINT / 3), vec![0.25]),
        ];
        for (w, doubles) in cases {
            let pos = sample_standard_normal(&mut Scripted::new(&[w], &doubles));
            let neg = sample_standard_normal(&mut Scripted::new(&[w | SIGN_BIT], &doubles));
            assert_eq!(neg, -pos, "word {w:#x}");
        }
    }

    #[test]
    fn test_normal() {
        let mut rng = Ziggurat::new(42);
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let n = 10000;

        for _ in 0..n {
            let x = rng.normal();
            sum += x;
            sum_sq += x * x;
        }

        let mean = sum / n as f64;
        let variance = sum_sq / n as f64 - mean * mean;

        assert!(
            (mean.abs()) < 0.1,
            "Mean should be close to 0, got {}",
            mean
        );
        assert!(
            (variance - 1.0).abs() < 0.1,
            "Variance should be close to 1, got {}",
            variance
        );
    }

    #[test]
    fn test_gaussian() {
        let mut rng = Ziggurat::new(42);
        let sigma = 2.5;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let n = 10000;

        for _ in 0..n {
            let x = rng.gaussian(sigma);
            sum += x;
            sum_sq += x * x;
        }

        let mean = sum / n as f64;
        let stddev = (sum_sq / n as f64 - mean * mean).sqrt();

        assert!(mean.abs() < 0.2, "Mean should be close to 0, got {}", mean);
        assert!(
            (stddev - sigma).abs() < 0.2,
            "Stddev should be close to {}, got {}",
            sigma,
            stddev
        );
    }

    #[test]
    fn test_uniform() {
        let mut rng = Ziggurat::default();
        for _ in 0..1000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Ziggurat::new(99);
        let mut b = Ziggurat::new(99);
        let mut buf_a = [0.0; 256];
        let mut buf_b = [0.0; 256];
        a.fill_normal(&mut buf_a);
        b.fill_normal(&mut buf_b);
        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn test_borrowed_generator_source() {
        let mut source = RngSource::from_seed(5);
        let mut rng = Ziggurat::from_source(&mut source);
        assert!(rng.box_muller().is_finite());
        assert!(rng.normal().is_finite());
    }
}
