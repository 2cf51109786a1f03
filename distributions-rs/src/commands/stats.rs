//! Sample moments of a sampler.

use tracing::info;
use ziggurat_rs::RngSource;

use super::{SamplerKind, require_samples};
use crate::error::Result;

/// Running mean and variance (Welford) plus the observed range.
#[derive(Debug, Clone, Copy)]
pub struct Moments {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for Moments {
    fn default() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Moments {
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance; zero until two values have been seen.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

pub fn collect(sampler: SamplerKind, samples: usize, seed: u64) -> Moments {
    let mut source = RngSource::from_seed(seed);
    let mut moments = Moments::default();
    for _ in 0..samples {
        moments.push(sampler.sample(&mut source));
    }
    moments
}

pub fn run(samples: usize, sampler: SamplerKind, seed: u64) -> Result<()> {
    require_samples(samples)?;
    info!(sampler = sampler.name(), samples, seed, "collecting sample moments");

    let m = collect(sampler, samples, seed);
    println!("sampler  {}", sampler.name());
    println!("samples  {}", m.count());
    println!("mean     {:+.6}", m.mean());
    println!("variance {:.6}", m.variance());
    println!("min      {:+.6}", m.min());
    println!("max      {:+.6}", m.max());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moments_known_values() {
        let mut m = Moments::default();
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            m.push(x);
        }
        assert_eq!(m.count(), 8);
        assert_relative_eq!(m.mean(), 5.0);
        assert_relative_eq!(m.variance(), 4.0);
        assert_eq!(m.min(), 2.0);
        assert_eq!(m.max(), 9.0);
    }

    #[test]
    fn test_single_value_has_no_variance() {
        let mut m = Moments::default();
        m.push(3.0);
        assert_eq!(m.variance(), 0.0);
    }

    #[test]
    fn test_both_samplers_standard() {
        for sampler in [SamplerKind::Ziggurat, SamplerKind::BoxMuller] {
            let m = collect(sampler, 200_000, 9);
            assert!(m.mean().abs() < 0.02, "{sampler:?} mean {}", m.mean());
            assert!((m.variance() - 1.0).abs() < 0.03, "{sampler:?} var {}", m.variance());
            assert!(m.min() < -3.0 && m.max() > 3.0);
        }
    }
}
