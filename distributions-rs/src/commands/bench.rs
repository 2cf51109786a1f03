//! Wall-clock comparison of the two samplers.

use std::{
    hint::black_box,
    time::{Duration, Instant},
};
use tracing::info;
use ziggurat_rs::{RngSource, tables};

use super::{SamplerKind, require_samples};
use crate::error::Result;

/// Time taken by one sampler to produce a fixed number of variates.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub sampler: SamplerKind,
    pub samples: usize,
    pub elapsed: Duration,
}

impl Timing {
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn nanos_per_sample(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e9 / self.samples as f64
    }
}

/// Draw `samples` variates from a freshly seeded source and time it.
pub fn time_sampler(sampler: SamplerKind, samples: usize, seed: u64) -> Timing {
    let mut source = RngSource::from_seed(seed);
    let start = Instant::now();
    for _ in 0..samples {
        black_box(sampler.sample(&mut source));
    }
    Timing {
        sampler,
        samples,
        elapsed: start.elapsed(),
    }
}

pub fn run(samples: usize, seed: u64) -> Result<()> {
    require_samples(samples)?;
    // Keep table construction out of the Ziggurat timing.
    tables::init();
    info!(samples, seed, "benchmarking samplers");

    let box_muller = time_sampler(SamplerKind::BoxMuller, samples, seed);
    let ziggurat = time_sampler(SamplerKind::Ziggurat, samples, seed);

    for t in [&box_muller, &ziggurat] {
        println!(
            "{:<10} {:>12.3} ms {:>8.2} ns/sample",
            t.sampler.name(),
            t.millis(),
            t.nanos_per_sample()
        );
    }
    if ziggurat.elapsed > Duration::ZERO {
        println!(
            "speed-up   {:>12.2}x",
            box_muller.elapsed.as_secs_f64() / ziggurat.elapsed.as_secs_f64()
        );
    }
    Ok(())
}
