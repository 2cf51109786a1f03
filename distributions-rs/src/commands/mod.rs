//! Subcommand implementations.

pub mod bench;
pub mod cdf;
pub mod check;
pub mod stats;

use clap::ValueEnum;
use ziggurat_rs::{UniformBitSource, sample_standard_normal, sample_standard_normal_box_muller};

use crate::error::{CliError, Result};

/// Which standard normal sampler to drive.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplerKind {
    Ziggurat,
    BoxMuller,
}

impl SamplerKind {
    #[inline]
    pub fn sample<S: UniformBitSource>(self, source: &mut S) -> f64 {
        match self {
            Self::Ziggurat => sample_standard_normal(source),
            Self::BoxMuller => sample_standard_normal_box_muller(source),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ziggurat => "ziggurat",
            Self::BoxMuller => "box-muller",
        }
    }
}

pub(crate) fn require_samples(samples: usize) -> Result<()> {
    if samples == 0 {
        return Err(CliError::invalid("samples", "must be at least 1"));
    }
    Ok(())
}
