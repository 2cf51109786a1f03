//! Table construction errors.
//!
//! None of these can happen with the built-in constants. They exist so a
//! broken table is reported with the offending entry rather than showing up
//! later as a skewed sample distribution.

use thiserror::Error;

/// A Ziggurat table failed one of its construction invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// An entry is NaN or infinite.
    #[error("table {table}[{index}] is not finite: {value}")]
    NonFinite {
        table: &'static str,
        index: usize,
        value: f64,
    },

    /// The right hand edges must never grow as the block index goes up.
    #[error("x[{index}] = {current} is greater than x[{previous_index}] = {previous}", previous_index = .index - 1)]
    RightEdgeIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// The top edges must strictly grow as the block index goes up.
    #[error("y[{index}] = {current} does not exceed y[{previous_index}] = {previous}", previous_index = .index - 1)]
    TopEdgeNotIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// The blocks do not stack up to the peak of the density.
    #[error("topmost block ends at y = {top}, {drift:e} away from 1.0 (tolerance {tolerance:e})")]
    TopEdgeDrift { top: f64, drift: f64, tolerance: f64 },

    /// The topmost block has no area entirely under the curve.
    #[error("x_comp[{index}] must be 0 for the topmost block, got {value}")]
    TopThresholdNonZero { index: usize, value: u64 },
}
