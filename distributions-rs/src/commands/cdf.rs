//! Normal CDF over a grid, the data behind a cumulative curve plot.

use ziggurat_rs::normal_cdf;

use crate::error::{CliError, Result};

/// Most points a single grid may hold.
pub const MAX_POINTS: usize = 1_000_000;

/// Evenly spaced points from `from` up to and including `to` (within half a
/// step), each paired with the CDF of `N(mean, sd^2)`.
pub fn grid(from: f64, to: f64, step: f64, mean: f64, sd: f64) -> Result<Vec<(f64, f64)>> {
    if !from.is_finite() || !to.is_finite() || from > to {
        return Err(CliError::invalid("from", format!("need finite from <= to, got {from} and {to}")));
    }
    if !(step > 0.0 && step.is_finite()) {
        return Err(CliError::invalid("step", format!("must be positive, got {step}")));
    }
    if !(sd > 0.0 && sd.is_finite()) {
        return Err(CliError::invalid("sd", format!("must be positive, got {sd}")));
    }
    if !mean.is_finite() {
        return Err(CliError::invalid("mean", format!("must be finite, got {mean}")));
    }

    let span = ((to - from) / step + 0.5).floor();
    if !(span < MAX_POINTS as f64) {
        return Err(CliError::invalid(
            "step",
            format!("grid from {from} to {to} by {step} exceeds {MAX_POINTS} points"),
        ));
    }
    let steps = span as usize;
    Ok((0..=steps)
        .map(|i| {
            let x = from + i as f64 * step;
            (x, normal_cdf(x, mean, sd))
        })
        .collect())
}

pub fn run(from: f64, to: f64, step: f64, mean: f64, sd: f64) -> Result<()> {
    for (x, p) in grid(from, to, step, mean, sd)? {
        println!("{x:>8.3} {p:.7}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_grid() {
        let points = grid(-3.0, 3.0, 1.0, 0.0, 1.0).unwrap();
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].0, -3.0);
        assert_eq!(points[6].0, 3.0);
        assert_abs_diff_eq!(points[3].1, 0.5, epsilon = 1e-8);
        assert_abs_diff_eq!(points[0].1 + points[6].1, 1.0, epsilon = 1e-8);
        assert!(points.windows(2).all(|w| w[1].1 > w[0].1));
    }

    #[test]
    fn test_single_point() {
        let points = grid(1.0, 1.0, 0.5, 0.0, 1.0).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_rejects_oversized_grid() {
        assert!(matches!(
            grid(-1e300, 1e300, 1e-300, 0.0, 1.0),
            Err(CliError::InvalidArgument { name: "step", .. })
        ));
        assert!(grid(-3.0, 3.0, 1e-9, 0.0, 1.0).is_err());
        let largest = grid(0.0, (MAX_POINTS - 1) as f64, 1.0, 0.0, 1.0).unwrap();
        assert_eq!(largest.len(), MAX_POINTS);
        assert!(grid(0.0, MAX_POINTS as f64, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(grid(1.0, -1.0, 1.0, 0.0, 1.0).is_err());
        assert!(grid(-1.0, 1.0, 0.0, 0.0, 1.0).is_err());
        assert!(grid(-1.0, 1.0, 1.0, 0.0, 0.0).is_err());
        assert!(grid(-1.0, 1.0, 1.0, f64::NAN, 1.0).is_err());
        assert!(grid(f64::NEG_INFINITY, 1.0, 1.0, 0.0, 1.0).is_err());
    }
}
