//! Polar Box-Muller sampler, kept as a baseline for the Ziggurat.

use crate::source::UniformBitSource;

/// Draw one standard normal variate with the polar Box-Muller method.
///
/// Points are drawn uniformly in `[-1, 1)^2` until one lands strictly inside
/// the unit disk (and off the origin), which avoids the trigonometric form.
/// Only one of the pair of variates the transform yields is returned; nothing
/// is cached between calls.
pub fn gaussian<S: UniformBitSource + ?Sized>(source: &mut S) -> f64 {
    let mut x;
    let mut w;
    loop {
        x = 2.0 * source.next_f64() - 1.0;
        let y = 2.0 * source.next_f64() - 1.0;
        w = x * x + y * y;
        // w == 0 would put ln(0) into the transform.
        if w < 1.0 && w > 0.0 {
            break;
        }
    }
    x * ((-2.0 * w.ln()) / w).sqrt()
}
