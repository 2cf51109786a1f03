//! Bin Ziggurat samples and print `x observed expected` per bin.
//!
//! Expected counts come from the normal CDF over each bin, so the two
//! columns should agree to within sampling noise.

use ziggurat_rs::{Ziggurat, normal_cdf};

const NV: usize = 10_000_000;
const NB: usize = 100;
const SIGMA: f64 = 1.0;

fn main() {
    let mut rng = Ziggurat::default();

    // Heap-allocated buffers
    let mut variate = vec![0.0f64; NV];
    let mut bin = vec![0usize; NB];

    for v in &mut variate {
        *v = rng.gaussian(SIGMA);
    }

    let (minv, maxv) = variate
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let binwidth = (maxv - minv) / NB as f64;

    for &v in &variate {
        let j = (((v - minv) / binwidth).floor() as usize).min(NB - 1);
        bin[j] += 1;
    }

    (0..NB).for_each(|i| {
        let x0 = minv + binwidth * i as f64;
        let x1 = x0 + binwidth;
        let expected = NV as f64 * (normal_cdf(x1, 0.0, SIGMA) - normal_cdf(x0, 0.0, SIGMA));
        println!("{:.6} {} {:.1}", x0 + 0.5 * binwidth, bin[i], expected);
    });
}
