//! Ziggurat block tables for the standard normal distribution.
//!
//! The area under the right half of the (unnormalised) density `e^(-x^2/2)`
//! is cut into [`BLOCK_COUNT`] horizontal blocks of equal area
//! [`NOR_SECTION_AREA`]. Block 0 is the base rectangle plus the whole tail
//! beyond [`ZIGGURAT_NOR_R`].
//!
//! The tables are built once per process behind a [`LazyLock`] and never
//! written again. Any thread that reads them through [`get`] observes the
//! fully built tables: the lock's one-time initialisation happens-before
//! every access that returns from it. Call [`init`] to pay the construction
//! cost up front instead of on the first sample.

use crate::{
    constants::{BLOCK_COUNT, MAXINT, NOR_SECTION_AREA, TOP_EDGE_TOLERANCE, ZIGGURAT_NOR_R},
    error::TableError,
};
use std::sync::LazyLock;

static TABLES: LazyLock<ZigguratTables> = LazyLock::new(|| {
    let tables = ZigguratTables::build();
    let check = tables.validate();
    match &check {
        Ok(()) => tracing::debug!(
            blocks = BLOCK_COUNT,
            top_edge = tables.y[BLOCK_COUNT - 1],
            "ziggurat tables built"
        ),
        Err(err) => tracing::error!(%err, "ziggurat tables are inconsistent"),
    }
    debug_assert!(check.is_ok(), "ziggurat tables are inconsistent: {check:?}");
    tables
});

/// Process-wide tables, built on first access.
#[inline]
pub fn get() -> &'static ZigguratTables {
    &TABLES
}

/// Build the tables now rather than on the first sample.
pub fn init() {
    LazyLock::force(&TABLES);
}

/// Gaussian density without its normalising constant, `e^(-x^2/2)`.
#[inline]
pub(crate) fn gaussian_pdf_denorm(x: f64) -> f64 {
    (-(x * x / 2.0)).exp()
}

/// Inverse of [`gaussian_pdf_denorm`] over `(0, 1]`.
#[inline]
pub(crate) fn gaussian_pdf_denorm_inv(y: f64) -> f64 {
    (-2.0 * y.ln()).sqrt()
}

/// Scale a proportion in `[0, 1]` onto the 53-bit integer range.
#[inline]
fn scale_to_maxint(proportion: f64) -> u64 {
    (proportion * MAXINT as f64).round() as u64
}

/// Block geometry. `x[i]` and `y[i]` are the top right corner of block `i`.
#[derive(Clone, Debug)]
pub struct ZigguratTables {
    /// Right hand edges. `x[BLOCK_COUNT]` is a zero-width sentinel so the
    /// topmost block needs no special case.
    pub x: [f64; BLOCK_COUNT + 1],
    /// Top edges.
    pub y: [f64; BLOCK_COUNT],
    /// Share of each block lying entirely under the curve, scaled to
    /// `[0, MAXINT]`. For block 0 this is the share of the rectangle in the
    /// rectangle-plus-tail segment.
    pub x_comp: [u64; BLOCK_COUNT],
    /// `A / y[0]`, the width the base rectangle would need to hold the whole
    /// segment area.
    pub a_div_y0: f64,
}

impl ZigguratTables {
    /// Compute every table from [`ZIGGURAT_NOR_R`] and [`NOR_SECTION_AREA`].
    pub fn build() -> Self {
        let mut x = [0.0f64; BLOCK_COUNT + 1];
        let mut y = [0.0f64; BLOCK_COUNT];
        let mut x_comp = [0u64; BLOCK_COUNT];

        // Block 1 shares its right hand edge with the base rectangle but is
        // shorter, since the base segment's area includes the tail.
        x[0] = ZIGGURAT_NOR_R;
        y[0] = gaussian_pdf_denorm(ZIGGURAT_NOR_R);
        x[1] = ZIGGURAT_NOR_R;
        y[1] = y[0] + NOR_SECTION_AREA / x[1];

        for i in 2..BLOCK_COUNT {
            x[i] = gaussian_pdf_denorm_inv(y[i - 1]);
            y[i] = y[i - 1] + NOR_SECTION_AREA / x[i];
        }
        x[BLOCK_COUNT] = 0.0;

        let a_div_y0 = NOR_SECTION_AREA / y[0];

        x_comp[0] = scale_to_maxint((ZIGGURAT_NOR_R * y[0]) / NOR_SECTION_AREA);
        for i in 1..BLOCK_COUNT - 1 {
            x_comp[i] = scale_to_maxint(x[i + 1] / x[i]);
        }
        x_comp[BLOCK_COUNT - 1] = 0;

        Self {
            x,
            y,
            x_comp,
            a_div_y0,
        }
    }

    /// Check the geometric invariants the sampler relies on.
    pub fn validate(&self) -> Result<(), TableError> {
        for (index, &value) in self.x.iter().enumerate() {
            if !value.is_finite() {
                return Err(TableError::NonFinite {
                    table: "x",
                    index,
                    value,
                });
            }
        }
        for (index, &value) in self.y.iter().enumerate() {
            if !value.is_finite() {
                return Err(TableError::NonFinite {
                    table: "y",
                    index,
                    value,
                });
            }
        }
        if !self.a_div_y0.is_finite() {
            return Err(TableError::NonFinite {
                table: "a_div_y0",
                index: 0,
                value: self.a_div_y0,
            });
        }

        for index in 1..=BLOCK_COUNT {
            let (previous, current) = (self.x[index - 1], self.x[index]);
            if current > previous {
                return Err(TableError::RightEdgeIncreasing {
                    index,
                    previous,
                    current,
                });
            }
        }
        for index in 1..BLOCK_COUNT {
            let (previous, current) = (self.y[index - 1], self.y[index]);
            if current <= previous {
                return Err(TableError::TopEdgeNotIncreasing {
                    index,
                    previous,
                    current,
                });
            }
        }

        let top = self.y[BLOCK_COUNT - 1];
        let drift = (1.0 - top).abs();
        if drift >= TOP_EDGE_TOLERANCE {
            return Err(TableError::TopEdgeDrift {
                top,
                drift,
                tolerance: TOP_EDGE_TOLERANCE,
            });
        }

        let value = self.x_comp[BLOCK_COUNT - 1];
        if value != 0 {
            return Err(TableError::TopThresholdNonZero {
                index: BLOCK_COUNT - 1,
                value,
            });
        }

        Ok(())
    }

    /// Distance of the topmost block's upper edge from the density's peak.
    #[inline]
    pub fn top_edge_drift(&self) -> f64 {
        (1.0 - self.y[BLOCK_COUNT - 1]).abs()
    }
}
