//! Constants for the Ziggurat algorithm

/// Number of blocks the area under the right half of the density is cut into.
pub const BLOCK_COUNT: usize = 128;

/// Right hand edge of the base rectangle, which is also the start of the tail
/// (pre-computed for 128 blocks).
pub const ZIGGURAT_NOR_R: f64 = 3.442619855899;

/// Area of every block (pre-computed for 128 blocks).
pub const NOR_SECTION_AREA: f64 = 9.91256303526217e-3;

/// Largest value of the 53 bits left over once the block index and sign have
/// been taken out of a 64-bit word, i.e. 2^53 - 1.
pub const MAXINT: u64 = (1 << 53) - 1;

/// Scale from `[0, MAXINT]` onto `[0, 1]`.
pub const INCR: f64 = 1.0 / MAXINT as f64;

/// Bits of each word discarded before the block index is read.
pub(crate) const DISCARD_BITS: u32 = 3;

/// Mask for the 7-bit block index.
pub(crate) const BLOCK_MASK: u64 = 0x7f;

/// Bit 10 carries the sign of the sample.
pub(crate) const SIGN_BIT: u64 = 0x400;

/// Everything below bit 11 has been spent on the discard, block and sign.
pub(crate) const FRACTION_SHIFT: u32 = 11;

/// Largest tolerated drift of the topmost block's upper edge away from 1.0.
pub const TOP_EDGE_TOLERANCE: f64 = 1e-10;
