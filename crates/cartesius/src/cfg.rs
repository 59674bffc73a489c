//! Rounding configuration for float-derived classifications.
//!
//! Policy
//! - Everything decidable in exact arithmetic is decided exactly and ignores
//!   this configuration.
//! - Side lengths are irrational in general; comparing them for the
//!   equilateral/isosceles/scalene split goes through `f64` and needs a fixed
//!   rounding precision to absorb noise from the sqrt chain.

/// Default number of decimal places used when comparing side lengths.
pub const SIDE_DECIMALS: u32 = 3;

/// Most decimal places an `f64` can resolve; larger precisions are clamped to it.
pub const MAX_DECIMALS: u32 = f64::DIGITS + 2;

/// Classification configuration (rounding precision).
///
/// `side_decimals` directly sets the equilateral/isosceles/scalene
/// boundaries: two sides count as equal when their lengths agree after
/// rounding to that many decimals. Values above [`MAX_DECIMALS`] behave
/// like `MAX_DECIMALS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeomCfg {
    pub side_decimals: u32,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            side_decimals: SIDE_DECIMALS,
        }
    }
}
