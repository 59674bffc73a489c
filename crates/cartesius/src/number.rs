//! Exact-number helpers: rational construction, canonical scaling, the
//! `Radical` length type and the equation formatter.
//!
//! Exactness boundary
//! - Coefficients, coordinates and squared lengths are `BigRational`.
//! - A length is a `Radical`: it is stored as its exact square and only turns
//!   into an `f64` at the leaf (`Radical::to_f64`). Floats never flow back
//!   into coefficient arithmetic.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::cfg::MAX_DECIMALS;
use crate::error::{GeomError, GeomResult};

/// Integer as an exact rational.
#[inline]
pub fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// `n/d` as an exact rational. Panics on `d == 0`; meant for literals.
#[inline]
pub fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Parse `"3"`, `"-3/4"` or `"0.25"` into an exact rational.
pub fn parse_rational(input: &str) -> GeomResult<BigRational> {
    let text = input.trim();
    let err = || GeomError::InvalidNumber {
        input: input.to_string(),
    };
    // The BigInt parser accepts digit separators; plain decimals do not.
    if text.contains('_') {
        return Err(err());
    }
    if let Some((int, frac)) = text.split_once('.') {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let digits = format!("{int}{frac}");
        let numer: BigInt = digits.parse().map_err(|_| err())?;
        let denom = num_traits::pow(BigInt::from(10), frac.len());
        return Ok(BigRational::new(numer, denom));
    }
    text.parse::<BigRational>().map_err(|_| err())
}

/// Scale a coefficient tuple so its first non-zero entry is `1`.
///
/// Two tuples describing the same curve differ only by a non-zero factor, so
/// after this step they are identical. An all-zero tuple describes no curve.
pub fn normalize<const N: usize>(coeffs: [BigRational; N]) -> GeomResult<[BigRational; N]> {
    let lead = coeffs
        .iter()
        .find(|c| !c.is_zero())
        .cloned()
        .ok_or_else(|| GeomError::invalid("all coefficients are zero"))?;
    Ok(coeffs.map(|c| c / &lead))
}

/// Render `coeff·label` terms as `+2x -1y +1 = 0`.
///
/// Zero terms are dropped and the signs flipped when the first kept term is
/// negative. The constant term uses an empty label.
pub fn format_equation(terms: &[(&str, &BigRational)]) -> String {
    let kept: Vec<&(&str, &BigRational)> = terms.iter().filter(|(_, c)| !c.is_zero()).collect();
    let Some(first) = kept.first() else {
        return "0 = 0".to_string();
    };
    let flip = first.1.is_negative();
    let mut parts: Vec<String> = kept
        .iter()
        .map(|(label, c)| {
            let value = if flip { -(*c).clone() } else { (*c).clone() };
            monomial(&value, label)
        })
        .collect();
    parts.push("= 0".to_string());
    parts.join(" ")
}

fn monomial(value: &BigRational, label: &str) -> String {
    let sign = if value.is_negative() { '-' } else { '+' };
    let magnitude = value.abs();
    if magnitude.denom().is_one() {
        format!("{sign}{}{label}", magnitude.numer())
    } else {
        format!("{sign}({magnitude}){label}")
    }
}

/// Exact square root, when `q` is the square of a rational.
pub fn sqrt_exact(q: &BigRational) -> Option<BigRational> {
    if q.is_negative() {
        return None;
    }
    let n = q.numer().sqrt();
    let d = q.denom().sqrt();
    if &(&n * &n) == q.numer() && &(&d * &d) == q.denom() {
        Some(BigRational::new(n, d))
    } else {
        None
    }
}

/// Lossy conversion for leaf computations.
#[inline]
pub fn to_f64(q: &BigRational) -> f64 {
    q.to_f64().unwrap_or(f64::NAN)
}

/// Round to a fixed number of decimal places, at most [`MAX_DECIMALS`].
///
/// Values too large to scale are returned unchanged.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

/// Non-negative real number known exactly through its square.
///
/// Invariants:
/// - `square >= 0`.
/// - Equality and ordering compare squares, so they are exact.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radical {
    square: BigRational,
}

impl Radical {
    /// `√square`; `None` for negative input.
    pub fn from_square(square: BigRational) -> Option<Self> {
        if square.is_negative() {
            None
        } else {
            Some(Self { square })
        }
    }

    pub fn zero() -> Self {
        Self {
            square: BigRational::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            square: BigRational::one(),
        }
    }

    /// Caller guarantees `square >= 0`.
    pub(crate) fn from_square_unchecked(square: BigRational) -> Self {
        debug_assert!(!square.is_negative(), "radical of a negative square");
        Self { square }
    }

    #[inline]
    pub fn square(&self) -> &BigRational {
        &self.square
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.square.is_zero()
    }

    /// The root itself when it is rational.
    pub fn exact(&self) -> Option<BigRational> {
        sqrt_exact(&self.square)
    }

    /// Approximate value (leaf only).
    pub fn to_f64(&self) -> f64 {
        to_f64(&self.square).sqrt()
    }
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exact() {
            Some(root) => write!(f, "{root}"),
            None => write!(f, "√({})", self.square),
        }
    }
}
