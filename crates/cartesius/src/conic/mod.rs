//! Conic sections over exact coefficients.
//!
//! Purpose
//! - Represent every degree-2 curve as one normalized coefficient tuple
//!   (`Conic`), so two constructions of the same curve store the same tuple.
//! - Let each variant (`Circle`, `Ellipse`, `Hyperbola`, `Parabola`) offer
//!   geometric constructors that only compute implicit coefficients and then
//!   funnel through `TryFrom<Conic>`, the one place where invariants are checked.
//!
//! Layout
//! - `determinator`: center / determinant value / orientation, shared by all.
//! - one file per variant; shared behavior lives on the `ConicSection` trait.

pub mod determinator;

mod circle;
mod ellipse;
mod hyperbola;
mod parabola;

pub use circle::Circle;
pub use determinator::Orientation;
pub use ellipse::Ellipse;
pub use hyperbola::Hyperbola;
pub use parabola::Parabola;

use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::{GeomError, GeomResult};
use crate::number::{format_equation, normalize, Radical};
use crate::plane::Point;

/// Normalized `x2·x² + y2·y² + x·x + y·y + k = 0`.
///
/// Invariants:
/// - The first non-zero coefficient is `1`.
/// - `x2` and `y2` are not both zero (the equation has degree 2).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Conic {
    x2: BigRational,
    y2: BigRational,
    x: BigRational,
    y: BigRational,
    k: BigRational,
}

impl Conic {
    pub fn new(
        x2: BigRational,
        y2: BigRational,
        x: BigRational,
        y: BigRational,
        k: BigRational,
    ) -> GeomResult<Self> {
        if x2.is_zero() && y2.is_zero() {
            return Err(GeomError::invalid(
                "invalid coefficients: x² and y² coefficients are both zero",
            ));
        }
        let [x2, y2, x, y, k] = normalize([x2, y2, x, y, k])?;
        Ok(Self { x2, y2, x, y, k })
    }

    /// Caller guarantees the tuple is already normalized.
    pub(crate) fn from_canonical(coeffs: [BigRational; 5]) -> Self {
        debug_assert!(
            coeffs.iter().find(|c| !c.is_zero()).is_some_and(|c| c.is_one()),
            "tuple is not normalized"
        );
        let [x2, y2, x, y, k] = coeffs;
        Self { x2, y2, x, y, k }
    }

    pub fn x2(&self) -> &BigRational {
        &self.x2
    }

    pub fn y2(&self) -> &BigRational {
        &self.y2
    }

    pub fn x(&self) -> &BigRational {
        &self.x
    }

    pub fn y(&self) -> &BigRational {
        &self.y
    }

    pub fn k(&self) -> &BigRational {
        &self.k
    }

    /// `[x2, y2, x, y, k]`.
    pub fn coefficients(&self) -> [&BigRational; 5] {
        [&self.x2, &self.y2, &self.x, &self.y, &self.k]
    }

    pub(crate) fn determine(&self) -> GeomResult<determinator::Determination> {
        determinator::determine(&self.x2, &self.y2, &self.x, &self.y, &self.k)
    }

    /// Left-hand side evaluated at `p`.
    pub fn evaluate(&self, p: &Point) -> BigRational {
        &self.x2 * &p.x * &p.x + &self.y2 * &p.y * &p.y + &self.x * &p.x + &self.y * &p.y
            + &self.k
    }

    pub fn to_equation(&self) -> String {
        format_equation(&[
            ("x^2", &self.x2),
            ("y^2", &self.y2),
            ("x", &self.x),
            ("y", &self.y),
            ("", &self.k),
        ])
    }
}

/// Behavior shared by every conic variant.
pub trait ConicSection {
    /// The normalized coefficient tuple.
    fn conic(&self) -> &Conic;

    fn eccentricity(&self) -> Radical;

    fn to_equation(&self) -> String {
        self.conic().to_equation()
    }

    /// Exact membership: the equation holds at `p`.
    fn contains(&self, p: &Point) -> bool {
        self.conic().evaluate(p).is_zero()
    }
}
