//! Straight line `a·x + b·y + k = 0` with exact coefficients.
//!
//! Coefficients are a non-unique representation, so equality is defined on
//! the induced line (slope + known term), never on raw `(a, b, k)`. The stored
//! coefficients are kept as given and drive `to_equation`.

use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::point::Point;
use crate::error::{GeomError, GeomResult};
use crate::number::{format_equation, rat};

/// Slope of a line; vertical lines have no finite slope.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slope {
    Finite(BigRational),
    Vertical,
}

#[derive(Clone, Debug)]
pub struct Line {
    x: BigRational,
    y: BigRational,
    k: BigRational,
}

impl Line {
    /// `x·X + y·Y + k = 0`; rejects `x = y = 0`.
    pub fn new(x: BigRational, y: BigRational, k: BigRational) -> GeomResult<Self> {
        if x.is_zero() && y.is_zero() {
            return Err(GeomError::invalid("line coefficients of x and y are both zero"));
        }
        Ok(Self { x, y, k })
    }

    /// `y = slope·x + known_term`.
    pub fn create(slope: BigRational, known_term: BigRational) -> Self {
        Self {
            x: -slope,
            y: BigRational::one(),
            k: -known_term,
        }
    }

    /// `y = known_term`.
    pub fn horizontal(known_term: BigRational) -> Self {
        Self {
            x: BigRational::zero(),
            y: BigRational::one(),
            k: -known_term,
        }
    }

    /// `x = known_term`.
    pub fn vertical(known_term: BigRational) -> Self {
        Self {
            x: BigRational::one(),
            y: BigRational::zero(),
            k: -known_term,
        }
    }

    /// Line through two distinct points.
    pub fn by_points(p1: &Point, p2: &Point) -> GeomResult<Self> {
        if p1 == p2 {
            return Err(GeomError::invalid("points must be different"));
        }
        if p1.is_aligned_horizontally_with(p2) {
            return Ok(Self::horizontal(p1.y.clone()));
        }
        if p1.is_aligned_vertically_with(p2) {
            return Ok(Self::vertical(p1.x.clone()));
        }
        let slope = (&p2.y - &p1.y) / (&p2.x - &p1.x);
        let known_term = &p1.y - &slope * &p1.x;
        Ok(Self::create(slope, known_term))
    }

    pub fn x_axis() -> Self {
        Self::horizontal(BigRational::zero())
    }

    pub fn y_axis() -> Self {
        Self::vertical(BigRational::zero())
    }

    /// `y = x`.
    pub fn ascending_bisector() -> Self {
        Self {
            x: rat(-1),
            y: rat(1),
            k: rat(0),
        }
    }

    /// `y = -x`.
    pub fn descending_bisector() -> Self {
        Self {
            x: rat(1),
            y: rat(1),
            k: rat(0),
        }
    }

    /// Raw `(a, b, k)` as stored.
    pub fn coefficients(&self) -> (&BigRational, &BigRational, &BigRational) {
        (&self.x, &self.y, &self.k)
    }

    pub fn slope(&self) -> Slope {
        if self.y.is_zero() {
            Slope::Vertical
        } else {
            Slope::Finite(-&self.x / &self.y)
        }
    }

    /// Intercept constant: `q` in `y = m·x + q`, or `x = q` for vertical lines.
    pub fn known_term(&self) -> BigRational {
        if self.y.is_zero() {
            -&self.k / &self.x
        } else {
            -&self.k / &self.y
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.x.is_zero()
    }

    pub fn is_vertical(&self) -> bool {
        self.y.is_zero()
    }

    pub fn is_inclined(&self) -> bool {
        !self.is_horizontal() && !self.is_vertical()
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self.slope(), Slope::Finite(m) if m.is_positive())
    }

    /// Negative finite slope. A vertical line is neither ascending nor descending.
    pub fn is_descending(&self) -> bool {
        matches!(self.slope(), Slope::Finite(m) if m.is_negative())
    }

    pub fn is_x_axis(&self) -> bool {
        *self == Self::x_axis()
    }

    pub fn is_y_axis(&self) -> bool {
        *self == Self::y_axis()
    }

    pub fn is_ascending_bisector(&self) -> bool {
        *self == Self::ascending_bisector()
    }

    pub fn is_descending_bisector(&self) -> bool {
        *self == Self::descending_bisector()
    }

    pub fn is_parallel(&self, other: &Line) -> bool {
        self.slope() == other.slope()
    }

    pub fn is_perpendicular(&self, other: &Line) -> bool {
        match (self.slope(), other.slope()) {
            (Slope::Finite(m), Slope::Vertical) | (Slope::Vertical, Slope::Finite(m)) => {
                m.is_zero()
            }
            (Slope::Finite(m1), Slope::Finite(m2)) => m1 * m2 == rat(-1),
            (Slope::Vertical, Slope::Vertical) => false,
        }
    }

    pub fn contains(&self, p: &Point) -> bool {
        match self.slope() {
            Slope::Vertical => self.known_term() == p.x,
            Slope::Finite(m) => p.y == m * &p.x + self.known_term(),
        }
    }

    /// `None` when the line never meets the x axis at a single point.
    pub fn x_intercept(&self) -> Option<BigRational> {
        (!self.x.is_zero()).then(|| -&self.k / &self.x)
    }

    /// `None` when the line never meets the y axis at a single point.
    pub fn y_intercept(&self) -> Option<BigRational> {
        (!self.y.is_zero()).then(|| -&self.k / &self.y)
    }

    pub fn to_equation(&self) -> String {
        format_equation(&[("x", &self.x), ("y", &self.y), ("", &self.k)])
    }

    /// Always true: any two lines count as congruent.
    ///
    /// This relation is trivial on purpose and does not look at slopes. It is
    /// suspicious as a geometric notion and kept as-is for compatibility;
    /// callers wanting a stronger relation should compare `slope()` directly.
    pub fn is_congruent(&self, _other: &Line) -> bool {
        true
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.slope() == other.slope() && self.known_term() == other.known_term()
    }
}

impl Eq for Line {}
