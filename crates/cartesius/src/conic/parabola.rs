use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::determinator::center_x;
use super::{Conic, ConicSection};
use crate::error::{GeomError, GeomResult};
use crate::number::{rat, Radical};
use crate::plane::{Line, Point};
use crate::solvers::solve3;

/// Parabola with vertical symmetry axis, `y = a·x² + b·x + c`.
///
/// Stored as the conic `a·x² + b·x - y + c = 0` (then normalized).
#[derive(Clone, Debug)]
pub struct Parabola {
    conic: Conic,
    a: BigRational,
    b: BigRational,
    c: BigRational,
    axis_x: BigRational,
}

impl Parabola {
    /// `y = a·x² + b·x + c`; `a = 0` is a line, not a parabola.
    pub fn new(a: BigRational, b: BigRational, c: BigRational) -> GeomResult<Self> {
        Self::try_from(Conic::new(a, BigRational::zero(), b, rat(-1), c)?)
    }

    /// Locus of points equidistant from `focus` and a horizontal `directrix`.
    pub fn by_definition(focus: &Point, directrix: &Line) -> GeomResult<Self> {
        if !directrix.is_horizontal() {
            return Err(GeomError::invalid("directrix must be horizontal"));
        }
        let d = directrix.known_term();
        let p = &focus.y - &d;
        if p.is_zero() {
            return Err(GeomError::invalid("focus must not lie on the directrix"));
        }
        // (x - h)² = 2p·(y - (f + d)/2)
        let h = &focus.x;
        let two_p = &p * rat(2);
        let a = two_p.recip();
        let b = -(h / &p);
        let c = h * h / &two_p + (&focus.y + &d) / rat(2);
        Self::new(a, b, c)
    }

    /// Parabola through three points with pairwise different abscissas.
    pub fn by_three_points(p1: &Point, p2: &Point, p3: &Point) -> GeomResult<Self> {
        let row = |p: &Point| [&p.x * &p.x, p.x.clone(), rat(1)];
        let [a, b, c] = solve3(
            &row(p1),
            &row(p2),
            &row(p3),
            &[p1.y.clone(), p2.y.clone(), p3.y.clone()],
        )
        .map_err(|e| e.into_invalid("invalid points: abscissas must be different"))?;
        if a.is_zero() {
            return Err(GeomError::invalid("invalid points: points are aligned"));
        }
        Self::new(a, b, c)
    }

    /// `y = x²`.
    pub fn unitary_convex() -> Self {
        Self::from_monic(BigRational::one())
    }

    /// `y = -x²`.
    pub fn unitary_concave() -> Self {
        Self::from_monic(-BigRational::one())
    }

    /// `y = a·x²` for `a = ±1`.
    fn from_monic(a: BigRational) -> Self {
        let zero = BigRational::zero;
        Self {
            conic: Conic::from_canonical([BigRational::one(), zero(), zero(), -a.recip(), zero()]),
            a,
            b: zero(),
            c: zero(),
            axis_x: zero(),
        }
    }

    pub fn is_unitary_convex(&self) -> bool {
        *self == Self::unitary_convex()
    }

    pub fn is_unitary_concave(&self) -> bool {
        *self == Self::unitary_concave()
    }

    /// `(a, b, c)` of `y = a·x² + b·x + c`.
    pub fn coefficients(&self) -> (&BigRational, &BigRational, &BigRational) {
        (&self.a, &self.b, &self.c)
    }

    /// `b² - 4ac`.
    fn discriminant(&self) -> BigRational {
        &self.b * &self.b - rat(4) * &self.a * &self.c
    }

    fn four_a(&self) -> BigRational {
        &self.a * rat(4)
    }

    pub fn vertex(&self) -> Point {
        Point::new(self.axis_x.clone(), -self.discriminant() / self.four_a())
    }

    pub fn focus(&self) -> Point {
        Point::new(
            self.axis_x.clone(),
            (rat(1) - self.discriminant()) / self.four_a(),
        )
    }

    pub fn directrix(&self) -> Line {
        Line::horizontal(-(rat(1) + self.discriminant()) / self.four_a())
    }

    pub fn symmetry_axis(&self) -> Line {
        Line::vertical(self.axis_x.clone())
    }

    /// Opens upward.
    pub fn is_convex(&self) -> bool {
        self.a.is_positive()
    }

    /// Opens downward.
    pub fn is_concave(&self) -> bool {
        self.a.is_negative()
    }

    /// Same opening `|a|`, any position or direction.
    pub fn is_congruent(&self, other: &Parabola) -> bool {
        self.a.abs() == other.a.abs()
    }
}

impl TryFrom<Conic> for Parabola {
    type Error = GeomError;

    fn try_from(conic: Conic) -> GeomResult<Self> {
        if !conic.y2().is_zero() || conic.y().is_zero() {
            return Err(GeomError::invalid(
                "invalid coefficients: not a parabola with vertical axis",
            ));
        }
        let axis_x = center_x(conic.x2(), conic.x())?;
        let solve_for_y = |coeff: &BigRational| -(coeff / conic.y());
        Ok(Self {
            a: solve_for_y(conic.x2()),
            b: solve_for_y(conic.x()),
            c: solve_for_y(conic.k()),
            axis_x,
            conic,
        })
    }
}

impl ConicSection for Parabola {
    fn conic(&self) -> &Conic {
        &self.conic
    }

    fn eccentricity(&self) -> Radical {
        Radical::one()
    }
}

/// Same focus and directrix.
impl PartialEq for Parabola {
    fn eq(&self, other: &Self) -> bool {
        self.focus() == other.focus() && self.directrix() == other.directrix()
    }
}

impl Eq for Parabola {}
