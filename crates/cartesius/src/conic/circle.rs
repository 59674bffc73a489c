use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::{Conic, ConicSection};
use crate::error::{GeomError, GeomResult};
use crate::number::{rat, Radical};
use crate::plane::{Point, Segment};
use crate::solvers::solve3;

/// Circle `x² + y² + x·x + y·y + k = 0`.
#[derive(Clone, Debug)]
pub struct Circle {
    conic: Conic,
    center: Point,
    radius2: BigRational,
}

impl Circle {
    /// From the linear and constant coefficients of the monic equation.
    pub fn new(x: BigRational, y: BigRational, k: BigRational) -> GeomResult<Self> {
        Self::try_from(Conic::new(rat(1), rat(1), x, y, k)?)
    }

    pub fn by_definition(center: &Point, radius: &BigRational) -> GeomResult<Self> {
        if !radius.is_positive() {
            return Err(GeomError::invalid("radius must be positive"));
        }
        Self::build_by(center, &(radius * radius))
    }

    /// Circle with `diameter` as a diameter. Exact: r² = length² / 4.
    pub fn by_diameter(diameter: &Segment) -> GeomResult<Self> {
        let radius2 = diameter.length().square() / rat(4);
        Self::build_by(&diameter.mid(), &radius2)
    }

    /// Circle through three non-collinear points.
    pub fn by_three_points(p1: &Point, p2: &Point, p3: &Point) -> GeomResult<Self> {
        let row = |p: &Point| [p.x.clone(), p.y.clone(), rat(1)];
        let rhs = |p: &Point| -(&p.x * &p.x + &p.y * &p.y);
        let [alpha, beta, gamma] = solve3(
            &row(p1),
            &row(p2),
            &row(p3),
            &[rhs(p1), rhs(p2), rhs(p3)],
        )
        .map_err(|e| e.into_invalid("invalid points: no circle passes through them"))?;
        Self::new(alpha, beta, gamma)
    }

    /// Unit circle centered at the origin.
    pub fn unit() -> Self {
        let (zero, one) = (BigRational::zero(), BigRational::one());
        Self {
            conic: Conic::from_canonical([
                one.clone(),
                one.clone(),
                zero.clone(),
                zero.clone(),
                -one.clone(),
            ]),
            center: Point::origin(),
            radius2: one,
        }
    }

    pub fn is_unit(&self) -> bool {
        *self == Self::unit()
    }

    fn build_by(center: &Point, radius2: &BigRational) -> GeomResult<Self> {
        Self::new(
            -&center.x * rat(2),
            -&center.y * rat(2),
            &center.x * &center.x + &center.y * &center.y - radius2,
        )
    }

    pub fn center(&self) -> &Point {
        &self.center
    }

    pub fn radius(&self) -> Radical {
        Radical::from_square_unchecked(self.radius2.clone())
    }

    /// Same radius, any center.
    pub fn is_congruent(&self, other: &Circle) -> bool {
        self.radius2 == other.radius2
    }
}

impl TryFrom<Conic> for Circle {
    type Error = GeomError;

    fn try_from(conic: Conic) -> GeomResult<Self> {
        if conic.x2() != conic.y2() {
            return Err(GeomError::invalid(
                "invalid coefficients: x² and y² coefficients differ",
            ));
        }
        let d = conic.determine()?;
        if !d.excess.is_positive() {
            return Err(GeomError::invalid(
                "invalid coefficients: circle has no positive radius",
            ));
        }
        Ok(Self {
            center: d.center,
            radius2: d.x_half_axis_squared,
            conic,
        })
    }
}

impl ConicSection for Circle {
    fn conic(&self) -> &Conic {
        &self.conic
    }

    fn eccentricity(&self) -> Radical {
        Radical::zero()
    }
}

/// Same center and radius.
impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius2 == other.radius2
    }
}

impl Eq for Circle {}
