use nalgebra::Vector2;
use num_rational::BigRational;
use num_traits::Signed;

use super::determinator::Orientation;
use super::{Conic, ConicSection};
use crate::error::{GeomError, GeomResult};
use crate::number::{rat, Radical};
use crate::plane::{Point, Segment};

/// Axis-aligned ellipse that is not a circle.
///
/// `a²` is the x half-axis square and `b²` the y one. The orientation names
/// the major axis, which carries the foci.
#[derive(Clone, Debug)]
pub struct Ellipse {
    conic: Conic,
    center: Point,
    a2: BigRational,
    b2: BigRational,
    orientation: Orientation,
}

impl Ellipse {
    pub fn new(
        x2: BigRational,
        y2: BigRational,
        x: BigRational,
        y: BigRational,
        k: BigRational,
    ) -> GeomResult<Self> {
        Self::try_from(Conic::new(x2, y2, x, y, k)?)
    }

    /// Locus where `|P - focus1| + |P - focus2| = distance`.
    pub fn by_definition(focus1: &Point, focus2: &Point, distance: &BigRational) -> GeomResult<Self> {
        if focus1 == focus2 {
            return Err(GeomError::invalid("focus points must be different"));
        }
        let focal_axis = Segment::new(focus1.clone(), focus2.clone())?;
        if focal_axis.is_inclined() {
            return Err(GeomError::invalid("focal axis must not be inclined"));
        }
        let focal2 = focal_axis.length().square().clone();
        if !distance.is_positive() || distance * distance <= focal2 {
            return Err(GeomError::invalid(
                "sum of distances must be greater than focal distance",
            ));
        }
        let c2 = focal2 / rat(4);
        let major2 = distance * distance / rat(4);
        let minor2 = &major2 - c2;
        let (a2, b2, orientation) = if focal_axis.is_horizontal() {
            (major2, minor2, Orientation::HorizontalTransverse)
        } else {
            (minor2, major2, Orientation::VerticalTransverse)
        };
        Self::build_by(&a2, &b2, &focal_axis.mid(), orientation)
    }

    pub fn by_axes(major_axis: &Segment, minor_axis: &Segment) -> GeomResult<Self> {
        if major_axis.is_inclined() || minor_axis.is_inclined() {
            return Err(GeomError::invalid("axes must not be inclined"));
        }
        if major_axis.is_horizontal() == minor_axis.is_horizontal() {
            return Err(GeomError::invalid("axes must be perpendicular"));
        }
        if major_axis.mid() != minor_axis.mid() {
            return Err(GeomError::invalid("axes must have the same mid point"));
        }
        if major_axis.length() <= minor_axis.length() {
            return Err(GeomError::invalid("major axis must be longer than minor axis"));
        }
        let major2 = major_axis.length().square() / rat(4);
        let minor2 = minor_axis.length().square() / rat(4);
        let (a2, b2, orientation) = if major_axis.is_horizontal() {
            (major2, minor2, Orientation::HorizontalTransverse)
        } else {
            (minor2, major2, Orientation::VerticalTransverse)
        };
        Self::build_by(&a2, &b2, &major_axis.mid(), orientation)
    }

    fn build_by(
        a2: &BigRational,
        b2: &BigRational,
        center: &Point,
        orientation: Orientation,
    ) -> GeomResult<Self> {
        let (xc, yc) = (&center.x, &center.y);
        let ellipse = Self::new(
            b2.clone(),
            a2.clone(),
            -(b2 * xc) * rat(2),
            -(a2 * yc) * rat(2),
            b2 * xc * xc + a2 * yc * yc - a2 * b2,
        )?;
        debug_assert_eq!(ellipse.orientation, orientation);
        Ok(ellipse)
    }

    /// Direction of the major axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn center(&self) -> &Point {
        &self.center
    }

    pub fn a2(&self) -> &BigRational {
        &self.a2
    }

    pub fn b2(&self) -> &BigRational {
        &self.b2
    }

    /// (major, minor) half-axis squares.
    fn semi_axes2(&self) -> (&BigRational, &BigRational) {
        match self.orientation {
            Orientation::HorizontalTransverse => (&self.a2, &self.b2),
            Orientation::VerticalTransverse => (&self.b2, &self.a2),
        }
    }

    pub fn c2(&self) -> BigRational {
        let (major2, minor2) = self.semi_axes2();
        major2 - minor2
    }

    pub fn a(&self) -> Radical {
        Radical::from_square_unchecked(self.a2.clone())
    }

    pub fn b(&self) -> Radical {
        Radical::from_square_unchecked(self.b2.clone())
    }

    pub fn c(&self) -> Radical {
        Radical::from_square_unchecked(self.c2())
    }

    fn major_semi_axis(&self) -> Radical {
        Radical::from_square_unchecked(self.semi_axes2().0.clone())
    }

    pub fn focus1(&self) -> Vector2<f64> {
        self.orientation
            .shift_approx(self.center.to_vec2(), self.c().to_f64())
    }

    pub fn focus2(&self) -> Vector2<f64> {
        self.orientation
            .shift_approx(self.center.to_vec2(), -self.c().to_f64())
    }

    pub fn exact_foci(&self) -> Option<[Point; 2]> {
        let c = self.c().exact()?;
        Some([
            self.orientation.shift(&self.center, &c),
            self.orientation.shift(&self.center, &-c),
        ])
    }

    /// Endpoints of the major axis, `[center - a, center + a]`.
    pub fn vertices(&self) -> [Vector2<f64>; 2] {
        let (c, d) = (self.center.to_vec2(), self.major_semi_axis().to_f64());
        [
            self.orientation.shift_approx(c, -d),
            self.orientation.shift_approx(c, d),
        ]
    }

    pub fn exact_vertices(&self) -> Option<[Point; 2]> {
        let d = self.major_semi_axis().exact()?;
        Some([
            self.orientation.shift(&self.center, &-d.clone()),
            self.orientation.shift(&self.center, &d),
        ])
    }

    /// Constant sum of focal distances: the major axis length.
    pub fn distance(&self) -> Radical {
        Radical::from_square_unchecked(self.semi_axes2().0 * rat(4))
    }

    pub fn major_axis_length(&self) -> Radical {
        self.distance()
    }

    pub fn minor_axis_length(&self) -> Radical {
        Radical::from_square_unchecked(self.semi_axes2().1 * rat(4))
    }

    pub fn focal_axis_length(&self) -> Radical {
        Radical::from_square_unchecked(self.c2() * rat(4))
    }

    /// Same eccentricity (shape only).
    pub fn is_congruent(&self, other: &Ellipse) -> bool {
        self.eccentricity() == other.eccentricity()
    }
}

impl TryFrom<Conic> for Ellipse {
    type Error = GeomError;

    fn try_from(conic: Conic) -> GeomResult<Self> {
        if !(conic.x2() * conic.y2()).is_positive() {
            return Err(GeomError::invalid(
                "invalid coefficients: x² and y² coefficients must share a sign",
            ));
        }
        if conic.x2() == conic.y2() {
            return Err(GeomError::invalid(
                "invalid coefficients: equal x² and y² coefficients describe a circle",
            ));
        }
        let d = conic.determine()?;
        // x2 is 1 after normalization, so the excess must be positive.
        if !d.excess.is_positive() {
            return Err(GeomError::invalid(
                "invalid coefficients: ellipse is empty or a single point",
            ));
        }
        let orientation = if d.x_half_axis_squared > d.y_half_axis_squared {
            Orientation::HorizontalTransverse
        } else {
            Orientation::VerticalTransverse
        };
        Ok(Self {
            center: d.center,
            a2: d.x_half_axis_squared,
            b2: d.y_half_axis_squared,
            orientation,
            conic,
        })
    }
}

impl ConicSection for Ellipse {
    fn conic(&self) -> &Conic {
        &self.conic
    }

    /// Focal distance over major axis.
    fn eccentricity(&self) -> Radical {
        Radical::from_square_unchecked(self.c2() / self.semi_axes2().0)
    }
}

/// Same foci and same distance sum.
impl PartialEq for Ellipse {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.center == other.center
            && self.c2() == other.c2()
            && self.distance() == other.distance()
    }
}

impl Eq for Ellipse {}
