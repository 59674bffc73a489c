//! Hyperbola with axis-aligned transverse axis.
//!
//! Every orientation-dependent query goes through `Hyperbola::orientation`,
//! which is decided once at construction by `sign(value - k)`. `a²` is always
//! the x half-axis square and `b²` the y one, whatever the orientation.

use nalgebra::Vector2;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::determinator::Orientation;
use super::{Conic, ConicSection};
use crate::error::{GeomError, GeomResult};
use crate::number::{rat, Radical};
use crate::plane::{Line, Point, Segment};
use crate::solvers::solve2;

#[derive(Clone, Debug)]
pub struct Hyperbola {
    conic: Conic,
    center: Point,
    a2: BigRational,
    b2: BigRational,
    orientation: Orientation,
}

impl Hyperbola {
    pub fn new(
        x2: BigRational,
        y2: BigRational,
        x: BigRational,
        y: BigRational,
        k: BigRational,
    ) -> GeomResult<Self> {
        Self::try_from(Conic::new(x2, y2, x, y, k)?)
    }

    /// Locus where `| |P - focus1| - |P - focus2| | = distance`.
    pub fn by_definition(focus1: &Point, focus2: &Point, distance: &BigRational) -> GeomResult<Self> {
        if focus1 == focus2 {
            return Err(GeomError::invalid("focus points must be different"));
        }
        let focal_axis = Segment::new(focus1.clone(), focus2.clone())?;
        if focal_axis.is_inclined() {
            return Err(GeomError::invalid("focal axis must not be inclined"));
        }
        if !distance.is_positive() {
            return Err(GeomError::invalid("distance difference must be positive"));
        }
        let focal2 = focal_axis.length().square().clone();
        if distance * distance >= focal2 {
            return Err(GeomError::invalid(
                "difference between distances must be less than focal distance",
            ));
        }
        let c2 = &focal2 / rat(4);
        let half2 = distance * distance / rat(4);
        let (a2, b2, orientation) = if focal_axis.is_horizontal() {
            (half2.clone(), c2 - half2, Orientation::HorizontalTransverse)
        } else {
            (c2 - &half2, half2, Orientation::VerticalTransverse)
        };
        Self::build_by(&a2, &b2, &focal_axis.mid(), orientation)
    }

    /// From the transverse axis (through the vertices) and the other axis.
    pub fn by_axes(transverse_axis: &Segment, not_transverse_axis: &Segment) -> GeomResult<Self> {
        if transverse_axis == not_transverse_axis {
            return Err(GeomError::invalid("axes must be different"));
        }
        if transverse_axis.is_inclined() || not_transverse_axis.is_inclined() {
            return Err(GeomError::invalid("axes must not be inclined"));
        }
        if transverse_axis.is_horizontal() && not_transverse_axis.is_horizontal() {
            return Err(GeomError::invalid("axes can not be both horizontal"));
        }
        if transverse_axis.is_vertical() && not_transverse_axis.is_vertical() {
            return Err(GeomError::invalid("axes can not be both vertical"));
        }
        if transverse_axis.mid() != not_transverse_axis.mid() {
            return Err(GeomError::invalid("axes must have the same mid point"));
        }
        let t2 = transverse_axis.length().square() / rat(4);
        let n2 = not_transverse_axis.length().square() / rat(4);
        let (a2, b2, orientation) = if transverse_axis.is_horizontal() {
            (t2, n2, Orientation::HorizontalTransverse)
        } else {
            (n2, t2, Orientation::VerticalTransverse)
        };
        Self::build_by(&a2, &b2, &transverse_axis.mid(), orientation)
    }

    /// From the center, one vertex and any other point of the curve.
    pub fn by_center_vertex_point(center: &Point, vertex: &Point, point: &Point) -> GeomResult<Self> {
        if center == vertex || center == point || vertex == point {
            return Err(GeomError::invalid("points must be different"));
        }
        let semi_axis = Segment::new(center.clone(), vertex.clone())?;
        if semi_axis.is_inclined() {
            return Err(GeomError::invalid("vertex must be aligned with center"));
        }
        let (orientation, sign) = if semi_axis.is_horizontal() {
            (Orientation::HorizontalTransverse, rat(1))
        } else {
            (Orientation::VerticalTransverse, rat(-1))
        };
        let shift = |p: &Point| (&p.x - &center.x, &p.y - &center.y);
        let (vx, vy) = shift(vertex);
        let (px, py) = shift(point);
        // alpha = 1/a², beta = 1/b² in `alpha·X² - beta·Y² = ±1`.
        let [alpha, beta] = solve2(
            &[&vx * &vx, -(&vy * &vy)],
            &[&px * &px, -(&py * &py)],
            &[sign.clone(), sign],
        )
        .map_err(|e| e.into_invalid("center, vertex and point are not valid"))?;
        if !alpha.is_positive() || !beta.is_positive() {
            return Err(GeomError::invalid("center, vertex and point are not valid"));
        }
        Self::build_by(&alpha.recip(), &beta.recip(), center, orientation)
    }

    fn build_by(
        a2: &BigRational,
        b2: &BigRational,
        center: &Point,
        orientation: Orientation,
    ) -> GeomResult<Self> {
        let s = match orientation {
            Orientation::HorizontalTransverse => rat(1),
            Orientation::VerticalTransverse => rat(-1),
        };
        let (xc, yc) = (&center.x, &center.y);
        Self::new(
            b2.clone(),
            -a2.clone(),
            -(b2 * xc) * rat(2),
            a2 * yc * rat(2),
            b2 * xc * xc - a2 * yc * yc - s * a2 * b2,
        )
    }

    /// Direction of the transverse axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Square of the x half-axis.
    pub fn a2(&self) -> &BigRational {
        &self.a2
    }

    /// Square of the y half-axis.
    pub fn b2(&self) -> &BigRational {
        &self.b2
    }

    pub fn c2(&self) -> BigRational {
        &self.a2 + &self.b2
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

    /// (transverse, non-transverse) half-axis squares.
    fn semi_axes2(&self) -> (&BigRational, &BigRational) {
        match self.orientation {
            Orientation::HorizontalTransverse => (&self.a2, &self.b2),
            Orientation::VerticalTransverse => (&self.b2, &self.a2),
        }
    }

    /// `[center + offset, center - offset]` along `axis`, when the offset is rational.
    fn exact_pair(&self, axis: Orientation, offset: &Radical) -> Option<[Point; 2]> {
        let d = offset.exact()?;
        Some([axis.shift(&self.center, &d), axis.shift(&self.center, &-d)])
    }

    fn approx_pair(&self, axis: Orientation, offset: &Radical) -> [Vector2<f64>; 2] {
        let (c, d) = (self.center.to_vec2(), offset.to_f64());
        [axis.shift_approx(c, d), axis.shift_approx(c, -d)]
    }

    /// `center + c` along the transverse axis.
    pub fn focus1(&self) -> Vector2<f64> {
        self.approx_pair(self.orientation, &self.c())[0]
    }

    /// `center - c` along the transverse axis.
    pub fn focus2(&self) -> Vector2<f64> {
        self.approx_pair(self.orientation, &self.c())[1]
    }

    /// `[focus1, focus2]` when `c` is rational.
    pub fn exact_foci(&self) -> Option<[Point; 2]> {
        self.exact_pair(self.orientation, &self.c())
    }

    /// `[center - t, center + t]` along the transverse axis.
    pub fn vertices(&self) -> [Vector2<f64>; 2] {
        let t = Radical::from_square_unchecked(self.semi_axes2().0.clone());
        let [plus, minus] = self.approx_pair(self.orientation, &t);
        [minus, plus]
    }

    pub fn exact_vertices(&self) -> Option<[Point; 2]> {
        let t = Radical::from_square_unchecked(self.semi_axes2().0.clone());
        let [plus, minus] = self.exact_pair(self.orientation, &t)?;
        Some([minus, plus])
    }

    /// `2a` or `2b`: the constant difference of focal distances.
    pub fn distance(&self) -> Radical {
        Radical::from_square_unchecked(self.semi_axes2().0 * rat(4))
    }

    pub fn focal_axis_length(&self) -> Radical {
        Radical::from_square_unchecked(self.c2() * rat(4))
    }

    pub fn transverse_axis_length(&self) -> Radical {
        self.distance()
    }

    pub fn not_transverse_axis_length(&self) -> Radical {
        Radical::from_square_unchecked(self.semi_axes2().1 * rat(4))
    }

    pub fn focal_axis(&self) -> Option<Segment> {
        let [f1, f2] = self.exact_foci()?;
        Segment::new(f1, f2).ok()
    }

    pub fn transverse_axis(&self) -> Option<Segment> {
        let [v1, v2] = self.exact_vertices()?;
        Segment::new(v1, v2).ok()
    }

    pub fn not_transverse_axis(&self) -> Option<Segment> {
        let n = Radical::from_square_unchecked(self.semi_axes2().1.clone());
        let [plus, minus] = self.exact_pair(self.orientation.flipped(), &n)?;
        Segment::new(minus, plus).ok()
    }

    /// `b / a`.
    pub fn asymptote_slope(&self) -> Radical {
        Radical::from_square_unchecked(&self.b2 / &self.a2)
    }

    /// `[ascending, descending]` asymptotes through the center, when `b / a` is rational.
    pub fn asymptotes(&self) -> Option<[Line; 2]> {
        let m = self.asymptote_slope().exact()?;
        let (xc, yc) = (&self.center.x, &self.center.y);
        let ascending = Line::create(m.clone(), yc - xc * &m);
        let descending = Line::create(-m.clone(), yc + xc * &m);
        Some([ascending, descending])
    }

    /// `a² = b²`.
    pub fn is_equilateral(&self) -> bool {
        self.a2 == self.b2
    }

    /// Same eccentricity (shape only).
    pub fn is_congruent(&self, other: &Hyperbola) -> bool {
        self.eccentricity() == other.eccentricity()
    }
}

impl TryFrom<Conic> for Hyperbola {
    type Error = GeomError;

    fn try_from(conic: Conic) -> GeomResult<Self> {
        let product = conic.x2() * conic.y2();
        if !product.is_negative() {
            return Err(GeomError::invalid(
                "invalid coefficients: x² and y² coefficients must have opposite signs",
            ));
        }
        let d = conic.determine()?;
        let orientation = Orientation::from_excess(&d.excess).ok_or_else(|| {
            GeomError::invalid("invalid coefficients: degenerate hyperbola (pair of lines)")
        })?;
        Ok(Self {
            center: d.center,
            a2: d.x_half_axis_squared,
            b2: d.y_half_axis_squared,
            orientation,
            conic,
        })
    }
}

impl ConicSection for Hyperbola {
    fn conic(&self) -> &Conic {
        &self.conic
    }

    /// Focal axis over transverse axis.
    fn eccentricity(&self) -> Radical {
        let transverse2 = self.semi_axes2().0;
        debug_assert!(!transverse2.is_zero());
        Radical::from_square_unchecked(self.c2() / transverse2)
    }
}

/// Same foci and same distance difference.
impl PartialEq for Hyperbola {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.center == other.center
            && self.c2() == other.c2()
            && self.distance() == other.distance()
    }
}

impl Eq for Hyperbola {}
