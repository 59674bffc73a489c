//! Center and scale of a degree-2 equation `x2·x² + y2·y² + x·x + y·y + k = 0`.
//!
//! Every conic variant goes through these functions, so "center", "half-axis"
//! and "orientation" have one definition across circle, ellipse, hyperbola
//! and parabola.
//!
//! - center: `xc = -x / (2·x2)`, `yc = -y / (2·y2)`.
//! - determinant value: the quadratic part at the center, `x2·xc² + y2·yc²`.
//! - half-axis squares: `|value - k| / |x2|` and `|value - k| / |y2|`.
//! - orientation: `sign(value - k)`, meaningful for normalized tuples
//!   (leading coefficient `x2 = 1`).

use nalgebra::Vector2;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::error::{GeomError, GeomResult};
use crate::number::rat;
use crate::plane::Point;

/// Direction of the axis through the foci.
///
/// For a hyperbola this is the transverse axis; for an ellipse the major axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    HorizontalTransverse,
    VerticalTransverse,
}

impl Orientation {
    /// The single discriminator: positive excess means a horizontal axis.
    /// `None` for a zero excess (degenerate conic).
    pub fn from_excess(excess: &BigRational) -> Option<Self> {
        if excess.is_positive() {
            Some(Self::HorizontalTransverse)
        } else if excess.is_negative() {
            Some(Self::VerticalTransverse)
        } else {
            None
        }
    }

    /// The perpendicular direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::HorizontalTransverse => Self::VerticalTransverse,
            Self::VerticalTransverse => Self::HorizontalTransverse,
        }
    }

    /// `center` moved by `d` along this axis.
    pub fn shift(self, center: &Point, d: &BigRational) -> Point {
        match self {
            Self::HorizontalTransverse => Point::new(&center.x + d, center.y.clone()),
            Self::VerticalTransverse => Point::new(center.x.clone(), &center.y + d),
        }
    }

    /// Approximate counterpart of `shift`.
    pub fn shift_approx(self, center: Vector2<f64>, d: f64) -> Vector2<f64> {
        match self {
            Self::HorizontalTransverse => Vector2::new(center.x + d, center.y),
            Self::VerticalTransverse => Vector2::new(center.x, center.y + d),
        }
    }
}

/// `-lin / (2·quad)`; a zero quadratic coefficient has no center on that axis.
fn axis_center(quad: &BigRational, lin: &BigRational, axis: &str) -> GeomResult<BigRational> {
    if quad.is_zero() {
        return Err(GeomError::invalid(format!(
            "invalid coefficients: no center along {axis} (zero {axis}² coefficient)"
        )));
    }
    Ok(-lin / (quad * rat(2)))
}

pub fn center_x(x2: &BigRational, x: &BigRational) -> GeomResult<BigRational> {
    axis_center(x2, x, "x")
}

pub fn center_y(y2: &BigRational, y: &BigRational) -> GeomResult<BigRational> {
    axis_center(y2, y, "y")
}

pub fn center(
    x2: &BigRational,
    y2: &BigRational,
    x: &BigRational,
    y: &BigRational,
) -> GeomResult<(BigRational, BigRational)> {
    Ok((center_x(x2, x)?, center_y(y2, y)?))
}

/// Quadratic part evaluated at the center.
pub fn determinant_value(
    x2: &BigRational,
    y2: &BigRational,
    x: &BigRational,
    y: &BigRational,
) -> GeomResult<BigRational> {
    let (xc, yc) = center(x2, y2, x, y)?;
    Ok(value_at(x2, y2, &xc, &yc))
}

/// `x2·xc² + y2·yc²`.
fn value_at(x2: &BigRational, y2: &BigRational, xc: &BigRational, yc: &BigRational) -> BigRational {
    x2 * xc * xc + y2 * yc * yc
}

/// `|value - k| / |quad|`.
pub fn half_axis_squared(value: &BigRational, k: &BigRational, quad: &BigRational) -> BigRational {
    (value - k).abs() / quad.abs()
}

/// Everything the variants need from a central conic, computed once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Determination {
    pub center: Point,
    pub value: BigRational,
    /// `value - k`.
    pub excess: BigRational,
    pub x_half_axis_squared: BigRational,
    pub y_half_axis_squared: BigRational,
}

pub fn determine(
    x2: &BigRational,
    y2: &BigRational,
    x: &BigRational,
    y: &BigRational,
    k: &BigRational,
) -> GeomResult<Determination> {
    let (xc, yc) = center(x2, y2, x, y)?;
    let value = value_at(x2, y2, &xc, &yc);
    Ok(Determination {
        center: Point::new(xc, yc),
        excess: &value - k,
        x_half_axis_squared: half_axis_squared(&value, k, x2),
        y_half_axis_squared: half_axis_squared(&value, k, y2),
        value,
    })
}
