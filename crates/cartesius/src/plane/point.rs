use nalgebra::Vector2;
use num_rational::BigRational;
use num_traits::Zero;

use crate::error::GeomResult;
use crate::number::{parse_rational, rat, to_f64, Radical};

/// Point with exact rational coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigRational,
    pub y: BigRational,
}

impl Point {
    #[inline]
    pub fn new(x: BigRational, y: BigRational) -> Self {
        Self { x, y }
    }

    /// Integer coordinates.
    #[inline]
    pub fn int(x: i64, y: i64) -> Self {
        Self::new(rat(x), rat(y))
    }

    /// Coordinates written as `"3"`, `"-1/2"` or `"0.5"`.
    pub fn parse(x: &str, y: &str) -> GeomResult<Self> {
        Ok(Self::new(parse_rational(x)?, parse_rational(y)?))
    }

    pub fn origin() -> Self {
        Self::new(BigRational::zero(), BigRational::zero())
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        let two = rat(2);
        Point::new((&self.x + &other.x) / &two, (&self.y + &other.y) / &two)
    }

    pub fn distance_squared(&self, other: &Point) -> BigRational {
        let dx = &other.x - &self.x;
        let dy = &other.y - &self.y;
        &dx * &dx + &dy * &dy
    }

    pub fn distance(&self, other: &Point) -> Radical {
        Radical::from_square_unchecked(self.distance_squared(other))
    }

    /// Same `y` coordinate.
    #[inline]
    pub fn is_aligned_horizontally_with(&self, other: &Point) -> bool {
        self.y == other.y
    }

    /// Same `x` coordinate.
    #[inline]
    pub fn is_aligned_vertically_with(&self, other: &Point) -> bool {
        self.x == other.x
    }

    /// Translate by `(dx, dy)`.
    pub fn shifted(&self, dx: &BigRational, dy: &BigRational) -> Point {
        Point::new(&self.x + dx, &self.y + dy)
    }

    /// Approximate coordinates for leaf computations.
    pub fn to_vec2(&self) -> Vector2<f64> {
        Vector2::new(to_f64(&self.x), to_f64(&self.y))
    }
}

/// Twice the signed area of the triangle `abc`; zero iff collinear.
pub fn cross(a: &Point, b: &Point, c: &Point) -> BigRational {
    let (abx, aby) = (&b.x - &a.x, &b.y - &a.y);
    let (acx, acy) = (&c.x - &a.x, &c.y - &a.y);
    abx * acy - aby * acx
}

/// True when all three points lie on one line (duplicates included).
pub fn collinear(a: &Point, b: &Point, c: &Point) -> bool {
    cross(a, b, c).is_zero()
}

/// True when no two points coincide.
pub fn pairwise_distinct(points: &[&Point]) -> bool {
    points
        .iter()
        .enumerate()
        .all(|(i, p)| points[i + 1..].iter().all(|q| p != q))
}
