//! Triangles over exact vertices.
//!
//! Conventions
//! - Vertices `a, b, c`; side `a` is opposite vertex `a` (segment `bc`), and so on.
//! - Angles come from the law of cosines with an exact squared numerator;
//!   they are `f64` leaves and never feed back into exact arithmetic.
//! - Right/obtuse tests and congruence/similarity are decided exactly on
//!   squared side lengths. Only the equilateral/isosceles/scalene split rounds
//!   floats, with the precision taken from `GeomCfg`.

use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::point::{collinear, cross, pairwise_distinct, Point};
use super::segment::Segment;
use crate::cfg::GeomCfg;
use crate::error::{GeomError, GeomResult};
use crate::number::{rat, round_to, to_f64};

/// Plane angle in radians.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }
}

#[derive(Clone, Debug)]
pub struct Triangle {
    vertices: [Point; 3],
    sides: [Segment; 3],
    angles: [Angle; 3],
    cfg: GeomCfg,
}

impl Triangle {
    /// Triangle with the default rounding configuration.
    pub fn new(a: Point, b: Point, c: Point) -> GeomResult<Self> {
        Self::with_cfg(a, b, c, GeomCfg::default())
    }

    pub fn with_cfg(a: Point, b: Point, c: Point, cfg: GeomCfg) -> GeomResult<Self> {
        if !pairwise_distinct(&[&a, &b, &c]) {
            return Err(GeomError::invalid("triangle vertices must be different"));
        }
        if collinear(&a, &b, &c) {
            return Err(GeomError::invalid("triangle vertices must not be aligned"));
        }
        let sides = [
            Segment::new(b.clone(), c.clone())?,
            Segment::new(a.clone(), c.clone())?,
            Segment::new(a.clone(), b.clone())?,
        ];
        let angles = [
            law_of_cosines(&sides[0], &sides[1], &sides[2]),
            law_of_cosines(&sides[1], &sides[0], &sides[2]),
            law_of_cosines(&sides[2], &sides[0], &sides[1]),
        ];
        Ok(Self {
            vertices: [a, b, c],
            sides,
            angles,
            cfg,
        })
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    pub fn sides(&self) -> &[Segment; 3] {
        &self.sides
    }

    pub fn angles(&self) -> &[Angle; 3] {
        &self.angles
    }

    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    fn squared_sides(&self) -> [BigRational; 3] {
        std::array::from_fn(|i| self.sides[i].length().square().clone())
    }

    fn sorted_squared_sides(&self) -> [BigRational; 3] {
        let mut sq = self.squared_sides();
        sq.sort();
        sq
    }

    /// For each vertex: `b² + c² - a²` with `a` the opposite side.
    /// Its sign is the sign of the cosine of that angle.
    fn cosine_numerators(&self) -> [BigRational; 3] {
        let [a, b, c] = self.squared_sides();
        [&b + &c - &a, &a + &c - &b, &a + &b - &c]
    }

    pub fn is_right_angled(&self) -> bool {
        self.cosine_numerators().iter().any(|n| n.is_zero())
    }

    pub fn is_obtuse(&self) -> bool {
        self.cosine_numerators().iter().any(|n| n.is_negative())
    }

    pub fn is_acute(&self) -> bool {
        !self.is_right_angled() && !self.is_obtuse()
    }

    /// Number of distinct side lengths after rounding to `cfg.side_decimals`.
    fn distinct_rounded_sides(&self) -> usize {
        let mut lengths: Vec<f64> = self
            .sides
            .iter()
            .map(|s| round_to(s.length().to_f64(), self.cfg.side_decimals))
            .collect();
        lengths.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        lengths.dedup();
        lengths.len()
    }

    pub fn is_equilateral(&self) -> bool {
        self.distinct_rounded_sides() == 1
    }

    /// At least two equal sides (equilateral included).
    pub fn is_isosceles(&self) -> bool {
        self.distinct_rounded_sides() <= 2
    }

    pub fn is_scalene(&self) -> bool {
        self.distinct_rounded_sides() == 3
    }

    pub fn perimeter(&self) -> f64 {
        self.sides.iter().map(|s| s.length().to_f64()).sum()
    }

    /// `½·a·b·sin(C)` rounded to `decimals`.
    pub fn area(&self, decimals: u32) -> f64 {
        let a = self.sides[0].length().to_f64();
        let b = self.sides[1].length().to_f64();
        round_to(a * b * self.angles[2].radians().sin() / 2.0, decimals)
    }

    /// Shoelace area, exact.
    pub fn exact_area(&self) -> BigRational {
        let [a, b, c] = &self.vertices;
        cross(a, b, c).abs() / rat(2)
    }

    /// Same side lengths, any placement.
    pub fn is_congruent(&self, other: &Triangle) -> bool {
        self.sorted_squared_sides() == other.sorted_squared_sides()
    }

    /// Same angles. Decided exactly: sorted sides must be proportional.
    pub fn is_similar(&self, other: &Triangle) -> bool {
        let [s0, s1, s2] = self.sorted_squared_sides();
        let [t0, t1, t2] = other.sorted_squared_sides();
        &s0 * &t1 == &s1 * &t0 && &s0 * &t2 == &s2 * &t0
    }
}

/// Same vertex set, in any order.
impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.vertices.iter().all(|v| other.vertices.contains(v))
    }
}

impl Eq for Triangle {}

/// Angle opposite `side1`, from `side1² = side2² + side3² - 2·side2·side3·cos`.
fn law_of_cosines(side1: &Segment, side2: &Segment, side3: &Segment) -> Angle {
    let (l1, l2, l3) = (side1.length(), side2.length(), side3.length());
    let numerator = l2.square() + l3.square() - l1.square();
    let cosine = to_f64(&numerator) / (2.0 * l2.to_f64() * l3.to_f64());
    Angle::from_radians(cosine.clamp(-1.0, 1.0).acos())
}
