use super::line::Line;
use super::point::Point;
use crate::error::{GeomError, GeomResult};
use crate::number::Radical;

/// Segment between two distinct points; carries its supporting line.
#[derive(Clone, Debug)]
pub struct Segment {
    extreme1: Point,
    extreme2: Point,
    line: Line,
}

impl Segment {
    pub fn new(extreme1: Point, extreme2: Point) -> GeomResult<Self> {
        if extreme1 == extreme2 {
            return Err(GeomError::invalid("segment extremes cannot be the same"));
        }
        let line = Line::by_points(&extreme1, &extreme2)?;
        Ok(Self {
            extreme1,
            extreme2,
            line,
        })
    }

    pub fn extreme1(&self) -> &Point {
        &self.extreme1
    }

    pub fn extreme2(&self) -> &Point {
        &self.extreme2
    }

    pub fn extremes(&self) -> [&Point; 2] {
        [&self.extreme1, &self.extreme2]
    }

    pub fn to_line(&self) -> &Line {
        &self.line
    }

    /// Exact squared length, approximate root on demand.
    pub fn length(&self) -> Radical {
        self.extreme1.distance(&self.extreme2)
    }

    pub fn mid(&self) -> Point {
        self.extreme1.midpoint(&self.extreme2)
    }

    pub fn is_horizontal(&self) -> bool {
        self.line.is_horizontal()
    }

    pub fn is_vertical(&self) -> bool {
        self.line.is_vertical()
    }

    pub fn is_inclined(&self) -> bool {
        self.line.is_inclined()
    }

    pub fn is_ascending(&self) -> bool {
        self.line.is_ascending()
    }

    pub fn is_descending(&self) -> bool {
        self.line.is_descending()
    }

    /// Same length, any position.
    pub fn is_congruent(&self, other: &Segment) -> bool {
        self.length() == other.length()
    }
}

/// Order of the extremes does not matter.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.extreme1 == other.extreme1 && self.extreme2 == other.extreme2)
            || (self.extreme1 == other.extreme2 && self.extreme2 == other.extreme1)
    }
}

impl Eq for Segment {}
