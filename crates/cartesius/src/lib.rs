//! Planar analytic geometry over exact rationals.
//!
//! Lines, segments, triangles and conic sections (circle, ellipse, hyperbola,
//! parabola) are algebraic values built from `BigRational` coefficients.
//! Equality, congruence, foci, asymptotes and classification are derived
//! algebraically; floating point appears only at leaves such as lengths and
//! angles (`number::Radical::to_f64`, `plane::Angle`).
//!
//! Layout
//! - `number`: exact helpers, canonical scaling, equation formatting.
//! - `solvers`: Cramer's rule for 2×2 and 3×3 systems.
//! - `plane`: points, lines, segments, triangles.
//! - `conic`: the normalized `Conic` tuple, the determinator and the variants.
//!
//! All constructors are fallible and return `GeomError` on invalid input;
//! every value is immutable once built.

pub mod cfg;
pub mod conic;
pub mod error;
pub mod number;
pub mod plane;
pub mod solvers;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{GeomError, GeomResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::GeomCfg;
    pub use crate::conic::{
        Circle, Conic, ConicSection, Ellipse, Hyperbola, Orientation, Parabola,
    };
    pub use crate::error::{GeomError, GeomResult};
    pub use crate::number::{parse_rational, rat, ratio, Radical};
    pub use crate::plane::{collinear, Angle, Line, Point, Segment, Slope, Triangle};
    pub use crate::solvers::{solve2, solve3};
    pub use nalgebra::Vector2 as Vec2;
    pub use num_rational::BigRational;
}
