//! Walk through the conic constructors and print what each one derives.
//!
//! Purpose
//! - Show that geometric constructors and raw coefficients meet in the same
//!   normalized equation.
//! - Show where exact answers stop: irrational foci come back approximate.
//!
//! Run with `RUST_LOG=debug` to also see rejected constructions; the
//! default filter is `info`.

use cartesius::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GeomError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let circle = Circle::by_three_points(&Point::int(4, -2), &Point::int(1, 1), &Point::int(-2, -2))?;
    println!("circle       {}", circle.to_equation());
    println!("  center {:?}  radius {}", circle.center(), circle.radius());

    let h = Hyperbola::by_definition(&Point::int(5, 0), &Point::int(-5, 0), &rat(8))?;
    println!("hyperbola    {}", h.to_equation());
    println!("  orientation {:?}  eccentricity {}", h.orientation(), h.eccentricity());
    if let Some([up, down]) = h.asymptotes() {
        println!("  asymptotes {}  |  {}", up.to_equation(), down.to_equation());
    }

    let g = Hyperbola::by_center_vertex_point(&Point::origin(), &Point::int(2, 0), &Point::int(4, 3))?;
    println!("hyperbola    {}", g.to_equation());
    println!("  exact foci {:?}  approx {:?} {:?}", g.exact_foci(), g.focus1(), g.focus2());

    let e = Ellipse::by_definition(&Point::int(1, 5), &Point::int(1, -3), &rat(10))?;
    println!("ellipse      {}  eccentricity {}", e.to_equation(), e.eccentricity());

    let p = Parabola::new(rat(-2), rat(3), rat(-4))?;
    println!("parabola     {}", p.to_equation());
    println!("  vertex {:?}  focus {:?}", p.vertex(), p.focus());
    println!("  directrix {}", p.directrix().to_equation());

    let t = Triangle::new(Point::int(0, 0), Point::int(3, 0), Point::int(0, 4))?;
    println!(
        "triangle     right={} perimeter={} area={}",
        t.is_right_angled(),
        t.perimeter(),
        t.exact_area()
    );

    if let Err(err) = Circle::by_three_points(&Point::int(0, 0), &Point::int(1, 1), &Point::int(2, 2)) {
        println!("rejected     {err}");
    }
    Ok(())
}
