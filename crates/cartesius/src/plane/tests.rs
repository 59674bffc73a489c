use super::*;
use crate::cfg::GeomCfg;
use crate::number::{rat, ratio};
use num_rational::BigRational;

#[test]
fn line_equations_render_stored_coefficients() {
    assert_eq!(Line::horizontal(rat(1)).to_equation(), "+1y -1 = 0");
    assert_eq!(Line::vertical(rat(1)).to_equation(), "+1x -1 = 0");
    assert_eq!(Line::create(rat(2), rat(1)).to_equation(), "+2x -1y +1 = 0");
    assert_eq!(
        Line::create(ratio(-1, 2), ratio(3, 4)).to_equation(),
        "+(1/2)x +1y -(3/4) = 0"
    );
}

#[test]
fn line_rejects_degenerate_coefficients() {
    assert!(Line::new(rat(0), rat(0), rat(3))
        .unwrap_err()
        .is_invalid_construction());
    assert!(Line::new(rat(0), rat(2), rat(3)).is_ok());
}

#[test]
fn axes_and_bisectors_are_perpendicular() {
    assert!(Line::x_axis().is_perpendicular(&Line::y_axis()));
    assert!(Line::y_axis().is_perpendicular(&Line::x_axis()));
    assert!(Line::ascending_bisector().is_perpendicular(&Line::descending_bisector()));
    assert!(!Line::x_axis().is_perpendicular(&Line::ascending_bisector()));
    assert!(!Line::y_axis().is_perpendicular(&Line::y_axis()));
}

#[test]
fn slope_classes() {
    let vertical = Line::vertical(rat(2));
    assert_eq!(vertical.slope(), Slope::Vertical);
    assert!(vertical.is_vertical() && !vertical.is_inclined());
    assert!(!vertical.is_ascending() && !vertical.is_descending());

    let flat = Line::horizontal(rat(-3));
    assert!(flat.is_horizontal());
    assert!(!flat.is_ascending() && !flat.is_descending());

    let up = Line::create(rat(3), rat(0));
    assert!(up.is_inclined() && up.is_ascending());
    let down = Line::create(ratio(-1, 3), rat(0));
    assert!(down.is_descending());
    assert!(up.is_perpendicular(&down));
}

#[test]
fn by_points_special_cases_aligned_points() {
    let h = Line::by_points(&Point::int(1, 2), &Point::int(5, 2)).unwrap();
    assert_eq!(h, Line::horizontal(rat(2)));
    let v = Line::by_points(&Point::int(3, -1), &Point::int(3, 7)).unwrap();
    assert_eq!(v, Line::vertical(rat(3)));
    let s = Line::by_points(&Point::int(0, 1), &Point::int(2, 5)).unwrap();
    assert_eq!(s.slope(), Slope::Finite(rat(2)));
    assert_eq!(s.known_term(), rat(1));
    assert!(Line::by_points(&Point::int(1, 1), &Point::int(1, 1)).is_err());
}

#[test]
fn equality_ignores_coefficient_scale() {
    let a = Line::new(rat(2), rat(-4), rat(6)).unwrap();
    let b = Line::new(rat(-1), rat(2), rat(-3)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.to_equation(), "");
    assert_ne!(a, Line::new(rat(2), rat(-4), rat(5)).unwrap());
    let v1 = Line::new(rat(3), rat(0), rat(-6)).unwrap();
    assert_eq!(v1, Line::vertical(rat(2)));
    assert!(Line::new(rat(-1), rat(1), rat(0))
        .unwrap()
        .is_ascending_bisector());
    assert!(Line::horizontal(rat(0)).is_x_axis());
    assert!(Line::vertical(rat(0)).is_y_axis());
    assert!(Line::create(rat(-1), rat(0)).is_descending_bisector());
}

#[test]
fn congruence_between_lines_is_trivial() {
    assert!(Line::x_axis().is_congruent(&Line::create(rat(7), rat(3))));
}

#[test]
fn parallel_contains_and_intercepts() {
    let l = Line::create(rat(2), rat(1));
    assert!(l.is_parallel(&Line::create(rat(2), rat(-5))));
    assert!(Line::vertical(rat(1)).is_parallel(&Line::vertical(rat(4))));
    assert!(l.contains(&Point::int(1, 3)));
    assert!(!l.contains(&Point::int(1, 4)));
    assert!(Line::vertical(rat(4)).contains(&Point::int(4, -10)));
    assert_eq!(l.x_intercept(), Some(ratio(-1, 2)));
    assert_eq!(l.y_intercept(), Some(rat(1)));
    assert_eq!(Line::horizontal(rat(1)).x_intercept(), None);
    assert_eq!(Line::vertical(rat(1)).y_intercept(), None);
}

#[test]
fn segment_basics() {
    let s = Segment::new(Point::int(0, 0), Point::int(3, 4)).unwrap();
    assert_eq!(s.length().exact(), Some(rat(5)));
    assert_eq!(s.mid(), Point::new(ratio(3, 2), rat(2)));
    assert!(s.is_ascending() && s.is_inclined());
    let swapped = Segment::new(Point::int(3, 4), Point::int(0, 0)).unwrap();
    assert_eq!(s, swapped);
    let moved = Segment::new(Point::int(10, 10), Point::int(10, 15)).unwrap();
    assert!(s.is_congruent(&moved));
    assert!(moved.is_vertical());
    assert_ne!(s, moved);
    assert!(Segment::new(Point::int(1, 1), Point::int(1, 1)).is_err());
}

#[test]
fn segment_length_stays_exact_when_irrational() {
    let s = Segment::new(Point::int(0, 0), Point::int(1, 1)).unwrap();
    assert_eq!(s.length().square(), &rat(2));
    assert_eq!(s.length().exact(), None);
    assert!((s.length().to_f64() - 2f64.sqrt()).abs() < 1e-12);
}

fn sqrt3() -> BigRational {
    BigRational::from_float(3f64.sqrt()).expect("finite")
}

#[test]
fn equilateral_triangle() {
    let t = Triangle::new(Point::int(0, 0), Point::int(2, 0), Point::new(rat(1), sqrt3())).unwrap();
    assert!(t.is_equilateral());
    assert!(t.is_isosceles());
    assert!(!t.is_scalene());
    assert!(!t.is_right_angled());
    assert!(t.is_acute());
    for angle in t.angles() {
        assert!((angle.degrees() - 60.0).abs() < 1e-6, "angle {}", angle.degrees());
    }
    assert_eq!(t.area(2), 1.73);
}

#[test]
fn right_triangle_3_4_5() {
    let t = Triangle::new(Point::int(0, 0), Point::int(3, 0), Point::int(0, 4)).unwrap();
    assert!(t.is_right_angled());
    assert!(!t.is_obtuse() && !t.is_acute());
    assert_eq!(t.perimeter(), 12.0);
    assert!(t.is_scalene());
    assert_eq!(t.exact_area(), rat(6));
    assert_eq!(t.area(3), 6.0);
    assert!((t.angles()[0].degrees() - 90.0).abs() < 1e-9);
}

#[test]
fn obtuse_and_isosceles() {
    let t = Triangle::new(Point::int(-3, 0), Point::int(3, 0), Point::int(0, 1)).unwrap();
    assert!(t.is_obtuse());
    assert!(t.is_isosceles() && !t.is_equilateral());
}

#[test]
fn rounding_precision_sets_the_classification_boundary() {
    // Sides 2 and twice ~2.0000426: equal at 2 decimals, not at 6.
    let apex = Point::new(rat(1), BigRational::new(17321.into(), 10000.into()));
    let coarse = Triangle::with_cfg(
        Point::int(0, 0),
        Point::int(2, 0),
        apex.clone(),
        GeomCfg { side_decimals: 2 },
    )
    .unwrap();
    assert!(coarse.is_equilateral());
    let fine = Triangle::with_cfg(
        Point::int(0, 0),
        Point::int(2, 0),
        apex,
        GeomCfg { side_decimals: 6 },
    )
    .unwrap();
    assert!(!fine.is_equilateral());
    assert!(fine.is_isosceles());
    assert_eq!(fine.cfg().side_decimals, 6);
}

#[test]
fn triangle_rejects_duplicates_and_aligned_points() {
    assert!(Triangle::new(Point::int(0, 0), Point::int(0, 0), Point::int(1, 1)).is_err());
    assert!(Triangle::new(Point::int(0, 0), Point::int(1, 1), Point::int(2, 2)).is_err());
}

#[test]
fn triangle_equality_congruence_similarity() {
    let t = Triangle::new(Point::int(0, 0), Point::int(3, 0), Point::int(0, 4)).unwrap();
    let same = Triangle::new(Point::int(0, 4), Point::int(0, 0), Point::int(3, 0)).unwrap();
    assert_eq!(t, same);

    let moved = Triangle::new(Point::int(10, 10), Point::int(10, 13), Point::int(14, 10)).unwrap();
    assert_ne!(t, moved);
    assert!(t.is_congruent(&moved));

    let scaled = Triangle::new(Point::int(0, 0), Point::int(6, 0), Point::int(0, 8)).unwrap();
    assert!(!t.is_congruent(&scaled));
    assert!(t.is_similar(&scaled));

    let other = Triangle::new(Point::int(0, 0), Point::int(1, 0), Point::int(0, 1)).unwrap();
    assert!(!t.is_similar(&other));
}

#[test]
fn point_helpers() {
    let p = Point::parse("1/2", "-0.25").unwrap();
    assert_eq!(p, Point::new(ratio(1, 2), ratio(-1, 4)));
    assert!(Point::parse("x", "1").is_err());
    assert!(collinear(&Point::int(0, 0), &Point::int(1, 2), &Point::int(2, 4)));
    assert!(pairwise_distinct(&[&Point::int(0, 0), &Point::int(0, 1)]));
    assert!(!pairwise_distinct(&[&Point::int(0, 0), &Point::int(0, 1), &Point::int(0, 0)]));
    assert_eq!(Point::int(1, 1).distance(&Point::int(4, 5)).exact(), Some(rat(5)));
    let v = Point::new(ratio(1, 2), rat(3)).to_vec2();
    assert_eq!(v, nalgebra::Vector2::new(0.5, 3.0));
}

#[test]
fn oversized_rounding_precision_stays_well_defined() {
    // Sides √26, √26 and 2.
    for side_decimals in [400, u32::MAX] {
        let t = Triangle::with_cfg(
            Point::int(0, 0),
            Point::int(2, 0),
            Point::int(1, 5),
            GeomCfg { side_decimals },
        )
        .unwrap();
        assert!(t.is_isosceles(), "side_decimals {side_decimals}");
        assert!(!t.is_scalene() && !t.is_equilateral());
        let area = t.area(side_decimals);
        assert!((area - 5.0).abs() < 1e-9, "area {area}");
    }
}

#[test]
fn segment_extremes_and_derived_line() {
    let (a, b) = (Point::int(-1, 2), Point::int(3, 4));
    let s = Segment::new(a.clone(), b.clone()).unwrap();
    let swapped = Segment::new(b.clone(), a.clone()).unwrap();
    assert_eq!((s.extreme1(), s.extreme2()), (&a, &b));
    assert_eq!(s.extremes(), [&a, &b]);
    assert_eq!(swapped.extremes(), [&b, &a]);
    assert_eq!(s, swapped);

    let line = Line::by_points(&a, &b).unwrap();
    assert_eq!(s.to_line(), &line);
    assert_eq!(swapped.to_line(), &line);
    assert_eq!(line.slope(), Slope::Finite(ratio(1, 2)));
    assert!(line.contains(&s.mid()));

    let v = Segment::new(Point::int(2, -1), Point::int(2, 6)).unwrap();
    assert_eq!(v.to_line(), &Line::vertical(rat(2)));
}
