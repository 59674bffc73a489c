//! Exact linear solvers (Cramer's rule) used to fit conics through points.
//!
//! - `solve2`: 2×2 system via determinant ratios.
//! - `solve3`: 3×3 system via cofactor expansion.
//!
//! All arithmetic is exact, so there is no pivoting and no tolerance: a zero
//! main determinant is reported as `GeomError::SingularSystem`.

use num_rational::BigRational;
use num_traits::Zero;

use crate::error::{GeomError, GeomResult};

type Row2 = [BigRational; 2];
type Row3 = [BigRational; 3];

#[inline]
fn det2(a: &BigRational, b: &BigRational, c: &BigRational, d: &BigRational) -> BigRational {
    a * d - b * c
}

fn det3(r1: &Row3, r2: &Row3, r3: &Row3) -> BigRational {
    &r1[0] * det2(&r2[1], &r2[2], &r3[1], &r3[2]) - &r1[1] * det2(&r2[0], &r2[2], &r3[0], &r3[2])
        + &r1[2] * det2(&r2[0], &r2[1], &r3[0], &r3[1])
}

/// Solve `row1 · v = rhs[0]`, `row2 · v = rhs[1]`.
pub fn solve2(row1: &Row2, row2: &Row2, rhs: &Row2) -> GeomResult<Row2> {
    let d = det2(&row1[0], &row1[1], &row2[0], &row2[1]);
    if d.is_zero() {
        tracing::trace!("solve2: singular system");
        return Err(GeomError::SingularSystem);
    }
    let dx = det2(&rhs[0], &row1[1], &rhs[1], &row2[1]);
    let dy = det2(&row1[0], &rhs[0], &row2[0], &rhs[1]);
    Ok([dx / &d, dy / &d])
}

/// Solve the 3×3 system whose rows are `row1..row3` with right-hand side `rhs`.
pub fn solve3(row1: &Row3, row2: &Row3, row3: &Row3, rhs: &Row3) -> GeomResult<Row3> {
    let d = det3(row1, row2, row3);
    if d.is_zero() {
        tracing::trace!("solve3: singular system");
        return Err(GeomError::SingularSystem);
    }
    // Replace column `col` with the right-hand side.
    let swap = |row: &Row3, value: &BigRational, col: usize| -> Row3 {
        let mut out = row.clone();
        out[col] = value.clone();
        out
    };
    let column = |col: usize| {
        det3(
            &swap(row1, &rhs[0], col),
            &swap(row2, &rhs[1], col),
            &swap(row3, &rhs[2], col),
        ) / &d
    };
    Ok([column(0), column(1), column(2)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{rat, ratio};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn solve2_unique_solution() {
        // 2x + y = 5, x - y = 1  ->  (2, 1)
        let v = solve2(&[rat(2), rat(1)], &[rat(1), rat(-1)], &[rat(5), rat(1)]).unwrap();
        assert_eq!(v, [rat(2), rat(1)]);
    }

    #[test]
    fn solve2_fractional_solution() {
        // 3x + 2y = 1, x + 4y = 0  ->  (2/5, -1/10)
        let v = solve2(&[rat(3), rat(2)], &[rat(1), rat(4)], &[rat(1), rat(0)]).unwrap();
        assert_eq!(v, [ratio(2, 5), ratio(-1, 10)]);
    }

    #[test]
    fn solve2_parallel_rows_are_singular() {
        let err = solve2(&[rat(1), rat(2)], &[rat(2), rat(4)], &[rat(1), rat(3)]).unwrap_err();
        assert_eq!(err, GeomError::SingularSystem);
    }

    #[test]
    fn solve3_singular_and_regular() {
        let r1 = [rat(1), rat(1), rat(1)];
        let r2 = [rat(1), rat(2), rat(3)];
        let r3 = [rat(2), rat(3), rat(4)];
        assert_eq!(
            solve3(&r1, &r2, &r3, &[rat(1), rat(1), rat(1)]),
            Err(GeomError::SingularSystem)
        );
        let r3 = [rat(1), rat(4), rat(9)];
        let v = solve3(&r1, &r2, &r3, &[rat(6), rat(14), rat(36)]).unwrap();
        assert_eq!(v, [rat(1), rat(2), rat(3)]);
    }

    #[test]
    fn solve2_randomized_seeded_substitution() {
        let mut rng = StdRng::seed_from_u64(7);
        let draw = |rng: &mut StdRng| ratio(rng.gen_range(-20..=20), rng.gen_range(1..=7));
        for _ in 0..50 {
            let rows: Vec<Row2> = (0..2).map(|_| [draw(&mut rng), draw(&mut rng)]).collect();
            let rhs = [draw(&mut rng), draw(&mut rng)];
            match solve2(&rows[0], &rows[1], &rhs) {
                Ok(v) => {
                    for (row, b) in rows.iter().zip(rhs.iter()) {
                        assert_eq!(&(&row[0] * &v[0] + &row[1] * &v[1]), b);
                    }
                }
                Err(e) => assert_eq!(e, GeomError::SingularSystem),
            }
        }
    }

    #[test]
    fn solve3_randomized_seeded_substitution() {
        let mut rng = StdRng::seed_from_u64(42);
        let draw = |rng: &mut StdRng| ratio(rng.gen_range(-20..=20), rng.gen_range(1..=7));
        for _ in 0..50 {
            let rows: Vec<Row3> = (0..3)
                .map(|_| [draw(&mut rng), draw(&mut rng), draw(&mut rng)])
                .collect();
            let rhs = [draw(&mut rng), draw(&mut rng), draw(&mut rng)];
            match solve3(&rows[0], &rows[1], &rows[2], &rhs) {
                Ok(v) => {
                    for (row, b) in rows.iter().zip(rhs.iter()) {
                        let lhs = &row[0] * &v[0] + &row[1] * &v[1] + &row[2] * &v[2];
                        assert_eq!(&lhs, b);
                    }
                }
                Err(e) => assert_eq!(e, GeomError::SingularSystem),
            }
        }
    }
}
