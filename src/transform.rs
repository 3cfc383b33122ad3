//! 2-D affine transforms over homogeneous coordinates.
//!
//! Matrices are row-major `[f64; 9]` acting on row vectors (`p' = p * m`),
//! the layout WebGL matrix helpers use: translation components sit at
//! indices 6 and 7, so an array can be handed to `uniformMatrix3fv` as-is.
//!
//! Everything here is a pure value function. Inputs are never mutated and
//! nothing is validated: a degenerate matrix like `scale(0.0, 0.0)` is a
//! legitimate result, and `rotate` accepts any finite angle.

/// Row-major 3x3 matrix over homogeneous 2-D coordinates.
pub type Mat3 = [f64; 9];

/// The identity transform.
pub const IDENTITY: Mat3 = [
    1.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, //
    0.0, 0.0, 1.0,
];

/// Translation by `(dx, dy)`.
pub fn translate(dx: f64, dy: f64) -> Mat3 {
    [
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        dx, dy, 1.0,
    ]
}

/// Counter-clockwise rotation by `angle` radians about the origin.
pub fn rotate(angle: f64) -> Mat3 {
    let (s, c) = angle.sin_cos();
    [
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    ]
}

/// Non-uniform scale about the origin.
pub fn scale(sx: f64, sy: f64) -> Mat3 {
    [
        sx, 0.0, 0.0, //
        0.0, sy, 0.0, //
        0.0, 0.0, 1.0,
    ]
}

/// Matrix product `b * a`.
///
/// Applied to a point, the combined transform performs `b` first and `a`
/// second, so a chain reads right-to-left:
/// `multiply(translate(..), rotate(..))` rotates, then translates.
pub fn multiply(a: Mat3, b: Mat3) -> Mat3 {
    let mut c = [0.0; 9];
    for i in 0..3 {
        for j in 0..3 {
            c[i * 3 + j] =
                b[i * 3] * a[j] + b[i * 3 + 1] * a[3 + j] + b[i * 3 + 2] * a[6 + j];
        }
    }
    c
}

/// Applies `m` to the homogeneous row vector `p`.
pub fn apply(m: Mat3, p: [f64; 3]) -> [f64; 3] {
    [
        p[0] * m[0] + p[1] * m[3] + p[2] * m[6],
        p[0] * m[1] + p[1] * m[4] + p[2] * m[7],
        p[0] * m[2] + p[1] * m[5] + p[2] * m[8],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn assert_mat_eq(a: Mat3, b: Mat3) {
        for i in 0..9 {
            assert!((a[i] - b[i]).abs() < EPS, "element {i}: {} vs {}", a[i], b[i]);
        }
    }

    fn assert_point_eq(p: [f64; 3], q: [f64; 3]) {
        for i in 0..3 {
            assert!((p[i] - q[i]).abs() < EPS, "{p:?} vs {q:?}");
        }
    }

    fn random_mat(rng: &mut StdRng) -> Mat3 {
        let mut m = [0.0; 9];
        for e in &mut m {
            *e = rng.gen_range(-10.0..10.0);
        }
        m
    }

    #[test]
    fn translate_offsets_points() {
        for &(dx, dy, x, y) in &[(1.5, -2.0, 3.0, 4.0), (0.0, 0.0, -7.0, 0.25), (-3.5, 8.0, 0.0, 0.0)] {
            assert_point_eq(apply(translate(dx, dy), [x, y, 1.0]), [x + dx, y + dy, 1.0]);
        }
    }

    #[test]
    fn scale_is_componentwise() {
        for &(sx, sy, x, y) in &[(2.0, 0.5, 3.0, -4.0), (-1.0, 1.0, 0.5, 0.5), (0.0, 3.0, 9.0, 2.0)] {
            assert_point_eq(apply(scale(sx, sy), [x, y, 1.0]), [sx * x, sy * y, 1.0]);
        }
    }

    #[test]
    fn scale_zero_collapses_to_origin() {
        // Degenerate but permitted; the homogeneous coordinate survives.
        assert_point_eq(apply(scale(0.0, 0.0), [12.0, -34.0, 1.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn rotate_zero_is_identity() {
        assert_mat_eq(rotate(0.0), IDENTITY);
        assert_point_eq(apply(rotate(0.0), [5.0, -6.0, 1.0]), [5.0, -6.0, 1.0]);
    }

    #[test]
    fn rotate_quarter_turn_is_counter_clockwise() {
        assert_point_eq(apply(rotate(FRAC_PI_2), [1.0, 0.0, 1.0]), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn rotate_is_periodic() {
        assert_mat_eq(rotate(PI / 3.0), rotate(PI / 3.0 + 2.0 * PI));
    }

    #[test]
    fn rotate_keeps_homogeneous_row() {
        // Third row must be [0, 0, 1] or composition would zero out w.
        let m = rotate(1.234);
        assert_point_eq([m[6], m[7], m[8]], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn multiply_is_associative() {
        let mut rng = StdRng::seed_from_u64(0x5157);
        for _ in 0..5 {
            let (a, b, c) = (random_mat(&mut rng), random_mat(&mut rng), random_mat(&mut rng));
            assert_mat_eq(multiply(multiply(a, b), c), multiply(a, multiply(b, c)));
        }
    }

    #[test]
    fn multiply_by_identity_is_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = random_mat(&mut rng);
        assert_mat_eq(multiply(m, IDENTITY), m);
        assert_mat_eq(multiply(IDENTITY, m), m);
    }

    #[test]
    fn composition_order_rotates_then_translates() {
        // Pins the operand order: the right-hand transform applies first.
        let m = multiply(translate(1.0, 0.0), rotate(FRAC_PI_2));
        assert_point_eq(apply(m, [1.0, 0.0, 1.0]), [1.0, 1.0, 1.0]);

        // And swapping the operands moves the point somewhere else entirely.
        let swapped = multiply(rotate(FRAC_PI_2), translate(1.0, 0.0));
        assert_point_eq(apply(swapped, [1.0, 0.0, 1.0]), [0.0, 2.0, 1.0]);
    }
}
