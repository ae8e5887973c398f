use crate::line::Line;

use cgmath::{EuclideanSpace, InnerSpace, Matrix2, Point2, SquareMatrix, Vector2, Zero};

/// A rigid motion of the plane: `p -> linear * p + translation`.
///
/// Only rotations and reflections are ever built here, but nothing in the type
/// enforces that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion2 {
    pub linear: Matrix2<f64>,
    pub translation: Vector2<f64>,
}

impl Motion2 {
    pub fn identity() -> Motion2 {
        Motion2 {
            linear: Matrix2::identity(),
            translation: Vector2::zero(),
        }
    }

    pub fn transform_point(&self, p: Point2<f64>) -> Point2<f64> {
        Point2::from_vec(self.linear * p.to_vec() + self.translation)
    }

    pub fn transform_vector(&self, v: Vector2<f64>) -> Vector2<f64> {
        self.linear * v
    }

    /// The motion that applies `self` first and `next` second.
    pub fn then(&self, next: &Motion2) -> Motion2 {
        Motion2 {
            linear: next.linear * self.linear,
            translation: next.linear * self.translation + next.translation,
        }
    }

    /// `-1` for an odd number of reflections, `+1` otherwise.
    pub fn determinant(&self) -> f64 {
        self.linear.determinant()
    }
}

impl Default for Motion2 {
    fn default() -> Motion2 {
        Motion2::identity()
    }
}

/// Builds the motion that mirrors the plane across `line`.
///
/// The linear part is the Householder reflection `I - 2 n nᵗ / (n · n)`, which
/// is conjugated by a translation so that the mirror passes through
/// `line.origin` rather than the coordinate origin. The normal does not need
/// to be unit length, but it must not be zero.
pub fn reflection(line: &Line) -> Motion2 {
    let n = line.normal;
    let s = -2.0 / n.magnitude2();
    let nxnx = s * n.x * n.x;
    let nxny = s * n.x * n.y;
    let nyny = s * n.y * n.y;

    // Symmetric, so column-major vs. row-major doesn't matter
    let linear = Matrix2::new(nxnx + 1.0, nxny, nxny, nyny + 1.0);

    let origin = line.origin.to_vec();
    Motion2 {
        linear,
        translation: origin - linear * origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_points_eq(a: Point2<f64>, b: Point2<f64>) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn mirrors_across_vertical_line() {
        let line = Line::new(Point2::new(0.5, 0.0), Vector2::new(1.0, 0.0));
        let m = reflection(&line);

        assert_points_eq(m.transform_point(Point2::new(1.0, 0.25)), Point2::new(0.0, 0.25));
        assert_points_eq(m.transform_point(Point2::new(0.5, 9.0)), Point2::new(0.5, 9.0));
    }

    #[test]
    fn non_unit_normal_gives_same_mirror() {
        let unit = reflection(&Line::new(Point2::new(1.0, 2.0), Vector2::new(0.6, 0.8)));
        let long = reflection(&Line::new(Point2::new(1.0, 2.0), Vector2::new(6.0, 8.0)));
        let p = Point2::new(-3.0, 0.5);

        assert_points_eq(unit.transform_point(p), long.transform_point(p));
    }

    #[test]
    fn reflection_is_an_involution() {
        let line = Line::new(Point2::new(0.3, -1.2), Vector2::new(2.0, -0.7));
        let m = reflection(&line);
        let twice = m.then(&m);
        let p = Point2::new(4.5, 2.25);

        assert_points_eq(twice.transform_point(p), p);
        assert_relative_eq!(m.determinant(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(twice.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn then_applies_self_first() {
        let a = reflection(&Line::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0)));
        let b = reflection(&Line::new(Point2::new(1.0, 0.0), Vector2::new(1.0, 0.0)));
        let p = Point2::new(0.25, 0.0);

        // Mirror across x = 0, then across x = 1
        assert_points_eq(a.then(&b).transform_point(p), Point2::new(2.25, 0.0));
        assert_points_eq(
            a.then(&b).transform_point(p),
            b.transform_point(a.transform_point(p)),
        );
    }

    #[test]
    fn vectors_ignore_translation() {
        let m = reflection(&Line::new(Point2::new(5.0, 5.0), Vector2::new(0.0, 1.0)));
        let v = m.transform_vector(Vector2::new(1.0, 1.0));

        assert_relative_eq!(v.x, 1.0);
        assert_relative_eq!(v.y, -1.0);
    }
}
