use cgmath::{InnerSpace, Point2};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A disk that a dragged point is not allowed to enter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForbiddenBall {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl ForbiddenBall {
    pub fn new(center: Point2<f64>, radius: f64) -> ForbiddenBall {
        ForbiddenBall { center, radius }
    }

    pub fn contains(&self, position: Point2<f64>) -> bool {
        (position - self.center).magnitude2() < self.radius * self.radius
    }

    /// See [`keep_away`].
    pub fn keep_away(&self, position: Point2<f64>, fallback: Point2<f64>) -> Point2<f64> {
        keep_away(position, self.center, self.radius, fallback)
    }
}

/// Pushes `position` out of the disk of `radius` around `center`, radially, so
/// that it ends up exactly on the rim. Points already outside are returned as
/// they are.
///
/// A point sitting exactly on `center` has no radial direction; it is pushed
/// out towards `fallback` instead (typically where the point was before the
/// drag). If `fallback` is on `center` too, `position` is returned unchanged.
pub fn keep_away(
    position: Point2<f64>,
    center: Point2<f64>,
    radius: f64,
    fallback: Point2<f64>,
) -> Point2<f64> {
    let arm = position - center;
    let distance2 = arm.magnitude2();
    if !(distance2 < radius * radius) {
        return position;
    }

    let factor = radius / distance2.sqrt();
    if factor.is_finite() {
        return center + arm * factor;
    }

    let arm = fallback - center;
    let length = arm.magnitude();
    if length > 0.0 && length.is_finite() {
        center + arm * (radius / length)
    } else {
        warn!(
            x = position.x,
            y = position.y,
            "exclusion direction undefined, leaving position unchanged"
        );
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn outside_points_are_left_alone() {
        let center = Point2::new(0.0, 0.0);
        let p = Point2::new(0.3, 0.4);

        assert_eq!(keep_away(p, center, 0.5, p), p);
        assert_eq!(keep_away(p, center, 0.1, p), p);
    }

    #[test]
    fn inside_points_are_pushed_to_the_rim() {
        let center = Point2::new(1.0, 1.0);
        let p = keep_away(Point2::new(1.03, 1.04), center, 0.1, center);

        assert_relative_eq!((p - center).magnitude(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(p.x, 1.06, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.08, epsilon = 1e-12);
    }

    #[test]
    fn center_uses_fallback_direction() {
        let center = Point2::new(0.0, 0.0);
        let p = keep_away(center, center, 2.0, Point2::new(0.0, -5.0));

        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, -2.0);
    }

    #[test]
    fn double_coincidence_is_a_no_op() {
        let center = Point2::new(0.25, 0.25);

        assert_eq!(keep_away(center, center, 1.0, center), center);
    }

    #[test]
    fn ball_matches_free_function() {
        let ball = ForbiddenBall::new(Point2::new(0.0, 1.0), 0.1);
        let p = Point2::new(0.0, 0.95);

        assert!(ball.contains(p));
        let q = ball.keep_away(p, Point2::new(0.0, 0.0));
        assert!((q - ball.center).magnitude() >= ball.radius - 1e-12);
        assert_eq!(q, keep_away(p, ball.center, ball.radius, Point2::new(0.0, 0.0)));
    }
}
