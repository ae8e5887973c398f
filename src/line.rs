use cgmath::{InnerSpace, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// An infinite line in the plane of the sheet, stored as a point on the line
/// and a (not necessarily unit) normal vector.
///
/// The side of the line that the normal points towards is "ahead" of the line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    // Any point that lies on the line
    pub origin: Point2<f64>,

    // The direction that counts as "ahead" of the line
    pub normal: Vector2<f64>,
}

impl Line {
    pub fn new(origin: Point2<f64>, normal: Vector2<f64>) -> Line {
        Line { origin, normal }
    }

    /// Builds the line running from `origin` through `other`. The normal is the
    /// direction `other - origin` turned 90 degrees clockwise, so with the
    /// usual y-up axes everything to the right of the direction of travel is
    /// ahead of the line.
    pub fn from_points(origin: Point2<f64>, other: Point2<f64>) -> Line {
        Line {
            origin,
            normal: rotate_right(other - origin),
        }
    }

    /// Signed distance proxy `(p - origin) · normal`. It is scaled by the
    /// length of the normal, so only its sign is meaningful on its own.
    pub fn dot(&self, p: Point2<f64>) -> f64 {
        (p - self.origin).dot(self.normal)
    }

    /// A crease line must have a finite, non-zero normal to define a
    /// reflection.
    pub fn is_degenerate(&self) -> bool {
        let length2 = self.normal.magnitude2();
        !(length2 > 0.0 && length2.is_finite() && self.origin.x.is_finite() && self.origin.y.is_finite())
    }

    /// The point of the line closest to `p`.
    pub fn project(&self, p: Point2<f64>) -> Point2<f64> {
        p - self.normal * (self.dot(p) / self.normal.magnitude2())
    }
}

/// Rotates `v` by 90 degrees clockwise.
pub fn rotate_right(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(v.y, -v.x)
}
