use crate::forbidden::keep_away;
use crate::line::{rotate_right, Line};

use cgmath::{InnerSpace, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// How close the two axis points may get to each other.
pub const AXIS_EXCLUSION_RADIUS: f64 = 0.1;

/// Wing radius a fresh control starts with, on both ends.
pub const DEFAULT_WING_RADIUS: f64 = 0.1;

/// The three lines describing a single pleat: the axis it folds around and
/// the two lines bounding the strip of paper it swallows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shortcut {
    pub line0: Line,
    pub line1: Line,
    pub axis: Line,
}

impl Shortcut {
    /// The creases handed to the fold engine: the near wing line, then the
    /// axis.
    pub fn crease_lines(&self) -> [Line; 2] {
        [self.line0, self.axis]
    }
}

/// The draggable handles that define a [`Shortcut`]: two axis points, and one
/// wing point per axis point that sets how wide the pleat is at that end.
///
/// Wing points always sit on the axis normal through their axis point; only
/// their signed distance along that normal (the wing radius) is free.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortcutControl {
    axis_points: [Point2<f64>; 2],
    wing_radii: [f64; 2],
    axis_normal: Vector2<f64>,
}

impl ShortcutControl {
    /// A control whose axis runs just left of the unit square, from bottom to
    /// top.
    pub fn new() -> ShortcutControl {
        ShortcutControl {
            axis_points: [Point2::new(-0.05, -0.05), Point2::new(-0.05, 1.05)],
            wing_radii: [DEFAULT_WING_RADIUS, DEFAULT_WING_RADIUS],
            axis_normal: Vector2::new(1.0, 0.0),
        }
    }

    /// Returns `None` if the axis points coincide, since the axis would have
    /// no direction.
    pub fn with_handles(axis_points: [Point2<f64>; 2], wing_radii: [f64; 2]) -> Option<ShortcutControl> {
        let axis_normal = normal_between(axis_points[0], axis_points[1])?;
        Some(ShortcutControl {
            axis_points,
            wing_radii,
            axis_normal,
        })
    }

    pub fn axis_point(&self, i: usize) -> Point2<f64> {
        self.axis_points[i]
    }

    pub fn wing_radius(&self, i: usize) -> f64 {
        self.wing_radii[i]
    }

    /// Unit normal of the axis, pointing to the right of `a0 -> a1`.
    pub fn axis_normal(&self) -> Vector2<f64> {
        self.axis_normal
    }

    pub fn wing_point(&self, i: usize) -> Point2<f64> {
        self.axis_points[i] + self.axis_normal * self.wing_radii[i]
    }

    /// Drags axis point `i` to `position`. The point is kept at least
    /// [`AXIS_EXCLUSION_RADIUS`] away from the other axis point, so the axis
    /// never collapses. Returns where the point actually ended up.
    pub fn move_axis_point(&mut self, i: usize, position: Point2<f64>) -> Point2<f64> {
        let previous = self.axis_points[i];
        let other = self.axis_points[1 - i];
        let position = keep_away(position, other, AXIS_EXCLUSION_RADIUS, previous);

        self.axis_points[i] = position;
        if let Some(normal) = normal_between(self.axis_points[0], self.axis_points[1]) {
            self.axis_normal = normal;
        }
        position
    }

    /// Drags wing point `i` towards `position`. Only the component along the
    /// axis normal is kept. Returns the constrained wing point.
    pub fn move_wing_point(&mut self, i: usize, position: Point2<f64>) -> Point2<f64> {
        self.wing_radii[i] = (position - self.axis_points[i]).dot(self.axis_normal);
        self.wing_point(i)
    }

    /// The four corners of the pleat: both sides of `a0`, then both sides of
    /// `a1` in reverse, so the corners go around the quad.
    pub fn quad(&self) -> [Point2<f64>; 4] {
        let [a0, a1] = self.axis_points;
        let w0 = self.axis_normal * self.wing_radii[0].abs();
        let w1 = self.axis_normal * self.wing_radii[1].abs();
        [a0 - w0, a0 + w0, a1 + w1, a1 - w1]
    }

    pub fn shortcut(&self) -> Shortcut {
        let quad = self.quad();
        Shortcut {
            line0: Line::from_points(quad[0], quad[3]),
            line1: Line::from_points(quad[1], quad[2]),
            axis: Line::from_points(self.axis_points[0], self.axis_points[1]),
        }
    }
}

impl Default for ShortcutControl {
    fn default() -> ShortcutControl {
        ShortcutControl::new()
    }
}

fn normal_between(a0: Point2<f64>, a1: Point2<f64>) -> Option<Vector2<f64>> {
    let normal = rotate_right(a1 - a0);
    let length = normal.magnitude();
    if length > 0.0 && length.is_finite() {
        Some(normal / length)
    } else {
        None
    }
}
