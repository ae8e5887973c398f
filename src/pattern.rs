use crate::face::{Face, Vertex};

use cgmath::Point2;

/// Something that can lay out a fresh, unfolded sheet.
pub trait Pattern {
    fn faces(&self) -> Vec<Face>;
}

/// A square sheet with its lower-left corner at the origin, front side up.
pub struct Square {
    pub size: f64,
}

impl Default for Square {
    fn default() -> Square {
        Square { size: 1.0 }
    }
}

impl Pattern for Square {
    fn faces(&self) -> Vec<Face> {
        Rectangle {
            width: self.size,
            height: self.size,
        }
        .faces()
    }
}

/// A rectangular sheet with its lower-left corner at the origin. The whole
/// texture is stretched over it.
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Pattern for Rectangle {
    fn faces(&self) -> Vec<Face> {
        let (w, h) = (self.width, self.height);
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let vertices = corners
            .iter()
            .map(|&(u, v)| Vertex::new(Point2::new(u * w, v * h), Point2::new(u, v)))
            .collect();
        vec![Face::new(vertices, true)]
    }
}

/// A regular polygon centered on the origin, counter-clockwise, with its first
/// corner on the +x axis. The texture's unit square is mapped onto the
/// polygon's circumscribed box.
pub struct RegularPolygon {
    pub sides: usize,
    pub radius: f64,
}

impl Pattern for RegularPolygon {
    fn faces(&self) -> Vec<Face> {
        if self.sides < 3 {
            return vec![];
        }
        let r = self.radius;
        let vertices = (0..self.sides)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * i as f64 / self.sides as f64;
                let (s, c) = theta.sin_cos();
                Vertex::new(
                    Point2::new(r * c, r * s),
                    Point2::new(0.5 + 0.5 * c, 0.5 + 0.5 * s),
                )
            })
            .collect();
        vec![Face::new(vertices, true)]
    }
}
