use crate::line::rotate_right;

use cgmath::{EuclideanSpace, InnerSpace, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A polygon corner: where it sits in the plane, and which point of the
/// texture is pinned to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point2<f64>,
    pub uv: Point2<f64>,
}

impl Vertex {
    pub fn new(position: Point2<f64>, uv: Point2<f64>) -> Vertex {
        Vertex { position, uv }
    }

    /// Interpolates position and uv together, `t = 0` giving `self`.
    pub fn lerp(&self, other: &Vertex, t: f64) -> Vertex {
        Vertex {
            position: self.position + (other.position - self.position) * t,
            uv: self.uv + (other.uv - self.uv) * t,
        }
    }
}

/// A simple polygon of the sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Face {
    // The corners of this face, in traversal order
    pub vertices: Vec<Vertex>,

    // Whether this face shows the front of the paper (`true`) or its back
    pub side: bool,
}

impl Face {
    pub fn new(vertices: Vec<Vertex>, side: bool) -> Face {
        Face { vertices, side }
    }

    /// Builds a face whose uvs are the positions themselves, which is what a
    /// sheet spanning `[0, 1]²` wants.
    pub fn from_positions(positions: &[Point2<f64>], side: bool) -> Face {
        Face {
            vertices: positions.iter().map(|&p| Vertex::new(p, p)).collect(),
            side,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Point2<f64>> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Shoelace area, positive for counter-clockwise faces.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut twice = 0.0;
        for j in 0..n {
            let p0 = self.vertices[j].position;
            let p1 = self.vertices[(j + 1) % n].position;
            twice += p0.x * p1.y - p1.x * p0.y;
        }
        0.5 * twice
    }

    pub fn centroid(&self) -> Option<Point2<f64>> {
        if self.vertices.is_empty() {
            return None;
        }
        Some(Point2::centroid(
            &self.vertices.iter().map(|v| v.position).collect::<Vec<_>>(),
        ))
    }

    /// Splits the face into a triangle fan anchored at its last vertex:
    /// triangle `j` is `(v[j], v[j + 1], v[n - 1])`.
    ///
    /// Only valid for convex faces, which is all the creaser ever produces
    /// from convex input.
    pub fn triangles(&self) -> Vec<[Vertex; 3]> {
        let n = self.vertices.len();
        if n < 3 {
            return vec![];
        }
        let anchor = self.vertices[n - 1];
        (0..n - 2)
            .map(|j| [self.vertices[j], self.vertices[j + 1], anchor])
            .collect()
    }

    /// One outward unit normal per edge (for counter-clockwise faces), edge `j`
    /// running from vertex `j - 1` to vertex `j`. Zero-length edges get a zero
    /// normal.
    pub fn edge_normals(&self) -> Vec<Vector2<f64>> {
        let n = self.vertices.len();
        (0..n)
            .map(|j| {
                let p0 = self.vertices[(j + n - 1) % n].position;
                let p1 = self.vertices[j].position;
                let normal = rotate_right(p1 - p0);
                if normal.magnitude2() > 0.0 {
                    normal.normalize()
                } else {
                    normal
                }
            })
            .collect()
    }
}

/// An axis-aligned box in the plane of the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Bounds2 {
    pub fn from_points<I>(points: I) -> Option<Bounds2>
    where
        I: IntoIterator<Item = Point2<f64>>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Bounds2 {
            min: first,
            max: first,
        };
        for p in points {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    pub fn from_faces(faces: &[Face]) -> Option<Bounds2> {
        Bounds2::from_points(faces.iter().flat_map(|face| face.positions()))
    }

    pub fn center(&self) -> Point2<f64> {
        self.min.midpoint(self.max)
    }

    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }
}
