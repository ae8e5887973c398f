use crate::face::{Face, Vertex};
use crate::zone::{zone_index, Zone};

/// Splits faces into per-zone fragments.
///
/// The fragment buffers are reused from one face to the next; each call to
/// [`Creaser::crease`] starts by clearing them.
pub struct Creaser<'a> {
    zones: &'a [Zone],
    fragments: Vec<Vec<Vertex>>,
}

impl<'a> Creaser<'a> {
    pub fn new(zones: &'a [Zone]) -> Creaser<'a> {
        Creaser {
            zones,
            fragments: vec![vec![]; zones.len()],
        }
    }

    /// Walks the corners of `face` in order, appending each one to the
    /// fragment of the zone it falls in. Whenever an edge crosses one or more
    /// creases, the crossing point is appended to the fragments on both sides
    /// of each crease, so that every fragment stays a closed polygon.
    pub fn crease(&mut self, face: &Face) {
        for fragment in self.fragments.iter_mut() {
            fragment.clear();
        }

        let vertices = &face.vertices;
        let vertex_count = vertices.len();
        if vertex_count == 0 {
            return;
        }

        let mut v1 = vertices[0];
        let mut k1 = zone_index(self.zones, v1.position);
        self.fragments[k1].push(v1);

        for j in 1..=vertex_count {
            let v0 = v1;
            let k0 = k1;

            // The last edge closes the polygon back onto the pre-seeded vertex
            let closing = j == vertex_count;
            v1 = vertices[j % vertex_count];
            k1 = zone_index(self.zones, v1.position);

            if k0 < k1 {
                for k in k0..k1 {
                    self.push_crossing(k, &v0, &v1);
                }
            } else if k1 < k0 {
                for k in (k1..k0).rev() {
                    self.push_crossing(k, &v0, &v1);
                }
            }

            if !closing {
                self.fragments[k1].push(v1);
            }
        }
    }

    /// The fragment accumulated for zone `k` by the last call to `crease`.
    pub fn fragment(&self, k: usize) -> &[Vertex] {
        &self.fragments[k]
    }

    pub fn fragments(&self) -> impl Iterator<Item = &[Vertex]> + '_ {
        self.fragments.iter().map(|fragment| fragment.as_slice())
    }

    /// Appends the point where `v0 -> v1` crosses the boundary of zone `k` to
    /// both zone `k` and zone `k + 1`.
    fn push_crossing(&mut self, k: usize, v0: &Vertex, v1: &Vertex) {
        let boundary = &self.zones[k].boundary;
        let d0 = boundary.dot(v0.position);
        let d1 = boundary.dot(v1.position);
        let crossing = v0.lerp(v1, d0 / (d0 - d1));

        self.fragments[k].push(crossing);
        self.fragments[k + 1].push(crossing);
    }
}
