use crate::line::Line;
use crate::reflection::{reflection, Motion2};

use cgmath::Point2;

/// What separates a zone from the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary {
    // Points strictly ahead of the line belong to a later zone
    Bounded(Line),

    // The last zone takes everything that reaches it
    Unbounded,
}

impl Boundary {
    /// Positive when `p` lies past this boundary. `Unbounded` always answers
    /// "behind".
    pub fn dot(&self, p: Point2<f64>) -> f64 {
        match self {
            Boundary::Bounded(line) => line.dot(p),
            Boundary::Unbounded => -1.0,
        }
    }

    pub fn line(&self) -> Option<&Line> {
        match self {
            Boundary::Bounded(line) => Some(line),
            Boundary::Unbounded => None,
        }
    }
}

/// The strip of the sheet between two consecutive creases, along with the
/// motion that folds it back onto zone 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub boundary: Boundary,
    pub transform: Motion2,
}

/// Builds one zone per crease line, plus a final unbounded zone.
///
/// Zone `k` is folded home by first mirroring it across crease `k - 1` (which
/// lands it in zone `k - 1`) and then applying zone `k - 1`'s own transform.
pub fn build_zones(crease_lines: &[Line]) -> Vec<Zone> {
    let mut zones: Vec<Zone> = Vec::with_capacity(crease_lines.len() + 1);

    for k in 0..=crease_lines.len() {
        let transform = match zones.last() {
            Some(previous) => {
                let line = crease_lines[k - 1];
                reflection(&line).then(&previous.transform)
            }
            None => Motion2::identity(),
        };
        let boundary = match crease_lines.get(k) {
            Some(&line) => Boundary::Bounded(line),
            None => Boundary::Unbounded,
        };
        zones.push(Zone {
            boundary,
            transform,
        });
    }

    zones
}

/// Index of the zone that owns `p`: the first zone whose boundary `p` is not
/// strictly ahead of. A point exactly on a crease stays in the lower zone.
pub fn zone_index(zones: &[Zone], p: Point2<f64>) -> usize {
    let mut k = 0;
    while k + 1 < zones.len() && zones[k].boundary.dot(p) > 0.0 {
        k += 1;
    }
    k
}
