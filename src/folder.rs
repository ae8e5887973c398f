use crate::crease::Creaser;
use crate::error::FoldError;
use crate::face::Face;
use crate::line::Line;
use crate::zone::build_zones;

use tracing::{debug, trace};

/// Folds `faces` along every line in `crease_lines`, accordion style, and
/// returns the flattened stack of fragments.
///
/// Each face is cut into one fragment per zone. Every fragment is then mirrored
/// back onto zone 0, and fragments from odd zones have their winding reversed
/// and their `side` flipped, since they now show the other side of the paper.
///
/// The output is ordered top to bottom: fragments from the last zone come
/// first, fragments from zone 0 last. Drawing them in order with no depth test
/// stacks the layers correctly.
///
/// With no crease lines this is a plain copy of `faces`.
pub fn fold(faces: &[Face], crease_lines: &[Line]) -> Result<Vec<Face>, FoldError> {
    if let Some(index) = crease_lines.iter().position(Line::is_degenerate) {
        return Err(FoldError::InvalidGeometry { index });
    }
    if crease_lines.is_empty() {
        return Ok(faces.to_vec());
    }

    let zones = build_zones(crease_lines);
    let mut zone_faces: Vec<Vec<Face>> = vec![vec![]; zones.len()];

    let mut creaser = Creaser::new(&zones);
    for (i, face) in faces.iter().enumerate() {
        creaser.crease(face);

        for (k, fragment) in creaser.fragments().enumerate() {
            if fragment.len() < 3 {
                if !fragment.is_empty() {
                    trace!(face = i, zone = k, vertices = fragment.len(), "dropping degenerate fragment");
                }
                continue;
            }
            zone_faces[k].push(Face::new(fragment.to_vec(), face.side));
        }
    }

    let mut output = Vec::with_capacity(zone_faces.iter().map(Vec::len).sum());
    for (k, (zone, fragments)) in zones.iter().zip(zone_faces).enumerate().rev() {
        for mut fragment in fragments {
            if k > 0 {
                for vertex in fragment.vertices.iter_mut() {
                    vertex.position = zone.transform.transform_point(vertex.position);
                }
            }
            if k % 2 == 1 {
                fragment.vertices.reverse();
                fragment.side = !fragment.side;
            }
            output.push(fragment);
        }
    }

    debug!(
        faces = faces.len(),
        creases = crease_lines.len(),
        fragments = output.len(),
        "folded"
    );

    Ok(output)
}
