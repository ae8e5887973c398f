use approx::assert_relative_eq;
use cgmath::{Point2, Vector2};
use folding::crease::Creaser;
use folding::pattern::{Pattern, Square};
use folding::{build_zones, fold, Face, FoldError, Line};

fn unit_square() -> Face {
    Square::default().faces().remove(0)
}

fn vertical(x: f64) -> Line {
    Line::new(Point2::new(x, 0.0), Vector2::new(1.0, 0.0))
}

fn assert_positions(face: &Face, expected: &[(f64, f64)]) {
    assert_eq!(face.vertices.len(), expected.len(), "vertex count of {:?}", face);
    for (v, &(x, y)) in face.vertices.iter().zip(expected.iter()) {
        assert_relative_eq!(v.position.x, x, epsilon = 1e-9);
        assert_relative_eq!(v.position.y, y, epsilon = 1e-9);
    }
}

#[test]
fn single_crease_folds_right_half_over() {
    let folded = fold(&[unit_square()], &[vertical(0.5)]).unwrap();

    assert_eq!(folded.len(), 2);

    // Zone 1 comes first: mirrored onto [0, 0.5], reversed, showing its back
    assert!(!folded[0].side);
    assert_positions(&folded[0], &[(0.5, 1.0), (0.0, 1.0), (0.0, 0.0), (0.5, 0.0)]);
    let uvs: Vec<Point2<f64>> = folded[0].vertices.iter().map(|v| v.uv).collect();
    assert_eq!(
        uvs,
        vec![
            Point2::new(0.5, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.0),
        ]
    );

    // Zone 0 stays put
    assert!(folded[1].side);
    assert_positions(&folded[1], &[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (0.0, 1.0)]);
}

#[test]
fn two_parallel_creases_make_an_accordion() {
    let folded = fold(&[unit_square()], &[vertical(0.33), vertical(0.66)]).unwrap();

    assert_eq!(folded.len(), 3);
    assert_eq!(
        folded.iter().map(|f| f.side).collect::<Vec<_>>(),
        vec![true, false, true]
    );

    // Zone 2, mirrored twice, is back to front-up and keeps its winding
    assert_positions(&folded[0], &[(0.0, 0.0), (0.34, 0.0), (0.34, 1.0), (0.0, 1.0)]);
    // Zone 1 is mirrored once and reversed
    assert_positions(&folded[1], &[(0.33, 1.0), (0.0, 1.0), (0.0, 0.0), (0.33, 0.0)]);
    // Zone 0 is untouched
    assert_positions(&folded[2], &[(0.0, 0.0), (0.33, 0.0), (0.33, 1.0), (0.0, 1.0)]);
}

#[test]
fn folded_fragments_keep_input_winding() {
    let folded = fold(&[unit_square()], &[vertical(0.2), vertical(0.45), vertical(0.8)]).unwrap();

    assert_eq!(folded.len(), 4);
    for face in folded.iter() {
        assert!(face.signed_area() > 0.0, "{:?} flipped its winding", face);
    }
}

#[test]
fn odd_zones_are_exactly_reversed() {
    let lines = [vertical(0.25), vertical(0.5)];
    let zones = build_zones(&lines);
    let mut creaser = Creaser::new(&zones);
    creaser.crease(&unit_square());

    let folded = fold(&[unit_square()], &lines).unwrap();
    // Output order is zone 2, zone 1, zone 0
    let zone1 = &folded[1];

    let mut expected: Vec<Point2<f64>> = creaser
        .fragment(1)
        .iter()
        .map(|v| zones[1].transform.transform_point(v.position))
        .collect();
    expected.reverse();

    assert!(!zone1.side);
    assert_eq!(zone1.positions().collect::<Vec<_>>(), expected);
}

#[test]
fn layers_are_ordered_by_zone_across_faces() {
    let left = unit_square();
    let mut right = unit_square();
    for v in right.vertices.iter_mut() {
        v.position.x += 2.0;
    }
    let mut flipped = unit_square();
    flipped.side = false;

    // `left` is split, `right` lies entirely past the crease, `flipped` is
    // split and starts out showing its back
    let folded = fold(&[left, right, flipped], &[vertical(0.5)]).unwrap();

    assert_eq!(folded.len(), 5);
    let sides: Vec<bool> = folded.iter().map(|f| f.side).collect();
    assert_eq!(sides, vec![false, false, true, true, false]);

    // The whole right square is mirrored onto [-2, -1]
    assert!(folded[1].positions().all(|p| p.x >= -2.0 - 1e-12 && p.x <= -1.0 + 1e-12));
}

#[test]
fn no_creases_is_an_explicit_copy() {
    let faces = vec![unit_square()];
    let folded = fold(&faces, &[]).unwrap();

    assert_eq!(folded, faces);
}

#[test]
fn invalid_crease_produces_nothing() {
    let degenerate = Line::from_points(Point2::new(0.3, 0.3), Point2::new(0.3, 0.3));

    assert_eq!(
        fold(&[unit_square()], &[degenerate]),
        Err(FoldError::InvalidGeometry { index: 0 })
    );
}

#[test]
fn crease_touching_a_corner_leaves_face_whole() {
    // The crease only touches one corner of the triangle, which stays in the
    // lower zone, so the upper zone gets nothing
    let triangle = Face::from_positions(
        &[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ],
        true,
    );
    let folded = fold(&[triangle.clone()], &[vertical(1.0)]).unwrap();

    assert_eq!(folded, vec![triangle]);
}
