use super::*;
use crate::cluster::cluster;
use crate::contour::Contour;

fn contour(pts: &[(f64, f64)]) -> Contour {
    Contour::from_points(pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect()).unwrap()
}

#[test]
fn test_solid_root_passes_through() {
    let root = contour(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let looped = stitch(&Cluster::solid(root.clone())).unwrap();
    assert_eq!(looped.points, root.points);
    assert_eq!(looped.indices, vec![0, 1, 2, 3]);
    assert_eq!(looped.vertex_count(), 4);
}

#[test]
fn test_square_with_square_hole() {
    let outer = contour(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let inner = contour(&[(3.0, 3.0), (3.0, 7.0), (7.0, 7.0), (7.0, 3.0)]);
    let clusters = cluster(&[outer, inner]);
    assert_eq!(clusters.len(), 1);

    let looped = stitch(&clusters[0]).unwrap();
    // 4 outer + 4 hole + 2 bridge duplicates.
    assert_eq!(looped.vertex_count(), 10);
    assert_eq!(looped.points.len(), 8);

    // The nearest pair is (0,0)-(3,3); the walk leaves the root at index 0,
    // circles the hole, returns over the duplicated bridge vertex, then
    // resumes the root.
    assert_eq!(looped.indices, vec![0, 4, 5, 6, 7, 4, 0, 1, 2, 3]);
    assert_eq!(looped.points[4], Vec2::new(3.0, 3.0));
}

#[test]
fn test_hole_points_rotated_to_bridge_vertex() {
    // Same hole, listed so its nearest vertex to the root corner is not
    // first. The appended points must start at the bridge vertex anyway.
    let outer = contour(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let inner = contour(&[(7.0, 7.0), (7.0, 3.0), (3.0, 3.0), (3.0, 7.0)]);
    let clusters = cluster(&[outer, inner]);
    let looped = stitch(&clusters[0]).unwrap();

    assert_eq!(looped.vertex_count(), 10);
    assert_eq!(looped.points[4], Vec2::new(3.0, 3.0));
    assert_eq!(looped.points[5], Vec2::new(3.0, 7.0));
    assert_eq!(looped.points[6], Vec2::new(7.0, 7.0));
    assert_eq!(looped.points[7], Vec2::new(7.0, 3.0));
}

#[test]
fn test_two_holes_grow_loop_by_len_plus_two_each() {
    let outer = contour(&[(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)]);
    let hole_a = contour(&[(2.0, 2.0), (2.0, 8.0), (8.0, 8.0), (8.0, 2.0)]);
    let hole_b = contour(&[(12.0, 2.0), (12.0, 8.0), (18.0, 8.0), (18.0, 2.0)]);
    let clusters = cluster(&[outer, hole_a, hole_b]);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].holes.len(), 2);

    let looped = stitch(&clusters[0]).unwrap();
    assert_eq!(looped.points.len(), 12);
    assert_eq!(looped.vertex_count(), 4 + (4 + 2) + (4 + 2));

    // Every index addresses the combined point list.
    assert!(looped
        .indices
        .iter()
        .all(|&i| (i as usize) < looped.points.len()));
}

#[test]
fn test_loop_never_crosses_itself() {
    // Walk the stitched square-in-square loop and check no two
    // non-adjacent segments intersect properly.
    let outer = contour(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let inner = contour(&[(3.0, 3.0), (3.0, 7.0), (7.0, 7.0), (7.0, 3.0)]);
    let clusters = cluster(&[outer, inner]);
    let looped = stitch(&clusters[0]).unwrap();

    let walk: Vec<Vec2> = looped
        .indices
        .iter()
        .map(|&i| looped.points[i as usize])
        .collect();
    let n = walk.len();

    let orient = |a: Vec2, b: Vec2, c: Vec2| (b - a).perp_dot(c - a);
    let proper_cross = |a: Vec2, b: Vec2, c: Vec2, d: Vec2| {
        orient(a, b, c) * orient(a, b, d) < 0.0 && orient(c, d, a) * orient(c, d, b) < 0.0
    };

    for i in 0..n {
        let (a, b) = (walk[i], walk[(i + 1) % n]);
        for j in i + 1..n {
            // Skip adjacent segments (they share an endpoint).
            if j == i || (j + 1) % n == i || (i + 1) % n == j {
                continue;
            }
            let (c, d) = (walk[j], walk[(j + 1) % n]);
            assert!(!proper_cross(a, b, c, d), "segments {i} and {j} cross");
        }
    }
}

#[test]
fn test_degenerate_root_is_rejected() {
    // Bypass the contour constructor to model malformed upstream geometry.
    let bad = Cluster {
        root: Contour {
            points: vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)],
        },
        holes: Vec::new(),
    };
    let err = stitch(&bad).unwrap_err();
    assert!(err.to_string().contains("Degenerate"));
}

#[test]
fn test_empty_hole_contributes_nothing() {
    let bad_hole = Contour { points: Vec::new() };
    let c = Cluster {
        root: contour(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
        holes: vec![bad_hole],
    };
    let looped = stitch(&c).unwrap();
    assert_eq!(looped.indices, vec![0, 1, 2, 3]);
}
