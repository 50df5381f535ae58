//! Property checks for segment predicates, unordered pairs, rings and export.

use levelbounds::prelude::*;
use nalgebra::vector;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn point() -> impl Strategy<Value = Point2> {
    (coord(), coord()).prop_map(|(x, y)| vector![x, y])
}

fn segment() -> impl Strategy<Value = Segment> {
    (point(), point()).prop_map(|(a, b)| Segment::new(a, b))
}

/// Integer-valued points keep the left/right arithmetic exact.
fn grid_point() -> impl Strategy<Value = Point2> {
    (-100i32..100, -100i32..100).prop_map(|(x, y)| vector![x as f64, y as f64])
}

proptest! {
    #[test]
    fn intersection_is_order_independent(s1 in segment(), s2 in segment()) {
        prop_assert_eq!(s1.intersect(&s2), s2.intersect(&s1));
    }

    #[test]
    fn translated_copies_never_intersect(a in grid_point(), b in grid_point(), off in grid_point(), flip in any::<bool>()) {
        let s = Segment::new(a, b);
        let moved = Segment::new(a + off, b + off);
        let other = if flip { moved.reversed() } else { moved };
        prop_assert!(!s.intersect(&other));
        prop_assert!(s.intersection(&other).is_none());
    }

    #[test]
    fn float_collinear_overlaps_never_intersect(
        a in point(),
        d in point(),
        u0 in -1.0..1.0f64,
        len in 0.1..2.0f64,
        flip in any::<bool>(),
    ) {
        prop_assume!(d.norm() >= 1.0);
        let s1 = Segment::new(a, a + d);
        let s2 = Segment::new(a + d * u0, a + d * (u0 + len));
        let other = if flip { s2.reversed() } else { s2 };
        prop_assert!(!s1.intersect(&other));
        prop_assert!(!other.intersect(&s1));
    }

    #[test]
    fn near_parallel_overlaps_never_intersect(
        a in point(),
        d in point(),
        u0 in -1.0..1.0f64,
        tilt in -1e-7..1e-7f64,
        flip in any::<bool>(),
    ) {
        prop_assume!(d.norm() >= 1.0);
        // Rotate the second direction by a tiny angle around its start point.
        let (sin, cos) = tilt.sin_cos();
        let rotated = vector![d.x * cos - d.y * sin, d.x * sin + d.y * cos];
        let start = a + d * u0;
        let s1 = Segment::new(a, a + d);
        let s2 = Segment::new(start, start + rotated);
        let other = if flip { s2.reversed() } else { s2 };
        prop_assert!(!s1.intersect(&other));
        prop_assert!(!other.intersect(&s1));
    }

    #[test]
    fn left_and_mirror(a in grid_point(), b in grid_point(), u in 0i32..=4, k in 1i32..10) {
        prop_assume!(a != b);
        let s = Segment::new(a, b);
        let dir = b - a;
        let normal = vector![-dir.y, dir.x];
        let base = a + dir * (u as f64 / 4.0);
        let p = base + normal * k as f64;
        let mirror = base - normal * k as f64;
        prop_assert!(s.left(p));
        prop_assert!(!s.left(mirror));
        prop_assert!(!s.left(base));
    }

    #[test]
    fn unordered_pair_commutes(x in any::<i64>(), y in any::<i64>()) {
        let p = UnorderedPair::new(x, y);
        let q = UnorderedPair::new(y, x);
        prop_assert!(p.equals(&q));
        prop_assert_eq!(p.hash_code(), q.hash_code());
    }

    #[test]
    fn append_remove_restores(pts in prop::collection::vec(grid_point(), 0..12), v in point()) {
        let mut ring = Ring::from_vertices(pts.clone());
        prop_assume!(!pts.contains(&v));
        ring.append_vertex(v);
        prop_assert!(ring.remove_vertex(v));
        prop_assert_eq!(ring.vertices(), pts.as_slice());
    }

    #[test]
    fn export_is_valid_json_with_same_coordinates(
        ext in prop::collection::vec(point(), 1..8),
        holes in prop::collection::vec(prop::collection::vec(point(), 1..6), 0..4),
    ) {
        let exterior = Ring::from_vertices(ext).with_role(RingRole::Exterior);
        let holes: Vec<Ring> = holes
            .into_iter()
            .map(|h| Ring::from_vertices(h).with_role(RingRole::Hole))
            .collect();
        let text = to_geojson(&exterior, &holes);
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(doc["type"].as_str(), Some("Polygon"));
        let rings = doc["coordinates"].as_array().unwrap();
        prop_assert_eq!(rings.len(), holes.len() + 1);
        for (json_ring, ring) in rings.iter().zip(std::iter::once(&exterior).chain(&holes)) {
            let pairs = json_ring.as_array().unwrap();
            prop_assert_eq!(pairs.len(), ring.len());
            for (pair, v) in pairs.iter().zip(ring.vertices()) {
                let x = pair[0].as_f64().unwrap();
                let y = pair[1].as_f64().unwrap();
                prop_assert!((x - v.x).abs() <= 1e-12 * v.x.abs().max(1.0));
                prop_assert!((y - v.y).abs() <= 1e-12 * v.y.abs().max(1.0));
            }
        }
    }
}
