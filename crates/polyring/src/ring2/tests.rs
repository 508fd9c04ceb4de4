use super::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};

fn square(x: f64, y: f64, s: f64) -> Ring2 {
    Ring2::from_xy(&[[x, y], [x + s, y], [x + s, y + s], [x, y + s]])
}

fn sample(seed: u64, index: u64) -> Ring2 {
    draw_ring_radial(RadialCfg::default(), ReplayToken { seed, index })
}

fn close(a: &[Vector2<f64>], b: &[Vector2<f64>], tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| (p - q).norm() <= tol)
}

/// Fan triangulation from vertex 0 (valid for convex rings).
fn fan_area(r: &Ring2) -> f64 {
    let p = r.points();
    (1..p.len() - 1)
        .map(|k| 0.5 * z_cross(p[0], p[k], p[k + 1]))
        .sum()
}

#[test]
fn shoelace_matches_fan_triangulation_on_convex_rings() {
    let mut rng = StdRng::seed_from_u64(2024);
    for index in 0..50 {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 16 },
            radial_jitter: 0.0,
            radius: rng.gen_range(0.5..20.0),
            center: vector![rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)],
            ..RadialCfg::default()
        };
        let mut r = draw_ring_radial(cfg, ReplayToken { seed: 3, index });
        assert!(r.is_convex());
        let a = r.area();
        assert!((a - fan_area(&r)).abs() <= 1e-9 * a.abs().max(1.0));
        r.reverse();
        assert!((r.area() + a).abs() <= 1e-9 * a.abs().max(1.0));
    }
}

#[test]
fn union_then_classify_pipeline() {
    let mut a = square(0.0, 0.0, 1.0);
    let mut b = square(0.0, 0.0, 1.0);
    b.set_position(vector![1.0, 0.0], 0).unwrap();
    a.set_anticlockwise();
    b.set_anticlockwise();
    assert_eq!(a.crossing(&b), BoundaryCrossing::Ambiguous);
    let u = a.union(&b);
    assert!(u.is_anticlockwise());
    assert_eq!(u.len(), 4);
    assert!(u.is_convex());
    assert!(u.is_rectangle(1e-12));
    assert!((u.area() - 2.0).abs() < 1e-9);
    assert_eq!(u.bounds(), Some(Rect2::new(0.0, 0.0, 2.0, 1.0)));
}

proptest! {
    #[test]
    fn rotate_round_trip(theta in -720.0f64..720.0, index in 0u64..500) {
        let r0 = sample(11, index);
        let mut r = r0.clone();
        r.rotate(theta);
        r.rotate(-theta);
        prop_assert!(close(r.points(), r0.points(), 1e-9));
        let (b, b0) = (r.bounds().unwrap(), r0.bounds().unwrap());
        prop_assert!((b.min() - b0.min()).norm() < 1e-9 && (b.max() - b0.max()).norm() < 1e-9);
    }

    #[test]
    fn translate_round_trip(dx in -1e3f64..1e3, dy in -1e3f64..1e3, index in 0u64..500) {
        let r0 = sample(12, index);
        let mut r = r0.clone();
        r.translate(dx, dy);
        let b = r.bounds().unwrap();
        let b0 = r0.bounds().unwrap();
        prop_assert!((b.x() - b0.x() - dx).abs() < 1e-9 && (b.y() - b0.y() - dy).abs() < 1e-9);
        r.translate(-dx, -dy);
        prop_assert!(close(r.points(), r0.points(), 1e-9));
    }

    #[test]
    fn rotation_preserves_area(theta in -360.0f64..360.0, index in 0u64..500) {
        let mut r = sample(13, index);
        let a = r.area();
        r.rotate(theta);
        prop_assert!((r.area() - a).abs() < 1e-9);
    }

    #[test]
    fn bounds_are_tight(index in 0u64..500) {
        let r = sample(14, index);
        let b = r.bounds().unwrap();
        prop_assert!(r.points().iter().all(|p| b.contains(*p)));
        let pts = r.points();
        prop_assert!(pts.iter().any(|p| p.x == b.left()));
        prop_assert!(pts.iter().any(|p| p.x == b.right()));
        prop_assert!(pts.iter().any(|p| p.y == b.bottom()));
        prop_assert!(pts.iter().any(|p| p.y == b.top()));
    }

    #[test]
    fn set_anticlockwise_is_idempotent(index in 0u64..500, flip in any::<bool>()) {
        let mut r = sample(15, index);
        if flip {
            r.reverse();
        }
        r.set_anticlockwise();
        let once = r.clone();
        r.set_anticlockwise();
        prop_assert_eq!(&r, &once);
        prop_assert!(r.is_anticlockwise());
    }

    #[test]
    fn set_location_lands_bbox_origin(x in -100.0f64..100.0, y in -100.0f64..100.0, index in 0u64..200) {
        let mut r = sample(16, index);
        r.set_location_xy(x, y).unwrap();
        let b = r.bounds().unwrap();
        prop_assert!((b.x() - x).abs() < 1e-9 && (b.y() - y).abs() < 1e-9);
    }

    #[test]
    fn offset_squares_cross_both_ways(s in 1.0f64..10.0, fx in 0.1f64..0.9, fy in 0.1f64..0.9) {
        let a = square(0.0, 0.0, s);
        let b = square(fx * s, fy * s, s);
        prop_assert_eq!(a.crossing(&b), BoundaryCrossing::Crossing);
        prop_assert_eq!(b.crossing(&a), BoundaryCrossing::Crossing);
    }

    #[test]
    fn side_by_side_rectangles_union_area(w1 in 0.5f64..5.0, w2 in 0.5f64..5.0, h in 0.5f64..5.0) {
        let a = Ring2::from_xy(&[[0.0, 0.0], [w1, 0.0], [w1, h], [0.0, h]]);
        let b = Ring2::from_xy(&[[w1, 0.0], [w1 + w2, 0.0], [w1 + w2, h], [w1, h]]);
        let u = a.try_union(&b).unwrap();
        prop_assert!((u.area() - (w1 + w2) * h).abs() < 1e-9);
        prop_assert_eq!(u.len(), 4);
        let bb = u.bounds().unwrap();
        prop_assert!((bb.width() - (w1 + w2)).abs() < 1e-9 && (bb.height() - h).abs() < 1e-9);
    }
}
