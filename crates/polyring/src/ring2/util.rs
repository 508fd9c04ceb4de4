use nalgebra::Vector2;

/// Absolute-tolerance equality of two doubles.
#[inline]
pub fn fuzzy_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Component-wise fuzzy equality of two points.
#[inline]
pub fn fuzzy_eq_pt(p: Vector2<f64>, q: Vector2<f64>, eps: f64) -> bool {
    fuzzy_eq(p.x, q.x, eps) && fuzzy_eq(p.y, q.y, eps)
}

/// z-component of `(p1 - p0) × (p2 - p0)`; positive for a left (CCW) turn.
#[inline]
pub fn z_cross(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> f64 {
    let a = p1 - p0;
    let b = p2 - p0;
    a.x * b.y - a.y * b.x
}

/// True iff `p` lies within `eps` of the closed segment `a–b`.
///
/// A zero-length segment degenerates to a point-distance test against `a`.
pub fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>, eps: f64) -> bool {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= eps * eps {
        return (p - a).norm() <= eps;
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (a + ab * t - p).norm() <= eps
}

/// Crossing point of the closed segments `p1–p2` and `q1–q2`.
///
/// Returns `None` for parallel (including collinear) segments and for segments
/// whose supporting lines meet outside either segment. `eps_parallel` is
/// relative to the product of the segment lengths; `eps` widens the parameter
/// range so that endpoint hits survive rounding.
pub fn segment_intersection(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    q1: Vector2<f64>,
    q2: Vector2<f64>,
    eps_parallel: f64,
    eps: f64,
) -> Option<Vector2<f64>> {
    let r = p2 - p1;
    let s = q2 - q1;
    let denom = r.x * s.y - r.y * s.x;
    let scale = r.norm() * s.norm();
    if scale <= 0.0 || denom.abs() <= eps_parallel * scale {
        return None;
    }
    let qp = q1 - p1;
    let t = (qp.x * s.y - qp.y * s.x) / denom;
    let u = (qp.x * r.y - qp.y * r.x) / denom;
    let t_eps = eps / r.norm();
    let u_eps = eps / s.norm();
    if t < -t_eps || t > 1.0 + t_eps || u < -u_eps || u > 1.0 + u_eps {
        return None;
    }
    Some(p1 + r * t)
}

/// Linear blend `p * w + q * (1 - w)`.
#[inline]
pub fn blend(p: Vector2<f64>, q: Vector2<f64>, w: f64) -> Vector2<f64> {
    p * w + q * (1.0 - w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn z_cross_sign_follows_turn_direction() {
        let o = vector![0.0, 0.0];
        let x = vector![1.0, 0.0];
        assert!(z_cross(o, x, vector![1.0, 1.0]) > 0.0);
        assert!(z_cross(o, x, vector![1.0, -1.0]) < 0.0);
        assert_eq!(z_cross(o, x, vector![2.0, 0.0]), 0.0);
    }

    #[test]
    fn on_segment_is_closed_and_tolerant() {
        let a = vector![0.0, 0.0];
        let b = vector![10.0, 0.0];
        assert!(on_segment(a, b, a, 1e-9));
        assert!(on_segment(a, b, b, 1e-9));
        assert!(on_segment(a, b, vector![5.0, 1e-12], 1e-9));
        assert!(!on_segment(a, b, vector![5.0, 1e-3], 1e-9));
        assert!(!on_segment(a, b, vector![10.5, 0.0], 1e-9));
        // degenerate segment
        assert!(on_segment(a, a, vector![0.0, 0.0], 1e-9));
        assert!(!on_segment(a, a, vector![0.0, 1.0], 1e-9));
    }

    #[test]
    fn segment_intersection_cases() {
        let p = segment_intersection(
            vector![0.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![2.0, 0.0],
            1e-9,
            1e-9,
        )
        .expect("crossing diagonals");
        assert!((p - vector![1.0, 1.0]).norm() < 1e-12);

        // parallel
        assert!(segment_intersection(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            1e-9,
            1e-9
        )
        .is_none());
        // lines meet outside the second segment
        assert!(segment_intersection(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.5, 1.0],
            vector![0.5, 2.0],
            1e-9,
            1e-9
        )
        .is_none());
    }

    #[test]
    fn blend_weights() {
        let p = blend(vector![1.0, 0.0], vector![0.0, 0.0], 0.95);
        assert!((p.x - 0.95).abs() < 1e-15 && p.y == 0.0);
    }
}
