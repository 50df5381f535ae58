//! Directed line segment with intersection and side-of-line predicates.
//!
//! Conventions
//! - Parallel directions never intersect, including collinear overlapping
//!   segments. Unit directions count as equal (or opposite) when their squared
//!   distance is below `PARALLEL_EPS_SQ`, so float segments on one line whose
//!   normalized directions differ by rounding are still parallel. Directions of
//!   length at most `DEGENERATE_LEN` count as parallel to everything.
//! - Parameters are accepted by clamp-then-compare, so values pushed outside
//!   [0, 1] by rounding are rejected rather than rounded in. NaN and infinite
//!   parameters fail the comparison as well.
//! - `left` is strict and one-sided: points within `LEFT_EPS` of the line (in
//!   line-equation units) are not left.

use super::types::{cross, GeomCfg, Point2, LEFT_EPS};

/// Directed segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
}

impl Segment {
    #[inline]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn direction(&self) -> Point2 {
        self.b - self.a
    }

    /// True if the segments share a point (endpoint touches included).
    #[inline]
    pub fn intersect(&self, other: &Segment) -> bool {
        self.intersection(other).is_some()
    }

    /// Intersection point `a + t·(b − a)` if the segments cross or touch.
    #[inline]
    pub fn intersection(&self, other: &Segment) -> Option<Point2> {
        self.intersection_cfg(other, GeomCfg::default())
    }

    /// `intersection` with parallelism tolerances taken from a `GeomCfg`.
    pub fn intersection_cfg(&self, other: &Segment, cfg: GeomCfg) -> Option<Point2> {
        let dir1 = self.direction();
        let dir2 = other.direction();
        if parallel(dir1, dir2, cfg) {
            return None;
        }

        // Solve a + t*dir1 = other.a + s*dir2.
        let delta = other.a - self.a;
        let denom = cross(dir1, dir2);
        let t = cross(delta, dir2) / denom;
        let s = cross(delta, dir1) / denom;

        if in_unit(t) && in_unit(s) {
            Some(self.a + dir1 * t)
        } else {
            None
        }
    }

    /// Strictly left of the directed line through `a → b` (threshold `LEFT_EPS`).
    #[inline]
    pub fn left(&self, p: Point2) -> bool {
        self.left_eps(p, LEFT_EPS)
    }

    /// `left` with the threshold taken from a `GeomCfg`.
    #[inline]
    pub fn left_cfg(&self, p: Point2, cfg: GeomCfg) -> bool {
        self.left_eps(p, cfg.left_eps)
    }

    /// Implicit line test `A·x + B·y + C > eps` with
    /// `A = -(b.y - a.y)`, `B = b.x - a.x`, `C = -(A·a.x + B·a.y)`.
    pub fn left_eps(&self, p: Point2, eps: f64) -> bool {
        self.line_value(p) > eps
    }

    /// Unnormalized implicit line value `D` at `p`; positive on the left.
    #[inline]
    pub fn line_value(&self, p: Point2) -> f64 {
        let a = -(self.b.y - self.a.y);
        let b = self.b.x - self.a.x;
        let c = -(a * self.a.x + b * self.a.y);
        a * p.x + b * p.y + c
    }

    /// Same segment traversed `b → a`.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

#[inline]
fn parallel(dir1: Point2, dir2: Point2, cfg: GeomCfg) -> bool {
    match (
        dir1.try_normalize(cfg.degenerate_len),
        dir2.try_normalize(cfg.degenerate_len),
    ) {
        (Some(n1), Some(n2)) => {
            (n1 - n2).norm_squared() < cfg.parallel_eps_sq
                || (n1 + n2).norm_squared() < cfg.parallel_eps_sq
        }
        _ => true,
    }
}

#[inline]
fn in_unit(x: f64) -> bool {
    x.clamp(0.0, 1.0) == x
}
