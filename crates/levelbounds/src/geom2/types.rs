//! Basic 2D types and tolerances used by the segment predicates.
//!
//! - `Point2`/`Point3`: plain nalgebra vectors; rings store `Point2`.
//! - `GeomCfg`: centralizes the orientation and parallelism tolerances.
//!
//! Code cross-refs: `segment::Segment`, `crate::ring::Ring`

use nalgebra::{Vector2, Vector3};

/// Planar coordinate. Compared exactly unless a predicate says otherwise.
pub type Point2 = Vector2<f64>;

/// z = 0 lift of a `Point2` for meshing collaborators.
pub type Point3 = Vector3<f64>;

/// Threshold for `Segment::left`, in the unnormalized units of the implicit
/// line equation (not Euclidean distance).
pub const LEFT_EPS: f64 = 0.0001;

/// Two unit directions closer than this (squared distance) count as equal, so
/// their segments are parallel. Same for a direction and a negated one.
pub const PARALLEL_EPS_SQ: f64 = 1e-10;

/// Directions no longer than this cannot be normalized; such segments are
/// degenerate and treated as parallel to everything.
pub const DEGENERATE_LEN: f64 = 1e-5;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Strict-left threshold: `D > left_eps` counts as left.
    pub left_eps: f64,
    /// Squared distance between unit directions below which they are parallel.
    pub parallel_eps_sq: f64,
    /// Direction length at or below which a segment is degenerate.
    pub degenerate_len: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            left_eps: LEFT_EPS,
            parallel_eps_sq: PARALLEL_EPS_SQ,
            degenerate_len: DEGENERATE_LEN,
        }
    }
}

/// 2D cross product `u.x*v.y - u.y*v.x`.
#[inline]
pub fn cross(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}
