//! Planar segment predicates.
//!
//! Purpose
//! - Exact parametric segment intersection and the directed left-of-line test
//!   used when compiling user-drawn boundary edges into rings.
//! - Keep the API minimal and numerically explicit: every tolerance is a named
//!   constant mirrored in `GeomCfg`.
//!
//! Code cross-refs: `Segment`, `GeomCfg`, `crate::ring::Ring::self_crossings`

mod segment;
mod types;

pub use segment::Segment;
pub use types::{cross, GeomCfg, Point2, Point3, DEGENERATE_LEN, LEFT_EPS, PARALLEL_EPS_SQ};
