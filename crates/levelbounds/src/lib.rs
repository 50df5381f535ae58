//! Planar boundary geometry: segment predicates, tagged rings, GeoJSON export.
//!
//! Layout
//! - `geom2`: `Segment` intersection and left-of-line tests, tolerances.
//! - `pair`: `UnorderedPair` for undirected edge bookkeeping.
//! - `ring`: `Ring` vertex loops with a `RingRole`.
//! - `export`: GeoJSON Polygon text.
//! - `boundary`: `BoundaryGeometry`, the validated exterior-plus-holes view.
//!
//! All operations are synchronous and allocation-light; types are plain data
//! and `Send + Sync`.

pub mod boundary;
pub mod export;
pub mod geom2;
pub mod pair;
pub mod ring;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use boundary::{BoundaryError, BoundaryGeometry};
pub use export::{to_geojson, to_geojson_with, GeoJsonCfg};
pub use geom2::{GeomCfg, Point2, Point3, Segment, DEGENERATE_LEN, LEFT_EPS, PARALLEL_EPS_SQ};
pub use pair::UnorderedPair;
pub use ring::{Ring, RingRole};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{BoundaryError, BoundaryGeometry};
    pub use crate::export::{to_geojson, to_geojson_with, GeoJsonCfg};
    pub use crate::geom2::{
        cross, GeomCfg, Point2, Point3, Segment, DEGENERATE_LEN, LEFT_EPS, PARALLEL_EPS_SQ,
    };
    pub use crate::pair::UnorderedPair;
    pub use crate::ring::{Ring, RingRole};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
