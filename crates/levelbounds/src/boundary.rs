//! Validated exterior-plus-holes selection over a ring collection.
//!
//! `BoundaryGeometry` borrows rings from their owner for the duration of an
//! export. Construction fails unless exactly one ring is tagged
//! `RingRole::Exterior`; discard rings are skipped and holes keep input order.

use std::fmt;

use crate::export::{to_geojson_with, GeoJsonCfg};
use crate::ring::{Ring, RingRole};

/// Errors surfaced while assembling a `BoundaryGeometry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// No ring is tagged exterior.
    MissingExterior,
    /// More than one ring is tagged exterior.
    MultipleExteriors { count: usize },
    /// A selected ring has no vertices (index into the caller's collection).
    EmptyRing { index: usize },
    /// A directly supplied ring carries the wrong role (index 0 = exterior).
    RoleMismatch {
        index: usize,
        expected: RingRole,
        found: RingRole,
    },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryError::MissingExterior => write!(
                f,
                "no level bounds found: build the boundary rings and tag exactly one as exterior"
            ),
            BoundaryError::MultipleExteriors { count } => write!(
                f,
                "{count} rings are tagged exterior; exactly one level bound is allowed"
            ),
            BoundaryError::EmptyRing { index } => write!(f, "ring {index} has no vertices"),
            BoundaryError::RoleMismatch {
                index,
                expected,
                found,
            } => write!(f, "ring {index} should be {expected} but is {found}"),
        }
    }
}

impl std::error::Error for BoundaryError {}

/// One exterior ring and its holes, borrowed from the owning collection.
#[derive(Clone, Debug)]
pub struct BoundaryGeometry<'a> {
    exterior: &'a Ring,
    holes: Vec<&'a Ring>,
}

impl<'a> BoundaryGeometry<'a> {
    /// Pick the unique exterior and all holes out of `rings`.
    pub fn from_rings(rings: &'a [Ring]) -> Result<Self, BoundaryError> {
        let mut exterior: Option<&'a Ring> = None;
        let mut exteriors = 0usize;
        let mut holes = Vec::new();
        let mut discarded = 0usize;
        for (index, ring) in rings.iter().enumerate() {
            match ring.role() {
                RingRole::Discard => {
                    discarded += 1;
                    continue;
                }
                RingRole::Exterior => {
                    exteriors += 1;
                    if exterior.is_none() {
                        exterior = Some(ring);
                    }
                }
                RingRole::Hole => holes.push(ring),
            }
            if ring.is_empty() {
                tracing::warn!(index, role = %ring.role(), "empty ring rejected");
                return Err(BoundaryError::EmptyRing { index });
            }
        }
        let exterior = match (exterior, exteriors) {
            (Some(ext), 1) => ext,
            (None, _) => {
                tracing::warn!(rings = rings.len(), "no exterior ring");
                return Err(BoundaryError::MissingExterior);
            }
            (Some(_), count) => {
                tracing::warn!(count, "multiple exterior rings");
                return Err(BoundaryError::MultipleExteriors { count });
            }
        };
        tracing::debug!(holes = holes.len(), discarded, "boundary selected");
        Ok(Self { exterior, holes })
    }

    /// Assemble from rings the caller already picked; roles and vertex counts are checked.
    pub fn new(exterior: &'a Ring, holes: Vec<&'a Ring>) -> Result<Self, BoundaryError> {
        check(0, exterior, RingRole::Exterior)?;
        for (k, hole) in holes.iter().enumerate() {
            check(k + 1, hole, RingRole::Hole)?;
        }
        Ok(Self { exterior, holes })
    }

    #[inline]
    pub fn exterior(&self) -> &'a Ring {
        self.exterior
    }

    #[inline]
    pub fn holes(&self) -> &[&'a Ring] {
        &self.holes
    }

    /// GeoJSON Polygon text with unclosed rings.
    pub fn to_geojson(&self) -> String {
        self.to_geojson_with(GeoJsonCfg::default())
    }

    pub fn to_geojson_with(&self, cfg: GeoJsonCfg) -> String {
        to_geojson_with(self.exterior, self.holes.iter().copied(), cfg)
    }
}

fn check(index: usize, ring: &Ring, expected: RingRole) -> Result<(), BoundaryError> {
    if ring.role() != expected {
        return Err(BoundaryError::RoleMismatch {
            index,
            expected,
            found: ring.role(),
        });
    }
    if ring.is_empty() {
        return Err(BoundaryError::EmptyRing { index });
    }
    Ok(())
}
