//! Closed vertex loops tagged with a boundary role.
//!
//! A `Ring` is implicitly closed: the last vertex connects back to the first
//! and the closing vertex is never stored twice. The role is a plain tag set by
//! the boundary builder; the "exactly one exterior" rule lives in
//! `crate::boundary::BoundaryGeometry`, not here.

use std::collections::HashMap;
use std::fmt;

use crate::geom2::{Point2, Point3, Segment};
use crate::pair::UnorderedPair;

/// Role of a ring inside a polygon-with-holes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RingRole {
    #[default]
    Discard,
    Exterior,
    Hole,
}

impl fmt::Display for RingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingRole::Discard => write!(f, "discard"),
            RingRole::Exterior => write!(f, "exterior"),
            RingRole::Hole => write!(f, "hole"),
        }
    }
}

/// Ordered, implicitly closed vertex loop.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    vertices: Vec<Point2>,
    /// Presentation hint for viewers; no effect on geometry.
    pub visualize: bool,
    pub role: RingRole,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            visualize: true,
            role: RingRole::Discard,
        }
    }
}

impl Ring {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices(vertices: Vec<Point2>) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_role(mut self, role: RingRole) -> Self {
        self.role = role;
        self
    }

    #[inline]
    pub fn role(&self) -> RingRole {
        self.role
    }

    #[inline]
    pub fn set_role(&mut self, role: RingRole) {
        self.role = role;
    }

    /// Replace the whole vertex sequence.
    pub fn set_vertices(&mut self, vertices: Vec<Point2>) {
        self.vertices = vertices;
    }

    /// Append after the current last vertex; it becomes adjacent to the first.
    #[inline]
    pub fn append_vertex(&mut self, v: Point2) {
        self.vertices.push(v);
    }

    /// Remove the first vertex exactly equal to `v`. Returns false (no-op) if absent.
    pub fn remove_vertex(&mut self, v: Point2) -> bool {
        match self.vertices.iter().position(|p| *p == v) {
            Some(i) => {
                self.vertices.remove(i);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex list as plain 2D points.
    pub fn to_points2(&self) -> Vec<Point2> {
        self.vertices.clone()
    }

    /// Vertex list lifted to the z = 0 plane.
    pub fn to_points3(&self) -> Vec<Point3> {
        self.vertices
            .iter()
            .map(|v| Point3::new(v.x, v.y, 0.0))
            .collect()
    }

    /// Edges of the closed loop, `v[i] → v[(i+1) % n]`. Empty for `n < 2`.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Crossings between non-adjacent edges, keyed by the undirected edge
    /// index pair (edge `i` runs from vertex `i` to vertex `i+1`).
    ///
    /// Adjacent edges always touch at their shared vertex and are skipped.
    /// Collinear overlaps are not reported (see `Segment::intersection`).
    pub fn self_crossings(&self) -> HashMap<UnorderedPair<usize>, Point2> {
        let edges: Vec<Segment> = self.edges().collect();
        let n = edges.len();
        let mut out = HashMap::new();
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if let Some(p) = edges[i].intersection(&edges[j]) {
                    out.insert(UnorderedPair::new(i, j), p);
                }
            }
        }
        out
    }

    #[inline]
    pub fn is_simple(&self) -> bool {
        self.self_crossings().is_empty()
    }
}
