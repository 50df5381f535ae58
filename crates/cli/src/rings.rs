use anyhow::{Context, Result};
use levelbounds::{Point2, Ring, RingRole, UnorderedPair};
use std::collections::HashMap;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// On-disk ring collection: `{"rings": [{"role": ..., "vertices": [[x,y],...]}]}`.
#[derive(Debug, Deserialize)]
pub struct RingFile {
    pub rings: Vec<RingSpec>,
}

#[derive(Debug, Deserialize)]
pub struct RingSpec {
    #[serde(default)]
    pub role: RoleSpec,
    pub vertices: Vec<[f64; 2]>,
    #[serde(default = "default_visualize")]
    pub visualize: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoleSpec {
    #[default]
    Discard,
    Exterior,
    Hole,
}

fn default_visualize() -> bool {
    true
}

impl From<RoleSpec> for RingRole {
    fn from(r: RoleSpec) -> Self {
        match r {
            RoleSpec::Discard => RingRole::Discard,
            RoleSpec::Exterior => RingRole::Exterior,
            RoleSpec::Hole => RingRole::Hole,
        }
    }
}

impl RingSpec {
    pub fn into_ring(self) -> Ring {
        let vertices = self.vertices.iter().map(|&[x, y]| Point2::new(x, y)).collect();
        let mut ring = Ring::from_vertices(vertices);
        ring.visualize = self.visualize;
        ring.with_role(self.role.into())
    }
}

/// Parse a ring file from disk.
pub fn load_rings<P: AsRef<Path>>(path: P) -> Result<Vec<Ring>> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_rings(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_rings(text: &str) -> Result<Vec<Ring>> {
    let file: RingFile = serde_json::from_str(text)?;
    Ok(file.rings.into_iter().map(RingSpec::into_ring).collect())
}

/// Write `contents` to `out`, creating parent directories as needed.
pub fn write_output<P: AsRef<Path>>(out: P, contents: &str) -> Result<()> {
    let out = out.as_ref();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, contents).with_context(|| format!("writing {}", out.display()))
}

/// Per-ring summary used by `inspect`.
pub fn summarize(rings: &[Ring]) -> Value {
    let rows: Vec<Value> = rings
        .iter()
        .enumerate()
        .map(|(index, ring)| {
            let crossings = crossing_rows(ring.self_crossings());
            json!({
                "index": index,
                "role": ring.role().to_string(),
                "vertices": ring.len(),
                "visualize": ring.visualize,
                "self_crossings": crossings,
            })
        })
        .collect();
    json!({ "version": levelbounds::VERSION, "rings": rows })
}

/// Crossings as JSON rows, ordered numerically by `(low, high)` edge index.
fn crossing_rows(crossings: HashMap<UnorderedPair<usize>, Point2>) -> Vec<Value> {
    let mut rows: Vec<((usize, usize), Point2)> = crossings
        .into_iter()
        .map(|(edges, p)| {
            let (i, j) = edges.into_tuple();
            ((i.min(j), i.max(j)), p)
        })
        .collect();
    rows.sort_by_key(|(edges, _)| *edges);
    rows.into_iter()
        .map(|((i, j), p)| json!({ "edges": [i, j], "point": [p.x, p.y] }))
        .collect()
}
