//! GeoJSON Polygon writer for one exterior ring plus holes.
//!
//! Output layout is fixed for compatibility with existing boundary files:
//!
//! ```text
//! {"type": "Polygon", "coordinates": [[[x0,y0],[x1,y1],...],[...hole...]]}
//! ```
//!
//! - Coordinates use the default `f64` display (`4.0` → `4`, `0.25` → `0.25`).
//! - No whitespace inside the coordinates array and no trailing commas.
//! - Rings are written unclosed by default (first vertex not repeated), which
//!   strict GeoJSON readers reject; set `GeoJsonCfg::close_rings` for those.
//! - Roles are not checked here. Use `crate::boundary::BoundaryGeometry` to
//!   select and validate rings first.

use crate::geom2::Point2;
use crate::ring::Ring;

/// Export options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeoJsonCfg {
    /// Repeat the first vertex at the end of each non-empty ring.
    pub close_rings: bool,
}

/// Serialize with default options (unclosed rings).
pub fn to_geojson<'a, I>(exterior: &'a Ring, holes: I) -> String
where
    I: IntoIterator<Item = &'a Ring>,
{
    to_geojson_with(exterior, holes, GeoJsonCfg::default())
}

/// Serialize `exterior` followed by `holes` as a GeoJSON Polygon.
pub fn to_geojson_with<'a, I>(exterior: &'a Ring, holes: I, cfg: GeoJsonCfg) -> String
where
    I: IntoIterator<Item = &'a Ring>,
{
    let rings: Vec<String> = std::iter::once(exterior)
        .chain(holes)
        .map(|r| ring_coordinates(r.vertices(), cfg.close_rings))
        .collect();
    format!(
        "{{\"type\": \"Polygon\", \"coordinates\": [{}]}}",
        rings.join(",")
    )
}

fn ring_coordinates(vertices: &[Point2], close: bool) -> String {
    let closing = if close { vertices.first() } else { None };
    let pairs: Vec<String> = vertices
        .iter()
        .chain(closing)
        .map(|v| format!("[{},{}]", v.x, v.y))
        .collect();
    format!("[{}]", pairs.join(","))
}
