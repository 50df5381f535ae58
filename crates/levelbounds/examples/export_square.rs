//! Build a square level bound with one hole and print its GeoJSON.
//!
//! Usage:
//!   cargo run -p levelbounds --example export_square

use levelbounds::prelude::*;
use nalgebra::vector;

fn main() -> Result<(), BoundaryError> {
    let mut outer = Ring::new().with_role(RingRole::Exterior);
    for v in [
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ] {
        outer.append_vertex(v);
    }
    let hole = Ring::from_vertices(vec![
        vector![1.0, 1.0],
        vector![2.0, 1.0],
        vector![2.0, 2.0],
        vector![1.0, 2.0],
    ])
    .with_role(RingRole::Hole);

    let rings = vec![outer, hole];
    let boundary = BoundaryGeometry::from_rings(&rings)?;
    println!("{}", boundary.to_geojson());
    Ok(())
}
