use anyhow::Result;
use clap::{Parser, Subcommand};
use levelbounds::{BoundaryGeometry, GeoJsonCfg};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod rings;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Level boundary export and inspection")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Export the exterior ring and its holes as a GeoJSON Polygon
    Export {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "Boundary.json")]
        out: PathBuf,
        /// Repeat the first vertex at the end of each ring (strict GeoJSON)
        #[arg(long)]
        close_rings: bool,
    },
    /// Print a JSON summary of every ring (role, size, self-crossings)
    Inspect {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small version JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Export {
            input,
            out,
            close_rings,
        } => export(&input, &out, GeoJsonCfg { close_rings }),
        Action::Inspect { input } => inspect(&input),
        Action::Report => report(),
    }
}

fn export(input: &Path, out: &Path, cfg: GeoJsonCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), close_rings = cfg.close_rings, "export");
    let rings = rings::load_rings(input)?;
    let text = export_text(&rings, cfg)?;
    rings::write_output(out, &text)?;
    tracing::info!(bytes = text.len(), "wrote boundary");
    Ok(())
}

/// Validate the ring set and render it; refuses to export without exactly one exterior.
fn export_text(rings: &[levelbounds::Ring], cfg: GeoJsonCfg) -> Result<String> {
    let boundary = BoundaryGeometry::from_rings(rings)?;
    for (k, hole) in boundary.holes().iter().enumerate() {
        if !hole.is_simple() {
            tracing::warn!(hole = k, "hole ring crosses itself");
        }
    }
    if !boundary.exterior().is_simple() {
        tracing::warn!("exterior ring crosses itself");
    }
    Ok(boundary.to_geojson_with(cfg))
}

fn inspect(input: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "inspect");
    let rings = rings::load_rings(input)?;
    println!("{}", serde_json::to_string_pretty(&rings::summarize(&rings))?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "name": "levelbounds",
        "version": levelbounds::VERSION,
        "left_eps": levelbounds::LEFT_EPS,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn export_writes_geojson_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rings.json");
        fs::write(
            &input,
            r#"{"rings": [
                {"role": "hole", "vertices": [[1,1],[2,1],[2,2],[1,2]]},
                {"role": "exterior", "vertices": [[0,0],[4,0],[4,4],[0,4]]}
            ]}"#,
        )
        .unwrap();
        let out = dir.path().join("nested/Boundary.json");
        export(&input, &out, GeoJsonCfg::default()).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            r#"{"type": "Polygon", "coordinates": [[[0,0],[4,0],[4,4],[0,4]],[[1,1],[2,1],[2,2],[1,2]]]}"#
        );
    }

    #[test]
    fn export_without_exterior_fails_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rings.json");
        fs::write(&input, r#"{"rings": [{"role": "hole", "vertices": [[0,0],[1,0],[1,1]]}]}"#)
            .unwrap();
        let out = dir.path().join("Boundary.json");
        let err = export(&input, &out, GeoJsonCfg::default()).unwrap_err();
        assert!(err.to_string().contains("no level bounds found"));
        assert!(!out.exists());
    }

    #[test]
    fn export_text_honors_close_rings() {
        let rings = rings::parse_rings(
            r#"{"rings": [{"role": "exterior", "vertices": [[0,0],[1,0],[1,1]]}]}"#,
        )
        .unwrap();
        let text = export_text(&rings, GeoJsonCfg { close_rings: true }).unwrap();
        assert_eq!(
            text,
            r#"{"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}"#
        );
    }

    #[test]
    fn cli_parses_export_flags() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "export",
            "--input",
            "rings.json",
            "--close-rings",
        ])
        .unwrap();
        match cmd.action {
            Action::Export {
                input,
                out,
                close_rings,
            } => {
                assert_eq!(input, PathBuf::from("rings.json"));
                assert_eq!(out, PathBuf::from("Boundary.json"));
                assert!(close_rings);
            }
            _ => panic!("expected export"),
        }
    }
}
