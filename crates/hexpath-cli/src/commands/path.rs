//! `path` subcommand: route between two hexes of a map file.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use hexpath_lib::{CubeCoord, Orientation, PathAlgorithm, WorldMap};

use crate::output::{format_path_text, OutputFormat, PathReport};

/// Arguments for the path command.
#[derive(Debug, Clone)]
pub struct PathArgs {
    pub map: PathBuf,
    pub from: CubeCoord,
    pub to: CubeCoord,
    pub algorithm: PathAlgorithm,
}

pub fn handle_path(args: &PathArgs, orientation: Orientation, format: OutputFormat) -> Result<()> {
    let map = WorldMap::from_path(&args.map, orientation)
        .with_context(|| format!("failed to load map from {}", args.map.display()))?;

    let path = map
        .find_path(args.algorithm, &args.from, &args.to)
        .ok_or_else(|| anyhow!("no path found from {} to {}", args.from, args.to))?;
    let report = PathReport::from_map_path(&path, args.from, args.to);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", format_path_text(&report)),
    }
    Ok(())
}
