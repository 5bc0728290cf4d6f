//! Coordinate subcommands that need no map: `line`, `range`, `ring`,
//! `spiral` and `direction`.

use anyhow::Result;

use hexpath_lib::{CubeCoord, Orientation};

use crate::output::{format_coords_text, format_direction_text, DirectionReport, OutputFormat};

/// Which region around a centre to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Range,
    Ring,
    Spiral,
}

pub fn handle_line(from: CubeCoord, to: CubeCoord, format: OutputFormat) -> Result<()> {
    print_coords(&from.line_to(to), format)
}

pub fn handle_region(
    region: Region,
    center: CubeCoord,
    radius: u32,
    orientation: Orientation,
    format: OutputFormat,
) -> Result<()> {
    let coords = match region {
        Region::Range => center.range(radius),
        Region::Ring => center.ring(radius, orientation),
        Region::Spiral => center.spiral(radius, orientation),
    };
    print_coords(&coords, format)
}

pub fn handle_direction(from: CubeCoord, to: CubeCoord, format: OutputFormat) -> Result<()> {
    let report = DirectionReport {
        from: from.to_key(),
        to: to.to_key(),
        direction: from.direction_between(to),
    };
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", format_direction_text(&report)),
    }
    Ok(())
}

fn print_coords(coords: &[CubeCoord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let keys: Vec<String> = coords.iter().map(|coord| coord.to_key()).collect();
            println!("{}", serde_json::to_string_pretty(&keys)?);
        }
        OutputFormat::Text => print!("{}", format_coords_text(coords)),
    }
    Ok(())
}
