//! Output formatting for CLI results.
//!
//! Text renderers return a `String` so handlers decide where it goes and
//! tests can check the exact layout.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;

use hexpath_lib::{CubeCoord, DirectionBetween, MapPath, PathAlgorithm, Terrain};

/// How results are printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// One hex on a rendered path.
#[derive(Debug, Clone, Serialize)]
pub struct PathStep {
    pub coord: CubeCoord,
    pub key: String,
    pub terrain: Terrain,
}

/// Serializable summary of a path across a map.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub algorithm: PathAlgorithm,
    pub from: String,
    pub to: String,
    pub hops: usize,
    pub cost: f64,
    pub steps: Vec<PathStep>,
}

impl PathReport {
    pub fn from_map_path(path: &MapPath, from: CubeCoord, to: CubeCoord) -> Self {
        Self {
            algorithm: path.algorithm,
            from: from.to_key(),
            to: to.to_key(),
            hops: path.hop_count(),
            cost: path.cost,
            steps: path
                .hexes
                .iter()
                .map(|hex| PathStep {
                    coord: hex.coord.round(),
                    key: hex.key(),
                    terrain: hex.terrain,
                })
                .collect(),
        }
    }
}

/// Serializable result of `direction`.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionReport {
    pub from: String,
    pub to: String,
    pub direction: Option<DirectionBetween>,
}

pub fn format_path_text(report: &PathReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Path from {} to {} (algorithm: {}):",
        report.from, report.to, report.algorithm
    );
    for step in &report.steps {
        let _ = writeln!(out, "- {} {}", step.key, step.terrain);
    }
    let _ = writeln!(out, "hops: {}, cost: {}", report.hops, report.cost);
    out
}

/// One `"q,r,s"` key per line.
pub fn format_coords_text(coords: &[CubeCoord]) -> String {
    let mut out = String::new();
    for coord in coords {
        let _ = writeln!(out, "{}", coord.to_key());
    }
    out
}

pub fn format_direction_text(report: &DirectionReport) -> String {
    match &report.direction {
        Some(between) => format!("{} {}\n", between.neighbor_type, between.vector.to_key()),
        None => "none\n".to_string(),
    }
}
