//! `generate` subcommand: write a random hexagon-shaped map document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use hexpath_lib::MapDocument;

/// Arguments for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Hexes within this many steps of the origin are generated.
    pub radius: u32,
    /// Seed for reproducible terrain.
    pub seed: Option<u64>,
    pub name: String,
    /// Destination file; stdout when absent.
    pub output: Option<PathBuf>,
}

pub fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let document = MapDocument::random(args.name.clone(), args.radius, &mut rng);
    info!(
        name = %document.name,
        radius = args.radius,
        hexes = document.hexes.len(),
        "generated map"
    );

    match &args.output {
        Some(path) => {
            document
                .write_to(path)
                .with_context(|| format!("failed to write map to {}", path.display()))?;
            println!("Map written to {}", path.display());
        }
        None => println!("{}", document.to_json_string()?),
    }
    Ok(())
}
