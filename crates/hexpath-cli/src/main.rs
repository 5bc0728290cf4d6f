use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hexpath_cli::commands::generate::{handle_generate, GenerateArgs};
use hexpath_cli::commands::grid::{handle_direction, handle_line, handle_region, Region};
use hexpath_cli::commands::path::{handle_path, PathArgs};
use hexpath_cli::output::OutputFormat;
use hexpath_lib::{CubeCoord, Orientation, PathAlgorithm};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hex-grid maps and pathfinding utilities")]
struct Cli {
    /// How hexagons are drawn; decides neighbour order and ring start.
    #[arg(long, global = true, env = "HEXPATH_ORIENTATION", default_value = "pointy")]
    orientation: Orientation,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random map covering every hex within a radius.
    Generate {
        #[arg(long, default_value_t = 3)]
        radius: u32,
        /// Seed for reproducible terrain.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "random")]
        name: String,
        /// Write the map here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Find a path between two hexes of a map file.
    Path {
        /// Map document to load.
        #[arg(long)]
        map: PathBuf,
        /// Starting hex as "q,r,s".
        #[arg(long, allow_hyphen_values = true)]
        from: CubeCoord,
        /// Destination hex as "q,r,s".
        #[arg(long, allow_hyphen_values = true)]
        to: CubeCoord,
        /// bfs, dijkstra or a-star.
        #[arg(long, default_value = "dijkstra")]
        algorithm: PathAlgorithm,
    },
    /// List the hexes on a straight line between two hexes.
    Line {
        #[arg(long, allow_hyphen_values = true)]
        from: CubeCoord,
        #[arg(long, allow_hyphen_values = true)]
        to: CubeCoord,
    },
    /// List every hex within a radius.
    Range {
        #[arg(long, allow_hyphen_values = true, default_value = "0,0,0")]
        center: CubeCoord,
        #[arg(long)]
        radius: u32,
    },
    /// List the hexes at exactly a radius.
    Ring {
        #[arg(long, allow_hyphen_values = true, default_value = "0,0,0")]
        center: CubeCoord,
        #[arg(long)]
        radius: u32,
    },
    /// List the centre followed by each ring out to a radius.
    Spiral {
        #[arg(long, allow_hyphen_values = true, default_value = "0,0,0")]
        center: CubeCoord,
        #[arg(long)]
        radius: u32,
    },
    /// Classify the displacement between two hexes.
    Direction {
        #[arg(long, allow_hyphen_values = true)]
        from: CubeCoord,
        #[arg(long, allow_hyphen_values = true)]
        to: CubeCoord,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let (orientation, format) = (cli.orientation, cli.format);

    match cli.command {
        Command::Generate {
            radius,
            seed,
            name,
            output,
        } => handle_generate(&GenerateArgs {
            radius,
            seed,
            name,
            output,
        }),
        Command::Path {
            map,
            from,
            to,
            algorithm,
        } => handle_path(
            &PathArgs {
                map,
                from,
                to,
                algorithm,
            },
            orientation,
            format,
        ),
        Command::Line { from, to } => handle_line(from, to, format),
        Command::Range { center, radius } => {
            handle_region(Region::Range, center, radius, orientation, format)
        }
        Command::Ring { center, radius } => {
            handle_region(Region::Ring, center, radius, orientation, format)
        }
        Command::Spiral { center, radius } => {
            handle_region(Region::Spiral, center, radius, orientation, format)
        }
        Command::Direction { from, to } => handle_direction(from, to, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
