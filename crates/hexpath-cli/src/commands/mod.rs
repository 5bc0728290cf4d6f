// One module per group of subcommands. main.rs parses arguments and
// dispatches here.

pub mod generate;
pub mod grid;
pub mod path;
