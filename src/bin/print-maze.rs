//! CLI for maze generation only

use clap::Parser;
use maze_walk::Maze;

/// Generate a maze and print it, nothing more
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height; must be odd and at least 3
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Maze width; must be odd and at least 3
    #[arg(long, default_value_t = 21)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let maze = Maze::new(args.rows, args.cols, args.seed)?;
    println!("{maze}");
    Ok(())
}
