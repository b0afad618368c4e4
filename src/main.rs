//! CLI entry point for the randomized maze carving tool

use clap::Parser;
use mazecarve::io::cli::{Cli, MazeRunner};

fn main() -> mazecarve::Result<()> {
    let cli = Cli::parse();
    let runner = MazeRunner::new(cli);
    runner.run()
}
