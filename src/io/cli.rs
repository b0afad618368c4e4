//! Command-line interface for generating mazes and reporting their shape

use crate::carve::{Maze, generate_grid, generate_ring};
use crate::io::configuration::{
    DEFAULT_EXTENT, DEFAULT_GRID_SIDE, DEFAULT_SEED, DEFAULT_SPOKES_PER_QUADRANT,
    DEFAULT_TRACK_WIDTH,
};
use crate::io::error::Result;
use crate::topology::{Cell, Topology};
use clap::{Parser, ValueEnum};
use std::fmt;

/// Maze topology selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Rectangular lattice with four-neighbor cells
    Grid,
    /// Polar lattice of concentric tracks around an open room
    Ring,
}

#[derive(Parser)]
#[command(name = "mazecarve")]
#[command(
    author,
    version,
    about = "Generate perfect mazes with randomized depth-first carving"
)]
/// Command-line arguments for the maze generation tool
pub struct Cli {
    /// Topology to carve
    #[arg(value_enum, value_name = "SHAPE")]
    pub shape: Shape,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas extent in pixels (width = height)
    #[arg(short, long, default_value_t = DEFAULT_EXTENT)]
    pub extent: usize,

    /// Cells per side (grid shape only)
    #[arg(short = 'g', long, default_value_t = DEFAULT_GRID_SIDE)]
    pub side: usize,

    /// Track width in pixels (ring shape only)
    #[arg(short = 't', long, default_value_t = DEFAULT_TRACK_WIDTH)]
    pub track_width: usize,

    /// Spokes per quadrant on the innermost track (ring shape only)
    #[arg(short = 'p', long, default_value_t = DEFAULT_SPOKES_PER_QUADRANT)]
    pub spokes: usize,

    /// Suppress the generation report
    #[arg(short, long)]
    pub quiet: bool,
}

/// Shape summary of one generated maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Human-readable shape label
    pub shape: &'static str,
    /// Seed the maze was carved with
    pub seed: u64,
    /// Sector count of each track, innermost first
    pub sectors_per_track: Vec<usize>,
    /// Total cell count
    pub cells: usize,
    /// Carved walls between adjacent cells (tree edges)
    pub carved_walls: usize,
    /// Entrance door cell on the first track
    pub entrance: Cell,
    /// Exit door cell on the last track
    pub exit: Cell,
}

impl GenerationReport {
    /// Summarize a finished maze
    pub fn from_maze<T: Topology>(maze: &Maze<T>, shape: &'static str, seed: u64) -> Self {
        let sectors_per_track = (0..maze.track_count())
            .map(|track| maze.sector_count(track))
            .collect();
        Self {
            shape,
            seed,
            sectors_per_track,
            cells: maze.cell_count(),
            carved_walls: maze.carved_edge_count(),
            entrance: maze.entrance(),
            exit: maze.exit(),
        }
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} maze (seed {})", self.shape, self.seed)?;
        let tracks = self.sectors_per_track.len();
        let narrowest = self.sectors_per_track.iter().min().copied().unwrap_or(0);
        let widest = self.sectors_per_track.iter().max().copied().unwrap_or(0);
        if narrowest == widest {
            writeln!(f, "  tracks: {tracks} of {narrowest} sectors each")?;
        } else {
            writeln!(f, "  tracks: {tracks} of {narrowest}-{widest} sectors")?;
        }
        writeln!(f, "  cells: {}, carved walls: {}", self.cells, self.carved_walls)?;
        writeln!(
            f,
            "  entrance: track {} sector {}",
            self.entrance.track, self.entrance.sector
        )?;
        writeln!(
            f,
            "  exit: track {} sector {}",
            self.exit.track, self.exit.sector
        )
    }
}

/// Generates one maze according to CLI arguments and reports on it
pub struct MazeRunner {
    cli: Cli,
}

impl MazeRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the requested maze and print its report
    ///
    /// # Errors
    ///
    /// Returns an error when the shape parameters are rejected or carving
    /// fails its internal consistency check.
    pub fn run(&self) -> Result<()> {
        let report = self.generate()?;

        // Allow print for the user-facing report
        #[allow(clippy::print_stdout)]
        if !self.cli.quiet {
            print!("{report}");
        }

        Ok(())
    }

    /// Generate the requested maze and summarize it
    ///
    /// # Errors
    ///
    /// Returns an error when the shape parameters are rejected or carving
    /// fails its internal consistency check.
    pub fn generate(&self) -> Result<GenerationReport> {
        match self.cli.shape {
            Shape::Grid => {
                let maze = generate_grid(self.cli.side, self.cli.extent, self.cli.seed)?;
                Ok(GenerationReport::from_maze(&maze, "grid", self.cli.seed))
            }
            Shape::Ring => {
                let maze = generate_ring(
                    self.cli.track_width,
                    self.cli.spokes,
                    self.cli.extent,
                    self.cli.seed,
                )?;
                Ok(GenerationReport::from_maze(&maze, "ring", self.cli.seed))
            }
        }
    }
}
