//! Explicit-stack randomized depth-first carver
//!
//! The carver walks an arbitrary topology and opens one wall per tree
//! edge, producing a perfect maze: a spanning tree with exactly one path
//! between any two cells. Recursion is replaced by an explicit frame stack
//! so the trail depth (which can approach the cell count on spiral-shaped
//! mazes) never threatens the native call stack.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::carve::Maze;
use crate::io::error::{Result, inconsistency, invalid_shape};
use crate::topology::{Cell, GridTopology, RingTopology, Topology};

/// Seeded maze generator
///
/// All randomness for one generation call is drawn from a single seeded
/// source, so equal seeds and shape parameters reproduce bit-identical
/// wall state.
pub struct Carver {
    rng: StdRng,
}

impl Carver {
    /// Create a carver with a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Carve a spanning tree over the topology and punch the two doors
    ///
    /// Consumes the uncarved topology and returns it sealed inside a
    /// read-only [`Maze`] with a randomly placed entrance on the first
    /// track and exit on the last.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidShape`] when the topology holds
    /// no cells, and [`crate::MazeError::Inconsistency`] when the walk
    /// terminates without visiting every cell — possible only if the
    /// topology's adjacency enumeration is defective.
    pub fn generate<T: Topology>(&mut self, mut topology: T) -> Result<Maze<T>> {
        if topology.cell_count() == 0 {
            return Err(invalid_shape(
                "cell_count",
                &0,
                &"the topology derives no carvable cells",
            ));
        }

        self.carve(&mut topology)?;

        let entrance = Cell::new(0, self.rng.random_range(0..topology.sector_count(0)));
        topology.open_inward_boundary(entrance);

        let last = topology.track_count() - 1;
        let exit = Cell::new(last, self.rng.random_range(0..topology.sector_count(last)));
        topology.open_outward_boundary(exit);

        Ok(Maze::from_parts(topology, entrance, exit))
    }

    /// Depth-first wall removal over the whole cell space
    ///
    /// Candidates are re-enumerated fresh at every step because neighbor
    /// visited-state changes as the tree grows. The chosen child is pushed
    /// and descended into immediately; a cell is popped only once none of
    /// its neighbors remain unvisited. Each candidate draw is uniform over
    /// the populated slots.
    fn carve<T: Topology>(&mut self, topology: &mut T) -> Result<()> {
        let start = topology.start();
        topology.visit(start);
        let mut visited_total = 1;

        let mut trail = vec![start];
        while let Some(&cell) = trail.last() {
            let candidates = topology.candidates(cell);
            if candidates.is_empty() {
                trail.pop();
                continue;
            }

            let drawn = self.rng.random_range(0..candidates.len());
            let Some(link) = candidates.get(drawn) else {
                return Err(inconsistency(
                    "carve",
                    &format!("drew unpopulated candidate slot {drawn}"),
                ));
            };

            topology.open(cell, link);
            topology.visit(link.target);
            visited_total += 1;
            trail.push(link.target);
        }

        let expected = topology.cell_count();
        if visited_total == expected {
            Ok(())
        } else {
            Err(inconsistency(
                "carve",
                &format!("visited {visited_total} of {expected} cells"),
            ))
        }
    }
}

/// Generate a rectangular maze of `side` cells per side
///
/// # Errors
///
/// Returns [`crate::MazeError::InvalidShape`] when the shape parameters
/// are rejected by [`GridTopology::new`].
pub fn generate_grid(side: usize, extent: usize, seed: u64) -> Result<Maze<GridTopology>> {
    Carver::new(seed).generate(GridTopology::new(side, extent)?)
}

/// Generate a polar maze sized to the given canvas
///
/// # Errors
///
/// Returns [`crate::MazeError::InvalidShape`] when the shape parameters
/// are rejected by [`RingTopology::new`].
pub fn generate_ring(
    track_width: usize,
    spokes_per_quadrant: usize,
    extent: usize,
    seed: u64,
) -> Result<Maze<RingTopology>> {
    Carver::new(seed).generate(RingTopology::new(track_width, spokes_per_quadrant, extent)?)
}
