//! Immutable carved maze handed to callers and renderers

use crate::topology::{Cell, Direction, Topology};

/// A fully carved maze: topology, wall state, and the two boundary doors
///
/// Constructed once per generation call by [`crate::carve::Carver`] and
/// read-only afterward; only shared access to the underlying topology is
/// ever handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze<T: Topology> {
    topology: T,
    entrance: Cell,
    exit: Cell,
}

impl<T: Topology> Maze<T> {
    pub(crate) const fn from_parts(topology: T, entrance: Cell, exit: Cell) -> Self {
        Self {
            topology,
            entrance,
            exit,
        }
    }

    /// First-track cell whose inward boundary wall was opened as the way in
    pub const fn entrance(&self) -> Cell {
        self.entrance
    }

    /// Last-track cell whose outward boundary wall was opened as the way out
    pub const fn exit(&self) -> Cell {
        self.exit
    }

    /// Shared access to the carved topology
    pub const fn topology(&self) -> &T {
        &self.topology
    }

    /// Test whether the wall between two adjacent cells is carved open
    ///
    /// # Panics
    ///
    /// Panics if either cell is outside the topology or the pair is not
    /// adjacent.
    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        self.topology.is_open_between(a, b)
    }

    /// Geometric descriptor of one cell for rendering
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the topology.
    pub fn geometry(&self, cell: Cell) -> T::Geometry {
        self.topology.geometry(cell)
    }

    /// Number of tracks (rows)
    pub fn track_count(&self) -> usize {
        self.topology.track_count()
    }

    /// Number of sectors (columns) on the given track
    ///
    /// # Panics
    ///
    /// Panics if `track` is outside the topology.
    pub fn sector_count(&self, track: usize) -> usize {
        self.topology.sector_count(track)
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.topology.cell_count()
    }

    /// Iterate every cell address, innermost track first
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.topology.track_count()).flat_map(move |track| {
            (0..self.topology.sector_count(track)).map(move |sector| Cell::new(track, sector))
        })
    }

    /// Count the carved walls between adjacent cell pairs
    ///
    /// Each pair is counted once, from the side that owns the canonical
    /// direction. A perfect maze carves exactly `cell_count() - 1` of them;
    /// the two boundary doors are not included.
    pub fn carved_edge_count(&self) -> usize {
        self.cells()
            .map(|cell| {
                self.topology
                    .links(cell)
                    .iter()
                    .filter(|link| {
                        matches!(
                            link.direction,
                            Direction::Right | Direction::Outward | Direction::OutwardDiagonal
                        )
                    })
                    .filter(|link| self.topology.is_open_between(cell, link.target))
                    .count()
            })
            .sum()
    }
}
