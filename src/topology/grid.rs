//! Rectangular lattice with four-neighbor adjacency
//!
//! Wall and visited state live in `(side + 2)` square planes: a one-cell
//! padding border surrounds the interior and is pre-marked visited at
//! construction, so neighbor enumeration never steps outside allocated
//! storage and the carver can never target a border cell.

use ndarray::Array2;

use crate::geometry::RectGeometry;
use crate::io::configuration::MAX_GRID_SIDE;
use crate::io::error::{Result, invalid_shape};
use crate::topology::{Candidates, Cell, Direction, Link, Topology};

/// Rectangular maze state: a `side` by `side` interior of carvable cells
///
/// Public addressing is zero-based over the interior; `Cell::track` is the
/// row and `Cell::sector` the column. Each of the four wall planes holds
/// the open flag for one side of every cell, `false` meaning the wall is
/// present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTopology {
    side: usize,
    extent: usize,
    visited: Array2<bool>,
    inward_open: Array2<bool>,
    outward_open: Array2<bool>,
    left_open: Array2<bool>,
    right_open: Array2<bool>,
}

impl GridTopology {
    /// Create an uncarved rectangular maze of `side` cells per side
    ///
    /// `extent` is the square canvas size in pixels, used only to scale the
    /// per-cell geometry handed to renderers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidShape`] when `side` is zero or
    /// exceeds [`MAX_GRID_SIDE`], or when `extent` is zero.
    pub fn new(side: usize, extent: usize) -> Result<Self> {
        if side == 0 {
            return Err(invalid_shape(
                "side",
                &side,
                &"a rectangular maze needs at least one cell per side",
            ));
        }
        if side > MAX_GRID_SIDE {
            return Err(invalid_shape(
                "side",
                &side,
                &format!("exceeds the maximum side length of {MAX_GRID_SIDE}"),
            ));
        }
        if extent == 0 {
            return Err(invalid_shape(
                "extent",
                &extent,
                &"the canvas extent must be positive",
            ));
        }

        let padded = side + 2;
        let mut visited = Array2::from_elem((padded, padded), false);

        // Sentinel border: the padding ring is never a carving target
        for index in 0..padded {
            for border in [
                [0, index],
                [padded - 1, index],
                [index, 0],
                [index, padded - 1],
            ] {
                if let Some(flag) = visited.get_mut(border) {
                    *flag = true;
                }
            }
        }

        Ok(Self {
            side,
            extent,
            visited,
            inward_open: Array2::from_elem((padded, padded), false),
            outward_open: Array2::from_elem((padded, padded), false),
            left_open: Array2::from_elem((padded, padded), false),
            right_open: Array2::from_elem((padded, padded), false),
        })
    }

    /// Interior side length in cells
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Canvas extent in pixels
    pub const fn extent(&self) -> usize {
        self.extent
    }

    /// Test whether a public address lies in the interior
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.track < self.side && cell.sector < self.side
    }

    /// Translate a public address into the padded plane index
    const fn padded_index(cell: Cell) -> [usize; 2] {
        [cell.track + 1, cell.sector + 1]
    }

    fn assert_contains(&self, cell: Cell) {
        assert!(
            self.contains(cell),
            "cell {cell:?} outside {0}x{0} grid bounds",
            self.side
        );
    }

    fn plane(&self, direction: Direction) -> &Array2<bool> {
        match direction {
            Direction::Left => &self.left_open,
            Direction::Right => &self.right_open,
            Direction::Inward => &self.inward_open,
            Direction::Outward => &self.outward_open,
            Direction::OutwardDiagonal => {
                unreachable!("no diagonal adjacency on a rectangular lattice")
            }
        }
    }

    fn plane_mut(&mut self, direction: Direction) -> &mut Array2<bool> {
        match direction {
            Direction::Left => &mut self.left_open,
            Direction::Right => &mut self.right_open,
            Direction::Inward => &mut self.inward_open,
            Direction::Outward => &mut self.outward_open,
            Direction::OutwardDiagonal => {
                unreachable!("no diagonal adjacency on a rectangular lattice")
            }
        }
    }

    fn open_flag(&self, cell: Cell, direction: Direction) -> bool {
        self.plane(direction)
            .get(Self::padded_index(cell))
            .copied()
            .unwrap_or(false)
    }

    fn set_open(&mut self, cell: Cell, direction: Direction) {
        if let Some(flag) = self.plane_mut(direction).get_mut(Self::padded_index(cell)) {
            *flag = true;
        }
    }

    /// Direction from `a` to `b` when the two cells are adjacent
    const fn pair_direction(a: Cell, b: Cell) -> Option<Direction> {
        if a.track == b.track {
            if b.sector + 1 == a.sector {
                return Some(Direction::Left);
            }
            if a.sector + 1 == b.sector {
                return Some(Direction::Right);
            }
        }
        if a.sector == b.sector {
            if b.track + 1 == a.track {
                return Some(Direction::Inward);
            }
            if a.track + 1 == b.track {
                return Some(Direction::Outward);
            }
        }
        None
    }
}

impl Topology for GridTopology {
    type Geometry = RectGeometry;

    fn track_count(&self) -> usize {
        self.side
    }

    fn sector_count(&self, track: usize) -> usize {
        assert!(
            track < self.side,
            "track {track} outside {0}x{0} grid bounds",
            self.side
        );
        self.side
    }

    fn cell_count(&self) -> usize {
        self.side * self.side
    }

    fn start(&self) -> Cell {
        Cell::new(0, 0)
    }

    fn links(&self, cell: Cell) -> Candidates {
        self.assert_contains(cell);
        let mut links = Candidates::new();
        if cell.sector > 0 {
            links.push(Link::new(
                Direction::Left,
                Cell::new(cell.track, cell.sector - 1),
            ));
        }
        if cell.track > 0 {
            links.push(Link::new(
                Direction::Inward,
                Cell::new(cell.track - 1, cell.sector),
            ));
        }
        if cell.sector + 1 < self.side {
            links.push(Link::new(
                Direction::Right,
                Cell::new(cell.track, cell.sector + 1),
            ));
        }
        if cell.track + 1 < self.side {
            links.push(Link::new(
                Direction::Outward,
                Cell::new(cell.track + 1, cell.sector),
            ));
        }
        links
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.assert_contains(cell);
        self.visited
            .get(Self::padded_index(cell))
            .copied()
            .unwrap_or(false)
    }

    fn visit(&mut self, cell: Cell) {
        self.assert_contains(cell);
        if let Some(flag) = self.visited.get_mut(Self::padded_index(cell)) {
            *flag = true;
        }
    }

    fn open(&mut self, cell: Cell, link: Link) {
        self.assert_contains(cell);
        self.assert_contains(link.target);
        match link.direction {
            Direction::Left => {
                self.set_open(cell, Direction::Left);
                self.set_open(link.target, Direction::Right);
            }
            Direction::Right => {
                self.set_open(cell, Direction::Right);
                self.set_open(link.target, Direction::Left);
            }
            Direction::Inward => {
                self.set_open(cell, Direction::Inward);
                self.set_open(link.target, Direction::Outward);
            }
            Direction::Outward => {
                self.set_open(cell, Direction::Outward);
                self.set_open(link.target, Direction::Inward);
            }
            Direction::OutwardDiagonal => {
                unreachable!("no diagonal adjacency on a rectangular lattice")
            }
        }
    }

    fn is_open_between(&self, a: Cell, b: Cell) -> bool {
        self.assert_contains(a);
        self.assert_contains(b);
        let direction = Self::pair_direction(a, b);
        assert!(
            direction.is_some(),
            "wall queries require adjacent cells, got {a:?} and {b:?}"
        );
        direction.is_some_and(|direction| self.open_flag(a, direction))
    }

    fn open_inward_boundary(&mut self, cell: Cell) {
        self.assert_contains(cell);
        assert!(cell.track == 0, "entrance doors open on the first row only");
        self.set_open(cell, Direction::Inward);
    }

    fn open_outward_boundary(&mut self, cell: Cell) {
        self.assert_contains(cell);
        assert!(
            cell.track + 1 == self.side,
            "exit doors open on the last row only"
        );
        self.set_open(cell, Direction::Outward);
    }

    fn inward_boundary_open(&self, cell: Cell) -> bool {
        self.assert_contains(cell);
        assert!(cell.track == 0, "only first-row cells face the inward boundary");
        self.open_flag(cell, Direction::Inward)
    }

    fn outward_boundary_open(&self, cell: Cell) -> bool {
        self.assert_contains(cell);
        assert!(
            cell.track + 1 == self.side,
            "only last-row cells face the outward boundary"
        );
        self.open_flag(cell, Direction::Outward)
    }

    fn geometry(&self, cell: Cell) -> RectGeometry {
        self.assert_contains(cell);
        // Resize factor maps the padded cell space onto the canvas
        let unit = self.extent as f64 / (self.side + 2) as f64;
        let min = [
            (cell.sector + 1) as f64 * unit,
            (cell.track + 1) as f64 * unit,
        ];
        RectGeometry {
            min,
            max: [min[0] + unit, min[1] + unit],
        }
    }
}
