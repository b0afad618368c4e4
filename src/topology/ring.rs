//! Polar lattice with variable-degree adjacency
//!
//! Tracks are closed loops, so sector indices wrap modulo the track's
//! sector count. Where the next track outward carries double the sectors, a
//! cell gains two outward children: the straight child at `2 * sector` and
//! the diagonal child at `2 * sector + 1`. Wall and visited flags live in
//! flattened bit planes indexed through a per-track offset table, since the
//! tracks are ragged.

use bitvec::prelude::{BitVec, bitvec};

use crate::geometry::ArcGeometry;
use crate::io::configuration::{
    EDGE_MARGIN, MAX_TRACK_COUNT, MIN_TRACK_SECTORS, ROOM_RADIUS_TRACKS,
};
use crate::io::error::{Result, invalid_shape};
use crate::topology::tracks::sector_schedule;
use crate::topology::{Candidates, Cell, Direction, Link, Topology};

use std::f64::consts::TAU;

/// Polar maze state: concentric tracks of sectors around an open room
///
/// Each sector owns four wall flags: the inner and outer arcs (the radial
/// equivalents of a grid cell's inward and outward walls) and the left and
/// right edges shared with its angular neighbors. All flags start `false`
/// (wall present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingTopology {
    track_width: usize,
    extent: usize,
    room_radius: usize,
    sectors_per_track: Vec<usize>,
    track_offsets: Vec<usize>,
    cell_total: usize,
    visited: BitVec,
    inner_open: BitVec,
    outer_open: BitVec,
    left_open: BitVec,
    right_open: BitVec,
}

impl RingTopology {
    /// Create an uncarved polar maze
    ///
    /// The track count is derived from the canvas: the annulus left between
    /// the central room (two track widths across) and the canvas margin is
    /// divided into tracks of `track_width` pixels. Sector counts start at
    /// `4 * spokes_per_quadrant` on the innermost track and follow the
    /// doubling schedule outward.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidShape`] when `track_width` or
    /// `spokes_per_quadrant` is zero, or when `extent` derives fewer than
    /// one usable track or more than [`MAX_TRACK_COUNT`].
    pub fn new(track_width: usize, spokes_per_quadrant: usize, extent: usize) -> Result<Self> {
        if track_width == 0 {
            return Err(invalid_shape(
                "track_width",
                &track_width,
                &"tracks must be at least one pixel wide",
            ));
        }
        if spokes_per_quadrant == 0 {
            return Err(invalid_shape(
                "spokes_per_quadrant",
                &spokes_per_quadrant,
                &"the innermost track needs at least one spoke per quadrant",
            ));
        }

        let room_radius = ROOM_RADIUS_TRACKS * track_width;
        let usable = extent as i64 - 2 * EDGE_MARGIN as i64 - 2 * room_radius as i64;
        let track_count = if usable <= 0 {
            0
        } else {
            (usable as usize / track_width) / 2
        };

        if track_count == 0 {
            return Err(invalid_shape(
                "extent",
                &extent,
                &format!("derives zero usable tracks at track width {track_width}"),
            ));
        }
        if track_count > MAX_TRACK_COUNT {
            return Err(invalid_shape(
                "extent",
                &extent,
                &format!("derives {track_count} tracks, above the maximum of {MAX_TRACK_COUNT}"),
            ));
        }

        let schedule = sector_schedule(spokes_per_quadrant, track_count, ROOM_RADIUS_TRACKS);
        Ok(Self::build(track_width, extent, room_radius, schedule))
    }

    /// Create an uncarved polar maze from an explicit sector schedule
    ///
    /// Bypasses the canvas derivation; useful when the caller wants precise
    /// control over track counts and doubling boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidShape`] when the schedule is
    /// empty, starts below [`MIN_TRACK_SECTORS`], or contains a transition
    /// that is neither identity nor an exact doubling.
    pub fn from_schedule(track_width: usize, extent: usize, schedule: Vec<usize>) -> Result<Self> {
        if track_width == 0 {
            return Err(invalid_shape(
                "track_width",
                &track_width,
                &"tracks must be at least one pixel wide",
            ));
        }
        let Some(&first) = schedule.first() else {
            return Err(invalid_shape(
                "schedule",
                &"[]",
                &"a polar maze needs at least one track",
            ));
        };
        if first < MIN_TRACK_SECTORS {
            return Err(invalid_shape(
                "schedule",
                &first,
                &format!("the innermost track needs at least {MIN_TRACK_SECTORS} sectors"),
            ));
        }
        for (&prev, &next) in schedule.iter().zip(schedule.iter().skip(1)) {
            if next != prev && next != prev * 2 {
                return Err(invalid_shape(
                    "schedule",
                    &next,
                    &format!("sector counts may only repeat or double, got {prev} then {next}"),
                ));
            }
        }

        let room_radius = ROOM_RADIUS_TRACKS * track_width;
        Ok(Self::build(track_width, extent, room_radius, schedule))
    }

    fn build(
        track_width: usize,
        extent: usize,
        room_radius: usize,
        sectors_per_track: Vec<usize>,
    ) -> Self {
        let mut track_offsets = Vec::with_capacity(sectors_per_track.len());
        let mut cell_total = 0;
        for &sectors in &sectors_per_track {
            track_offsets.push(cell_total);
            cell_total += sectors;
        }

        Self {
            track_width,
            extent,
            room_radius,
            sectors_per_track,
            track_offsets,
            cell_total,
            visited: bitvec![0; cell_total],
            inner_open: bitvec![0; cell_total],
            outer_open: bitvec![0; cell_total],
            left_open: bitvec![0; cell_total],
            right_open: bitvec![0; cell_total],
        }
    }

    /// Track width in pixels
    pub const fn track_width(&self) -> usize {
        self.track_width
    }

    /// Canvas extent in pixels
    pub const fn extent(&self) -> usize {
        self.extent
    }

    /// Radius of the open central room in pixels
    pub const fn room_radius(&self) -> usize {
        self.room_radius
    }

    /// Sector counts per track, innermost first
    pub fn sector_schedule(&self) -> &[usize] {
        &self.sectors_per_track
    }

    /// Test whether a cell address lies inside the lattice
    pub fn contains(&self, cell: Cell) -> bool {
        self.sectors_per_track
            .get(cell.track)
            .is_some_and(|&sectors| cell.sector < sectors)
    }

    fn assert_contains(&self, cell: Cell) {
        assert!(self.contains(cell), "cell {cell:?} outside ring bounds");
    }

    /// Flatten a validated address into the shared bit-plane index
    fn flat(&self, cell: Cell) -> usize {
        self.assert_contains(cell);
        self.track_offsets
            .get(cell.track)
            .map_or(0, |offset| offset + cell.sector)
    }

    fn read(plane: &BitVec, index: usize) -> bool {
        plane.get(index).is_some_and(|flag| *flag)
    }

    /// Sector on the previous track sharing an arc with `sector`
    ///
    /// Halves the index across a doubling boundary, identity otherwise.
    fn inward_sector(&self, track: usize, sector: usize) -> usize {
        let here = self.sector_count(track);
        let inward = self.sector_count(track - 1);
        if here == inward { sector } else { sector / 2 }
    }

    /// Open flag for the wall between two cells, `None` when not adjacent
    fn pair_open_flag(&self, a: Cell, b: Cell) -> Option<bool> {
        if a.track == b.track {
            let sectors = self.sector_count(a.track);
            if (a.sector + 1) % sectors == b.sector {
                return Some(Self::read(&self.right_open, self.flat(a)));
            }
            if (b.sector + 1) % sectors == a.sector {
                return Some(Self::read(&self.left_open, self.flat(a)));
            }
        } else if b.track == a.track + 1 {
            // Radial pair truth lives on the outward cell's inner arc, so a
            // doubling parent's two child pairs stay independent
            if self.inward_sector(b.track, b.sector) == a.sector {
                return Some(Self::read(&self.inner_open, self.flat(b)));
            }
        } else if a.track == b.track + 1 && self.inward_sector(a.track, a.sector) == b.sector {
            return Some(Self::read(&self.inner_open, self.flat(a)));
        }
        None
    }
}

impl Topology for RingTopology {
    type Geometry = ArcGeometry;

    fn track_count(&self) -> usize {
        self.sectors_per_track.len()
    }

    fn sector_count(&self, track: usize) -> usize {
        assert!(
            track < self.sectors_per_track.len(),
            "track {track} outside ring bounds"
        );
        self.sectors_per_track.get(track).copied().unwrap_or(0)
    }

    fn cell_count(&self) -> usize {
        self.cell_total
    }

    fn start(&self) -> Cell {
        Cell::new(0, 0)
    }

    fn links(&self, cell: Cell) -> Candidates {
        self.assert_contains(cell);
        let sectors = self.sector_count(cell.track);
        let mut links = Candidates::new();

        // Tracks are closed loops: the angular neighbors always exist
        links.push(Link::new(
            Direction::Left,
            Cell::new(cell.track, (cell.sector + sectors - 1) % sectors),
        ));
        if cell.track > 0 {
            links.push(Link::new(
                Direction::Inward,
                Cell::new(cell.track - 1, self.inward_sector(cell.track, cell.sector)),
            ));
        }
        links.push(Link::new(
            Direction::Right,
            Cell::new(cell.track, (cell.sector + 1) % sectors),
        ));
        if cell.track + 1 < self.track_count() {
            let outward = self.sector_count(cell.track + 1);
            if outward == sectors {
                links.push(Link::new(
                    Direction::Outward,
                    Cell::new(cell.track + 1, cell.sector),
                ));
            } else {
                // Doubling boundary: straight and diagonal children
                links.push(Link::new(
                    Direction::Outward,
                    Cell::new(cell.track + 1, cell.sector * 2),
                ));
                links.push(Link::new(
                    Direction::OutwardDiagonal,
                    Cell::new(cell.track + 1, cell.sector * 2 + 1),
                ));
            }
        }
        links
    }

    fn is_visited(&self, cell: Cell) -> bool {
        Self::read(&self.visited, self.flat(cell))
    }

    fn visit(&mut self, cell: Cell) {
        let index = self.flat(cell);
        self.visited.set(index, true);
    }

    fn open(&mut self, cell: Cell, link: Link) {
        let from = self.flat(cell);
        let to = self.flat(link.target);
        match link.direction {
            Direction::Left => {
                self.left_open.set(from, true);
                self.right_open.set(to, true);
            }
            Direction::Right => {
                self.right_open.set(from, true);
                self.left_open.set(to, true);
            }
            Direction::Inward => {
                self.inner_open.set(from, true);
                self.outer_open.set(to, true);
            }
            Direction::Outward | Direction::OutwardDiagonal => {
                self.outer_open.set(from, true);
                self.inner_open.set(to, true);
            }
        }
    }

    fn is_open_between(&self, a: Cell, b: Cell) -> bool {
        self.assert_contains(a);
        self.assert_contains(b);
        let open = self.pair_open_flag(a, b);
        assert!(
            open.is_some(),
            "wall queries require adjacent cells, got {a:?} and {b:?}"
        );
        open.unwrap_or(false)
    }

    fn open_inward_boundary(&mut self, cell: Cell) {
        assert!(
            cell.track == 0,
            "entrance doors open on the innermost track only"
        );
        let index = self.flat(cell);
        self.inner_open.set(index, true);
    }

    fn open_outward_boundary(&mut self, cell: Cell) {
        assert!(
            cell.track + 1 == self.track_count(),
            "exit doors open on the outermost track only"
        );
        let index = self.flat(cell);
        self.outer_open.set(index, true);
    }

    fn inward_boundary_open(&self, cell: Cell) -> bool {
        assert!(
            cell.track == 0,
            "only innermost-track cells face the inward boundary"
        );
        Self::read(&self.inner_open, self.flat(cell))
    }

    fn outward_boundary_open(&self, cell: Cell) -> bool {
        assert!(
            cell.track + 1 == self.track_count(),
            "only outermost-track cells face the outward boundary"
        );
        Self::read(&self.outer_open, self.flat(cell))
    }

    fn geometry(&self, cell: Cell) -> ArcGeometry {
        self.assert_contains(cell);
        let center = self.extent as f64 / 2.0;
        let angle = TAU / self.sector_count(cell.track) as f64;
        let inner_radius = (self.room_radius + cell.track * self.track_width) as f64;
        let start_angle = cell.sector as f64 * angle;
        ArcGeometry {
            center: [center, center],
            inner_radius,
            outer_radius: inner_radius + self.track_width as f64,
            start_angle,
            end_angle: start_angle + angle,
        }
    }
}
