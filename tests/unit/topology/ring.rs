//! Tests for polar adjacency across doubling boundaries and wall bookkeeping

use mazecarve::MazeError;
use mazecarve::topology::{Cell, Direction, Link, RingTopology, Topology};

fn schedule(counts: Vec<usize>) -> RingTopology {
    let Ok(topology) = RingTopology::from_schedule(20, 400, counts) else {
        unreachable!("explicit schedule rejected");
    };
    topology
}

#[test]
fn test_canvas_derivation() {
    let Ok(topology) = RingTopology::new(20, 6, 400) else {
        unreachable!("default ring rejected");
    };

    // 400 pixel canvas, 5 pixel margins, 40 pixel room: seven 20-pixel tracks
    assert_eq!(topology.track_count(), 7);
    assert_eq!(topology.sector_schedule(), &[24, 24, 48, 48, 48, 48, 96]);
    assert_eq!(topology.cell_count(), 336);
    assert_eq!(topology.room_radius(), 40);
}

#[test]
fn test_sector_wraps_around_track() {
    let topology = schedule(vec![4]);
    let links: Vec<Link> = topology.links(Cell::new(0, 0)).iter().collect();

    assert_eq!(
        links,
        vec![
            Link::new(Direction::Left, Cell::new(0, 3)),
            Link::new(Direction::Right, Cell::new(0, 1)),
        ]
    );
}

#[test]
fn test_doubling_boundary_has_two_outward_children() {
    let topology = schedule(vec![4, 8]);
    let links: Vec<Link> = topology.links(Cell::new(0, 1)).iter().collect();

    assert_eq!(
        links,
        vec![
            Link::new(Direction::Left, Cell::new(0, 0)),
            Link::new(Direction::Right, Cell::new(0, 2)),
            Link::new(Direction::Outward, Cell::new(1, 2)),
            Link::new(Direction::OutwardDiagonal, Cell::new(1, 3)),
        ]
    );
}

#[test]
fn test_uniform_boundary_has_one_outward_child() {
    let topology = schedule(vec![4, 4]);
    let outward: Vec<Link> = topology
        .links(Cell::new(0, 1))
        .iter()
        .filter(|link| link.target.track == 1)
        .collect();

    assert_eq!(outward, vec![Link::new(Direction::Outward, Cell::new(1, 1))]);
}

#[test]
fn test_inward_mapping_halves_across_doubling() {
    let topology = schedule(vec![4, 8]);
    let inward: Vec<Link> = topology
        .links(Cell::new(1, 5))
        .iter()
        .filter(|link| link.direction == Direction::Inward)
        .collect();

    assert_eq!(inward, vec![Link::new(Direction::Inward, Cell::new(0, 2))]);
}

#[test]
fn test_carving_one_child_leaves_sibling_closed() {
    let mut topology = schedule(vec![4, 8]);
    topology.open(
        Cell::new(0, 0),
        Link::new(Direction::Outward, Cell::new(1, 0)),
    );

    assert!(topology.is_open_between(Cell::new(0, 0), Cell::new(1, 0)));
    assert!(topology.is_open_between(Cell::new(1, 0), Cell::new(0, 0)));
    assert!(!topology.is_open_between(Cell::new(0, 0), Cell::new(1, 1)));

    // The sibling pair opens independently later
    topology.open(
        Cell::new(0, 0),
        Link::new(Direction::OutwardDiagonal, Cell::new(1, 1)),
    );
    assert!(topology.is_open_between(Cell::new(0, 0), Cell::new(1, 1)));
}

#[test]
fn test_tangential_pair_marks_both_sides() {
    let mut topology = schedule(vec![4]);
    topology.open(Cell::new(0, 0), Link::new(Direction::Left, Cell::new(0, 3)));

    assert!(topology.is_open_between(Cell::new(0, 0), Cell::new(0, 3)));
    assert!(topology.is_open_between(Cell::new(0, 3), Cell::new(0, 0)));
    assert!(!topology.is_open_between(Cell::new(0, 0), Cell::new(0, 1)));
}

#[test]
fn test_boundary_door_flags() {
    let mut topology = schedule(vec![4]);
    topology.open_inward_boundary(Cell::new(0, 1));
    topology.open_outward_boundary(Cell::new(0, 2));

    assert!(topology.inward_boundary_open(Cell::new(0, 1)));
    assert!(!topology.inward_boundary_open(Cell::new(0, 0)));
    assert!(topology.outward_boundary_open(Cell::new(0, 2)));
    assert!(!topology.outward_boundary_open(Cell::new(0, 3)));
}

#[test]
fn test_schedule_validation() {
    assert!(matches!(
        RingTopology::from_schedule(20, 400, vec![]),
        Err(MazeError::InvalidShape { .. })
    ));
    assert!(matches!(
        RingTopology::from_schedule(20, 400, vec![2]),
        Err(MazeError::InvalidShape { .. })
    ));
    assert!(matches!(
        RingTopology::from_schedule(20, 400, vec![4, 12]),
        Err(MazeError::InvalidShape { .. })
    ));
    assert!(matches!(
        RingTopology::from_schedule(0, 400, vec![4]),
        Err(MazeError::InvalidShape { .. })
    ));
}

#[test]
fn test_parameter_validation() {
    assert!(matches!(
        RingTopology::new(0, 6, 400),
        Err(MazeError::InvalidShape { .. })
    ));
    assert!(matches!(
        RingTopology::new(20, 0, 400),
        Err(MazeError::InvalidShape { .. })
    ));
}

#[test]
#[should_panic(expected = "adjacent")]
fn test_wall_query_rejects_skipped_tracks() {
    let topology = schedule(vec![4, 8, 16]);
    let _ = topology.is_open_between(Cell::new(0, 0), Cell::new(2, 0));
}

#[test]
#[should_panic(expected = "outside")]
fn test_out_of_bounds_sector_fails_fast() {
    let topology = schedule(vec![4]);
    let _ = topology.links(Cell::new(0, 4));
}
