//! Tests for rectangular adjacency, wall bookkeeping, and cell geometry

use mazecarve::topology::{Cell, Direction, GridTopology, Link, Topology};

fn three_by_three() -> GridTopology {
    let Ok(topology) = GridTopology::new(3, 300) else {
        unreachable!("3x3 grid rejected");
    };
    topology
}

#[test]
fn test_links_at_origin_corner() {
    let topology = three_by_three();
    let links: Vec<Link> = topology.links(Cell::new(0, 0)).iter().collect();

    assert_eq!(
        links,
        vec![
            Link::new(Direction::Right, Cell::new(0, 1)),
            Link::new(Direction::Outward, Cell::new(1, 0)),
        ]
    );
}

#[test]
fn test_links_in_center() {
    let topology = three_by_three();
    let links: Vec<Link> = topology.links(Cell::new(1, 1)).iter().collect();

    assert_eq!(
        links,
        vec![
            Link::new(Direction::Left, Cell::new(1, 0)),
            Link::new(Direction::Inward, Cell::new(0, 1)),
            Link::new(Direction::Right, Cell::new(1, 2)),
            Link::new(Direction::Outward, Cell::new(2, 1)),
        ]
    );
}

#[test]
fn test_candidates_exclude_visited_neighbors() {
    let mut topology = three_by_three();
    assert_eq!(topology.candidates(Cell::new(1, 1)).len(), 4);

    topology.visit(Cell::new(1, 0));
    topology.visit(Cell::new(0, 1));

    let remaining: Vec<Cell> = topology
        .candidates(Cell::new(1, 1))
        .iter()
        .map(|link| link.target)
        .collect();
    assert_eq!(remaining, vec![Cell::new(1, 2), Cell::new(2, 1)]);
}

#[test]
fn test_unvisited_neighbor_probe() {
    let mut topology = three_by_three();
    assert!(topology.has_unvisited_neighbor(Cell::new(0, 0)));

    topology.visit(Cell::new(0, 1));
    topology.visit(Cell::new(1, 0));
    assert!(!topology.has_unvisited_neighbor(Cell::new(0, 0)));
}

#[test]
fn test_visit_latches() {
    let mut topology = three_by_three();
    assert!(!topology.is_visited(Cell::new(2, 2)));
    topology.visit(Cell::new(2, 2));
    assert!(topology.is_visited(Cell::new(2, 2)));
}

#[test]
fn test_open_marks_both_sides() {
    let mut topology = three_by_three();
    topology.open(
        Cell::new(0, 0),
        Link::new(Direction::Right, Cell::new(0, 1)),
    );

    assert!(topology.is_open_between(Cell::new(0, 0), Cell::new(0, 1)));
    assert!(topology.is_open_between(Cell::new(0, 1), Cell::new(0, 0)));
    assert!(!topology.is_open_between(Cell::new(0, 0), Cell::new(1, 0)));
}

#[test]
fn test_open_radial_pair() {
    let mut topology = three_by_three();
    topology.open(
        Cell::new(1, 1),
        Link::new(Direction::Inward, Cell::new(0, 1)),
    );

    assert!(topology.is_open_between(Cell::new(1, 1), Cell::new(0, 1)));
    assert!(topology.is_open_between(Cell::new(0, 1), Cell::new(1, 1)));
}

#[test]
fn test_boundary_doors() {
    let mut topology = three_by_three();
    assert!(!topology.inward_boundary_open(Cell::new(0, 2)));

    topology.open_inward_boundary(Cell::new(0, 2));
    topology.open_outward_boundary(Cell::new(2, 0));

    assert!(topology.inward_boundary_open(Cell::new(0, 2)));
    assert!(topology.outward_boundary_open(Cell::new(2, 0)));
    assert!(!topology.inward_boundary_open(Cell::new(0, 0)));
}

#[test]
#[should_panic(expected = "adjacent")]
fn test_wall_query_rejects_non_adjacent_cells() {
    let topology = three_by_three();
    let _ = topology.is_open_between(Cell::new(0, 0), Cell::new(2, 2));
}

#[test]
#[should_panic(expected = "outside")]
fn test_out_of_bounds_cell_fails_fast() {
    let topology = three_by_three();
    let _ = topology.links(Cell::new(3, 0));
}

#[test]
#[should_panic(expected = "first row")]
fn test_entrance_rejected_off_first_row() {
    let mut topology = three_by_three();
    topology.open_inward_boundary(Cell::new(1, 0));
}

#[test]
fn test_geometry_uses_resize_factor() {
    let Ok(topology) = GridTopology::new(3, 500) else {
        unreachable!("3x3 grid rejected");
    };

    // Padded cell space of 5 units across a 500 pixel canvas
    let origin = topology.geometry(Cell::new(0, 0));
    assert!((origin.min[0] - 100.0).abs() < f64::EPSILON);
    assert!((origin.min[1] - 100.0).abs() < f64::EPSILON);
    assert!((origin.max[0] - 200.0).abs() < f64::EPSILON);
    assert!((origin.width() - 100.0).abs() < f64::EPSILON);

    let lower = topology.geometry(Cell::new(2, 1));
    assert!((lower.min[0] - 200.0).abs() < f64::EPSILON);
    assert!((lower.min[1] - 300.0).abs() < f64::EPSILON);
}
