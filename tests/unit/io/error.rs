//! Tests for error construction and display formatting

use mazecarve::MazeError;
use mazecarve::io::error::{inconsistency, invalid_shape};

#[test]
fn test_invalid_shape_carries_parameter() {
    let err = invalid_shape("side", &0, &"a rectangular maze needs at least one cell per side");
    match err {
        MazeError::InvalidShape {
            parameter, value, ..
        } => {
            assert_eq!(parameter, "side");
            assert_eq!(value, "0");
        }
        MazeError::Inconsistency { .. } => unreachable!("wrong variant"),
    }
}

#[test]
fn test_errors_format_through_trait_object() {
    let err: Box<dyn std::error::Error> = Box::new(inconsistency("carve", &"stack drained early"));
    assert_eq!(
        err.to_string(),
        "Internal inconsistency in carve: stack drained early"
    );
}

#[test]
fn test_errors_compare_by_content() {
    assert_eq!(
        invalid_shape("extent", &50, &"too small"),
        invalid_shape("extent", &50, &"too small")
    );
    assert_ne!(
        invalid_shape("extent", &50, &"too small"),
        invalid_shape("extent", &60, &"too small")
    );
}
