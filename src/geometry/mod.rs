//! Per-cell geometric descriptors for downstream rendering
//!
//! The carver never draws; it hands these descriptors to whatever renderer
//! consumes the finished maze. Polar cells describe themselves as annular
//! arcs, rectangular cells as axis-aligned boxes, both in canvas pixels.

/// Annular arc occupied by one polar cell
///
/// Angles are in radians, measured from the positive x axis; radii and the
/// center are in canvas pixels. The four corner helpers give the endpoints
/// a renderer joins with spoke lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    /// Canvas coordinates of the maze center
    pub center: [f64; 2],
    /// Radius of the cell's inner arc
    pub inner_radius: f64,
    /// Radius of the cell's outer arc
    pub outer_radius: f64,
    /// Angle at the cell's left edge
    pub start_angle: f64,
    /// Angle at the cell's right edge
    pub end_angle: f64,
}

impl ArcGeometry {
    /// Inner arc endpoint at the start angle
    pub fn inner_start(&self) -> [f64; 2] {
        polar_point(self.center, self.inner_radius, self.start_angle)
    }

    /// Inner arc endpoint at the end angle
    pub fn inner_end(&self) -> [f64; 2] {
        polar_point(self.center, self.inner_radius, self.end_angle)
    }

    /// Outer arc endpoint at the start angle
    pub fn outer_start(&self) -> [f64; 2] {
        polar_point(self.center, self.outer_radius, self.start_angle)
    }

    /// Outer arc endpoint at the end angle
    pub fn outer_end(&self) -> [f64; 2] {
        polar_point(self.center, self.outer_radius, self.end_angle)
    }
}

/// Axis-aligned box occupied by one rectangular cell, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectGeometry {
    /// Top-left corner (minimum x, minimum y)
    pub min: [f64; 2],
    /// Bottom-right corner (maximum x, maximum y)
    pub max: [f64; 2],
}

impl RectGeometry {
    /// Box width in pixels
    pub const fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    /// Box height in pixels
    pub const fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }
}

/// Project a polar coordinate onto the canvas
pub fn polar_point(center: [f64; 2], radius: f64, angle: f64) -> [f64; 2] {
    [
        radius.mul_add(angle.cos(), center[0]),
        radius.mul_add(angle.sin(), center[1]),
    ]
}
