use serde::{Deserialize, Serialize};

/// A point in device (surface pixel) space, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A point in normalized device coordinates, `[-1, 1]` with y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ndc {
    pub x: f64,
    pub y: f64,
}

impl Ndc {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of a reference surface in pixels. Only the constants below exist,
/// so an extent is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    width: f64,
    height: f64,
}

impl Extent {
    /// The shape-editing surface.
    pub const DRAWING: Extent = Extent {
        width: 1200.0,
        height: 700.0,
    };

    /// The function-plotting surface.
    pub const PLOTTING: Extent = Extent {
        width: 800.0,
        height: 600.0,
    };
}

/// Map a device-space point into normalized device coordinates.
pub fn normalize(point: Point, extent: Extent) -> Ndc {
    Ndc {
        x: (point.x / extent.width) * 2.0 - 1.0,
        y: 1.0 - (point.y / extent.height) * 2.0,
    }
}
