//! Function plot model and sampled output types.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::coords::Point;

/// Default viewport bounds on both axes.
pub const DEFAULT_MIN: f64 = -10.0;
pub const DEFAULT_MAX: f64 = 10.0;
/// Plotting surface dimensions (pixels).
pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 600;
/// Function samples are taken once per surface pixel column.
pub const SAMPLE_COUNT: u32 = PLOT_WIDTH;
/// Vertical lines are split into this many steps (101 samples).
pub const VERTICAL_STEPS: u32 = 100;
/// Samples further than this off the surface (pixels, vertically) break the curve.
pub const SAMPLE_MARGIN: f64 = 100.0;

/// Rotating palette handed to newly added functions.
pub const SERIES_COLORS: &[&str] = &[
    "#FF0000", // red
    "#00AA00", // green
    "#0000FF", // blue
    "#FF8800", // orange
    "#AA00AA", // purple
    "#008888", // teal
    "#888800", // olive
    "#444444", // gray
];

/// Stable identity of a function, independent of list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionId(pub u64);

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A user-entered plot line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFunction {
    pub id: FunctionId,
    /// `x = c` or `[y =] expr`.
    pub expression: String,
    /// `#RRGGBB`
    pub color: String,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl GraphFunction {
    pub fn new(id: FunctionId, expression: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            expression: expression.into(),
            color: color.into(),
            visible: true,
        }
    }
}

/// Math-space window mapped onto the plotting surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_MIN,
            x_max: DEFAULT_MAX,
            y_min: DEFAULT_MIN,
            y_max: DEFAULT_MAX,
        }
    }
}

impl Viewport {
    /// Map a math-space point onto the plotting surface (y down).
    pub fn to_surface(&self, x: f64, y: f64) -> Point {
        Point::new(
            (x - self.x_min) / (self.x_max - self.x_min) * f64::from(PLOT_WIDTH),
            (self.y_max - y) / (self.y_max - self.y_min) * f64::from(PLOT_HEIGHT),
        )
    }

    /// Both ranges non-empty and finite, including their widths.
    pub fn is_valid(&self) -> bool {
        let width = self.x_max - self.x_min;
        let height = self.y_max - self.y_min;
        [self.x_min, self.x_max, self.y_min, self.y_max, width, height]
            .iter()
            .all(|v| v.is_finite())
            && width > 0.0
            && height > 0.0
    }
}

/// Sample output of one function, in plotting-surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledFunction {
    pub id: FunctionId,
    pub color: String,
    /// `None` = discontinuity (break the line).
    pub points: Vec<Option<Point>>,
}

impl SampledFunction {
    /// Contiguous runs of points, in sampling order.
    pub fn segments(&self) -> Vec<Vec<Point>> {
        split_segments(&self.points)
    }

    /// Runs long enough to draw as a line.
    pub fn drawable_segments(&self) -> Vec<Vec<Point>> {
        self.segments()
            .into_iter()
            .filter(|segment| segment.len() >= 2)
            .collect()
    }
}

/// Split a point series at None (discontinuities) into continuous segments.
pub fn split_segments<T: Copy>(points: &[Option<T>]) -> Vec<Vec<T>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for pt in points {
        match pt {
            Some(p) => current.push(*p),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
