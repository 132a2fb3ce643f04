use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::coords::Point;

/// Stroke and fill attributes shared by every shape kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Outline color, `#RRGGBB`.
    pub stroke_color: String,
    /// Interior color, `#RRGGBB`.
    pub fill_color: String,
    /// Outline width in pixels; 0 disables the stroke pass.
    pub stroke_width: f64,
    pub filled: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: "#000000".to_string(),
            fill_color: "#FFFFFF".to_string(),
            stroke_width: 2.0,
            filled: false,
        }
    }
}

/// Per-kind geometry. Each variant carries only what its kind needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    /// Two opposite corners.
    Rectangle { points: Vec<Point> },
    /// Center, then a point on the rim.
    Circle { points: Vec<Point> },
    /// Center, then a point whose offsets give the two radii.
    Ellipse { points: Vec<Point> },
    Line { points: Vec<Point> },
    Triangle { points: Vec<Point> },
    Polygon { points: Vec<Point> },
    Freehand { points: Vec<Point> },
    /// Center and rim point, angles in radians (clockwise on screen).
    Arc {
        points: Vec<Point>,
        start_angle: f64,
        end_angle: f64,
    },
    /// Start, two handles, end.
    Bezier { control_points: Vec<Point> },
    /// Vertex lists computed once by [`Geometry::star`] and friends.
    Star { points: Vec<Point> },
    Pentagon { points: Vec<Point> },
    Hexagon { points: Vec<Point> },
    Point { points: Vec<Point> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Ellipse,
    Line,
    Triangle,
    Polygon,
    Freehand,
    Arc,
    Bezier,
    Star,
    Pentagon,
    Hexagon,
    Point,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Freehand => "freehand",
            ShapeKind::Arc => "arc",
            ShapeKind::Bezier => "bezier",
            ShapeKind::Star => "star",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Point => "point",
        }
    }

    /// How many points the kind must carry to be drawable.
    pub fn required_points(self) -> PointCount {
        match self {
            ShapeKind::Rectangle | ShapeKind::Circle | ShapeKind::Ellipse | ShapeKind::Arc => {
                PointCount::Exactly(2)
            }
            ShapeKind::Triangle => PointCount::Exactly(3),
            ShapeKind::Bezier => PointCount::Exactly(4),
            ShapeKind::Line
            | ShapeKind::Polygon
            | ShapeKind::Freehand
            | ShapeKind::Star
            | ShapeKind::Pentagon
            | ShapeKind::Hexagon => PointCount::AtLeast(2),
            ShapeKind::Point => PointCount::AtLeast(1),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointCount {
    Exactly(usize),
    AtLeast(usize),
}

impl PointCount {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            PointCount::Exactly(k) => n == k,
            PointCount::AtLeast(k) => n >= k,
        }
    }
}

impl fmt::Display for PointCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointCount::Exactly(k) => write!(f, "exactly {}", k),
            PointCount::AtLeast(k) => write!(f, "at least {}", k),
        }
    }
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Ellipse { .. } => ShapeKind::Ellipse,
            Geometry::Line { .. } => ShapeKind::Line,
            Geometry::Triangle { .. } => ShapeKind::Triangle,
            Geometry::Polygon { .. } => ShapeKind::Polygon,
            Geometry::Freehand { .. } => ShapeKind::Freehand,
            Geometry::Arc { .. } => ShapeKind::Arc,
            Geometry::Bezier { .. } => ShapeKind::Bezier,
            Geometry::Star { .. } => ShapeKind::Star,
            Geometry::Pentagon { .. } => ShapeKind::Pentagon,
            Geometry::Hexagon { .. } => ShapeKind::Hexagon,
            Geometry::Point { .. } => ShapeKind::Point,
        }
    }

    /// The points counted against [`ShapeKind::required_points`].
    pub fn points(&self) -> &[Point] {
        match self {
            Geometry::Rectangle { points }
            | Geometry::Circle { points }
            | Geometry::Ellipse { points }
            | Geometry::Line { points }
            | Geometry::Triangle { points }
            | Geometry::Polygon { points }
            | Geometry::Freehand { points }
            | Geometry::Arc { points, .. }
            | Geometry::Star { points }
            | Geometry::Pentagon { points }
            | Geometry::Hexagon { points }
            | Geometry::Point { points } => points,
            Geometry::Bezier { control_points } => control_points,
        }
    }

    /// Five-pointed star; inner radius is half the outer one, first spike up.
    pub fn star(center: Point, rim: Point) -> Self {
        let radius = center.distance(rim);
        let points = (0..10u32)
            .map(|i| {
                let angle = f64::from(i) * PI / 5.0 - FRAC_PI_2;
                let r = if i % 2 == 0 { radius } else { radius * 0.5 };
                Point::new(center.x + angle.cos() * r, center.y + angle.sin() * r)
            })
            .collect();
        Geometry::Star { points }
    }

    pub fn pentagon(center: Point, rim: Point) -> Self {
        Geometry::Pentagon {
            points: regular_polygon(center, rim, 5),
        }
    }

    pub fn hexagon(center: Point, rim: Point) -> Self {
        Geometry::Hexagon {
            points: regular_polygon(center, rim, 6),
        }
    }
}

/// Vertices of a regular polygon, first vertex straight up from the center.
fn regular_polygon(center: Point, rim: Point, sides: u32) -> Vec<Point> {
    let radius = center.distance(rim);
    (0..sides)
        .map(|i| {
            let angle = f64::from(i) * 2.0 * PI / f64::from(sides) - FRAC_PI_2;
            Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        })
        .collect()
}

/// One drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub geometry: Geometry,
    #[serde(default)]
    pub style: Style,
}

impl Shape {
    pub fn new(geometry: Geometry, style: Style) -> Self {
        Self { geometry, style }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }
}
