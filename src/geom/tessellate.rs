//! Shape geometry to concrete vertex passes.

use std::f64::consts::TAU;
use std::fmt;

use crate::geom::color::{hex_to_rgb, Rgb};
use crate::geom::coords::{normalize, Extent, Ndc, Point};
use crate::geom::shape::{Geometry, PointCount, Shape, ShapeKind};

/// Circle radius divisor: pixels to NDC along x on the drawing surface.
const RADIUS_SCALE_X: f64 = 600.0;
/// Ellipse vertical radius divisor: pixels to NDC along y.
const RADIUS_SCALE_Y: f64 = 350.0;
/// Bezier samples: t = 0, 0.01, ..., 1.
const BEZIER_STEPS: u32 = 100;

const MIN_LINE_WIDTH: f64 = 1.0;
const MIN_POINT_SIZE: f64 = 5.0;

/// Immediate-mode primitive a pass is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Quads,
    Polygon,
    TriangleFan,
    LineLoop,
    LineStrip,
    Lines,
    Points,
}

impl Primitive {
    pub fn gl_name(self) -> &'static str {
        match self {
            Primitive::Quads => "GL_QUADS",
            Primitive::Polygon => "GL_POLYGON",
            Primitive::TriangleFan => "GL_TRIANGLE_FAN",
            Primitive::LineLoop => "GL_LINE_LOOP",
            Primitive::LineStrip => "GL_LINE_STRIP",
            Primitive::Lines => "GL_LINES",
            Primitive::Points => "GL_POINTS",
        }
    }
}

/// Width or size state set before a stroke pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pen {
    LineWidth(f64),
    PointSize(f64),
}

/// One `glBegin`/`glEnd` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Pass {
    pub primitive: Primitive,
    pub color: Rgb,
    pub pen: Option<Pen>,
    pub vertices: Vec<Ndc>,
}

/// Fill pass then stroke pass, either may be absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tessellation {
    pub fill: Option<Pass>,
    pub stroke: Option<Pass>,
}

impl Tessellation {
    pub fn passes(&self) -> impl Iterator<Item = &Pass> {
        self.fill.iter().chain(self.stroke.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TessellateError {
    pub kind: ShapeKind,
    pub required: PointCount,
    pub found: usize,
}

impl fmt::Display for TessellateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} needs {} points, found {}",
            self.kind, self.required, self.found
        )
    }
}

impl std::error::Error for TessellateError {}

/// Turn one shape into its fill and stroke passes in drawing-surface NDC.
pub fn tessellate(shape: &Shape) -> Result<Tessellation, TessellateError> {
    let kind = shape.kind();
    let points = shape.geometry.points();
    let required = kind.required_points();
    if !required.accepts(points.len()) {
        return Err(TessellateError {
            kind,
            required,
            found: points.len(),
        });
    }

    let style = &shape.style;
    let fill_color = hex_to_rgb(&style.fill_color);
    let stroke_color = hex_to_rgb(&style.stroke_color);
    let stroked = style.stroke_width > 0.0;
    let line_pen = Some(Pen::LineWidth(style.stroke_width));

    let fill = |primitive, vertices| {
        style.filled.then(|| Pass {
            primitive,
            color: fill_color,
            pen: None,
            vertices,
        })
    };
    let stroke = |primitive, vertices| {
        stroked.then(|| Pass {
            primitive,
            color: stroke_color,
            pen: line_pen,
            vertices,
        })
    };

    let tessellation = match &shape.geometry {
        Geometry::Rectangle { points } => {
            let a = to_ndc(points[0]);
            let b = to_ndc(points[1]);
            let corners = vec![
                Ndc::new(a.x, a.y),
                Ndc::new(b.x, a.y),
                Ndc::new(b.x, b.y),
                Ndc::new(a.x, b.y),
            ];
            Tessellation {
                fill: fill(Primitive::Quads, corners.clone()),
                stroke: stroke(Primitive::LineLoop, corners),
            }
        }

        Geometry::Circle { points } => {
            let radius = points[0].distance(points[1]) / RADIUS_SCALE_X;
            ring_passes(points[0], radius, radius, &fill, &stroke)
        }

        Geometry::Ellipse { points } => {
            let rx = (points[1].x - points[0].x).abs() / RADIUS_SCALE_X;
            let ry = (points[1].y - points[0].y).abs() / RADIUS_SCALE_Y;
            ring_passes(points[0], rx, ry, &fill, &stroke)
        }

        Geometry::Arc {
            points,
            start_angle,
            end_angle,
        } => {
            let center = to_ndc(points[0]);
            let radius = points[0].distance(points[1]) / RADIUS_SCALE_X;
            let rim = arc_vertices(center, radius, *start_angle, *end_angle);
            let mut fan = Vec::with_capacity(rim.len() + 1);
            fan.push(center);
            fan.extend_from_slice(&rim);
            Tessellation {
                fill: fill(Primitive::TriangleFan, fan),
                stroke: stroke(Primitive::LineStrip, rim),
            }
        }

        Geometry::Line { points } => Tessellation {
            fill: None,
            stroke: Some(Pass {
                primitive: Primitive::Lines,
                color: stroke_color,
                pen: Some(Pen::LineWidth(style.stroke_width.max(MIN_LINE_WIDTH))),
                vertices: vec![to_ndc(points[0]), to_ndc(points[1])],
            }),
        },

        Geometry::Triangle { points }
        | Geometry::Polygon { points }
        | Geometry::Star { points }
        | Geometry::Pentagon { points }
        | Geometry::Hexagon { points } => {
            let vertices = all_ndc(points);
            Tessellation {
                fill: fill(Primitive::Polygon, vertices.clone()),
                stroke: stroke(Primitive::LineLoop, vertices),
            }
        }

        Geometry::Freehand { points } => Tessellation {
            fill: None,
            stroke: stroke(Primitive::LineStrip, all_ndc(points)),
        },

        Geometry::Bezier { control_points } => {
            let [p0, p1, p2, p3] = [
                control_points[0],
                control_points[1],
                control_points[2],
                control_points[3],
            ];
            let vertices = (0..=BEZIER_STEPS)
                .map(|i| {
                    let t = f64::from(i) / f64::from(BEZIER_STEPS);
                    to_ndc(cubic_bezier(p0, p1, p2, p3, t))
                })
                .collect();
            Tessellation {
                fill: None,
                stroke: stroke(Primitive::LineStrip, vertices),
            }
        }

        Geometry::Point { points } => Tessellation {
            fill: None,
            stroke: Some(Pass {
                primitive: Primitive::Points,
                color: stroke_color,
                pen: Some(Pen::PointSize((style.stroke_width * 2.0).max(MIN_POINT_SIZE))),
                vertices: all_ndc(points),
            }),
        },
    };

    Ok(tessellation)
}

fn to_ndc(p: Point) -> Ndc {
    normalize(p, Extent::DRAWING)
}

fn all_ndc(points: &[Point]) -> Vec<Ndc> {
    points.iter().copied().map(to_ndc).collect()
}

/// Triangle fan (center plus 361 rim samples) and a 361-sample loop.
///
/// The rim starts at 0 degrees and turns counter-clockwise in NDC.
fn ring_passes(
    center: Point,
    rx: f64,
    ry: f64,
    fill: &impl Fn(Primitive, Vec<Ndc>) -> Option<Pass>,
    stroke: &impl Fn(Primitive, Vec<Ndc>) -> Option<Pass>,
) -> Tessellation {
    let c = to_ndc(center);
    let rim: Vec<Ndc> = (0..=360u32)
        .map(|deg| {
            let angle = f64::from(deg).to_radians();
            Ndc::new(c.x + angle.cos() * rx, c.y + angle.sin() * ry)
        })
        .collect();
    let mut fan = Vec::with_capacity(rim.len() + 1);
    fan.push(c);
    fan.extend_from_slice(&rim);
    Tessellation {
        fill: fill(Primitive::TriangleFan, fan),
        stroke: stroke(Primitive::LineLoop, rim),
    }
}

/// Samples from `start` clockwise to `end` in whole-degree steps, both ends included.
fn arc_vertices(center: Ndc, radius: f64, start: f64, end: f64) -> Vec<Ndc> {
    let raw = end - start;
    let sweep = if raw >= TAU { TAU } else { raw.rem_euclid(TAU) };
    // Tolerance keeps 90.00000000000001 degrees at 90 steps.
    let steps = (sweep.to_degrees() - 1e-9).ceil().max(1.0) as u32;
    (0..=steps)
        .map(|i| {
            let angle = start + sweep * f64::from(i) / f64::from(steps);
            // Screen angles run clockwise with y down, so y flips in NDC.
            Ndc::new(center.x + angle.cos() * radius, center.y - angle.sin() * radius)
        })
        .collect()
}

/// `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`
pub fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    Point::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::shape::Style;

    fn style(filled: bool, stroke_width: f64) -> Style {
        Style {
            stroke_color: "#FF0000".to_string(),
            fill_color: "#0000FF".to_string(),
            stroke_width,
            filled,
        }
    }

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_rectangle_fill_and_stroke_share_vertices() {
        let shape = Shape::new(
            Geometry::Rectangle {
                points: pts(&[(0.0, 0.0), (600.0, 350.0)]),
            },
            style(true, 2.0),
        );
        let t = tessellate(&shape).unwrap();
        let fill = t.fill.unwrap();
        let stroke = t.stroke.unwrap();
        assert_eq!(fill.primitive, Primitive::Quads);
        assert_eq!(stroke.primitive, Primitive::LineLoop);
        assert_eq!(fill.vertices, stroke.vertices);
        assert_eq!(
            fill.vertices,
            vec![
                Ndc::new(-1.0, 1.0),
                Ndc::new(0.0, 1.0),
                Ndc::new(0.0, 0.0),
                Ndc::new(-1.0, 0.0),
            ]
        );
        assert_eq!(fill.color, Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(fill.pen, None);
        assert_eq!(stroke.color, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(stroke.pen, Some(Pen::LineWidth(2.0)));
    }

    #[test]
    fn test_unfilled_zero_width_emits_nothing() {
        let shape = Shape::new(
            Geometry::Triangle {
                points: pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 5.0)]),
            },
            style(false, 0.0),
        );
        assert!(tessellate(&shape).unwrap().is_empty());
    }

    #[test]
    fn test_circle_sampling() {
        let shape = Shape::new(
            Geometry::Circle {
                points: pts(&[(600.0, 350.0), (660.0, 350.0)]),
            },
            style(true, 1.0),
        );
        let t = tessellate(&shape).unwrap();
        let fill = t.fill.unwrap();
        let stroke = t.stroke.unwrap();
        assert_eq!(fill.primitive, Primitive::TriangleFan);
        assert_eq!(fill.vertices.len(), 362);
        assert_eq!(fill.vertices[0], Ndc::new(0.0, 0.0));
        assert_eq!(stroke.vertices.len(), 361);
        // radius 60px / 600
        assert!((stroke.vertices[0].x - 0.1).abs() < 1e-12);
        // Counter-clockwise in NDC: a quarter turn ends above the center.
        assert!((stroke.vertices[90].y - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_ellipse_radii() {
        let shape = Shape::new(
            Geometry::Ellipse {
                points: pts(&[(600.0, 350.0), (540.0, 385.0)]),
            },
            style(false, 1.0),
        );
        let stroke = tessellate(&shape).unwrap().stroke.unwrap();
        assert!((stroke.vertices[0].x - 0.1).abs() < 1e-12);
        assert!((stroke.vertices[270].y + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_line_never_fills_and_floors_width() {
        let shape = Shape::new(
            Geometry::Line {
                points: pts(&[(0.0, 0.0), (1200.0, 700.0), (5.0, 5.0)]),
            },
            style(true, 0.0),
        );
        let t = tessellate(&shape).unwrap();
        assert!(t.fill.is_none());
        let stroke = t.stroke.unwrap();
        assert_eq!(stroke.primitive, Primitive::Lines);
        assert_eq!(stroke.vertices.len(), 2);
        assert_eq!(stroke.pen, Some(Pen::LineWidth(1.0)));
    }

    #[test]
    fn test_point_size_floor() {
        let shape = Shape::new(
            Geometry::Point {
                points: pts(&[(0.0, 0.0), (10.0, 10.0)]),
            },
            style(false, 1.0),
        );
        let stroke = tessellate(&shape).unwrap().stroke.unwrap();
        assert_eq!(stroke.primitive, Primitive::Points);
        assert_eq!(stroke.vertices.len(), 2);
        assert_eq!(stroke.pen, Some(Pen::PointSize(5.0)));

        let wide = Shape::new(
            Geometry::Point {
                points: pts(&[(0.0, 0.0)]),
            },
            style(false, 4.0),
        );
        let stroke = tessellate(&wide).unwrap().stroke.unwrap();
        assert_eq!(stroke.pen, Some(Pen::PointSize(8.0)));
    }

    #[test]
    fn test_freehand_is_open_and_unfilled() {
        let shape = Shape::new(
            Geometry::Freehand {
                points: pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]),
            },
            style(true, 3.0),
        );
        let t = tessellate(&shape).unwrap();
        assert!(t.fill.is_none());
        assert_eq!(t.stroke.unwrap().primitive, Primitive::LineStrip);
    }

    #[test]
    fn test_star_passes_through_vertices() {
        let geometry = Geometry::star(Point::new(600.0, 350.0), Point::new(600.0, 250.0));
        let shape = Shape::new(geometry, style(true, 1.0));
        let t = tessellate(&shape).unwrap();
        assert_eq!(t.fill.unwrap().vertices.len(), 10);
        assert_eq!(t.stroke.unwrap().primitive, Primitive::LineLoop);
    }

    #[test]
    fn test_bezier_samples() {
        let control = pts(&[(0.0, 0.0), (100.0, 300.0), (500.0, 300.0), (600.0, 0.0)]);
        let shape = Shape::new(
            Geometry::Bezier {
                control_points: control,
            },
            style(true, 2.0),
        );
        let t = tessellate(&shape).unwrap();
        assert!(t.fill.is_none());
        let stroke = t.stroke.unwrap();
        assert_eq!(stroke.primitive, Primitive::LineStrip);
        assert_eq!(stroke.vertices.len(), 101);
        assert_eq!(stroke.vertices[0], Ndc::new(-1.0, 1.0));
        assert_eq!(stroke.vertices[100], Ndc::new(0.0, 1.0));
    }

    #[test]
    fn test_cubic_bezier_midpoint() {
        let p = cubic_bezier(
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(100.0, 0.0),
            0.5,
        );
        assert_eq!(p, Point::new(50.0, 75.0));
    }

    #[test]
    fn test_arc_quarter() {
        let shape = Shape::new(
            Geometry::Arc {
                points: pts(&[(600.0, 350.0), (660.0, 350.0)]),
                start_angle: 0.0,
                end_angle: std::f64::consts::FRAC_PI_2,
            },
            style(true, 1.0),
        );
        let t = tessellate(&shape).unwrap();
        let stroke = t.stroke.unwrap();
        assert_eq!(stroke.primitive, Primitive::LineStrip);
        assert_eq!(stroke.vertices.len(), 91);
        // Clockwise on screen: a quarter turn ends below the center.
        let last = stroke.vertices[90];
        assert!(last.x.abs() < 1e-12);
        assert!((last.y + 0.1).abs() < 1e-12);
        let fill = t.fill.unwrap();
        assert_eq!(fill.primitive, Primitive::TriangleFan);
        assert_eq!(fill.vertices.len(), 92);
    }

    #[test]
    fn test_arc_wraps_backwards_range() {
        let center = Ndc::new(0.0, 0.0);
        let v = arc_vertices(center, 1.0, std::f64::consts::PI, 0.0);
        // pi -> 0 clockwise is the other half turn.
        assert_eq!(v.len(), 181);
    }

    #[test]
    fn test_insufficient_points() {
        let shape = Shape::new(
            Geometry::Rectangle {
                points: pts(&[(0.0, 0.0)]),
            },
            style(true, 2.0),
        );
        let err = tessellate(&shape).unwrap_err();
        assert_eq!(err.found, 1);
        assert_eq!(err.to_string(), "rectangle needs exactly 2 points, found 1");
    }

    #[test]
    fn test_bezier_needs_four_control_points() {
        let shape = Shape::new(
            Geometry::Bezier {
                control_points: pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
            },
            style(false, 2.0),
        );
        assert!(tessellate(&shape).is_err());
    }
}
