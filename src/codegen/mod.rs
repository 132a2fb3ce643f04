//! FreeGLUT program synthesis from shapes and sampled functions.

pub mod emit;
pub mod scaffold;

use log::{debug, warn};

use crate::diagnostics::Diagnostic;
use crate::geom::color::hex_to_rgb;
use crate::geom::coords::{normalize, Extent, Ndc};
use crate::geom::shape::Shape;
use crate::geom::tessellate::{tessellate, Pen, Primitive};
use crate::plot::types::SampledFunction;

/// Generated program text plus whatever had to be skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Synthesis {
    pub program: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the complete program.
///
/// Shapes come first in collection order, then functions in list order.
/// A shape that cannot be tessellated keeps its comment but draws nothing.
/// Functions without a single sample are left out of the graph numbering.
pub fn synthesize(shapes: &[Shape], sampled: &[SampledFunction]) -> Synthesis {
    let mut out = String::from(scaffold::HEADER);
    let mut diagnostics = Vec::new();

    for (index, shape) in shapes.iter().enumerate() {
        emit::comment(&mut out, &format!("Shape {}: {}", index + 1, shape.kind()));
        match tessellate(shape) {
            Ok(tessellation) => {
                debug!("shape {}: {}", index + 1, shape.kind());
                if let Some(fill) = &tessellation.fill {
                    emit::pass(&mut out, fill);
                    out.push('\n');
                }
                if let Some(stroke) = &tessellation.stroke {
                    emit::pass(&mut out, stroke);
                }
            }
            Err(err) => {
                warn!("skipping shape {}: {}", index + 1, err);
                diagnostics.push(Diagnostic::shape(index, &err));
            }
        }
        out.push('\n');
    }

    let mut plotted = Vec::with_capacity(sampled.len());
    for function in sampled {
        if function.points.iter().any(Option::is_some) {
            plotted.push(function);
        } else {
            warn!("function {} has no samples in the viewport", function.id);
            diagnostics.push(Diagnostic::function_message(
                function.id,
                "no samples inside the viewport",
            ));
        }
    }

    if !plotted.is_empty() {
        emit::comment(&mut out, "Graph plots from mathematical functions");
        for (index, function) in plotted.into_iter().enumerate() {
            let segments = function.drawable_segments();
            if segments.is_empty() {
                warn!("function {} has nothing to draw", function.id);
                diagnostics.push(Diagnostic::function_message(
                    function.id,
                    "no drawable segment in the viewport",
                ));
                continue;
            }
            let color = hex_to_rgb(&function.color);
            for segment in segments {
                let vertices: Vec<Ndc> = segment
                    .iter()
                    .map(|p| normalize(*p, Extent::PLOTTING))
                    .collect();
                emit::comment(
                    &mut out,
                    &format!("Graph function {} - {} vertices", index + 1, vertices.len()),
                );
                emit::color(&mut out, color);
                emit::pen(&mut out, Pen::LineWidth(emit::GRAPH_LINE_WIDTH));
                emit::primitive_block(&mut out, Primitive::LineStrip, &vertices);
                out.push('\n');
            }
        }
    }

    out.push_str(scaffold::FOOTER);
    Synthesis {
        program: out,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Subject;
    use crate::geom::coords::Point;
    use crate::geom::shape::{Geometry, ShapeKind, Style};
    use crate::plot::types::FunctionId;

    fn rectangle(filled: bool) -> Shape {
        Shape::new(
            Geometry::Rectangle {
                points: vec![Point::new(0.0, 0.0), Point::new(100.0, 50.0)],
            },
            Style {
                filled,
                ..Style::default()
            },
        )
    }

    #[test]
    fn test_empty_scene_is_scaffold_only() {
        let s = synthesize(&[], &[]);
        assert_eq!(s.program, format!("{}{}", scaffold::HEADER, scaffold::FOOTER));
        assert!(s.diagnostics.is_empty());
    }

    #[test]
    fn test_rectangle_block() {
        let s = synthesize(&[rectangle(true)], &[]);
        let body = s
            .program
            .strip_prefix(scaffold::HEADER)
            .and_then(|rest| rest.strip_suffix(scaffold::FOOTER))
            .unwrap();
        let expected = "    // Shape 1: rectangle
    glColor3f(1.000f, 1.000f, 1.000f);
    glBegin(GL_QUADS);
        glVertex2f(-1.000f, 1.000f);
        glVertex2f(-0.833f, 1.000f);
        glVertex2f(-0.833f, 0.857f);
        glVertex2f(-1.000f, 0.857f);
    glEnd();

    glColor3f(0.000f, 0.000f, 0.000f);
    glLineWidth(2.0f);
    glBegin(GL_LINE_LOOP);
        glVertex2f(-1.000f, 1.000f);
        glVertex2f(-0.833f, 1.000f);
        glVertex2f(-0.833f, 0.857f);
        glVertex2f(-1.000f, 0.857f);
    glEnd();

";
        assert_eq!(body, expected);
    }

    #[test]
    fn test_invalid_shape_keeps_numbering() {
        let broken = Shape::new(
            Geometry::Triangle {
                points: vec![Point::new(0.0, 0.0)],
            },
            Style::default(),
        );
        let s = synthesize(&[broken, rectangle(false)], &[]);
        assert!(s
            .program
            .contains("    // Shape 1: triangle\n\n    // Shape 2: rectangle\n"));
        assert_eq!(s.diagnostics.len(), 1);
        assert_eq!(
            s.diagnostics[0].subject,
            Subject::Shape {
                index: 0,
                kind: ShapeKind::Triangle
            }
        );
    }

    #[test]
    fn test_graph_segments() {
        let sampled = SampledFunction {
            id: FunctionId(4),
            color: "#00AA00".to_string(),
            points: vec![
                Some(Point::new(0.0, 0.0)),
                Some(Point::new(400.0, 300.0)),
                None,
                Some(Point::new(600.0, 300.0)),
                None,
                Some(Point::new(700.0, 150.0)),
                Some(Point::new(800.0, 600.0)),
            ],
        };
        let s = synthesize(&[], &[sampled]);
        assert!(s
            .program
            .contains("    // Graph plots from mathematical functions\n"));
        assert_eq!(s.program.matches("// Graph function 1 - 2 vertices").count(), 2);
        assert_eq!(s.program.matches("glBegin(GL_LINE_STRIP);").count(), 2);
        assert!(s.program.contains("    glColor3f(0.000f, 0.667f, 0.000f);\n"));
        assert!(s.program.contains("        glVertex2f(0.750f, 0.500f);\n"));
        assert!(s.diagnostics.is_empty());
    }

    #[test]
    fn test_function_without_segments_is_reported() {
        let sampled = SampledFunction {
            id: FunctionId(9),
            color: "#000000".to_string(),
            points: vec![Some(Point::new(1.0, 1.0))],
        };
        let s = synthesize(&[], &[sampled]);
        assert!(!s.program.contains("Graph function"));
        assert_eq!(
            s.diagnostics[0].subject,
            Subject::Function { id: FunctionId(9) }
        );
    }

    #[test]
    fn test_empty_sampling_takes_no_number() {
        let empty = SampledFunction {
            id: FunctionId(1),
            color: "#FF0000".to_string(),
            points: Vec::new(),
        };
        let s = synthesize(&[], &[empty.clone()]);
        assert!(!s.program.contains("Graph plots"));
        assert_eq!(s.diagnostics.len(), 1);

        let line = SampledFunction {
            id: FunctionId(2),
            color: "#0000FF".to_string(),
            points: vec![Some(Point::new(0.0, 0.0)), Some(Point::new(800.0, 600.0))],
        };
        let s = synthesize(&[], &[empty, line]);
        assert!(s.program.contains("    // Graph function 1 - 2 vertices\n"));
        assert!(!s.program.contains("Graph function 2"));
        assert_eq!(s.diagnostics[0].subject, Subject::Function { id: FunctionId(1) });
    }
}
