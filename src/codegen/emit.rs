//! Formatting of individual drawing blocks.
//!
//! Every coordinate and color channel goes through [`fixed3`], which is what
//! makes two syntheses of the same scene byte-identical.

use std::fmt::Write;

use crate::geom::color::Rgb;
use crate::geom::coords::Ndc;
use crate::geom::tessellate::{Pass, Pen, Primitive};

const INDENT: &str = "    ";
const VERTEX_INDENT: &str = "        ";
/// Line width for function plots.
pub const GRAPH_LINE_WIDTH: f64 = 2.0;

/// Three decimals and a C float suffix.
pub fn fixed3(v: f64) -> String {
    // Negative values that round to zero print as 0.000, not -0.000.
    if v.abs() < 0.0005 {
        return "0.000f".to_string();
    }
    // Exact halves of a thousandth are odd sixteenths; they round away from zero.
    let sixteenths = v * 16.0;
    let v = if sixteenths.fract() == 0.0 && sixteenths % 2.0 != 0.0 {
        (v * 1000.0).round() / 1000.0
    } else {
        v
    };
    format!("{:.3}f", v)
}

fn pen_value(v: f64) -> String {
    format!("{:.1}f", v)
}

pub fn comment(out: &mut String, text: &str) {
    let _ = writeln!(out, "{}// {}", INDENT, text);
}

pub fn color(out: &mut String, c: Rgb) {
    let _ = writeln!(
        out,
        "{}glColor3f({}, {}, {});",
        INDENT,
        fixed3(c.r),
        fixed3(c.g),
        fixed3(c.b)
    );
}

pub fn pen(out: &mut String, pen: Pen) {
    let _ = match pen {
        Pen::LineWidth(w) => writeln!(out, "{}glLineWidth({});", INDENT, pen_value(w)),
        Pen::PointSize(s) => writeln!(out, "{}glPointSize({});", INDENT, pen_value(s)),
    };
}

/// `glBegin`, one `glVertex2f` per vertex, `glEnd`.
pub fn primitive_block(out: &mut String, primitive: Primitive, vertices: &[Ndc]) {
    let _ = writeln!(out, "{}glBegin({});", INDENT, primitive.gl_name());
    for v in vertices {
        let _ = writeln!(
            out,
            "{}glVertex2f({}, {});",
            VERTEX_INDENT,
            fixed3(v.x),
            fixed3(v.y)
        );
    }
    let _ = writeln!(out, "{}glEnd();", INDENT);
}

/// Color, optional pen state, then the primitive block.
pub fn pass(out: &mut String, pass: &Pass) {
    color(out, pass.color);
    if let Some(p) = pass.pen {
        pen(out, p);
    }
    primitive_block(out, pass.primitive, &pass.vertices);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed3() {
        assert_eq!(fixed3(1.0), "1.000f");
        assert_eq!(fixed3(-0.33333), "-0.333f");
        assert_eq!(fixed3(170.0 / 255.0), "0.667f");
        assert_eq!(fixed3(-0.0001), "0.000f");
        assert_eq!(fixed3(-0.0), "0.000f");
        assert_eq!(fixed3(-0.0004), "0.000f");
        // Exact ties round away from zero.
        assert_eq!(fixed3(0.0625), "0.063f");
        assert_eq!(fixed3(0.1875), "0.188f");
        assert_eq!(fixed3(-0.0625), "-0.063f");
        assert_eq!(fixed3(2.5625), "2.563f");
    }

    #[test]
    fn test_stroke_pass_text() {
        let p = Pass {
            primitive: Primitive::Lines,
            color: Rgb::new(1.0, 0.0, 0.0),
            pen: Some(Pen::LineWidth(2.0)),
            vertices: vec![Ndc::new(-1.0, 1.0), Ndc::new(0.5, -0.25)],
        };
        let mut out = String::new();
        pass(&mut out, &p);
        assert_eq!(
            out,
            "    glColor3f(1.000f, 0.000f, 0.000f);\n\
             \x20   glLineWidth(2.0f);\n\
             \x20   glBegin(GL_LINES);\n\
             \x20       glVertex2f(-1.000f, 1.000f);\n\
             \x20       glVertex2f(0.500f, -0.250f);\n\
             \x20   glEnd();\n"
        );
    }

    #[test]
    fn test_point_size_line() {
        let mut out = String::new();
        pen(&mut out, Pen::PointSize(5.0));
        assert_eq!(out, "    glPointSize(5.0f);\n");
    }
}
