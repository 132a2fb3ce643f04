//! Preview rendering: sampled functions → PNG bytes via plotters.
use crate::plot::types::*;
use crate::geom::color::parse_hex;
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::prelude::*;

const BG_COLOR: RGBColor = RGBColor(255, 255, 255);
/// Grid color.
const GRID_COLOR: RGBColor = RGBColor(200, 200, 200);
/// Math-space axes.
const AXIS_COLOR: RGBColor = RGBColor(120, 120, 120);

/// A rendered preview image.
#[derive(Debug, Clone)]
pub struct RenderedPlot {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Render sampled functions onto a `width` x `height` PNG.
///
/// Samples are in plotting-surface pixels, so the chart spans the fixed
/// 800x600 surface regardless of the output size.
pub fn render_preview(
    sampled: &[SampledFunction],
    viewport: &Viewport,
    width: u32,
    height: u32,
) -> Result<RenderedPlot, String> {
    if width == 0 || height == 0 {
        return Err(format!("invalid preview size {}x{}", width, height));
    }
    let mut buf = vec![0u8; (width as usize) * (height as usize) * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&BG_COLOR).map_err(|e| format!("fill: {}", e))?;

        let surface_w = f64::from(PLOT_WIDTH);
        let surface_h = f64::from(PLOT_HEIGHT);
        let mut chart = ChartBuilder::on(&root)
            .build_cartesian_2d(0.0..surface_w, 0.0..surface_h)
            .map_err(|e| format!("chart build: {}", e))?;

        chart
            .configure_mesh()
            .axis_style(GRID_COLOR)
            .bold_line_style(GRID_COLOR.mix(0.6))
            .light_line_style(GRID_COLOR.mix(0.2))
            .x_labels(0)
            .y_labels(0)
            .draw()
            .map_err(|e| format!("mesh: {}", e))?;

        // Surface y grows downward; the chart's grows upward.
        let flip = |p: crate::geom::coords::Point| (p.x, surface_h - p.y);

        let origin = viewport.to_surface(0.0, 0.0);
        if (0.0..=surface_h).contains(&origin.y) {
            chart
                .draw_series(LineSeries::new(
                    [(0.0, surface_h - origin.y), (surface_w, surface_h - origin.y)],
                    AXIS_COLOR.stroke_width(1),
                ))
                .map_err(|e| format!("x axis: {}", e))?;
        }
        if (0.0..=surface_w).contains(&origin.x) {
            chart
                .draw_series(LineSeries::new(
                    [(origin.x, 0.0), (origin.x, surface_h)],
                    AXIS_COLOR.stroke_width(1),
                ))
                .map_err(|e| format!("y axis: {}", e))?;
        }

        for function in sampled {
            let color = series_color(&function.color);
            for segment in function.drawable_segments() {
                chart
                    .draw_series(LineSeries::new(
                        segment.into_iter().map(flip),
                        color.stroke_width(2),
                    ))
                    .map_err(|e| format!("draw series: {}", e))?;
            }
        }

        root.present().map_err(|e| format!("present: {}", e))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;

    Ok(RenderedPlot {
        png_bytes,
        width,
        height,
    })
}

/// Function color, black when malformed.
fn series_color(hex: &str) -> RGBColor {
    let (r, g, b) = parse_hex(hex).unwrap_or((0, 0, 0));
    RGBColor(r, g, b)
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| format!("PNG encode: {}", e))?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::sample::sample_function;

    fn sampled(exprs: &[(&str, &str)]) -> Vec<SampledFunction> {
        exprs
            .iter()
            .enumerate()
            .map(|(i, (expr, color))| {
                let f = GraphFunction::new(FunctionId(i as u64), *expr, *color);
                sample_function(&f, &Viewport::default()).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_render_simple() {
        let functions = sampled(&[("x^2", "#FF0000")]);
        let result = render_preview(&functions, &Viewport::default(), 800, 600).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);
        // PNG magic bytes
        assert_eq!(&result.png_bytes[1..4], b"PNG");
    }

    #[test]
    fn test_render_with_gaps_and_vertical() {
        let functions = sampled(&[("1/x", "#0000FF"), ("x = 3", "#00AA00")]);
        let result = render_preview(&functions, &Viewport::default(), 400, 300).unwrap();
        assert!(!result.png_bytes.is_empty());
    }

    #[test]
    fn test_render_empty() {
        let result = render_preview(&[], &Viewport::default(), 200, 150).unwrap();
        assert_eq!(&result.png_bytes[1..4], b"PNG");
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(render_preview(&[], &Viewport::default(), 0, 100).is_err());
    }

    #[test]
    fn test_series_color_fallback() {
        assert_eq!(series_color("#00AA00"), RGBColor(0, 170, 0));
        assert_eq!(series_color("green"), RGBColor(0, 0, 0));
    }
}
