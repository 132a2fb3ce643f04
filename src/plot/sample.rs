//! Turn a function definition into plotting-surface samples.

use log::debug;

use crate::geom::coords::Point;
use crate::lang::error::LangResult;
use crate::lang::{classify, Classified};
use crate::plot::types::*;

/// Parse `function.expression` and sample it across `viewport`.
///
/// Values that are non-finite or land more than [`SAMPLE_MARGIN`] pixels
/// above or below the surface become gaps.
pub fn sample_function(
    function: &GraphFunction,
    viewport: &Viewport,
) -> LangResult<SampledFunction> {
    let points = match classify(&function.expression)? {
        Classified::Vertical(x) => sample_vertical(x, viewport),
        Classified::Function(expr) => sample_curve(|x| expr.eval(x), viewport),
    };
    debug!(
        "sampled function {} '{}': {} entries",
        function.id,
        function.expression,
        points.len()
    );
    Ok(SampledFunction {
        id: function.id,
        color: function.color.clone(),
        points,
    })
}

fn sample_vertical(x: f64, viewport: &Viewport) -> Vec<Option<Point>> {
    let dy = (viewport.y_max - viewport.y_min) / f64::from(VERTICAL_STEPS);
    (0..=VERTICAL_STEPS)
        .map(|i| {
            let y = viewport.y_min + f64::from(i) * dy;
            Some(viewport.to_surface(x, y))
        })
        .collect()
}

fn sample_curve(f: impl Fn(f64) -> f64, viewport: &Viewport) -> Vec<Option<Point>> {
    let step = (viewport.x_max - viewport.x_min) / f64::from(SAMPLE_COUNT);
    let lower = -SAMPLE_MARGIN;
    let upper = f64::from(PLOT_HEIGHT) + SAMPLE_MARGIN;

    let mut points = Vec::with_capacity(SAMPLE_COUNT as usize + 1);
    for i in 0..=SAMPLE_COUNT {
        let x = viewport.x_min + f64::from(i) * step;
        let y = f(x);
        let surface = viewport.to_surface(x, y);
        let keep = y.is_finite() && surface.y >= lower && surface.y <= upper;
        if keep {
            points.push(Some(surface));
        } else if matches!(points.last(), Some(Some(_))) {
            points.push(None);
        }
    }
    points
}
