//! Scene to program, recomputed from scratch on every change.

use log::{debug, warn};

use crate::codegen::{synthesize, Synthesis};
use crate::diagnostics::{Diagnostic, Subject};
use crate::plot::sample::sample_function;
use crate::plot::types::SampledFunction;
use crate::scene::Scene;

/// Sample every visible function in list order.
///
/// Functions that fail to parse are left out and reported.
pub fn sample_all(scene: &Scene) -> (Vec<SampledFunction>, Vec<Diagnostic>) {
    let mut sampled = Vec::new();
    let mut diagnostics = Vec::new();

    if !scene.viewport.is_valid() {
        warn!("invalid viewport {:?}, skipping all functions", scene.viewport);
        diagnostics.push(Diagnostic::viewport(format!(
            "empty or non-finite range x {}..{}, y {}..{}",
            scene.viewport.x_min, scene.viewport.x_max, scene.viewport.y_min, scene.viewport.y_max
        )));
        return (sampled, diagnostics);
    }

    for function in scene.functions.iter().filter(|f| f.visible) {
        match sample_function(function, &scene.viewport) {
            Ok(s) => sampled.push(s),
            Err(err) => {
                warn!("skipping function {} '{}': {}", function.id, function.expression, err);
                diagnostics.push(Diagnostic::function(function.id, &err));
            }
        }
    }
    (sampled, diagnostics)
}

/// Full recompute: sample, tessellate, synthesize.
///
/// Diagnostics list shapes first, then the viewport, then functions in list order.
pub fn recompute(scene: &Scene) -> Synthesis {
    let (sampled, mut diagnostics) = sample_all(scene);
    let mut synthesis = synthesize(&scene.shapes, &sampled);
    diagnostics.append(&mut synthesis.diagnostics);

    diagnostics.sort_by_key(|d| match d.subject {
        Subject::Shape { index, .. } => (0, index),
        Subject::Viewport => (1, 0),
        Subject::Function { id } => (2, scene.function_position(id).unwrap_or(usize::MAX)),
    });

    debug!(
        "recomputed: {} shapes, {} functions, {} diagnostics, {} bytes",
        scene.shapes.len(),
        sampled.len(),
        diagnostics.len(),
        synthesis.program.len()
    );
    synthesis.diagnostics = diagnostics;
    synthesis
}
