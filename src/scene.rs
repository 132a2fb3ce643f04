//! The editable model: shapes, functions and the plotting viewport.

use serde::{Deserialize, Serialize};

use crate::geom::shape::Shape;
use crate::plot::types::{FunctionId, GraphFunction, Viewport, SERIES_COLORS};

/// Expression given to a freshly added function.
pub const DEFAULT_EXPRESSION: &str = "x^2";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Drawn back to front.
    pub shapes: Vec<Shape>,
    /// Emitted after all shapes, in list order.
    pub functions: Vec<GraphFunction>,
    pub viewport: Viewport,
}

impl Scene {
    /// A sine wave and a vertical line, ready to generate.
    pub fn starter(viewport: Viewport) -> Self {
        Self {
            shapes: Vec::new(),
            functions: vec![
                GraphFunction::new(FunctionId(1), "sin(x)", "#FF0000"),
                GraphFunction::new(FunctionId(2), "x = 3", "#00AA00"),
            ],
            viewport,
        }
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Append `x^2` with the next palette color and return its id.
    pub fn add_function(&mut self) -> FunctionId {
        let id = self.next_function_id();
        let color = SERIES_COLORS[self.functions.len() % SERIES_COLORS.len()];
        self.functions.push(GraphFunction::new(id, DEFAULT_EXPRESSION, color));
        id
    }

    pub fn function(&self, id: FunctionId) -> Option<&GraphFunction> {
        self.functions.iter().find(|f| f.id == id)
    }

    pub fn function_mut(&mut self, id: FunctionId) -> Option<&mut GraphFunction> {
        self.functions.iter_mut().find(|f| f.id == id)
    }

    pub fn remove_function(&mut self, id: FunctionId) -> Option<GraphFunction> {
        let pos = self.functions.iter().position(|f| f.id == id)?;
        Some(self.functions.remove(pos))
    }

    /// List position of a function, used to order diagnostics.
    pub fn function_position(&self, id: FunctionId) -> Option<usize> {
        self.functions.iter().position(|f| f.id == id)
    }

    /// One past the largest current id.
    fn next_function_id(&self) -> FunctionId {
        let max = self.functions.iter().map(|f| f.id.0).max().unwrap_or(0);
        FunctionId(max + 1)
    }
}
