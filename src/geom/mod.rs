//! Shape model, colors, coordinate mapping and tessellation.

pub mod color;
pub mod coords;
pub mod shape;
pub mod tessellate;

pub use color::{hex_to_rgb, Rgb};
pub use coords::{normalize, Extent, Ndc, Point};
pub use shape::{Geometry, PointCount, Shape, ShapeKind, Style};
pub use tessellate::{tessellate, Pass, Pen, Primitive, TessellateError, Tessellation};
