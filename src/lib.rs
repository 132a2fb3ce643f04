//! Vector shapes and function plots to a FreeGLUT / legacy OpenGL program.
//!
//! [`pipeline::recompute`] takes a [`scene::Scene`] and returns the program
//! text together with any [`diagnostics::Diagnostic`]s for entries it had to
//! skip.

pub mod codegen;
pub mod diagnostics;
pub mod geom;
pub mod lang;
pub mod persistence;
pub mod pipeline;
pub mod plot;
pub mod scene;
