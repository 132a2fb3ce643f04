pub mod render;
pub mod sample;
pub mod types;
