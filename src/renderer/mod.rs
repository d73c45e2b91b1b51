//! WebGPU rendering module
//!
//! The scene is rebuilt from scratch every frame as a flat triangle list and
//! drawn with a single pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::{Palette, Vertex};
