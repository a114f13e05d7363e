//! WebGPU rendering module
//!
//! Flat-colored triangle lists: the ring sectors, the hub disc and the hand
//! are tessellated on the CPU each frame and drawn with a single pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::Vertex;
