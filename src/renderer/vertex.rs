//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Quadrant;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const QUADRANT_RED: [f32; 4] = [0.906, 0.298, 0.235, 1.0];
    pub const QUADRANT_BLUE: [f32; 4] = [0.204, 0.596, 0.863, 1.0];
    pub const QUADRANT_GREEN: [f32; 4] = [0.180, 0.800, 0.443, 1.0];
    pub const QUADRANT_YELLOW: [f32; 4] = [0.945, 0.769, 0.059, 1.0];
    pub const HUB: [f32; 4] = [0.204, 0.286, 0.369, 1.0];
    pub const HAND_OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}

/// Display color for a sector
pub fn quadrant_color(quadrant: Quadrant) -> [f32; 4] {
    match quadrant {
        Quadrant::Red => colors::QUADRANT_RED,
        Quadrant::Blue => colors::QUADRANT_BLUE,
        Quadrant::Green => colors::QUADRANT_GREEN,
        Quadrant::Yellow => colors::QUADRANT_YELLOW,
    }
}
