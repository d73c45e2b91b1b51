//! Vertex layout and day/night colors

use bytemuck::{Pod, Zeroable};

/// Flat-colored 2D vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND_DAY: [f32; 4] = [0.97, 0.97, 0.97, 1.0];
    pub const BACKGROUND_NIGHT: [f32; 4] = [0.13, 0.13, 0.14, 1.0];
    pub const INK_DAY: [f32; 4] = [0.33, 0.33, 0.33, 1.0]; // #535353
    pub const INK_NIGHT: [f32; 4] = [0.82, 0.82, 0.82, 1.0]; // #d0d0d0
    pub const CACTUS_DAY: [f32; 4] = [0.11, 0.37, 0.13, 1.0]; // #1b5e20
    pub const CACTUS_NIGHT: [f32; 4] = [0.18, 0.49, 0.2, 1.0]; // #2e7d32
    pub const CLOUD_DAY: [f32; 4] = [1.0, 1.0, 1.0, 0.7];
    pub const CLOUD_NIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.3];
    pub const EYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Palette for one half of the day/night cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    /// Player, flyers and ground line
    pub ink: [f32; 4],
    pub cactus: [f32; 4],
    pub cloud: [f32; 4],
}

impl Palette {
    pub fn for_mode(is_day: bool) -> Self {
        if is_day {
            Self {
                background: colors::BACKGROUND_DAY,
                ink: colors::INK_DAY,
                cactus: colors::CACTUS_DAY,
                cloud: colors::CLOUD_DAY,
            }
        } else {
            Self {
                background: colors::BACKGROUND_NIGHT,
                ink: colors::INK_NIGHT,
                cactus: colors::CACTUS_NIGHT,
                cloud: colors::CLOUD_NIGHT,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::desc().array_stride, 24);
    }

    #[test]
    fn test_night_palette_is_darker() {
        let day = Palette::for_mode(true);
        let night = Palette::for_mode(false);
        assert!(night.background[0] < day.background[0]);
        assert!(night.ink[0] > day.ink[0]);
        assert!(night.cloud[3] < day.cloud[3]);
    }
}
