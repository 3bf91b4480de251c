//! Terrain mesh assembly: grid samples in, colored vertices out.

use bytemuck::{Pod, Zeroable};
use std::collections::HashMap;

use crate::grid::GridMesh;
use crate::height::{classify_height, hills_height};

/// Vertex format for terrain rendering: position plus per-vertex color.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl TerrainVertex {
    /// The vertex buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        use wgpu::{VertexAttribute, VertexFormat};

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TerrainVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// A named contiguous range within a shared index buffer, describing one
/// drawable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submesh {
    pub index_count: u32,
    pub start_index: u32,
    pub base_vertex: i32,
}

/// CPU-side terrain mesh: colored vertices, u16 indices, and named
/// sub-mesh ranges. Built once at startup and read-only afterward.
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    pub vertices: Vec<TerrainVertex>,
    pub indices: Vec<u16>,
    pub submeshes: HashMap<String, Submesh>,
}

impl TerrainMesh {
    /// Look up a named sub-mesh.
    pub fn submesh(&self, name: &str) -> Option<Submesh> {
        self.submeshes.get(name).copied()
    }
}

/// Name of the single sub-mesh covering the whole grid.
pub const GRID_SUBMESH: &str = "grid";

/// Displace and color a flat grid into the waves-and-valleys terrain.
///
/// Each sample keeps its (x, z); y comes from [`hills_height`] and the color
/// from that same y's elevation band. Connectivity passes through unchanged,
/// and a single sub-mesh named [`GRID_SUBMESH`] spans the full index range.
pub fn build_terrain(grid: &GridMesh) -> TerrainMesh {
    let vertices = grid
        .positions
        .iter()
        .map(|p| {
            let y = hills_height(p.x, p.z);
            TerrainVertex {
                position: [p.x, y, p.z],
                color: classify_height(y).color(),
            }
        })
        .collect();

    let indices = grid.indices.clone();

    let mut submeshes = HashMap::new();
    submeshes.insert(
        GRID_SUBMESH.to_string(),
        Submesh {
            index_count: indices.len() as u32,
            start_index: 0,
            base_vertex: 0,
        },
    );

    TerrainMesh {
        vertices,
        indices,
        submeshes,
    }
}
