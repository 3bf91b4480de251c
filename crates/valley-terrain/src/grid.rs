//! Planar grid mesh generation.
//!
//! Produces an ordered, row-major sequence of sample positions on the XZ
//! plane plus a triangle index list describing the grid's connectivity.
//! Heights and colors are applied later by [`crate::mesh::build_terrain`];
//! the grid itself is flat.

use glam::Vec3;

/// A flat rectangular grid: sample positions plus triangle connectivity.
///
/// Vertices are laid out row-major. Row 0 sits at the far edge
/// (`z = +depth/2`) and z decreases with the row index; x increases with the
/// column index. The grid is centered on the world origin.
#[derive(Debug, Clone)]
pub struct GridMesh {
    /// Sample positions, `rows * cols` entries, all with `y == 0`.
    pub positions: Vec<Vec3>,
    /// Triangle list, `(rows - 1) * (cols - 1) * 6` entries.
    pub indices: Vec<u16>,
    /// Number of sample rows along the z axis.
    pub rows: u32,
    /// Number of sample columns along the x axis.
    pub cols: u32,
}

impl GridMesh {
    /// Generate a grid covering `width` units along x and `depth` units
    /// along z with `rows * cols` sample points.
    ///
    /// Both `rows` and `cols` must be at least 2 (a grid needs at least one
    /// cell per axis); `u16` indices cap the grid at 65536 vertices.
    pub fn plane(width: f32, depth: f32, rows: u32, cols: u32) -> Self {
        assert!(rows >= 2 && cols >= 2, "grid needs at least 2x2 samples");
        assert!(
            (rows as u64) * (cols as u64) <= u64::from(u16::MAX) + 1,
            "grid exceeds u16 index range"
        );

        let half_width = 0.5 * width;
        let half_depth = 0.5 * depth;
        let dx = width / (cols - 1) as f32;
        let dz = depth / (rows - 1) as f32;

        let mut positions = Vec::with_capacity((rows * cols) as usize);
        for i in 0..rows {
            let z = half_depth - i as f32 * dz;
            for j in 0..cols {
                let x = -half_width + j as f32 * dx;
                positions.push(Vec3::new(x, 0.0, z));
            }
        }

        // Two triangles per cell, wound so the +Y side is the front face.
        let mut indices = Vec::with_capacity(((rows - 1) * (cols - 1) * 6) as usize);
        for i in 0..rows - 1 {
            for j in 0..cols - 1 {
                let top_left = (i * cols + j) as u16;
                let top_right = (i * cols + j + 1) as u16;
                let bottom_left = ((i + 1) * cols + j) as u16;
                let bottom_right = ((i + 1) * cols + j + 1) as u16;

                indices.extend_from_slice(&[top_left, top_right, bottom_left]);
                indices.extend_from_slice(&[bottom_left, top_right, bottom_right]);
            }
        }

        Self {
            positions,
            indices,
            rows,
            cols,
        }
    }

    /// Number of sample points in the grid.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the index list.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
