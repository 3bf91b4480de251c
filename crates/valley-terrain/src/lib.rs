//! Procedural terrain generation for the Waves and Valleys demo.
//!
//! A planar grid of sample points is displaced by a deterministic height
//! field and colored per vertex by elevation band, producing a renderable
//! mesh with a single named sub-mesh.

pub mod grid;
pub mod height;
pub mod mesh;

pub use grid::GridMesh;
pub use height::{HeightBand, classify_height, hills_height};
pub use mesh::{GRID_SUBMESH, Submesh, TerrainMesh, TerrainVertex, build_terrain};
