//! GPU rendering layer for the Waves and Valleys demo.
//!
//! Owns device/surface initialization, the depth buffer, vertex/index buffer
//! allocation, the terrain render pipeline, the per-frame encoder, and the
//! orbit camera.

pub mod buffer;
pub mod camera;
pub mod depth;
pub mod gpu;
pub mod pass;
pub mod pipeline;
pub mod surface;

pub use buffer::{BufferAllocator, IndexData, MeshBuffer};
pub use camera::OrbitCamera;
pub use depth::DepthBuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use pass::{FrameEncoder, RenderPassBuilder};
pub use pipeline::{CameraUniform, TERRAIN_SHADER_SOURCE, TerrainPipeline, draw_terrain};
pub use surface::{PhysicalSize, SurfaceResizeEvent, SurfaceWrapper};
