//! Window creation and event handling via winit.
//!
//! Provides [`AppState`] which implements winit's [`ApplicationHandler`] trait,
//! and a [`run`] function to start the event loop. Each redraw applies pending
//! mouse input to the orbit camera, uploads the view-projection uniform, and
//! draws the terrain grid.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use valley_config::Config;
use valley_input::{KeyboardState, MouseState};
use valley_render::{
    BufferAllocator, DepthBuffer, FrameEncoder, IndexData, MeshBuffer, OrbitCamera,
    RenderContext, RenderPassBuilder, SurfaceWrapper, TERRAIN_SHADER_SOURCE, TerrainPipeline,
    draw_terrain, init_render_context_blocking,
};
use valley_terrain::{GRID_SUBMESH, GridMesh, Submesh, build_terrain};

use crate::frame_stats::{FrameStats, title_with_stats};

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ));
    if config.window.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    attrs
}

/// Application state that manages the window, GPU context, and terrain scene.
pub struct AppState {
    /// The window handle, wrapped in `Arc` for sharing with the renderer.
    pub window: Option<Arc<Window>>,
    /// GPU context owning device, queue, and surface.
    pub gpu: Option<RenderContext>,
    /// Cross-platform surface wrapper that normalizes resize/DPI behavior.
    pub surface_wrapper: SurfaceWrapper,
    /// Depth buffer sized to the surface.
    pub depth_buffer: Option<DepthBuffer>,
    /// Terrain render pipeline.
    pub terrain_pipeline: Option<TerrainPipeline>,
    /// Terrain vertex/index buffers.
    pub terrain_mesh: Option<MeshBuffer>,
    /// Named draw ranges within the terrain buffers.
    pub submeshes: HashMap<String, Submesh>,
    /// Camera uniform buffer.
    pub camera_buffer: Option<wgpu::Buffer>,
    /// Camera bind group.
    pub camera_bind_group: Option<wgpu::BindGroup>,
    /// Orbit camera.
    pub camera: OrbitCamera,
    /// Frame-coherent mouse state.
    pub mouse_state: MouseState,
    /// Frame-coherent keyboard state.
    pub keyboard_state: KeyboardState,
    /// One-second FPS/frame-time averages for the title bar.
    pub frame_stats: FrameStats,
    /// Demo configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new `AppState` from a [`Config`].
    pub fn with_config(config: Config) -> Self {
        let aspect = config.window.width as f32 / config.window.height.max(1) as f32;
        Self {
            window: None,
            gpu: None,
            surface_wrapper: SurfaceWrapper::new(config.window.width, config.window.height, 1.0),
            depth_buffer: None,
            terrain_pipeline: None,
            terrain_mesh: None,
            submeshes: HashMap::new(),
            camera_buffer: None,
            camera_bind_group: None,
            camera: OrbitCamera::new(aspect),
            mouse_state: MouseState::new(),
            keyboard_state: KeyboardState::new(),
            frame_stats: FrameStats::new(),
            config,
        }
    }

    /// Returns the current physical surface width.
    pub fn surface_width(&self) -> u32 {
        self.surface_wrapper.physical_width()
    }

    /// Returns the current physical surface height.
    pub fn surface_height(&self) -> u32 {
        self.surface_wrapper.physical_height()
    }

    /// Build the terrain mesh and all GPU resources needed to draw it.
    fn initialize_rendering(&mut self, gpu: &RenderContext) {
        use wgpu::util::DeviceExt;

        let depth_buffer =
            DepthBuffer::new(&gpu.device, self.surface_width(), self.surface_height());

        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("terrain-shader"),
                source: wgpu::ShaderSource::Wgsl(TERRAIN_SHADER_SOURCE.into()),
            });

        let terrain_pipeline = TerrainPipeline::new(
            &gpu.device,
            &shader,
            gpu.surface_format,
            Some(DepthBuffer::FORMAT),
        );

        // Sample the height field once; the mesh is static after this.
        let terrain = &self.config.terrain;
        let grid = GridMesh::plane(terrain.width, terrain.depth, terrain.rows, terrain.cols);
        let terrain_mesh = build_terrain(&grid);
        info!(
            "Terrain built: {} vertices, {} triangles",
            terrain_mesh.vertices.len(),
            terrain_mesh.indices.len() / 3
        );

        let allocator = BufferAllocator::new(&gpu.device);
        let mesh_buffer = allocator.create_mesh(
            "terrain",
            bytemuck::cast_slice(&terrain_mesh.vertices),
            IndexData::U16(&terrain_mesh.indices),
        );

        self.camera
            .set_aspect_ratio(self.surface_width() as f32 / self.surface_height().max(1) as f32);

        let camera_uniform = self.camera.to_uniform();
        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("camera-uniform"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let camera_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &terrain_pipeline.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        self.submeshes = terrain_mesh.submeshes;
        self.depth_buffer = Some(depth_buffer);
        self.terrain_pipeline = Some(terrain_pipeline);
        self.terrain_mesh = Some(mesh_buffer);
        self.camera_buffer = Some(camera_buffer);
        self.camera_bind_group = Some(camera_bind_group);

        info!("Rendering initialized");
    }

    /// Apply a surface size change to the GPU surface, depth buffer, and camera.
    fn apply_resize(&mut self, width: u32, height: u32) {
        self.camera
            .set_aspect_ratio(width as f32 / height.max(1) as f32);

        if let Some(gpu) = &mut self.gpu {
            gpu.resize(width, height);
        }
        if let (Some(depth_buffer), Some(gpu)) = (&mut self.depth_buffer, &self.gpu) {
            depth_buffer.resize(&gpu.device, width, height);
        }
    }

    /// Apply this frame's accumulated mouse input to the orbit camera.
    fn update_camera_from_input(&mut self) {
        let sensitivity = self.config.camera.mouse_sensitivity;
        let mut delta = self.mouse_state.delta() * sensitivity;
        if self.config.camera.invert_y {
            delta.y = -delta.y;
        }

        if self.mouse_state.is_button_pressed(MouseButton::Left) {
            self.camera.drag_rotate(delta.x, delta.y);
        } else if self.mouse_state.is_button_pressed(MouseButton::Right) {
            self.camera.drag_zoom(delta.x, delta.y);
        }

        let scroll = self.mouse_state.scroll();
        if scroll != 0.0 {
            // Scroll up moves the camera closer.
            self.camera.zoom(-scroll);
        }
    }

    /// Render one frame.
    fn render_frame(&mut self) {
        let Some(gpu) = &self.gpu else {
            return;
        };
        let (Some(pipeline), Some(mesh), Some(bind_group), Some(depth), Some(buffer)) = (
            &self.terrain_pipeline,
            &self.terrain_mesh,
            &self.camera_bind_group,
            &self.depth_buffer,
            &self.camera_buffer,
        ) else {
            return;
        };

        let uniform = self.camera.to_uniform();
        gpu.queue
            .write_buffer(buffer, 0, bytemuck::cast_slice(&[uniform]));

        let surface_texture = match gpu.get_current_texture() {
            Ok(texture) => texture,
            Err(e) => {
                error!("Failed to acquire surface texture: {e}");
                return;
            }
        };

        let mut frame_encoder =
            FrameEncoder::new(&gpu.device, Arc::new(gpu.queue.clone()), surface_texture);

        let pass_builder = RenderPassBuilder::new()
            .label("terrain-pass")
            .depth(depth.view.clone(), DepthBuffer::CLEAR_VALUE);

        {
            let mut render_pass = frame_encoder.begin_render_pass(&pass_builder);
            if let Some(submesh) = self.submeshes.get(GRID_SUBMESH) {
                draw_terrain(&mut render_pass, pipeline, bind_group, mesh, submesh);
            }
        }

        frame_encoder.submit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = window_attributes_from_config(&self.config);
            let window = match event_loop.create_window(attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let scale_factor = window.scale_factor();
            let inner_size = window.inner_size();
            self.surface_wrapper =
                SurfaceWrapper::new(inner_size.width, inner_size.height, scale_factor);
            info!(
                "Window created: {}x{} (scale: {:.2})",
                inner_size.width, inner_size.height, scale_factor
            );

            match init_render_context_blocking(window.clone()) {
                Ok(ctx) => {
                    self.initialize_rendering(&ctx);
                    self.gpu = Some(ctx);
                }
                Err(e) => {
                    error!("GPU initialization failed: {e}");
                    event_loop.exit();
                    return;
                }
            }

            window.request_redraw();
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(resize) = self
                    .surface_wrapper
                    .handle_resize(new_size.width, new_size.height)
                {
                    self.apply_resize(resize.physical.width, resize.physical.height);
                    info!(
                        "Window resized to {}x{}",
                        resize.physical.width, resize.physical.height
                    );
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let new_inner = window.inner_size();
                    if let Some(resize) = self.surface_wrapper.handle_scale_factor_changed(
                        scale_factor,
                        new_inner.width,
                        new_inner.height,
                    ) {
                        self.apply_resize(resize.physical.width, resize.physical.height);
                        info!(
                            "Scale factor changed to {:.2}, resized to {}x{}",
                            scale_factor, resize.physical.width, resize.physical.height
                        );
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let escape = event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state.is_pressed();
                self.keyboard_state.process_event(&event);
                if escape {
                    info!("Escape pressed, shutting down");
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_state.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_state.on_button(button, state);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse_state.on_scroll(delta);
            }
            WindowEvent::CursorEntered { .. } => {
                self.mouse_state.on_cursor_entered();
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_state.on_cursor_left();
            }
            WindowEvent::RedrawRequested => {
                self.update_camera_from_input();
                self.render_frame();

                if self.config.debug.show_fps
                    && let Some(sample) = self.frame_stats.on_frame()
                    && let Some(window) = &self.window
                {
                    window.set_title(&title_with_stats(&self.config.window.title, &sample));
                }

                self.mouse_state.clear_transients();
                self.keyboard_state.clear_transients();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Create the event loop and run the application until exit.
pub fn run(config: Config) -> Result<(), winit::error::EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = AppState::with_config(config);
    event_loop.run_app(&mut app)
}
