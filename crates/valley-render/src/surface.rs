//! Cross-platform surface handling that normalizes platform-specific behavior.
//!
//! Handles Wayland zero-size windows, macOS Retina scaling, and Windows DPI
//! changes by providing a consistent API for surface dimensions.

/// Minimum surface dimension (prevents zero-size panics).
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Physical pixel dimensions of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalSize {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

/// Event produced when the surface dimensions or scale factor change.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceResizeEvent {
    /// New physical pixel dimensions.
    pub physical: PhysicalSize,
    /// New logical width (physical / scale_factor).
    pub logical_width: f64,
    /// New logical height (physical / scale_factor).
    pub logical_height: f64,
    /// Current scale factor.
    pub scale_factor: f64,
}

/// Normalizes platform-specific surface behavior across Linux (Wayland/X11),
/// macOS (Retina), and Windows (DPI scaling).
///
/// Always reports physical pixel dimensions for GPU surface configuration.
/// Zero-size surfaces (common on Wayland) are clamped to 1×1 to prevent panics.
pub struct SurfaceWrapper {
    physical_width: u32,
    physical_height: u32,
    logical_width: f64,
    logical_height: f64,
    scale_factor: f64,
    /// Whether the surface has been configured at least once with valid dimensions.
    configured: bool,
}

impl SurfaceWrapper {
    /// Creates a new `SurfaceWrapper` from initial physical dimensions and scale factor.
    ///
    /// If the initial dimensions are zero (common on Wayland before the compositor
    /// assigns a size), they are clamped to 1 and the wrapper is marked as unconfigured.
    pub fn new(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        let has_valid_size = physical_width > 0 && physical_height > 0;
        let width = physical_width.max(MIN_SURFACE_DIMENSION);
        let height = physical_height.max(MIN_SURFACE_DIMENSION);

        Self {
            physical_width: width,
            physical_height: height,
            logical_width: width as f64 / scale_factor,
            logical_height: height as f64 / scale_factor,
            scale_factor,
            configured: has_valid_size,
        }
    }

    /// Handle a window resize event. Returns a resize event if the surface
    /// dimensions actually changed.
    ///
    /// Dimensions are clamped to a minimum of 1×1 to prevent wgpu panics.
    pub fn handle_resize(
        &mut self,
        physical_width: u32,
        physical_height: u32,
    ) -> Option<SurfaceResizeEvent> {
        let width = physical_width.max(MIN_SURFACE_DIMENSION);
        let height = physical_height.max(MIN_SURFACE_DIMENSION);

        if width == self.physical_width && height == self.physical_height {
            return None;
        }

        self.physical_width = width;
        self.physical_height = height;
        self.logical_width = width as f64 / self.scale_factor;
        self.logical_height = height as f64 / self.scale_factor;
        self.configured = true;

        Some(SurfaceResizeEvent {
            physical: PhysicalSize { width, height },
            logical_width: self.logical_width,
            logical_height: self.logical_height,
            scale_factor: self.scale_factor,
        })
    }

    /// Handle a scale factor change event. Returns a resize event because
    /// the physical dimensions change even if the logical size stays the same.
    pub fn handle_scale_factor_changed(
        &mut self,
        new_scale_factor: f64,
        new_physical_width: u32,
        new_physical_height: u32,
    ) -> Option<SurfaceResizeEvent> {
        self.scale_factor = new_scale_factor;
        self.handle_resize(new_physical_width, new_physical_height)
    }

    /// Get the current physical pixel dimensions for surface configuration.
    pub fn physical_size(&self) -> PhysicalSize {
        PhysicalSize {
            width: self.physical_width,
            height: self.physical_height,
        }
    }

    /// Get the current physical width in pixels.
    pub fn physical_width(&self) -> u32 {
        self.physical_width
    }

    /// Get the current physical height in pixels.
    pub fn physical_height(&self) -> u32 {
        self.physical_height
    }

    /// Get the current logical width (physical / scale_factor).
    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    /// Get the current logical height (physical / scale_factor).
    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    /// Get the current scale factor.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Width / height as an f32, for camera aspect ratios.
    pub fn aspect_ratio(&self) -> f32 {
        self.physical_width as f32 / self.physical_height.max(1) as f32
    }

    /// Whether the surface has been configured with a valid (non-zero) size.
    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_initial_size_clamped_and_unconfigured() {
        let wrapper = SurfaceWrapper::new(0, 0, 1.0);
        assert_eq!(wrapper.physical_width(), 1);
        assert_eq!(wrapper.physical_height(), 1);
        assert!(!wrapper.is_configured());
    }

    #[test]
    fn test_valid_initial_size_is_configured() {
        let wrapper = SurfaceWrapper::new(800, 600, 1.0);
        assert!(wrapper.is_configured());
        assert_eq!(
            wrapper.physical_size(),
            PhysicalSize {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn test_resize_returns_event_on_change() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        let event = wrapper.handle_resize(1024, 768).expect("resize event");
        assert_eq!(event.physical.width, 1024);
        assert_eq!(event.physical.height, 768);
    }

    #[test]
    fn test_resize_same_size_returns_none() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        assert!(wrapper.handle_resize(800, 600).is_none());
    }

    #[test]
    fn test_resize_zero_clamped() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        let event = wrapper.handle_resize(0, 0).expect("resize event");
        assert_eq!(event.physical.width, 1);
        assert_eq!(event.physical.height, 1);
    }

    #[test]
    fn test_logical_size_respects_scale_factor() {
        let wrapper = SurfaceWrapper::new(1600, 1200, 2.0);
        assert!((wrapper.logical_width() - 800.0).abs() < f64::EPSILON);
        assert!((wrapper.logical_height() - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_factor_change_produces_event() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        let event = wrapper
            .handle_scale_factor_changed(2.0, 1600, 1200)
            .expect("resize event");
        assert!((event.scale_factor - 2.0).abs() < f64::EPSILON);
        assert!((event.logical_width - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aspect_ratio() {
        let wrapper = SurfaceWrapper::new(800, 600, 1.0);
        assert!((wrapper.aspect_ratio() - 800.0 / 600.0).abs() < 1e-6);
    }
}
