//! Orbit camera that circles a fixed look-at point.
//!
//! The camera position is stored in spherical coordinates (theta, phi, radius)
//! around the world origin. Mouse drags adjust the angles and radius directly;
//! the view and projection matrices are derived on demand.
//!
//! The projection uses reverse-Z (far and near swapped), matching the depth
//! buffer configuration in [`crate::depth`].

use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_4, PI};

use crate::pipeline::CameraUniform;

/// Minimum polar angle, keeps the camera off the vertical axis.
pub const PHI_MIN: f32 = 0.1;
/// Maximum polar angle.
pub const PHI_MAX: f32 = PI - 0.1;
/// Minimum orbit radius.
pub const RADIUS_MIN: f32 = 5.0;
/// Maximum orbit radius.
pub const RADIUS_MAX: f32 = 150.0;

/// Rotation speed for left-button drags, in degrees per pixel.
const ROTATE_DEGREES_PER_PIXEL: f32 = 0.25;
/// Zoom speed for right-button drags, in world units per pixel.
const ZOOM_UNITS_PER_PIXEL: f32 = 0.05;

/// Camera orbiting the world origin in spherical coordinates.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Azimuthal angle in radians, measured in the XZ plane.
    pub theta: f32,
    /// Polar angle in radians, measured from the +Y axis.
    pub phi: f32,
    /// Distance from the look-at point.
    pub radius: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Surface width / height.
    pub aspect_ratio: f32,
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            theta: 1.5 * PI,
            phi: 0.2 * PI,
            radius: 15.0,
            fov_y: FRAC_PI_4,
            aspect_ratio: 800.0 / 600.0,
            near: 1.0,
            far: 1000.0,
        }
    }
}

impl OrbitCamera {
    /// Creates an orbit camera with the default pose and the given aspect ratio.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Self::default()
        }
    }

    /// Rotate the orbit by a mouse drag of `(dx, dy)` pixels.
    ///
    /// A full-width drag sweeps a quarter degree per pixel. `phi` is clamped
    /// away from the poles so the view matrix up vector never degenerates.
    pub fn drag_rotate(&mut self, dx: f32, dy: f32) {
        self.theta += (ROTATE_DEGREES_PER_PIXEL * dx).to_radians();
        self.phi += (ROTATE_DEGREES_PER_PIXEL * dy).to_radians();
        self.phi = self.phi.clamp(PHI_MIN, PHI_MAX);
    }

    /// Adjust the orbit radius by a mouse drag of `(dx, dy)` pixels.
    pub fn drag_zoom(&mut self, dx: f32, dy: f32) {
        self.zoom(ZOOM_UNITS_PER_PIXEL * dx - ZOOM_UNITS_PER_PIXEL * dy);
    }

    /// Move the camera toward or away from the look-at point by `amount`
    /// world units, clamped to the valid radius range.
    pub fn zoom(&mut self, amount: f32) {
        self.radius = (self.radius + amount).clamp(RADIUS_MIN, RADIUS_MAX);
    }

    /// Update the aspect ratio after a surface resize.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// World-space eye position from the spherical coordinates.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.phi.sin() * self.theta.cos(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.sin(),
        )
    }

    /// View matrix looking from the eye position at the world origin.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), Vec3::ZERO, Vec3::Y)
    }

    /// Reverse-Z perspective projection: far and near are swapped so that
    /// the near plane maps to depth 1.0 and the far plane to 0.0.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.far, self.near)
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Pack the view-projection matrix into the shader uniform layout.
    #[must_use]
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_default_pose() {
        let camera = OrbitCamera::default();
        assert!((camera.theta - 1.5 * PI).abs() < 1e-6);
        assert!((camera.phi - 0.2 * PI).abs() < 1e-6);
        assert!((camera.radius - 15.0).abs() < 1e-6);
        assert!((camera.fov_y - FRAC_PI_4).abs() < 1e-6);
        assert!((camera.near - 1.0).abs() < 1e-6);
        assert!((camera.far - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_drag_rotate_quarter_degree_per_pixel() {
        let mut camera = OrbitCamera::default();
        let theta_before = camera.theta;
        camera.drag_rotate(100.0, 0.0);
        // 100 px * 0.25 deg/px = 25 degrees
        assert!((camera.theta - theta_before - 25.0_f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_phi_clamped_under_repeated_drags() {
        let mut camera = OrbitCamera::default();
        for _ in 0..1000 {
            camera.drag_rotate(0.0, 100.0);
        }
        assert!((camera.phi - PHI_MAX).abs() < 1e-6);

        for _ in 0..1000 {
            camera.drag_rotate(0.0, -100.0);
        }
        assert!((camera.phi - PHI_MIN).abs() < 1e-6);
    }

    #[test]
    fn test_radius_clamped_under_repeated_zoom() {
        let mut camera = OrbitCamera::default();
        for _ in 0..1000 {
            camera.drag_zoom(100.0, 0.0);
        }
        assert!((camera.radius - RADIUS_MAX).abs() < 1e-6);

        for _ in 0..1000 {
            camera.drag_zoom(0.0, 100.0);
        }
        assert!((camera.radius - RADIUS_MIN).abs() < 1e-6);
    }

    #[test]
    fn test_drag_zoom_direction() {
        let mut camera = OrbitCamera::default();
        let radius_before = camera.radius;
        camera.drag_zoom(10.0, 0.0);
        assert!((camera.radius - radius_before - 0.5).abs() < 1e-5);

        camera.drag_zoom(0.0, 10.0);
        assert!((camera.radius - radius_before).abs() < 1e-5);
    }

    #[test]
    fn test_eye_position_spherical_mapping() {
        let camera = OrbitCamera {
            theta: 0.0,
            phi: PI / 2.0,
            radius: 10.0,
            ..OrbitCamera::default()
        };
        // phi = 90° puts the camera in the XZ plane, theta = 0 on the +X axis.
        let eye = camera.eye_position();
        assert!((eye.x - 10.0).abs() < 1e-4);
        assert!(eye.y.abs() < 1e-4);
        assert!(eye.z.abs() < 1e-4);
    }

    #[test]
    fn test_eye_on_y_axis_at_small_phi() {
        let camera = OrbitCamera {
            phi: PHI_MIN,
            ..OrbitCamera::default()
        };
        let eye = camera.eye_position();
        // Nearly overhead: y dominates.
        assert!(eye.y > eye.x.abs());
        assert!(eye.y > eye.z.abs());
    }

    #[test]
    fn test_reverse_z_depth_mapping() {
        let camera = OrbitCamera {
            theta: 0.0,
            phi: PI / 2.0,
            radius: 15.0,
            aspect_ratio: 1.0,
            ..OrbitCamera::default()
        };
        let view_proj = camera.view_projection();

        // A point at the near plane in front of the camera maps to depth ~1.
        let eye = camera.eye_position();
        let forward = (Vec3::ZERO - eye).normalize();
        let near_point = eye + forward * camera.near;
        let clip = view_proj * Vec4::new(near_point.x, near_point.y, near_point.z, 1.0);
        assert!((clip.z / clip.w - 1.0).abs() < 1e-3);

        // A distant point maps close to 0.
        let far_point = eye + forward * 900.0;
        let clip = view_proj * Vec4::new(far_point.x, far_point.y, far_point.z, 1.0);
        assert!(clip.z / clip.w < 0.01);
    }

    #[test]
    fn test_view_matrix_looks_at_origin() {
        let camera = OrbitCamera::default();
        let view = camera.view_matrix();
        // The origin transforms to a point straight ahead at eye distance.
        let origin_view = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(origin_view.x.abs() < 1e-4);
        assert!(origin_view.y.abs() < 1e-4);
        assert!((origin_view.z + camera.radius).abs() < 1e-4);
    }

    #[test]
    fn test_uniform_packs_view_projection() {
        let camera = OrbitCamera::default();
        let uniform = camera.to_uniform();
        let expected = camera.view_projection().to_cols_array_2d();
        assert_eq!(uniform.view_proj, expected);
    }
}
