use crate::config::CameraConfig;
use glam::{Mat4, Vec2, Vec3, Vec4};
use winit::dpi::PhysicalSize;

/// Top-down orthographic camera.
///
/// `position.y` is the rig height and stays fixed: `pan` restores it after
/// the additive update, and zoom only touches the orthographic half-height.
#[derive(Debug, Clone)]
pub struct OrthoCamera {
    pub position: Vec3,
    pub half_height: f32,
    pub pitch_radians: f32,
    pub near: f32,
    pub far: f32,
    zoom_limits: (f32, f32),
}

impl OrthoCamera {
    pub fn new(position: Vec3, half_height: f32, pitch_radians: f32) -> Self {
        Self { position, half_height, pitch_radians, near: 0.1, far: 200.0, zoom_limits: (4.0, 10.0) }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::new(
            Vec3::new(0.0, config.height, 0.0),
            config.zoom_initial,
            config.pitch_degrees.to_radians(),
        );
        camera.set_zoom_limits(config.zoom_min, config.zoom_max);
        camera
    }

    pub fn set_zoom_limits(&mut self, min: f32, max: f32) {
        debug_assert!(min > 0.0 && max > min);
        self.zoom_limits = (min, max);
        self.half_height = self.half_height.clamp(min, max);
    }

    pub fn zoom_limits(&self) -> (f32, f32) {
        self.zoom_limits
    }

    /// Additive zoom: one frame's axis sample added to the orthographic
    /// half-height, then clamped to the limits. No smoothing.
    pub fn apply_zoom_delta(&mut self, delta: f32) {
        self.half_height = (self.half_height + delta).clamp(self.zoom_limits.0, self.zoom_limits.1);
    }

    /// Translates the camera by a world-space delta, keeping the rig height.
    pub fn pan(&mut self, delta: Vec3) {
        let height = self.position.y;
        self.position += delta;
        self.position.y = height;
    }

    /// View direction derived from pitch; pitch 0 looks along -Z at the
    /// horizon, pi/2 looks straight down.
    pub fn forward(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch_radians.sin_cos();
        Vec3::new(0.0, -sin_pitch, -cos_pitch)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.forward();
        let up = if forward.y.abs() > 0.999 { -Vec3::Z } else { Vec3::Y };
        Mat4::look_to_rh(self.position, forward, up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let half_width = self.half_height * aspect.max(0.0001);
        Mat4::orthographic_rh_gl(
            -half_width,
            half_width,
            -self.half_height,
            self.half_height,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self, viewport: PhysicalSize<u32>) -> Mat4 {
        self.projection_matrix(Self::aspect(viewport)) * self.view_matrix()
    }

    /// Generates a world-space ray through a screen-space position.
    ///
    /// For an orthographic projection the direction equals the view forward
    /// and the origin shifts per pixel across the near plane.
    pub fn screen_ray(&self, screen: Vec2, viewport: PhysicalSize<u32>) -> Option<(Vec3, Vec3)> {
        if viewport.width == 0 || viewport.height == 0 {
            return None;
        }
        let ndc_x = (2.0 * screen.x / viewport.width as f32) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / viewport.height as f32);
        let inv = self.view_projection(viewport).inverse();
        let near = inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        if near.w.abs() < f32::EPSILON || far.w.abs() < f32::EPSILON {
            return None;
        }
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;
        let dir = far - near;
        if dir.length_squared() <= f32::EPSILON {
            return None;
        }
        Some((near, dir.normalize()))
    }

    fn aspect(viewport: PhysicalSize<u32>) -> f32 {
        if viewport.height == 0 {
            1.0
        } else {
            viewport.width as f32 / viewport.height as f32
        }
    }
}
