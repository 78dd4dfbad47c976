//! Orbital camera for the 3D scene

use glam::{Mat4, Vec3, Vec4};

/// 3D perspective camera with orbital controls
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    // Orbital parameters
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Camera3D {
    pub fn new(aspect_ratio: f32) -> Self {
        let distance = 10.0;
        let yaw = 0.0f32;
        let pitch = 0.3f32;

        let position = Vec3::new(
            distance * pitch.cos() * yaw.sin(),
            distance * pitch.sin(),
            distance * pitch.cos() * yaw.cos(),
        );

        Self {
            position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 45.0f32.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 1000.0,
            distance,
            yaw,
            pitch,
            min_distance: 1.0,
            max_distance: 1000.0,
        }
    }

    /// Restrict how close and how far the camera may zoom
    pub fn with_zoom_range(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self.distance = self.distance.clamp(min, max);
        self
    }

    /// Update camera position based on orbital parameters
    pub fn update_orbital(&mut self) {
        self.position = self.target
            + Vec3::new(
                self.distance * self.pitch.cos() * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                self.distance * self.pitch.cos() * self.yaw.cos(),
            );
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-1.5, 1.5);
        self.update_orbital();
    }

    /// Zoom in/out, clamped to the configured range
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(self.min_distance, self.max_distance);
        self.update_orbital();
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Get the combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Unproject a window-space pixel into a world-space ray (origin, direction).
    ///
    /// Used for click picking against scene objects.
    pub fn screen_ray(&self, pixel_x: f32, pixel_y: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = 2.0 * pixel_x / width - 1.0;
        let ndc_y = 1.0 - 2.0 * pixel_y / height;

        let inv = self.view_projection().inverse();
        let near = inv * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        (near, (far - near).normalize())
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera_3d(camera: &Camera3D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_points_at_target() {
        let mut camera = Camera3D::new(16.0 / 9.0);
        camera.distance = 120.0;
        camera.pitch = 0.4;
        camera.update_orbital();

        let (origin, dir) = camera.screen_ray(640.0, 360.0, 1280.0, 720.0);
        let to_target = (camera.target - camera.position).normalize();

        assert!((origin - camera.position).length() < 1.0);
        assert!(dir.dot(to_target) > 0.999);
    }

    #[test]
    fn zoom_respects_configured_range() {
        let mut camera = Camera3D::new(1.0).with_zoom_range(40.0, 300.0);
        camera.zoom(1e6);
        assert_eq!(camera.distance, 40.0);
        camera.zoom(-1e6);
        assert_eq!(camera.distance, 300.0);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera3D::new(1.0);
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch <= 1.5);
        camera.orbit(0.0, -20.0);
        assert!(camera.pitch >= -1.5);
    }
}
