use glam::{Mat4, Vec3};

/// First-person camera: fixed eye position, yaw/pitch mouse look, perspective
/// projection. Read by both the wgpu backend and the picking resolver.
pub struct FirstPersonCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self {
            // Eye height 1.5 at the room center, facing -Z.
            position: Vec3::new(0.0, 1.5, 0.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            sensitivity: 0.003,
        }
    }
}

impl FirstPersonCamera {
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Apply a mouse-look delta. Pitch is clamped shy of straight up/down so
    /// the view matrix never degenerates.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Aim the camera at a world-space point.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize();
        self.yaw = dir.z.atan2(dir.x);
        self.pitch = dir.y.asin();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_faces_negative_z() {
        let cam = FirstPersonCamera::default();
        let fwd = cam.forward();
        assert!((fwd - Vec3::NEG_Z).length() < 1e-5);
        assert_eq!(cam.position, Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn view_projection_is_finite() {
        let cam = FirstPersonCamera::default();
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn look_clamps_pitch() {
        let mut cam = FirstPersonCamera::default();
        cam.look(0.0, -1.0e6);
        assert!(cam.pitch <= 89.0_f32.to_radians() + 1e-6);
        cam.look(0.0, 1.0e6);
        assert!(cam.pitch >= -89.0_f32.to_radians() - 1e-6);
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut cam = FirstPersonCamera::default();
        let target = Vec3::new(3.0, 0.5, 0.0);
        cam.look_at(target);
        let dir = (target - cam.position).normalize();
        assert!((cam.forward() - dir).length() < 1e-5);
    }
}
