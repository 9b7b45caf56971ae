//! View-side state types shared with the frontends.
//!
//! These types avoid referencing platform-specific APIs and are suitable for
//! use on both native and web targets. Frontends keep them current on resize
//! so picking and rendering agree on the same projection.

use crate::config::SceneConfig;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_config(config: &SceneConfig, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(config.camera_eye),
            target: Vec3::from_array(config.camera_target),
            up: Vec3::Y,
            aspect: aspect.max(0.01),
            fovy_radians: config.fov_degrees.to_radians(),
            znear: config.near,
            zfar: config.far,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Camera-to-world transform, used to hang nodes in front of the lens.
    pub fn world_from_view(&self) -> Mat4 {
        self.view_matrix().inverse()
    }

    /// Map an NDC point (z in clip depth \[0, 1\]) back to world space.
    pub fn unproject(&self, ndc: Vec2, depth: f32) -> Vec3 {
        let inv = self.view_proj().inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, depth, 1.0);
        p.truncate() / p.w
    }
}

/// Size of the drawing surface in the same units pointer events arrive in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
