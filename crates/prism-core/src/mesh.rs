//! Flattening the attached scene into world-space triangles for the GPU.

use crate::config::SceneConfig;
use crate::material::hex_to_rgb;
use crate::scene::Scene;
use crate::state::Camera;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    /// 1.0 for lit (standard) materials, 0.0 for flat (basic) ones.
    pub lit: f32,
    pub uv: [f32; 2],
}

impl SceneVertex {
    // Byte offsets for vertex buffer layouts
    pub const POSITION_OFFSET: u64 = 0;
    pub const NORMAL_OFFSET: u64 = 12;
    pub const COLOR_OFFSET: u64 = 24;
    pub const LIT_OFFSET: u64 = 36;
    pub const UV_OFFSET: u64 = 40;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// xyz: direction towards the light.
    pub light_dir: [f32; 4],
    /// rgb: ambient light colour.
    pub ambient: [f32; 4],
}

impl SceneUniforms {
    pub fn new(camera: &Camera, config: &SceneConfig) -> Self {
        let light = Vec3::from_array(config.light_position).normalize_or_zero();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            light_dir: light.extend(0.0).to_array(),
            ambient: hex_to_rgb(config.ambient_color).extend(1.0).to_array(),
        }
    }
}

/// Clear colour as linear-ish RGB doubles for the render pass.
pub fn clear_rgb(config: &SceneConfig) -> [f64; 3] {
    let c = hex_to_rgb(config.clear_color);
    [c.x as f64, c.y as f64, c.z as f64]
}

/// One draw call's worth of vertices sharing a texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawBatch {
    /// Texture key, or `None` for plain colour.
    pub texture: Option<&'static str>,
    pub first: u32,
    pub count: u32,
}

/// World-space vertices for every visible, attached triangle, sorted into
/// per-texture batches. Reused across frames to keep its allocations.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub vertices: Vec<SceneVertex>,
    pub batches: Vec<DrawBatch>,
    staged: Vec<(Option<&'static str>, [SceneVertex; 3])>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn rebuild(&mut self, scene: &Scene) {
        self.vertices.clear();
        self.batches.clear();
        self.staged.clear();

        let staged = &mut self.staged;
        let mut tris = Vec::new();
        scene.visit_attached(|_, node, world| {
            if !node.shape.has_geometry() || node.materials.is_empty() {
                return;
            }
            tris.clear();
            node.shape.append_triangles(&mut tris);
            for tri in &tris {
                let Some(material) = node.materials.for_face(tri.face) else {
                    continue;
                };
                let normal = world.transform_vector3(tri.normal()).normalize_or_zero();
                let color = material.color.to_array();
                let lit = if material.lit { 1.0 } else { 0.0 };
                let vertex = |i: usize, p: Vec3| SceneVertex {
                    position: world.transform_point3(p).to_array(),
                    normal: normal.to_array(),
                    color,
                    lit,
                    uv: tri.uv[i].to_array(),
                };
                staged.push((
                    material.texture,
                    [vertex(0, tri.a), vertex(1, tri.b), vertex(2, tri.c)],
                ));
            }
        });

        // Stable, so draw order within a texture follows scene order
        self.staged.sort_by_key(|(texture, _)| *texture);
        for (texture, corners) in &self.staged {
            let first = self.vertices.len() as u32;
            self.vertices.extend_from_slice(corners);
            match self.batches.last_mut() {
                Some(batch) if batch.texture == *texture => batch.count += 3,
                _ => self.batches.push(DrawBatch {
                    texture: *texture,
                    first,
                    count: 3,
                }),
            }
        }
    }
}
