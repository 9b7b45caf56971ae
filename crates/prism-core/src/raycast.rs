//! Screen-point picking against the attached scene.

use crate::scene::{NodeId, Scene};
use crate::state::{Camera, Viewport};
use glam::{Vec2, Vec3};

/// Normalised device coordinates for a client-space point.
///
/// x grows rightwards and y grows upwards, both spanning \[-1, 1\] across the
/// viewport.
#[inline]
pub fn ndc_from_client(x: f32, y: f32, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (x / viewport.width) * 2.0 - 1.0,
        -(y / viewport.height) * 2.0 + 1.0,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from the camera eye through an NDC point.
    pub fn from_camera(camera: &Camera, ndc: Vec2) -> Self {
        let through = camera.unproject(ndc, 0.5);
        Self::new(camera.eye, through - camera.eye)
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Two-sided Möller–Trumbore test; returns the distance along the ray.
    pub fn intersect_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
        const EPS: f32 = 1e-7;
        let e1 = b - a;
        let e2 = c - a;
        let p = self.direction.cross(e2);
        let det = e1.dot(p);
        if det.abs() < EPS {
            return None;
        }
        let inv = 1.0 / det;
        let s = self.origin - a;
        let u = s.dot(p) * inv;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(e1);
        let v = self.direction.dot(q) * inv;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = e2.dot(q) * inv;
        (t >= 0.0).then_some(t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub distance: f32,
    pub point: Vec3,
    /// Material group of the triangle that was hit.
    pub face: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct Raycaster {
    pub near: f32,
    pub far: f32,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self {
            near: 0.0,
            far: f32::INFINITY,
        }
    }
}

impl Raycaster {
    /// One hit per attached, geometry-bearing node (its nearest triangle),
    /// sorted nearest first.
    pub fn intersect_scene(&self, ray: &Ray, scene: &Scene) -> Vec<Hit> {
        let mut hits = Vec::new();
        let mut tris = Vec::new();
        scene.visit_attached(|id, node, world| {
            if !node.shape.has_geometry() {
                return;
            }
            tris.clear();
            node.shape.append_triangles(&mut tris);
            let mut best: Option<(f32, usize)> = None;
            for tri in &tris {
                let a = world.transform_point3(tri.a);
                let b = world.transform_point3(tri.b);
                let c = world.transform_point3(tri.c);
                if let Some(t) = ray.intersect_triangle(a, b, c) {
                    if t < self.near || t > self.far {
                        continue;
                    }
                    if best.map_or(true, |(d, _)| t < d) {
                        best = Some((t, tri.face));
                    }
                }
            }
            if let Some((distance, face)) = best {
                hits.push(Hit {
                    node: id,
                    distance,
                    point: ray.at(distance),
                    face,
                });
            }
        });
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Hits under a client-space point.
    pub fn pick(
        &self,
        scene: &Scene,
        camera: &Camera,
        viewport: Viewport,
        x: f32,
        y: f32,
    ) -> Vec<Hit> {
        let ray = Ray::from_camera(camera, ndc_from_client(x, y, viewport));
        self.intersect_scene(&ray, scene)
    }
}
