//! Local-space triangle geometry for each [`Shape`].
//!
//! The same triangles feed the ray resolver and the vertex builder, so what
//! is drawn is exactly what can be hit.

use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Transform-only node.
    Group,
    /// Regular polygon in local XY, facing +Z.
    Polygon { radius: f32, sides: u32 },
    /// Rectangle in local XY, facing +Z, centred on the origin.
    Plane { width: f32, height: f32 },
    /// Box centred on the origin with face groups +X, -X, +Y, -Y, +Z, -Z.
    Cuboid { width: f32, height: f32, depth: f32 },
    Text(TextShape),
}

/// Laid-out text drawn as a slab from a baseline-left origin.
// TODO: tessellate the typeface's glyph outlines (`o` paths) instead of one slab per line
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    pub content: String,
    pub size: f32,
    pub thickness: f32,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    /// Texture coordinates of `a`, `b`, `c`; (0, 0) is the image's top-left.
    pub uv: [Vec2; 3],
    /// Material group this triangle draws with.
    pub face: usize,
}

impl Triangle {
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
    }
}

impl Shape {
    pub fn has_geometry(&self) -> bool {
        !matches!(self, Shape::Group)
    }

    pub fn triangles(&self) -> Vec<Triangle> {
        let mut out = Vec::new();
        self.append_triangles(&mut out);
        out
    }

    pub fn append_triangles(&self, out: &mut Vec<Triangle>) {
        match self {
            Shape::Group => {}
            Shape::Polygon { radius, sides } => polygon(*radius, (*sides).max(3), out),
            Shape::Plane { width, height } => {
                let hw = width * 0.5;
                let hh = height * 0.5;
                quad(
                    [
                        Vec3::new(-hw, -hh, 0.0),
                        Vec3::new(hw, -hh, 0.0),
                        Vec3::new(hw, hh, 0.0),
                        Vec3::new(-hw, hh, 0.0),
                    ],
                    0,
                    out,
                );
            }
            Shape::Cuboid {
                width,
                height,
                depth,
            } => {
                let half = Vec3::new(*width, *height, *depth) * 0.5;
                cuboid(-half, half, true, out);
            }
            Shape::Text(text) => {
                let max = Vec3::new(text.width, text.size, text.thickness);
                cuboid(Vec3::ZERO, max, false, out);
            }
        }
    }
}

fn polygon(radius: f32, sides: u32, out: &mut Vec<Triangle>) {
    let corner = |k: u32| {
        let theta = TAU * k as f32 / sides as f32;
        Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
    };
    let uv = |p: Vec3| Vec2::new(0.5 + p.x / (2.0 * radius), 0.5 - p.y / (2.0 * radius));
    for k in 0..sides {
        let (b, c) = (corner(k), corner(k + 1));
        out.push(Triangle {
            a: Vec3::ZERO,
            b,
            c,
            uv: [Vec2::splat(0.5), uv(b), uv(c)],
            face: 0,
        });
    }
}

// Corner UVs for bottom-left, bottom-right, top-right, top-left.
const QUAD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
];

/// Two triangles over corners given counter-clockwise from bottom-left.
fn quad(corners: [Vec3; 4], face: usize, out: &mut Vec<Triangle>) {
    let [p0, p1, p2, p3] = corners;
    let [t0, t1, t2, t3] = QUAD_UVS;
    out.push(Triangle {
        a: p0,
        b: p1,
        c: p2,
        uv: [t0, t1, t2],
        face,
    });
    out.push(Triangle {
        a: p0,
        b: p2,
        c: p3,
        uv: [t0, t2, t3],
        face,
    });
}

// (normal, u, v) per face with u x v == normal, in material-group order.
const CUBOID_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

fn cuboid(min: Vec3, max: Vec3, grouped: bool, out: &mut Vec<Triangle>) {
    let center = (min + max) * 0.5;
    let half = (max - min) * 0.5;
    for (face, (n, u, v)) in CUBOID_FACES.iter().enumerate() {
        let hn = half.dot(n.abs());
        let hu = half.dot(u.abs());
        let hv = half.dot(v.abs());
        let c = center + *n * hn;
        let corners = [
            c - *u * hu - *v * hv,
            c + *u * hu - *v * hv,
            c + *u * hu + *v * hv,
            c - *u * hu + *v * hv,
        ];
        quad(corners, if grouped { face } else { 0 }, out);
    }
}
