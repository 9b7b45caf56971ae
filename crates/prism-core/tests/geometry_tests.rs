use glam::{Vec2, Vec3};
use prism_core::geometry::{Shape, TextShape};

fn centroid(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (a + b + c) / 3.0
}

#[test]
fn group_has_no_geometry() {
    assert!(!Shape::Group.has_geometry());
    assert!(Shape::Group.triangles().is_empty());
}

#[test]
fn cuboid_faces_point_outward_in_group_order() {
    let tris = Shape::Cuboid {
        width: 1.0,
        height: 0.6,
        depth: 0.05,
    }
    .triangles();
    assert_eq!(tris.len(), 12);
    let expected = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    for tri in &tris {
        assert!((tri.normal() - expected[tri.face]).length() < 1e-5);
        assert!(tri.normal().dot(centroid(tri.a, tri.b, tri.c)) > 0.0);
    }
    for face in 0..6 {
        assert_eq!(tris.iter().filter(|t| t.face == face).count(), 2);
    }
}

#[test]
fn plane_and_polygon_face_positive_z() {
    let plane = Shape::Plane {
        width: 2.0,
        height: 1.0,
    }
    .triangles();
    assert_eq!(plane.len(), 2);
    let pentagon = Shape::Polygon {
        radius: 1.0,
        sides: 5,
    }
    .triangles();
    assert_eq!(pentagon.len(), 5);
    for tri in plane.iter().chain(pentagon.iter()) {
        assert!((tri.normal() - Vec3::Z).length() < 1e-5);
    }
}

#[test]
fn plane_uvs_map_image_top_left_to_upper_left_corner() {
    let plane = Shape::Plane {
        width: 2.0,
        height: 1.0,
    }
    .triangles();
    for tri in &plane {
        for (p, uv) in [tri.a, tri.b, tri.c].into_iter().zip(tri.uv) {
            let expected = Vec2::new(p.x / 2.0 + 0.5, 0.5 - p.y);
            assert!((uv - expected).length() < 1e-6, "{p:?} -> {uv:?}");
        }
    }
}

#[test]
fn polygon_uvs_stay_inside_the_image() {
    let tris = Shape::Polygon {
        radius: 1.5,
        sides: 5,
    }
    .triangles();
    for tri in &tris {
        assert_eq!(tri.uv[0], Vec2::splat(0.5));
        for uv in tri.uv {
            assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
        }
    }
}

#[test]
fn text_slab_spans_baseline_left_origin() {
    let tris = Shape::Text(TextShape {
        content: "Hi".into(),
        size: 0.08,
        thickness: 0.01,
        width: 0.5,
    })
    .triangles();
    assert_eq!(tris.len(), 12);
    let (mut min, mut max) = (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN));
    for t in &tris {
        for p in [t.a, t.b, t.c] {
            min = min.min(p);
            max = max.max(p);
        }
        assert_eq!(t.face, 0);
    }
    assert!(min.length() < 1e-6);
    assert!((max - Vec3::new(0.5, 0.08, 0.01)).length() < 1e-6);
}
