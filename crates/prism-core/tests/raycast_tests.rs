use glam::{Vec2, Vec3};
use prism_core::config::SceneConfig;
use prism_core::geometry::Shape;
use prism_core::raycast::{ndc_from_client, Ray, Raycaster};
use prism_core::scene::{Node, Scene};
use prism_core::state::{Camera, Viewport};

fn plane() -> Shape {
    Shape::Plane {
        width: 2.0,
        height: 2.0,
    }
}

#[test]
fn viewport_centre_maps_to_ndc_origin() {
    let ndc = ndc_from_client(400.0, 300.0, Viewport::new(800.0, 600.0));
    assert!(ndc.length() < 1e-6);
}

#[test]
fn corners_map_to_unit_square() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(ndc_from_client(0.0, 0.0, vp), Vec2::new(-1.0, 1.0));
    assert_eq!(ndc_from_client(800.0, 600.0, vp), Vec2::new(1.0, -1.0));
}

#[test]
fn triangle_is_hit_from_both_sides() {
    let (a, b, c) = (
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let front = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    let back = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
    assert_eq!(front.intersect_triangle(a, b, c), Some(5.0));
    assert_eq!(back.intersect_triangle(a, b, c), Some(5.0));
}

#[test]
fn geometry_behind_the_ray_is_missed() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
    let hit = ray.intersect_triangle(
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert_eq!(hit, None);
}

#[test]
fn empty_scene_has_no_hits() {
    let scene = Scene::new();
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(Raycaster::default().intersect_scene(&ray, &scene).is_empty());
}

#[test]
fn hits_are_sorted_nearest_first() {
    let mut scene = Scene::new();
    let root = scene.root();
    let far = scene.add(root, Node::new("far", plane()).at(Vec3::new(0.0, 0.0, -3.0)));
    let near = scene.add(root, Node::new("near", plane()).at(Vec3::new(0.0, 0.0, 1.0)));
    let mid = scene.add(root, Node::new("mid", plane()));
    let ray = Ray::new(Vec3::new(0.1, 0.2, 5.0), Vec3::NEG_Z);
    let hits = Raycaster::default().intersect_scene(&ray, &scene);
    let order: Vec<_> = hits.iter().map(|h| h.node).collect();
    assert_eq!(order, vec![near, mid, far]);
    assert!((hits[0].distance - 4.0).abs() < 1e-5);
    assert!((hits[0].point - Vec3::new(0.1, 0.2, 1.0)).length() < 1e-5);
}

#[test]
fn one_hit_per_node_with_face_group() {
    let mut scene = Scene::new();
    let cube = scene.add(
        scene.root(),
        Node::new(
            "cube",
            Shape::Cuboid {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
        ),
    );
    let ray = Ray::new(Vec3::new(0.1, 0.15, 5.0), Vec3::NEG_Z);
    let hits = Raycaster::default().intersect_scene(&ray, &scene);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].node, cube);
    // +Z face is group 4
    assert_eq!(hits[0].face, 4);
    assert!((hits[0].distance - 4.5).abs() < 1e-5);
}

#[test]
fn detached_and_hidden_nodes_are_not_hit() {
    let mut scene = Scene::new();
    let detached = scene.add_detached(Node::group("detached"));
    scene.add(detached, Node::new("child", plane()));
    let hidden = scene.add(scene.root(), Node::new("hidden", plane()));
    if let Some(n) = scene.get_mut(hidden) {
        n.visible = false;
    }
    let ray = Ray::new(Vec3::new(0.0, 0.3, 5.0), Vec3::NEG_Z);
    assert!(Raycaster::default().intersect_scene(&ray, &scene).is_empty());

    scene.attach(detached, scene.root()).unwrap();
    assert_eq!(Raycaster::default().intersect_scene(&ray, &scene).len(), 1);
}

#[test]
fn far_limit_excludes_distant_hits() {
    let mut scene = Scene::new();
    let wall = Node::new("wall", plane()).at(Vec3::new(0.0, 0.0, -10.0));
    scene.add(scene.root(), wall);
    let ray = Ray::new(Vec3::new(0.0, 0.3, 5.0), Vec3::NEG_Z);
    let caster = Raycaster {
        near: 0.0,
        far: 10.0,
    };
    assert!(caster.intersect_scene(&ray, &scene).is_empty());
}

#[test]
fn camera_ray_through_centre_hits_look_target() {
    let config = SceneConfig {
        camera_eye: [0.0, 0.0, 5.0],
        camera_target: [0.0, 0.0, 0.0],
        ..SceneConfig::default()
    };
    let camera = Camera::from_config(&config, 4.0 / 3.0);
    let viewport = Viewport::new(800.0, 600.0);
    let mut scene = Scene::new();
    let target = scene.add(scene.root(), Node::new("target", plane()));
    let caster = Raycaster::default();

    let hits = caster.pick(&scene, &camera, viewport, 410.0, 305.0);
    assert_eq!(hits.first().map(|h| h.node), Some(target));
    assert!(caster.pick(&scene, &camera, viewport, 5.0, 5.0).is_empty());
}
