use glam::{Vec3, Vec4};
use prism_core::constants::{BASE_SPIN, DRAG_SCALE, TWEEN_DURATION_MS};
use prism_core::factory::side_angle;
use prism_core::loading::LoadProgress;
use prism_core::material::MaterialSet;
use prism_core::mesh::DrawList;
use prism_core::scene::NodeId;
use prism_core::text::FallbackMetrics;
use prism_core::{
    Action, Activation, AppConfig, Command, Cursor, Direction, PointerEvent, PointerPhase, Session,
    Viewport,
};
use std::f32::consts::PI;

const W: f32 = 800.0;
const H: f32 = 600.0;

fn resolve_textures(session: &mut Session) {
    for key in session.texture_keys().to_vec() {
        session.resolve_texture(key, true);
    }
}

fn drawn(session: &Session) -> DrawList {
    let mut list = DrawList::new();
    list.rebuild(session.scene());
    list
}

fn loaded_session() -> Session {
    let mut session = Session::new(AppConfig::default(), Viewport::new(W, H)).unwrap();
    resolve_textures(&mut session);
    let progress = session.resolve_font(Box::new(FallbackMetrics::default()));
    assert_eq!(progress, LoadProgress::AllLoaded);
    session
}

fn screen_point(session: &Session, world: Vec3) -> (f32, f32) {
    let clip = session.camera().view_proj() * Vec4::new(world.x, world.y, world.z, 1.0);
    let ndc = clip.truncate() / clip.w;
    let vp = session.viewport();
    ((ndc.x + 1.0) * 0.5 * vp.width, (1.0 - ndc.y) * 0.5 * vp.height)
}

fn node(session: &Session, name: &str) -> NodeId {
    session.scene().find_by_name(name).unwrap()
}

/// Centre prism `index` and turn side `side` towards the camera.
fn face_side(session: &mut Session, index: usize, side: usize) {
    while session.carousel().centered() != index {
        session.navigate(Direction::Next, 0.0);
    }
    session.frame(TWEEN_DURATION_MS * 2.0);
    let group = session.prisms()[index].group;
    let yaw = side_angle(side, 5) - PI;
    session.scene_mut().get_mut(group).unwrap().transform.rotation.y = yaw;
}

fn picture_point(session: &Session, name: &str) -> (f32, f32) {
    let picture = node(session, name);
    let local = Vec3::new(0.1, 0.05, 0.025);
    screen_point(session, session.scene().world_matrix(picture).transform_point3(local))
}

fn material_snapshot(session: &Session) -> Vec<MaterialSet> {
    session
        .registry()
        .entries()
        .map(|(_, e)| session.scene().get(e.target).unwrap().materials.clone())
        .collect()
}

#[test]
fn nothing_is_hit_or_drawn_before_loading() {
    let mut session = Session::new(AppConfig::default(), Viewport::new(W, H)).unwrap();
    assert!(!session.is_loaded());
    assert!(session.hits_at(W / 2.0, H / 2.0).is_empty());
    assert!(drawn(&session).is_empty());
    assert_eq!(session.pointer_down(W / 2.0, H / 2.0, 0.0), None);
    assert_eq!(session.grabbed(), None);
    let report = session.frame(16.0);
    assert!(!report.loaded);
}

#[test]
fn font_failure_still_completes_loading() {
    let mut session = Session::new(AppConfig::default(), Viewport::new(W, H)).unwrap();
    resolve_textures(&mut session);
    assert_eq!(session.resolve_font_json(Some("not a font")), LoadProgress::AllLoaded);
    assert!(session.is_loaded());
    assert!(!session.hits_at(W / 2.0, H / 2.0).is_empty());
    assert!(!drawn(&session).is_empty());
}

#[test]
fn every_picture_and_the_board_wood_is_a_tracked_texture() {
    let session = Session::new(AppConfig::default(), Viewport::new(W, H)).unwrap();
    assert_eq!(
        session.texture_keys(),
        &["4peaks", "chess", "fms", "fun-fact", "ghp", "mm", "wood"]
    );
    for key in session.texture_keys() {
        assert!(prism_core::content::texture_file(key).is_some(), "{key}");
    }
}

#[test]
fn scene_waits_for_the_last_texture() {
    let mut session = Session::new(AppConfig::default(), Viewport::new(W, H)).unwrap();
    let keys = session.texture_keys().to_vec();
    assert_eq!(
        session.resolve_font(Box::new(FallbackMetrics::default())),
        LoadProgress::Pending(keys.len())
    );
    let (last, rest) = keys.split_last().unwrap();
    for &key in rest {
        assert!(matches!(session.resolve_texture(key, true), LoadProgress::Pending(_)));
    }
    assert!(!session.is_loaded());
    assert!(drawn(&session).is_empty());
    assert!(session.hits_at(W / 2.0, H / 2.0).is_empty());

    assert_eq!(session.resolve_texture(*last, true), LoadProgress::AllLoaded);
    assert!(session.is_loaded());
    assert!(!session.hits_at(W / 2.0, H / 2.0).is_empty());
}

#[test]
fn failed_texture_still_completes_loading() {
    let mut session = Session::new(AppConfig::default(), Viewport::new(W, H)).unwrap();
    session.resolve_font(Box::new(FallbackMetrics::default()));
    for key in session.texture_keys().to_vec() {
        session.resolve_texture(key, key != "wood");
    }
    assert!(session.is_loaded());
    assert_eq!(session.resolve_texture("wood", true), LoadProgress::Unchanged);
    assert_eq!(session.resolve_texture("unknown", true), LoadProgress::Unchanged);
}

#[test]
fn pictures_and_boards_draw_with_their_textures() {
    let session = loaded_session();
    let list = drawn(&session);
    let keys: Vec<_> = list.batches.iter().filter_map(|b| b.texture).collect();
    for key in session.texture_keys() {
        assert!(keys.contains(key), "{key} not drawn");
    }
    assert_eq!(list.batches.first().map(|b| b.texture), Some(None));
}

#[test]
fn activating_a_project_picture_yields_its_url_only() {
    let mut session = loaded_session();
    face_side(&mut session, 1, 1);
    let (x, y) = picture_point(&session, "picture:chess");
    let chess = session
        .registry()
        .entry_for_target(node(&session, "picture:chess"))
        .unwrap();

    session.pointer_move(x, y);
    assert_eq!(session.highlighted(), Some(chess));
    assert_eq!(session.cursor(), Cursor::Pointer);

    let before = material_snapshot(&session);
    let activation = session.pointer_down(x, y, 1_000.0).unwrap();
    assert_eq!(
        activation,
        Activation {
            entry: chess,
            action: Action::url("https://cs240.noahpratt.com"),
        }
    );
    assert!(activation.needs_host());

    let after = material_snapshot(&session);
    for (i, (b, a)) in before.iter().zip(&after).enumerate() {
        if i == chess.index() {
            let entry = session.registry().get(chess).unwrap();
            assert_eq!(a, &entry.default);
        } else {
            assert_eq!(a, b, "entry {i} changed");
        }
    }
    assert_eq!(session.grabbed(), Some(1));
}

#[test]
fn inert_picture_highlights_but_does_not_activate() {
    let mut session = loaded_session();
    face_side(&mut session, 0, 2);
    let (x, y) = picture_point(&session, "picture:4peaks");
    session.pointer_move(x, y);
    assert_eq!(session.cursor(), Cursor::Pointer);
    assert_eq!(session.pointer_down(x, y, 0.0), None);
    assert_eq!(session.grabbed(), Some(0));
}

#[test]
fn fun_fact_picture_hands_command_to_host() {
    let mut session = loaded_session();
    face_side(&mut session, 3, 0);
    let (x, y) = picture_point(&session, "picture:fun-fact");
    let activation = session.pointer_down(x, y, 0.0).unwrap();
    assert_eq!(activation.action, Action::Command(Command::FunFact));
    assert!(activation.needs_host());
}

#[test]
fn drag_rotates_grabbed_prism_by_scaled_deltas() {
    let mut session = loaded_session();
    let group = session.prisms()[0].group;
    let other = session.prisms()[1].group;
    session.pointer_down(W / 2.0, H / 2.0, 0.0);
    assert_eq!(session.grabbed(), Some(0));

    let start = session.scene().yaw(group);
    let other_start = session.scene().yaw(other);
    let mut x = W / 2.0;
    let mut expected = 0.0_f32;
    for (i, delta) in [12.0, -4.0, 30.0, 7.0].into_iter().enumerate() {
        x += delta;
        session.pointer_move(x, H / 2.0);
        expected += delta / DRAG_SCALE;
        // Frames in between do not touch the grabbed prism
        for f in 0..i {
            session.frame(f as f64 * 16.0);
        }
    }
    assert!((session.scene().yaw(group) - start - expected).abs() < 1e-5);
    assert_eq!(session.spin(0).unwrap().velocity, 7.0);
    // Others kept spinning at base speed while the pointer was down
    let other_expected = 6.0 * BASE_SPIN / DRAG_SCALE;
    assert!((session.scene().yaw(other) - other_start - other_expected).abs() < 1e-5);
}

#[test]
fn release_hands_drag_velocity_to_idle_spin() {
    let mut session = loaded_session();
    session.pointer_down(W / 2.0, H / 2.0, 0.0);
    session.pointer_move(W / 2.0 + 20.0, H / 2.0);
    session.pointer_up();
    assert_eq!(session.grabbed(), None);
    assert!(!session.is_pointer_down());

    let group = session.prisms()[0].group;
    let before = session.scene().yaw(group);
    session.frame(16.0);
    let decayed = 20.0 * session.config().interaction.decay_for(0);
    assert!((session.spin(0).unwrap().velocity - decayed).abs() < 1e-4);
    assert!((session.scene().yaw(group) - before - decayed / DRAG_SCALE).abs() < 1e-5);
}

#[test]
fn pointer_up_without_grab_is_a_no_op() {
    let mut session = loaded_session();
    session.pointer_up();
    assert_eq!(session.grabbed(), None);
    assert!(!session.is_pointer_down());
}

#[test]
fn next_arrow_navigates_and_relabels() {
    let mut session = loaded_session();
    let arrow = session.hud().next_arrow;
    let world = session
        .scene()
        .world_matrix(arrow)
        .transform_point3(Vec3::new(0.01, 0.005, 0.0));
    let (x, y) = screen_point(&session, world);

    let activation = session.pointer_down(x, y, 0.0).unwrap();
    assert_eq!(
        activation.action,
        Action::Command(Command::Navigate(Direction::Next))
    );
    assert!(!activation.needs_host());
    assert_eq!(session.carousel().centered(), 1);
    assert_eq!(session.grabbed(), None);

    let label = session.hud().next_label;
    match &session.scene().get(label).unwrap().shape {
        prism_core::geometry::Shape::Text(t) => assert_eq!(t.content, "Skills"),
        other => panic!("unexpected label shape {other:?}"),
    }
    let previous = session.hud().previous_label;
    match &session.scene().get(previous).unwrap().shape {
        prism_core::geometry::Shape::Text(t) => assert_eq!(t.content, "About Me"),
        other => panic!("unexpected label shape {other:?}"),
    }
}

#[test]
fn handle_pointer_dispatches_phases() {
    let mut session = loaded_session();
    let down = PointerEvent::new(PointerPhase::Down, W / 2.0, H / 2.0);
    assert_eq!(session.handle_pointer(down, 0.0), None);
    assert!(session.is_pointer_down());
    let leave = PointerEvent::new(PointerPhase::Leave, W / 2.0, H / 2.0);
    session.handle_pointer(leave, 0.0);
    assert!(!session.is_pointer_down());
    assert_eq!(session.cursor(), Cursor::Default);
    assert_eq!(session.highlighted(), None);
}

#[test]
fn at_most_one_entry_highlighted_after_each_frame() {
    let mut session = loaded_session();
    face_side(&mut session, 1, 2);
    let (x, y) = picture_point(&session, "picture:fms");
    session.pointer_move(x, y);
    for i in 0..30 {
        session.frame(i as f64 * 16.0);
        let lit = session
            .registry()
            .entries()
            .filter(|(_, e)| session.scene().get(e.target).unwrap().materials == e.highlighted)
            .count();
        assert!(lit <= 1);
    }
}

#[test]
fn resize_updates_ray_projection() {
    let mut session = loaded_session();
    session.set_viewport(1200.0, 600.0);
    assert_eq!(session.viewport(), Viewport::new(1200.0, 600.0));
    assert!((session.camera().aspect - 2.0).abs() < 1e-6);
    assert!(!session.hits_at(600.0, 300.0).is_empty());
}

#[test]
fn wrong_prism_count_is_rejected() {
    let mut content = prism_core::content::portfolio();
    content.pop();
    assert!(Session::with_content(AppConfig::default(), Viewport::default(), &content).is_err());
}
