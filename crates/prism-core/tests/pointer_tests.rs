use glam::Vec2;
use prism_core::pointer::{from_touch, PointerEvent, PointerPhase, TouchPhase};

#[test]
fn touch_start_uses_first_touch() {
    let ev = from_touch(TouchPhase::Start, Some(Vec2::new(12.0, 34.0)), Vec2::ZERO).unwrap();
    assert_eq!(ev, PointerEvent::new(PointerPhase::Down, 12.0, 34.0));
}

#[test]
fn touch_end_without_touches_reuses_last_position() {
    let last = Vec2::new(50.0, 60.0);
    let ev = from_touch(TouchPhase::End, None, last).unwrap();
    assert_eq!(ev.phase, PointerPhase::Up);
    assert_eq!(ev.position, last);
    let cancel = from_touch(TouchPhase::Cancel, None, last).unwrap();
    assert_eq!(cancel.phase, PointerPhase::Leave);
}

#[test]
fn touch_move_without_touches_is_dropped() {
    assert!(from_touch(TouchPhase::Move, None, Vec2::ZERO).is_none());
}
