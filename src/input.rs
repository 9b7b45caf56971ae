use glam::Vec2;
use prism_core::{Direction, PointerPhase};

/// Client coordinates relative to the canvas' top-left corner, in CSS pixels.
#[inline]
pub fn canvas_point(client_x: f64, client_y: f64, left: f64, top: f64) -> Vec2 {
    Vec2::new((client_x - left) as f32, (client_y - top) as f32)
}

#[inline]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Previous),
        "ArrowRight" => Some(Direction::Next),
        _ => None,
    }
}

/// Mouse phases whose browser default (text selection, image drag) would
/// fight a prism drag.
#[inline]
pub fn suppresses_mouse_default(phase: PointerPhase) -> bool {
    matches!(phase, PointerPhase::Down | PointerPhase::Move)
}
