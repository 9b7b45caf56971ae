//! One coordinate stream for mouse and single-touch input.
//!
//! Front-ends translate their native events into [`PointerEvent`]s in
//! client pixels; the session never sees the difference between a mouse
//! and a finger.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            position: Vec2::new(x, y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl From<TouchPhase> for PointerPhase {
    fn from(phase: TouchPhase) -> Self {
        match phase {
            TouchPhase::Start => PointerPhase::Down,
            TouchPhase::Move => PointerPhase::Move,
            TouchPhase::End => PointerPhase::Up,
            TouchPhase::Cancel => PointerPhase::Leave,
        }
    }
}

/// Normalise a touch event to its first touch point.
///
/// End and cancel events usually carry no touches, in which case the last
/// known pointer position is reused. Start or move without any touch is
/// dropped.
pub fn from_touch(
    phase: TouchPhase,
    first_touch: Option<Vec2>,
    last_known: Vec2,
) -> Option<PointerEvent> {
    let position = match (phase, first_touch) {
        (_, Some(p)) => p,
        (TouchPhase::End | TouchPhase::Cancel, None) => last_known,
        _ => return None,
    };
    Some(PointerEvent {
        phase: phase.into(),
        position,
    })
}
