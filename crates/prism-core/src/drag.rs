use crate::scene::{NodeId, Scene};

/// Turn `target` about its vertical axis by `delta / scale` radians.
///
/// Used for both pointer drags (delta in pixels) and idle spin (delta is
/// the prism's velocity). Yaw is unbounded.
pub fn rotate_object(scene: &mut Scene, target: Option<NodeId>, delta: f32, scale: f32) {
    if let Some(id) = target {
        scene.rotate_yaw(id, delta / scale);
    }
}
