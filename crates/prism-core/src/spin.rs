//! Idle momentum for released prisms.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleSpin {
    pub velocity: f32,
    pub base: f32,
    pub decay: f32,
}

impl IdleSpin {
    pub fn new(base: f32, decay: f32) -> Self {
        Self {
            velocity: base,
            base,
            decay,
        }
    }

    /// One idle frame: decay toward the base speed, or restart from it when
    /// fully stopped. Velocities already at or under base are left alone.
    pub fn step(&mut self) {
        if self.velocity.abs() > self.base.abs() {
            self.velocity *= self.decay;
        } else if self.velocity == 0.0 {
            self.velocity = self.base;
        }
    }

    /// Velocity from the latest drag delta.
    pub fn set_from_drag(&mut self, delta: f32) {
        self.velocity = delta;
    }
}
