//! Four-prism depth carousel.
//!
//! Each prism sits in a [`Slot`] derived from its distance to the centred
//! prism around the cycle. Navigating moves every prism one slot along a
//! fixed table; the one prism whose path would sweep across the whole lineup
//! jumps instead of tweening.

use crate::constants::PRISM_COUNT;
use crate::registry::Direction;
use crate::scene::{NodeId, Scene};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Center,
    Far,
    Farther,
    Behind,
}

impl Slot {
    pub const ORDER: [Slot; PRISM_COUNT] =
        [Slot::Center, Slot::Far, Slot::Farther, Slot::Behind];

    /// Slot of prism `index` while `centered` is in front.
    pub fn of(index: usize, centered: usize) -> Slot {
        Self::ORDER[(index + PRISM_COUNT - centered % PRISM_COUNT) % PRISM_COUNT]
    }

    /// Position in [`Slot::ORDER`], also the index into the slot depth table.
    pub fn ordinal(self) -> usize {
        match self {
            Slot::Center => 0,
            Slot::Far => 1,
            Slot::Farther => 2,
            Slot::Behind => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Animate(Slot),
    Snap(Slot),
}

impl Transition {
    pub fn destination(self) -> Slot {
        match self {
            Transition::Animate(s) | Transition::Snap(s) => s,
        }
    }
}

pub fn transition(from: Slot, direction: Direction) -> Transition {
    use Slot::*;
    use Transition::*;
    match (direction, from) {
        (Direction::Next, Center) => Animate(Behind),
        (Direction::Next, Far) => Animate(Center),
        (Direction::Next, Farther) => Animate(Far),
        (Direction::Next, Behind) => Snap(Farther),
        (Direction::Previous, Center) => Animate(Far),
        (Direction::Previous, Far) => Animate(Farther),
        (Direction::Previous, Farther) => Snap(Behind),
        (Direction::Previous, Behind) => Animate(Center),
    }
}

/// `1 - (1 - t)^3` with `t` clamped to \[0, 1\].
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthTween {
    pub from: f32,
    pub to: f32,
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl DepthTween {
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: f64) -> f32 {
        let e = ease_out_cubic(self.progress(now_ms)) as f32;
        self.from + (self.to - self.from) * e
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[derive(Clone, Debug)]
pub struct Carousel {
    prisms: [NodeId; PRISM_COUNT],
    centered: usize,
    tweens: [Option<DepthTween>; PRISM_COUNT],
    slot_depths: [f32; PRISM_COUNT],
    duration_ms: f64,
}

impl Carousel {
    pub fn new(
        prisms: [NodeId; PRISM_COUNT],
        slot_depths: [f32; PRISM_COUNT],
        duration_ms: f64,
    ) -> Self {
        Self {
            prisms,
            centered: 0,
            tweens: [None; PRISM_COUNT],
            slot_depths,
            duration_ms,
        }
    }

    pub fn centered(&self) -> usize {
        self.centered
    }

    pub fn prisms(&self) -> &[NodeId; PRISM_COUNT] {
        &self.prisms
    }

    pub fn previous_index(&self) -> usize {
        (self.centered + PRISM_COUNT - 1) % PRISM_COUNT
    }

    pub fn next_index(&self) -> usize {
        (self.centered + 1) % PRISM_COUNT
    }

    pub fn slot_of(&self, index: usize) -> Slot {
        Slot::of(index, self.centered)
    }

    pub fn depth_for(&self, slot: Slot) -> f32 {
        self.slot_depths[slot.ordinal()]
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.iter().any(Option::is_some)
    }

    /// Put every prism at its slot depth without animating.
    pub fn place(&mut self, scene: &mut Scene) {
        self.tweens = [None; PRISM_COUNT];
        for (i, id) in self.prisms.iter().enumerate() {
            let depth = self.depth_for(self.slot_of(i));
            set_depth(scene, *id, depth);
        }
    }

    pub fn navigate(&mut self, direction: Direction, now_ms: f64, scene: &mut Scene) {
        for i in 0..PRISM_COUNT {
            let id = self.prisms[i];
            match transition(self.slot_of(i), direction) {
                Transition::Animate(to) => {
                    self.tweens[i] = Some(DepthTween {
                        from: depth_of(scene, id),
                        to: self.depth_for(to),
                        started_ms: now_ms,
                        duration_ms: self.duration_ms,
                    });
                }
                Transition::Snap(to) => {
                    self.tweens[i] = None;
                    set_depth(scene, id, self.depth_for(to));
                }
            }
        }
        self.centered = match direction {
            Direction::Next => self.next_index(),
            Direction::Previous => self.previous_index(),
        };
    }

    /// Advance running tweens to `now_ms`, dropping finished ones.
    pub fn tick(&mut self, now_ms: f64, scene: &mut Scene) {
        for (i, slot) in self.tweens.iter_mut().enumerate() {
            if let Some(tween) = slot {
                set_depth(scene, self.prisms[i], tween.sample(now_ms));
                if tween.is_finished(now_ms) {
                    *slot = None;
                }
            }
        }
    }
}

fn depth_of(scene: &Scene, id: NodeId) -> f32 {
    scene
        .get(id)
        .map(|n| n.transform.position.x)
        .unwrap_or(0.0)
}

fn set_depth(scene: &mut Scene, id: NodeId, depth: f32) {
    if let Some(n) = scene.get_mut(id) {
        n.transform.position.x = depth;
    }
}
