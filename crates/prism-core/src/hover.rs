//! Pointer-over highlighting for clickable entries.

use crate::raycast::Hit;
use crate::registry::{ClickableRegistry, EntryId};
use crate::scene::Scene;

/// Cursor the front-end should show over the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    /// CSS `cursor` value.
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HoverHighlighter {
    highlighted: Option<EntryId>,
}

impl HoverHighlighter {
    pub fn highlighted(&self) -> Option<EntryId> {
        self.highlighted
    }

    /// Reset every entry, then highlight whatever the nearest hit belongs to.
    pub fn update(
        &mut self,
        scene: &mut Scene,
        registry: &ClickableRegistry,
        hits: &[Hit],
    ) -> Cursor {
        registry.reset_all(scene);
        self.highlighted = hits
            .first()
            .and_then(|hit| registry.lookup(scene, hit.node));
        match self.highlighted {
            Some(id) => {
                registry.highlight(scene, id);
                Cursor::Pointer
            }
            None => Cursor::Default,
        }
    }

    /// Forget `entry` after something else restored its default materials.
    pub fn release(&mut self, entry: EntryId) {
        if self.highlighted == Some(entry) {
            self.highlighted = None;
        }
    }

    pub fn clear(&mut self, scene: &mut Scene, registry: &ClickableRegistry) -> Cursor {
        registry.reset_all(scene);
        self.highlighted = None;
        Cursor::Default
    }
}
