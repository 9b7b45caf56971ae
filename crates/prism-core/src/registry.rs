//! Clickable targets and what activating them does.

use crate::error::{PrismError, Result};
use crate::material::MaterialSet;
use crate::scene::{NodeId, Scene};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

/// In-process behaviours a clickable can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Navigate(Direction),
    FunFact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Open a link in a new tab; `None` highlights but does nothing.
    Url(Option<String>),
    Command(Command),
}

impl Action {
    pub fn url(url: impl Into<String>) -> Self {
        Action::Url(Some(url.into()))
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, Action::Url(None))
    }
}

#[derive(Clone, Debug)]
pub struct ClickableEntry {
    pub target: NodeId,
    pub default: MaterialSet,
    pub highlighted: MaterialSet,
    pub action: Action,
}

#[derive(Clone, Debug, Default)]
pub struct ClickableRegistry {
    entries: Vec<ClickableEntry>,
    by_target: FnvHashMap<NodeId, EntryId>,
}

impl ClickableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: ClickableEntry) -> Result<EntryId> {
        if self.by_target.contains_key(&entry.target) {
            return Err(PrismError::DuplicateTarget(entry.target));
        }
        let id = EntryId(self.entries.len());
        self.by_target.insert(entry.target, id);
        self.entries.push(entry);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&ClickableEntry> {
        self.entries.get(id.0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &ClickableEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (EntryId(i), e))
    }

    pub fn entry_for_target(&self, target: NodeId) -> Option<EntryId> {
        self.by_target.get(&target).copied()
    }

    /// Entry registered for `node` itself or its nearest registered
    /// ancestor. The scene root never matches.
    pub fn lookup(&self, scene: &Scene, node: NodeId) -> Option<EntryId> {
        std::iter::once(node)
            .chain(scene.ancestors(node))
            .take_while(|id| *id != scene.root())
            .find_map(|id| self.entry_for_target(id))
    }

    pub fn reset_all(&self, scene: &mut Scene) {
        for entry in &self.entries {
            scene.set_materials(entry.target, entry.default.clone());
        }
    }

    pub fn highlight(&self, scene: &mut Scene, id: EntryId) {
        if let Some(entry) = self.get(id) {
            scene.set_materials(entry.target, entry.highlighted.clone());
        }
    }

    pub fn restore(&self, scene: &mut Scene, id: EntryId) {
        if let Some(entry) = self.get(id) {
            scene.set_materials(entry.target, entry.default.clone());
        }
    }
}
