/// Tracks outstanding assets and reports the moment the last one finishes.
///
/// Completion fires once: later `complete` calls, or tracking more assets
/// after the fact, never produce a second signal.
#[derive(Clone, Debug, Default)]
pub struct LoadingManager {
    pending: Vec<&'static str>,
    completed: Vec<&'static str>,
    fired: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadProgress {
    /// Still waiting on this many assets.
    Pending(usize),
    /// Every tracked asset is done; fire the on-load work now.
    AllLoaded,
    /// Nothing changed (unknown asset, or already fired).
    Unchanged,
}

impl LoadingManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, asset: &'static str) {
        if !self.fired && !self.pending.contains(&asset) && !self.completed.contains(&asset) {
            self.pending.push(asset);
        }
    }

    pub fn complete(&mut self, asset: &'static str) -> LoadProgress {
        let Some(pos) = self.pending.iter().position(|a| *a == asset) else {
            return LoadProgress::Unchanged;
        };
        self.pending.swap_remove(pos);
        self.completed.push(asset);
        if !self.pending.is_empty() {
            return LoadProgress::Pending(self.pending.len());
        }
        if self.fired {
            return LoadProgress::Unchanged;
        }
        self.fired = true;
        LoadProgress::AllLoaded
    }

    pub fn is_loaded(&self) -> bool {
        self.fired
    }

    pub fn pending(&self) -> &[&'static str] {
        &self.pending
    }
}
