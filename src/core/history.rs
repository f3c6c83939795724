/*
 * Back-navigation history. Locations the user navigates away from are pushed
 * here; `back` pops the most recent one and hands it to the caller to
 * re-render. Re-rendering looks exactly like a fresh navigation to the rest of
 * the application, so the stack switches to `Replaying` for the duration of
 * that render and ignores any pushes it triggers.
 */

pub const MAX_HISTORY_ENTRIES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Home,
    Folder,
    Tutorial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
    pub title: String,
    pub kind: LocationKind,
}

impl HistoryEntry {
    pub fn new(path: impl Into<String>, title: impl Into<String>, kind: LocationKind) -> Self {
        HistoryEntry {
            path: path.into(),
            title: title.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Recording,
    Replaying,
}

#[derive(Debug)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
    mode: HistoryMode,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStack {
    pub fn new() -> Self {
        HistoryStack {
            entries: Vec::new(),
            mode: HistoryMode::Recording,
        }
    }

    /*
     * Records a location. Ignored while replaying, for empty paths, and when
     * the path equals the current top of the stack. Returns whether the entry
     * was recorded. The oldest entry is evicted past `MAX_HISTORY_ENTRIES`.
     */
    pub fn push(&mut self, entry: HistoryEntry) -> bool {
        if self.is_replaying() {
            log::trace!("HistoryStack: Ignoring push of '{}' while replaying", entry.path);
            return false;
        }
        if entry.path.is_empty() {
            return false;
        }
        if self.entries.last().is_some_and(|top| top.path == entry.path) {
            return false;
        }

        log::trace!("HistoryStack: Push '{}' ({:?})", entry.path, entry.kind);
        self.entries.push(entry);
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            self.entries.remove(0);
        }
        true
    }

    /*
     * Pops the most recent entry and passes it to `replay`, which re-renders
     * it and may push freely; those pushes are dropped. The stack is back in
     * `Recording` mode when this returns. Returns `None` without calling
     * `replay` if there is nothing to go back to.
     */
    pub fn back<R>(&mut self, replay: impl FnOnce(HistoryEntry, &mut HistoryStack) -> R) -> Option<R> {
        let entry = self.entries.pop()?;
        self.mode = HistoryMode::Replaying;
        log::trace!("HistoryStack: Back to '{}'", entry.path);
        let result = replay(entry, self);
        self.mode = HistoryMode::Recording;
        Some(result)
    }

    pub fn is_replaying(&self) -> bool {
        self.mode == HistoryMode::Replaying
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
