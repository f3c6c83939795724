use super::view_state::{FolderEntry, SearchHit, SearchOutcome, TreeRow, View};
use crate::core::settings::{EXPANDED_FOLDERS_KEY, ZOOM_PERCENT_KEY};
use crate::core::{
    BuildError, DirectoryListerOperations, DocumentReaderOperations, HistoryEntry, HistoryStack,
    LocationKind,
    NavigationStore, NavigationTree, NodeMap, Resolution, SettingsStoreOperations, TreeBuilder,
    fallback_tree, prev_next, render_markdown, search,
};
use std::collections::BTreeSet;
use std::sync::Arc;

pub const DEFAULT_ZOOM_PERCENT: u16 = 100;
pub const MIN_ZOOM_PERCENT: u16 = 50;
pub const MAX_ZOOM_PERCENT: u16 = 200;

/*
 * The presenter of the tutorial browser. It owns the navigation store and the
 * back-history, and turns user intents (open, back, next, search, expand) into
 * rendered `View`s. Store and history never reference each other; this type
 * bridges them using path strings only.
 *
 * External capabilities (directory listing, document reading and settings
 * persistence) are injected as trait objects so the logic can be exercised
 * against mocks.
 */
pub struct BrowserLogic {
    pub(crate) store: NavigationStore,
    pub(crate) history: HistoryStack,
    pub(crate) current: Option<View>,
    pub(crate) expanded_folders: BTreeSet<String>,
    pub(crate) zoom_percent: u16,
    pub(crate) using_fallback: bool,
    tree_builder: TreeBuilder,
    document_reader: Arc<dyn DocumentReaderOperations>,
    settings: Arc<dyn SettingsStoreOperations>,
}

impl BrowserLogic {
    pub fn new(
        lister: Arc<dyn DirectoryListerOperations>,
        document_reader: Arc<dyn DocumentReaderOperations>,
        settings: Arc<dyn SettingsStoreOperations>,
    ) -> Self {
        BrowserLogic {
            store: NavigationStore::default(),
            history: HistoryStack::new(),
            current: None,
            expanded_folders: BTreeSet::new(),
            zoom_percent: DEFAULT_ZOOM_PERCENT,
            using_fallback: false,
            tree_builder: TreeBuilder::new(lister),
            document_reader,
            settings,
        }
    }

    /*
     * Builds the tree (falling back to the static structure if nothing could
     * be scanned), restores persisted UI state and shows Home.
     */
    pub fn initialize(&mut self) -> &View {
        let tree = self.build_tree();
        self.store = NavigationStore::new(tree);
        self.expanded_folders = self.load_expanded_folders();
        self.prune_expanded_folders();
        self.zoom_percent = self.load_zoom_percent();
        log::info!(
            "BrowserLogic: Initialized with {} tutorials (fallback: {})",
            self.store.tree().file_count(),
            self.using_fallback
        );
        let home = render_home(self.store.tree());
        self.current.insert(home)
    }

    /*
     * Rebuilds the tree and re-renders the current location in place. If the
     * current location no longer exists the browser returns Home. Neither case
     * records history.
     */
    pub fn refresh(&mut self) -> &View {
        let tree = self.build_tree();
        self.store.replace(tree);
        if self.prune_expanded_folders() {
            self.save_expanded_folders();
        }

        let rerendered = self.current.as_ref().and_then(|view| {
            render_location(
                &self.store,
                self.document_reader.as_ref(),
                view.kind(),
                view.path(),
            )
        });
        let view = rerendered.unwrap_or_else(|| render_home(self.store.tree()));
        self.current.insert(view)
    }

    pub fn current_view(&self) -> Option<&View> {
        self.current.as_ref()
    }

    pub fn using_fallback(&self) -> bool {
        self.using_fallback
    }

    pub fn tree(&self) -> &NavigationTree {
        self.store.tree()
    }

    pub fn open_home(&mut self) -> &View {
        let home = render_home(self.store.tree());
        transition(&mut self.history, &mut self.current, home)
    }

    /*
     * Opens a folder or tutorial by path. Returns `None`, leaving the current
     * view as it was, if the path does not resolve.
     */
    pub fn open(&mut self, path: &str) -> Option<&View> {
        if path.is_empty() {
            return Some(self.open_home());
        }
        let kind = match self.store.resolve(path)? {
            Resolution::Folder { .. } => LocationKind::Folder,
            Resolution::File(_) => LocationKind::Tutorial,
        };
        let view = render_location(&self.store, self.document_reader.as_ref(), kind, path)?;
        Some(transition(&mut self.history, &mut self.current, view))
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /* Locations `go_back` would visit, oldest first. */
    pub fn back_entries(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /*
     * Returns to the most recently left location. The popped entry goes
     * through the same transition as any other navigation; the history is in
     * replay mode meanwhile, so the location being left is not recorded. An
     * entry that no longer resolves (the tree changed since) lands on Home.
     */
    pub fn go_back(&mut self) -> Option<&View> {
        let store = &self.store;
        let reader = self.document_reader.as_ref();
        let current = &mut self.current;
        self.history.back(|entry, history| {
            log::debug!("BrowserLogic: Going back to '{}' ({:?})", entry.path, entry.kind);
            let view = render_location(store, reader, entry.kind, &entry.path)
                .unwrap_or_else(|| render_home(store.tree()));
            transition(history, current, view);
        })?;
        self.current.as_ref()
    }

    pub fn go_next(&mut self) -> Option<&View> {
        let target = match &self.current {
            Some(View::Tutorial { next, .. }) => next.as_ref()?.path.clone(),
            _ => return None,
        };
        self.open(&target)
    }

    pub fn go_prev(&mut self) -> Option<&View> {
        let target = match &self.current {
            Some(View::Tutorial { prev, .. }) => prev.as_ref()?.path.clone(),
            _ => return None,
        };
        self.open(&target)
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        match search(self.store.tree(), query) {
            None => SearchOutcome::Inactive,
            Some(matches) => SearchOutcome::Results(
                matches
                    .into_iter()
                    .map(|m| SearchHit {
                        key: m.key.to_string(),
                        path: m.full_path,
                        title: m.node.name().to_string(),
                        is_folder: m.node.is_folder(),
                        match_type: m.match_type,
                    })
                    .collect(),
            ),
        }
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded_folders.contains(path)
    }

    /*
     * Flips the expanded state of a folder and persists the set. Returns the
     * new state, or `None` if `path` is not a folder.
     */
    pub fn toggle_folder(&mut self, path: &str) -> Option<bool> {
        if !self.store.node(path)?.is_folder() {
            return None;
        }
        let expanded = if self.expanded_folders.remove(path) {
            false
        } else {
            self.expanded_folders.insert(path.to_string());
            true
        };
        self.save_expanded_folders();
        Some(expanded)
    }

    /* Visible rows of the tree: children of collapsed folders are hidden. */
    pub fn visible_tree_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        collect_rows(self.store.tree(), 0, &self.expanded_folders, &mut rows);
        rows
    }

    pub fn zoom_percent(&self) -> u16 {
        self.zoom_percent
    }

    pub fn set_zoom(&mut self, percent: u16) -> u16 {
        self.zoom_percent = percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
        if let Err(e) = self
            .settings
            .set(ZOOM_PERCENT_KEY, &self.zoom_percent.to_string())
        {
            log::warn!("BrowserLogic: Failed to persist zoom level: {e}");
        }
        self.zoom_percent
    }

    fn build_tree(&mut self) -> NavigationTree {
        match self.tree_builder.build("") {
            Ok(tree) => {
                self.using_fallback = false;
                tree
            }
            Err(BuildError::EmptyTree { root }) => {
                log::warn!(
                    "BrowserLogic: Nothing to show under '{root}', using the built-in structure"
                );
                self.using_fallback = true;
                fallback_tree::static_tree()
            }
        }
    }

    fn load_expanded_folders(&self) -> BTreeSet<String> {
        let Some(raw) = self.settings.get(EXPANDED_FOLDERS_KEY) else {
            return BTreeSet::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(paths) => paths.into_iter().collect(),
            Err(e) => {
                log::warn!("BrowserLogic: Ignoring malformed expanded folder list: {e}");
                BTreeSet::new()
            }
        }
    }

    fn save_expanded_folders(&self) {
        let paths: Vec<&String> = self.expanded_folders.iter().collect();
        let result = serde_json::to_string(&paths)
            .map_err(crate::core::SettingsError::from)
            .and_then(|json| self.settings.set(EXPANDED_FOLDERS_KEY, &json));
        if let Err(e) = result {
            log::warn!("BrowserLogic: Failed to persist expanded folders: {e}");
        }
    }

    /* Drops expanded paths that are no longer folders. Returns true if any were dropped. */
    fn prune_expanded_folders(&mut self) -> bool {
        let before = self.expanded_folders.len();
        let store = &self.store;
        self.expanded_folders
            .retain(|path| store.node(path).is_some_and(|node| node.is_folder()));
        self.expanded_folders.len() != before
    }

    fn load_zoom_percent(&self) -> u16 {
        self.settings
            .get(ZOOM_PERCENT_KEY)
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .map(|percent| percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT))
            .unwrap_or(DEFAULT_ZOOM_PERCENT)
    }
}

/*
 * Moves to `next`, recording the location being left. The push is a no-op
 * while the history is replaying a back navigation.
 */
fn transition<'a>(
    history: &mut HistoryStack,
    current: &'a mut Option<View>,
    next: View,
) -> &'a View {
    if let Some(previous) = current.as_ref() {
        if previous.path() != next.path() {
            history.push(previous.history_entry());
        }
    }
    current.insert(next)
}

fn render_location(
    store: &NavigationStore,
    reader: &dyn DocumentReaderOperations,
    kind: LocationKind,
    path: &str,
) -> Option<View> {
    match kind {
        LocationKind::Home => Some(render_home(store.tree())),
        LocationKind::Folder => {
            let children = store.resolve(path)?.children()?;
            let title = store.node(path)?.name().to_string();
            Some(View::Folder {
                path: path.to_string(),
                title,
                entries: folder_entries(children),
                breadcrumbs: store.breadcrumbs(path),
            })
        }
        LocationKind::Tutorial => {
            let node = store.resolve(path)?.as_file()?;
            let title = node.name().to_string();
            let html = match reader.read_text(node.path()) {
                Ok(text) => render_markdown(&text),
                Err(e) => {
                    log::warn!("BrowserLogic: Could not read '{path}': {e}");
                    render_markdown(&format!(
                        "# {title}\n\nThis tutorial could not be loaded: {e}\n"
                    ))
                }
            };
            let sequence = prev_next(store, path);
            Some(View::Tutorial {
                path: path.to_string(),
                title,
                html,
                breadcrumbs: store.breadcrumbs(path),
                prev: sequence.prev,
                next: sequence.next,
            })
        }
    }
}

fn render_home(tree: &NavigationTree) -> View {
    View::Home {
        categories: folder_entries(tree),
    }
}

fn folder_entries(children: &NodeMap) -> Vec<FolderEntry> {
    children
        .iter()
        .map(|(_, node)| FolderEntry {
            path: node.path().to_string(),
            title: node.name().to_string(),
            is_folder: node.is_folder(),
        })
        .collect()
}

fn collect_rows(nodes: &NodeMap, depth: usize, expanded: &BTreeSet<String>, rows: &mut Vec<TreeRow>) {
    for (_, node) in nodes.iter() {
        let is_expanded = expanded.contains(node.path());
        rows.push(TreeRow {
            depth,
            path: node.path().to_string(),
            title: node.name().to_string(),
            is_folder: node.is_folder(),
            expanded: is_expanded,
        });
        if let Some(children) = node.children() {
            if is_expanded {
                collect_rows(children, depth + 1, expanded, rows);
            }
        }
    }
}
