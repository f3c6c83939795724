/*
 * View model produced by `BrowserLogic` for whatever front-end draws it. A
 * `View` is a fully rendered location: everything the front-end needs to show
 * it is owned here, so views stay valid after the tree is refreshed.
 */
use crate::core::{Breadcrumb, HistoryEntry, LocationKind, MatchType, SequenceLink};

/* History path used for the Home location, which has no tree path of its own. */
pub const HOME_PATH: &str = "#home";
pub const HOME_TITLE: &str = "Home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub path: String,
    pub title: String,
    pub is_folder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home {
        categories: Vec<FolderEntry>,
    },
    Folder {
        path: String,
        title: String,
        entries: Vec<FolderEntry>,
        breadcrumbs: Vec<Breadcrumb>,
    },
    Tutorial {
        path: String,
        title: String,
        html: String,
        breadcrumbs: Vec<Breadcrumb>,
        prev: Option<SequenceLink>,
        next: Option<SequenceLink>,
    },
}

impl View {
    pub fn kind(&self) -> LocationKind {
        match self {
            View::Home { .. } => LocationKind::Home,
            View::Folder { .. } => LocationKind::Folder,
            View::Tutorial { .. } => LocationKind::Tutorial,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            View::Home { .. } => HOME_PATH,
            View::Folder { path, .. } | View::Tutorial { path, .. } => path,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            View::Home { .. } => HOME_TITLE,
            View::Folder { title, .. } | View::Tutorial { title, .. } => title,
        }
    }

    /* The history record for navigating away from this view. */
    pub fn history_entry(&self) -> HistoryEntry {
        HistoryEntry::new(self.path(), self.title(), self.kind())
    }
}

/* One visible row of the navigation tree, honouring collapsed folders. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub path: String,
    pub title: String,
    pub is_folder: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub key: String,
    pub path: String,
    pub title: String,
    pub is_folder: bool,
    pub match_type: MatchType,
}

/*
 * `Inactive` means the query was blank and the front-end should show the
 * normal tree; `Results(vec![])` means the search ran and found nothing.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Inactive,
    Results(Vec<SearchHit>),
}
