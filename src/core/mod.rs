/*
 * This module consolidates the core, platform-agnostic logic of the tutorial
 * browser: the navigation tree and the operations derived from it (building,
 * lookup, search, sibling sequencing, back-history), plus the capabilities the
 * presenter needs around it (directory listing, document reading, markdown
 * rendering, configuration and settings persistence). Capabilities that touch
 * the outside world sit behind `*Operations` traits so they can be mocked.
 */
pub mod config;
pub mod display_name;
pub mod document_reader;
pub mod fallback_tree;
pub mod file_system;
pub mod history;
pub mod markdown;
pub mod navigation_node;
pub mod navigation_store;
pub mod path_utils;
pub mod search;
pub mod sequence;
pub mod settings;
pub mod tree_builder;

// Re-export the navigation model
pub use navigation_node::{NavigationTree, NodeMap};
pub use navigation_store::{Breadcrumb, NavigationStore, Resolution};

// Re-export derived operations
pub use history::{HistoryEntry, HistoryStack, LocationKind};
pub use search::{MatchType, search};
pub use sequence::{SequenceLink, prev_next};
pub use tree_builder::{BuildError, TreeBuilder};

// Re-export capabilities
pub use config::{ConfigManagerOperations, CoreConfigManager};
pub use document_reader::{CoreDocumentReader, DocumentReaderOperations};
pub use file_system::{CoreDirectoryLister, DirectoryListerOperations};
pub use markdown::render_markdown;
pub use settings::{CoreSettingsStore, SettingsError, SettingsStoreOperations};
