/*
 * Builds the navigation tree from a directory-listing capability. The walk is
 * depth-first and sequential, so children always appear in listing order.
 * Folders that end up without any tutorial file below them are pruned at
 * every level, and a directory that cannot be listed simply contributes no
 * children. Only a completely empty result is reported as a failure, leaving
 * the caller to substitute a static fallback tree.
 */
use super::display_name::{MARKDOWN_EXTENSION, format_display_name};
use super::file_system::DirectoryListerOperations;
use super::navigation_node::{NavigationNode, NavigationTree, NodeMap, join_path};
use glob::Pattern;
use std::sync::Arc;

pub const TUTORIAL_FILE_PATTERN: &str = "*.md";

#[derive(Debug)]
pub enum BuildError {
    EmptyTree { root: String },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::EmptyTree { root } => {
                write!(f, "No tutorials found under '{root}'")
            }
        }
    }
}

impl std::error::Error for BuildError {}

pub type Result<T> = std::result::Result<T, BuildError>;

pub struct TreeBuilder {
    lister: Arc<dyn DirectoryListerOperations>,
    file_pattern: Option<Pattern>,
}

impl TreeBuilder {
    pub fn new(lister: Arc<dyn DirectoryListerOperations>) -> Self {
        TreeBuilder {
            lister,
            file_pattern: tutorial_file_pattern(),
        }
    }

    /*
     * Builds the tree below `root_path` (a navigation path, empty for the
     * content root). Node paths are recorded relative to `root_path`'s
     * listing, i.e. the first level of keys starts the path.
     */
    pub fn build(&self, root_path: &str) -> Result<NavigationTree> {
        log::debug!("TreeBuilder: Building navigation tree from '{root_path}'");
        let tree = self.build_level(root_path, "");
        if tree.is_empty() {
            log::error!("TreeBuilder: No tutorials found under '{root_path}'");
            return Err(BuildError::EmptyTree {
                root: root_path.to_string(),
            });
        }
        log::info!(
            "TreeBuilder: Built tree with {} categories and {} tutorials",
            tree.len(),
            tree.file_count()
        );
        Ok(tree)
    }

    fn build_level(&self, listing_path: &str, node_path: &str) -> NodeMap {
        let entries = match self.lister.list(listing_path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("TreeBuilder: Failed to list '{listing_path}', treating as empty: {e}");
                return NodeMap::new();
            }
        };

        let mut children = NodeMap::new();
        for entry in entries {
            let child_path = join_path(node_path, &entry.name);
            if entry.is_directory {
                let child_listing_path = join_path(listing_path, &entry.name);
                let grandchildren = self.build_level(&child_listing_path, &child_path);
                if grandchildren.is_empty() {
                    log::trace!("TreeBuilder: Pruning empty folder '{child_path}'");
                    continue;
                }
                children.insert(
                    entry.name.as_str(),
                    NavigationNode::folder(format_display_name(&entry.name), child_path, grandchildren),
                );
            } else if self.is_tutorial_file(&entry.name) {
                children.insert(
                    entry.name.as_str(),
                    NavigationNode::file(format_display_name(&entry.name), child_path),
                );
            }
        }
        children
    }

    fn is_tutorial_file(&self, name: &str) -> bool {
        match &self.file_pattern {
            Some(pattern) => pattern.matches(name),
            None => name.ends_with(MARKDOWN_EXTENSION),
        }
    }
}

fn tutorial_file_pattern() -> Option<Pattern> {
    match Pattern::new(TUTORIAL_FILE_PATTERN) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            log::error!("TreeBuilder: Invalid file pattern '{TUTORIAL_FILE_PATTERN}': {e}");
            None
        }
    }
}
