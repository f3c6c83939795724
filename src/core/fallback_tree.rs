/*
 * Hand-authored navigation tree used when the content directory cannot be
 * scanned or contains no tutorials. It is substituted for the scanned tree as
 * a whole and follows the same shape: paths are joined raw keys and every
 * folder holds at least one file.
 */
use super::display_name::format_display_name;
use super::navigation_node::{NavigationNode, NavigationTree, NodeMap, join_path};

const FALLBACK_STRUCTURE: &[(&str, &[&str])] = &[
    (
        "getting-started",
        &["installation.md", "first-steps.md", "project-layout.md"],
    ),
    ("guides", &["navigation.md", "searching.md", "keyboard-shortcuts.md"]),
    ("reference", &["glossary.md", "faq.md"]),
];

pub fn static_tree() -> NavigationTree {
    let mut tree = NodeMap::new();
    for (folder_key, file_keys) in FALLBACK_STRUCTURE {
        let children: NodeMap = file_keys
            .iter()
            .map(|file_key| {
                let node = NavigationNode::file(
                    format_display_name(file_key),
                    join_path(folder_key, file_key),
                );
                (*file_key, node)
            })
            .collect();
        tree.insert(
            *folder_key,
            NavigationNode::folder(format_display_name(folder_key), *folder_key, children),
        );
    }
    tree
}
