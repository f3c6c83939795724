/*
 * Defines the navigation tree: a recursive structure of tutorial files and the
 * folders that contain them. Folders keep their children in an ordered,
 * string-keyed map (`NodeMap`) where the key is the raw filesystem entry name
 * and the order is the order in which entries were scanned. The root of the
 * tree is itself a `NodeMap` of top-level categories, not a single node.
 */

pub const PATH_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationNode {
    File { name: String, path: String },
    Folder {
        name: String,
        path: String,
        children: NodeMap,
    },
}

impl NavigationNode {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        NavigationNode::File {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn folder(name: impl Into<String>, path: impl Into<String>, children: NodeMap) -> Self {
        NavigationNode::Folder {
            name: name.into(),
            path: path.into(),
            children,
        }
    }

    /* Display label. */
    pub fn name(&self) -> &str {
        match self {
            NavigationNode::File { name, .. } | NavigationNode::Folder { name, .. } => name,
        }
    }

    /* Stable identifier: the `/`-join of raw keys from the root to this node. */
    pub fn path(&self) -> &str {
        match self {
            NavigationNode::File { path, .. } | NavigationNode::Folder { path, .. } => path,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, NavigationNode::Folder { .. })
    }

    pub fn children(&self) -> Option<&NodeMap> {
        match self {
            NavigationNode::Folder { children, .. } => Some(children),
            NavigationNode::File { .. } => None,
        }
    }

    /*
     * Counts the `File` nodes in this node's transitive closure. A file counts
     * itself, so a well-formed folder always reports at least one.
     */
    pub fn file_count(&self) -> usize {
        match self {
            NavigationNode::File { .. } => 1,
            NavigationNode::Folder { children, .. } => children.file_count(),
        }
    }
}

/*
 * Ordered map from raw key to node. Insertion order is preserved, and
 * inserting an existing key replaces the node in place without moving it.
 * Trees are small (one entry per tutorial), so lookups are linear.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMap {
    entries: Vec<(String, NavigationNode)>,
}

/* The whole tree is the root-level map of categories. */
pub type NavigationTree = NodeMap;

impl NodeMap {
    pub fn new() -> Self {
        NodeMap {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, node: NavigationNode) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = node;
        } else {
            self.entries.push((key, node));
        }
    }

    pub fn get(&self, key: &str) -> Option<&NavigationNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NavigationNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }


    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|(_, node)| node.file_count()).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, NavigationNode)> for NodeMap {
    fn from_iter<I: IntoIterator<Item = (K, NavigationNode)>>(iter: I) -> Self {
        let mut map = NodeMap::new();
        for (key, node) in iter {
            map.insert(key, node);
        }
        map
    }
}

/* Joins a parent path and a raw key; the root has an empty path. */
pub fn join_path(parent_path: &str, key: &str) -> String {
    if parent_path.is_empty() {
        key.to_string()
    } else {
        format!("{parent_path}{PATH_SEPARATOR}{key}")
    }
}

/*
 * Splits a path into `(parent_path, key)`. A single-segment path has an empty
 * parent.
 */
pub fn split_path(path: &str) -> (&str, &str) {
    match path.rfind(PATH_SEPARATOR) {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}
