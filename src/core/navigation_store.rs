/*
 * Owns the current navigation tree and answers path lookups against it. This
 * is the single owner of the tree: consumers receive borrowed views, and the
 * only way to change the tree is to `replace` it wholesale (e.g. on refresh).
 */
use super::navigation_node::{
    NavigationNode, NavigationTree, NodeMap, PATH_SEPARATOR, split_path,
};

/*
 * Result of resolving a path. A walk that ends on a folder (or an empty path,
 * which names the root) yields the folder's children; a walk that ends on a
 * file yields the file node itself.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Folder { children: &'a NodeMap },
    File(&'a NavigationNode),
}

impl<'a> Resolution<'a> {
    pub fn children(&self) -> Option<&'a NodeMap> {
        match *self {
            Resolution::Folder { children } => Some(children),
            Resolution::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&'a NavigationNode> {
        match *self {
            Resolution::File(node) => Some(node),
            Resolution::Folder { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub path: String,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct NavigationStore {
    tree: NavigationTree,
}

impl NavigationStore {
    pub fn new(tree: NavigationTree) -> Self {
        NavigationStore { tree }
    }

    pub fn tree(&self) -> &NavigationTree {
        &self.tree
    }

    /* Swaps in a freshly built tree, returning the previous one. */
    pub fn replace(&mut self, tree: NavigationTree) -> NavigationTree {
        log::debug!(
            "NavigationStore: Replacing tree ({} -> {} tutorials)",
            self.tree.file_count(),
            tree.file_count()
        );
        std::mem::replace(&mut self.tree, tree)
    }

    /*
     * Walks the tree key by key along `path`. Returns `None` if any segment is
     * missing, or if the path tries to descend below a file.
     */
    pub fn resolve(&self, path: &str) -> Option<Resolution<'_>> {
        if path.is_empty() {
            return Some(Resolution::Folder {
                children: &self.tree,
            });
        }

        let mut current = &self.tree;
        let mut segments = path.split(PATH_SEPARATOR).peekable();
        while let Some(segment) = segments.next() {
            let node = current.get(segment)?;
            match node {
                NavigationNode::Folder { children, .. } => {
                    if segments.peek().is_none() {
                        return Some(Resolution::Folder { children });
                    }
                    current = children;
                }
                NavigationNode::File { .. } => {
                    if segments.peek().is_none() {
                        return Some(Resolution::File(node));
                    }
                    log::trace!("NavigationStore: '{path}' descends below file '{segment}'");
                    return None;
                }
            }
        }
        None
    }

    /* Looks up the node itself (folder or file) at a non-empty path. */
    pub fn node(&self, path: &str) -> Option<&NavigationNode> {
        if path.is_empty() {
            return None;
        }
        let (parent_path, key) = split_path(path);
        self.resolve(parent_path)?.children()?.get(key)
    }

    /*
     * One crumb per resolvable prefix of `path`, root first. Stops at the
     * first segment that does not exist.
     */
    pub fn breadcrumbs(&self, path: &str) -> Vec<Breadcrumb> {
        let mut crumbs = Vec::new();
        if path.is_empty() {
            return crumbs;
        }
        let mut current = &self.tree;
        for segment in path.split(PATH_SEPARATOR) {
            let Some(node) = current.get(segment) else {
                break;
            };
            crumbs.push(Breadcrumb {
                path: node.path().to_string(),
                title: node.name().to_string(),
            });
            match node.children() {
                Some(children) => current = children,
                None => break,
            }
        }
        crumbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> NavigationTree {
        let mut basics = NodeMap::new();
        basics.insert("variables.md", NavigationNode::file("Variables", "python/basics/variables.md"));
        basics.insert("loops.md", NavigationNode::file("Loops", "python/basics/loops.md"));
        let mut python = NodeMap::new();
        python.insert("basics", NavigationNode::folder("Basics", "python/basics", basics));
        python.insert("intro.md", NavigationNode::file("Intro", "python/intro.md"));
        let mut tree = NodeMap::new();
        tree.insert("python", NavigationNode::folder("Python", "python", python));
        tree.insert("welcome.md", NavigationNode::file("Welcome", "welcome.md"));
        tree
    }

    #[test]
    fn test_empty_path_resolves_to_root() {
        let store = NavigationStore::new(sample_tree());
        let resolution = store.resolve("").unwrap();
        let children = resolution.children().unwrap();
        assert_eq!(children.iter().map(|(key, _)| key).collect::<Vec<_>>(), vec!["python", "welcome.md"]);
    }

    #[test]
    fn test_folder_path_resolves_to_children() {
        let store = NavigationStore::new(sample_tree());
        let children = store.resolve("python/basics").and_then(|r| r.children()).unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.get("loops.md").is_some());
    }

    #[test]
    fn test_file_path_resolves_to_file_node() {
        let store = NavigationStore::new(sample_tree());
        let resolution = store.resolve("python/intro.md").unwrap();
        let file = resolution.as_file().unwrap();
        assert_eq!(file.name(), "Intro");
        assert!(resolution.children().is_none());
    }

    #[test]
    fn test_missing_segment_is_not_found() {
        let store = NavigationStore::new(sample_tree());
        assert!(store.resolve("python/advanced").is_none());
        assert!(store.resolve("rust").is_none());
        assert!(store.resolve("python/intro.md/extra").is_none());
    }

    #[test]
    fn test_node_lookup() {
        let store = NavigationStore::new(sample_tree());
        assert_eq!(store.node("python").map(|n| n.name()), Some("Python"));
        assert_eq!(
            store.node("python/basics/loops.md").map(|n| n.path()),
            Some("python/basics/loops.md")
        );
        assert!(store.node("welcome.md/x").is_none());
        assert!(store.node("").is_none());
    }

    #[test]
    fn test_replace_swaps_tree() {
        let mut store = NavigationStore::new(sample_tree());
        let mut fresh = NodeMap::new();
        fresh.insert("only.md", NavigationNode::file("Only", "only.md"));

        let old = store.replace(fresh);

        assert!(old.get("python").is_some());
        assert!(store.resolve("python").is_none());
        assert!(store.resolve("only.md").is_some());
    }

    #[test]
    fn test_breadcrumbs_follow_path() {
        let store = NavigationStore::new(sample_tree());
        let crumbs = store.breadcrumbs("python/basics/loops.md");
        let titles: Vec<&str> = crumbs.iter().map(|c| c.title.as_str()).collect();
        let paths: Vec<&str> = crumbs.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(titles, vec!["Python", "Basics", "Loops"]);
        assert_eq!(paths, vec!["python", "python/basics", "python/basics/loops.md"]);
    }

    #[test]
    fn test_breadcrumbs_stop_at_missing_segment() {
        let store = NavigationStore::new(sample_tree());
        let crumbs = store.breadcrumbs("python/missing/loops.md");
        assert_eq!(crumbs.len(), 1);
        assert!(store.breadcrumbs("").is_empty());
    }
}
