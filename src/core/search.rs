/*
 * Case-insensitive substring search over the whole navigation tree. The walk
 * is depth-first in tree order and always descends into folders, whether or
 * not the folder itself matched, so results read top-to-bottom the way the
 * tree is displayed. Results are capped at `MAX_SEARCH_RESULTS`.
 */
use super::navigation_node::{NavigationNode, NodeMap, join_path};

pub const MAX_SEARCH_RESULTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Name,
    Path,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch<'a> {
    pub key: &'a str,
    pub node: &'a NavigationNode,
    pub full_path: String,
    pub match_type: MatchType,
}

/*
 * Returns `None` when the query is empty or whitespace-only, i.e. there is no
 * active search. `Some(vec![])` means the search ran and found nothing.
 */
pub fn search<'a>(tree: &'a NodeMap, query: &str) -> Option<Vec<SearchMatch<'a>>> {
    if query.trim().is_empty() {
        return None;
    }
    let needle = query.trim().to_lowercase();
    let mut matches = Vec::new();
    collect_matches(tree, "", &needle, &mut matches);
    log::debug!("Search: '{query}' matched {} entries", matches.len());
    Some(matches)
}

/* Returns true once the result cap is reached so callers stop descending. */
fn collect_matches<'a>(
    nodes: &'a NodeMap,
    parent_path: &str,
    needle: &str,
    matches: &mut Vec<SearchMatch<'a>>,
) -> bool {
    for (key, node) in nodes.iter() {
        if matches.len() >= MAX_SEARCH_RESULTS {
            return true;
        }
        let full_path = join_path(parent_path, key);
        if let Some(match_type) = match_node(key, node, &full_path, needle) {
            matches.push(SearchMatch {
                key,
                node,
                full_path: full_path.clone(),
                match_type,
            });
        }
        if let Some(children) = node.children() {
            if collect_matches(children, &full_path, needle, matches) {
                return true;
            }
        }
    }
    matches.len() >= MAX_SEARCH_RESULTS
}

fn match_node(key: &str, node: &NavigationNode, full_path: &str, needle: &str) -> Option<MatchType> {
    if node.name().to_lowercase().contains(needle) {
        Some(MatchType::Name)
    } else if key.to_lowercase().contains(needle) || full_path.to_lowercase().contains(needle) {
        Some(MatchType::Path)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(name: &str, path: &str, children: Vec<(&str, NavigationNode)>) -> NavigationNode {
        NavigationNode::folder(name, path, children.into_iter().collect())
    }

    fn sample_tree() -> NodeMap {
        vec![
            (
                "python",
                folder(
                    "Python",
                    "python",
                    vec![
                        ("intro.md", NavigationNode::file("Intro", "python/intro.md")),
                        ("pip-usage.md", NavigationNode::file("Pip Usage", "python/pip-usage.md")),
                    ],
                ),
            ),
            (
                "rust",
                folder(
                    "Rust",
                    "rust",
                    vec![("python-interop.md", NavigationNode::file("Calling Py", "rust/python-interop.md"))],
                ),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn keys<'a>(results: &[SearchMatch<'a>]) -> Vec<&'a str> {
        results.iter().map(|m| m.key).collect()
    }

    #[test]
    fn test_empty_or_blank_query_is_inactive() {
        let tree = sample_tree();
        assert!(search(&tree, "").is_none());
        assert!(search(&tree, "   \t").is_none());
    }

    #[test]
    fn test_no_results_is_distinct_from_inactive() {
        let tree = sample_tree();
        assert_eq!(search(&tree, "haskell"), Some(vec![]));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let tree = sample_tree();
        let upper = search(&tree, "PYTHON").unwrap();
        let lower = search(&tree, "python").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper[0].key, "python");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let tree = sample_tree();
        let padded = search(&tree, "  python\t").unwrap();
        assert_eq!(padded, search(&tree, "python").unwrap());
        assert_eq!(padded[0].key, "python");
        assert_eq!(padded[0].match_type, MatchType::Name);
    }

    #[test]
    fn test_folder_match_does_not_stop_descent() {
        let tree = sample_tree();
        let results = search(&tree, "python").unwrap();
        // The folder matches by name; its children match through their full path.
        assert_eq!(
            keys(&results),
            vec!["python", "intro.md", "pip-usage.md", "python-interop.md"]
        );
        assert_eq!(results[0].match_type, MatchType::Name);
        assert_eq!(results[1].match_type, MatchType::Path);
        assert_eq!(results[1].full_path, "python/intro.md");
    }

    #[test]
    fn test_name_match_takes_precedence_over_path_match() {
        let tree = sample_tree();
        let results = search(&tree, "pip").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_type, MatchType::Name);

        let results = search(&tree, "interop").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_type, MatchType::Path);
        assert_eq!(results[0].node.name(), "Calling Py");
    }

    #[test]
    fn test_results_are_capped() {
        let files: Vec<(String, NavigationNode)> = (0..25)
            .map(|i| {
                let key = format!("lesson-{i:02}.md");
                let node = NavigationNode::file(format!("Lesson {i:02}"), key.clone());
                (key, node)
            })
            .collect();
        let tree: NodeMap = files.into_iter().collect();

        let results = search(&tree, "lesson").unwrap();
        assert_eq!(results.len(), MAX_SEARCH_RESULTS);
        assert_eq!(results[0].key, "lesson-00.md");
        assert_eq!(results[9].key, "lesson-09.md");
    }

    #[test]
    fn test_cap_applies_across_nested_folders() {
        let mut tree = NodeMap::new();
        for f in 0..4 {
            let folder_key = format!("topic{f}");
            let children: NodeMap = (0..5)
                .map(|i| {
                    let key = format!("topic-page-{i}.md");
                    let path = join_path(&folder_key, &key);
                    (key, NavigationNode::file(format!("Topic Page {i}"), path))
                })
                .collect();
            tree.insert(
                folder_key.clone(),
                NavigationNode::folder(format!("Topic {f}"), folder_key, children),
            );
        }
        let results = search(&tree, "topic").unwrap();
        assert_eq!(results.len(), MAX_SEARCH_RESULTS);
        assert_eq!(results[6].full_path, "topic1");
    }
}
