/*
 * Previous/next navigation between sibling tutorials. Only the files of a
 * folder take part; subfolders are skipped. Siblings are collated by display
 * name: first ignoring case and accents (so "Éclair" sorts between "Apple" and
 * "Zebra"), then by accents, then by case, and finally by raw key so that two
 * files formatting to the same label still have a fixed order.
 */
use super::navigation_node::{NavigationNode, split_path};
use super::navigation_store::NavigationStore;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceLink {
    pub path: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrevNext {
    pub prev: Option<SequenceLink>,
    pub next: Option<SequenceLink>,
}

/*
 * Finds the siblings immediately before and after the file at `path`. Any
 * failure to locate the parent or the file itself yields an empty `PrevNext`.
 */
pub fn prev_next(store: &NavigationStore, path: &str) -> PrevNext {
    let (parent_path, file_key) = split_path(path);

    let Some(children) = store.resolve(parent_path).and_then(|r| r.children()) else {
        log::debug!("Sequence: Parent of '{path}' does not resolve");
        return PrevNext::default();
    };

    let mut files: Vec<(&str, &NavigationNode)> = children
        .iter()
        .filter(|(_, node)| !node.is_folder())
        .collect();
    files.sort_by(|(key_a, a), (key_b, b)| compare_siblings(key_a, a, key_b, b));

    let Some(index) = files
        .iter()
        .position(|(key, node)| *key == file_key || node.path() == path)
    else {
        log::debug!("Sequence: '{path}' not found among its siblings");
        return PrevNext::default();
    };

    PrevNext {
        prev: index
            .checked_sub(1)
            .and_then(|i| files.get(i))
            .map(|(_, node)| link_for(node)),
        next: files.get(index + 1).map(|(_, node)| link_for(node)),
    }
}

fn compare_siblings(key_a: &str, a: &NavigationNode, key_b: &str, b: &NavigationNode) -> Ordering {
    let (name_a, name_b) = (a.name(), b.name());
    base_letters(name_a)
        .cmp(&base_letters(name_b))
        .then_with(|| accented_letters(name_a).cmp(&accented_letters(name_b)))
        .then_with(|| name_a.nfd().cmp(name_b.nfd()))
        .then_with(|| key_a.cmp(key_b))
}

/* Lowercase, decomposed, with combining marks removed. */
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/* Lowercase and decomposed, keeping accents. */
fn accented_letters(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

fn link_for(node: &NavigationNode) -> SequenceLink {
    SequenceLink {
        path: node.path().to_string(),
        title: node.name().to_string(),
    }
}
