/*
 * Turns raw filesystem entry names into the labels shown in the navigation
 * tree, e.g. `getting-started_guide.md` becomes `Getting Started Guide`.
 */

pub const MARKDOWN_EXTENSION: &str = ".md";
pub const MAX_LABEL_CHARS: usize = 40;
const ELLIPSIS: &str = "...";

/*
 * Formats a raw key for display: strips the markdown extension, turns `-` and
 * `_` into spaces, collapses runs of whitespace, upper-cases the first letter
 * of every word and truncates overly long labels with an ellipsis.
 */
pub fn format_display_name(raw_key: &str) -> String {
    let stem = raw_key.strip_suffix(MARKDOWN_EXTENSION).unwrap_or(raw_key);
    let spaced = stem.replace(['-', '_'], " ");
    let label = spaced
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        return raw_key.to_string();
    }
    truncate_label(&label)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let keep = MAX_LABEL_CHARS - ELLIPSIS.len();
    let mut truncated: String = label.chars().take(keep).collect();
    truncated.truncate(truncated.trim_end().len());
    truncated.push_str(ELLIPSIS);
    truncated
}
