//! Turning heading text into the readable part of an anchor

use crate::compile;

/// Convert a title into a lowercase sequence of words joined by
/// underscores. CamelCase is split into words, `%` is spelled out, and
/// punctuation either separates words or disappears.
pub fn slug(title: &str) -> String {
    let text = compile!(r"([a-z])([A-Z])").replace_all(title, "${1} ${2}");
    let text = text.to_lowercase();
    let text = text.replace('%', "_percent");
    let text = compile!(r"[=\-\\.,]").replace_all(&text, " ");
    let text = compile!(r"[^\w\s]").replace_all(&text, "");

    compile!(r"\s+")
        .replace_all(text.trim(), "_")
        .into_owned()
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn reduce_whitespace(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
