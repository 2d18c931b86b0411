//! Types describing references, placeholder anchors, and headings

use std::fmt;

use rand::Rng;

/// Class of the line that opens the report's content. The table of contents
/// is spliced in immediately after this line.
pub const CONTAINER: &str = r#"<div class="reportage-main-container">"#;

/// Class marking a `<title>` element as an explicitly set report title.
pub const TITLE_CLASS: &str = "reportage-title";

/// Class of the self-link decoration trailing every heading.
pub const ANCHOR_LINK_CLASS: &str = "reportage-anchor-link";

pub const PILCROW: &str = "\u{b6}";

pub const NON_BREAKING_SPACE: &str = "\u{a0}";

/// A reference is an identity that can be linked to at any point in a report,
/// including before the fragment it names has been written. Binding it to a
/// table, figure, code block, or heading fixes where the links will point once
/// the document is resolved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    token: String,
    label: Option<String>,
}

impl Reference {
    pub fn new() -> Reference {
        Reference {
            token: fresh_token(),
            label: None,
        }
    }

    /// Create a reference whose links display the given text unless told
    /// otherwise.
    pub fn labelled(label: impl Into<String>) -> Reference {
        Reference {
            token: fresh_token(),
            label: Some(label.into()),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn label(&self) -> Option<&str> {
        self.label
            .as_deref()
    }

    /// Render a link to this reference. Without a default label the link
    /// shows the token itself; resolution later replaces it with the number
    /// of the table, figure or code block, or with the text of the heading.
    pub fn link(&self) -> String {
        let text = self
            .label
            .as_deref()
            .unwrap_or(&self.token);
        self.link_with(text)
    }

    pub fn link_with(&self, text: &str) -> String {
        format!("<a href=\"#ref-{}\">{}</a>", self.token, text)
    }
}

impl Default for Reference {
    fn default() -> Self {
        Reference::new()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.link())
    }
}

// Zero padded so that no token can ever be a prefix of another one.
fn fresh_token() -> String {
    let n: u64 = rand::rng().random();
    format!("id{:020}", n)
}

/// The kinds of numbered content that can be the target of a reference,
/// other than headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Table,
    Figure,
    CodeBlock,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Table, Kind::Figure, Kind::CodeBlock];

    /// Prefix of this kind's anchors, as in `table-3`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Kind::Table => "table",
            Kind::Figure => "img",
            Kind::CodeBlock => "code-block",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Kind> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.prefix() == prefix)
    }

    /// Word used in front of the number in a numbered caption.
    pub fn caption(&self) -> &'static str {
        match self {
            Kind::Table => "Table",
            Kind::Figure => "Figure",
            Kind::CodeBlock => "Source",
        }
    }

    pub fn wrapper_class(&self) -> &'static str {
        match self {
            Kind::Table => "reportage-table-wrapper",
            Kind::Figure => "reportage-figure-wrapper",
            Kind::CodeBlock => "reportage-code-wrapper",
        }
    }
}

/// Placeholder anchor of a table, figure or code block. The token segment is
/// only present when a reference was bound to the fragment; without it the
/// anchor is already in its final form.
pub fn anchor(kind: Kind, reference: Option<&Reference>, index: u32) -> String {
    match reference {
        Some(reference) => format!("{}-{}-{}", kind.prefix(), reference.token(), index),
        None => format!("{}-{}", kind.prefix(), index),
    }
}

/// Placeholder anchor of a heading.
pub fn heading_anchor(reference: Option<&Reference>, slug: &str, index: u32) -> String {
    match reference {
        Some(reference) => format!("ch_{}_{}_{}", reference.token(), slug, index),
        None => format!("ch_{}_{}", slug, index),
    }
}

/// A heading as found in a document: its level (1 to 6), the `id` of the
/// heading element, and its text with any inline markup flattened away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub anchor: String,
    pub text: String,
}
