//! Table of contents built from the flat sequence of headings in a document

use crate::language::{Heading, ANCHOR_LINK_CLASS, PILCROW};

/// Title used for the table of contents when the report has no title of its
/// own.
pub const DEFAULT_TITLE: &str = "Table of Contents";

/// Anchor of the generated title heading. Content headings all start with
/// `ch_`, so this cannot collide with them.
pub const TITLE_ANCHOR: &str = "toc_generated_0";

const OPEN: &str = r#"<ul style="list-style-type:none; margin:0px">"#;
const CLOSE: &str = "</ul>";

/// One line of generated table of contents markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TocLine {
    Title(String),
    Open,
    Close,
    Entry(Heading),
}

impl TocLine {
    pub fn render(&self) -> String {
        match self {
            TocLine::Title(title) => format!(
                "<h1 id=\"{}\">{}<a class=\"{}\" href=\"#{}\">{}</a></h1>",
                TITLE_ANCHOR, title, ANCHOR_LINK_CLASS, TITLE_ANCHOR, PILCROW
            ),
            TocLine::Open => OPEN.to_string(),
            TocLine::Close => CLOSE.to_string(),
            TocLine::Entry(heading) if heading.level == 1 => {
                format!("<a href=\"#{}\">{}</a><br/>", heading.anchor, heading.text)
            }
            TocLine::Entry(heading) => format!(
                "<li><a href=\"#{}\">{}</a></li>",
                heading.anchor, heading.text
            ),
        }
    }
}

/// Rebuild the nesting of the headings. Every step in level between two
/// consecutive headings opens or closes one list, so a level 1 heading
/// followed directly by a level 4 one opens three lists at once. The lists
/// are all closed again after the last heading.
pub fn synthesize(title: Option<&str>, headings: &[Heading]) -> Vec<TocLine> {
    let mut lines = Vec::new();

    if let Some(title) = title {
        lines.push(TocLine::Title(title.to_string()));
    }

    let mut current = 1;
    for heading in headings {
        while heading.level > current {
            lines.push(TocLine::Open);
            current += 1;
        }
        while heading.level < current {
            lines.push(TocLine::Close);
            current -= 1;
        }
        lines.push(TocLine::Entry(heading.clone()));
    }

    while current > 1 {
        lines.push(TocLine::Close);
        current -= 1;
    }

    lines
}
