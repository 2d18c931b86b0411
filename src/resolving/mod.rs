//! Resolution of a fully emitted report: placeholder anchors are rewritten
//! into their final identifiers, and the title and table of contents are
//! inserted at the top of the report's content.

use tracing::{debug, info};

use crate::compile;
use crate::language::{ResolutionError, CONTAINER, TITLE_CLASS};

mod fragment;
mod scanner;
mod substitutor;
mod toc;

pub use fragment::{parse_element, Element, MalformedHeading, Node};
pub use scanner::{collect_headings, heading_on, scan};
pub use substitutor::{Rule, Substitutor};
pub use toc::{synthesize, TocLine, DEFAULT_TITLE, TITLE_ANCHOR};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Generate a table of contents from the headings in the document.
    pub toc: bool,
}

/// Resolve the complete document. This is a single pass over the whole text
/// and has to run after emission has finished. On failure nothing is
/// returned, so the caller is left holding the unresolved document.
pub fn resolve(document: &str, options: &Options) -> Result<String, ResolutionError> {
    let rules = scanner::scan(document)?;

    let count = rules.len();
    debug!(
        "Applying {} substitution rule{}",
        count,
        if count == 1 { "" } else { "s" }
    );

    let resolved = rules.apply(document);

    for dangling in compile!(r"#ref-(id\d+)").captures_iter(&resolved) {
        debug!("Reference {} is linked to but never bound", &dangling[1]);
    }

    let lines = insert_title_and_toc(&resolved, options)?;

    info!("Resolved document");
    Ok(lines.concat())
}

/// The explicitly set title of the report, if any.
pub fn explicit_title(document: &str) -> Option<&str> {
    document
        .lines()
        .find_map(title_on)
}

/// Take explicit title lines out of a report body, so the title can go into
/// the page head instead. The last one wins. Entities are decoded, as the
/// template escapes the title again.
pub fn lift_title(body: &str) -> (Option<String>, String) {
    let mut title = None;
    let mut rest = String::with_capacity(body.len());

    for line in body.split_inclusive('\n') {
        match title_on(line) {
            Some(found) => {
                debug!("Lifting title {} out of the body", found);
                title = Some(unescape(found));
            }
            None => rest.push_str(line),
        }
    }

    (title, rest)
}

fn title_on(line: &str) -> Option<&str> {
    let captures = compile!(r#"^<title class="([^"]*)">([^<]*)</title>$"#).captures(line.trim())?;
    if &captures[1] != TITLE_CLASS {
        return None;
    }
    captures
        .get(2)
        .map(|title| title.as_str())
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

fn insert_title_and_toc(
    document: &str,
    options: &Options,
) -> Result<Vec<String>, ResolutionError> {
    let mut lines: Vec<String> = document
        .split_inclusive('\n')
        .map(str::to_string)
        .collect();

    // headings are only gathered when a table of contents was asked for
    let headings = if options.toc {
        scanner::collect_headings(document)
    } else {
        Vec::new()
    };

    let title = match explicit_title(document) {
        Some(title) => Some(title),
        None if !headings.is_empty() => Some(DEFAULT_TITLE),
        None => None,
    };

    let block = toc::synthesize(title, &headings);
    if block.is_empty() {
        return Ok(lines);
    }

    let index = lines
        .iter()
        .position(|line| line.contains(CONTAINER))
        .ok_or(ResolutionError::MissingContainer)?;

    if !lines[index].ends_with('\n') {
        lines[index].push('\n');
    }

    debug!("Inserting {} lines after the container", block.len());

    let inserted = block
        .iter()
        .map(|line| {
            let mut line = line.render();
            line.push('\n');
            line
        });
    lines.splice(index + 1..index + 1, inserted);

    Ok(lines)
}
