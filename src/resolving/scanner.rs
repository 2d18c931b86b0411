//! Discover placeholder anchors in an emitted document and derive the rules
//! that rewrite them into their final form.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::fragment;
use super::substitutor::{Rule, Substitutor};
use crate::compile;
use crate::language::{Heading, Kind, ResolutionError};

// Ordering of the derived enum keeps the rule list deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Placeholder<'d> {
    Fragment {
        kind: Kind,
        token: &'d str,
        index: &'d str,
    },
    Heading {
        token: &'d str,
        rest: &'d str,
    },
}

/// Scan the complete document and build the substitution rules. For every
/// bound table, figure and code block the link sites are rewritten before
/// the anchor itself; the anchor pattern is contained in the link site
/// pattern and would otherwise corrupt it. Headings follow the same order,
/// and rules replacing a raw token shown as link text with the heading's
/// own text come last.
///
/// Every pattern ends at a word boundary after the token, so a token which
/// happens to be a prefix of another (`id5` and `id55`) leaves the longer
/// one alone.
pub fn scan(document: &str) -> Result<Substitutor, ResolutionError> {
    let mut placeholders = BTreeSet::new();
    let mut headings = Vec::new();

    for line in document.lines() {
        for captures in compile!(r"(table|img|code-block)-(id\d+)-(\d+)").captures_iter(line) {
            let (_, [prefix, token, index]) = captures.extract();
            if let Some(kind) = Kind::from_prefix(prefix) {
                placeholders.insert(Placeholder::Fragment { kind, token, index });
            }
        }

        let mut bound = false;
        for captures in compile!(r#"ch_(id\d+)_([^"]+)"#).captures_iter(line) {
            let (_, [token, rest]) = captures.extract();
            placeholders.insert(Placeholder::Heading { token, rest });
            bound = true;
        }

        if bound {
            if let Some(heading) = heading_on(line) {
                headings.push(heading);
            }
        }
    }

    debug!(
        "Found {} placeholder{} and {} referenced heading{}",
        placeholders.len(),
        if placeholders.len() == 1 { "" } else { "s" },
        headings.len(),
        if headings.len() == 1 { "" } else { "s" }
    );

    let mut rules = Substitutor::new();

    for placeholder in &placeholders {
        match placeholder {
            Placeholder::Fragment { kind, token, index } => {
                let token = regex::escape(token);
                rules.push(Rule::literal(
                    &format!(r"ref-{}\b", token),
                    format!("{}-{}", kind.prefix(), index),
                )?);
                rules.push(Rule::literal(
                    &format!(r"{}\b(?:-{}\b)?", token, index),
                    *index,
                )?);
            }
            Placeholder::Heading { token, rest } => {
                rules.push(Rule::literal(
                    &format!(r"ref-{}\b", regex::escape(token)),
                    format!("ch_{}", rest),
                )?);
                rules.push(Rule::expand(
                    &format!("ch_{}_({})", regex::escape(token), regex::escape(rest)),
                    "ch_${1}",
                )?);
            }
        }
    }

    for heading in &headings {
        if heading
            .text
            .is_empty()
        {
            continue;
        }
        if let Some(token) = token_of(&heading.anchor) {
            rules.push(Rule::literal(
                &format!(">{}<", regex::escape(token)),
                format!(">{}<", heading.text),
            )?);
        }
    }

    Ok(rules)
}

/// All headings in the document, in order. Lines holding a heading tag that
/// cannot be parsed are skipped.
pub fn collect_headings(document: &str) -> Vec<Heading> {
    document
        .lines()
        .filter_map(heading_on)
        .collect()
}

/// Find the heading on a line, if there is one. The whole heading element,
/// including its self-link, has to be on this line.
pub fn heading_on(line: &str) -> Option<Heading> {
    let found = compile!(r"<h([1-6])\b.*</h[1-6]>").find(line)?;

    let element = match fragment::parse_element(found.as_str()) {
        Ok(element) => element,
        Err(error) => {
            warn!("Ignoring malformed heading: {}", error);
            return None;
        }
    };

    let level = match element
        .name
        .strip_prefix('h')
        .and_then(|digit| digit.parse::<u8>().ok())
    {
        Some(level) if (1..=6).contains(&level) => level,
        _ => return None,
    };

    let anchor = match element.attribute("id") {
        Some(anchor) if !anchor.is_empty() => anchor.to_string(),
        _ => {
            debug!("Heading without an id: {}", found.as_str());
            return None;
        }
    };

    Some(Heading {
        level,
        anchor,
        text: element.heading_text(),
    })
}

fn token_of(anchor: &str) -> Option<&str> {
    compile!(r"^ch_(id\d+)_")
        .captures(anchor)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str())
}
