//! Ordered, multi-pattern text rewriting

use std::borrow::Cow;

use regex::{NoExpand, Regex};

/// What a matched pattern is replaced with.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Replacement {
    /// Inserted verbatim; a `$` in the text is just a dollar sign.
    Literal(String),
    /// Capture groups of the pattern are substituted for `$1`, `${name}`
    /// and so on.
    Expand(String),
}

#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    pub fn literal(pattern: &str, replacement: impl Into<String>) -> Result<Rule, regex::Error> {
        Ok(Rule {
            pattern: Regex::new(pattern)?,
            replacement: Replacement::Literal(replacement.into()),
        })
    }

    pub fn expand(pattern: &str, replacement: impl Into<String>) -> Result<Rule, regex::Error> {
        Ok(Rule {
            pattern: Regex::new(pattern)?,
            replacement: Replacement::Expand(replacement.into()),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern
            .as_str()
    }

    /// Replace every non-overlapping match in the text.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.replacement {
            Replacement::Literal(with) => self
                .pattern
                .replace_all(text, NoExpand(with)),
            Replacement::Expand(with) => self
                .pattern
                .replace_all(text, with.as_str()),
        }
    }
}

/// A list of rules applied one after another, each rule seeing the output of
/// the ones before it. The order is significant: a broad rule placed ahead of
/// a more specific one will consume text the specific one needed to match.
///
/// Applying the same rules twice is only idempotent if no replacement can be
/// matched by a later pattern; that is up to whoever builds the list.
#[derive(Clone, Debug, Default)]
pub struct Substitutor {
    rules: Vec<Rule>,
}

impl Substitutor {
    pub fn new() -> Substitutor {
        Substitutor { rules: Vec::new() }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules
            .push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules
            .is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for rule in &self.rules {
            result = rule
                .apply(&result)
                .into_owned();
        }
        result
    }
}

impl From<Vec<Rule>> for Substitutor {
    fn from(rules: Vec<Rule>) -> Self {
        Substitutor { rules }
    }
}
