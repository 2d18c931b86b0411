//! Tracking which references have been bound to a fragment

use std::collections::HashSet;

use tracing::debug;

use crate::language::{DuplicateReferenceError, Reference};

/// The set of references bound so far in one report. Each reference may
/// name exactly one fragment; anything else would leave two anchors with the
/// same final identifier.
#[derive(Debug, Default)]
pub struct Registry {
    bound: HashSet<String>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            bound: HashSet::new(),
        }
    }

    /// Mark the reference as bound, failing if an earlier fragment already
    /// claimed it.
    pub fn bind(&mut self, reference: &Reference) -> Result<(), DuplicateReferenceError> {
        let token = reference.token();

        if self
            .bound
            .contains(token)
        {
            return Err(DuplicateReferenceError {
                token: token.to_string(),
            });
        }

        debug!("Binding reference {}", token);
        self.bound
            .insert(token.to_string());
        Ok(())
    }

    pub fn is_bound(&self, reference: &Reference) -> bool {
        self.bound
            .contains(reference.token())
    }

    pub fn len(&self) -> usize {
        self.bound
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound
            .is_empty()
    }
}
