use std::{error, fmt, path::Path};

use super::CONTAINER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(f, "{}: {}", self.problem, self.filename.display())
        } else {
            write!(
                f,
                "{}: {}: {}",
                self.problem,
                self.filename.display(),
                self.details
            )
        }
    }
}

impl<'i> error::Error for LoadingError<'i> {}

/// A second fragment attempted to bind a reference that is already bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateReferenceError {
    pub token: String,
}

impl fmt::Display for DuplicateReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reference {} is already bound to another fragment; create a new reference for this one",
            self.token
        )
    }
}

impl error::Error for DuplicateReferenceError {}

/// Problems raised while writing fragments into a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmissionError {
    DuplicateReference(DuplicateReferenceError),
    InvalidLevel(u8),
}

impl fmt::Display for EmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmissionError::DuplicateReference(error) => error.fmt(f),
            EmissionError::InvalidLevel(level) => {
                write!(f, "heading level must be between 1 and 6, not {}", level)
            }
        }
    }
}

impl error::Error for EmissionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EmissionError::DuplicateReference(error) => Some(error),
            EmissionError::InvalidLevel(_) => None,
        }
    }
}

impl From<DuplicateReferenceError> for EmissionError {
    fn from(error: DuplicateReferenceError) -> Self {
        EmissionError::DuplicateReference(error)
    }
}

/// An element was given a class both through its class list and as a plain
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupError {
    pub element: String,
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "class of <{}> cannot be set both as classes and as an attribute",
            self.element
        )
    }
}

impl error::Error for MarkupError {}

/// Failures of the resolution pass. Any of these leaves the document as it
/// was before resolution; there is no partially resolved result.
#[derive(Debug, Clone)]
pub enum ResolutionError {
    Pattern(regex::Error),
    MissingContainer,
    Template(String),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::Pattern(error) => {
                write!(f, "unable to build substitution rule: {}", error)
            }
            ResolutionError::MissingContainer => write!(
                f,
                "document has no line containing {} to insert the table of contents after",
                CONTAINER
            ),
            ResolutionError::Template(details) => {
                write!(f, "unable to render page template: {}", details)
            }
        }
    }
}

impl error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ResolutionError::Pattern(error) => Some(error),
            _ => None,
        }
    }
}

impl From<regex::Error> for ResolutionError {
    fn from(error: regex::Error) -> Self {
        ResolutionError::Pattern(error)
    }
}
