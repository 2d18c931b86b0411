//! Template trait for the page surrounding a report

use crate::language::ResolutionError;

/// What a template needs to know about the report it frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<'a> {
    /// Shown as the window title when no explicit title was set.
    pub name: &'a str,
    pub title: Option<&'a str>,
    /// Width of the content container, as a percentage.
    pub width: u32,
}

/// The markup before and after the body of a report. The prologue must end
/// with the container line so that resolution knows where to put the table
/// of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub prologue: String,
    pub epilogue: String,
}

/// Trait for templates that produce the page around a report's body
pub trait Template {
    fn render(&self, page: &Page) -> Result<Frame, ResolutionError>;
}
