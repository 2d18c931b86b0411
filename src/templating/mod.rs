//! Templates for the page a report is rendered into

mod html;
mod template;

pub use html::Html;
pub use template::{Frame, Page, Template};

use crate::language::ResolutionError;

/// Render the given body of a report into a complete page
pub fn fill(template: &impl Template, page: &Page, body: &str) -> Result<String, ResolutionError> {
    let frame = template.render(page)?;

    let mut result = String::with_capacity(frame.prologue.len() + body.len() + frame.epilogue.len());
    result.push_str(&frame.prologue);
    result.push_str(body);
    if !body.is_empty() && !body.ends_with('\n') {
        result.push('\n');
    }
    result.push_str(&frame.epilogue);
    Ok(result)
}
