//! Writing a report fragment by fragment, with references between fragments
//! left as placeholders until the whole report has been emitted.

mod registry;
mod session;
mod slug;
mod text;

pub use registry::Registry;
pub use session::Session;
pub use slug::{reduce_whitespace, slug};
pub use text::{a, bold, code, div, em, link, olist, span, ulist, List, Tag};
