// Types shared between emitting a report and resolving it

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
