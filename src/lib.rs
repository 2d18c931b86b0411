pub mod config;
pub mod emitting;
pub mod language;
pub mod regex;
pub mod resolving;
pub mod templating;
