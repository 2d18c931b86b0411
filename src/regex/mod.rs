// Patterns used when scanning documents, compiled once per process

mod cache;
