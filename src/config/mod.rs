//! JSON layout documents.

/// Document model and evaluation.
pub mod document;
