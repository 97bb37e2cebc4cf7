//! Geometry vocabulary and the error taxonomy shared by every module.

/// Axes, proposals and re-exported `kurbo` geometry.
pub mod core;
/// Error type and result alias.
pub mod error;
