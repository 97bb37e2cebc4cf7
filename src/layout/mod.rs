//! Stack layouts.
//!
//! [`allocator`] is the pure proportional split; [`proportional`] and [`equal`]
//! turn allocations into per-child placements.

/// Pure split of one axis by requested proportions.
pub mod allocator;
/// The child abstraction and its request modifiers.
pub mod child;
/// Equal-cell rows and columns.
pub mod equal;
/// Proportional rows and columns.
pub mod proportional;
