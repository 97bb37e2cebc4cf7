//! propstack is a small set of stack layouts and a headless popup menu.
//!
//! The layouts are host-agnostic: a child is anything implementing
//! [`LayoutChild`], and a placement pass returns one [`Placement`] (center
//! anchor plus proposed size) per child for the host to apply.
//!
//! # Layouts
//!
//! - [`ProportionalStack`]: a row or column whose children request a fraction
//!   of the primary axis. Requests are granted first-come, space-permitting
//!   (see [`allocate_with`]); children without a request, or whose request no
//!   longer fits, split what is left evenly.
//! - [`EqualWidthHStack`] / [`EqualWidthVStack`]: every child gets a cell the
//!   size of the largest child.
//!
//! # Menus
//!
//! [`PopupMenu`] tracks the selection and visibility of a titled button that
//! opens a popover of [`MenuItem`]s, each carrying an optional tag.
//!
//! # Documents
//!
//! [`LayoutDocument`] describes a stack of fixed-size boxes in JSON; the
//! `propstack` binary evaluates such documents from the command line.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod layout;
mod menu;

pub use config::document::{
    BoundsSpec, ChildSpec, DocumentLayout, LabeledPlacement, LayoutDocument, StackKind,
};
pub use foundation::core::{
    Axis, DEFAULT_UNSPECIFIED_EXTENT, Point, ProposedSize, Rect, Size,
};
pub use foundation::error::{LayoutError, LayoutResult};
pub use layout::allocator::{
    AllocationOrder, ChildRequest, allocate, allocate_strict, allocate_with,
};
pub use layout::child::{FixedChild, LayoutChild, ProportionExt, Proportioned};
pub use layout::equal::{DEFAULT_SPACING, EqualWidthHStack, EqualWidthVStack};
pub use layout::proportional::{AxisAlignment, Placement, ProportionalStack};
pub use menu::popup::{MenuItem, MenuMetrics, PopupMenu};
