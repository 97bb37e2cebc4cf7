/// Tag-based popup menu state.
pub mod popup;
