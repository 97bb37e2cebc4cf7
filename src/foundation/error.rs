/// Convenience result type used across propstack.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Top-level error taxonomy used by layout APIs.
///
/// The baseline allocator and the stacks never return errors; these surface
/// from strict allocation, document validation and menu selection.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// A requested proportion is negative, non-finite, or the explicit
    /// proportions sum above the whole extent.
    #[error("invalid proportion: {0}")]
    InvalidProportion(String),

    /// The extent handed to the allocator is negative or non-finite.
    #[error("invalid extent: {0}")]
    InvalidExtent(String),

    /// Invalid user-provided layout or menu data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing layout documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::InvalidProportion`] value.
    pub fn invalid_proportion(msg: impl Into<String>) -> Self {
        Self::InvalidProportion(msg.into())
    }

    /// Build a [`LayoutError::InvalidExtent`] value.
    pub fn invalid_extent(msg: impl Into<String>) -> Self {
        Self::InvalidExtent(msg.into())
    }

    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
