/// Result alias used throughout the crate.
pub type BookmarkResult<T> = Result<T, BookmarkError>;

#[derive(thiserror::Error, Debug)]
/// Error type returned by fallible bookmarker operations.
pub enum BookmarkError {
    /// A request or settings value failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A rendering stage could not produce pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Raster or document encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error with context attached (IO, codec).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BookmarkError {
    /// Build a [`BookmarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BookmarkError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BookmarkError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BookmarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
