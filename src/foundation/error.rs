/// Convenience result type used across Thumbcraft.
pub type ThumbcraftResult<T> = Result<T, ThumbcraftError>;

/// Top-level error taxonomy used by editor and export APIs.
///
/// None of these are fatal to an [`EditorSession`](crate::EditorSession): callers either recover
/// locally (placeholder image, ignored clipboard) or surface the message while state stays intact.
#[derive(thiserror::Error, Debug)]
pub enum ThumbcraftError {
    /// Malformed or incomplete settings JSON.
    #[error("format error: {0}")]
    Format(String),

    /// A layer image could not be loaded, even through the proxy fallback.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// Clipboard read was denied or is unavailable.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// Rasterization or encoding of the final image failed.
    #[error("export error: {0}")]
    Export(String),

    /// Invalid programmatic input (unknown layer id, out-of-range value).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbcraftError {
    /// Build a [`ThumbcraftError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`ThumbcraftError::ImageLoad`] value.
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build a [`ThumbcraftError::Clipboard`] value.
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Build a [`ThumbcraftError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`ThumbcraftError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
