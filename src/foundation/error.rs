/// Convenience result type used across wrapgen.
pub type WrapResult<T> = Result<T, WrapError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum WrapError {
    /// Invalid user-provided skin, palette or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or unusable input images (template, logo sheets).
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while painting or compositing a canvas.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing batch files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WrapError {
    /// Build a [`WrapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WrapError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`WrapError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WrapError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
