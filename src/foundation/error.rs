/// Convenience result type used across the crate.
pub type PromoResult<T> = Result<T, PromoError>;

/// Top-level error taxonomy.
///
/// Errors only surface at load boundaries (config, validated breakpoints, spring measurement,
/// out-of-range frames). Per-frame scene evaluation itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum PromoError {
    /// Invalid user-provided configuration or timing data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating breakpoints or measuring springs.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating the timeline for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PromoError {
    /// Build a [`PromoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PromoError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`PromoError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`PromoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
