use thiserror::Error;

/// Unified result type for the stagger crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised by layout policies and their configuration.
///
/// Errors produced while measuring a child are never wrapped in this type;
/// they surface as the child's own error.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl LayoutError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// True when the error is an argument check rather than a parse failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
