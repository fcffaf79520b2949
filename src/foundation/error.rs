/// Convenience result type used across path2d.
pub type Path2dResult<T> = Result<T, Path2dError>;

/// Top-level error taxonomy used by path2d APIs.
#[derive(thiserror::Error, Debug)]
pub enum Path2dError {
    /// Malformed path-description syntax.
    #[error("parse error: {message}")]
    Parse {
        /// Human readable description, including the position when known.
        message: String,
        /// Character position reported by the path tokenizer, if any.
        position: Option<usize>,
    },

    /// A drawing primitive received out-of-domain arguments (e.g. a negative radius).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid user-provided values (colors, keywords, logs).
    #[error("validation error: {0}")]
    Validation(String),

    /// Surface allocation or pixel buffer failures.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Path2dError {
    /// Build a [`Path2dError::Parse`] value.
    pub fn parse(msg: impl Into<String>, position: Option<usize>) -> Self {
        let msg = msg.into();
        let message = match position {
            Some(pos) => format!("{msg} at position {pos}"),
            None => msg,
        };
        Self::Parse { message, position }
    }

    /// Build a [`Path2dError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`Path2dError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`Path2dError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`Path2dError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Offending character position for parse errors.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Parse { position, .. } => *position,
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
