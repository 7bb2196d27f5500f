/// Convenience result type used across easeflow.
pub type EaseflowResult<T> = Result<T, EaseflowError>;

/// Top-level error taxonomy used by the curve, library and host APIs.
#[derive(thiserror::Error, Debug)]
pub enum EaseflowError {
    /// Curve text that is not a well-formed 4-number array, or holds an out-of-range value.
    #[error("invalid curve format: {0}")]
    InvalidCurveFormat(String),

    /// A user curve with this name already exists.
    #[error("duplicate curve name: a curve named \"{0}\" already exists")]
    DuplicateCurveName(String),

    /// Invalid user-provided data that is not curve text.
    #[error("validation error: {0}")]
    Validation(String),

    /// The host could not be reached at all.
    #[error("host unavailable: {0}")]
    HostUnavailable(String),

    /// The host was reached but refused or failed to apply eases.
    #[error("host apply failure: {0}")]
    HostApplyFailure(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EaseflowError {
    /// Build a [`EaseflowError::InvalidCurveFormat`] value.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidCurveFormat(msg.into())
    }

    /// Build a [`EaseflowError::DuplicateCurveName`] value.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateCurveName(name.into())
    }

    /// Build a [`EaseflowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EaseflowError::HostUnavailable`] value.
    pub fn host_unavailable(msg: impl Into<String>) -> Self {
        Self::HostUnavailable(msg.into())
    }

    /// Build a [`EaseflowError::HostApplyFailure`] value.
    pub fn host_failure(msg: impl Into<String>) -> Self {
        Self::HostApplyFailure(msg.into())
    }

    /// Build a [`EaseflowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for EaseflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
