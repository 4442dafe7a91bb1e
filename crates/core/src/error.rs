use serde::Serialize;

/// A failed precondition check.
///
/// Every variant carries the name of the offending argument and a
/// human-readable message. Serializes as
/// `{"code": "OUT_OF_RANGE", "argument": "...", "message": "..."}` so a
/// reporting boundary can forward it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnsureError {
    /// A required value was absent, empty, or whitespace-only.
    #[error("{message} (Parameter '{argument}')")]
    NullArgument { argument: String, message: String },

    /// A numeric or date value violated a bound.
    #[error("{message} (Parameter '{argument}')")]
    OutOfRange { argument: String, message: String },

    /// A value failed a structural or equality constraint.
    #[error("{message} (Parameter '{argument}')")]
    InvalidArgument { argument: String, message: String },
}

/// Failure category, for callers that branch on the kind of violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NullArgument,
    OutOfRange,
    InvalidArgument,
}

impl ErrorKind {
    /// Stable machine-readable code, matching the serialized `code` field.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NullArgument => "NULL_ARGUMENT",
            ErrorKind::OutOfRange => "OUT_OF_RANGE",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

/// Convenience alias for validator return values.
pub type EnsureResult<T> = Result<T, EnsureError>;

impl EnsureError {
    pub fn null_argument(argument: &str, message: impl Into<String>) -> Self {
        Self::NullArgument {
            argument: argument.to_string(),
            message: message.into(),
        }
        .traced()
    }

    pub fn out_of_range(argument: &str, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            argument: argument.to_string(),
            message: message.into(),
        }
        .traced()
    }

    pub fn invalid_argument(argument: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.to_string(),
            message: message.into(),
        }
        .traced()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EnsureError::NullArgument { .. } => ErrorKind::NullArgument,
            EnsureError::OutOfRange { .. } => ErrorKind::OutOfRange,
            EnsureError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Name of the argument that failed validation.
    pub fn argument(&self) -> &str {
        match self {
            EnsureError::NullArgument { argument, .. }
            | EnsureError::OutOfRange { argument, .. }
            | EnsureError::InvalidArgument { argument, .. } => argument,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            EnsureError::NullArgument { message, .. }
            | EnsureError::OutOfRange { message, .. }
            | EnsureError::InvalidArgument { message, .. } => message,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    fn traced(self) -> Self {
        tracing::debug!(
            kind = self.code(),
            argument = %self.argument(),
            message = %self.message(),
            "Precondition failed"
        );
        self
    }
}
