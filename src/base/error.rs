use thiserror::Error;

/// Errors produced by the profile synchronization engine.
///
/// Every error is terminal for the user action that produced it: the engine
/// performs no internal retries and no rollback of partially applied state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwitchError {
    /// The active tab is not on the target origin. Raised before any host
    /// mutation in both capture and apply; recoverable by navigating and
    /// retrying.
    #[error("active tab is not on {expected} (currently on {actual})")]
    WrongOrigin { expected: String, actual: String },

    /// A switch or delete was requested for a profile name absent from the
    /// store. No mutation is attempted.
    #[error("no saved profile named {name:?}")]
    MissingProfile { name: String },

    /// An individual browser-host call was rejected (permissions, closed
    /// tab, malformed cookie attributes). Since apply is not transactional,
    /// a failure partway through leaves live state a hybrid of old and new.
    #[error("browser host call {operation} failed: {message}")]
    HostCall {
        operation: &'static str,
        message: String,
    },

    /// The durable profile store failed to read or write.
    #[error("profile store failure: {message}")]
    Store { message: String },

    /// A string could not be parsed into a scheme+host origin.
    #[error("invalid origin {input:?}")]
    InvalidOrigin { input: String },
}

impl SwitchError {
    pub fn wrong_origin(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        SwitchError::WrongOrigin {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_profile(name: impl Into<String>) -> Self {
        SwitchError::MissingProfile { name: name.into() }
    }

    pub fn host_call(operation: &'static str, message: impl Into<String>) -> Self {
        SwitchError::HostCall {
            operation,
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        SwitchError::Store {
            message: message.into(),
        }
    }

    pub fn invalid_origin(input: impl Into<String>) -> Self {
        SwitchError::InvalidOrigin {
            input: input.into(),
        }
    }
}

impl From<serde_json::Error> for SwitchError {
    fn from(err: serde_json::Error) -> Self {
        SwitchError::store(err.to_string())
    }
}

impl From<std::io::Error> for SwitchError {
    fn from(err: std::io::Error) -> Self {
        SwitchError::store(err.to_string())
    }
}
