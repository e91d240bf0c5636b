//! Operation-outcome types shared between the manager layer and the API
//! handlers.

/// Outcome classification for a manager operation.
///
/// These are the coarse result buckets the northbound API cares about.
/// Handlers translate failure codes into HTTP errors; see the `api-shared`
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StatusCode {
    /// Operation completed.
    Success,
    /// Operation completed and created a resource.
    Created,
    /// The request was malformed.
    BadRequest,
    /// Missing or invalid credentials.
    Unauthorized,
    /// The caller may not perform the operation.
    Forbidden,
    /// The referenced object does not exist.
    NotFound,
    /// The request cannot be satisfied as expressed.
    NotAcceptable,
    /// The operation did not finish in time.
    Timeout,
    /// The operation conflicts with existing state.
    Conflict,
    /// The operation failed internally.
    InternalError,
    /// The operation is not supported.
    NotImplemented,
}

impl StatusCode {
    /// Returns true for outcomes that represent success.
    pub fn is_success(self) -> bool {
        matches!(self, StatusCode::Success | StatusCode::Created)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            StatusCode::Success => "Success",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotAcceptable => "Not Acceptable",
            StatusCode::Timeout => "Timeout",
            StatusCode::Conflict => "Conflict",
            StatusCode::InternalError => "Internal Error",
            StatusCode::NotImplemented => "Not Implemented",
        };
        write!(f, "{}", text)
    }
}

/// A manager operation result: an outcome code plus a human-readable
/// description carried for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Status {
    code: StatusCode,
    description: String,
}

impl Status {
    /// Creates a status whose description is the code's standard text.
    pub fn new(code: StatusCode) -> Self {
        Self {
            description: code.to_string(),
            code,
        }
    }

    /// Creates a status with an explicit description.
    pub fn with_description(code: StatusCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    /// Returns the outcome code.
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Returns the diagnostic description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}
