use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    DivisionByZero,
    InvalidOperator,
    InvalidResult,
    MissingParameter,
    WrongType,
    InvalidOperationName,
    MalformedRequestBody,
    NotFound,
    Internal,
}

/// Wire-level error payload. `error` is the short title, `message` the
/// longer explanation; both strings are part of the public API contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub success: bool,
    pub code: ErrorCode,
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            error: error.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ApiError {}
