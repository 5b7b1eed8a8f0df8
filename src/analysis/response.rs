use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error code for every failed analysis, whatever the underlying cause
pub const ANALYSIS_FAILED: &str = "ANALYSIS_FAILED";

/// Structured failure carried by [`ApiResponse::Failure`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn analysis_failed(message: impl Into<String>) -> Self {
        Self::new(ANALYSIS_FAILED, message)
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Outcome of a wrapped API call: a value or an error, never both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Success {
        data: T,
        timestamp: DateTime<Utc>,
    },
    Failure {
        error: ApiError,
        timestamp: DateTime<Utc>,
    },
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse::Success {
            data,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(error: ApiError) -> Self {
        ApiResponse::Failure {
            error,
            timestamp: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ApiResponse::Success { timestamp, .. } | ApiResponse::Failure { timestamp, .. } => {
                *timestamp
            }
        }
    }

    /// Convert into a std `Result`, dropping the timestamp
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Success { data, .. } => Ok(data),
            ApiResponse::Failure { error, .. } => Err(error),
        }
    }
}
