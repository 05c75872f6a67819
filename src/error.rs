use thiserror::Error;

/// Why a remote itinerary could not be used.
///
/// These never escape the planner: they are turned into a warning message
/// shown next to a substituted fallback plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Failed to reach itinerary service: {0}")]
    Transport(String),

    #[error("API Error: {}", status_line(.status, .reason))]
    Status { status: u16, reason: String },

    #[error("{0}")]
    Schema(String),
}

fn status_line(status: &u16, reason: &str) -> String {
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{} {}", status, reason)
    }
}

impl FetchError {
    /// Message used when the body parses but carries no itinerary.
    pub const INVALID_FORMAT: &'static str = "Invalid response format from API";

    pub fn invalid_format() -> Self {
        FetchError::Schema(Self::INVALID_FORMAT.to_string())
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "TRANSPORT_ERROR",
            FetchError::Status { .. } => "RESPONSE_STATUS_ERROR",
            FetchError::Schema(_) => "SCHEMA_ERROR",
        }
    }
}

/// Main error type for the tour guide client
#[derive(Error, Debug)]
pub enum TourGuideError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TourGuideError>;

impl TourGuideError {
    /// Get the error code for structured output
    pub fn error_code(&self) -> &'static str {
        match self {
            TourGuideError::Config(_) => "CONFIG_ERROR",
            TourGuideError::Input(_) => "INPUT_ERROR",
            TourGuideError::Fetch(err) => err.error_code(),
            TourGuideError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_matches_banner_text() {
        let err = FetchError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "API Error: 500 Internal Server Error");
        assert_eq!(err.error_code(), "RESPONSE_STATUS_ERROR");
    }

    #[test]
    fn test_status_without_reason_has_no_trailing_space() {
        let err = FetchError::Status {
            status: 599,
            reason: String::new(),
        };
        assert_eq!(err.to_string(), "API Error: 599");
    }

    #[test]
    fn test_fetch_error_passes_through() {
        let err: TourGuideError = FetchError::invalid_format().into();
        assert_eq!(err.to_string(), "Invalid response format from API");
        assert_eq!(err.error_code(), "SCHEMA_ERROR");

        let payload = err.to_error_payload();
        assert_eq!(payload["error"]["code"], "SCHEMA_ERROR");
    }
}
