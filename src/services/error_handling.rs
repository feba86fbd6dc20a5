use thiserror::Error;

/// Errors surfaced by the GraphQL transport, repository and service layers.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Server returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("GraphQL error: {}", messages.join("; "))]
    GraphQL { messages: Vec<String> },

    #[error("Response did not contain {field}")]
    MissingData { field: String },

    #[error("Schedule not found: {id}")]
    ScheduleNotFound { id: String },

    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl ScheduleError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScheduleError::ScheduleNotFound { .. })
    }

    /// Short text for inline error banners.
    pub fn user_message(&self) -> String {
        match self {
            ScheduleError::Validation { field, reason } => format!("{} {}", field, reason),
            other => other.to_string(),
        }
    }
}
