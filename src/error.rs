//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Failure raised by the serializer collaborator while turning a value
/// into JSON.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SerializeError {
    #[error("JSON encoding failed: {0}")]
    Json(String),

    #[error("Non-finite number: {0}")]
    NonFiniteNumber(String),

    #[error("{0}")]
    Custom(String),
}

impl From<serde_json::Error> for SerializeError {
    fn from(err: serde_json::Error) -> Self {
        SerializeError::Json(err.to_string())
    }
}

/// Failure raised while building a response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[from] SerializeError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    Invalid { key: String, value: String },
}
