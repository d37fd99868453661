//! Error types for the workout relay.

/// Top-level error type for the relay.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Event error: {0}")]
    Event(#[from] EventError),

    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("Notion error: {0}")]
    Notion(#[from] NotionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Inbound webhook decoding errors. All of these are the caller's fault.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Request body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Event has no body")]
    MissingBody,
}

/// Parameter store failures.
///
/// A parameter that simply has no value is not an error; stores return
/// `Ok(None)` for that case.
#[derive(Debug, thiserror::Error)]
pub enum ParameterError {
    #[error("Lookup of parameter {name} failed: {reason}")]
    Lookup { name: String, reason: String },

    #[error("Parameter {name} is not valid unicode")]
    NotUnicode { name: String },
}

/// Document-store (Notion) request errors.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to encode page: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NotionError {
    /// Short category name reported alongside the message in 500 responses.
    pub fn category(&self) -> &'static str {
        match self {
            NotionError::ClientBuild(_) => "ClientBuildError",
            NotionError::Transport(_) => "TransportError",
            NotionError::Serialization(_) => "SerializationError",
        }
    }
}

/// Result type alias for the relay.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notion_error_categories() {
        let err = NotionError::ClientBuild("no tls".into());
        assert_eq!(err.category(), "ClientBuildError");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            NotionError::from(json_err).category(),
            "SerializationError"
        );
    }

    #[test]
    fn top_level_error_wraps_parameter_error() {
        let err: Error = ParameterError::NotUnicode {
            name: "/NOTION_API_KEY".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Parameter error: Parameter /NOTION_API_KEY is not valid unicode"
        );
    }
}
