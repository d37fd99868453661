//! Response returned to whatever invoked the relay.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// `{statusCode, body}` where `body` is a JSON document encoded as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    fn new(status_code: u16, body: Value) -> Self {
        Self {
            status_code,
            body: body.to_string(),
        }
    }

    /// The inbound body was not JSON.
    pub fn malformed_input() -> Self {
        Self::new(400, json!({ "message": "Invalid JSON in request body" }))
    }

    /// Credentials are not configured; nothing was written.
    pub fn test_mode(user_message: &str) -> Self {
        Self::new(
            200,
            json!({
                "message": "Test mode: Notion parameters are not set",
                "user_message": user_message,
            }),
        )
    }

    /// The parameter store itself failed.
    pub fn parameter_failure(error: &str) -> Self {
        Self::new(
            500,
            json!({
                "message": "Failed to retrieve parameters",
                "error": error,
            }),
        )
    }

    /// Notion accepted the page.
    pub fn recorded(preview: &str) -> Self {
        Self::new(
            200,
            json!({
                "message": "Successfully recorded workout to Notion",
                "notion_response": preview,
            }),
        )
    }

    /// Notion answered with a non-2xx status, mirrored here.
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::new(
            status,
            json!({
                "message": "Notion API error",
                "notion_response": body,
            }),
        )
    }

    /// Anything else.
    pub fn internal_error(category: &str, message: &str) -> Self {
        Self::new(
            500,
            json!({
                "message": "Internal server error",
                "error": format!("{category}: {message}"),
            }),
        )
    }

    /// Decode `body` back into JSON.
    pub fn body_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
