//! Inbound event decoding.
//!
//! The host delivers a proxy-style event whose `body` is itself a JSON
//! document encoded as a string. The chat platform puts the user's text at
//! `events[0].message.text`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EventError;

/// Placeholder used when the payload carries no message text.
pub const NO_MESSAGE: &str = "No message";

const MESSAGE_TEXT_POINTER: &str = "/events/0/message/text";

/// One invocation's input, as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub body: Option<String>,
}

impl RawEvent {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    /// Decode the JSON-encoded body.
    pub fn payload(&self) -> Result<WebhookPayload, EventError> {
        let body = self.body.as_deref().ok_or(EventError::MissingBody)?;
        WebhookPayload::parse(body)
    }
}

/// Decoded webhook body.
#[derive(Debug, Clone)]
pub struct WebhookPayload {
    value: Value,
}

impl WebhookPayload {
    pub fn parse(body: &str) -> Result<Self, EventError> {
        Ok(Self {
            value: serde_json::from_str(body)?,
        })
    }

    /// Text of the first event's message, or [`NO_MESSAGE`].
    pub fn user_message(&self) -> &str {
        self.value
            .pointer(MESSAGE_TEXT_POINTER)
            .and_then(Value::as_str)
            .unwrap_or(NO_MESSAGE)
    }
}
