//! Webhook invocation handling.

pub mod event;
pub mod handler;
pub mod response;

pub use event::{NO_MESSAGE, RawEvent, WebhookPayload};
pub use handler::Relay;
pub use response::InvocationResponse;
