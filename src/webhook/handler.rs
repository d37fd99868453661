//! Per-invocation orchestration: decode → credentials → parse → submit.

use std::sync::Arc;

use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use super::event::RawEvent;
use super::response::InvocationResponse;
use crate::config::RelayConfig;
use crate::notion::{NotionClient, SubmissionOutcome};
use crate::params::{Credentials, EnvParameterStore, ParameterStore};
use crate::training::{self, parse_message};

/// Handles one webhook event at a time. Holds no per-invocation state.
#[derive(Clone)]
pub struct Relay {
    params: Arc<dyn ParameterStore>,
    notion: NotionClient,
}

impl Relay {
    pub fn new(params: Arc<dyn ParameterStore>, notion: NotionClient) -> Self {
        Self { params, notion }
    }

    /// Env-backed parameters and a Notion client built from `config`.
    pub fn from_config(config: &RelayConfig) -> crate::error::Result<Self> {
        let params = Arc::new(EnvParameterStore::new(config.param_prefix.clone()));
        let notion = NotionClient::from_config(config)?;
        Ok(Self::new(params, notion))
    }

    /// Process one event. Every outcome, including failures, is a response.
    pub async fn handle(&self, event: &RawEvent) -> InvocationResponse {
        let span = info_span!("invocation", request_id = %Uuid::new_v4());
        self.process(event).instrument(span).await
    }

    async fn process(&self, event: &RawEvent) -> InvocationResponse {
        let payload = match event.payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Rejecting webhook body");
                return InvocationResponse::malformed_input();
            }
        };

        let user_message = payload.user_message();
        info!(chars = user_message.chars().count(), "Received workout message");

        let credentials = match Credentials::load(self.params.as_ref()).await {
            Ok(Some(credentials)) => credentials,
            Ok(None) => {
                warn!("Notion parameters not set, skipping write (test mode)");
                return InvocationResponse::test_mode(user_message);
            }
            Err(e) => {
                error!(error = %e, "Parameter lookup failed");
                return InvocationResponse::parameter_failure(&e.to_string());
            }
        };

        let session = parse_message(user_message, training::today());
        info!(
            training_type = %session.training_type,
            recorded_slots = session.recorded_slots(),
            "Submitting workout"
        );

        match self.notion.submit(&credentials, &session).await {
            SubmissionOutcome::Success { preview, .. } => InvocationResponse::recorded(&preview),
            SubmissionOutcome::Rejected { status, body } => {
                InvocationResponse::rejected(status, &body)
            }
            SubmissionOutcome::Failed(e) => {
                InvocationResponse::internal_error(e.category(), &e.to_string())
            }
        }
    }
}
