//! Notion pages client. Performs the single outbound write.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use secrecy::ExposeSecret;
use tracing::{error, info, warn};

use super::properties::PageCreate;
use crate::config::RelayConfig;
use crate::error::NotionError;
use crate::params::Credentials;
use crate::training::TrainingSession;

/// Path of the page-create endpoint.
const PAGES_PATH: &str = "/v1/pages";

/// Maximum characters of a success response kept for the caller.
pub const PREVIEW_CHARS: usize = 200;

/// Result of one page-create attempt.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// 2xx from Notion; `preview` holds at most [`PREVIEW_CHARS`] characters.
    Success { status: u16, preview: String },
    /// Non-2xx from Notion, with the full response text.
    Rejected { status: u16, body: String },
    /// The request never produced a response.
    Failed(NotionError),
}

/// Client for Notion's page-create API.
#[derive(Debug, Clone)]
pub struct NotionClient {
    client: reqwest::Client,
    base_url: String,
    version: String,
}

impl NotionClient {
    pub fn new(
        base_url: impl Into<String>,
        version: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotionError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            version: version.into(),
        })
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, NotionError> {
        Self::new(
            config.notion_api_base.clone(),
            config.notion_version.clone(),
            config.notion_timeout,
        )
    }

    fn pages_url(&self) -> String {
        format!("{}{PAGES_PATH}", self.base_url.trim_end_matches('/'))
    }

    /// Create one page for `session` in the credentials' database.
    ///
    /// Exactly one request is attempted. There is no retry and no
    /// idempotency key, so a repeated call creates a duplicate page.
    pub async fn submit(
        &self,
        credentials: &Credentials,
        session: &TrainingSession,
    ) -> SubmissionOutcome {
        let outcome = match self.create_page(credentials, session).await {
            Ok(outcome) => outcome,
            Err(e) => SubmissionOutcome::Failed(e),
        };

        match &outcome {
            SubmissionOutcome::Success { status, .. } => {
                info!(status, "Notion page created");
            }
            SubmissionOutcome::Rejected { status, body } => {
                warn!(status, body = %body, "Notion rejected page create");
            }
            SubmissionOutcome::Failed(e) => {
                error!(category = e.category(), error = %e, "Notion request failed");
            }
        }
        outcome
    }

    async fn create_page(
        &self,
        credentials: &Credentials,
        session: &TrainingSession,
    ) -> Result<SubmissionOutcome, NotionError> {
        let page = PageCreate::new(&credentials.database_id, session);
        let body = serde_json::to_vec(&page)?;

        let resp = self
            .client
            .post(self.pages_url())
            .bearer_auth(credentials.api_key.expose_secret())
            .header("Notion-Version", &self.version)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await?;
        let text = String::from_utf8_lossy(&bytes);

        if status.is_success() {
            Ok(SubmissionOutcome::Success {
                status: status.as_u16(),
                preview: truncate_chars(&text, PREVIEW_CHARS),
            })
        } else {
            Ok(SubmissionOutcome::Rejected {
                status: status.as_u16(),
                body: text.into_owned(),
            })
        }
    }
}

/// First `max` characters of `s` (characters, not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
