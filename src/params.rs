//! Parameter store, where the relay gets its Notion credentials.
//!
//! A lookup has three outcomes: the value, no value (`Ok(None)`), or a store
//! failure. Callers treat "no value" as a soft condition (test mode) and a
//! store failure as a hard one.

use std::collections::HashMap;
use std::env::VarError;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::ParameterError;

/// Parameter holding the Notion integration token.
pub const NOTION_API_KEY_PARAM: &str = "/NOTION_API_KEY";

/// Parameter holding the target database id.
pub const NOTION_DATABASE_ID_PARAM: &str = "/NOTION_DATABASE_ID";

/// Key/value secret lookup.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch and decrypt a parameter by name.
    async fn get_parameter(&self, name: &str) -> Result<Option<SecretString>, ParameterError>;
}

/// Reads parameters from environment variables.
///
/// `/NOTION_API_KEY` maps to `{prefix}NOTION_API_KEY`; nested path
/// separators become underscores. Empty values count as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvParameterStore {
    prefix: String,
}

impl EnvParameterStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable consulted for a parameter name.
    pub fn env_var_name(&self, name: &str) -> String {
        let key = name.trim_start_matches('/').replace('/', "_");
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl ParameterStore for EnvParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<Option<SecretString>, ParameterError> {
        let var = self.env_var_name(name);
        match std::env::var(&var) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(SecretString::from(value))),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ParameterError::NotUnicode {
                name: name.to_string(),
            }),
        }
    }
}

/// In-memory parameter store.
#[derive(Debug, Clone, Default)]
pub struct StaticParameterStore {
    values: HashMap<String, String>,
}

impl StaticParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl ParameterStore for StaticParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<Option<SecretString>, ParameterError> {
        Ok(self
            .values
            .get(name)
            .map(|v| SecretString::from(v.clone())))
    }
}

/// Credentials needed for one Notion write.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: SecretString,
    pub database_id: String,
}

impl Credentials {
    /// Look up both parameters. `Ok(None)` if either has no value.
    pub async fn load(store: &dyn ParameterStore) -> Result<Option<Self>, ParameterError> {
        let api_key = store.get_parameter(NOTION_API_KEY_PARAM).await?;
        let database_id = store.get_parameter(NOTION_DATABASE_ID_PARAM).await?;

        match (api_key, database_id) {
            (Some(api_key), Some(database_id)) => Ok(Some(Self {
                api_key,
                database_id: database_id.expose_secret().to_string(),
            })),
            (api_key, database_id) => {
                debug!(
                    api_key_set = api_key.is_some(),
                    database_id_set = database_id.is_some(),
                    "Notion parameters incomplete"
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    #[async_trait]
    impl ParameterStore for BrokenStore {
        async fn get_parameter(&self, name: &str) -> Result<Option<SecretString>, ParameterError> {
            Err(ParameterError::Lookup {
                name: name.to_string(),
                reason: "AccessDenied".into(),
            })
        }
    }

    #[test]
    fn env_var_name_strips_leading_slash() {
        let store = EnvParameterStore::new("");
        assert_eq!(store.env_var_name("/NOTION_API_KEY"), "NOTION_API_KEY");
    }

    #[test]
    fn env_var_name_applies_prefix_and_flattens_paths() {
        let store = EnvParameterStore::new("PROD_");
        assert_eq!(store.env_var_name("/relay/NOTION_API_KEY"), "PROD_relay_NOTION_API_KEY");
    }

    #[tokio::test]
    async fn env_store_missing_var_is_none() {
        let store = EnvParameterStore::new("WORKOUT_RELAY_TEST_SURELY_UNSET_");
        let value = store.get_parameter(NOTION_API_KEY_PARAM).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn env_store_reads_present_var() {
        let store = EnvParameterStore::new("");
        let expected = std::env::var("PATH").unwrap();
        let value = store.get_parameter("/PATH").await.unwrap().unwrap();
        assert_eq!(value.expose_secret(), expected);
    }

    #[tokio::test]
    async fn credentials_load_both_present() {
        let store = StaticParameterStore::new()
            .with(NOTION_API_KEY_PARAM, "secret_abc")
            .with(NOTION_DATABASE_ID_PARAM, "db-123");
        let creds = Credentials::load(&store).await.unwrap().unwrap();
        assert_eq!(creds.api_key.expose_secret(), "secret_abc");
        assert_eq!(creds.database_id, "db-123");
    }

    #[tokio::test]
    async fn credentials_missing_database_id_is_none() {
        let store = StaticParameterStore::new().with(NOTION_API_KEY_PARAM, "secret_abc");
        assert!(Credentials::load(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn credentials_missing_both_is_none() {
        assert!(
            Credentials::load(&StaticParameterStore::new())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn credentials_store_failure_propagates() {
        let err = Credentials::load(&BrokenStore).await.unwrap_err();
        assert!(err.to_string().contains("AccessDenied"));
        assert!(err.to_string().contains(NOTION_API_KEY_PARAM));
    }

    #[test]
    fn credentials_debug_redacts_api_key() {
        let creds = Credentials {
            api_key: SecretString::from("secret_abc"),
            database_id: "db".into(),
        };
        assert!(!format!("{creds:?}").contains("secret_abc"));
    }
}
