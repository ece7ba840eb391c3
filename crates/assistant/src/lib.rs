//! Generative writing help: purpose-driven prompt templates, canned
//! offline responses, and the client for a locally hosted generation
//! server, with best-effort fallback when the server misbehaves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod backends;
pub mod canned;
pub mod prompts;

pub use backends::{available_models, GenerationBackend, MockBackend, ModelChoice, OllamaBackend};
pub use canned::{canned_response, GENERIC_FALLBACK};
pub use prompts::{build_system_instruction, build_user_prompt, GENERIC_SYSTEM_INSTRUCTION};

use settings::{GenerationConfig, SettingsStore};

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("generation server error: {status}")]
    Server { status: u16 },
    #[error("unknown purpose: {0}")]
    UnknownPurpose(String),
}

/// The kind of writing help being requested. Closed set; strings coming
/// from stored sessions or the UI go through `FromStr`, where the
/// unrecognized case surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    PlotIdea,
    CharacterDevelopment,
    Dialogue,
    SettingDescription,
    Conflict,
    Rewrite,
}

impl Purpose {
    pub const ALL: [Purpose; 6] = [
        Purpose::PlotIdea,
        Purpose::CharacterDevelopment,
        Purpose::Dialogue,
        Purpose::SettingDescription,
        Purpose::Conflict,
        Purpose::Rewrite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::PlotIdea => "plot-idea",
            Purpose::CharacterDevelopment => "character-development",
            Purpose::Dialogue => "dialogue",
            Purpose::SettingDescription => "setting-description",
            Purpose::Conflict => "conflict",
            Purpose::Rewrite => "rewrite",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = AssistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Purpose::ALL
            .into_iter()
            .find(|purpose| purpose.as_str() == s)
            .ok_or_else(|| AssistError::UnknownPurpose(s.to_string()))
    }
}

/// What a backend is asked to produce.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub purpose: Purpose,
    pub prompt: String,
    pub system: String,
}

impl GenerationRequest {
    pub fn new(purpose: Purpose, prompt: impl Into<String>) -> Self {
        Self {
            purpose,
            prompt: prompt.into(),
            system: build_system_instruction(purpose).to_string(),
        }
    }
}

/// Where a reply came from. `Fallback` is the hook the UI uses to raise
/// its transient warning notice.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyOrigin {
    Server,
    Mock,
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct GenerationReply {
    pub text: String,
    pub origin: ReplyOrigin,
}

/// Front end over the configured backend. Loads the generation
/// configuration on every call so settings saved elsewhere take effect
/// without restarting.
pub struct Assistant {
    store: SettingsStore,
    http: reqwest::Client,
    mock: MockBackend,
}

impl Assistant {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store,
            http: reqwest::Client::new(),
            mock: MockBackend::default(),
        }
    }

    pub fn with_mock(mut self, mock: MockBackend) -> Self {
        self.mock = mock;
        self
    }

    /// Produce text for `purpose`. `content` is sent to the server
    /// verbatim; use [`Assistant::assist`] to apply the user-prompt
    /// template first.
    ///
    /// Disabled configuration routes to the mock responder. A failing
    /// server call is terminal for this one request: no retry, just the
    /// canned substitute with the failure recorded in the origin.
    pub async fn generate(&self, purpose: Purpose, content: &str) -> GenerationReply {
        let config = self.store.load_generation();
        let request = GenerationRequest::new(purpose, content);

        if !config.enabled {
            let text = self
                .mock
                .generate(&request)
                .await
                .unwrap_or_else(|_| canned_response(purpose).to_string());
            return GenerationReply {
                text,
                origin: ReplyOrigin::Mock,
            };
        }

        let backend = OllamaBackend::with_client(&config, self.http.clone());
        match backend.generate(&request).await {
            Ok(text) => GenerationReply {
                text,
                origin: ReplyOrigin::Server,
            },
            Err(err) => {
                log::warn!("generation server failed, using canned response: {err:#}");
                GenerationReply {
                    text: canned_response(purpose).to_string(),
                    origin: ReplyOrigin::Fallback {
                        reason: err.to_string(),
                    },
                }
            }
        }
    }

    /// Template `context` into the purpose's user prompt, then generate.
    pub async fn assist(&self, purpose: Purpose, context: &str) -> GenerationReply {
        self.generate(purpose, &build_user_prompt(purpose, context))
            .await
    }

    /// Probe the server named by `config`. Reports reachability only;
    /// the persisted configuration is not touched, and failure is a
    /// `false`, never an error.
    pub async fn test_connection(&self, config: &GenerationConfig) -> bool {
        OllamaBackend::with_client(config, self.http.clone())
            .is_available()
            .await
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn scratch_store() -> SettingsStore {
        let root = std::env::temp_dir().join(format!("assistant-{}", uuid::Uuid::new_v4()));
        SettingsStore::open(root)
    }

    fn fast_assistant(store: SettingsStore) -> Assistant {
        Assistant::new(store).with_mock(MockBackend::new().with_delay(Duration::from_millis(1)))
    }

    #[test]
    fn test_purpose_round_trip() {
        for purpose in Purpose::ALL {
            assert_eq!(purpose.as_str().parse::<Purpose>().unwrap(), purpose);
        }
    }

    #[test]
    fn test_unknown_purpose_is_an_error() {
        assert!(matches!(
            "world-domination".parse::<Purpose>(),
            Err(AssistError::UnknownPurpose(_))
        ));
    }

    #[test]
    fn test_purpose_serde_strings() {
        let json = serde_json::to_value(Purpose::SettingDescription).unwrap();
        assert_eq!(json, "setting-description");
        let parsed: Purpose = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, Purpose::SettingDescription);
    }

    #[tokio::test]
    async fn test_disabled_config_uses_mock_responder() {
        // Default configuration has the server disabled.
        let assistant = fast_assistant(scratch_store());
        let reply = assistant.generate(Purpose::Dialogue, "anything at all").await;
        assert_eq!(reply.origin, ReplyOrigin::Mock);
        assert_eq!(reply.text, canned_response(Purpose::Dialogue));

        // The reply does not depend on the content.
        let again = assistant.generate(Purpose::Dialogue, "something else").await;
        assert_eq!(again.text, reply.text);
    }

    #[tokio::test]
    async fn test_unreachable_server_falls_back_to_canned() {
        let store = scratch_store();
        store
            .save_generation(&settings::GenerationConfig {
                enabled: true,
                server_url: "http://127.0.0.1:9".to_string(),
                model: "llama3".to_string(),
            })
            .unwrap();
        let assistant = fast_assistant(store.clone());

        let reply = assistant.generate(Purpose::Conflict, "a quiet village").await;
        assert_eq!(reply.text, canned_response(Purpose::Conflict));
        assert!(matches!(reply.origin, ReplyOrigin::Fallback { .. }));
        std::fs::remove_dir_all(store.root()).unwrap();
    }

    #[tokio::test]
    async fn test_test_connection_never_raises() {
        let assistant = fast_assistant(scratch_store());
        let config = settings::GenerationConfig {
            enabled: true,
            server_url: "http://127.0.0.1:9".to_string(),
            model: "llama3".to_string(),
        };
        assert!(!assistant.test_connection(&config).await);
    }
}
