use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use settings::GenerationConfig;

use super::GenerationBackend;
use crate::{AssistError, GenerationRequest};

/// Client for a locally hosted Ollama-compatible generation server.
/// One request per call; failures are terminal for that call.
pub struct OllamaBackend {
    server_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaBackend {
    pub fn new(config: &GenerationConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Reuse an existing HTTP client; `reqwest::Client` clones share a
    /// connection pool.
    pub fn with_client(config: &GenerationConfig, client: reqwest::Client) -> Self {
        Self {
            server_url: config.server_url.clone(),
            model: config.model.clone(),
            client,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateReply {
    response: String,
}

#[async_trait]
impl GenerationBackend for OllamaBackend {
    fn name(&self) -> &str {
        "ollama"
    }

    /// Probe the tags endpoint. Any 2xx is success; transport errors
    /// report unavailability rather than failing.
    async fn is_available(&self) -> Result<bool> {
        match self
            .client
            .get(format!("{}/api/tags", self.server_url))
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let body = GenerateBody {
            model: &self.model,
            prompt: &request.prompt,
            system: &request.system,
            stream: false,
        };
        let response = self
            .client
            .post(format!("{}/api/generate", self.server_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistError::Server {
                status: response.status().as_u16(),
            }
            .into());
        }

        let reply: GenerateReply = response.json().await?;
        Ok(reply.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Purpose;

    fn unreachable_backend() -> OllamaBackend {
        OllamaBackend::new(&GenerationConfig {
            enabled: true,
            server_url: "http://127.0.0.1:9".to_string(),
            model: "llama3".to_string(),
        })
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateBody {
            model: "llama3",
            prompt: "Write a scene.",
            system: "You are a helpful writing assistant.",
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["prompt"], "Write a scene.");
        assert_eq!(json["system"], "You are a helpful writing assistant.");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_reply_parses_response_field() {
        let reply: GenerateReply =
            serde_json::from_str(r#"{"response":"Once upon a time","done":true}"#).unwrap();
        assert_eq!(reply.response, "Once upon a time");
    }

    #[tokio::test]
    async fn test_is_available_false_when_unreachable() {
        assert!(!unreachable_backend().is_available().await.unwrap());
    }

    #[tokio::test]
    async fn test_generate_errors_when_unreachable() {
        let err = unreachable_backend()
            .generate(&GenerationRequest::new(Purpose::Rewrite, "text"))
            .await;
        assert!(err.is_err());
    }
}
