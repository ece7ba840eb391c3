//! Generation backends behind one trait: the mocked responder and the
//! locally hosted server client.

use anyhow::Result;
use async_trait::async_trait;

pub mod mock;
pub mod ollama;

pub use mock::MockBackend;
pub use ollama::OllamaBackend;

use crate::GenerationRequest;

#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Backend name, for logs and diagnostics.
    fn name(&self) -> &str;

    /// Whether the backend can currently serve requests.
    async fn is_available(&self) -> Result<bool>;

    /// Produce text for a single request.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// One entry in the model picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Models the settings panel offers for the local server.
pub fn available_models() -> &'static [ModelChoice] {
    &[
        ModelChoice { value: "llama3", label: "Llama 3" },
        ModelChoice { value: "mistral", label: "Mistral" },
        ModelChoice { value: "gemma", label: "Gemma" },
        ModelChoice { value: "phi", label: "Phi-2" },
        ModelChoice { value: "mixtral", label: "Mixtral" },
        ModelChoice { value: "codellama", label: "Code Llama" },
    ]
}
