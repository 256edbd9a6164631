#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use llm_portal::{ClientError, GenerationRequest, LLMProvider, LLMResponse, ModelDirectory};

/// Directory with a single model routed to `provider` at `endpoint`.
pub fn single_model_directory(model: &str, provider: &str, endpoint: &str) -> ModelDirectory {
    let yaml = format!(
        "model_providers:\n  {model}: {provider}\nendpoints:\n  {provider}: {endpoint}\n"
    );
    ModelDirectory::from_yaml_str(&yaml).unwrap()
}

/// Test double that records every request and counts its own release.
pub struct RecordingProvider {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub releases: Arc<AtomicUsize>,
    pub reply: Result<LLMResponse, u16>,
}

impl RecordingProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            requests: Arc::default(),
            releases: Arc::default(),
            reply: Ok(LLMResponse {
                content: text.to_string(),
                input_tokens: None,
                output_tokens: None,
                model: "stub-model".to_string(),
            }),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            requests: Arc::default(),
            releases: Arc::default(),
            reply: Err(status),
        }
    }
}

#[async_trait]
impl LLMProvider for RecordingProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<LLMResponse, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(response) => Ok(response.clone()),
            Err(status) => Err(ClientError::Status {
                vendor: "Stub",
                status: *status,
                message: "stubbed failure".to_string(),
            }),
        }
    }

    fn provider_name(&self) -> &str { "Stub" }
    fn model_name(&self) -> &str { "stub-model" }
}

impl Drop for RecordingProvider {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}
