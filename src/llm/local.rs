use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::ClientError;
use super::provider::LLMProvider;
use super::transport::post_json;
use super::types::{chat_messages, GenerationRequest, LLMResponse};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama's native chat API. No credential.
pub struct LocalProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl LocalProvider {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for LocalProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<LLMResponse, ClientError> {
        let body = chat_body(&self.model, request);

        let builder = self.client.post(format!("{}/api/chat", self.base_url));
        let data = post_json("Ollama", builder, &body, "").await?;

        let content = data["message"]["content"].as_str()
            .ok_or_else(|| ClientError::InvalidResponse {
                vendor: "Ollama",
                message: "no message content in response".into(),
            })?
            .to_string();

        let input_tokens = data["prompt_eval_count"].as_u64();
        let output_tokens = data["eval_count"].as_u64();
        debug!(model = %self.model, input_tokens, output_tokens, "Ollama completion");

        Ok(LLMResponse { content, input_tokens, output_tokens, model: self.model.clone() })
    }

    fn provider_name(&self) -> &str { "localhost" }
    fn model_name(&self) -> &str { &self.model }
}

fn chat_body(model: &str, request: &GenerationRequest) -> Value {
    json!({
        "model": model,
        "messages": chat_messages(request),
        "stream": false,
        "options": {
            "temperature": request.temperature,
            "num_predict": request.max_tokens,
        }
    })
}
