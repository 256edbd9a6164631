use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::ClientError;
use super::provider::LLMProvider;
use super::transport::post_json;
use super::types::{GenerationRequest, LLMResponse};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<LLMResponse, ClientError> {
        let body = messages_body(&self.model, request);

        let builder = self.client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION);

        let data = post_json("Anthropic", builder, &body, &self.api_key).await?;

        // Text blocks only; tool_use and thinking blocks carry no reply text.
        let content = data["content"].as_array()
            .map(|blocks| {
                blocks.iter()
                    .filter(|b| b["type"].as_str().map_or(true, |t| t == "text"))
                    .filter_map(|b| b["text"].as_str())
                    .collect::<String>()
            })
            .ok_or_else(|| ClientError::InvalidResponse {
                vendor: "Anthropic",
                message: "response has no content array".into(),
            })?;

        let input_tokens = data["usage"]["input_tokens"].as_u64();
        let output_tokens = data["usage"]["output_tokens"].as_u64();

        debug!(model = %self.model, input_tokens, output_tokens, "Anthropic completion");

        Ok(LLMResponse {
            content,
            input_tokens,
            output_tokens,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { "Anthropic" }
    fn model_name(&self) -> &str { &self.model }
}

fn messages_body(model: &str, request: &GenerationRequest) -> Value {
    let mut body = json!({
        "model": model,
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
        "messages": [{"role": "user", "content": request.prompt}]
    });

    if let Some(sys) = request.system() {
        body["system"] = json!(sys);
    }
    body
}
