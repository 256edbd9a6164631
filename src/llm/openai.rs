use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::ClientError;
use super::provider::LLMProvider;
use super::transport::post_json;
use super::types::{chat_messages, GenerationRequest, LLMResponse};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIProvider {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<LLMResponse, ClientError> {
        let body = chat_completion_body(&self.model, request);

        let builder = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key);

        let data = post_json("OpenAI", builder, &body, &self.api_key).await?;
        let response = parse_chat_completion("OpenAI", &self.model, &data)?;

        debug!(model = %self.model, input_tokens = response.input_tokens, output_tokens = response.output_tokens, "OpenAI completion");
        Ok(response)
    }

    fn provider_name(&self) -> &str { "Open_AI" }
    fn model_name(&self) -> &str { &self.model }
}

/// Request body for the OpenAI chat completions schema, also spoken by the
/// aggregators.
pub(crate) fn chat_completion_body(model: &str, request: &GenerationRequest) -> Value {
    json!({
        "model": model,
        "messages": chat_messages(request),
        "temperature": request.temperature,
        "max_tokens": request.max_tokens,
    })
}

pub(crate) fn parse_chat_completion(
    vendor: &'static str,
    model: &str,
    data: &Value,
) -> Result<LLMResponse, ClientError> {
    let content = data["choices"][0]["message"]["content"].as_str()
        .ok_or_else(|| ClientError::InvalidResponse {
            vendor,
            message: "no content in choices[0].message".into(),
        })?
        .to_string();

    Ok(LLMResponse {
        content,
        input_tokens: data["usage"]["prompt_tokens"].as_u64(),
        output_tokens: data["usage"]["completion_tokens"].as_u64(),
        model: data["model"].as_str().unwrap_or(model).to_string(),
    })
}
