use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::ClientError;
use super::provider::LLMProvider;
use super::transport::post_json;
use super::types::{GenerationRequest, LLMResponse};
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Finish reasons for which the candidate text must not be returned.
const BLOCKED_FINISH_REASONS: &[&str] = &["RECITATION", "SAFETY", "BLOCKLIST", "PROHIBITED_CONTENT"];

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
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
impl LLMProvider for GeminiProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<LLMResponse, ClientError> {
        let body = generate_content_body(request);

        let url = generate_content_url(&self.base_url, &self.model)?;
        let builder = self.client.post(url).header("x-goog-api-key", &self.api_key);

        let data = post_json("Google", builder, &body, &self.api_key).await?;
        let response = parse_generate_content(&self.model, &data)?;

        debug!(model = %self.model, input_tokens = response.input_tokens, output_tokens = response.output_tokens, "Gemini completion");
        Ok(response)
    }

    fn provider_name(&self) -> &str { "Google" }
    fn model_name(&self) -> &str { &self.model }
}

/// `{base}/v1beta/models/{model}:generateContent`, with the model name
/// escaped as a single path segment.
fn generate_content_url(base_url: &str, model: &str) -> Result<Url, ClientError> {
    let invalid = |message: String| ClientError::Transport { vendor: "Google", message };

    let mut url = Url::parse(base_url).map_err(|e| invalid(format!("invalid base URL {}: {}", base_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| invalid(format!("base URL {} cannot carry a path", base_url)))?
        .pop_if_empty()
        .extend(["v1beta", "models", &format!("{}:generateContent", model)]);
    Ok(url)
}

/// The context rides in front of the prompt as its own part of the single
/// user turn.
fn generate_content_body(request: &GenerationRequest) -> Value {
    let mut parts = Vec::with_capacity(2);
    if let Some(sys) = request.system() {
        parts.push(json!({"text": sys}));
    }
    parts.push(json!({"text": request.prompt}));

    json!({
        "contents": [{"role": "user", "parts": parts}],
        "generationConfig": {
            "temperature": request.temperature,
            "maxOutputTokens": request.max_tokens,
        }
    })
}

fn parse_generate_content(model: &str, data: &Value) -> Result<LLMResponse, ClientError> {
    if let Some(reason) = data["promptFeedback"]["blockReason"].as_str() {
        return Err(ClientError::Vendor {
            vendor: "Google",
            message: format!("prompt blocked: {}", reason),
        });
    }

    let candidate = &data["candidates"][0];
    if candidate.is_null() {
        return Err(ClientError::InvalidResponse {
            vendor: "Google",
            message: "no candidates in response".into(),
        });
    }

    if let Some(reason) = candidate["finishReason"].as_str() {
        if BLOCKED_FINISH_REASONS.contains(&reason) {
            return Err(ClientError::Vendor {
                vendor: "Google",
                message: format!("response contained {}", reason.to_lowercase()),
            });
        }
    }

    let content: String = candidate["content"]["parts"].as_array()
        .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
        .ok_or_else(|| ClientError::InvalidResponse {
            vendor: "Google",
            message: "candidate has no content parts".into(),
        })?;

    Ok(LLMResponse {
        content,
        input_tokens: data["usageMetadata"]["promptTokenCount"].as_u64(),
        output_tokens: data["usageMetadata"]["candidatesTokenCount"].as_u64(),
        model: model.to_string(),
    })
}
