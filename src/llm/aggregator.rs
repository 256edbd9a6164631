use async_trait::async_trait;
use reqwest::Client;
use crate::errors::ClientError;
use super::openai::{chat_completion_body, parse_chat_completion};
use super::provider::LLMProvider;
use super::transport::post_json;
use super::types::{GenerationRequest, LLMResponse};
use tracing::debug;

/// Attribution sent to OpenRouter for app rankings.
const APP_TITLE: &str = "llm-portal";

/// Multi-model hosts that speak the OpenAI chat completions schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregator {
    TogetherAI,
    OpenRouter,
}

impl Aggregator {
    pub const fn vendor(&self) -> &'static str {
        match self {
            Self::TogetherAI => "Together AI",
            Self::OpenRouter => "OpenRouter",
        }
    }

    pub const fn provider_id(&self) -> &'static str {
        match self {
            Self::TogetherAI => "Together_AI",
            Self::OpenRouter => "OpenRouter",
        }
    }

    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::TogetherAI => "https://api.together.xyz/v1",
            Self::OpenRouter => "https://openrouter.ai/api/v1",
        }
    }
}

pub struct AggregatorProvider {
    client: Client,
    aggregator: Aggregator,
    api_key: String,
    model: String,
    base_url: String,
}

impl AggregatorProvider {
    pub fn new(aggregator: Aggregator, api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            aggregator,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for AggregatorProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<LLMResponse, ClientError> {
        let vendor = self.aggregator.vendor();
        let body = chat_completion_body(&self.model, request);

        let mut builder = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key);
        if self.aggregator == Aggregator::OpenRouter {
            builder = builder
                .header("HTTP-Referer", APP_TITLE)
                .header("X-Title", APP_TITLE);
        }

        let data = post_json(vendor, builder, &body, &self.api_key).await?;
        let response = parse_chat_completion(vendor, &self.model, &data)?;

        debug!(vendor, model = %self.model, output_tokens = response.output_tokens, "Aggregator completion");
        Ok(response)
    }

    fn provider_name(&self) -> &str { self.aggregator.provider_id() }
    fn model_name(&self) -> &str { &self.model }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_ids() {
        assert_eq!(Aggregator::TogetherAI.provider_id(), "Together_AI");
        assert_eq!(Aggregator::OpenRouter.provider_id(), "OpenRouter");
    }

    #[test]
    fn test_provider_name_follows_aggregator() {
        let provider = AggregatorProvider::new(Aggregator::TogetherAI, "k", "meta-llama/Llama-3-70b-chat-hf", "https://api.together.xyz/v1/");
        assert_eq!(provider.provider_name(), "Together_AI");
        assert_eq!(provider.base_url, "https://api.together.xyz/v1");
    }
}
