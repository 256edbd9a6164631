use async_trait::async_trait;
use crate::errors::ClientError;
use super::types::{GenerationRequest, LLMResponse};

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Single-turn completion: one outbound call, no retries.
    async fn generate(&self, request: &GenerationRequest) -> Result<LLMResponse, ClientError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
