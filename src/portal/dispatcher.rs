use std::fmt;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::{CredentialSource, EnvCredentials, ModelDirectory};
use crate::errors::PortalError;
use crate::llm::{create_provider, GenerationOptions, GenerationRequest, LLMProvider, LLMResponse};

/// One model, one provider client, one calling convention.
///
/// The client and its HTTP session are owned by the portal and released
/// when it is dropped or [`Portal::close`]d.
pub struct Portal {
    model: String,
    provider: String,
    client: Box<dyn LLMProvider>,
    system_context: Option<String>,
}

impl Portal {
    /// Resolve `model` through the default model directory, reading the
    /// provider credential from the environment.
    pub async fn new(model: &str) -> Result<Self, PortalError> {
        let directory = ModelDirectory::load_default().await?;
        Self::from_directory(model, &directory, &EnvCredentials)
    }

    pub async fn with_directory_file(model: &str, path: &Path) -> Result<Self, PortalError> {
        let directory = ModelDirectory::load(path).await?;
        Self::from_directory(model, &directory, &EnvCredentials)
    }

    pub fn from_directory(
        model: &str,
        directory: &ModelDirectory,
        credentials: &dyn CredentialSource,
    ) -> Result<Self, PortalError> {
        let resolution = directory.resolve(model)?;
        let client = create_provider(&resolution.provider, model, resolution.endpoint.as_deref(), credentials)?;
        info!(model, provider = %resolution.provider, "Portal ready");

        Ok(Self {
            model: model.to_string(),
            provider: resolution.provider,
            client,
            system_context: None,
        })
    }

    /// Wrap an already-built client, bypassing directory resolution.
    pub fn with_client(model: &str, client: Box<dyn LLMProvider>) -> Self {
        Self {
            model: model.to_string(),
            provider: client.provider_name().to_string(),
            client,
            system_context: None,
        }
    }

    /// Set the system context sent with every subsequent call.
    pub fn set_context(&mut self, system_context: impl Into<String>) {
        self.system_context = Some(system_context.into());
    }

    pub fn context(&self) -> Option<&str> {
        self.system_context.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Generate with the default temperature (0.2) and token limit (1000).
    pub async fn generate(&self, prompt: &str) -> Result<String, PortalError> {
        self.generate_with(prompt, GenerationOptions::default()).await
    }

    pub async fn generate_with(&self, prompt: &str, options: GenerationOptions) -> Result<String, PortalError> {
        let request = GenerationRequest::with_options(prompt, self.system_context.as_deref(), options);

        let started = Instant::now();
        let response = self.client.generate(&request).await.map_err(|e| {
            warn!(model = %self.model, provider = %self.provider, error_type = e.error_type(), error = %e, "Generation failed");
            PortalError::from(e)
        })?;

        debug!(
            model = %self.model,
            provider = %self.provider,
            output_tokens = response.output_tokens,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generation complete"
        );

        Ok(enforce_token_limit(response, options.max_tokens))
    }

    /// Release the client now rather than at scope exit.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Portal {
    fn drop(&mut self) {
        debug!(model = %self.model, provider = %self.provider, "Portal closed");
    }
}

impl fmt::Debug for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Portal")
            .field("model", &self.model)
            .field("provider", &self.provider)
            .field("system_context", &self.system_context)
            .finish_non_exhaustive()
    }
}

/// Vendors that overshoot `max_tokens` get their text cut to `max_tokens`
/// characters.
fn enforce_token_limit(response: LLMResponse, max_tokens: u32) -> String {
    match response.output_tokens {
        Some(used) if used > u64::from(max_tokens) => {
            warn!(
                output_tokens = used,
                max_tokens,
                "Response length exceeded max_tokens, truncating"
            );
            response.content.chars().take(max_tokens as usize).collect()
        }
        _ => response.content,
    }
}
