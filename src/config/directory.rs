use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::PortalError;
use super::parser::{parse_directory, parse_directory_str};
use super::security::validate_endpoints;
use super::types::{DirectoryConfig, Resolution};

/// Environment variable overriding the default directory location.
pub const DIRECTORY_ENV_VAR: &str = "LLM_PORTAL_DIRECTORY";
pub const DEFAULT_DIRECTORY_PATH: &str = "configs/model_directory.yaml";

/// Static mapping of model name to provider, and provider to endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDirectory {
    config: DirectoryConfig,
    source: Option<PathBuf>,
}

impl ModelDirectory {
    pub async fn load(path: &Path) -> Result<Self, PortalError> {
        let config = parse_directory(path).await?;
        info!(
            path = %path.display(),
            models = config.model_providers.len(),
            providers = config.endpoints.len(),
            "Model directory loaded"
        );
        Ok(Self { config, source: Some(path.to_path_buf()) })
    }

    pub async fn load_default() -> Result<Self, PortalError> {
        Self::load(&default_path()).await
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, PortalError> {
        Ok(Self { config: parse_directory_str(content)?, source: None })
    }

    pub fn from_config(config: DirectoryConfig) -> Result<Self, PortalError> {
        validate_endpoints(&config)?;
        Ok(Self { config, source: None })
    }

    /// Resolve `model` to its provider and endpoint. A `None` endpoint means
    /// the provider's default base URL applies.
    pub fn resolve(&self, model: &str) -> Result<Resolution, PortalError> {
        let provider = self
            .config
            .model_providers
            .get(model)
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| PortalError::Config(format!("Unknown model {}", model)))?;

        let endpoint = self
            .config
            .endpoints
            .get(provider)
            .ok_or_else(|| PortalError::Config(format!("Failed to find endpoint for {}", provider)))?;

        let endpoint = endpoint.as_deref().map(str::trim).filter(|e| !e.is_empty()).map(str::to_string);
        debug!(model, provider = %provider, endpoint = ?endpoint, "Resolved model");

        Ok(Resolution { provider: provider.clone(), endpoint })
    }

    /// Configured `(model, provider)` pairs, sorted by model name.
    pub fn models(&self) -> impl Iterator<Item = (&str, &str)> {
        self.config
            .model_providers
            .iter()
            .map(|(model, provider)| (model.as_str(), provider.as_str()))
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// `$LLM_PORTAL_DIRECTORY`, falling back to `configs/model_directory.yaml`.
pub fn default_path() -> PathBuf {
    std::env::var_os(DIRECTORY_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY_PATH))
}
