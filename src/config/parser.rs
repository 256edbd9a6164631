use std::path::Path;
use crate::errors::PortalError;
use super::types::DirectoryConfig;
use super::security::validate_endpoints;
use super::schema::DIRECTORY_SCHEMA;
use tracing::{debug, warn};

const MAX_DIRECTORY_BYTES: u64 = 1_048_576;

pub async fn parse_directory(path: &Path) -> Result<DirectoryConfig, PortalError> {
    if !path.exists() {
        return Err(PortalError::Config(format!("Model directory not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_DIRECTORY_BYTES {
        return Err(PortalError::Config("Model directory exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    debug!(path = %path.display(), bytes = content.len(), "Loaded model directory");
    parse_directory_str(&content)
}

pub fn parse_directory_str(content: &str) -> Result<DirectoryConfig, PortalError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Err(PortalError::Config("Model directory is empty".into()));
    }

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: DirectoryConfig = serde_yaml::from_value(yaml)?;

    // Semantic validation
    validate_endpoints(&config)?;

    Ok(config)
}

/// Validate the directory against the JSON schema. Advisory only: missing
/// entries surface as configuration errors at resolve time.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), PortalError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| PortalError::Config(format!("Model directory conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&DIRECTORY_SCHEMA)
        .map_err(|e| PortalError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Model directory schema warning");
        }
    }

    Ok(())
}
