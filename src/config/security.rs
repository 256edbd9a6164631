use url::Url;

use crate::errors::PortalError;
use super::types::DirectoryConfig;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Every non-empty endpoint must be an absolute http(s) URL with a host.
pub fn validate_endpoints(config: &DirectoryConfig) -> Result<(), PortalError> {
    for (provider, endpoint) in &config.endpoints {
        let Some(raw) = endpoint.as_deref().map(str::trim).filter(|e| !e.is_empty()) else {
            continue;
        };
        check_endpoint(provider, raw)?;
    }
    Ok(())
}

fn check_endpoint(provider: &str, raw: &str) -> Result<(), PortalError> {
    let url = Url::parse(raw).map_err(|e| {
        PortalError::Config(format!("Invalid endpoint for {}: '{}' ({})", provider, raw, e))
    })?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(PortalError::Config(format!(
            "Endpoint for {} uses unsupported scheme '{}'",
            provider,
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(PortalError::Config(format!("Endpoint for {} has no host: '{}'", provider, raw)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(provider: &str, endpoint: Option<&str>) -> DirectoryConfig {
        let mut config = DirectoryConfig::default();
        config.endpoints.insert(provider.to_string(), endpoint.map(str::to_string));
        config
    }

    #[test]
    fn test_https_endpoint_passes() {
        let config = config_with("Open_AI", Some("https://api.openai.com/v1"));
        assert!(validate_endpoints(&config).is_ok());
    }

    #[test]
    fn test_local_http_endpoint_passes() {
        let config = config_with("localhost", Some("http://localhost:11434"));
        assert!(validate_endpoints(&config).is_ok());
    }

    #[test]
    fn test_empty_and_null_endpoints_pass() {
        assert!(validate_endpoints(&config_with("Anthropic", None)).is_ok());
        assert!(validate_endpoints(&config_with("Anthropic", Some(""))).is_ok());
    }

    #[test]
    fn test_relative_endpoint_rejected() {
        let config = config_with("Open_AI", Some("api.openai.com/v1"));
        assert!(matches!(validate_endpoints(&config), Err(PortalError::Config(_))));
    }

    #[test]
    fn test_file_scheme_rejected() {
        let config = config_with("Open_AI", Some("file:///etc/passwd"));
        let err = validate_endpoints(&config).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_javascript_scheme_rejected() {
        let config = config_with("Open_AI", Some("javascript:alert(1)"));
        assert!(validate_endpoints(&config).is_err());
    }
}
