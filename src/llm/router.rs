use crate::config::CredentialSource;
use crate::errors::{ClientError, PortalError};
use super::catalog::{self, ClientInit};
use super::provider::LLMProvider;
use tracing::debug;

/// Build the client registered for `provider_name`.
///
/// `endpoint` of `None` selects the provider's default base URL. The
/// credential is read once, here.
pub fn create_provider(
    provider_name: &str,
    model: &str,
    endpoint: Option<&str>,
    credentials: &dyn CredentialSource,
) -> Result<Box<dyn LLMProvider>, PortalError> {
    let info = catalog::get_provider(provider_name)
        .ok_or_else(|| PortalError::Config(format!("Unknown model provider {}", provider_name)))?;

    let api_key = if info.requires_credential {
        let env_var = info.env_var();
        credentials.api_key(&env_var).ok_or(ClientError::MissingCredential {
            provider: provider_name.to_string(),
            env_var,
        })?
    } else {
        String::new()
    };

    let base_url = endpoint
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or(info.default_base_url);

    debug!(provider = info.id, model, base_url, "Creating LLM client");

    Ok((info.constructor)(ClientInit {
        model,
        base_url,
        api_key: &api_key,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticCredentials;

    #[test]
    fn test_unknown_provider_is_config_error() {
        let err = create_provider("Mistral", "mistral-large", None, &StaticCredentials::new())
            .err()
            .unwrap();
        assert!(matches!(err, PortalError::Config(ref m) if m.contains("Mistral")));
    }

    #[test]
    fn test_missing_credential_is_client_error() {
        let err = create_provider("Open_AI", "gpt-4", None, &StaticCredentials::new())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            PortalError::Client(ClientError::MissingCredential { ref env_var, .. }) if env_var == "OPEN_AI_API_KEY"
        ));
    }

    #[test]
    fn test_local_needs_no_credential() {
        let client = create_provider("localhost", "qwen2.5:latest", Some("http://localhost:11434"), &StaticCredentials::new())
            .unwrap();
        assert_eq!(client.provider_name(), "localhost");
        assert_eq!(client.model_name(), "qwen2.5:latest");
    }

    #[test]
    fn test_credential_from_source() {
        let creds = StaticCredentials::new().with("ANTHROPIC_API_KEY", "sk-ant-test");
        let client = create_provider("Anthropic", "claude-3-opus-20240229", None, &creds).unwrap();
        assert_eq!(client.provider_name(), "Anthropic");
    }
}
