use std::collections::HashMap;

use tracing::debug;

/// Source of provider API keys, consulted only while a client is built.
pub trait CredentialSource: Send + Sync {
    /// Look up the key stored under `env_var`.
    fn api_key(&self, env_var: &str) -> Option<String>;
}

/// Reads keys from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn api_key(&self, env_var: &str) -> Option<String> {
        match std::env::var(env_var) {
            Ok(value) if !value.trim().is_empty() => {
                debug!(var = %env_var, "Resolved credential from environment");
                Some(value)
            }
            _ => {
                debug!(var = %env_var, "Environment variable not set");
                None
            }
        }
    }
}

/// Fixed set of keys, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    keys: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, env_var: &str, key: &str) -> Self {
        self.keys.insert(env_var.to_string(), key.to_string());
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self, env_var: &str) -> Option<String> {
        self.keys.get(env_var).filter(|k| !k.trim().is_empty()).cloned()
    }
}

/// Redact sensitive values in a string. Replaces each secret with [REDACTED].
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    let mut result = text.to_string();
    for secret in secrets {
        if !secret.is_empty() && secret.len() >= 4 {
            result = result.replace(secret, "[REDACTED]");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_credentials_reads_variable() {
        std::env::set_var("TEST_LLM_PORTAL_CRED", "secret123");
        assert_eq!(EnvCredentials.api_key("TEST_LLM_PORTAL_CRED").as_deref(), Some("secret123"));
        std::env::remove_var("TEST_LLM_PORTAL_CRED");
    }

    #[test]
    fn test_env_credentials_missing_variable() {
        assert!(EnvCredentials.api_key("NONEXISTENT_LLM_PORTAL_VAR").is_none());
    }

    #[test]
    fn test_env_credentials_blank_is_missing() {
        std::env::set_var("TEST_LLM_PORTAL_BLANK", "  ");
        assert!(EnvCredentials.api_key("TEST_LLM_PORTAL_BLANK").is_none());
        std::env::remove_var("TEST_LLM_PORTAL_BLANK");
    }

    #[test]
    fn test_static_credentials() {
        let creds = StaticCredentials::new().with("OPEN_AI_API_KEY", "sk-test");
        assert_eq!(creds.api_key("OPEN_AI_API_KEY").as_deref(), Some("sk-test"));
        assert!(creds.api_key("ANTHROPIC_API_KEY").is_none());
    }

    #[test]
    fn test_redact_credentials() {
        let text = "GET https://host/v1?key=S3cret123 failed";
        let redacted = redact_credentials(text, &["S3cret123"]);
        assert!(redacted.contains("[REDACTED]"));
        assert!(!redacted.contains("S3cret123"));
    }

    #[test]
    fn test_redact_credentials_short_secret_ignored() {
        let text = "key=ab";
        let redacted = redact_credentials(text, &["ab"]);
        assert_eq!(redacted, "key=ab"); // too short to redact
    }
}
