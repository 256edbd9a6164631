use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::credentials::redact_credentials;
use crate::errors::ClientError;

const MAX_ERROR_BODY_CHARS: usize = 300;

/// Send `body` as JSON and return the decoded reply.
///
/// Non-success statuses, undecodable bodies and vendor `error` objects all
/// become a [`ClientError`]; `secret` is scrubbed from any surfaced message.
pub(crate) async fn post_json(
    vendor: &'static str,
    request: RequestBuilder,
    body: &Value,
    secret: &str,
) -> Result<Value, ClientError> {
    let resp = request
        .json(body)
        .send()
        .await
        .map_err(|e| ClientError::Transport {
            vendor,
            message: redact_credentials(&e.to_string(), &[secret]),
        })?;

    let status = resp.status();
    let text = resp.text().await.map_err(|e| ClientError::Transport {
        vendor,
        message: redact_credentials(&format!("failed to read response body: {}", e), &[secret]),
    })?;

    if !status.is_success() {
        let message = redact_credentials(&error_message(&text), &[secret]);
        warn!(vendor, status = status.as_u16(), error = %message, "Vendor call failed");
        return Err(match status.as_u16() {
            401 | 403 => ClientError::Authentication { vendor, message },
            429 => ClientError::RateLimit { vendor, message },
            code => ClientError::Status { vendor, status: code, message },
        });
    }

    let data: Value = serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse {
        vendor,
        message: e.to_string(),
    })?;

    if let Some(error) = data.get("error").filter(|e| !e.is_null()) {
        let message = redact_credentials(&describe_error(error), &[secret]);
        warn!(vendor, error = %message, "Vendor reported an error");
        return Err(ClientError::Vendor { vendor, message });
    }

    debug!(vendor, status = status.as_u16(), "Vendor call succeeded");
    Ok(data)
}

/// Best-effort human message from an error body.
fn error_message(body: &str) -> String {
    if let Ok(data) = serde_json::from_str::<Value>(body) {
        if let Some(error) = data.get("error") {
            return describe_error(error);
        }
        if let Some(msg) = data.get("message").and_then(Value::as_str) {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

// OpenAI, Anthropic and Google nest `{"message": ..}`; Ollama uses a bare string.
fn describe_error(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        other => other["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_nested() {
        let body = r#"{"error": {"message": "Invalid API key", "type": "invalid_request_error"}}"#;
        assert_eq!(error_message(body), "Invalid API key");
    }

    #[test]
    fn test_error_message_bare_string() {
        assert_eq!(error_message(r#"{"error": "model 'x' not found"}"#), "model 'x' not found");
    }

    #[test]
    fn test_error_message_top_level_message() {
        assert_eq!(error_message(r#"{"message": "Not Found"}"#), "Not Found");
    }

    #[test]
    fn test_error_message_plain_text_truncated() {
        let body = "x".repeat(1000);
        assert_eq!(error_message(&body).len(), MAX_ERROR_BODY_CHARS);
    }

    #[test]
    fn test_error_message_empty_body() {
        assert_eq!(error_message("  "), "empty response body");
    }
}
