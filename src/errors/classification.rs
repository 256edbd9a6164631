use super::types::{ClientError, PortalError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fix the model directory or the environment.
    Configuration,
    /// Check credentials or vendor availability.
    Client,
}

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub kind: ErrorKind,
    pub error_type: &'static str,
}

impl PortalError {
    /// Classify this error for log fields and process exit codes.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            PortalError::Config(_) => ErrorClassification {
                kind: ErrorKind::Configuration,
                error_type: "ConfigError",
            },
            PortalError::Client(inner) => ErrorClassification {
                kind: ErrorKind::Client,
                error_type: inner.error_type(),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.classify().kind
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Configuration => 2,
            ErrorKind::Client => 3,
        }
    }
}

impl ClientError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::MissingCredential { .. } => "MissingCredentialError",
            ClientError::Authentication { .. } => "AuthenticationError",
            ClientError::RateLimit { .. } => "RateLimitError",
            ClientError::Status { .. } => "StatusError",
            ClientError::Transport { .. } => "NetworkError",
            ClientError::InvalidResponse { .. } => "InvalidResponseError",
            ClientError::Vendor { .. } => "LLMApiError",
        }
    }
}
