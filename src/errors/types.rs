use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),
}

/// Failure to complete a vendor call. Every variant names the vendor so the
/// message alone tells the caller where to look.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Cannot find API key for {provider}: set {env_var}")]
    MissingCredential { provider: String, env_var: String },

    #[error("{vendor} rejected the API key: {message}")]
    Authentication { vendor: &'static str, message: String },

    #[error("{vendor} rate limit exceeded: {message}")]
    RateLimit { vendor: &'static str, message: String },

    #[error("{vendor} returned HTTP {status}: {message}")]
    Status { vendor: &'static str, status: u16, message: String },

    #[error("{vendor} request failed: {message}")]
    Transport { vendor: &'static str, message: String },

    #[error("{vendor} response could not be parsed: {message}")]
    InvalidResponse { vendor: &'static str, message: String },

    #[error("{vendor} API error: {message}")]
    Vendor { vendor: &'static str, message: String },
}

impl From<std::io::Error> for PortalError {
    fn from(e: std::io::Error) -> Self {
        PortalError::Config(format!("IO error: {}", e))
    }
}

impl From<serde_yaml::Error> for PortalError {
    fn from(e: serde_yaml::Error) -> Self {
        PortalError::Config(format!("YAML error: {}", e))
    }
}
