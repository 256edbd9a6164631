pub mod credentials;
pub mod directory;
pub mod parser;
pub mod schema;
pub mod security;
pub mod types;

pub use credentials::{CredentialSource, EnvCredentials, StaticCredentials};
pub use directory::{default_path, ModelDirectory};
pub use parser::parse_directory;
pub use types::*;
