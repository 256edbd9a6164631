pub mod provider;
pub mod anthropic;
pub mod openai;
pub mod gemini;
pub mod aggregator;
pub mod local;
pub mod router;
pub mod types;
pub mod catalog;
mod transport;

pub use provider::LLMProvider;
pub use router::create_provider;
pub use types::{GenerationOptions, GenerationRequest, LLMResponse};
