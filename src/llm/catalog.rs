use super::aggregator::{Aggregator, AggregatorProvider};
use super::anthropic::{self, AnthropicProvider};
use super::gemini::{self, GeminiProvider};
use super::local::{self, LocalProvider};
use super::openai::{self, OpenAIProvider};
use super::provider::LLMProvider;

/// Arguments handed to a provider constructor.
pub struct ClientInit<'a> {
    pub model: &'a str,
    pub base_url: &'a str,
    /// Empty for providers that take no credential.
    pub api_key: &'a str,
}

/// One registered provider family, keyed by the name used in the model
/// directory.
pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub requires_credential: bool,
    pub default_base_url: &'static str,
    pub constructor: fn(ClientInit<'_>) -> Box<dyn LLMProvider>,
}

impl ProviderInfo {
    /// `<ID>_API_KEY`, e.g. `OPEN_AI_API_KEY`.
    pub fn env_var(&self) -> String {
        format!("{}_API_KEY", self.id.to_uppercase())
    }
}

pub static PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "Open_AI",
        name: "OpenAI",
        requires_credential: true,
        default_base_url: openai::DEFAULT_BASE_URL,
        constructor: build_openai,
    },
    ProviderInfo {
        id: "Anthropic",
        name: "Anthropic",
        requires_credential: true,
        default_base_url: anthropic::DEFAULT_BASE_URL,
        constructor: build_anthropic,
    },
    ProviderInfo {
        id: "Google",
        name: "Google Gemini",
        requires_credential: true,
        default_base_url: gemini::DEFAULT_BASE_URL,
        constructor: build_gemini,
    },
    ProviderInfo {
        id: "Together_AI",
        name: "Together AI",
        requires_credential: true,
        default_base_url: Aggregator::TogetherAI.default_base_url(),
        constructor: build_together,
    },
    ProviderInfo {
        id: "OpenRouter",
        name: "OpenRouter",
        requires_credential: true,
        default_base_url: Aggregator::OpenRouter.default_base_url(),
        constructor: build_openrouter,
    },
    ProviderInfo {
        id: "localhost",
        name: "Local / Ollama",
        requires_credential: false,
        default_base_url: local::DEFAULT_BASE_URL,
        constructor: build_local,
    },
];

pub fn get_provider(id: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.id == id)
}

fn build_openai(init: ClientInit<'_>) -> Box<dyn LLMProvider> {
    Box::new(OpenAIProvider::with_base_url(init.api_key, init.model, init.base_url))
}

fn build_anthropic(init: ClientInit<'_>) -> Box<dyn LLMProvider> {
    Box::new(AnthropicProvider::new(init.api_key, init.model, init.base_url))
}

fn build_gemini(init: ClientInit<'_>) -> Box<dyn LLMProvider> {
    Box::new(GeminiProvider::new(init.api_key, init.model, init.base_url))
}

fn build_together(init: ClientInit<'_>) -> Box<dyn LLMProvider> {
    Box::new(AggregatorProvider::new(Aggregator::TogetherAI, init.api_key, init.model, init.base_url))
}

fn build_openrouter(init: ClientInit<'_>) -> Box<dyn LLMProvider> {
    Box::new(AggregatorProvider::new(Aggregator::OpenRouter, init.api_key, init.model, init.base_url))
}

fn build_local(init: ClientInit<'_>) -> Box<dyn LLMProvider> {
    Box::new(LocalProvider::new(init.base_url, init.model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_names() {
        assert_eq!(get_provider("Open_AI").unwrap().env_var(), "OPEN_AI_API_KEY");
        assert_eq!(get_provider("Together_AI").unwrap().env_var(), "TOGETHER_AI_API_KEY");
        assert_eq!(get_provider("Anthropic").unwrap().env_var(), "ANTHROPIC_API_KEY");
        assert_eq!(get_provider("Google").unwrap().env_var(), "GOOGLE_API_KEY");
    }

    #[test]
    fn test_only_local_skips_credential() {
        for provider in PROVIDERS {
            assert_eq!(!provider.requires_credential, provider.id == "localhost", "{}", provider.id);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(get_provider("open_ai").is_none());
        assert!(get_provider("Mistral").is_none());
    }

    #[test]
    fn test_constructors_produce_matching_provider_names() {
        for provider in PROVIDERS {
            let client = (provider.constructor)(ClientInit {
                model: "m",
                base_url: provider.default_base_url,
                api_key: "test-key",
            });
            assert_eq!(client.provider_name(), provider.id);
            assert_eq!(client.model_name(), "m");
        }
    }
}
