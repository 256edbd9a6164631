use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Normalized vendor reply. Callers depend on `content`; token counts are
/// reported when the vendor provides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_context: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerationRequest {
    pub fn new(prompt: &str) -> Self {
        Self::with_options(prompt, None, GenerationOptions::default())
    }

    pub fn with_options(prompt: &str, system_context: Option<&str>, options: GenerationOptions) -> Self {
        Self {
            prompt: prompt.to_string(),
            system_context: system_context.map(str::to_string),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        }
    }

    /// System context, if set and non-blank.
    pub fn system(&self) -> Option<&str> {
        self.system_context.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Per-call sampling knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: &str) -> Self {
        Self { role: "system".to_string(), content: content.to_string() }
    }
    pub fn user(content: &str) -> Self {
        Self { role: "user".to_string(), content: content.to_string() }
    }
}

/// `[system?, user]` chat messages, the shape shared by the OpenAI-style
/// and Ollama APIs.
pub fn chat_messages(request: &GenerationRequest) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2);
    if let Some(sys) = request.system() {
        messages.push(Message::system(sys));
    }
    messages.push(Message::user(&request.prompt));
    messages
}
