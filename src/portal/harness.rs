use tracing::debug;

use crate::errors::PortalError;
use crate::llm::GenerationOptions;
use super::dispatcher::Portal;

/// Grades answers against a free-text rubric through a [`Portal`].
#[derive(Debug)]
pub struct TestPortal {
    portal: Portal,
    rubric: String,
    options: GenerationOptions,
}

impl TestPortal {
    pub async fn new(
        model: &str,
        system_message: &str,
        rubric: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<Self, PortalError> {
        let portal = Portal::new(model).await?;
        Ok(Self::from_portal(portal, system_message, rubric, GenerationOptions { temperature, max_tokens }))
    }

    pub fn from_portal(mut portal: Portal, system_message: &str, rubric: &str, options: GenerationOptions) -> Self {
        portal.set_context(system_message);
        Self {
            portal,
            rubric: rubric.to_string(),
            options,
        }
    }

    /// `"{rubric}\n{question}\n"`, followed by the answer key when present.
    pub fn build_prompt(&self, question: &str, answer_key: Option<&str>) -> String {
        let mut prompt = format!("{}\n{}\n", self.rubric, question);
        if let Some(key) = answer_key.filter(|k| !k.is_empty()) {
            prompt.push_str(key);
        }
        prompt
    }

    /// Returns the model's grading text as-is.
    pub async fn evaluate(&self, question: &str, answer_key: Option<&str>) -> Result<String, PortalError> {
        let prompt = self.build_prompt(question, answer_key);
        debug!(model = %self.portal.model(), has_answer_key = answer_key.is_some(), "Evaluating answer");
        self.portal.generate_with(&prompt, self.options).await
    }

    pub fn rubric(&self) -> &str {
        &self.rubric
    }

    pub fn options(&self) -> GenerationOptions {
        self.options
    }

    pub fn portal(&self) -> &Portal {
        &self.portal
    }

    pub fn into_portal(self) -> Portal {
        self.portal
    }
}
