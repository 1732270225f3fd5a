use async_trait::async_trait;
use tracing::debug;

use crate::error::{AiError, Result};
use crate::traits::PromptBuilder;

use super::types::*;
use super::OpenAi;

pub struct OpenAiPromptBuilder {
    agent: OpenAi,
    input: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OpenAiPromptBuilder {
    pub(crate) fn new(agent: OpenAi, input: String) -> Self {
        Self {
            agent,
            input,
            temperature: None,
            max_tokens: None,
        }
    }

    pub(crate) fn build_request(&self) -> ChatRequest {
        let mut request =
            ChatRequest::new(&self.agent.model).messages([WireMessage::user(&self.input)]);

        // Reasoning models reject sampling parameters.
        if let Some(temp) = self.temperature {
            if !uses_max_completion_tokens(&self.agent.model) {
                request = request.temperature(temp);
            }
        }

        if let Some(limit) = self.max_tokens {
            request = request.output_limit(limit);
        }

        request
    }
}

#[async_trait]
impl PromptBuilder for OpenAiPromptBuilder {
    fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    async fn send(self) -> Result<String> {
        let request = self.build_request();
        let response = self.agent.client().chat(&request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "OpenAI usage"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AiError::EmptyResponse("no choices in response".to_string()))?;

        debug!(finish_reason = ?choice.finish_reason, "OpenAI completion received");

        choice
            .message
            .content
            .ok_or_else(|| AiError::EmptyResponse("choice has no content".to_string()))
    }
}
