use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use tracing::{debug, info, warn};

use ai_client::{truncate_to_char_boundary, Agent, OpenAi, PromptBuilder};
use threadsum_common::{render_thread, Config, Engagement, Result, ThreadSumError};

use crate::splitter::{SplitterConfig, TextSplitter};
use crate::traits::{CompletionRequest, TextCompleter};

/// `{text}` is replaced by the kept chunks.
pub const PROMPT_TEMPLATE: &str = "Write a concise summary of the following twitter thread:\n\n{text}\n\nCONCISE THREAD SUMMARY WITH CASUAL TONE AND DISPLAY THE VIEWED COUNTS, LIKES COUNTS, RETWEETS COUNTS, AND QUOTES COUNTS AT THE END OF THE SUMMARY ALL IN BAHASA INDONESIA:";

/// Kept chunks are stuffed into the prompt with this between them.
const CHUNK_JOINER: &str = "\n\n";

pub fn build_prompt(text: &str) -> String {
    PROMPT_TEMPLATE.replace("{text}", text)
}

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Chunks beyond this many are dropped, so long threads are only
    /// partially summarized.
    pub chunk_limit: usize,
    pub splitter: SplitterConfig,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Config::DEFAULT_MODEL.to_string(),
            temperature: Config::DEFAULT_TEMPERATURE,
            max_tokens: Config::DEFAULT_MAX_TOKENS,
            chunk_limit: Config::DEFAULT_CHUNK_LIMIT,
            splitter: SplitterConfig::default(),
        }
    }
}

impl SummarizerConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: Some(config.openai_api_key.clone()),
            model: config.openai_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            chunk_limit: config.chunk_limit,
            splitter: SplitterConfig::from_config(config),
        }
    }

    fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

pub struct Summarizer {
    config: SummarizerConfig,
    splitter: Box<dyn TextSplitter>,
    completer: Arc<dyn TextCompleter>,
}

impl Summarizer {
    pub fn new(config: SummarizerConfig, completer: Arc<dyn TextCompleter>) -> Self {
        let splitter = config.splitter.build();
        Self {
            config,
            splitter,
            completer,
        }
    }

    /// Summarizer backed by OpenAI chat completions.
    pub fn openai(config: SummarizerConfig) -> Self {
        let agent = OpenAi::new(config.api_key.clone().unwrap_or_default(), &config.model);
        Self::new(config, Arc::new(agent))
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Render, split, keep the first `chunk_limit` chunks and fill the template.
    pub fn prepare_prompt(&self, body: &str, engagement: &Engagement) -> String {
        let rendered = render_thread(body, engagement);
        let chunks = self.splitter.split_text(&rendered);
        let total = chunks.len();

        let kept: Vec<String> = chunks.into_iter().take(self.config.chunk_limit).collect();
        if kept.len() < total {
            info!(
                total_chunks = total,
                kept = kept.len(),
                dropped = total - kept.len(),
                "Thread longer than chunk limit, summarizing the leading part only"
            );
        }

        build_prompt(&kept.join(CHUNK_JOINER))
    }

    /// One completion call; the reply is returned verbatim.
    pub async fn summarize(&self, body: &str, engagement: &Engagement) -> Result<String> {
        if !self.config.has_credential() {
            return Err(ThreadSumError::MissingCredential(
                "no OpenAI API key configured".to_string(),
            ));
        }

        let prompt = self.prepare_prompt(body, engagement);
        debug!(
            preview = truncate_to_char_boundary(&prompt, 200),
            "Prompt prepared"
        );

        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        info!(
            model = %self.config.model,
            prompt_chars = request.prompt.chars().count(),
            "Requesting thread summary"
        );

        let summary = self.completer.complete(&request).await.map_err(|e| {
            warn!(error = %e, "Summary completion failed");
            ThreadSumError::Upstream(format!("summary completion failed: {e:#}"))
        })?;

        info!(summary_chars = summary.chars().count(), "Summary received");
        Ok(summary)
    }
}

// --- TextCompleter impl for OpenAi ---

#[async_trait]
impl TextCompleter for OpenAi {
    async fn complete(&self, request: &CompletionRequest) -> AnyResult<String> {
        let reply = self
            .clone()
            .with_model(&request.model)
            .prompt(&request.prompt)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .send()
            .await?;
        Ok(reply)
    }
}
