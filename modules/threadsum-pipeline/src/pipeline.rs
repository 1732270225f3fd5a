use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use apify_client::ApifyClient;
use threadsum_common::{Config, Result, ThreadResult};

use crate::extractor::{ApifyThreadSource, ThreadExtractor};
use crate::summarizer::{Summarizer, SummarizerConfig};

/// Everything a front end shows for one request.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadSummary {
    pub thread: ThreadResult,
    pub summary: String,
}

/// Extractor then summarizer, run back to back for a single URL.
pub struct ThreadPipeline {
    extractor: ThreadExtractor,
    summarizer: Summarizer,
}

impl ThreadPipeline {
    pub fn new(extractor: ThreadExtractor, summarizer: Summarizer) -> Self {
        Self {
            extractor,
            summarizer,
        }
    }

    /// Production wiring: Apify tweet-scraper plus OpenAI.
    pub fn from_config(config: &Config) -> Self {
        let apify = ApifyClient::new(config.apify_api_token.clone());
        let source = ApifyThreadSource::new(apify, config.thread_max_items);
        let extractor = ThreadExtractor::new(Arc::new(source));
        let summarizer = Summarizer::openai(SummarizerConfig::from_config(config));
        Self::new(extractor, summarizer)
    }

    pub async fn run(&self, url: &str) -> Result<ThreadSummary> {
        let thread = self.extractor.extract(url).await?;
        let summary = self
            .summarizer
            .summarize(&thread.body, &thread.engagement)
            .await?;

        info!(
            username = %thread.username,
            root_id = thread.root_id,
            posts = thread.post_count,
            "Thread summarized"
        );
        Ok(ThreadSummary { thread, summary })
    }
}
