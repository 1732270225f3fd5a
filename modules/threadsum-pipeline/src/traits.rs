use anyhow::Result;
use async_trait::async_trait;

use crate::url::ThreadUrl;

// --- Scraped items ---

/// One record yielded by the scraping collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapedItem {
    Post(ScrapedPost),
    /// Deleted, withheld or "no results" filler. Carries nothing usable.
    Placeholder,
}

/// A real post as the scraper reports it, before author filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedPost {
    pub text: Option<String>,
    pub username: Option<String>,
    pub likes: Option<u64>,
    pub views: Option<u64>,
    pub retweets: Option<u64>,
    pub quotes: Option<u64>,
}

// --- ThreadSource trait ---

/// The scraping collaborator: items of the conversation rooted at
/// `thread.root_id`, in thread order. Sources may narrow the scrape to
/// `thread.username`; the extractor filters by author either way.
#[async_trait]
pub trait ThreadSource: Send + Sync {
    async fn thread_items(&self, thread: &ThreadUrl) -> Result<Vec<ScrapedItem>>;
}

// --- TextCompleter trait ---

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The LLM collaborator: one prompt in, one completion out. No retries.
#[async_trait]
pub trait TextCompleter: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
