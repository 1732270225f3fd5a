// Test doubles for the two collaborator seams:
// - MockThreadSource (ThreadSource): fixed item list, counts calls
// - RecordingCompleter (TextCompleter): records every request, canned reply
//
// Plus small builders for scraped posts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::traits::{CompletionRequest, ScrapedItem, ScrapedPost, TextCompleter, ThreadSource};
use crate::url::ThreadUrl;

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// A scraped post by `username` with `(views, likes, retweets, quotes)`.
pub fn scraped_post(username: &str, text: &str, counters: (u64, u64, u64, u64)) -> ScrapedItem {
    let (views, likes, retweets, quotes) = counters;
    ScrapedItem::Post(ScrapedPost {
        text: Some(text.to_string()),
        username: Some(username.to_string()),
        likes: Some(likes),
        views: Some(views),
        retweets: Some(retweets),
        quotes: Some(quotes),
    })
}

// ---------------------------------------------------------------------------
// MockThreadSource
// ---------------------------------------------------------------------------

pub struct MockThreadSource {
    items: Result<Vec<ScrapedItem>, String>,
    calls: Mutex<Vec<ThreadUrl>>,
}

impl MockThreadSource {
    pub fn with_items(items: Vec<ScrapedItem>) -> Self {
        Self {
            items: Ok(items),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            items: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Root ids requested so far.
    pub fn requested_roots(&self) -> Vec<u64> {
        self.calls.lock().unwrap().iter().map(|t| t.root_id).collect()
    }

    /// Authors the scrape was narrowed to, per call.
    pub fn requested_authors(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.username.clone())
            .collect()
    }
}

#[async_trait]
impl ThreadSource for MockThreadSource {
    async fn thread_items(&self, thread: &ThreadUrl) -> Result<Vec<ScrapedItem>> {
        self.calls.lock().unwrap().push(thread.clone());
        match &self.items {
            Ok(items) => Ok(items.clone()),
            Err(message) => Err(anyhow!("MockThreadSource: {message}")),
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingCompleter
// ---------------------------------------------------------------------------

pub struct RecordingCompleter {
    reply: Result<String, String>,
    requests: Mutex<Vec<CompletionRequest>>,
    calls: AtomicUsize,
}

impl RecordingCompleter {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The prompt of the most recent request.
    pub fn last_prompt(&self) -> Option<String> {
        self.requests.lock().unwrap().last().map(|r| r.prompt.clone())
    }
}

#[async_trait]
impl TextCompleter for RecordingCompleter {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(anyhow!("RecordingCompleter: {message}")),
        }
    }
}
