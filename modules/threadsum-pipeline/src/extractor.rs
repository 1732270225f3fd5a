use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use tracing::{debug, info};

use apify_client::{ApifyClient, Tweet};
use threadsum_common::{Result, ThreadPost, ThreadResult, ThreadSumError};

use crate::traits::{ScrapedItem, ScrapedPost, ThreadSource};
use crate::url::ThreadUrl;

/// Separator placed between author posts in `ThreadResult::body`.
pub const POST_SEPARATOR: &str = "\n\n";

// Plain substrings, not patterns: real links and hashtags pass through.
const LINK_LITERAL: &str = r"http\S+";
const HASHTAG_LITERAL: &str = r"#\S+";

/// Flatten newlines and blank out the link/hashtag literals.
pub fn clean_post_text(raw: &str) -> String {
    raw.replace('\n', " ")
        .replace(LINK_LITERAL, " ")
        .replace(HASHTAG_LITERAL, " ")
}

pub struct ThreadExtractor {
    source: Arc<dyn ThreadSource>,
}

impl ThreadExtractor {
    pub fn new(source: Arc<dyn ThreadSource>) -> Self {
        Self { source }
    }

    /// Parse `url`, scrape the conversation and keep the root author's posts.
    /// The URL is validated before the scraper is touched.
    pub async fn extract(&self, url: &str) -> Result<ThreadResult> {
        let thread_url = ThreadUrl::parse(url)?;
        info!(
            username = %thread_url.username,
            root_id = thread_url.root_id,
            "Extracting thread"
        );

        let items = self
            .source
            .thread_items(&thread_url)
            .await
            .map_err(|e| ThreadSumError::Upstream(format!("thread scrape failed: {e:#}")))?;

        collect_thread(&thread_url, items)
    }
}

/// Filter scraped items down to the author's posts and assemble the result.
///
/// Engagement is read from the first kept post. When the scraper does not
/// yield the root first, those counters belong to whichever author post
/// happened to come first.
pub fn collect_thread(thread_url: &ThreadUrl, items: Vec<ScrapedItem>) -> Result<ThreadResult> {
    let scraped = items.len();
    let mut posts: Vec<ThreadPost> = Vec::new();

    for item in items {
        let post = match item {
            ScrapedItem::Post(post) => post,
            ScrapedItem::Placeholder => {
                debug!("Skipping placeholder record");
                continue;
            }
        };

        let Some(text) = post.text.filter(|t| !t.is_empty()) else {
            continue;
        };
        if post.username.as_deref() != Some(thread_url.username.as_str()) {
            continue;
        }

        posts.push(ThreadPost {
            text: clean_post_text(&text),
            likes: post.likes.unwrap_or(0),
            views: post.views.unwrap_or(0),
            retweets: post.retweets.unwrap_or(0),
            quotes: post.quotes.unwrap_or(0),
        });
    }

    let first = posts.first().ok_or_else(|| ThreadSumError::EmptyThread {
        username: thread_url.username.clone(),
    })?;
    let engagement = first.engagement();

    let body = posts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(POST_SEPARATOR);

    info!(
        username = %thread_url.username,
        scraped,
        kept = posts.len(),
        body_chars = body.chars().count(),
        "Thread extracted"
    );

    Ok(ThreadResult {
        username: thread_url.username.clone(),
        root_id: thread_url.root_id,
        body,
        engagement,
        post_count: posts.len(),
    })
}

// --- ThreadSource impl for ApifyClient ---

impl From<Tweet> for ScrapedItem {
    fn from(tweet: Tweet) -> Self {
        if tweet.is_placeholder() {
            return ScrapedItem::Placeholder;
        }
        let count = |v: Option<i64>| v.map(|n| n.max(0) as u64);
        ScrapedItem::Post(ScrapedPost {
            text: tweet.content().map(str::to_string),
            username: tweet.author_username().map(str::to_string),
            likes: count(tweet.like_count),
            views: count(tweet.view_count),
            retweets: count(tweet.retweet_count),
            quotes: count(tweet.quote_count),
        })
    }
}

/// Apify tweet-scraper, capped at `max_items` dataset records per thread.
pub struct ApifyThreadSource {
    client: ApifyClient,
    max_items: u32,
}

impl ApifyThreadSource {
    pub fn new(client: ApifyClient, max_items: u32) -> Self {
        Self { client, max_items }
    }
}

#[async_trait]
impl ThreadSource for ApifyThreadSource {
    async fn thread_items(&self, thread: &ThreadUrl) -> AnyResult<Vec<ScrapedItem>> {
        let tweets = self
            .client
            .scrape_conversation(thread.root_id, &thread.username, self.max_items)
            .await?;
        Ok(tweets.into_iter().map(ScrapedItem::from).collect())
    }
}
