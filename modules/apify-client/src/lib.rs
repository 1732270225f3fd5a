pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{ConversationScraperInput, RunData, RunStatus, Tweet, TweetAuthor};

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor ID for apidojo/tweet-scraper.
const TWEET_SCRAPER: &str = "61RPP7dywgiy0JPD0";

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Start an actor run. Returns immediately with run metadata.
    pub async fn start_run<I: Serialize + ?Sized>(&self, actor_id: &str, input: &I) -> Result<RunData> {
        let url = format!("{}/acts/{}/runs", self.base_url, actor_id);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Poll until a run completes. Uses `waitForFinish=60` for efficient long-polling.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        loop {
            let url = format!("{}/actor-runs/{}?waitForFinish=60", self.base_url, run_id);
            let resp = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?;

            let resp = check_status(resp).await?;
            let api_resp: ApiResponse<RunData> = resp.json().await?;
            let run = api_resp.data;
            match run.run_status() {
                RunStatus::Succeeded => return Ok(run),
                RunStatus::Failed => {
                    return Err(ApifyError::RunFailed {
                        run_id: run.id,
                        status: run.status,
                    });
                }
                RunStatus::InProgress => {
                    tracing::debug!(run_id, status = %run.status, "Run still in progress");
                }
            }
        }
    }

    /// Fetch dataset items from a completed run.
    pub async fn get_dataset_items<T: DeserializeOwned>(&self, dataset_id: &str) -> Result<Vec<T>> {
        let url = format!("{}/datasets/{}/items?format=json", self.base_url, dataset_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let items: Vec<T> = resp.json().await?;
        Ok(items)
    }

    /// Run an actor end-to-end: start, poll, fetch the default dataset.
    pub async fn run_actor<I, T>(&self, actor_id: &str, input: &I) -> Result<Vec<T>>
    where
        I: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let run = self.start_run(actor_id, input).await?;
        tracing::info!(run_id = %run.id, "Apify run started, polling for completion");

        let completed = self.wait_for_run(&run.id).await?;
        tracing::info!(
            run_id = %completed.id,
            dataset_id = %completed.default_dataset_id,
            duration_secs = completed.duration_secs(),
            "Run completed, fetching results"
        );

        if completed.default_dataset_id.is_empty() {
            return Err(ApifyError::MissingDataset {
                run_id: completed.id,
            });
        }
        self.get_dataset_items(&completed.default_dataset_id).await
    }

    /// Scrape `author`'s tweets in the conversation rooted at
    /// `conversation_id`, oldest first so the root leads.
    pub async fn scrape_conversation(
        &self,
        conversation_id: u64,
        author: &str,
        limit: u32,
    ) -> Result<Vec<Tweet>> {
        tracing::info!(conversation_id, author, limit, "Starting X/Twitter conversation scrape");

        let input = ConversationScraperInput::new(conversation_id, author, limit);
        let tweets: Vec<Tweet> = self.run_actor(TWEET_SCRAPER, &input).await?;
        tracing::info!(count = tweets.len(), "Fetched tweets");

        Ok(oldest_first(tweets))
    }
}

/// Stable sort by tweet id; records without a usable id keep their
/// relative order at the end.
fn oldest_first(mut tweets: Vec<Tweet>) -> Vec<Tweet> {
    tweets.sort_by_key(|t| t.numeric_id().unwrap_or(u64::MAX));
    tweets
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApifyError::Api {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(resp)
}
