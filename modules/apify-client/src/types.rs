use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId", default)]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Lifecycle of an actor run as reported by `RunData::status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    Failed,
    InProgress,
}

impl RunData {
    /// Wall-clock seconds between start and finish, once both are known.
    pub fn duration_secs(&self) -> Option<i64> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some((end - start).num_seconds()),
            _ => None,
        }
    }

    pub fn run_status(&self) -> RunStatus {
        match self.status.as_str() {
            "SUCCEEDED" => RunStatus::Succeeded,
            "FAILED" | "ABORTED" | "TIMED-OUT" => RunStatus::Failed,
            _ => RunStatus::InProgress,
        }
    }
}

/// Input for the apidojo/tweet-scraper actor: one conversation, one author.
///
/// Restricting the search to the author keeps `maxItems` from being spent on
/// replies. "Latest" returns newest first, so results need reordering.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationScraperInput {
    #[serde(rename = "searchTerms")]
    pub search_terms: Vec<String>,
    #[serde(rename = "maxItems")]
    pub max_items: u32,
    pub sort: String,
}

impl ConversationScraperInput {
    pub fn new(conversation_id: u64, author: &str, max_items: u32) -> Self {
        Self {
            search_terms: vec![format!("conversation_id:{conversation_id} from:{author}")],
            max_items,
            sort: "Latest".to_string(),
        }
    }
}

/// Author info nested inside a Tweet.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetAuthor {
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
}

/// A single dataset record from the tweet-scraper actor.
///
/// The actor mixes real tweets with filler records (`{"noResults": true}`,
/// tombstones for deleted or withheld tweets), so every field is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub id: Option<String>,
    pub text: Option<String>,
    #[serde(alias = "fullText")]
    pub full_text: Option<String>,
    pub author: Option<TweetAuthor>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<i64>,
    #[serde(rename = "viewCount")]
    pub view_count: Option<i64>,
    #[serde(rename = "retweetCount")]
    pub retweet_count: Option<i64>,
    #[serde(rename = "quoteCount")]
    pub quote_count: Option<i64>,
    #[serde(rename = "noResults", default)]
    pub no_results: bool,
}

impl Tweet {
    /// Returns whichever text field is populated, preferring `full_text`.
    pub fn content(&self) -> Option<&str> {
        self.full_text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.text.as_deref())
    }

    /// Tweet ids are snowflakes, so they sort by posting time.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.as_deref().and_then(|id| id.parse().ok())
    }

    pub fn author_username(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.user_name.as_deref())
    }

    /// True for filler records that carry no tweet at all.
    pub fn is_placeholder(&self) -> bool {
        if self.no_results || self.id.is_none() {
            return true;
        }
        matches!(self.item_type.as_deref(), Some(t) if t != "tweet")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Tweet {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn tweet_parses_counters_and_author() {
        let tweet = parse(
            r#"{
                "type": "tweet",
                "id": "1082159636994121729",
                "text": "hello",
                "author": {"userName": "jack", "name": "jack"},
                "likeCount": 5,
                "viewCount": 10,
                "retweetCount": 2,
                "quoteCount": 1
            }"#,
        );
        assert!(!tweet.is_placeholder());
        assert_eq!(tweet.author_username(), Some("jack"));
        assert_eq!(tweet.view_count, Some(10));
        assert_eq!(tweet.quote_count, Some(1));
    }

    #[test]
    fn content_prefers_full_text() {
        let tweet = parse(r#"{"id": "1", "text": "short", "fullText": "the long one"}"#);
        assert_eq!(tweet.content(), Some("the long one"));
    }

    #[test]
    fn content_falls_back_to_text() {
        let tweet = parse(r#"{"id": "1", "text": "short"}"#);
        assert_eq!(tweet.content(), Some("short"));

        let tweet = parse(r#"{"id": "1", "text": "short", "full_text": ""}"#);
        assert_eq!(tweet.content(), Some("short"));
    }

    #[test]
    fn no_results_record_is_placeholder() {
        assert!(parse(r#"{"noResults": true}"#).is_placeholder());
    }

    #[test]
    fn non_tweet_type_is_placeholder() {
        assert!(parse(r#"{"type": "tombstone", "id": "9"}"#).is_placeholder());
        assert!(parse(r#"{"type": "mock_tweet", "id": "9"}"#).is_placeholder());
    }

    #[test]
    fn run_status_classification() {
        let run = |status: &str| RunData {
            id: "r".into(),
            status: status.into(),
            default_dataset_id: "d".into(),
            started_at: None,
            finished_at: None,
        };
        assert_eq!(run("SUCCEEDED").run_status(), RunStatus::Succeeded);
        assert_eq!(run("TIMED-OUT").run_status(), RunStatus::Failed);
        assert_eq!(run("ABORTED").run_status(), RunStatus::Failed);
        assert_eq!(run("RUNNING").run_status(), RunStatus::InProgress);
    }

    #[test]
    fn conversation_input_searches_author_posts_only() {
        let input = ConversationScraperInput::new(1082159636994121729, "jack", 100);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "searchTerms": ["conversation_id:1082159636994121729 from:jack"],
                "maxItems": 100,
                "sort": "Latest"
            })
        );
    }

    #[test]
    fn run_duration_needs_both_timestamps() {
        let run: RunData = serde_json::from_str(
            r#"{"id": "r", "status": "SUCCEEDED", "defaultDatasetId": "d",
                "startedAt": "2024-01-01T00:00:00Z", "finishedAt": "2024-01-01T00:01:30Z"}"#,
        )
        .unwrap();
        assert_eq!(run.duration_secs(), Some(90));

        let run: RunData = serde_json::from_str(r#"{"id": "r", "status": "RUNNING"}"#).unwrap();
        assert_eq!(run.duration_secs(), None);
        assert_eq!(run.default_dataset_id, "");
    }

    #[test]
    fn numeric_id_parses_snowflake() {
        assert_eq!(parse(r#"{"id": "1082159636994121729"}"#).numeric_id(), Some(1082159636994121729));
        assert_eq!(parse(r#"{"id": "abc"}"#).numeric_id(), None);
        assert_eq!(parse(r#"{"noResults": true}"#).numeric_id(), None);
    }
}
