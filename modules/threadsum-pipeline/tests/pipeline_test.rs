//! End-to-end pipeline behaviour against the in-memory collaborators.
//!
//! No network: `MockThreadSource` stands in for the scraper and
//! `RecordingCompleter` captures the exact prompt that would go to the LLM.

use std::sync::Arc;

use threadsum_common::{SplitterKind, ThreadSumError};
use threadsum_pipeline::testing::{scraped_post, MockThreadSource, RecordingCompleter};
use threadsum_pipeline::{
    ScrapedItem, SplitterConfig, Summarizer, SummarizerConfig, ThreadExtractor, ThreadPipeline,
};

const JACK_URL: &str = "https://twitter.com/jack/status/1082159636994121729";

fn summarizer_config() -> SummarizerConfig {
    SummarizerConfig {
        api_key: Some("sk-test".into()),
        ..Default::default()
    }
}

fn pipeline(
    source: Arc<MockThreadSource>,
    completer: Arc<RecordingCompleter>,
    config: SummarizerConfig,
) -> ThreadPipeline {
    ThreadPipeline::new(
        ThreadExtractor::new(source),
        Summarizer::new(config, completer),
    )
}

#[tokio::test]
async fn jack_thread_end_to_end() {
    let source = Arc::new(MockThreadSource::with_items(vec![
        scraped_post("jack", "a", (10, 5, 2, 1)),
        scraped_post("jack", "b", (3, 3, 3, 3)),
        scraped_post("jack", "c", (0, 0, 0, 0)),
    ]));
    let completer = Arc::new(RecordingCompleter::replying("Ringkasan thread jack"));
    let pipeline = pipeline(source.clone(), completer.clone(), summarizer_config());

    let result = pipeline.run(JACK_URL).await.unwrap();

    assert_eq!(result.summary, "Ringkasan thread jack");
    assert_eq!(result.thread.body, "a\n\nb\n\nc");
    assert_eq!(result.thread.username, "jack");
    assert_eq!(source.requested_roots(), vec![1082159636994121729]);
    assert_eq!(source.requested_authors(), vec!["jack".to_string()]);
    assert!(result.thread.rendered().ends_with(
        "viewed by 10 account(s), liked by 5 account(s), retweeted by 2 account(s), and quoted by 1 account(s)."
    ));

    let prompt = completer.last_prompt().unwrap();
    assert!(prompt.contains("viewed by 10 account(s), liked by 5 account(s), retweeted by 2 account(s), and quoted by 1 account(s)."));
    assert!(prompt.contains("ALL IN BAHASA INDONESIA"));
}

#[tokio::test]
async fn replies_from_other_users_are_filtered_out() {
    let source = Arc::new(MockThreadSource::with_items(vec![
        scraped_post("someone", "nice thread!", (50, 50, 50, 50)),
        scraped_post("jack", "one", (7, 6, 5, 4)),
        ScrapedItem::Placeholder,
        scraped_post("other", "reply", (1, 1, 1, 1)),
        scraped_post("jack", "two", (9, 9, 9, 9)),
    ]));
    let completer = Arc::new(RecordingCompleter::replying("ok"));
    let result = pipeline(source, completer.clone(), summarizer_config())
        .run(JACK_URL)
        .await
        .unwrap();

    assert_eq!(result.thread.body, "one\n\ntwo");
    assert_eq!(result.thread.engagement.views, 7);
    assert_eq!(result.thread.engagement.quotes, 4);

    let prompt = completer.last_prompt().unwrap();
    assert!(!prompt.contains("nice thread!"));
    assert!(!prompt.contains("reply"));
}

#[tokio::test]
async fn invalid_url_touches_no_collaborator() {
    let source = Arc::new(MockThreadSource::with_items(vec![]));
    let completer = Arc::new(RecordingCompleter::replying("ok"));
    let pipeline = pipeline(source.clone(), completer.clone(), summarizer_config());

    for url in ["not a url", "https://x.com/jack/status/1", "https://twitter.com/jack"] {
        let err = pipeline.run(url).await.unwrap_err();
        assert!(matches!(err, ThreadSumError::InvalidUrl(_)), "{url}: {err}");
    }
    assert_eq!(source.call_count(), 0);
    assert_eq!(completer.call_count(), 0);
}

#[tokio::test]
async fn thread_without_author_posts_is_empty_thread() {
    let source = Arc::new(MockThreadSource::with_items(vec![
        scraped_post("bob", "hi", (1, 1, 1, 1)),
        ScrapedItem::Placeholder,
    ]));
    let completer = Arc::new(RecordingCompleter::replying("ok"));
    let err = pipeline(source.clone(), completer.clone(), summarizer_config())
        .run(JACK_URL)
        .await
        .unwrap_err();

    assert!(matches!(err, ThreadSumError::EmptyThread { ref username } if username == "jack"));
    assert_eq!(source.call_count(), 1);
    assert_eq!(completer.call_count(), 0);
}

#[tokio::test]
async fn scraper_failure_is_upstream() {
    let source = Arc::new(MockThreadSource::failing("actor run TIMED-OUT"));
    let completer = Arc::new(RecordingCompleter::replying("ok"));
    let err = pipeline(source, completer.clone(), summarizer_config())
        .run(JACK_URL)
        .await
        .unwrap_err();

    assert!(matches!(err, ThreadSumError::Upstream(ref m) if m.contains("TIMED-OUT")));
    assert_eq!(completer.call_count(), 0);
}

#[tokio::test]
async fn missing_credential_stops_before_llm_call() {
    let source = Arc::new(MockThreadSource::with_items(vec![scraped_post(
        "jack",
        "a",
        (1, 1, 1, 1),
    )]));
    let completer = Arc::new(RecordingCompleter::replying("ok"));
    let err = pipeline(source, completer.clone(), SummarizerConfig::default())
        .run(JACK_URL)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "missing_credential");
    assert_eq!(completer.call_count(), 0);
}

#[tokio::test]
async fn content_past_chunk_limit_never_reaches_prompt() {
    let posts: Vec<ScrapedItem> = ["first post", "second post", "third post", "fourth post"]
        .iter()
        .map(|text| scraped_post("jack", text, (1, 1, 1, 1)))
        .collect();
    let source = Arc::new(MockThreadSource::with_items(posts));
    let completer = Arc::new(RecordingCompleter::replying("ok"));
    let config = SummarizerConfig {
        chunk_limit: 3,
        splitter: SplitterConfig {
            kind: SplitterKind::Character,
            chunk_size: 12,
            chunk_overlap: 0,
        },
        ..summarizer_config()
    };

    pipeline(source, completer.clone(), config)
        .run(JACK_URL)
        .await
        .unwrap();

    let prompt = completer.last_prompt().unwrap();
    assert!(prompt.contains("first post"));
    assert!(prompt.contains("second post"));
    assert!(prompt.contains("third post"));
    assert!(!prompt.contains("fourth post"));
}

#[tokio::test]
async fn sentence_splitter_with_limit_two_drops_third_chunk() {
    let source = Arc::new(MockThreadSource::with_items(vec![
        scraped_post("jack", "Alpha sentence here.", (1, 1, 1, 1)),
        scraped_post("jack", "Bravo sentence here.", (1, 1, 1, 1)),
        scraped_post("jack", "Charlie sentence here.", (1, 1, 1, 1)),
    ]));
    let completer = Arc::new(RecordingCompleter::replying("ok"));
    let config = SummarizerConfig {
        chunk_limit: 2,
        splitter: SplitterConfig {
            kind: SplitterKind::Sentence,
            chunk_size: 25,
            chunk_overlap: 0,
        },
        ..summarizer_config()
    };

    pipeline(source, completer.clone(), config)
        .run(JACK_URL)
        .await
        .unwrap();

    let prompt = completer.last_prompt().unwrap();
    assert!(prompt.contains("Alpha sentence here."));
    assert!(prompt.contains("Bravo sentence here."));
    assert!(!prompt.contains("Charlie"));
}
