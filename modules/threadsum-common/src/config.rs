use std::env;
use std::str::FromStr;

use crate::error::{Result, ThreadSumError};

/// How the summarizer cuts the rendered thread into chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitterKind {
    /// Sentence boundaries, pieces re-joined with `"\n"`.
    #[default]
    Sentence,
    /// Literal `"\n\n"` separator.
    Character,
}

impl FromStr for SplitterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentence" | "nltk" => Ok(SplitterKind::Sentence),
            "character" | "char" => Ok(SplitterKind::Character),
            other => Err(format!("unknown splitter '{other}' (expected sentence|character)")),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Credentials
    pub openai_api_key: String,
    pub apify_api_token: String,

    // Summarizer
    pub openai_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub chunk_limit: usize,
    pub splitter: SplitterKind,
    pub chunk_size: usize,
    pub chunk_overlap: usize,

    // Scraper
    pub thread_max_items: u32,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo";
    pub const DEFAULT_TEMPERATURE: f32 = 0.6;
    pub const DEFAULT_MAX_TOKENS: u32 = 256;
    pub const DEFAULT_CHUNK_LIMIT: usize = 3;
    pub const DEFAULT_CHUNK_SIZE: usize = 4000;
    pub const DEFAULT_CHUNK_OVERLAP: usize = 200;
    pub const DEFAULT_THREAD_MAX_ITEMS: u32 = 100;

    /// Load configuration from `.env` and the process environment.
    /// Missing credentials are a hard error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ThreadSumError::MissingCredential(format!("{key} is not set")))
        };

        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            apify_api_token: required("APIFY_API_TOKEN")?,
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| Self::DEFAULT_MODEL.to_string()),
            temperature: parsed(&lookup, "SUMMARY_TEMPERATURE", Self::DEFAULT_TEMPERATURE),
            max_tokens: parsed(&lookup, "SUMMARY_MAX_TOKENS", Self::DEFAULT_MAX_TOKENS),
            chunk_limit: parsed(&lookup, "SUMMARY_CHUNK_LIMIT", Self::DEFAULT_CHUNK_LIMIT),
            splitter: parsed(&lookup, "SUMMARY_SPLITTER", SplitterKind::default()),
            chunk_size: parsed(&lookup, "SUMMARY_CHUNK_SIZE", Self::DEFAULT_CHUNK_SIZE),
            chunk_overlap: parsed(&lookup, "SUMMARY_CHUNK_OVERLAP", Self::DEFAULT_CHUNK_OVERLAP),
            thread_max_items: parsed(&lookup, "THREAD_MAX_ITEMS", Self::DEFAULT_THREAD_MAX_ITEMS),
            web_host: lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port: parsed(&lookup, "WEB_PORT", 3000),
        })
    }

    fn log_keys(&self) {
        fn preview(val: &str) -> String {
            let n = val.char_indices().nth(5).map(|(i, _)| i).unwrap_or(val.len());
            format!("{}...({} chars)", &val[..n], val.len())
        }

        tracing::info!("Config loaded:");
        tracing::info!("  OPENAI_API_KEY: {}", preview(&self.openai_api_key));
        tracing::info!("  APIFY_API_TOKEN: {}", preview(&self.apify_api_token));
        tracing::info!(
            model = %self.openai_model,
            temperature = self.temperature,
            max_tokens = self.max_tokens,
            chunk_limit = self.chunk_limit,
            splitter = ?self.splitter,
            "  Summarizer settings"
        );
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Unparseable config value, using default");
            default
        }),
        None => default,
    }
}
