use std::sync::LazyLock;

use regex::Regex;
use threadsum_common::{Result, ThreadSumError};

static THREAD_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.|mobile\.)?twitter\.com/(\w+)/status/(\d+)")
        .expect("Invalid thread URL regex")
});

/// Author and root tweet id parsed out of a thread URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadUrl {
    pub username: String,
    pub root_id: u64,
}

impl ThreadUrl {
    /// Only the prefix has to match, so query strings and trailing
    /// path segments (`/photo/1`, `?s=20`) are accepted.
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        let caps = THREAD_URL
            .captures(url)
            .ok_or_else(|| ThreadSumError::InvalidUrl(url.to_string()))?;

        let username = caps[1].to_string();
        let root_id = caps[2]
            .parse::<u64>()
            .map_err(|_| ThreadSumError::InvalidUrl(url.to_string()))?;

        Ok(Self { username, root_id })
    }
}
