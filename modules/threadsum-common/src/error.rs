use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThreadSumError>;

/// Every way a summarize request can end early. None of them are retried.
#[derive(Error, Debug)]
pub enum ThreadSumError {
    #[error("Invalid Twitter thread URL: {0}")]
    InvalidUrl(String),

    #[error("No posts by @{username} found in the scraped thread")]
    EmptyThread { username: String },

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl ThreadSumError {
    /// Stable tag for API responses and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ThreadSumError::InvalidUrl(_) => "invalid_url",
            ThreadSumError::EmptyThread { .. } => "empty_thread",
            ThreadSumError::MissingCredential(_) => "missing_credential",
            ThreadSumError::Upstream(_) => "upstream",
        }
    }

    pub fn upstream(err: impl std::fmt::Display) -> Self {
        ThreadSumError::Upstream(err.to_string())
    }
}
