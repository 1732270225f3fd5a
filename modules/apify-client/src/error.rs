use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApifyError>;

/// Failures talking to Apify or reading what an actor produced.
#[derive(Debug, Error)]
pub enum ApifyError {
    #[error("Apify request failed: {0}")]
    Network(String),

    #[error("Apify returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected Apify payload: {0}")]
    Parse(String),

    #[error("Actor run {run_id} ended with status {status}")]
    RunFailed { run_id: String, status: String },

    #[error("Actor run {run_id} succeeded without a default dataset")]
    MissingDataset { run_id: String },
}

impl From<reqwest::Error> for ApifyError {
    fn from(err: reqwest::Error) -> Self {
        ApifyError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApifyError {
    fn from(err: serde_json::Error) -> Self {
        ApifyError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_failure_names_run_and_status() {
        let err = ApifyError::RunFailed {
            run_id: "abc".into(),
            status: "TIMED-OUT".into(),
        };
        assert_eq!(err.to_string(), "Actor run abc ended with status TIMED-OUT");
    }
}
