use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Targets the binaries log at `info` unless `RUST_LOG` says otherwise.
pub const DEFAULT_DIRECTIVES: &[&str] = &["threadsum=info", "apify_client=info", "ai_client=info"];

/// `RUST_LOG` plus an info floor for the workspace crates.
pub fn env_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_crates_log_at_info() {
        let rendered = env_filter().unwrap().to_string();
        for directive in ["threadsum=info", "apify_client=info", "ai_client=info"] {
            assert!(rendered.contains(directive), "{directive} missing from {rendered}");
        }
    }
}
