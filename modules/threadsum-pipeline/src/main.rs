use anyhow::Result;
use clap::Parser;
use tracing::error;

use threadsum_common::{Config, SplitterKind};
use threadsum_pipeline::{logging, ThreadPipeline};

/// Summarize a Twitter thread in Bahasa Indonesia.
#[derive(Parser, Debug)]
#[command(name = "threadsum", version)]
struct Args {
    /// Thread URL, e.g. https://twitter.com/jack/status/1082159636994121729
    url: String,

    /// Also print the thread content that was summarized
    #[arg(long)]
    show_thread: bool,

    /// Override how many chunks are sent to the model
    #[arg(long)]
    chunk_limit: Option<usize>,

    /// Override the splitter (sentence|character)
    #[arg(long)]
    splitter: Option<SplitterKind>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter()?)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(limit) = args.chunk_limit {
        config.chunk_limit = limit;
    }
    if let Some(splitter) = args.splitter {
        config.splitter = splitter;
    }

    let pipeline = ThreadPipeline::from_config(&config);
    let result = match pipeline.run(&args.url).await {
        Ok(result) => result,
        Err(e) => {
            error!(kind = e.kind(), error = %e, "Summarization failed");
            return Err(e.into());
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "summary": result.summary,
                "thread": result.thread.rendered(),
                "username": result.thread.username,
                "root_id": result.thread.root_id,
                "engagement": result.thread.engagement,
            }))?
        );
        return Ok(());
    }

    println!("{}", result.summary.trim());
    if args.show_thread {
        println!("\n---\n\n{}", result.thread.rendered());
    }

    Ok(())
}
