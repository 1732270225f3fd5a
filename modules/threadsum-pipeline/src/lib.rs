pub mod extractor;
pub mod logging;
pub mod pipeline;
pub mod splitter;
pub mod summarizer;
pub mod traits;
pub mod url;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use extractor::{ApifyThreadSource, ThreadExtractor};
pub use pipeline::{ThreadPipeline, ThreadSummary};
pub use splitter::{SplitterConfig, TextSplitter};
pub use summarizer::{Summarizer, SummarizerConfig};
pub use traits::{CompletionRequest, ScrapedItem, ScrapedPost, TextCompleter, ThreadSource};
pub use url::ThreadUrl;
