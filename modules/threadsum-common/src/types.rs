use serde::Serialize;

// --- Engagement ---

/// Engagement counters reported alongside a thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Engagement {
    pub views: u64,
    pub likes: u64,
    pub retweets: u64,
    pub quotes: u64,
}

impl Engagement {
    /// The sentence appended after the thread body before summarization.
    pub fn sentence(&self) -> String {
        format!(
            "This thread was viewed by {} account(s), liked by {} account(s), retweeted by {} account(s), and quoted by {} account(s).",
            self.views, self.likes, self.retweets, self.quotes
        )
    }
}

/// `body` followed by a blank line and the engagement sentence.
pub fn render_thread(body: &str, engagement: &Engagement) -> String {
    format!("{body}\n\n{}", engagement.sentence())
}

// --- ThreadPost ---

/// One post written by the thread's author, text already cleaned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadPost {
    pub text: String,
    pub likes: u64,
    pub views: u64,
    pub retweets: u64,
    pub quotes: u64,
}

impl ThreadPost {
    pub fn engagement(&self) -> Engagement {
        Engagement {
            views: self.views,
            likes: self.likes,
            retweets: self.retweets,
            quotes: self.quotes,
        }
    }
}

// --- ThreadResult ---

/// What the extractor hands to the summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadResult {
    pub username: String,
    pub root_id: u64,
    /// Author posts joined by a blank line, in scraper order.
    pub body: String,
    /// Counters of the first author post, not a sum.
    pub engagement: Engagement,
    pub post_count: usize,
}

impl ThreadResult {
    pub fn rendered(&self) -> String {
        render_thread(&self.body, &self.engagement)
    }
}
