//! Chunking of the rendered thread before it goes into the prompt.
//!
//! Both strategies cut the text into small pieces first (sentences, or runs
//! between a literal separator) and then greedily pack those pieces into
//! chunks of at most `chunk_size` characters, carrying up to `chunk_overlap`
//! characters of trailing context into the next chunk.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use threadsum_common::{Config, SplitterKind};

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?]+["')\]]*\s+|\n\s*\n"#).expect("Invalid sentence boundary regex")
});

pub trait TextSplitter: Send + Sync {
    fn split_text(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterConfig {
    pub kind: SplitterKind,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            kind: SplitterKind::Sentence,
            chunk_size: Config::DEFAULT_CHUNK_SIZE,
            chunk_overlap: Config::DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl SplitterConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            kind: config.splitter,
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        }
    }

    pub fn build(&self) -> Box<dyn TextSplitter> {
        match self.kind {
            SplitterKind::Sentence => Box::new(SentenceSplitter {
                chunk_size: self.chunk_size,
                chunk_overlap: self.chunk_overlap,
            }),
            SplitterKind::Character => Box::new(CharacterSplitter {
                separator: "\n\n".to_string(),
                chunk_size: self.chunk_size,
                chunk_overlap: self.chunk_overlap,
            }),
        }
    }
}

// --- Sentence splitter ---

/// Sentence-aware splitter; sentences inside a chunk are joined with `"\n"`.
pub struct SentenceSplitter {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl TextSplitter for SentenceSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        let sentences = split_sentences(text);
        merge_pieces(&sentences, "\n", self.chunk_size, self.chunk_overlap)
    }
}

/// Split on terminal punctuation followed by whitespace, and on blank lines.
/// Punctuation stays with its sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BOUNDARY.find_iter(text) {
        let end = m.start() + m.as_str().trim_end().len();
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = m.end();
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }
    sentences
}

// --- Character splitter ---

/// Splits on a literal separator, then packs with the same separator.
pub struct CharacterSplitter {
    pub separator: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl TextSplitter for CharacterSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        let pieces: Vec<&str> = text
            .split(self.separator.as_str())
            .filter(|p| !p.is_empty())
            .collect();
        merge_pieces(&pieces, &self.separator, self.chunk_size, self.chunk_overlap)
    }
}

// --- Packing ---

/// Greedy packing of `pieces` into chunks of at most `chunk_size` chars.
///
/// A piece longer than `chunk_size` still becomes its own chunk. Empty
/// chunks (after trimming) are dropped.
pub fn merge_pieces(
    pieces: &[&str],
    separator: &str,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Vec<String> {
    let sep_len = separator.chars().count();
    let mut chunks = Vec::new();
    let mut current: VecDeque<(&str, usize)> = VecDeque::new();
    let mut total = 0usize;

    for &piece in pieces {
        let len = piece.chars().count();
        let joiner = if current.is_empty() { 0 } else { sep_len };

        if total + len + joiner > chunk_size {
            if total > chunk_size {
                warn!(chunk_chars = total, chunk_size, "Created a chunk larger than chunk_size");
            }
            if !current.is_empty() {
                if let Some(chunk) = join_chunk(&current, separator) {
                    chunks.push(chunk);
                }
                // Drop from the front until the tail fits the overlap budget
                // and leaves room for the incoming piece.
                while total > chunk_overlap
                    || (total > 0
                        && total + len + (if current.is_empty() { 0 } else { sep_len }) > chunk_size)
                {
                    let dropped_joiner = if current.len() > 1 { sep_len } else { 0 };
                    let Some((_, front_len)) = current.pop_front() else {
                        break;
                    };
                    total = total.saturating_sub(front_len + dropped_joiner);
                }
            }
        }

        current.push_back((piece, len));
        total += len + (if current.len() > 1 { sep_len } else { 0 });
    }

    if total > chunk_size {
        warn!(chunk_chars = total, chunk_size, "Created a chunk larger than chunk_size");
    }
    if let Some(chunk) = join_chunk(&current, separator) {
        chunks.push(chunk);
    }
    chunks
}

fn join_chunk(pieces: &VecDeque<(&str, usize)>, separator: &str) -> Option<String> {
    let joined = pieces
        .iter()
        .map(|(p, _)| *p)
        .collect::<Vec<_>>()
        .join(separator);
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
