pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, SplitterKind};
pub use error::{Result, ThreadSumError};
pub use types::*;
