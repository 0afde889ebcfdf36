//! DownloadHub search core
//!
//! In-memory search index over the site's apps, pages and account links,
//! pluggable ranking strategies, a typo-tolerant vendor matcher and the
//! question/answer table behind the chat assistant.

pub mod assistant;
pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod qa;
pub mod ranking;
pub mod sinks;

pub use assistant::{Assistant, Reply};
pub use error::{FetchError, StoreError};
pub use index::{SearchIndex, SearchItem};
pub use ranking::{ScoredItem, ScoringProfile, ScoringStrategy};
