//! Runtime plumbing shared by the library and the CLI

pub mod cache;
pub mod debounce;

pub use cache::{KnowledgeStore, LearnedEntry};
pub use debounce::{Debouncer, Settled};
