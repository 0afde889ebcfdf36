//! Learned-answer cache
//!
//! Corrections taught through the chat widget are appended to a JSON file in
//! the user's cache directory so they survive between sessions. Entries are
//! replayed in order on load, so a later answer for the same question wins.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

const KNOWLEDGE_FILE: &str = "knowledge.json";

/// One taught answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedEntry {
    pub question: String,
    pub answer: String,
    pub learned_at: DateTime<Utc>,
}

impl LearnedEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            learned_at: Utc::now(),
        }
    }
}

/// File-backed store for learned answers
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    path: PathBuf,
}

impl KnowledgeStore {
    /// Store in the platform cache directory
    pub fn new() -> Result<Self, StoreError> {
        let cache_dir = default_cache_dir().ok_or(StoreError::NoCacheDir)?;
        Ok(Self::at(cache_dir.join(KNOWLEDGE_FILE)))
    }

    /// Store at an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries; a missing file is an empty store
    pub fn load(&self) -> Result<Vec<LearnedEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Replace the file contents with `entries`
    pub fn save(&self, entries: &[LearnedEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Delete every learned entry
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

/// `~/.cache/dlhub` or the platform equivalent
pub fn default_cache_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "downloadhub", "dlhub").map(|p| p.cache_dir().to_path_buf())
}
