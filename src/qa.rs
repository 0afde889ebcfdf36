//! Question/answer table behind the chat widget
//!
//! Lookup is exact-first, then by word overlap. Questions nobody could answer
//! can be taught back into the table at runtime.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// Overlap score a key must beat to be considered an answer
pub const OVERLAP_THRESHOLD: f64 = 0.33;

/// Lowercase, strip punctuation, collapse whitespace
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn tokens(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

/// `|common| / max(|a|, |b|)` over the two word sets
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let a = tokens(a);
    let b = tokens(b);
    let denominator = a.len().max(b.len());
    if denominator == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / denominator as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QaMatch<'a> {
    pub key: &'a str,
    pub answer: &'a str,
    pub score: f64,
    pub exact: bool,
}

/// Normalized question → answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaTable {
    entries: BTreeMap<String, String>,
}

impl QaTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's stock answers
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (question, answer) in DEFAULT_ANSWERS {
            table.insert(question, answer);
        }
        table
    }

    /// Store an answer under the normalized question; later writes win.
    ///
    /// Returns the key used, or `None` when the question normalizes to nothing.
    pub fn insert(&mut self, question: &str, answer: &str) -> Option<String> {
        let key = normalize(question);
        if key.is_empty() {
            return None;
        }
        self.entries.insert(key.clone(), answer.trim().to_string());
        Some(key)
    }

    /// Teach a correction for a query that had no answer
    pub fn teach(&mut self, query: &str, answer: &str) -> Option<String> {
        if answer.trim().is_empty() {
            return None;
        }
        let key = self.insert(query, answer)?;
        tracing::info!(key = %key, entries = self.entries.len(), "Learned new answer");
        Some(key)
    }

    /// Find the answer for `query`.
    ///
    /// Exact key match first, then the best word-overlap key above
    /// [`OVERLAP_THRESHOLD`]. Ties go to the key that sorts first.
    pub fn lookup(&self, query: &str) -> Option<QaMatch<'_>> {
        let query = normalize(query);
        if query.is_empty() {
            return None;
        }

        if let Some((key, answer)) = self.entries.get_key_value(&query) {
            return Some(QaMatch {
                key,
                answer,
                score: 1.0,
                exact: true,
            });
        }

        let mut best: Option<QaMatch<'_>> = None;
        for (key, answer) in &self.entries {
            let score = token_overlap(key, &query);
            if score <= OVERLAP_THRESHOLD {
                continue;
            }
            if best.map_or(true, |b| score > b.score) {
                best = Some(QaMatch {
                    key,
                    answer,
                    score,
                    exact: false,
                });
            }
        }
        best
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.entries.get(&normalize(question)).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const DEFAULT_ANSWERS: &[(&str, &str)] = &[
    ("hello", "Hi there! Ask me about apps, drivers or your account."),
    ("hi", "Hello! What would you like to download today?"),
    ("help", "Try asking for an app by name, or say \"open speed test\"."),
    ("what is downloadhub", "DownloadHub collects safe, up-to-date installers for popular apps and drivers."),
    ("is it safe", "Every installer is checked against the vendor's official release before it is listed."),
    ("how do i download", "Open an app's page and press the Download button; the file comes straight from the vendor."),
    ("how do i update drivers", "Tell me your GPU or audio vendor, for example \"nvidia drivers\"."),
    ("how fast is my internet", "Open the Speed Test page to measure your connection."),
    ("how do i create an account", "Use the Sign Up page; you only need an email address."),
    ("thank you", "You're welcome!"),
];
