//! Chat assistant
//!
//! Turns one free-text message into a [`Reply`]. Typed messages and voice
//! transcriptions take the same path. Resolution order:
//!
//! 1. navigation intent ("open ...", "go to ...") ranked against the index
//! 2. the question/answer table
//! 3. a driver vendor named anywhere in the message, typos allowed
//! 4. the fallback message, after which the caller may teach an answer

use tracing::debug;

use crate::core::LearnedEntry;
use crate::fuzzy::{self, KeywordSet};
use crate::index::catalog::DRIVER_VENDORS;
use crate::index::SearchIndex;
use crate::qa::{self, QaTable};
use crate::ranking::{self, ScoringProfile};
use crate::sinks::NavigationTarget;

pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "Sorry, I don't know that one yet. You can teach me the right answer.";

const NAVIGATION_PREFIXES: &[&str] = &["open ", "go to ", "take me to ", "show me "];

/// Typo matches on shorter words are too noisy ("and" vs "amd")
const MIN_FUZZY_WORD_CHARS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Nothing to respond to
    Empty,
    Answer { text: String },
    Navigate(NavigationTarget),
    Fallback { message: String },
}

impl Reply {
    /// Text suitable for the speech sink
    pub fn spoken_text(&self) -> Option<String> {
        match self {
            Reply::Empty => None,
            Reply::Answer { text } => Some(text.clone()),
            Reply::Navigate(target) => Some(format!("Opening {}", target.label)),
            Reply::Fallback { message } => Some(message.clone()),
        }
    }
}

pub struct Assistant {
    index: SearchIndex,
    qa: QaTable,
    learned: Vec<LearnedEntry>,
    vendors: KeywordSet<&'static str>,
    fallback_message: String,
}

impl Assistant {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            qa: QaTable::with_defaults(),
            learned: Vec::new(),
            vendors: DRIVER_VENDORS.iter().copied().collect(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn with_table(mut self, qa: QaTable) -> Self {
        self.qa = qa;
        self
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Replay previously learned answers, oldest first
    pub fn load_learned(&mut self, entries: Vec<LearnedEntry>) {
        for entry in &entries {
            self.qa.insert(&entry.question, &entry.answer);
        }
        debug!(count = entries.len(), "Replayed learned answers");
        self.learned.extend(entries);
    }

    pub fn process_query(&self, query: &str) -> Reply {
        let message = qa::normalize(query);
        if message.is_empty() {
            return Reply::Empty;
        }

        if let Some(target) = self.navigation_intent(query) {
            return Reply::Navigate(target);
        }

        if let Some(found) = self.qa.lookup(&message) {
            debug!(key = found.key, score = found.score, "Answered from table");
            return Reply::Answer {
                text: found.answer.to_string(),
            };
        }

        if let Some(target) = self.vendor_page(&message) {
            return Reply::Navigate(target);
        }

        Reply::Fallback {
            message: self.fallback_message.clone(),
        }
    }

    /// Record a correction for `query`; returns the stored entry
    pub fn teach(&mut self, query: &str, answer: &str) -> Option<&LearnedEntry> {
        let key = self.qa.teach(query, answer)?;
        self.learned.push(LearnedEntry::new(key, answer.trim()));
        self.learned.last()
    }

    /// The target is ranked as typed, so names with punctuation ("7-zip")
    /// go through the same search as the search box
    fn navigation_intent(&self, query: &str) -> Option<NavigationTarget> {
        let text = ranking::normalize_query(query);
        let rest = NAVIGATION_PREFIXES
            .iter()
            .find_map(|prefix| text.strip_prefix(prefix))?
            .trim()
            .trim_end_matches(|c| matches!(c, '.' | '!' | '?'));
        if rest.is_empty() {
            return None;
        }

        let top = self.index.search(rest, ScoringProfile::Standard, 1);
        top.first()
            .map(|hit| NavigationTarget::new(hit.item.name.clone(), hit.item.path.clone()))
    }

    fn vendor_page(&self, message: &str) -> Option<NavigationTarget> {
        for word in message.split_whitespace() {
            let Some(found) = fuzzy::best_match(word, &self.vendors) else {
                continue;
            };
            let exact = found.keyword == word;
            if !exact && word.chars().count() < MIN_FUZZY_WORD_CHARS {
                continue;
            }
            if let Some(item) = self.index.get(found.entry) {
                debug!(word, vendor = found.keyword, similarity = found.similarity, "Vendor match");
                return Some(NavigationTarget::new(item.name.clone(), item.path.clone()));
            }
        }
        None
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut SearchIndex {
        &mut self.index
    }

    pub fn table(&self) -> &QaTable {
        &self.qa
    }

    pub fn learned(&self) -> &[LearnedEntry] {
        &self.learned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://hub.test";

    fn assistant() -> Assistant {
        let mut index = SearchIndex::new();
        index.initialize(BASE);
        Assistant::new(index)
    }

    #[test]
    fn test_blank_message() {
        assert_eq!(assistant().process_query("  ?! "), Reply::Empty);
    }

    #[test]
    fn test_answers_from_table() {
        match assistant().process_query("Hello!") {
            Reply::Answer { text } => assert!(text.starts_with("Hi there")),
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn test_navigation_intent() {
        let reply = assistant().process_query("open speed test");
        assert_eq!(
            reply,
            Reply::Navigate(NavigationTarget::new("Speed Test", "https://hub.test/speedtest.html"))
        );
    }

    #[test]
    fn test_navigation_keeps_punctuation_in_names() {
        let a = assistant();
        let expected = Reply::Navigate(NavigationTarget::new(
            "7-Zip",
            "https://hub.test/app.html?id=7zip",
        ));
        assert_eq!(a.process_query("open 7-zip"), expected);
        assert_eq!(a.process_query("  Open 7-Zip! "), expected);

        let top = a.index().search("7-zip", ScoringProfile::Standard, 1);
        assert_eq!(top[0].item.id, "7zip");
    }

    #[test]
    fn test_misspelled_vendor_goes_to_driver_page() {
        let reply = assistant().process_query("nvida drivers please");
        assert_eq!(
            reply,
            Reply::Navigate(NavigationTarget::new(
                "NVIDIA GeForce Drivers",
                "https://hub.test/drivers.html#nvidia"
            ))
        );
    }

    #[test]
    fn test_short_words_need_exact_vendor() {
        let a = assistant();
        assert!(matches!(a.process_query("cats and dogs"), Reply::Fallback { .. }));
        assert!(matches!(a.process_query("amd gpu"), Reply::Navigate(_)));
    }

    #[test]
    fn test_overlap_below_threshold_falls_back() {
        let a = assistant().with_table({
            let mut t = QaTable::new();
            t.insert("help", "...");
            t
        });
        assert_eq!(
            a.process_query("please help me now"),
            Reply::Fallback {
                message: DEFAULT_FALLBACK_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_teach_and_replay() {
        let mut a = assistant();
        assert!(matches!(a.process_query("where are the mirrors"), Reply::Fallback { .. }));

        let entry = a.teach("Where are the mirrors?", " Under the download button. ").unwrap();
        assert_eq!(entry.question, "where are the mirrors");
        assert_eq!(entry.answer, "Under the download button.");
        assert_eq!(
            a.process_query("where are the mirrors"),
            Reply::Answer {
                text: "Under the download button.".to_string()
            }
        );

        let mut fresh = assistant();
        fresh.load_learned(a.learned().to_vec());
        assert!(matches!(fresh.process_query("where are the mirrors"), Reply::Answer { .. }));
    }

    #[test]
    fn test_spoken_text() {
        let target = NavigationTarget::new("Home", "/");
        assert_eq!(Reply::Navigate(target).spoken_text().as_deref(), Some("Opening Home"));
        assert_eq!(Reply::Empty.spoken_text(), None);
    }
}
