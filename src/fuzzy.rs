//! Typo-tolerant keyword matching
//!
//! Used by the assistant to recognise hardware vendor names even when they
//! are misspelled ("nvida", "realteck"). Similarity is edit distance scaled by
//! the longer word's length.

/// A word must be strictly more similar than this to count as a match
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Classic Levenshtein distance over chars, unit cost for every edit
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut dp: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != *bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_chars.len()]
}

/// `1 - distance / max_len`, in `[0, 1]`. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Ordered keyword → entry table
#[derive(Debug, Clone)]
pub struct KeywordSet<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for KeywordSet<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> KeywordSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword. Keywords are stored lowercase; order is kept.
    pub fn insert(&mut self, keyword: impl AsRef<str>, entry: T) {
        self.entries.push((keyword.as_ref().to_lowercase(), entry));
    }

    pub fn with(mut self, keyword: impl AsRef<str>, entry: T) -> Self {
        self.insert(keyword, entry);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, T> FromIterator<(K, T)> for KeywordSet<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (keyword, entry) in iter {
            set.insert(keyword, entry);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'a, T> {
    pub keyword: &'a str,
    pub entry: &'a T,
    pub similarity: f64,
}

/// Most similar keyword above the threshold; the first one wins a tie
pub fn best_match<'a, T>(word: &str, keywords: &'a KeywordSet<T>) -> Option<FuzzyMatch<'a, T>> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return None;
    }

    let mut best: Option<FuzzyMatch<'a, T>> = None;
    for (keyword, entry) in keywords.iter() {
        let score = similarity(&word, keyword);
        if score <= SIMILARITY_THRESHOLD {
            continue;
        }
        if best.as_ref().map_or(true, |b| score > b.similarity) {
            best = Some(FuzzyMatch {
                keyword,
                entry,
                similarity: score,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("nvida", "nvidia"), 1);
        assert_eq!(levenshtein("café", "cafe"), 1);
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_misspelled_vendor_matches() {
        let vendors = KeywordSet::new().with("nvidia", "X").with("amd", "Y");
        let found = best_match("nvida", &vendors).unwrap();
        assert_eq!(*found.entry, "X");
        assert!(found.similarity > SIMILARITY_THRESHOLD);
    }

    #[test]
    fn test_threshold_is_strict() {
        // distance 2 over length 5 = 0.6 exactly, not enough
        let set = KeywordSet::new().with("abcde", 1);
        assert!((similarity("abxye", "abcde") - 0.6).abs() < 1e-9);
        assert!(best_match("abxye", &set).is_none());
    }

    #[test]
    fn test_best_similarity_wins_and_ties_keep_first() {
        let set = KeywordSet::new()
            .with("intel", 1)
            .with("intal", 2)
            .with("intex", 3);
        assert_eq!(*best_match("intal", &set).unwrap().entry, 2);
        // "intey" is one edit from both "intel" and "intex"; first wins
        assert_eq!(*best_match("intey", &set).unwrap().entry, 1);
    }

    #[test]
    fn test_case_insensitive() {
        let set: KeywordSet<&str> = [("Realtek", "audio")].into_iter().collect();
        assert_eq!(*best_match("REALTEK", &set).unwrap().entry, "audio");
    }

    #[test]
    fn test_owned_entries_scan_every_keyword() {
        let set: KeywordSet<String> = [
            ("radeon", "amd-drivers".to_string()),
            ("geforce", "nvidia-drivers".to_string()),
            ("realtek", "realtek-audio".to_string()),
        ]
        .into_iter()
        .collect();

        let found = best_match("gforce", &set).unwrap();
        assert_eq!(found.keyword, "geforce");
        assert_eq!(found.entry, "nvidia-drivers");
        assert_eq!(best_match("realtec", &set).unwrap().entry, "realtek-audio");
    }

    #[test]
    fn test_blank_word_never_matches() {
        let set = KeywordSet::new().with("amd", ());
        assert!(best_match("  ", &set).is_none());
    }

    proptest! {
        #[test]
        fn prop_similarity_is_symmetric(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
        }

        #[test]
        fn prop_similarity_in_unit_range(a in "\\PC{0,10}", b in "\\PC{0,10}") {
            let s = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
