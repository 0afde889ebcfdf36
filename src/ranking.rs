//! Query scoring and ranking
//!
//! Two scoring formulas are in use on the site. The standard one drives the
//! main search box; the legacy one is still wired into older pages. Both are
//! additive integer scores, so results are fully deterministic.
//!
//! | Signal                                   | Standard | Legacy |
//! |------------------------------------------|----------|--------|
//! | name equals query                        | 50       | -      |
//! | name contains query                      | 20       | 10     |
//! | name starts with query (query > 2 chars) | 10       | -      |
//! | per keyword containing query             | 15       | 5      |
//! | category contains query                  | 5        | 3      |
//! | Account item, query has login/profile    | 10       | -      |
//! | first character matches                  | -        | 1      |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::index::SearchItem;

/// Result cap used by every search surface
pub const MAX_RESULTS: usize = 15;

pub mod weights {
    pub const EXACT_NAME: u32 = 50;
    pub const NAME_SUBSTRING: u32 = 20;
    pub const NAME_PREFIX: u32 = 10;
    pub const KEYWORD: u32 = 15;
    pub const CATEGORY: u32 = 5;
    pub const ACCOUNT_BOOST: u32 = 10;

    pub const LEGACY_NAME: u32 = 10;
    pub const LEGACY_KEYWORD: u32 = 5;
    pub const LEGACY_CATEGORY: u32 = 3;
    pub const LEGACY_FIRST_CHAR: u32 = 1;
}

/// Minimum query length (in chars) for the prefix bonus to apply
const PREFIX_MIN_CHARS: usize = 3;

/// Scores one item against an already-normalized query
pub trait ScoringStrategy {
    fn name(&self) -> &'static str;

    /// Non-negative relevance; zero means "not a match"
    fn score(&self, item: &SearchItem, query: &str) -> u32;
}

/// Main search box scoring
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScoring;

impl ScoringStrategy for StandardScoring {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn score(&self, item: &SearchItem, query: &str) -> u32 {
        if query.is_empty() {
            return 0;
        }

        let name = item.name.to_lowercase();
        let category = item.category.to_lowercase();
        let mut score = 0;

        if name == query {
            score += weights::EXACT_NAME;
        }
        if name.contains(query) {
            score += weights::NAME_SUBSTRING;
        }
        if name.starts_with(query) && query.chars().count() >= PREFIX_MIN_CHARS {
            score += weights::NAME_PREFIX;
        }

        score += weights::KEYWORD * keyword_hits(item, query);

        if category.contains(query) {
            score += weights::CATEGORY;
        }
        if category == "account" && (query.contains("login") || query.contains("profile")) {
            score += weights::ACCOUNT_BOOST;
        }

        score
    }
}

/// Older pages' scoring
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyScoring;

impl ScoringStrategy for LegacyScoring {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn score(&self, item: &SearchItem, query: &str) -> u32 {
        if query.is_empty() {
            return 0;
        }

        let name = item.name.to_lowercase();
        let mut score = 0;

        if name.contains(query) {
            score += weights::LEGACY_NAME;
        }

        score += weights::LEGACY_KEYWORD * keyword_hits(item, query);

        if item.category.to_lowercase().contains(query) {
            score += weights::LEGACY_CATEGORY;
        }
        if let (Some(a), Some(b)) = (name.chars().next(), query.chars().next()) {
            if a == b {
                score += weights::LEGACY_FIRST_CHAR;
            }
        }

        score
    }
}

fn keyword_hits(item: &SearchItem, query: &str) -> u32 {
    item.keywords.iter().filter(|k| k.contains(query)).count() as u32
}

/// Named scoring profiles, selectable from config and the command line
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoringProfile {
    #[default]
    Standard,
    Legacy,
}

impl ScoringProfile {
    pub fn strategy(self) -> &'static dyn ScoringStrategy {
        match self {
            ScoringProfile::Standard => &StandardScoring,
            ScoringProfile::Legacy => &LegacyScoring,
        }
    }
}

impl fmt::Display for ScoringProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}

/// An item paired with its score for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a> {
    pub item: &'a SearchItem,
    pub score: u32,
}

/// Lowercase and trim a raw query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Score, filter, sort and truncate.
///
/// Ties keep index order since `sort_by` is stable.
pub fn rank<'a, S>(
    items: &'a [SearchItem],
    query: &str,
    strategy: &S,
    limit: usize,
) -> Vec<ScoredItem<'a>>
where
    S: ScoringStrategy + ?Sized,
{
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredItem<'a>> = items
        .iter()
        .filter_map(|item| {
            let score = strategy.score(item, &query);
            (score > 0).then_some(ScoredItem { item, score })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);

    tracing::debug!(
        query = %query,
        strategy = strategy.name(),
        hits = results.len(),
        "Ranked query"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: &str, keywords: &[&str]) -> SearchItem {
        SearchItem::new(id, name, category, keywords.iter().copied(), format!("/{}", id), "")
    }

    fn vlc() -> SearchItem {
        item("vlc-player", "VLC Media Player", "Media", &["vlc", "media", "player", "video"])
    }

    #[test]
    fn test_vlc_example_scores_at_least_35() {
        let score = StandardScoring.score(&vlc(), "vlc");
        // substring 20 + prefix 10 + keyword 15
        assert_eq!(score, 45);
        assert!(score >= 35);
    }

    #[test]
    fn test_exact_name_match() {
        let exact = item("chrome", "Chrome", "Browsers", &[]);
        assert_eq!(StandardScoring.score(&exact, "chrome"), 50 + 20 + 10);
    }

    #[test]
    fn test_prefix_needs_three_chars() {
        let it = item("vl", "VLC", "", &[]);
        assert_eq!(StandardScoring.score(&it, "vl"), 20);
        assert_eq!(StandardScoring.score(&it, "vlc"), 50 + 20 + 10);
    }

    #[test]
    fn test_keyword_hits_are_cumulative() {
        let it = item("x", "Zzz", "", &["graphics", "graphics driver", "gpu"]);
        assert_eq!(StandardScoring.score(&it, "graph"), 30);
    }

    #[test]
    fn test_category_and_account_boost() {
        let login = item("login", "Login", "Account", &[]);
        // category "account" contains "account"
        assert_eq!(StandardScoring.score(&login, "account"), 5);
        // name contains + prefix + exact + boost
        assert_eq!(StandardScoring.score(&login, "login"), 50 + 20 + 10 + 10);
        // boost applies even without a name hit
        assert_eq!(StandardScoring.score(&login, "my profile"), 10);
    }

    #[test]
    fn test_missing_category_scores_nothing_from_it() {
        let it = item("x", "Thing", "", &[]);
        assert_eq!(StandardScoring.score(&it, "media"), 0);
        assert_eq!(LegacyScoring.score(&it, "media"), 0);
    }

    #[test]
    fn test_legacy_weights() {
        // name 10 + keyword 5 + first char 1
        assert_eq!(LegacyScoring.score(&vlc(), "vlc"), 16);
        // category "media" 3 + keyword "media" 5 + name contains 10
        assert_eq!(LegacyScoring.score(&vlc(), "media"), 18);
        // first character only
        assert_eq!(LegacyScoring.score(&vlc(), "vx"), 1);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let items = vec![vlc()];
        assert!(rank(&items, "", &StandardScoring, MAX_RESULTS).is_empty());
        assert!(rank(&items, "   ", &LegacyScoring, MAX_RESULTS).is_empty());
    }

    #[test]
    fn test_query_is_normalized() {
        let items = vec![vlc()];
        let results = rank(&items, "  VLC ", &StandardScoring, MAX_RESULTS);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 45);
    }

    #[test]
    fn test_exact_match_outranks_substring() {
        let items = vec![
            item("a", "Zip Tools Suite", "", &[]),
            item("b", "Zip", "", &[]),
        ];
        let results = rank(&items, "zip", &StandardScoring, MAX_RESULTS);
        assert_eq!(results[0].item.id, "b");
        assert!(results[0].score >= 50);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let items: Vec<_> = (0..5)
            .map(|i| item(&format!("id{}", i), &format!("Tool {}", i), "", &[]))
            .collect();
        let results = rank(&items, "tool", &StandardScoring, MAX_RESULTS);
        let ids: Vec<_> = results.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["id0", "id1", "id2", "id3", "id4"]);
    }

    #[test]
    fn test_results_are_capped() {
        let items: Vec<_> = (0..40)
            .map(|i| item(&format!("id{}", i), &format!("App {}", i), "", &["app"]))
            .collect();
        assert_eq!(rank(&items, "app", &StandardScoring, MAX_RESULTS).len(), MAX_RESULTS);
    }

    #[test]
    fn test_profile_roundtrip_names() {
        assert_eq!(ScoringProfile::Standard.to_string(), "standard");
        assert_eq!(ScoringProfile::Legacy.to_string(), "legacy");
        let parsed: ScoringProfile = serde_json::from_str("\"legacy\"").unwrap();
        assert_eq!(parsed, ScoringProfile::Legacy);
    }
}
