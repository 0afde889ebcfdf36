mod common;

use dlhub_search::index::SearchIndex;
use dlhub_search::ranking::{ScoringProfile, MAX_RESULTS};
use proptest::prelude::*;

fn grown_index(names: &[String]) -> SearchIndex {
    let mut index = common::seeded_index();
    let records = names
        .iter()
        .enumerate()
        .map(|(i, name)| common::record(&format!("gen-{}", i), name, Some("Utilities"), &["tool"]));
    index.merge_remote(records);
    index
}

fn profile() -> impl Strategy<Value = ScoringProfile> {
    prop_oneof![Just(ScoringProfile::Standard), Just(ScoringProfile::Legacy)]
}

proptest! {
    #[test]
    fn results_are_bounded_and_sorted(
        names in prop::collection::vec("[a-z ]{1,16}", 0..40),
        query in "[a-z]{0,4}",
        profile in profile(),
    ) {
        let index = grown_index(&names);
        let results = index.search(&query, profile, MAX_RESULTS);

        prop_assert!(results.len() <= MAX_RESULTS);
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(results.iter().all(|r| r.score > 0));
    }

    #[test]
    fn merge_is_idempotent(names in prop::collection::vec("[a-z]{1,10}", 0..20)) {
        let once = grown_index(&names);
        let mut twice = grown_index(&names);
        let records: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| common::record(&format!("gen-{}", i), name, Some("Utilities"), &["tool"]))
            .collect();
        prop_assert_eq!(twice.merge_remote(records), 0);
        prop_assert_eq!(once.items(), twice.items());
    }

    #[test]
    fn exact_name_outranks_containing_name(word in "[a-z]{3,8}") {
        let mut index = SearchIndex::new();
        index.merge_remote(vec![
            common::record("longer", &format!("{} deluxe", word), None, &[]),
            common::record("exact", &word, None, &[]),
        ]);

        let results = index.search(&word, ScoringProfile::Standard, MAX_RESULTS);
        prop_assert_eq!(results[0].item.id.as_str(), "exact");
        prop_assert!(results[0].score >= 50);
        prop_assert!(results[0].score > results[1].score);
    }

    #[test]
    fn case_and_padding_do_not_matter(query in "[a-z]{1,6}") {
        let index = common::seeded_index();
        let lower = index.search(&query, ScoringProfile::Standard, MAX_RESULTS);
        let shouted = index.search(&format!("  {}  ", query.to_uppercase()), ScoringProfile::Standard, MAX_RESULTS);
        prop_assert_eq!(lower, shouted);
    }
}

#[test]
fn vlc_example_from_catalog() {
    let index = common::seeded_index();
    let results = index.search("vlc", ScoringProfile::Standard, MAX_RESULTS);
    let vlc = results.iter().find(|r| r.item.id == "vlc-player").unwrap();
    assert!(vlc.score >= 35);
}

#[test]
fn account_boost_surfaces_login() {
    let index = common::seeded_index();
    let results = index.search("login", ScoringProfile::Standard, MAX_RESULTS);
    assert_eq!(results[0].item.id, "login");
}

#[test]
fn empty_query_is_empty_for_every_profile() {
    let index = common::seeded_index();
    for profile in [ScoringProfile::Standard, ScoringProfile::Legacy] {
        assert!(index.search("", profile, MAX_RESULTS).is_empty());
    }
}
