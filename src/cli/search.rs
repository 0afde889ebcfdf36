//! Search command - rank the index against a query
//!
//! Builds the index (catalog plus remote apps) and prints the ranked hits.

use anyhow::Result;

use dlhub_search::config::Config;
use dlhub_search::ranking::{ScoredItem, ScoringProfile, MAX_RESULTS};

// ANSI color codes
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const PRIMARY: &str = "\x1b[38;2;100;181;246m";      // #64B5F6
    pub const SUCCESS: &str = "\x1b[38;2;165;214;167m";      // #A5D6A7
    pub const WARNING: &str = "\x1b[38;2;255;202;40m";       // #FFCA28
    pub const MUTED: &str = "\x1b[38;2;84;110;122m";         // #546E7A
    pub const FG: &str = "\x1b[38;2;212;212;215m";           // #D4D4D7
    pub const HIGHLIGHT: &str = "\x1b[38;2;255;183;77m";     // Orange highlight
}

mod symbols {
    pub const SEARCH: &str = "󰍉";
    pub const APP: &str = "󰏗";
    pub const PAGE: &str = "󰈙";
    pub const ACCOUNT: &str = "󰀄";
    pub const DRIVER: &str = "󰢮";
    pub const MATCH: &str = "󰄬";
}

pub async fn run(
    config: Config,
    query: &str,
    profile: Option<ScoringProfile>,
    limit: Option<usize>,
    offline: bool,
) -> Result<()> {
    let profile = profile.unwrap_or(config.search.profile);
    let limit = limit.map_or_else(|| config.result_limit(), |l| l.clamp(1, MAX_RESULTS));

    print_header(query, profile);

    if query.trim().is_empty() {
        print_placeholder();
        return Ok(());
    }

    let index = super::load_index(&config, offline).await;
    let results = index.search(query, profile, limit);

    if results.is_empty() {
        print_no_results(query);
        return Ok(());
    }

    print_results(&results, query);
    Ok(())
}

// ============================================
// UI Functions
// ============================================

fn print_header(query: &str, profile: ScoringProfile) {
    println!();
    println!(
        "{}{}  {} Search{} {}({} scoring){}",
        colors::PRIMARY, colors::BOLD, symbols::SEARCH, colors::RESET,
        colors::MUTED, profile, colors::RESET
    );
    println!(
        "{}  │ Query: {}\"{}\"{}",
        colors::MUTED, colors::HIGHLIGHT, query, colors::RESET
    );
    println!(
        "{}  ╰{}─{}",
        colors::MUTED, "─".repeat(50), colors::RESET
    );
    println!();
}

pub(crate) fn category_icon(category: &str) -> &'static str {
    match category {
        "Page" => symbols::PAGE,
        "Account" => symbols::ACCOUNT,
        "Drivers" => symbols::DRIVER,
        _ => symbols::APP,
    }
}

pub(crate) fn print_results(results: &[ScoredItem<'_>], query: &str) {
    println!(
        "{}{}  {} Found {} results for \"{}\"{}",
        colors::SUCCESS, colors::BOLD, symbols::MATCH,
        results.len(), query, colors::RESET
    );
    println!();

    for (i, result) in results.iter().enumerate() {
        let item = result.item;
        let category = if item.category.is_empty() { "App" } else { item.category.as_str() };

        println!(
            "{}  {:>2}. {} {}{}{} ({}) {}[{}]{}",
            colors::MUTED,
            i + 1,
            category_icon(&item.category),
            colors::FG,
            item.name,
            colors::RESET,
            category,
            colors::WARNING,
            result.score,
            colors::RESET
        );
        println!(
            "{}      {}{}",
            colors::MUTED, item.path, colors::RESET
        );
    }
    println!();
}

pub(crate) fn print_placeholder() {
    println!(
        "{}  Type something to search apps, drivers and pages{}",
        colors::MUTED, colors::RESET
    );
    println!();
}

pub(crate) fn print_no_results(query: &str) {
    println!(
        "{}  {} No results found for \"{}\"{}",
        colors::WARNING, symbols::SEARCH, query, colors::RESET
    );
    println!();
    println!(
        "{}  Try:{}",
        colors::MUTED, colors::RESET
    );
    println!(
        "{}  • An app name such as 'vlc' or 'chrome'{}",
        colors::MUTED, colors::RESET
    );
    println!(
        "{}  • A category such as 'drivers' or 'browsers'{}",
        colors::MUTED, colors::RESET
    );
    println!();
}
