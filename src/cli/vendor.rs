//! Vendor command - typo-tolerant driver vendor lookup

use anyhow::Result;

use dlhub_search::fuzzy::{self, KeywordSet};
use dlhub_search::index::catalog::DRIVER_VENDORS;

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const SUCCESS: &str = "\x1b[38;2;165;214;167m";      // #A5D6A7
    pub const WARNING: &str = "\x1b[38;2;255;202;40m";       // #FFCA28
    pub const MUTED: &str = "\x1b[38;2;84;110;122m";         // #546E7A
}

pub fn run(word: &str) -> Result<()> {
    let vendors: KeywordSet<&str> = DRIVER_VENDORS.iter().copied().collect();

    match fuzzy::best_match(word, &vendors) {
        Some(found) => {
            println!(
                "{}  󰄬 \"{}\" → {} ({:.0}% similar){}",
                colors::SUCCESS,
                word,
                found.keyword,
                found.similarity * 100.0,
                colors::RESET
            );
            println!("{}      catalog entry: {}{}", colors::MUTED, found.entry, colors::RESET);
        }
        None => {
            println!(
                "{}  No driver vendor looks like \"{}\"{}",
                colors::WARNING, word, colors::RESET
            );
        }
    }

    Ok(())
}
