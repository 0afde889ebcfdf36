//! Catalog command - list everything currently searchable

use anyhow::Result;

use dlhub_search::config::Config;

use super::search::category_icon;

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const PRIMARY: &str = "\x1b[38;2;100;181;246m";      // #64B5F6
    pub const MUTED: &str = "\x1b[38;2;84;110;122m";         // #546E7A
    pub const FG: &str = "\x1b[38;2;212;212;215m";           // #D4D4D7
}

pub async fn run(config: Config, offline: bool, json: bool) -> Result<()> {
    let index = super::load_index(&config, offline).await;

    if json {
        println!("{}", serde_json::to_string_pretty(index.items())?);
        return Ok(());
    }

    println!();
    println!(
        "{}{}  {} items indexed{}",
        colors::PRIMARY, colors::BOLD, index.len(), colors::RESET
    );
    println!();

    for item in index.items() {
        println!(
            "{}  {} {}{:<28}{} {:<10} {}{}",
            colors::MUTED,
            category_icon(&item.category),
            colors::FG,
            item.name,
            colors::MUTED,
            item.category,
            item.id,
            colors::RESET
        );
    }
    println!();

    Ok(())
}
