//! CLI command implementations

pub mod catalog;
pub mod chat;
pub mod info;
pub mod live;
pub mod open;
pub mod search;
pub mod vendor;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use dlhub_search::config::Config;
use dlhub_search::index::remote::spawn_fetch;
use dlhub_search::index::{HttpCollection, PendingFetch, SearchIndex};

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const WARNING: &str = "\x1b[38;2;255;245;157m";      // #FFF59D
}

/// Seed the index from the catalog and, unless offline, merge the remote
/// collection behind a spinner
pub async fn load_index(config: &Config, offline: bool) -> SearchIndex {
    let mut index = SearchIndex::new();
    index.initialize(&config.general.base_url);

    if offline {
        return index;
    }

    if let Some(mut pending) = start_remote_fetch(config) {
        let spinner = create_spinner("Loading apps from the remote collection");
        let outcome = pending.wait().await;
        spinner.finish_and_clear();

        if let Err(e) = &outcome {
            print_warning(&format!("Remote apps unavailable ({}), showing built-in catalog", e));
        }
        index.apply_fetch(outcome);
    }

    index
}

/// Kick off the remote fetch in the background, if one is configured
pub fn start_remote_fetch(config: &Config) -> Option<PendingFetch> {
    let endpoint = config.remote_endpoint()?;
    match HttpCollection::new(endpoint, config.remote_timeout()) {
        Ok(collection) => Some(spawn_fetch(collection)),
        Err(e) => {
            tracing::warn!("Remote collection disabled: {}", e);
            None
        }
    }
}

/// Create a styled spinner
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg:.dim}")
    {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]));
    }

    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    pb
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!(
        "{}  ⚠ {}{}",
        colors::WARNING, message, colors::RESET
    );
}
