//! Live search - search-as-you-type over stdin
//!
//! Every line read is treated as the current contents of the search box.
//! Ranking runs once input has been quiet for the debounce period, and the
//! remote collection is merged whenever it arrives without blocking input.

use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use dlhub_search::config::Config;
use dlhub_search::core::Debouncer;
use dlhub_search::index::{PendingFetch, SearchIndex};
use dlhub_search::ranking::ScoringProfile;

use super::search::{print_no_results, print_placeholder, print_results};

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const PRIMARY: &str = "\x1b[38;2;100;181;246m";      // #64B5F6
    pub const MUTED: &str = "\x1b[38;2;84;110;122m";         // #546E7A
}

pub async fn run(config: Config, profile: Option<ScoringProfile>, offline: bool) -> Result<()> {
    let profile = profile.unwrap_or(config.search.profile);
    let limit = config.result_limit();

    let mut index = SearchIndex::new();
    index.initialize(&config.general.base_url);

    let fetch = if offline { None } else { super::start_remote_fetch(&config) };

    println!(
        "{}  Live search ({} scoring). Type a query per line, Ctrl-D to finish.{}",
        colors::PRIMARY, profile, colors::RESET
    );
    if fetch.is_some() {
        println!("{}  Loading more apps in the background...{}", colors::MUTED, colors::RESET);
    }

    let input = BufReader::new(tokio::io::stdin());
    drive(&mut index, input, fetch, config.debounce(), |index, query| {
        render(index, query, profile, limit)
    })
    .await
}

/// Feed input lines through the debouncer until input ends.
///
/// `render` runs for every settled query, and again for the last one when
/// the remote fetch adds items. A fetch still running when input ends is
/// dropped.
async fn drive<R, F>(
    index: &mut SearchIndex,
    input: R,
    mut fetch: Option<PendingFetch>,
    quiet: Duration,
    mut render: F,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&SearchIndex, &str),
{
    let (mut debouncer, mut settled) = Debouncer::<String>::new(quiet);
    let mut lines = input.lines();
    let mut input_open = true;
    let mut last_query: Option<String> = None;

    loop {
        if !input_open && !debouncer.is_pending() {
            if let Some(query) = settled.try_recv() {
                render(&*index, &query);
            }
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => match line? {
                Some(line) => debouncer.push(line),
                None => input_open = false,
            },
            Some(query) = settled.recv() => {
                render(&*index, &query);
                last_query = Some(query);
            }
            outcome = async {
                match fetch.as_mut() {
                    Some(pending) => pending.wait().await,
                    None => std::future::pending().await,
                }
            }, if fetch.is_some() => {
                fetch = None;
                let added = index.apply_fetch(outcome);
                if added > 0 {
                    if let Some(query) = &last_query {
                        render(&*index, query);
                    }
                }
            }
        }
    }

    Ok(())
}

fn render(index: &SearchIndex, query: &str, profile: ScoringProfile, limit: usize) {
    if query.trim().is_empty() {
        print_placeholder();
        return;
    }

    let results = index.search(query, profile, limit);
    if results.is_empty() {
        print_no_results(query);
    } else {
        print_results(&results, query);
    }
}
