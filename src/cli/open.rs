//! Open command - jump straight to the best match
//!
//! With several close hits on a terminal, the user picks one; otherwise the
//! top-ranked item wins.

use anyhow::Result;

use dlhub_search::config::Config;
use dlhub_search::ranking::ScoringProfile;
use dlhub_search::sinks::{navigate, ConsoleNavigator, NavigationTarget};

use crate::ui::{FormOption, HubForm};

use super::search::print_no_results;

/// How many hits to offer when asking the user to choose
const CHOICES: usize = 5;

pub async fn run(config: Config, query: &str, profile: Option<ScoringProfile>, offline: bool) -> Result<()> {
    let profile = profile.unwrap_or(config.search.profile);
    let index = super::load_index(&config, offline).await;
    let results = index.search(query, profile, CHOICES);

    let Some(top) = results.first() else {
        print_no_results(query);
        return Ok(());
    };

    let chosen = if results.len() > 1 && results[1].score == top.score && HubForm::is_interactive() {
        let options: Vec<FormOption> = results
            .iter()
            .map(|r| FormOption::new(r.item.name.clone(), r.item.category.clone()))
            .collect();
        match HubForm::new().select("Several apps match, which one?", &options)? {
            Some(i) => results[i].item,
            None => return Ok(()),
        }
    } else {
        top.item
    };

    let target = NavigationTarget::new(chosen.name.clone(), chosen.path.clone());
    navigate(&ConsoleNavigator, &target, config.navigation_delay()).await
}
