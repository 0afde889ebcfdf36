//! Info command - show system information

use anyhow::Result;

use dlhub_search::config::{self, Config};
use dlhub_search::core::cache::default_cache_dir;

pub fn run(config: &Config) -> Result<()> {
    println!("dlhub v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("System Information:");
    println!("  OS: {} {}", std::env::consts::OS, std::env::consts::ARCH);

    println!();
    println!("Configuration:");
    println!("  Config file: {}", path_or_unknown(config::config_path().ok()));
    println!("  Cache dir:   {}", path_or_unknown(default_cache_dir()));
    println!("  Site:        {}", config.general.base_url);
    println!("  Scoring:     {}", config.search.profile);
    println!("  Speech:      {}", if config.general.speech { "on" } else { "off" });

    println!();
    println!("Remote collection:");
    match config.remote_endpoint() {
        Some(endpoint) => println!("  {}", endpoint),
        None => println!("  not configured (static catalog only)"),
    }

    Ok(())
}

fn path_or_unknown(path: Option<std::path::PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
