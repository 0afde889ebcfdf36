//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use dlhub_search::index::{RemoteRecord, SearchIndex};

pub const BASE_URL: &str = "https://hub.test";

/// Write a config that never touches the network or the real cache dir
pub fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    let knowledge = dir.join("knowledge.json");
    let content = format!(
        r#"[general]
base_url = "{base}"
speech = false

[remote]
enabled = false

[navigation]
delay_ms = 0

[assistant]
knowledge_file = "{knowledge}"
"#,
        base = BASE_URL,
        knowledge = knowledge.display().to_string().replace('\\', "\\\\"),
    );
    std::fs::write(&path, content).expect("write config");
    path
}

pub fn dlhub(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dlhub").expect("binary built");
    cmd.arg("--config").arg(config);
    cmd
}

pub fn seeded_index() -> SearchIndex {
    let mut index = SearchIndex::new();
    index.initialize(BASE_URL);
    index
}

pub fn record(id: &str, name: &str, category: Option<&str>, tags: &[&str]) -> RemoteRecord {
    RemoteRecord {
        id: id.to_string(),
        name: name.to_string(),
        category: category.map(str::to_string),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        ..Default::default()
    }
}
