//! Side-effect sinks: navigation and speech
//!
//! The core decides *where* to go and *what* to say; how that happens is up to
//! the host. The CLI prints, a browser host would change `location` and call
//! the speech API.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Pause between the confirmation and the actual navigation
pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_millis(1000);

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const SUCCESS: &str = "\x1b[38;2;165;214;167m";      // #A5D6A7
    pub const AI_ACCENT: &str = "\x1b[38;2;255;202;40m";     // #FFCA28
    pub const MUTED: &str = "\x1b[38;2;84;110;122m";         // #546E7A
}

/// Where to go and what to call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    pub label: String,
    pub path: String,
}

impl NavigationTarget {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

pub trait NavigationSink {
    /// Show the brief "taking you to ..." notice
    fn confirm(&self, target: &NavigationTarget);

    /// Perform the transition
    fn open(&self, target: &NavigationTarget) -> Result<()>;
}

/// Confirm, wait `delay`, then open
pub async fn navigate<S>(sink: &S, target: &NavigationTarget, delay: Duration) -> Result<()>
where
    S: NavigationSink + ?Sized,
{
    sink.confirm(target);
    tokio::time::sleep(delay).await;
    tracing::info!(label = %target.label, path = %target.path, "Navigating");
    sink.open(target)
}

/// Prints navigation to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNavigator;

impl NavigationSink for ConsoleNavigator {
    fn confirm(&self, target: &NavigationTarget) {
        println!(
            "{}  󰄂 Opening {}...{}",
            colors::SUCCESS, target.label, colors::RESET
        );
    }

    fn open(&self, target: &NavigationTarget) -> Result<()> {
        println!("{}  → {}{}", colors::MUTED, target.path, colors::RESET);
        Ok(())
    }
}

pub trait SpeechSink {
    fn speak(&self, text: &str);
}

/// Prints what would be spoken
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSpeech;

impl SpeechSink for ConsoleSpeech {
    fn speak(&self, text: &str) {
        println!("{}  🔊 {}{}", colors::AI_ACCENT, text, colors::RESET);
    }
}

/// Speech output gated by the user's preference
pub struct Speech {
    sink: Box<dyn SpeechSink + Send>,
    enabled: bool,
}

impl Speech {
    pub fn new(sink: impl SpeechSink + Send + 'static, enabled: bool) -> Self {
        Self {
            sink: Box::new(sink),
            enabled,
        }
    }

    /// Speak if enabled; returns whether anything was said
    pub fn say(&self, text: &str) -> bool {
        if !self.enabled || text.trim().is_empty() {
            return false;
        }
        self.sink.speak(text);
        true
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

impl std::fmt::Debug for Speech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Speech").field("enabled", &self.enabled).finish()
    }
}
