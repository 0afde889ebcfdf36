//! Interactive assistant for dlhub
//!
//! The chat widget as a terminal REPL: questions are answered from the
//! QA table, navigation requests open pages, and anything unknown can be
//! taught on the spot.

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use dlhub_search::assistant::{Assistant, Reply};
use dlhub_search::config::{self, Config};
use dlhub_search::core::KnowledgeStore;
use dlhub_search::sinks::{navigate, ConsoleNavigator, ConsoleSpeech, Speech};

use crate::ui::HubForm;

// ANSI color codes
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const PRIMARY: &str = "\x1b[38;2;100;181;246m";      // #64B5F6
    pub const SUCCESS: &str = "\x1b[38;2;165;214;167m";      // #A5D6A7
    pub const ERROR: &str = "\x1b[38;2;239;154;154m";        // #EF9A9A
    pub const AI_ACCENT: &str = "\x1b[38;2;255;202;40m";     // #FFCA28
    pub const MUTED: &str = "\x1b[38;2;84;110;122m";         // #546E7A
    pub const FG: &str = "\x1b[38;2;212;212;215m";           // #D4D4D7
}

mod symbols {
    pub const BOT_ICON: &str = "󰚩";
    pub const USER_ICON: &str = ">";
    pub const SUCCESS: &str = "󰄂";
    pub const ERROR: &str = "󰅚";
    pub const DIVIDER: &str = "─";
}

/// Chat session state besides the assistant itself
struct Session {
    assistant: Assistant,
    store: Option<KnowledgeStore>,
    speech: Speech,
    /// Where the speech preference is saved
    config_path: Option<PathBuf>,
    /// Last message that fell through to the fallback
    unanswered: Option<String>,
}

impl Session {
    fn teach(&mut self, query: &str, answer: &str) {
        if self.assistant.teach(query, answer).is_none() {
            print_error("Nothing to learn from that");
            return;
        }
        self.unanswered = None;

        if let Some(store) = &self.store {
            if let Err(e) = store.save(self.assistant.learned()) {
                tracing::warn!("Failed to save learned answers: {}", e);
                print_error(&format!("Learned for this session only ({})", e));
                return;
            }
        }
        print_success("Thanks, I'll remember that.");
    }

    fn toggle_speech(&mut self) {
        let on = self.speech.toggle();
        print_success(if on { "Speech enabled" } else { "Speech disabled" });

        if let Some(path) = &self.config_path {
            if let Err(e) = config::save_speech_preference(path, on) {
                tracing::warn!("Failed to save speech preference: {:#}", e);
                print_error("Could not save the preference, it applies to this session only");
            }
        }
    }
}

pub async fn run(config: Config, initial_prompt: Option<String>) -> Result<()> {
    let index = super::load_index(&config, false).await;
    let mut assistant =
        Assistant::new(index).with_fallback_message(config.assistant.fallback_message.clone());

    // An unreadable file is left alone rather than overwritten on the next save
    let mut unreadable = None;
    let store = open_store(&config).and_then(|store| match store.load() {
        Ok(entries) => {
            assistant.load_learned(entries);
            Some(store)
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable knowledge file {:?}: {}", store.path(), e);
            unreadable = Some(e);
            None
        }
    });

    let mut session = Session {
        assistant,
        store,
        speech: Speech::new(ConsoleSpeech, config.general.speech),
        config_path: config.source.clone(),
        unanswered: None,
    };

    print_banner();
    if let Some(e) = unreadable {
        print_error(&format!(
            "Could not read learned answers ({}). New answers last for this session only.",
            e
        ));
    }

    if let Some(prompt) = initial_prompt {
        respond(&mut session, &config, &prompt).await?;
    }

    while let Some(input) = read_input() {
        if let Some(should_break) = handle_command(&input, &mut session) {
            if should_break {
                break;
            }
            continue;
        }
        respond(&mut session, &config, &input).await?;
    }

    println!();
    Ok(())
}

fn open_store(config: &Config) -> Option<KnowledgeStore> {
    match &config.assistant.knowledge_file {
        Some(path) => Some(KnowledgeStore::at(path)),
        None => match KnowledgeStore::new() {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Learned answers will not persist: {}", e);
                None
            }
        },
    }
}

async fn respond(session: &mut Session, config: &Config, input: &str) -> Result<()> {
    let reply = session.assistant.process_query(input);

    match &reply {
        Reply::Empty => return Ok(()),
        Reply::Answer { text } => print_bot_message(text),
        Reply::Navigate(target) => {
            navigate(&ConsoleNavigator, target, config.navigation_delay()).await?;
        }
        Reply::Fallback { message } => {
            print_bot_message(message);
            session.unanswered = Some(input.to_string());
        }
    }

    if let Some(text) = reply.spoken_text() {
        session.speech.say(&text);
    }

    if matches!(reply, Reply::Fallback { .. }) && HubForm::is_interactive() {
        let form = HubForm::new();
        if form.confirm("Teach me the answer?", false)? == Some(true) {
            if let Some(answer) = form.input("What should I answer")? {
                session.teach(input, &answer);
            }
        }
    }

    Ok(())
}

/// Read one line from the user
fn read_input() -> Option<String> {
    print!(
        "\n{}  {} {}",
        colors::PRIMARY, symbols::USER_ICON, colors::RESET
    );
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Handle slash commands. `Some(true)` ends the session.
fn handle_command(input: &str, session: &mut Session) -> Option<bool> {
    if !input.starts_with('/') {
        return None;
    }

    let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
    match command.to_lowercase().as_str() {
        "/exit" | "/quit" | "/q" => {
            print_success("Goodbye, happy downloading!");
            Some(true)
        }
        "/help" | "/h" | "/?" => {
            print_help();
            Some(false)
        }
        "/teach" | "/t" => {
            match session.unanswered.clone() {
                Some(question) if !rest.trim().is_empty() => session.teach(&question, rest),
                Some(_) => print_error("Usage: /teach <answer>"),
                None => print_error("There is no unanswered question to teach"),
            }
            Some(false)
        }
        "/speech" | "/s" => {
            session.toggle_speech();
            Some(false)
        }
        "/learned" => {
            print_learned(session);
            Some(false)
        }
        _ => {
            print_error(&format!("Unknown command: {}", input));
            println!("{}  Type /help for available commands{}", colors::MUTED, colors::RESET);
            Some(false)
        }
    }
}

// ============================================
// UI Functions
// ============================================

fn print_banner() {
    println!();
    println!(
        "{}{}╭─────────────────────────────────────────────────────╮{}",
        colors::PRIMARY, colors::BOLD, colors::RESET
    );
    println!(
        "{}│{}  {} DownloadHub Assistant v{:<24}{}│{}",
        colors::PRIMARY, colors::AI_ACCENT, symbols::BOT_ICON,
        env!("CARGO_PKG_VERSION"), colors::PRIMARY, colors::RESET
    );
    println!(
        "{}╰─────────────────────────────────────────────────────╯{}",
        colors::PRIMARY, colors::RESET
    );
    println!(
        "{}  Ask about apps and drivers, or say \"open <page>\". /help for commands{}",
        colors::MUTED, colors::RESET
    );
    println!(
        "{}{}{}",
        colors::MUTED,
        symbols::DIVIDER.repeat(55),
        colors::RESET
    );
}

fn print_bot_message(content: &str) {
    println!();
    println!(
        "{}{}  {} Assistant {}",
        colors::AI_ACCENT, colors::BOLD, symbols::BOT_ICON, colors::RESET
    );
    for line in content.lines() {
        println!("{}  │ {}{}{}", colors::MUTED, colors::FG, line, colors::RESET);
    }
}

fn print_learned(session: &Session) {
    let learned = session.assistant.learned();
    if learned.is_empty() {
        println!("\n{}  Nothing learned yet{}", colors::MUTED, colors::RESET);
        return;
    }
    println!();
    for entry in learned {
        println!(
            "{}  {} {}{} → {}{}",
            colors::MUTED,
            entry.learned_at.format("%Y-%m-%d %H:%M"),
            colors::FG,
            entry.question,
            entry.answer,
            colors::RESET
        );
    }
}

fn print_error(message: &str) {
    println!(
        "\n{}  {} {}{}",
        colors::ERROR, symbols::ERROR, message, colors::RESET
    );
}

fn print_success(message: &str) {
    println!(
        "\n{}  {} {}{}",
        colors::SUCCESS, symbols::SUCCESS, message, colors::RESET
    );
}

fn print_help() {
    println!();
    println!(
        "{}{}  Available Commands:{}",
        colors::PRIMARY, colors::BOLD, colors::RESET
    );
    println!("{}  /help{}            - Show this help message", colors::FG, colors::MUTED);
    println!("{}  /teach <answer>{}  - Teach the answer to the last unknown question", colors::FG, colors::MUTED);
    println!("{}  /speech{}          - Toggle spoken replies (saved to the config file)", colors::FG, colors::MUTED);
    println!("{}  /learned{}         - List answers taught so far", colors::FG, colors::MUTED);
    println!("{}  /exit{}            - Exit the chat{}", colors::FG, colors::MUTED, colors::RESET);
}
