//! Interactive prompts
//!
//! Thin wrappers over dialoguer that apply the DownloadHub theme. Every prompt
//! returns `None` when the user cancels, and callers are expected to check
//! [`HubForm::is_interactive`] before prompting on piped input.

use anyhow::Result;
use console::Term;
use dialoguer::{Confirm, Input, Select};

use super::theme::HubTheme;

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const PRIMARY: &str = "\x1b[38;2;100;181;246m";
    pub const MUTED: &str = "\x1b[38;2;84;110;122m";
}

/// A single option in a selection list
#[derive(Debug, Clone)]
pub struct FormOption {
    pub label: String,
    pub description: String,
}

impl FormOption {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }

    fn display(&self) -> String {
        if self.description.is_empty() {
            self.label.clone()
        } else {
            format!("{}  {}", self.label, self.description)
        }
    }
}

pub struct HubForm {
    theme: HubTheme,
}

impl Default for HubForm {
    fn default() -> Self {
        Self::new()
    }
}

impl HubForm {
    pub fn new() -> Self {
        Self {
            theme: HubTheme::new(),
        }
    }

    /// Whether both ends of the terminal are attached
    pub fn is_interactive() -> bool {
        Term::stdout().is_term() && Term::stderr().is_term()
    }

    /// Pick one option; the first is preselected
    pub fn select(&self, question: &str, options: &[FormOption]) -> Result<Option<usize>> {
        self.print_question_header(question);

        let items: Vec<String> = options.iter().map(FormOption::display).collect();
        let selection = Select::with_theme(&self.theme)
            .items(&items)
            .default(0)
            .interact_on_opt(&Term::stderr())?;

        Ok(selection)
    }

    /// Yes/no question
    pub fn confirm(&self, question: &str, default: bool) -> Result<Option<bool>> {
        let result = Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(default)
            .interact_on_opt(&Term::stderr())?;

        Ok(result)
    }

    /// Free text; an empty answer counts as cancelled
    pub fn input(&self, question: &str) -> Result<Option<String>> {
        let text: String = Input::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;

        let text = text.trim().to_string();
        Ok((!text.is_empty()).then_some(text))
    }

    fn print_question_header(&self, question: &str) {
        println!();
        println!(
            "{}{}󰇚 {}{}",
            colors::PRIMARY, colors::BOLD, question, colors::RESET
        );
        println!(
            "{}  ╭{}─{}",
            colors::MUTED, "─".repeat(50), colors::RESET
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_option_display() {
        let opt = FormOption::new("VLC Media Player", "Media");
        assert_eq!(opt.display(), "VLC Media Player  Media");
        assert_eq!(FormOption::new("Home", "").display(), "Home");
    }
}
