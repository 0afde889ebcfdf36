//! DownloadHub theme for interactive prompts

use console::{Color, Style};
use dialoguer::theme::Theme;
use std::fmt;

const CURSOR: &str = "❯";
const CHECK: &str = "✓";
const DOWNLOAD: &str = "󰇚";

/// Prompt styling shared by every dlhub form
#[derive(Debug, Clone)]
pub struct HubTheme {
    accent: Style,
    highlight: Style,
    item: Style,
    dim: Style,
    ok: Style,
    bad: Style,
}

impl Default for HubTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HubTheme {
    pub fn new() -> Self {
        // 256-color versions of the truecolor palette used by the CLI output
        let fg = |code| Style::new().fg(Color::Color256(code));
        Self {
            accent: fg(117).bold(),
            highlight: fg(220).bold(),
            item: fg(252),
            dim: fg(242),
            ok: fg(114),
            bad: fg(210),
        }
    }

    fn write_question(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(f, "{} {}", self.accent.apply_to(DOWNLOAD), self.accent.apply_to(prompt))
    }

    fn write_answer(&self, f: &mut dyn fmt::Write, prompt: &str, answer: &str) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.ok.apply_to(CHECK),
            self.accent.apply_to(prompt),
            self.ok.apply_to(answer)
        )
    }
}

impl Theme for HubTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.write_question(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        write!(f, "{}", self.bad.apply_to(err))
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.write_question(f, prompt)?;
        let hint = match default {
            Some(true) => "[Y/n]",
            Some(false) => "[y/N]",
            None => "[y/n]",
        };
        write!(f, " {}", self.dim.apply_to(hint))
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        match selection {
            Some(true) => self.write_answer(f, prompt, "yes"),
            Some(false) => write!(
                f,
                "{} {}: {}",
                self.bad.apply_to(CHECK),
                self.accent.apply_to(prompt),
                self.bad.apply_to("no")
            ),
            None => self.write_question(f, prompt),
        }
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.write_question(f, prompt)?;
        if let Some(default) = default {
            write!(f, " {}", self.dim.apply_to(format!("({})", default)))?;
        }
        write!(f, "{}", self.dim.apply_to(": "))
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.write_answer(f, prompt, sel)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.write_question(f, prompt)?;
        write!(f, " {}", self.dim.apply_to("(arrows to move, enter to open, esc to cancel)"))
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.write_answer(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "{} {}", self.highlight.apply_to(CURSOR), self.highlight.apply_to(text))
        } else {
            write!(f, "  {}", self.item.apply_to(text))
        }
    }
}
