//! Terminal surface used by the controller

use anyhow::{Context, Result};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use indicatif::ProgressBar;

use crate::progress;

/// Output, prompts and progress indicators for the menu.
///
/// `choose` returns one of `options` for interactive terminals; other
/// implementations may return anything, and the controller validates the
/// answer before acting on it.
pub trait Console {
    fn clear(&mut self) -> Result<()>;

    fn print(&mut self, text: &str);

    fn print_success(&mut self, msg: &str) {
        self.print(&style(msg).green().to_string());
    }

    fn print_warning(&mut self, msg: &str) {
        self.print(&style(msg).yellow().to_string());
    }

    fn print_error(&mut self, msg: &str) {
        self.print(&style(msg).red().to_string());
    }

    /// Ask for one of `options`
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<String>;

    /// Block until the user acknowledges `prompt`
    fn acknowledge(&mut self, prompt: &str) -> Result<()>;

    /// Indeterminate spinner
    fn spinner(&mut self, message: &str) -> ProgressBar;

    /// Bounded progress bar
    fn progress_bar(&mut self, total: u64, message: &str) -> ProgressBar;
}

/// Interactive console on stdout
pub struct TerminalConsole {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }

    /// Restore the cursor; prompts hide it while active
    pub fn restore(&self) {
        let _ = self.term.show_cursor();
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn clear(&mut self) -> Result<()> {
        self.term.clear_screen().context("failed to clear screen")
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<String> {
        println!();
        let selection = FuzzySelect::with_theme(&self.theme)
            .with_prompt(style(prompt).cyan().to_string())
            .items(options)
            .default(0)
            .interact_on(&self.term)?;
        Ok(options[selection].clone())
    }

    fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        println!();
        self.term.write_str(prompt)?;
        self.term.read_line()?;
        Ok(())
    }

    fn spinner(&mut self, message: &str) -> ProgressBar {
        progress::spinner(message)
    }

    fn progress_bar(&mut self, total: u64, message: &str) -> ProgressBar {
        progress::bar(total, message)
    }
}
