//! Spinner and progress bar styles

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Indeterminate spinner for a single action
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    style_spinner(&pb);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Bounded bar for batch operations
pub fn bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    style_bar(&pb);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn style_spinner(pb: &ProgressBar) {
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars(TICK_CHARS)
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
}

pub fn style_bar(pb: &ProgressBar) {
    if let Ok(style) = ProgressStyle::default_bar()
        .tick_chars(TICK_CHARS)
        .template("{spinner:.green} {msg} [{bar:40.green/dim}] {pos}/{len}")
    {
        pb.set_style(style.progress_chars("█▓░"));
    }
}
