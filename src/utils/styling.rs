//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

use crate::pipeline::ExperimentSettings;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static RECIPE: Emoji<'_, '_> = Emoji("📜 ", "");
pub static DICE: Emoji<'_, '_> = Emoji("🎲 ", "");
pub static TREE: Emoji<'_, '_> = Emoji("🌲 ", "");

const BOX_WIDTH: usize = 56;

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
     __            _   _                     _
    / _| ___  __ _| |_| |__   ___ _ __   ___| |__
   | |_ / _ \/ _` | __| '_ \ / _ \ '_ \ / __| '_ \
   |  _|  __/ (_| | |_| |_) |  __/ | | | (__| | | |
   |_|  \___|\__,_|\__|_.__/ \___|_| |_|\___|_| |_|
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Manual feature engineering, measured by AUC").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

fn print_box_top(title: &str) {
    let line = "─".repeat(BOX_WIDTH - 2);
    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style(format!("⚙️  {}", title)).cyan().bold(),
        " ".repeat(BOX_WIDTH.saturating_sub(title.chars().count() + 7))
    );
    println!("    ├{}┤", line);
}

fn print_box_bottom() {
    println!("    └{}┘", "─".repeat(BOX_WIDTH - 2));
    println!();
}

/// Print the configuration card for `summarize`
pub fn print_summarize_config(input: &Path, columns: &[String]) {
    print_box_top("Configuration");
    println!("    │  {} Input:   {:<38}│", FOLDER, truncate_path(input, 37));
    let selection = if columns.is_empty() {
        "all text columns".to_string()
    } else {
        columns.join(", ")
    };
    println!(
        "    │  {} Columns: {:<38}│",
        CHART,
        truncate_string(&selection, 37)
    );
    print_box_bottom();
}

/// Print the configuration card for `evaluate`
pub fn print_evaluate_config(
    input: &Path,
    recipe: &str,
    target: &str,
    settings: &ExperimentSettings,
) {
    print_box_top("Configuration");
    println!("    │  {} Input:  {:<39}│", FOLDER, truncate_path(input, 38));
    println!("    │  {} Recipe: {:<39}│", RECIPE, truncate_string(recipe, 38));
    println!("    │  {} Target: {:<39}│", TARGET, truncate_string(target, 38));
    println!("    ├{}┤", "─".repeat(BOX_WIDTH - 2));
    println!(
        "    │  {} Test size: {:<8} Seed: {:<16}│",
        DICE,
        style(format!("{:.2}", settings.test_size)).yellow(),
        style(settings.seed).yellow()
    );
    println!(
        "    │  {} Trees: {:<12} C: {:<19}│",
        TREE,
        style(settings.forest.n_trees).yellow(),
        style(settings.logistic.c).yellow()
    );
    print_box_bottom();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", style("!").yellow().bold(), style(message).yellow());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!("    {} {}", ROCKET, style("featbench run complete!").green().bold());
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!("      Found {} {}", style(count).yellow().bold(), description);
    }
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    truncate_string(&path.display().to_string(), max_len)
}

/// Keep the tail of `s` within `max_len` characters
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count - max_len.saturating_sub(3)).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_string("odor", 10), "odor");
    }

    #[test]
    fn test_truncate_keeps_tail() {
        let truncated = truncate_string("data/weather/weatherAUS.csv", 12);
        assert_eq!(truncated.chars().count(), 12);
        assert!(truncated.starts_with("..."));
        assert!(truncated.ends_with("AUS.csv"));
    }

    #[test]
    fn test_truncate_multibyte() {
        let truncated = truncate_string("ééééééééé", 5);
        assert_eq!(truncated, "...éé");
    }
}
