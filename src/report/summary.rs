//! Categorical summary table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::CategoricalSummary;

/// Values shown per row before the list is cut short
pub const DEFAULT_MAX_VALUES: usize = 8;

/// Render distinct values for display, nulls as `null`
pub fn format_values(values: &[Option<String>], max_values: usize) -> String {
    let shown: Vec<&str> = values
        .iter()
        .take(max_values)
        .map(|v| v.as_deref().unwrap_or("null"))
        .collect();

    let mut text = shown.join(", ");
    if values.len() > max_values {
        text.push_str(&format!(", … (+{} more)", values.len() - max_values));
    }
    text
}

/// Build the summary table, one row per summary in the given order
pub fn categorical_summary_table(summaries: &[CategoricalSummary], max_values: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Cardinality").add_attribute(Attribute::Bold),
        Cell::new("Distinct values").add_attribute(Attribute::Bold),
    ]);

    for summary in summaries {
        let color = if summary.cardinality <= 1 {
            Color::Red
        } else if summary.cardinality == 2 {
            Color::Cyan
        } else {
            Color::Yellow
        };
        table.add_row(vec![
            Cell::new(&summary.column),
            Cell::new(summary.cardinality).fg(color),
            Cell::new(format_values(&summary.values, max_values)),
        ]);
    }

    table
}

/// Print the summary table with a section header
pub fn display_categorical_summary(summaries: &[CategoricalSummary], max_values: usize) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("CATEGORICAL SUMMARY").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    for line in categorical_summary_table(summaries, max_values).to_string().lines() {
        println!("    {}", line);
    }

    let binary = summaries.iter().filter(|s| s.cardinality == 2).count();
    let constant = summaries.iter().filter(|s| s.cardinality <= 1).count();
    println!();
    println!(
        "      {} binary column(s), {} constant column(s)",
        style(binary).cyan().bold(),
        style(constant).red().bold()
    );
}
