//! AUC score table for experiment runs

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::ExperimentReport;

fn auc_color(auc: f64) -> Color {
    if auc >= 0.9 {
        Color::Green
    } else if auc >= 0.75 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// One row per variant × model, the best AUC in bold with a marker
pub fn score_table(report: &ExperimentReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Variant").add_attribute(Attribute::Bold),
        Cell::new("Scaler").add_attribute(Attribute::Bold),
        Cell::new("Encoding").add_attribute(Attribute::Bold),
        Cell::new("Model").add_attribute(Attribute::Bold),
        Cell::new("Features").add_attribute(Attribute::Bold),
        Cell::new("AUC").add_attribute(Attribute::Bold),
    ]);

    let best = report.best();
    for row in &report.scores {
        let is_best = best.is_some_and(|b| std::ptr::eq(b, row));
        let mut auc = Cell::new(format!("{:.4}{}", row.auc, if is_best { " ★" } else { "" }))
            .fg(auc_color(row.auc));
        if is_best {
            auc = auc.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(&row.variant),
            Cell::new(&row.scaler),
            Cell::new(&row.encoding),
            Cell::new(&row.model),
            Cell::new(row.features),
            auc,
        ]);
    }

    table
}

/// Print the data overview and the score table
pub fn display_experiment(report: &ExperimentReport) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style(format!("RESULTS: {}", report.recipe)).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!(
        "      Rows used: {} of {} ({} events, {} non-events)",
        style(report.rows_used).yellow().bold(),
        report.rows_loaded,
        report.events,
        report.non_events
    );
    println!();

    for line in score_table(report).to_string().lines() {
        println!("    {}", line);
    }

    if let Some(best) = report.best() {
        println!();
        println!(
            "      Best: {} with {} (AUC {})",
            style(&best.variant).cyan().bold(),
            best.model,
            style(format!("{:.4}", best.auc)).green().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ScoreRow;

    fn row(variant: &str, model: &str, auc: f64) -> ScoreRow {
        ScoreRow {
            variant: variant.to_string(),
            scaler: "none".to_string(),
            encoding: "one_hot".to_string(),
            model: model.to_string(),
            auc,
            train_rows: 75,
            test_rows: 25,
            features: 4,
        }
    }

    #[test]
    fn test_best_row_is_marked_once() {
        let report = ExperimentReport {
            recipe: "weather".to_string(),
            rows_loaded: 120,
            rows_used: 100,
            events: 30,
            non_events: 70,
            summaries: Vec::new(),
            scores: vec![
                row("unscaled", "logistic_regression", 0.71),
                row("standard", "logistic_regression", 0.84),
                row("standard", "random_forest", 0.80),
            ],
        };

        let rendered = score_table(&report).to_string();
        assert_eq!(rendered.matches('★').count(), 1);
        assert!(rendered.contains("0.8400 ★"));
    }
}
