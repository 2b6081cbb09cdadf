//! `evaluate` subcommand

use anyhow::{Context, Result};

use crate::cli::EvaluateArgs;
use crate::pipeline::{
    load_dataset_with_progress, run_experiment_with_progress, LoadOptions, Recipe,
};
use crate::report::{display_categorical_summary, display_experiment, export_experiment, DEFAULT_MAX_VALUES};
use crate::utils::{
    create_progress_bar, finish_with_success, print_banner, print_completion, print_count,
    print_evaluate_config, print_info, print_step_header, print_success, print_warning,
};

/// Run every variant of a recipe and print the AUC table
pub fn run_evaluate(args: &EvaluateArgs) -> Result<()> {
    let recipe = Recipe::load(&args.recipe)?;
    let settings = args.settings();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_evaluate_config(&args.input, &recipe.name, &recipe.target.column, &settings);

    // Step 1: Load
    print_step_header(1, "Load Dataset");
    let options = LoadOptions::new(args.infer_schema_length)
        .with_null_values(recipe.null_values.iter().cloned())
        .with_null_values(args.null_values.iter().cloned());
    let (df, _, _) = load_dataset_with_progress(&args.input, &options)?;

    // Step 2: Filter, encode and score every variant
    print_step_header(2, "Score Variants");
    if let Some(filter) = &recipe.filter {
        print_info(&format!(
            "Keeping rows where {} is one of: {}",
            filter.column,
            filter.values.join(", ")
        ));
    }
    println!();
    let pb = create_progress_bar(recipe.variants.len() as u64, "Fitting models");
    let report = run_experiment_with_progress(&df, &recipe, &settings, |variant, _| {
        pb.set_message(format!("Scored {}", variant.name));
        pb.inc(1);
    });
    if report.is_err() {
        pb.abandon();
    }
    let report = report.with_context(|| {
        format!(
            "Recipe '{}' failed on {} (target {} = '{}')",
            recipe.name,
            args.input.display(),
            recipe.target.column,
            recipe.target.event_value
        )
    })?;
    finish_with_success(&pb, &format!("Scored {} variant(s)", recipe.variants.len()));

    print_count(
        "complete row(s)",
        report.rows_used,
        Some(&format!("(of {} loaded)", report.rows_loaded)),
    );
    if report.rows_used < report.rows_loaded {
        print_warning(&format!(
            "{} row(s) dropped by the filter or for missing values",
            report.rows_loaded - report.rows_used
        ));
    }
    print_info(&format!(
        "{} = '{}': {} event(s), {} non-event(s)",
        recipe.target.column, recipe.target.event_value, report.events, report.non_events
    ));

    // Step 3: Results
    print_step_header(3, "Results");
    if !report.summaries.is_empty() {
        display_categorical_summary(&report.summaries, DEFAULT_MAX_VALUES);
    }
    display_experiment(&report);

    if let Some(path) = &args.output {
        export_experiment(&report, &settings, &args.input, path)?;
        println!();
        print_success(&format!("Results written to {}", path.display()));
    }

    print_completion();
    Ok(())
}
