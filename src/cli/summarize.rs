//! `summarize` subcommand

use anyhow::Result;

use crate::cli::SummarizeArgs;
use crate::pipeline::{categorical_columns, load_dataset_with_progress, summarize_categorical, LoadOptions};
use crate::report::{display_categorical_summary, export_summaries};
use crate::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_info, print_step_header, print_success, print_summarize_config,
};

/// Load a table and print its categorical summary
pub fn run_summarize(args: &SummarizeArgs) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));
    print_summarize_config(&args.input, &args.columns);

    print_step_header(1, "Load Dataset");
    let options =
        LoadOptions::new(args.infer_schema_length).with_null_values(args.null_values.iter().cloned());
    let (df, _, _) = load_dataset_with_progress(&args.input, &options)?;

    let columns = if args.columns.is_empty() {
        let detected = categorical_columns(&df);
        if detected.is_empty() {
            anyhow::bail!(
                "No text columns found in {}. Use -c/--columns to choose columns explicitly.",
                args.input.display()
            );
        }
        print_info(&format!("Detected {} text column(s)", detected.len()));
        detected
    } else {
        args.columns.clone()
    };

    print_step_header(2, "Summarize Categorical Columns");
    let spinner = create_spinner("Collecting distinct values...");
    let summaries = summarize_categorical(&df, &columns)?;
    let constant = summaries.iter().filter(|s| s.cardinality <= 1).count();
    if constant > 0 {
        finish_with_warning(
            &spinner,
            &format!("Summarized {} column(s), {} constant", summaries.len(), constant),
        );
    } else {
        finish_with_success(&spinner, &format!("Summarized {} column(s)", summaries.len()));
    }

    display_categorical_summary(&summaries, args.max_values);

    if let Some(path) = &args.json {
        export_summaries(&summaries, &args.input, path)?;
        println!();
        print_success(&format!("Summary written to {}", path.display()));
    }

    print_completion();
    Ok(())
}
