//! `recipes` subcommand

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};

use crate::pipeline::{Recipe, BUILTIN_RECIPES};

/// Table of the embedded recipes
pub fn recipes_table() -> Result<Table> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Recipe").add_attribute(Attribute::Bold),
        Cell::new("Target").add_attribute(Attribute::Bold),
        Cell::new("Features").add_attribute(Attribute::Bold),
        Cell::new("Variants").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);

    for name in BUILTIN_RECIPES {
        let recipe = Recipe::builtin(name)?;
        let variants: Vec<&str> = recipe.variants.iter().map(|v| v.name.as_str()).collect();
        table.add_row(vec![
            Cell::new(&recipe.name),
            Cell::new(format!("{} = {}", recipe.target.column, recipe.target.event_value)),
            Cell::new(format!(
                "{} numeric, {} categorical",
                recipe.numeric.len(),
                recipe.categorical.len()
            )),
            Cell::new(variants.join(", ")),
            Cell::new(&recipe.description),
        ]);
    }

    Ok(table)
}

/// Print the embedded recipes
pub fn run_recipes() -> Result<()> {
    println!();
    for line in recipes_table()?.to_string().lines() {
        println!("    {}", line);
    }
    println!();
    Ok(())
}
