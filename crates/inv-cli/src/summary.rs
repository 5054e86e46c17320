//! Terminal run summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inv_cli::pipeline::{CleanOutcome, RunOutcome};

pub fn print_summary(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Skipped { input } => {
            println!("Skipped {} (already cleaned)", input.display());
        }
        RunOutcome::Cleaned(outcome) => print_clean_summary(outcome),
    }
}

fn print_clean_summary(outcome: &CleanOutcome) {
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows In"),
        header_cell("Removed"),
        header_cell("Rows Out"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(outcome.input_rows),
        Cell::new(outcome.removed_rows).fg(Color::Yellow),
        Cell::new(outcome.written_rows),
    ]);
    println!("{table}");

    if let Some(stats) = &outcome.stats {
        println!("SKUs: {}", stats.sku_count);
        if let Some(total) = stats.total_sum {
            println!("TOTAL sum: {total}");
        }
        if let Some(mean) = stats.average_days_mean {
            println!("Average days in stock: {mean:.2}");
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
