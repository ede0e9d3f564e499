use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use centrality_transform::MetricSummary;

use crate::types::ScoreResult;

pub fn print_summary(result: &ScoreResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    println!(
        "Weights: importance {}, frequency {}, relevance {}",
        result.weights.importance, result.weights.frequency, result.weights.relevance
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Detail"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for stage in &result.stages {
        table.add_row(vec![
            Cell::new(stage.stage)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stage.rows),
            Cell::new(&stage.detail),
            output_cell(stage.output.as_ref()),
        ]);
    }
    println!("{table}");

    print_means("Normalized means:", &result.normalized_means);
    print_means("Proportion means:", &result.proportion_means);

    if !result.degenerate_columns.is_empty() {
        eprintln!("Warnings:");
        for column in &result.degenerate_columns {
            eprintln!("- {column} has no spread; its scaled values are NaN");
        }
    }
}

fn print_means(title: &str, means: &[MetricSummary]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Mean")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in means {
        table.add_row(vec![Cell::new(summary.column), mean_cell(summary.mean)]);
    }
    println!();
    println!("{title}");
    println!("{table}");
}

fn mean_cell(mean: Option<f64>) -> Cell {
    match mean {
        Some(value) => Cell::new(format!("{value:.6}")),
        None => dim_cell("-"),
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
