use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span};

use centrality_cli::config::resolve_weights;
use centrality_cli::pipeline::{
    NormalizeResult, OutputConfig, ReshapeResult, compute_proportions, ingest, normalize_rows,
    reshape_ratings,
};
use centrality_ingest::IngestOptions;
use centrality_model::{FrequencyCategory, WideColumn};
use centrality_output::ensure_output_dir;

use crate::cli::ScoreArgs;
use crate::summary::{align_column, apply_table_style, header_cell};
use crate::types::{ScoreResult, StageSummary};

pub fn run_scales() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Scale"),
        header_cell("Category"),
        header_cell("Per day"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in WideColumn::all() {
        let category = column.category();
        table.add_row(vec![
            Cell::new(column.name()),
            Cell::new(column.scale().source_name()),
            Cell::new(category.map_or_else(|| "-".to_string(), |c| c.value().to_string())),
            Cell::new(category.map_or_else(|| "-".to_string(), multiplier_label)),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn multiplier_label(category: FrequencyCategory) -> String {
    format!("{:.4}", category.day_multiplier())
}

pub fn run_score(args: &ScoreArgs) -> Result<ScoreResult> {
    let run_span = info_span!("score", input = %args.input.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let weights = resolve_weights(args.weights.weights_file.as_deref(), args.weights.overrides())?;
    info!(
        importance = weights.importance,
        frequency = weights.frequency,
        relevance = weights.relevance,
        "weights"
    );

    let output = OutputConfig {
        output_dir: args.output_dir.clone(),
        snapshots: !args.no_snapshots,
        dry_run: args.dry_run,
    };
    if !output.dry_run {
        ensure_output_dir(&output.output_dir).context("prepare output directory")?;
    }

    let options = IngestOptions {
        delimiter: args.delimiter,
    };
    let records = ingest(&args.input, &options)?;
    let record_count = records.len();

    let ReshapeResult {
        mut rows,
        report: reshape_report,
        snapshot: reshaped_path,
    } = reshape_ratings(&records, &output)?;
    drop(records);
    let task_count = rows.len();

    let NormalizeResult {
        report: normalize_report,
        means: normalized_means,
        snapshot: normalized_path,
    } = normalize_rows(&mut rows, &output)?;
    let degenerate_columns: Vec<String> = normalize_report
        .degenerate_columns()
        .map(str::to_string)
        .collect();

    let proportions = compute_proportions(rows, weights, &output)?;

    info!(
        records = record_count,
        tasks = task_count,
        occupations = proportions.occupations,
        duration_ms = run_start.elapsed().as_millis(),
        "score complete"
    );

    let stages = vec![
        StageSummary {
            stage: "Ingest",
            rows: record_count,
            detail: "ratings".to_string(),
            output: None,
        },
        StageSummary {
            stage: "Reshape",
            rows: task_count,
            detail: format!("{} duplicates ignored", reshape_report.duplicates),
            output: reshaped_path,
        },
        StageSummary {
            stage: "Normalize",
            rows: task_count,
            detail: format!("{} degenerate columns", degenerate_columns.len()),
            output: normalized_path,
        },
        StageSummary {
            stage: "Proportions",
            rows: proportions.rows,
            detail: format!("{} occupations", proportions.occupations),
            output: proportions.path,
        },
    ];

    Ok(ScoreResult {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        dry_run: args.dry_run,
        weights,
        stages,
        degenerate_columns,
        normalized_means,
        proportion_means: proportions.means,
    })
}
