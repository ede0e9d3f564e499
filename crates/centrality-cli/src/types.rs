use std::path::PathBuf;

use centrality_model::Weights;
use centrality_transform::MetricSummary;

#[derive(Debug)]
pub struct ScoreResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub weights: Weights,
    pub stages: Vec<StageSummary>,
    pub degenerate_columns: Vec<String>,
    pub normalized_means: Vec<MetricSummary>,
    pub proportion_means: Vec<MetricSummary>,
}

#[derive(Debug)]
pub struct StageSummary {
    pub stage: &'static str,
    pub rows: usize,
    pub detail: String,
    pub output: Option<PathBuf>,
}
