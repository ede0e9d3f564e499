//! Tabular outputs of the centrality pipeline.
//!
//! - **Task tables**: the reshaped and normalized wide tables, written in one pass
//! - **Proportions**: the annotated table, appended one occupation batch at a time

mod common;
mod sink;
mod tables;

pub use common::{PROPORTIONS_FILE, ensure_output_dir};
pub use sink::{CsvProportionSink, ProportionSink, SinkReport, drain_batches, write_proportions};
pub use tables::{TableStage, proportion_headers, task_headers, task_record, write_task_table};
