//! Tests for the task table and proportions writers.

use std::fs;

use centrality_model::{ProportionRow, TaskId, TaskKey, TaskRow};
use centrality_output::{
    CsvProportionSink, ProportionSink, TableStage, drain_batches, proportion_headers,
    task_headers, write_proportions, write_task_table,
};
use centrality_transform::{OccupationBatch, ProportionCalculator};

fn task_row(code: &str, id: &str, importance: f64, average_frequency: f64, relevance: f64) -> TaskRow {
    let mut row = TaskRow::new(TaskKey::new(
        code,
        "Chief Executives",
        TaskId::new(id),
        format!("Task, with a comma {id}"),
    ));
    row.importance = Some(importance);
    row.relevance = Some(relevance);
    row.average_frequency = Some(average_frequency);
    row
}

fn batches(rows: Vec<TaskRow>) -> Vec<OccupationBatch> {
    ProportionCalculator::default().batches(rows).collect()
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_proportion_header() {
    insta::assert_snapshot!(
        proportion_headers().join(","),
        @"O*NET-SOC Code,Title,Task ID,Task,Frequency_1,Frequency_2,Frequency_3,Frequency_4,Frequency_5,Frequency_6,Frequency_7,Importance,Relevance,Average Frequency,Total Importance,Importance Proportion,Freq Score Total,Frequency Proportion,Total Relevance,Relevance Proportion,Unweighted Sum,Sum Proportion,Weighted Sum,Weighted Sum Proportion"
    );
}

#[test]
fn test_reshaped_header_has_no_average_frequency() {
    let headers = task_headers(TableStage::Reshaped);
    assert_eq!(headers.len(), 13);
    assert_eq!(headers.last().map(String::as_str), Some("Relevance"));
    assert_eq!(task_headers(TableStage::Normalized).len(), 14);
}

#[test]
fn test_write_task_table_marks_missing_and_nan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(TableStage::Normalized.file_name());
    let mut row = task_row("11-1011.00", "8823", f64::NAN, 0.5, 1.0);
    row.frequency[0] = Some(0.25);

    write_task_table(&path, &[row], TableStage::Normalized).unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("O*NET-SOC Code,Title,Task ID,Task,Frequency_1"));
    assert_eq!(
        lines[1],
        "11-1011.00,Chief Executives,8823,\"Task, with a comma 8823\",0.25,,,,,,,NaN,1,0.5"
    );
}

#[test]
fn test_sink_writes_header_without_batches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weighted_proportions.csv");

    let report = write_proportions(&path, Vec::new()).unwrap();

    assert_eq!(report.rows, 0);
    assert_eq!(read_lines(&path), vec![proportion_headers().join(",")]);
}

#[test]
fn test_write_proportions_appends_batches_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weighted_proportions.csv");
    let rows = vec![
        task_row("15-1252.00", "2", 0.5, 0.5, 0.5),
        task_row("11-1011.00", "1", 0.75, 0.5, 0.5),
        task_row("11-1011.00", "3", 0.25, 0.5, 0.5),
    ];

    let report = write_proportions(&path, batches(rows)).unwrap();

    assert_eq!(report.batches, 2);
    assert_eq!(report.rows, 3);
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let column = |name: &str| headers.iter().position(|h| h == name).unwrap();
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    let codes: Vec<&str> = records.iter().map(|r| &r[0]).collect();
    assert_eq!(codes, vec!["15-1252.00", "11-1011.00", "11-1011.00"]);
    assert_eq!(&records[0][column("Importance Proportion")], "1");
    assert_eq!(&records[1][column("Importance Proportion")], "0.75");
    assert_eq!(&records[2][column("Total Importance")], "1");
}

#[test]
fn test_dropped_sink_flushes_written_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weighted_proportions.csv");
    let batches = batches(vec![task_row("11-1011.00", "1", 0.5, 0.5, 0.5)]);

    {
        let mut sink = CsvProportionSink::create(&path).unwrap();
        sink.write_batch(&batches[0]).unwrap();
    }

    assert_eq!(read_lines(&path).len(), 2);
}

#[test]
fn test_finished_sink_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weighted_proportions.csv");
    let batches = batches(vec![task_row("11-1011.00", "1", 0.5, 0.5, 0.5)]);

    let mut sink = CsvProportionSink::create(&path).unwrap();
    sink.finish().unwrap();

    assert!(sink.write_batch(&batches[0]).is_err());
}

#[test]
fn test_memory_sink_collects_rows() {
    let mut sink: Vec<ProportionRow> = Vec::new();
    let rows = vec![
        task_row("11-1011.00", "1", 0.5, 0.5, 0.5),
        task_row("11-1011.00", "2", 0.5, 0.5, 0.5),
    ];

    let report = drain_batches(&mut sink, batches(rows)).unwrap();

    assert_eq!(report.rows, 2);
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0].proportions.importance_proportion, Some(0.5));
}
