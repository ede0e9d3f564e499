mod common;

use centrality_transform::{MetricColumns, ProportionCalculator};

use common::{assert_close, normalized_row};

#[test]
fn normalized_means_skip_missing_values() {
    let mut incomplete = normalized_row("11-1011.00", "3", 1.0, 0.0, 1.0);
    incomplete.relevance = None;
    let rows = vec![
        normalized_row("11-1011.00", "1", 0.0, 1.0, 0.0),
        normalized_row("11-1011.00", "2", 0.5, 0.5, 0.5),
        incomplete,
    ];

    let summary = MetricColumns::from_normalized(&rows)
        .summarize()
        .expect("summary");

    let columns: Vec<&str> = summary.iter().map(|s| s.column).collect();
    assert_eq!(columns, vec!["Importance", "Relevance", "Average Frequency"]);
    assert_eq!(summary[0].mean, Some(0.5));
    assert_eq!(summary[1].mean, Some(0.25));
    assert_eq!(summary[2].mean, Some(0.5));
}

#[test]
fn proportion_means_accumulate_across_batches() {
    let rows = vec![
        normalized_row("11-1011.00", "1", 0.75, 0.5, 0.5),
        normalized_row("11-1011.00", "2", 0.25, 0.5, 0.5),
        normalized_row("15-1252.00", "3", 0.4, 0.4, 0.4),
    ];
    let mut columns = MetricColumns::proportions();
    for batch in ProportionCalculator::default().batches(rows) {
        columns.push_proportions(&batch.rows);
    }

    assert_eq!(columns.len(), 3);
    let summary = columns.summarize().expect("summary");
    let importance = summary
        .iter()
        .find(|s| s.column == "Importance Proportion")
        .and_then(|s| s.mean)
        .unwrap_or(f64::NAN);
    assert_close(importance, 2.0 / 3.0);
}

#[test]
fn empty_columns_have_no_mean() {
    let columns = MetricColumns::from_normalized(&[]);
    assert!(columns.is_empty());

    let summary = columns.summarize().expect("summary");
    assert!(summary.iter().all(|s| s.mean.is_none()));
}
