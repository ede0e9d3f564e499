//! Fixture builders shared by the transform tests.
#![allow(dead_code)]

use centrality_model::{FrequencyCategory, RatingRecord, Scale, TaskId, TaskKey, TaskRow};

pub const TOLERANCE: f64 = 1e-9;

pub fn key(occupation_code: &str, task_id: &str) -> TaskKey {
    TaskKey::new(
        occupation_code,
        format!("Occupation {occupation_code}"),
        TaskId::new(task_id),
        format!("Task {task_id}"),
    )
}

pub fn frequency(key: &TaskKey, category: u8, value: f64) -> RatingRecord {
    RatingRecord::new(
        key.clone(),
        Scale::Frequency,
        Some(FrequencyCategory::new(category).expect("valid category")),
        value,
    )
}

pub fn importance(key: &TaskKey, value: f64) -> RatingRecord {
    RatingRecord::new(key.clone(), Scale::Importance, None, value)
}

pub fn relevance(key: &TaskKey, value: f64) -> RatingRecord {
    RatingRecord::new(key.clone(), Scale::Relevance, None, value)
}

/// All nine ratings of one task, in source order.
pub fn task_records(
    occupation_code: &str,
    task_id: &str,
    shares: [f64; 7],
    importance_value: f64,
    relevance_value: f64,
) -> Vec<RatingRecord> {
    let key = key(occupation_code, task_id);
    let mut records: Vec<RatingRecord> = (1..=7u8)
        .zip(shares)
        .map(|(category, share)| frequency(&key, category, share))
        .collect();
    records.push(importance(&key, importance_value));
    records.push(relevance(&key, relevance_value));
    records
}

/// A normalized row with the three metrics already on [0, 1].
pub fn normalized_row(
    occupation_code: &str,
    task_id: &str,
    importance: f64,
    average_frequency: f64,
    relevance: f64,
) -> TaskRow {
    let mut row = TaskRow::new(key(occupation_code, task_id));
    row.importance = Some(importance);
    row.average_frequency = Some(average_frequency);
    row.relevance = Some(relevance);
    row
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}
