use centrality_model::{CentralityError, PROPORTION_COLUMNS, TaskProportions, Weights};

#[test]
fn default_weights_are_uniform() {
    let weights = Weights::default();
    assert_eq!(weights, Weights::new(1.0, 1.0, 1.0));
    assert!(weights.validate().is_ok());
}

#[test]
fn weights_reject_non_positive_values() {
    let zero = Weights::default().with_frequency(0.0);
    assert!(matches!(
        zero.validate(),
        Err(CentralityError::InvalidWeight { name: "frequency", .. })
    ));

    let negative = Weights::default().with_importance(-2.0);
    assert!(matches!(
        negative.validate(),
        Err(CentralityError::InvalidWeight { name: "importance", .. })
    ));

    let nan = Weights::default().with_relevance(f64::NAN);
    assert!(nan.validate().is_err());
}

#[test]
fn weights_deserialize_with_defaults() {
    let weights: Weights = serde_json::from_str(r#"{"importance": 2.5}"#).expect("parse weights");
    assert_eq!(weights, Weights::new(2.5, 1.0, 1.0));

    let unknown = serde_json::from_str::<Weights>(r#"{"level": 2.0}"#);
    assert!(unknown.is_err());
}

#[test]
fn proportion_values_follow_column_order() {
    let proportions = TaskProportions {
        total_importance: Some(1.0),
        weighted_sum_proportion: Some(0.5),
        ..TaskProportions::default()
    };
    let values = proportions.values();
    assert_eq!(values.len(), PROPORTION_COLUMNS.len());
    assert_eq!(values[0], Some(1.0));
    assert_eq!(values[9], Some(0.5));
    assert!(values[1..9].iter().all(Option::is_none));
}
