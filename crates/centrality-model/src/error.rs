use thiserror::Error;

#[derive(Debug, Error)]
pub enum CentralityError {
    /// Scale name outside the three rated dimensions.
    #[error("unknown scale name '{0}'")]
    UnknownScale(String),

    /// Frequency category that is not an integer in 1..=7.
    #[error("invalid frequency category '{0}' (expected 1-7)")]
    InvalidCategory(String),

    /// Frequency rating recorded without a category.
    #[error("frequency rating for task {task_id} is missing a category")]
    MissingCategory { task_id: String },

    /// Category supplied for a scale that has none.
    #[error("scale '{scale}' does not take a category, got '{category}'")]
    UnexpectedCategory { scale: String, category: String },

    /// A column of the wide schema was never populated by the input.
    #[error("missing expected column: {0}")]
    MissingColumn(String),

    /// Weight that is not a positive finite number.
    #[error("invalid {name} weight {value}: must be a positive finite number")]
    InvalidWeight { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, CentralityError>;
