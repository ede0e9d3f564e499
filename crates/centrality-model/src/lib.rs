//! Data model for task centrality scoring.
//!
//! The pipeline moves through three shapes:
//!
//! - [`RatingRecord`]: one long-format survey rating (occupation, task, scale, category, value)
//! - [`TaskRow`]: one wide-format row per occupation/task with an explicit column set
//! - [`ProportionRow`]: a task row annotated with its per-occupation proportions

pub mod error;
pub mod proportions;
pub mod record;
pub mod scale;
pub mod task;
pub mod weights;

pub use error::{CentralityError, Result};
pub use proportions::{PROPORTION_COLUMNS, ProportionRow, TaskProportions};
pub use record::{RatingRecord, TaskId, TaskKey};
pub use scale::{FrequencyCategory, Scale, is_null_token};
pub use task::{AVERAGE_FREQUENCY_COLUMN, KEY_COLUMNS, TaskRow, WideColumn};
pub use weights::Weights;
