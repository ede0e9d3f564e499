//! Task centrality transformations.
//!
//! The three stages run strictly in sequence, each consuming the previous
//! stage's full table:
//!
//! - **reshape**: long-format ratings to one wide row per occupation/task
//! - **normalize**: min-max scaling and day-equivalent frequency averaging
//! - **proportions**: per-occupation shares and composite scores
//!
//! **summary** computes column means of the resulting tables.

pub mod normalize;
pub mod proportions;
pub mod reshape;
pub mod summary;

pub use normalize::{MinMaxRange, NormalizeReport, average_frequency, min_max_scale, normalize};
pub use proportions::{
    OccupationBatch, OccupationGroup, ProportionCalculator, occupation_groups,
};
pub use reshape::{ReshapeReport, Reshaped, reshape};
pub use summary::{MetricColumns, MetricSummary};
