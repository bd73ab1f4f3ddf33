mod aggregator;
mod cycle_time;
mod membership;
mod model;
mod pipeline;
mod summary;

pub use aggregator::{Aggregator, Placement};
pub use cycle_time::{CycleTime, CycleTimeCalculator};
pub use membership::MembershipIndex;
pub use model::{AnalyzedMergeRequest, Report};
pub use pipeline::{analyze_batches, Batch, BatchProgress};
pub use summary::WeekSummary;
