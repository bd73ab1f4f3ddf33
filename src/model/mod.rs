mod error;
mod merge_request;
mod team;
mod timestamp;

pub use error::{MetricsError, RecordError, Result};
pub use merge_request::{MergeRequestExport, MergeRequestRecord};
pub use team::Team;
pub use timestamp::parse_timestamp;
