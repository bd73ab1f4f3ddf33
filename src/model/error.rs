use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort the whole run.
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A roster document could not be parsed. No analysis is attempted.
    #[error("Invalid team roster {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid merge request export {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input directory not found: {0}")]
    InputDirMissing(PathBuf),

    /// A commit (or the creation itself) is dated after the merge.
    #[error("Commit date is after merge date ({activity} > {merged_at}) for {url}")]
    Integrity {
        url: String,
        activity: DateTime<Utc>,
        merged_at: DateTime<Utc>,
    },

    #[error("Failed to render report: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A defect confined to one merge request; the record is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid `{field}` timestamp {value:?} by {author} ({url})")]
    InvalidTimestamp {
        author: String,
        url: String,
        field: &'static str,
        value: String,
    },

    #[error("Missing `{field}` timestamp by {author} ({url})")]
    MissingTimestamp {
        author: String,
        url: String,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, MetricsError>;
