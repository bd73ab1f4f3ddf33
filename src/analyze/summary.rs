use crate::analyze::AnalyzedMergeRequest;

/// Totals and mean durations for one (team, week) bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub merge_requests: usize,
    pub commits: usize,
    pub discussions: usize,
    pub notes: usize,
    pub mean_review_time_days: f64,
    pub mean_commit_to_creation_days: f64,
    pub mean_total_cycle_time_days: f64,
}

impl WeekSummary {
    /// `None` for an empty slice.
    pub fn from_entries(entries: &[AnalyzedMergeRequest]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let totals = entries.iter().fold(Totals::default(), |mut acc, mr| {
            acc.commits += mr.commits_count;
            acc.discussions += mr.discussions_count;
            acc.notes += mr.notes_count;
            acc.review += mr.review_time_days;
            acc.lag += mr.commit_to_creation_days;
            acc.cycle += mr.total_cycle_time_days;
            acc
        });
        let count = entries.len() as f64;
        Some(Self {
            merge_requests: entries.len(),
            commits: totals.commits,
            discussions: totals.discussions,
            notes: totals.notes,
            mean_review_time_days: totals.review / count,
            mean_commit_to_creation_days: totals.lag / count,
            mean_total_cycle_time_days: totals.cycle / count,
        })
    }
}

#[derive(Default)]
struct Totals {
    commits: usize,
    discussions: usize,
    notes: usize,
    review: f64,
    lag: f64,
    cycle: f64,
}
