use crate::analyze::CycleTime;
use crate::model::MergeRequestRecord;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;

/// Merge requests merged in one ISO week, in the order they were read.
pub type WeekBuckets = BTreeMap<u32, Vec<AnalyzedMergeRequest>>;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedMergeRequest {
    pub id: String,
    pub author: String,
    pub discussions_count: usize,
    pub notes_count: usize,
    pub commits_count: usize,
    pub url: String,
    pub review_time_days: f64,
    pub commit_to_creation_days: f64,
    pub total_cycle_time_days: f64,
}

impl AnalyzedMergeRequest {
    pub fn new(record: &MergeRequestRecord, cycle_time: &CycleTime) -> Self {
        Self {
            id: record.id.clone(),
            author: record.author.clone(),
            discussions_count: record.discussions_count,
            notes_count: record.notes_count,
            commits_count: record.commit_dates.len(),
            url: record.url.clone(),
            review_time_days: cycle_time.review_time_days,
            commit_to_creation_days: cycle_time.commit_to_creation_days,
            total_cycle_time_days: cycle_time.total_cycle_time_days,
        }
    }
}

impl fmt::Display for AnalyzedMergeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id: {}, author: {}, discussions: {}, notes: {}, commits: {}, url: {}, \
             review_days: {:.2}, commit_to_creation_days: {:.2}, total_cycle_days: {:.2}}}",
            self.id,
            self.author,
            self.discussions_count,
            self.notes_count,
            self.commits_count,
            self.url,
            self.review_time_days,
            self.commit_to_creation_days,
            self.total_cycle_time_days,
        )
    }
}

/// Analyzed merge requests by team (in roster order), then by ISO week.
///
/// Only the [`Aggregator`](crate::analyze::Aggregator) adds to a report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub(super) teams: IndexMap<String, WeekBuckets>,
}

impl Report {
    pub fn teams(&self) -> impl Iterator<Item = (&String, &WeekBuckets)> {
        self.teams.iter()
    }

    pub fn team(&self, name: &str) -> Option<&WeekBuckets> {
        self.teams.get(name)
    }

    /// Total analyzed merge requests across all teams and weeks.
    pub fn len(&self) -> usize {
        self.teams
            .values()
            .flat_map(|weeks| weeks.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
impl Report {
    pub fn week(&self, team: &str, week: u32) -> Option<&[AnalyzedMergeRequest]> {
        self.team(team)?.get(&week).map(Vec::as_slice)
    }

    pub fn has_team(&self, name: &str) -> bool {
        self.teams.contains_key(name)
    }
}
