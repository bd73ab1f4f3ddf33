use crate::model::{MergeRequestRecord, MetricsError, Result};
use chrono::{DateTime, Datelike, TimeDelta, Utc};

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CycleTime {
    pub first_activity: DateTime<Utc>,
    /// Creation to merge.
    pub review_time_days: f64,
    /// First commit to creation; zero without earlier commits.
    pub commit_to_creation_days: f64,
    /// First activity to merge.
    pub total_cycle_time_days: f64,
    /// ISO-8601 week of the merge.
    pub iso_week: u32,
}

pub trait CycleTimeCalculator {
    fn first_activity(&self) -> DateTime<Utc>;
    fn cycle_time(&self) -> Result<CycleTime>;
}

impl CycleTimeCalculator for MergeRequestRecord {
    fn first_activity(&self) -> DateTime<Utc> {
        self.commit_dates
            .iter()
            .copied()
            .fold(self.created_at, |earliest, date| earliest.min(date))
    }

    /// Fails with [`MetricsError::Integrity`] when any commit, or the
    /// earliest activity, is after the merge.
    fn cycle_time(&self) -> Result<CycleTime> {
        let first_activity = self.first_activity();
        let late_activity = self
            .commit_dates
            .iter()
            .copied()
            .find(|authored| *authored > self.merged_at)
            .or_else(|| (first_activity > self.merged_at).then_some(first_activity));
        if let Some(activity) = late_activity {
            return Err(MetricsError::Integrity {
                url: self.url.clone(),
                activity,
                merged_at: self.merged_at,
            });
        }

        Ok(CycleTime {
            first_activity,
            review_time_days: days(self.merged_at - self.created_at),
            commit_to_creation_days: days(self.created_at - first_activity),
            total_cycle_time_days: days(self.merged_at - first_activity),
            iso_week: self.merged_at.iso_week().week(),
        })
    }
}

fn days(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / MILLIS_PER_DAY
}
