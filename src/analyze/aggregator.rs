use crate::analyze::{AnalyzedMergeRequest, MembershipIndex, Report};
use crate::model::Team;

/// Where [`Aggregator::insert`] put a merge request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Filed { team: String, week: u32 },
    /// The author belongs to no registered team; the entry was dropped.
    Unattributed { author: String },
}

/// Builds a [`Report`] one analyzed merge request at a time.
#[derive(Debug, Default)]
pub struct Aggregator {
    report: Report,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bucket per team. Teams seen earlier keep their entries.
    pub fn register_teams<'a>(&mut self, teams: impl IntoIterator<Item = &'a Team>) {
        for team in teams {
            self.report.teams.entry(team.name.clone()).or_default();
        }
    }

    /// Files `analyzed` under the author's team and the merge week.
    /// Duplicates are kept in arrival order.
    pub fn insert(
        &mut self,
        index: &MembershipIndex,
        author: &str,
        week: u32,
        analyzed: AnalyzedMergeRequest,
    ) -> Placement {
        let bucket = index
            .team_of(author)
            .and_then(|team| self.report.teams.get_mut(team).map(|weeks| (team, weeks)));
        let Some((team, weeks)) = bucket else {
            return Placement::Unattributed {
                author: author.to_string(),
            };
        };
        weeks.entry(week).or_default().push(analyzed);
        Placement::Filed {
            team: team.to_string(),
            week,
        }
    }

    pub fn finish(self) -> Report {
        self.report
    }
}
