use crate::analyze::Report;
use std::io::{self, Write};

pub trait ConsoleReport {
    fn write_console(&self, out: &mut impl Write) -> io::Result<()>;
}

impl ConsoleReport for Report {
    fn write_console(&self, out: &mut impl Write) -> io::Result<()> {
        for (team, weeks) in self.teams() {
            writeln!(out, "Team: {team}")?;
            for (week, merge_requests) in weeks {
                writeln!(out, "Week: {week} ->")?;
                for merge_request in merge_requests {
                    writeln!(out, "\t{merge_request}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{Aggregator, AnalyzedMergeRequest, MembershipIndex};
    use crate::model::Team;

    #[test]
    fn test_console_layout() {
        let teams = vec![
            Team::new("Alpha", vec!["Dev1"]),
            Team::new("Beta", vec!["Dev2"]),
        ];
        let index = MembershipIndex::from_teams(&teams);
        let mut aggregator = Aggregator::new();
        aggregator.register_teams(&teams);
        aggregator.insert(
            &index,
            "Dev1",
            1,
            AnalyzedMergeRequest {
                id: "mr1".to_string(),
                author: "Dev1".to_string(),
                discussions_count: 0,
                notes_count: 1,
                commits_count: 1,
                url: "https://example.com/mr1".to_string(),
                review_time_days: 2.0,
                commit_to_creation_days: 1.0,
                total_cycle_time_days: 3.0,
            },
        );

        let mut out = Vec::new();
        aggregator.finish().write_console(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Team: Alpha\n\
             Week: 1 ->\n\
             \t{id: mr1, author: Dev1, discussions: 0, notes: 1, commits: 1, \
             url: https://example.com/mr1, review_days: 2.00, \
             commit_to_creation_days: 1.00, total_cycle_days: 3.00}\n\
             Team: Beta\n"
        );
    }
}
