use crate::analyze::{AnalyzedMergeRequest, Report, WeekSummary};
use crate::model::{MetricsError, Result};
use itertools::Itertools;
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use std::fs;
use std::path::{Path, PathBuf};

const COLUMNS: [&str; 8] = [
    "Author",
    "Commits",
    "Discussions",
    "Notes",
    "Review (days)",
    "Commit to MR (days)",
    "Cycle time (days)",
    "Link",
];

pub trait MarkdownReport {
    /// Renders one team's weeks, or `None` for a team not in the report.
    fn render_team(&self, team: &str) -> Option<Result<String>>;

    /// Writes `<team>.md` into `dir` and returns its path.
    fn report_create(&self, team: &str, dir: &Path) -> Result<PathBuf>;
}

impl MarkdownReport for Report {
    fn render_team(&self, team: &str) -> Option<Result<String>> {
        let weeks = self.team(team)?;
        let mut doc = Markdown::new();

        doc.header1(team);
        if weeks.is_empty() {
            doc.paragraph("No merged merge requests.".to_string());
        }
        for (week, merge_requests) in weeks {
            if let Err(err) = doc.add_week(*week, merge_requests) {
                return Some(Err(err));
            }
        }
        Some(Ok(doc.render()))
    }

    fn report_create(&self, team: &str, dir: &Path) -> Result<PathBuf> {
        let rendered = self
            .render_team(team)
            .ok_or_else(|| MetricsError::Render(format!("unknown team {team}")))??;
        let path = dir.join(format!("{}.md", team.replace(['/', '\\'], "-")));
        fs::write(&path, rendered)?;
        Ok(path)
    }
}

trait MarkdownExt {
    fn add_week(&mut self, week: u32, merge_requests: &[AnalyzedMergeRequest]) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_week(&mut self, week: u32, merge_requests: &[AnalyzedMergeRequest]) -> Result<()> {
        self.header2(format!("Week {week}"));

        let header = COLUMNS
            .iter()
            .map(|title| Heading::new(title.to_string(), Some(HeadingAlignment::Center)))
            .collect::<Vec<_>>();
        let table = merge_requests
            .iter()
            .map(|mr| {
                vec![
                    format!("**{}**", mr.author),
                    mr.commits_count.to_string(),
                    mr.discussions_count.to_string(),
                    mr.notes_count.to_string(),
                    format!("{:.2}", mr.review_time_days),
                    format!("{:.2}", mr.commit_to_creation_days),
                    format!("{:.2}", mr.total_cycle_time_days),
                    format!("[{}]({})", mr.id, mr.url),
                ]
            })
            .collect::<Vec<_>>();

        let mut md_table = MarkdownTable::new(table);
        md_table.with_headings(header);
        let rendered = md_table
            .as_markdown()
            .map_err(|_| MetricsError::Render(format!("table for week {week}")))?;
        self.paragraph(rendered);

        if let Some(summary) = WeekSummary::from_entries(merge_requests) {
            self.paragraph(summary_line(&summary, merge_requests));
        }
        Ok(())
    }
}

fn summary_line(summary: &WeekSummary, merge_requests: &[AnalyzedMergeRequest]) -> String {
    let authors = merge_requests.iter().map(|mr| mr.author.as_str()).unique().join(", ");
    format!(
        "**{}** merge requests by {} ({} commits, {} discussions, {} notes). \
         Mean review *{:.2}* days, commit to MR *{:.2}* days, cycle time *{:.2}* days.",
        summary.merge_requests,
        authors,
        summary.commits,
        summary.discussions,
        summary.notes,
        summary.mean_review_time_days,
        summary.mean_commit_to_creation_days,
        summary.mean_total_cycle_time_days,
    )
}
