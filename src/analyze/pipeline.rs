use crate::analyze::{
    Aggregator, AnalyzedMergeRequest, CycleTimeCalculator, MembershipIndex, Placement, Report,
};
use crate::model::{MergeRequestExport, Result, Team};
use tracing::{debug, warn};

/// One export file together with the roster paired to it, if any.
#[derive(Debug, Clone)]
pub struct Batch {
    pub name: String,
    pub roster: Option<Vec<Team>>,
    pub export: MergeRequestExport,
}

pub type BatchProgress<'a> = Box<dyn FnMut(&Batch) + 'a>;

/// Runs every batch in order and returns the finished report.
///
/// A batch carrying a roster replaces the active membership index; a batch
/// without one reuses the previous index. The first loading error or
/// integrity violation aborts the run.
pub fn analyze_batches<'a, I>(batches: I, mut progress: BatchProgress<'a>) -> Result<Report>
where
    I: IntoIterator<Item = Result<Batch>>,
{
    let mut aggregator = Aggregator::new();
    let mut index = MembershipIndex::default();

    for batch in batches {
        let batch = batch?;
        if let Some(teams) = &batch.roster {
            index = MembershipIndex::from_teams(teams);
            aggregator.register_teams(teams);
            debug!(
                "{}: {} teams, {} members",
                batch.name,
                teams.len(),
                index.len()
            );
        }
        analyze_export(&batch, &index, &mut aggregator)?;
        progress(&batch);
    }

    Ok(aggregator.finish())
}

/// Files every valid record of one export and returns where each went.
fn analyze_export(
    batch: &Batch,
    index: &MembershipIndex,
    aggregator: &mut Aggregator,
) -> Result<Vec<Placement>> {
    let mut placements = Vec::new();
    for record in batch.export.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!("{}: skipping merge request: {}", batch.name, err);
                continue;
            }
        };
        let cycle_time = record.cycle_time()?;
        debug!(
            "{} [{}] {:?} week {} from {}: review {:.2}d, lag {:.2}d, cycle {:.2}d",
            record.url,
            record.state,
            record.title,
            cycle_time.iso_week,
            cycle_time.first_activity,
            cycle_time.review_time_days,
            cycle_time.commit_to_creation_days,
            cycle_time.total_cycle_time_days
        );
        let analyzed = AnalyzedMergeRequest::new(&record, &cycle_time);
        let placement = aggregator.insert(index, &record.author, cycle_time.iso_week, analyzed);
        if let Placement::Unattributed { author } = &placement {
            warn!("Team not found for {}; dropping {}", author, record.url);
        }
        placements.push(placement);
    }
    Ok(placements)
}
