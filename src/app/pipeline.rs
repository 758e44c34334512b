//! Shared tagging pipeline used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! table load -> allow-list lookup -> tag -> merge -> stats
//!
//! The CLI can then focus on presentation and exports.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::data::AllowList;
use crate::domain::{Channel, Era, SampleDecision, SampleTable, TagMode, TagStats};
use crate::error::AppError;

/// One tagging request.
#[derive(Debug, Clone)]
pub struct TagJob {
    pub table_path: PathBuf,
    pub era: Era,
    pub channel: Channel,
    pub mode: TagMode,
}

/// All computed outputs of a single `memprep tag` run.
#[derive(Debug, Clone)]
pub struct TagRun {
    /// The table with decisions merged in (the input file stays untouched).
    pub table: SampleTable,
    /// Immutable per-sample decisions, keyed by sample name.
    pub decisions: BTreeMap<String, SampleDecision>,
    pub stats: TagStats,
}

/// Execute the full tagging pipeline and return the computed outputs.
pub fn run_tag(job: &TagJob) -> Result<TagRun, AppError> {
    // 1) Load the caller-owned table.
    let table = crate::io::read_sample_table(&job.table_path)?;

    run_tag_on_table(table, job.era, job.channel, job.mode)
}

/// Execute the tagging pipeline on an in-memory table.
///
/// This is useful for callers that already hold the table (tests, batch
/// tooling embedding the library).
pub fn run_tag_on_table(
    mut table: SampleTable,
    era: Era,
    channel: Channel,
    mode: TagMode,
) -> Result<TagRun, AppError> {
    // 2) Look up the validated allow-list for the configuration.
    let allowlist = AllowList::builtin(era, channel)?;

    // 3) Tag: produces immutable decisions, leaves the table as read.
    let decisions = crate::select::tag_samples(&table, &allowlist, mode)?;

    // 4) Merge decisions into our copy.
    crate::select::merge_decisions(&mut table, &decisions);

    // 5) Aggregate counts for the report.
    let stats = crate::select::tag_stats(&decisions);

    Ok(TagRun {
        table,
        decisions,
        stats,
    })
}
