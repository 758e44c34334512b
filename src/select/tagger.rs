//! The sample tagger.
//!
//! `tag_samples` is a pure function over the table: it returns an immutable
//! map from sample name to decision and leaves the input untouched. Callers
//! that want the decisions reflected in the table itself (the layout the
//! downstream executables read) apply `merge_decisions` afterwards.

use std::collections::BTreeMap;

use crate::data::AllowList;
use crate::domain::{
    SUM_EVENTS_KEY, SampleDecision, SampleTable, TagMode, TagStats,
};
use crate::error::AppError;

/// Decide `use_it` (and, in [`TagMode::Categorize`], the category) for every
/// sample in the table except the `sum_events` bookkeeping entry.
///
/// Matching is exact string equality against `process_name_specific`. A
/// sample without that field is a fatal data error; nothing is returned for
/// a table that is malformed anywhere.
pub fn tag_samples(
    table: &SampleTable,
    allowlist: &AllowList,
    mode: TagMode,
) -> Result<BTreeMap<String, SampleDecision>, AppError> {
    // Reject ambiguous lists before producing any decision, even if the
    // caller bypassed `AllowList::new`.
    allowlist.validate()?;

    let mut decisions = BTreeMap::new();
    for (sample_name, record) in table {
        if sample_name == SUM_EVENTS_KEY {
            continue;
        }

        let process = record.process_name_specific.as_deref().ok_or_else(|| {
            AppError::data(format!(
                "Sample '{sample_name}' has no process_name_specific field."
            ))
        })?;

        let decision = match allowlist.category_of(process) {
            Some(category) => SampleDecision {
                use_it: true,
                category: match mode {
                    TagMode::Categorize => Some(category),
                    TagMode::UseFlagsOnly => None,
                },
            },
            None => SampleDecision {
                use_it: false,
                category: None,
            },
        };
        decisions.insert(sample_name.clone(), decision);
    }

    Ok(decisions)
}

/// Write decisions into the table.
///
/// Existing `use_it`/`sample_category` values are overwritten, so re-tagging
/// with a different allow-list reflects only the new list; a use-flags-only
/// pass clears any category left over from an earlier categorized pass.
/// Samples without a decision (only `sum_events`, for decisions produced by
/// [`tag_samples`]) are untouched.
pub fn merge_decisions(table: &mut SampleTable, decisions: &BTreeMap<String, SampleDecision>) {
    for (sample_name, decision) in decisions {
        if let Some(record) = table.get_mut(sample_name) {
            record.use_it = Some(decision.use_it);
            record.sample_category = decision.category;
        }
    }
}

/// Aggregate counts for reporting.
pub fn tag_stats(decisions: &BTreeMap<String, SampleDecision>) -> TagStats {
    let mut stats = TagStats {
        n_tagged: decisions.len(),
        ..TagStats::default()
    };
    for decision in decisions.values() {
        if decision.use_it {
            stats.n_selected += 1;
        }
        if let Some(category) = decision.category {
            *stats.per_category.entry(category).or_insert(0) += 1;
        }
    }
    stats
}
