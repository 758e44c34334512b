//! Write per-sample decision exports.
//!
//! The export is the portable record of one tagging pass: which tool made
//! it, for which era/channel/mode, when, and the decision for every sample.
//! Downstream scripts can consume it without re-reading the full table.
//!
//! The schema is defined by [`DecisionsFile`].

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{Channel, Era, SampleDecision, TagMode};
use crate::error::AppError;

/// A decisions export file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionsFile {
    pub tool: String,
    pub era: Era,
    pub channel: Channel,
    pub mode: TagMode,
    pub date: NaiveDate,
    pub decisions: BTreeMap<String, SampleDecision>,
}

/// Write a decisions JSON file, stamped with today's date.
pub fn write_decisions_json(
    path: &Path,
    era: Era,
    channel: Channel,
    mode: TagMode,
    decisions: &BTreeMap<String, SampleDecision>,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!(
            "Failed to create decisions JSON '{}': {e}",
            path.display()
        ))
    })?;

    let doc = DecisionsFile {
        tool: "memprep".to_string(),
        era,
        channel,
        mode,
        date: Local::now().date_naive(),
        decisions: decisions.clone(),
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::config(format!("Failed to write decisions JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SampleCategory;

    #[test]
    fn decisions_file_serializes_with_run_metadata() {
        let mut decisions = BTreeMap::new();
        decisions.insert(
            "TTJets_DiLept".to_string(),
            SampleDecision {
                use_it: true,
                category: Some(SampleCategory::BackgroundLo),
            },
        );
        decisions.insert(
            "DYJetsToLL_M-50".to_string(),
            SampleDecision {
                use_it: false,
                category: None,
            },
        );

        let doc = DecisionsFile {
            tool: "memprep".to_string(),
            era: Era::Y2016,
            channel: Channel::Dilepton,
            mode: TagMode::Categorize,
            date: NaiveDate::from_ymd_opt(2017, 3, 1).unwrap(),
            decisions,
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["era"], "2016");
        assert_eq!(value["channel"], "dilepton");
        assert_eq!(value["mode"], "categorize");
        assert_eq!(
            value["decisions"]["TTJets_DiLept"]["category"],
            "background_lo"
        );
        // Rejected samples serialize without a category key.
        assert!(
            value["decisions"]["DYJetsToLL_M-50"]
                .get("category")
                .is_none()
        );
    }
}
