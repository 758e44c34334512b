//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - read from the sample-table JSON owned by the per-era samples module
//! - tagged in memory without hidden mutation
//! - written back out for the downstream MEM executables

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Reserved key for the aggregate event-count bookkeeping entry.
///
/// The entry under this key is never a real MC sample: the tagger skips it and
/// never assigns it a `use_it` flag or a category.
pub const SUM_EVENTS_KEY: &str = "sum_events";

/// Run period of the experiment. Each era has its own validated sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Era {
    #[serde(rename = "2016")]
    #[value(name = "2016")]
    Y2016,
    #[serde(rename = "2017")]
    #[value(name = "2017")]
    Y2017,
}

impl Era {
    pub const ALL: [Era; 2] = [Era::Y2016, Era::Y2017];

    /// Era label as it appears in sample lists and parameter sets.
    pub fn display_name(self) -> &'static str {
        match self {
            Era::Y2016 => "2016",
            Era::Y2017 => "2017",
        }
    }
}

/// Analysis channel a sample selection is prepared for.
///
/// `Inclusive` selections feed the single-lepton and dilepton MEM studies
/// alike; `Dilepton` restricts to the samples validated for the dilepton
/// performance plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Inclusive,
    Dilepton,
}

impl Channel {
    pub fn display_name(self) -> &'static str {
        match self {
            Channel::Inclusive => "inclusive",
            Channel::Dilepton => "dilepton",
        }
    }
}

/// Decay channel of a compiled MEM executable.
///
/// This is a different axis than [`Channel`]: parameter-set templates exist
/// for the dilepton and single-lepton executables, while sample selections
/// are inclusive or dilepton-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MemChannel {
    Dilepton,
    SingleLepton,
}

impl MemChannel {
    pub fn display_name(self) -> &'static str {
        match self {
            MemChannel::Dilepton => "dilepton",
            MemChannel::SingleLepton => "single-lepton",
        }
    }

    /// Name of the analysis parameter-set block the executable looks up.
    pub fn analysis_name(self) -> &'static str {
        match self {
            MemChannel::Dilepton => "analyze_hh_bbwwMEM_dilepton",
            MemChannel::SingleLepton => "analyze_hh_bbwwMEM_singlelepton",
        }
    }
}

/// Coarse category assigned to a selected sample in the categorizing variant.
///
/// LO/NLO refer to the perturbative order of the simulated process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleCategory {
    SignalLo,
    SignalNlo,
    BackgroundLo,
    BackgroundNlo,
}

impl SampleCategory {
    pub const ALL: [SampleCategory; 4] = [
        SampleCategory::SignalLo,
        SampleCategory::SignalNlo,
        SampleCategory::BackgroundLo,
        SampleCategory::BackgroundNlo,
    ];

    /// Label as written into tagged tables and decision exports.
    pub fn label(self) -> &'static str {
        match self {
            SampleCategory::SignalLo => "signal_lo",
            SampleCategory::SignalNlo => "signal_nlo",
            SampleCategory::BackgroundLo => "background_lo",
            SampleCategory::BackgroundNlo => "background_nlo",
        }
    }
}

/// One record of the sample table.
///
/// Only the fields the tagger touches are modeled explicitly. Everything else
/// the samples module ships (file lists, cross sections, trigger bits, ...)
/// is preserved verbatim in `extra` so a read→tag→write round trip never
/// drops metadata the downstream tooling may rely on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Identifier of the exact simulated physical process.
    ///
    /// Absent on the `sum_events` bookkeeping entry; absence on a real sample
    /// is a fatal data error at tagging time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_name_specific: Option<String>,

    /// Whether this sample enters the current analysis pass. Written by
    /// [`merge_decisions`](crate::select::merge_decisions), never read by the
    /// tagger itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_it: Option<bool>,

    /// Category assigned by a categorizing pass. Absent for rejected samples
    /// and for use-flags-only passes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_category: Option<SampleCategory>,

    /// Pass-through metadata, kept byte-for-byte.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SampleRecord {
    /// Convenience constructor used in tests and fixtures.
    pub fn with_process(process_name_specific: impl Into<String>) -> Self {
        Self {
            process_name_specific: Some(process_name_specific.into()),
            ..Self::default()
        }
    }
}

/// Mapping from sample name to its record, as owned by the per-era samples
/// module. `BTreeMap` keeps iteration (and therefore reports and serialized
/// output) deterministic.
pub type SampleTable = BTreeMap<String, SampleRecord>;

/// How the tagger annotates selected samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagMode {
    /// Only set the `use_it` flag.
    UseFlagsOnly,
    /// Set `use_it` and assign each selected sample its category.
    Categorize,
}

impl TagMode {
    pub fn display_name(self) -> &'static str {
        match self {
            TagMode::UseFlagsOnly => "use-flags-only",
            TagMode::Categorize => "categorized",
        }
    }
}

/// The tagger's verdict for a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDecision {
    pub use_it: bool,
    /// Set iff the sample was selected by a categorizing pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SampleCategory>,
}

/// Aggregate counts over one tagging pass (excludes the `sum_events` entry).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagStats {
    /// Number of samples that received a decision.
    pub n_tagged: usize,
    /// Number of samples with `use_it = true`.
    pub n_selected: usize,
    /// Selected-sample counts per category (empty for use-flags-only passes).
    pub per_category: BTreeMap<SampleCategory, usize>,
}

impl TagStats {
    pub fn n_rejected(&self) -> usize {
        self.n_tagged - self.n_selected
    }
}
