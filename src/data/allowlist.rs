//! Per-era, per-channel MC sample allow-lists.
//!
//! An [`AllowList`] partitions the selectable `process_name_specific` values
//! into the four sample categories. The built-in combinations reflect which
//! simulated datasets were validated for each run period and channel; they
//! are data, not logic.

use crate::domain::{Channel, Era, SampleCategory};
use crate::error::AppError;

// HH signal hypotheses.
const SIGNAL_HH_LO: &str = "signal_ggf_nonresonant_node_sm_hh_2b2v";
const SIGNAL_HH_NLO: &str = "signal_ggf_nonresonant_cHHH1_hh_2b2v";

// ttbar background datasets.
const TT_DILEPT_LO: &str = "TTJets_DiLept";
// Extension dataset with additional event statistics.
const TT_DILEPT_LO_EXT: &str = "TTJets_DiLept_ext1";
const TT_2L2NU_NLO: &str = "TTTo2L2Nu";
const TT_2L2NU_NLO_PSWEIGHTS: &str = "TTTo2L2Nu_PSweights";

/// Allowed `process_name_specific` values, partitioned by category.
///
/// The four sub-lists must be disjoint: a process name appearing twice would
/// make the category of a selected sample ambiguous, so construction and
/// tagging both reject it.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    pub signal_lo: Vec<String>,
    pub signal_nlo: Vec<String>,
    pub background_lo: Vec<String>,
    pub background_nlo: Vec<String>,
}

impl AllowList {
    /// Build an allow-list from the four category sub-lists, rejecting
    /// duplicated process names.
    pub fn new(
        signal_lo: Vec<String>,
        signal_nlo: Vec<String>,
        background_lo: Vec<String>,
        background_nlo: Vec<String>,
    ) -> Result<Self, AppError> {
        let list = Self {
            signal_lo,
            signal_nlo,
            background_lo,
            background_nlo,
        };
        list.validate()?;
        Ok(list)
    }

    /// The validated sample list for a run period and channel.
    ///
    /// Not every combination exists: only selections that were actually
    /// validated are available, and asking for anything else is a
    /// configuration error rather than a silent fallback.
    pub fn builtin(era: Era, channel: Channel) -> Result<Self, AppError> {
        match (era, channel) {
            // The dilepton selection for 2016 uses the same datasets as the
            // inclusive one; the channels differ in how decisions are used
            // downstream, not in which samples are validated.
            (Era::Y2016, Channel::Inclusive) | (Era::Y2016, Channel::Dilepton) => Self::new(
                vec![SIGNAL_HH_LO.to_string()],
                vec![SIGNAL_HH_NLO.to_string()],
                vec![TT_DILEPT_LO.to_string(), TT_DILEPT_LO_EXT.to_string()],
                vec![TT_2L2NU_NLO.to_string()],
            ),
            (Era::Y2017, Channel::Inclusive) => Self::new(
                vec![SIGNAL_HH_LO.to_string()],
                vec![],
                vec![],
                vec![
                    TT_2L2NU_NLO.to_string(),
                    TT_2L2NU_NLO_PSWEIGHTS.to_string(),
                ],
            ),
            (Era::Y2017, Channel::Dilepton) => Err(AppError::config(format!(
                "No validated sample list for era {} in the {} channel.",
                era.display_name(),
                channel.display_name()
            ))),
        }
    }

    /// Check that no process name appears in more than one sub-list.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen: Vec<&str> = Vec::new();
        for (_, names) in self.categories() {
            for name in names {
                if seen.contains(&name.as_str()) {
                    return Err(AppError::config(format!(
                        "Process '{name}' appears in more than one category sub-list."
                    )));
                }
                seen.push(name);
            }
        }
        Ok(())
    }

    /// Category of a process name, or `None` if the process is not selected.
    pub fn category_of(&self, process_name_specific: &str) -> Option<SampleCategory> {
        self.categories()
            .into_iter()
            .find(|(_, names)| names.iter().any(|n| n == process_name_specific))
            .map(|(category, _)| category)
    }

    pub fn contains(&self, process_name_specific: &str) -> bool {
        self.category_of(process_name_specific).is_some()
    }

    /// The sub-lists in fixed category order.
    pub fn categories(&self) -> [(SampleCategory, &[String]); 4] {
        [
            (SampleCategory::SignalLo, self.signal_lo.as_slice()),
            (SampleCategory::SignalNlo, self.signal_nlo.as_slice()),
            (SampleCategory::BackgroundLo, self.background_lo.as_slice()),
            (SampleCategory::BackgroundNlo, self.background_nlo.as_slice()),
        ]
    }

    /// Total number of selectable process names.
    pub fn len(&self) -> usize {
        self.categories().iter().map(|(_, names)| names.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_2016_lists_all_five_datasets() {
        for channel in [Channel::Inclusive, Channel::Dilepton] {
            let list = AllowList::builtin(Era::Y2016, channel).unwrap();
            assert_eq!(list.len(), 5, "2016 {} selection", channel.display_name());
            assert_eq!(
                list.category_of(SIGNAL_HH_LO),
                Some(SampleCategory::SignalLo)
            );
            assert_eq!(
                list.category_of(SIGNAL_HH_NLO),
                Some(SampleCategory::SignalNlo)
            );
            assert_eq!(
                list.category_of(TT_DILEPT_LO_EXT),
                Some(SampleCategory::BackgroundLo)
            );
            assert_eq!(
                list.category_of(TT_2L2NU_NLO),
                Some(SampleCategory::BackgroundNlo)
            );
        }
    }

    #[test]
    fn builtin_2017_inclusive_has_no_nlo_signal() {
        let list = AllowList::builtin(Era::Y2017, Channel::Inclusive).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.signal_nlo.is_empty());
        assert!(list.background_lo.is_empty());
        assert_eq!(
            list.category_of(TT_2L2NU_NLO_PSWEIGHTS),
            Some(SampleCategory::BackgroundNlo)
        );
        assert!(!list.contains(SIGNAL_HH_NLO));
    }

    #[test]
    fn builtin_2017_dilepton_is_rejected() {
        let err = AllowList::builtin(Era::Y2017, Channel::Dilepton).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("2017"), "message: {err}");
    }

    #[test]
    fn duplicate_process_across_sublists_is_rejected() {
        let err = AllowList::new(
            vec![SIGNAL_HH_LO.to_string()],
            vec![SIGNAL_HH_LO.to_string()],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(
            err.to_string().contains(SIGNAL_HH_LO),
            "error must name the duplicated process, got: {err}"
        );
    }

    #[test]
    fn duplicate_within_one_sublist_is_rejected() {
        let err = AllowList::new(
            vec![],
            vec![],
            vec![TT_DILEPT_LO.to_string(), TT_DILEPT_LO.to_string()],
            vec![],
        )
        .unwrap_err();
        assert!(err.to_string().contains(TT_DILEPT_LO));
    }

    #[test]
    fn category_of_unknown_process_is_none() {
        let list = AllowList::builtin(Era::Y2016, Channel::Inclusive).unwrap();
        assert_eq!(list.category_of("DY"), None);
        assert_eq!(list.category_of("unknown_process"), None);
        // Matching is exact: no case folding, no prefixes.
        assert_eq!(list.category_of("ttto2l2nu"), None);
        assert_eq!(list.category_of("TTJets_DiLept_ext"), None);
    }
}
