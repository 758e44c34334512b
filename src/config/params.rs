//! Typed parameter-set templates.
//!
//! One `MemJobConfig` document corresponds to one job of a MEM executable:
//! input file list, output file, and the analysis block with event limits,
//! smearing settings, and generator-level branch names. The constructors
//! bake in the template defaults for each decay channel; callers override
//! individual fields and serialize the result for the executable.

use serde::{Deserialize, Serialize};

use crate::domain::{Era, MemChannel};
use crate::error::AppError;

/// Input-side framework parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FwliteInput {
    /// Input ROOT files. Empty in a template; filled per job.
    pub file_names: Vec<String>,
    /// Maximum events to read; -1 reads everything.
    pub max_events: i32,
    /// Progress-print period in events.
    pub output_every: u32,
}

/// Output-side framework parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FwliteOutput {
    pub file_name: String,
}

/// Generator-level branch names the executable reads from the input tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNames {
    pub gen_leptons: String,
    pub gen_neutrinos: String,
    pub gen_jets: String,

    // Specific to the HH signal hypothesis.
    pub gen_particles_from_higgs: String,

    // Specific to the ttbar background hypothesis.
    pub gen_leptons_from_top: String,
    pub gen_neutrinos_from_top: String,
    pub gen_b_quarks_from_top: String,

    // Only the single-lepton executable reads hadronic W decays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gen_w_bosons: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gen_w_jets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gen_w_jets_from_top: Option<String>,
}

impl BranchNames {
    fn common() -> Self {
        Self {
            gen_leptons: "GenLep".to_string(),
            gen_neutrinos: "GenNu".to_string(),
            gen_jets: "GenJet".to_string(),
            gen_particles_from_higgs: "GenHiggsDaughters".to_string(),
            gen_leptons_from_top: "GenLepFromTop".to_string(),
            gen_neutrinos_from_top: "GenNuFromTop".to_string(),
            gen_b_quarks_from_top: "GenBQuarkFromTop".to_string(),
            gen_w_bosons: None,
            gen_w_jets: None,
            gen_w_jets_from_top: None,
        }
    }

    fn single_lepton() -> Self {
        Self {
            gen_w_bosons: Some("GenVbosons".to_string()),
            gen_w_jets: Some("GenWZQuark".to_string()),
            gen_w_jets_from_top: Some("GenQuarkFromTop".to_string()),
            ..Self::common()
        }
    }
}

/// The analysis block of a MEM job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Which executable this block is for.
    pub channel: MemChannel,
    pub tree_name: String,

    /// Selected events to skip before processing starts.
    pub skip_sel_events: i32,
    /// Cap on processed selected events; the MEM integration is expensive
    /// enough that jobs are normally limited.
    pub max_sel_events: i32,

    /// Process label for bookkeeping in the output file.
    pub process: String,
    pub histogram_dir: String,
    pub era: Era,

    pub apply_jet_smearing: bool,
    /// Jet pT resolution coefficient: sigma = coeff * sqrt(max(1, pT)).
    pub jet_smearing_coeff: f64,
    pub apply_met_smearing: bool,
    /// MET resolution along x, GeV.
    pub met_smearing_sigma_x: f64,
    /// MET resolution along y, GeV.
    pub met_smearing_sigma_y: f64,

    pub apply_gen_weight: bool,
    pub has_lhe: bool,

    pub branches: BranchNames,

    pub sel_events_file_input: String,
    pub sel_events_file_output: String,

    pub is_debug: bool,
}

impl AnalysisParams {
    /// Template defaults for the dilepton executable.
    pub fn dilepton_defaults(era: Era) -> Self {
        Self {
            channel: MemChannel::Dilepton,
            tree_name: "Events".to_string(),
            skip_sel_events: 0,
            max_sel_events: 1000,
            process: String::new(),
            histogram_dir: String::new(),
            era,
            apply_jet_smearing: true,
            jet_smearing_coeff: 1.00,
            apply_met_smearing: true,
            met_smearing_sigma_x: 10.0,
            met_smearing_sigma_y: 10.0,
            apply_gen_weight: true,
            has_lhe: true,
            branches: BranchNames::common(),
            sel_events_file_input: String::new(),
            sel_events_file_output: String::new(),
            is_debug: false,
        }
    }

    /// Template defaults for the single-lepton executable.
    pub fn single_lepton_defaults(era: Era) -> Self {
        Self {
            channel: MemChannel::SingleLepton,
            branches: BranchNames::single_lepton(),
            ..Self::dilepton_defaults(era)
        }
    }

    /// Check the numeric settings an executable would choke on.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.apply_jet_smearing
            && !(self.jet_smearing_coeff.is_finite() && self.jet_smearing_coeff >= 0.0)
        {
            return Err(AppError::config(format!(
                "Invalid jet smearing coefficient {}.",
                self.jet_smearing_coeff
            )));
        }
        if self.apply_met_smearing {
            for (label, sigma) in [
                ("sigmaX", self.met_smearing_sigma_x),
                ("sigmaY", self.met_smearing_sigma_y),
            ] {
                if !(sigma.is_finite() && sigma >= 0.0) {
                    return Err(AppError::config(format!(
                        "Invalid MET smearing {label} {sigma}."
                    )));
                }
            }
        }
        if self.skip_sel_events < 0 {
            return Err(AppError::config(format!(
                "skip_sel_events must be >= 0, got {}.",
                self.skip_sel_events
            )));
        }
        Ok(())
    }
}

/// A complete MEM job document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemJobConfig {
    pub fwlite_input: FwliteInput,
    pub fwlite_output: FwliteOutput,
    pub analysis: AnalysisParams,
}

impl MemJobConfig {
    /// The job template for a decay channel and era.
    pub fn template(channel: MemChannel, era: Era) -> Self {
        let (analysis, output_every) = match channel {
            MemChannel::Dilepton => (AnalysisParams::dilepton_defaults(era), 1),
            // The single-lepton executable runs over far more events per
            // selected event, so the template prints progress less often.
            MemChannel::SingleLepton => (AnalysisParams::single_lepton_defaults(era), 100),
        };
        Self {
            fwlite_input: FwliteInput {
                file_names: Vec::new(),
                max_events: -1,
                output_every,
            },
            fwlite_output: FwliteOutput {
                file_name: String::new(),
            },
            analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dilepton_template_matches_defaults() {
        let job = MemJobConfig::template(MemChannel::Dilepton, Era::Y2017);

        assert_eq!(job.fwlite_input.max_events, -1);
        assert_eq!(job.fwlite_input.output_every, 1);
        assert!(job.fwlite_input.file_names.is_empty());

        let a = &job.analysis;
        assert_eq!(a.tree_name, "Events");
        assert_eq!(a.skip_sel_events, 0);
        assert_eq!(a.max_sel_events, 1000);
        assert_eq!(a.era, Era::Y2017);
        assert!(a.apply_jet_smearing);
        assert!((a.jet_smearing_coeff - 1.0).abs() < f64::EPSILON);
        assert!((a.met_smearing_sigma_x - 10.0).abs() < f64::EPSILON);
        assert!((a.met_smearing_sigma_y - 10.0).abs() < f64::EPSILON);
        assert!(a.apply_gen_weight);
        assert!(a.has_lhe);
        assert!(!a.is_debug);
        assert_eq!(a.branches.gen_leptons, "GenLep");
        assert_eq!(a.branches.gen_particles_from_higgs, "GenHiggsDaughters");
        assert_eq!(a.branches.gen_b_quarks_from_top, "GenBQuarkFromTop");
        assert_eq!(a.branches.gen_w_bosons, None);
    }

    #[test]
    fn single_lepton_template_adds_hadronic_w_branches() {
        let job = MemJobConfig::template(MemChannel::SingleLepton, Era::Y2016);

        assert_eq!(job.fwlite_input.output_every, 100);
        let b = &job.analysis.branches;
        assert_eq!(b.gen_w_bosons.as_deref(), Some("GenVbosons"));
        assert_eq!(b.gen_w_jets.as_deref(), Some("GenWZQuark"));
        assert_eq!(b.gen_w_jets_from_top.as_deref(), Some("GenQuarkFromTop"));
        // The shared branches are unchanged.
        assert_eq!(b.gen_jets, "GenJet");
        assert_eq!(job.analysis.era, Era::Y2016);
    }

    #[test]
    fn dilepton_document_omits_single_lepton_branches() {
        let job = MemJobConfig::template(MemChannel::Dilepton, Era::Y2017);
        let value = serde_json::to_value(&job).unwrap();
        let branches = &value["analysis"]["branches"];
        assert!(branches.get("gen_w_bosons").is_none());
        assert!(branches.get("gen_w_jets_from_top").is_none());
        assert_eq!(value["analysis"]["channel"], "dilepton");
    }

    #[test]
    fn job_config_round_trips_through_json() {
        let job = MemJobConfig::template(MemChannel::SingleLepton, Era::Y2017);
        let text = serde_json::to_string_pretty(&job).unwrap();
        let back: MemJobConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn validate_rejects_bad_smearing_settings() {
        let mut a = AnalysisParams::dilepton_defaults(Era::Y2017);
        a.met_smearing_sigma_x = f64::NAN;
        let err = a.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("sigmaX"), "message: {err}");

        // Disabled smearing is not validated: the executable ignores it.
        a.apply_met_smearing = false;
        assert!(a.validate().is_ok());

        a.jet_smearing_coeff = -1.0;
        let err = a.validate().unwrap_err();
        assert!(err.to_string().contains("jet smearing"), "message: {err}");
    }
}
