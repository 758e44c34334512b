//! Command-line parsing for the HH->bbWW MEM preparation tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the tagging/configuration code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Channel, Era, MemChannel};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "memprep",
    version,
    about = "MC sample selection and job configuration for HH->bbWW MEM studies"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tag the samples of a table: decide use_it (and optionally the
    /// category) for every sample, print the selection summary.
    Tag(TagArgs),
    /// Print the built-in sample allow-list for an era and channel.
    List(ListArgs),
    /// Write a parameter-set JSON for one of the MEM executables.
    Config(ConfigArgs),
}

/// Options for tagging a sample table.
#[derive(Debug, Parser, Clone)]
pub struct TagArgs {
    /// Sample table JSON produced by the per-era samples module.
    #[arg(long, value_name = "JSON")]
    pub table: PathBuf,

    /// Run period the selection is for.
    #[arg(long, value_enum)]
    pub era: Era,

    /// Analysis channel the selection is for.
    #[arg(long, value_enum, default_value_t = Channel::Inclusive)]
    pub channel: Channel,

    /// Assign each selected sample its category (signal/background x LO/NLO).
    #[arg(long)]
    pub categorize: bool,

    /// Write the tagged table here. The input file is never modified.
    #[arg(short = 'o', long, value_name = "JSON")]
    pub output: Option<PathBuf>,

    /// Export the per-sample decisions to JSON.
    #[arg(long = "export-decisions", value_name = "JSON")]
    pub export_decisions: Option<PathBuf>,
}

/// Options for printing an allow-list.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Run period.
    #[arg(long, value_enum)]
    pub era: Era,

    /// Analysis channel.
    #[arg(long, value_enum, default_value_t = Channel::Inclusive)]
    pub channel: Channel,
}

/// Options for writing a MEM job parameter set.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Decay channel of the target executable.
    #[arg(long, value_enum)]
    pub channel: MemChannel,

    /// Run period.
    #[arg(long, value_enum)]
    pub era: Era,

    /// Output path for the parameter-set JSON.
    #[arg(short = 'o', long, value_name = "JSON")]
    pub output: PathBuf,

    /// Cap on processed selected events.
    #[arg(long)]
    pub max_sel_events: Option<i32>,

    /// Disable generator-level jet smearing.
    #[arg(long)]
    pub no_jet_smearing: bool,

    /// Jet pT resolution coefficient (sigma = coeff * sqrt(max(1, pT))).
    #[arg(long)]
    pub jet_smearing_coeff: Option<f64>,

    /// Disable generator-level MET smearing.
    #[arg(long)]
    pub no_met_smearing: bool,

    /// MET resolution along x, GeV.
    #[arg(long)]
    pub met_sigma_x: Option<f64>,

    /// MET resolution along y, GeV.
    #[arg(long)]
    pub met_sigma_y: Option<f64>,
}
