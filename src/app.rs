//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the tagging pipeline and prints the selection summary
//! - writes optional exports (tagged table, decisions, parameter sets)

use clap::Parser;

use crate::cli::{Cli, Command, ConfigArgs, ListArgs, TagArgs};
use crate::domain::TagMode;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `memprep` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Tag(args) => handle_tag(args),
        Command::List(args) => handle_list(args),
        Command::Config(args) => handle_config(args),
    }
}

fn handle_tag(args: TagArgs) -> Result<(), AppError> {
    let job = pipeline::TagJob {
        table_path: args.table.clone(),
        era: args.era,
        channel: args.channel,
        mode: if args.categorize {
            TagMode::Categorize
        } else {
            TagMode::UseFlagsOnly
        },
    };
    let run = pipeline::run_tag(&job)?;

    println!(
        "{}",
        crate::report::format_tag_summary(
            &run.table,
            &run.decisions,
            &run.stats,
            job.era,
            job.channel,
            job.mode
        )
    );

    // Optional exports.
    if let Some(path) = &args.export_decisions {
        crate::io::write_decisions_json(path, job.era, job.channel, job.mode, &run.decisions)?;
    }
    if let Some(path) = &args.output {
        crate::io::write_sample_table(path, &run.table)?;
    }

    Ok(())
}

fn handle_list(args: ListArgs) -> Result<(), AppError> {
    let list = crate::data::AllowList::builtin(args.era, args.channel)?;
    println!(
        "{}",
        crate::report::format_allowlist(&list, args.era, args.channel)
    );
    Ok(())
}

fn handle_config(args: ConfigArgs) -> Result<(), AppError> {
    let mut job = crate::config::MemJobConfig::template(args.channel, args.era);

    if args.no_jet_smearing {
        job.analysis.apply_jet_smearing = false;
    }
    if let Some(coeff) = args.jet_smearing_coeff {
        job.analysis.jet_smearing_coeff = coeff;
    }
    if args.no_met_smearing {
        job.analysis.apply_met_smearing = false;
    }
    if let Some(sigma) = args.met_sigma_x {
        job.analysis.met_smearing_sigma_x = sigma;
    }
    if let Some(sigma) = args.met_sigma_y {
        job.analysis.met_smearing_sigma_y = sigma;
    }
    if let Some(n) = args.max_sel_events {
        job.analysis.max_sel_events = n;
    }
    job.analysis.validate()?;

    crate::io::write_params_json(&args.output, &job)?;
    println!(
        "Wrote {} parameter set for era {} to '{}'.",
        args.channel.display_name(),
        args.era.display_name(),
        args.output.display()
    );
    Ok(())
}
