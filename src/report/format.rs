//! Human-readable run summaries.

use std::collections::BTreeMap;

use crate::data::AllowList;
use crate::domain::{
    Channel, Era, SampleDecision, SampleTable, TagMode, TagStats,
};

/// Format the summary printed after a tagging pass.
pub fn format_tag_summary(
    table: &SampleTable,
    decisions: &BTreeMap<String, SampleDecision>,
    stats: &TagStats,
    era: Era,
    channel: Channel,
    mode: TagMode,
) -> String {
    let mut out = String::new();

    out.push_str("=== memprep - MC sample selection ===\n");
    out.push_str(&format!("Era: {}\n", era.display_name()));
    out.push_str(&format!("Channel: {}\n", channel.display_name()));
    out.push_str(&format!("Mode: {}\n", mode.display_name()));
    out.push_str(&format!(
        "Samples: {} tagged | {} selected | {} rejected\n",
        stats.n_tagged,
        stats.n_selected,
        stats.n_rejected()
    ));

    if mode == TagMode::Categorize && !stats.per_category.is_empty() {
        out.push_str("\nSelected per category:\n");
        for (category, count) in &stats.per_category {
            out.push_str(&format!("  {:<16} {count}\n", category.label()));
        }
    }

    out.push_str("\nSelected samples:\n");
    out.push_str(&format_selected_table(table, decisions));

    out
}

/// Format the built-in allow-list for an era/channel.
pub fn format_allowlist(list: &AllowList, era: Era, channel: Channel) -> String {
    let mut out = String::new();

    out.push_str("=== memprep - sample allow-list ===\n");
    out.push_str(&format!("Era: {}\n", era.display_name()));
    out.push_str(&format!("Channel: {}\n", channel.display_name()));
    out.push_str(&format!("Processes: {}\n", list.len()));

    for (category, names) in list.categories() {
        out.push_str(&format!("\n{}:\n", category.label()));
        if names.is_empty() {
            out.push_str("  (none)\n");
        }
        for name in names {
            out.push_str(&format!("  - {name}\n"));
        }
    }

    out
}

fn format_selected_table(
    table: &SampleTable,
    decisions: &BTreeMap<String, SampleDecision>,
) -> String {
    let mut out = String::new();
    out.push_str(
        format!("{:<40} {:<44} {:<14}\n", "sample", "process", "category").trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<40} {:-<44} {:-<14}\n", "", "", "").trim_end());
    out.push('\n');

    let mut any = false;
    for (sample_name, decision) in decisions {
        if !decision.use_it {
            continue;
        }
        any = true;
        let process = table
            .get(sample_name)
            .and_then(|r| r.process_name_specific.as_deref())
            .unwrap_or("");
        let category = decision.category.map(|c| c.label()).unwrap_or("-");
        out.push_str(
            format!(
                "{:<40} {:<44} {:<14}\n",
                truncate(sample_name, 40),
                truncate(process, 44),
                category
            )
            .trim_end(),
        );
        out.push('\n');
    }
    if !any {
        out.push_str("(none)\n");
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
