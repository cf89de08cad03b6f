use super::RankingRow;
use crate::compare::{ComparisonSlot, ComparisonView};
use crate::types::record::{CiStatus, RepositoryRecord};
use crate::types::scoring::ScoreBreakdown;

pub fn ranking_to_markdown(title: &str, rows: &[RankingRow<'_>]) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {title}\n\n"));
    if rows.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| # | Repository | Health | Stars | Language | Last commit | Good first issues | CI |\n");
    output.push_str("|---|---|---|---|---|---|---|---|\n");
    for row in rows {
        output.push_str(&format!(
            "| {} | {} | {} ({}) | {} | {} | {} | {} | {} |\n",
            row.rank,
            row.name,
            row.health_score,
            row.tier.label(),
            row.stars,
            row.language,
            row.last_commit,
            row.good_first_issues,
            ci_label(row.ci_status)
        ));
    }
    output
}

pub fn breakdown_to_markdown(record: &RepositoryRecord, breakdown: &ScoreBreakdown) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Health Score: {}\n\n", record.name));
    output.push_str(&format!(
        "Score: {} ({})\n\n",
        breakdown.score,
        breakdown.tier.label()
    ));
    output.push_str("| Signal | Raw | Weight | Contribution |\n");
    output.push_str("|---|---|---|---|\n");
    for row in &breakdown.contributions {
        output.push_str(&format!(
            "| {} | {} | {:.0}% | {:.2} |\n",
            row.signal,
            row.raw,
            row.weight * 100.0,
            row.contribution
        ));
    }
    output.push_str(&format!(
        "| total | | 100% | {:.2} |\n",
        breakdown.weighted_total
    ));
    output
}

pub fn comparison_to_markdown(view: &ComparisonView<'_>) -> String {
    let mut output = String::new();
    output.push_str("# Comparison\n\n");
    for (index, slot) in view.slots.iter().enumerate() {
        match slot {
            ComparisonSlot::Filled(entry) => {
                output.push_str(&format!(
                    "## Slot {}: {} ({} - {})\n\n",
                    index + 1,
                    entry.name,
                    entry.breakdown.score,
                    entry.breakdown.tier.label()
                ));
                for row in &entry.breakdown.contributions {
                    output.push_str(&format!("- {}: {}\n", row.signal, row.raw));
                }
                let metrics = &entry.metrics;
                output.push_str(&format!(
                    "- stars: {}\n- last commit: {}\n- good first issues: {}\n- contributors: {}\n- language: {}\n- license: {}\n\n",
                    metrics.stars,
                    metrics.last_commit,
                    metrics.good_first_issues,
                    metrics.contributors,
                    metrics.language,
                    metrics.license
                ));
            }
            ComparisonSlot::Empty => {
                output.push_str(&format!("## Slot {}: empty\n\n", index + 1));
            }
        }
    }
    output
}

fn ci_label(status: CiStatus) -> &'static str {
    match status {
        CiStatus::Passing => "passing",
        CiStatus::Failing => "failing",
        CiStatus::Warning => "warning",
    }
}
