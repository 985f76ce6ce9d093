use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::catalog::Catalog;
use crate::scoring::{RiskTier, ScoreSummary, DISCLAIMER};
use crate::selection::FactorKind;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score as a multiplier: "1.30倍"
pub fn format_multiplier(score: f64) -> String {
    format!("{:.2}倍", score)
}

/// Format a single risk weight for a catalog badge: "2.2倍"
pub fn format_weight(risk: f64) -> String {
    format!("{:.1}倍", risk)
}

/// Format the overall reduction: "12.0% 低減"
pub fn format_reduction(percent: f64) -> String {
    format!("{:.1}% 低減", percent)
}

/// Format a single intervention's reduction: "44% 低減"
pub fn format_factor_reduction(percent: f64) -> String {
    format!("{:.0}% 低減", percent)
}

fn paint_tier(tier: RiskTier, use_colors: bool) -> String {
    let badge = format!("[{}]", tier.label());
    if !use_colors {
        return badge;
    }
    match tier {
        RiskTier::High => badge.red().bold().to_string(),
        RiskTier::Moderate => badge.yellow().bold().to_string(),
        RiskTier::SlightlyElevated => badge.yellow().to_string(),
        RiskTier::Standard => badge.green().to_string(),
    }
}

/// Multi-line summary: the three scores with tier badges, any advisories,
/// then the disclaimer.
pub fn format_summary(summary: &ScoreSummary, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let rows = [
        (
            "リスク要因",
            format_multiplier(summary.risk_score),
            paint_tier(summary.risk_tier, use_colors),
        ),
        (
            "予防効果",
            format_multiplier(summary.prevention_score),
            format_reduction(summary.risk_reduction_percent),
        ),
        (
            "総合リスク",
            format_multiplier(summary.combined_score),
            paint_tier(summary.combined_tier, use_colors),
        ),
    ];

    for (name, value, badge) in rows {
        let value = if use_colors {
            value.bold().to_string()
        } else {
            value
        };
        lines.push(format!("{}  {}  {}", name, value, badge));
    }

    for advisory in &summary.advisories {
        let msg = advisory.message();
        if use_colors {
            lines.push(msg.cyan().to_string());
        } else {
            lines.push(msg.to_string());
        }
    }

    lines.push(String::new());
    if use_colors {
        lines.push(DISCLAIMER.dimmed().to_string());
    } else {
        lines.push(DISCLAIMER.to_string());
    }

    lines.join("\n")
}

/// Format the selected-factor breakdown, one line per factor with the
/// running score before and after it.
pub fn format_breakdown(summary: &ScoreSummary) -> String {
    if summary.breakdown.is_empty() {
        return "No factors selected.".to_string();
    }

    summary
        .breakdown
        .iter()
        .map(|f| {
            format!(
                "{:<10} {:<22} x{:<5} {:.3} -> {:.3}",
                f.kind, f.id, f.weight, f.before, f.after
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the summary as tab-separated values for scripting
/// Columns: name, value, tier-or-percent (no headers, no colors)
pub fn format_tsv(summary: &ScoreSummary) -> String {
    [
        format!("risk\t{:.4}\t{}", summary.risk_score, summary.risk_tier.style_tier()),
        format!("prevention\t{:.4}\t{:.1}", summary.prevention_score, summary.risk_reduction_percent),
        format!(
            "combined\t{:.4}\t{}",
            summary.combined_score,
            summary.combined_tier.style_tier()
        ),
    ]
    .join("\n")
}

pub fn format_json(summary: &ScoreSummary) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format one catalog as a table: id, badge, label.
/// Risk badges show the weight, prevention badges the reduction.
pub fn format_factor_list(catalog: &Catalog, kind: FactorKind, use_colors: bool) -> String {
    let entries: Vec<(&str, String, &str)> = match kind {
        FactorKind::Risk => catalog
            .risks
            .iter()
            .map(|f| (f.id.as_str(), format_weight(f.risk), f.label.as_str()))
            .collect(),
        FactorKind::Prevention => catalog
            .preventions
            .iter()
            .map(|f| {
                (
                    f.id.as_str(),
                    format_factor_reduction(f.reduction_percent()),
                    f.label.as_str(),
                )
            })
            .collect(),
    };

    if entries.is_empty() {
        return "No factors in catalog.".to_string();
    }

    let id_width = entries.iter().map(|(id, _, _)| id.len()).max().unwrap_or(0);
    let badge_width = entries
        .iter()
        .map(|(_, badge, _)| badge.chars().count())
        .max()
        .unwrap_or(0);
    let separator = "  ";
    let fixed_width = id_width + badge_width + separator.len() * 2;
    let term_width = get_terminal_width();

    entries
        .iter()
        .map(|(id, badge, label)| {
            let label = match term_width {
                // Labels are mostly double-width characters
                Some(width) if width > fixed_width + 10 => {
                    truncate_label(label, (width - fixed_width) / 2)
                }
                Some(_) => truncate_label(label, 10),
                None => label.to_string(),
            };
            let id_padded = format!("{:<width$}", id, width = id_width);
            let badge_padded = format!("{:>width$}", badge, width = badge_width);

            if use_colors {
                format!(
                    "{}{}{}{}{}",
                    id_padded.cyan(),
                    separator,
                    badge_padded.bold(),
                    separator,
                    label
                )
            } else {
                format!("{}{}{}{}{}", id_padded, separator, badge_padded, separator, label)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::evaluate;
    use crate::selection::Selection;

    fn summary_for(risks: &[&str], preventions: &[&str]) -> ScoreSummary {
        let selection = Selection::from_ids(risks.iter().copied(), preventions.iter().copied());
        evaluate(&Catalog::default(), &selection)
    }

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(1.0), "1.00倍");
        assert_eq!(format_multiplier(1.3 * 0.72), "0.94倍");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(2.2), "2.2倍");
        assert_eq!(format_weight(1.0), "1.0倍");
    }

    #[test]
    fn test_format_reduction() {
        assert_eq!(format_reduction(12.0), "12.0% 低減");
        assert_eq!(format_reduction(-10.0), "-10.0% 低減");
        assert_eq!(format_factor_reduction(44.0), "44% 低減");
    }

    #[test]
    fn test_format_summary_plain() {
        let output = format_summary(&summary_for(&["depression", "headInjury"], &[]), false);
        assert!(output.contains("リスク要因  3.74倍  [高リスク]"));
        assert!(output.contains("予防効果  1.00倍  0.0% 低減"));
        assert!(output.contains("予防対策タブ"));
        assert!(output.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_format_summary_empty_selection() {
        let output = format_summary(&summary_for(&[], &[]), false);
        assert!(output.contains("[標準リスク]"));
        assert!(output.contains("シミュレーションを開始"));
    }

    #[test]
    fn test_format_tsv() {
        let output = format_tsv(&summary_for(&["smoking"], &["exercise"]));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "risk\t1.3000\tstandard");
        assert_eq!(lines[1], "prevention\t0.7200\t28.0");
        assert_eq!(lines[2], "combined\t0.9360\tstandard");
    }

    #[test]
    fn test_format_json() {
        let output = format_json(&summary_for(&["depression"], &[])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["risk_score"], 2.2);
        assert_eq!(value["risk_tier"], "moderate");
    }

    #[test]
    fn test_format_breakdown() {
        assert_eq!(format_breakdown(&summary_for(&[], &[])), "No factors selected.");
        let output = format_breakdown(&summary_for(&["smoking"], &["exercise"]));
        assert_eq!(output.lines().count(), 2);
        assert!(output.lines().next().unwrap().starts_with("risk"));
    }

    #[test]
    fn test_format_factor_list_plain() {
        let catalog = Catalog::default();
        let output = format_factor_list(&catalog, FactorKind::Prevention, false);
        assert_eq!(output.lines().count(), catalog.preventions.len());
        assert!(output.lines().next().unwrap().contains("44% 低減"));
    }

    #[test]
    fn test_format_factor_list_empty() {
        let catalog = Catalog {
            risks: vec![],
            preventions: vec![],
        };
        assert_eq!(
            format_factor_list(&catalog, FactorKind::Risk, false),
            "No factors in catalog."
        );
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("うつ病", 10), "うつ病");
        assert_eq!(truncate_label("abcdefghij", 6), "abc...");
        assert_eq!(truncate_label("abcdef", 2), "ab");
    }
}
