use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Write};
use std::path::Path;
use terminal_size::{terminal_size, Width};

use crate::proposal::ScoredResult;
use crate::scoring::ScoringWeights;

const NO_RESULTS: &str = "No vendor responses to rank.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with exactly two decimals ("85.00")
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Format an optional pass-through number, "-" when absent.
/// Whole numbers print without a fractional part.
fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
        None => "-".to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format a ranking as a table: Index, Total, Price, Delivery, Warranty, Vendor.
/// No headers. Vendor goes last so score columns stay aligned.
pub fn format_ranking_table(results: &[ScoredResult], use_colors: bool) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }

    let term_width = get_terminal_width();

    // " 1." + " " + total(6) + 3 x "  X " + sub-score(6) + "  "
    let fixed_width = 3 + 1 + 6 + 3 * (4 + 6) + 2;

    results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let index_str = format!("{:>2}.", idx + 1);
            let total_str = format!("{:>6}", format_score(result.total_score));
            let subs = format!(
                "  P {:>6}  D {:>6}  W {:>6}",
                format_score(result.price_score),
                format_score(result.delivery_score),
                format_score(result.warranty_score)
            );

            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&result.vendor_name, width - fixed_width)
                }
                // Very narrow terminal
                Some(_) => truncate_name(&result.vendor_name, 20),
                None => result.vendor_name.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}  {}",
                    index_str.dimmed(),
                    total_str.bold(),
                    subs.dimmed(),
                    name.cyan()
                )
            } else {
                format!("{} {}{}  {}", index_str, total_str, subs, name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a ranking as tab-separated values for scripting
/// Columns: total, price, delivery, warranty, vendor, email (no headers, no colors)
pub fn format_tsv(results: &[ScoredResult]) -> String {
    results
        .iter()
        .map(|r| {
            format!(
                "{:.2}\t{:.2}\t{:.2}\t{:.2}\t{}\t{}",
                r.total_score,
                r.price_score,
                r.delivery_score,
                r.warranty_score,
                r.vendor_name,
                r.vendor_email
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a ranking as a pretty-printed JSON array
pub fn format_json(results: &[ScoredResult]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize scores")
}

/// Format one ranked result with its inputs and weighted contributions
pub fn format_result_detail(
    result: &ScoredResult,
    weights: &ScoringWeights,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let header = format!("{} <{}>", result.vendor_name, result.vendor_email);
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });
    lines.push(format!("  Price: {}", format_optional(result.price)));
    lines.push(format!(
        "  Delivery: {} days",
        format_optional(result.delivery_days)
    ));
    lines.push(format!(
        "  Warranty: {}",
        result.warranty.as_deref().unwrap_or("-")
    ));

    for part in result.contributions(weights) {
        lines.push(format!(
            "  {:<9}{:>6} x {:.2} = {:>6}",
            part.label,
            format_score(part.sub_score),
            part.weight,
            format_score(part.points)
        ));
    }

    let total = format!("  Total: {}", format_score(result.total_score));
    lines.push(if use_colors {
        total.green().to_string()
    } else {
        total
    });

    lines.join("\n")
}

/// Write a ranking to `path` as JSON atomically
///
/// The file is either fully written or left untouched.
pub fn write_report(path: &Path, results: &[ScoredResult]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, results).context("Failed to serialize scores")?;
    file.write_all(b"\n").context("Failed to write report")?;

    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn sample_results() -> Vec<ScoredResult> {
        vec![
            ScoredResult {
                vendor_name: "Beta Supplies".to_string(),
                vendor_email: "bids@beta.test".to_string(),
                price: Some(80.0),
                delivery_days: Some(20.0),
                warranty: Some("2 years".to_string()),
                price_score: 100.0,
                delivery_score: 50.0,
                warranty_score: 100.0,
                total_score: 85.0,
            },
            ScoredResult {
                vendor_name: "Acme".to_string(),
                vendor_email: "sales@acme.test".to_string(),
                price: Some(100.0),
                delivery_days: None,
                warranty: None,
                price_score: 80.0,
                delivery_score: 0.0,
                warranty_score: 0.0,
                total_score: 40.0,
            },
        ]
    }

    #[test]
    fn test_format_score_two_decimals() {
        assert_eq!(format_score(85.0), "85.00");
        assert_eq!(format_score(42.86), "42.86");
        assert_eq!(format_score(0.0), "0.00");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(1200.0)), "1200");
        assert_eq!(format_optional(Some(99.5)), "99.5");
        assert_eq!(format_optional(None), "-");
    }

    #[test]
    fn test_ranking_table_empty() {
        assert_eq!(format_ranking_table(&[], false), NO_RESULTS);
    }

    #[test]
    fn test_ranking_table_rows() {
        let output = format_ranking_table(&sample_results(), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1.  85.00"));
        assert!(lines[0].contains("P 100.00  D  50.00  W 100.00"));
        assert!(lines[1].starts_with(" 2.  40.00"));
    }

    #[test]
    fn test_tsv() {
        let output = format_tsv(&sample_results());
        let first = output.lines().next().unwrap();
        assert_eq!(first, "85.00\t100.00\t50.00\t100.00\tBeta Supplies\tbids@beta.test");
        assert!(format_tsv(&[]).is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let output = format_json(&sample_results()).unwrap();
        assert!(output.contains("\"vendor\": \"Beta Supplies\""));
        assert!(output.contains("\"totalScore\": 85.0"));
        assert!(output.contains("\"deliveryDays\": null"));
    }

    #[test]
    fn test_result_detail() {
        let results = sample_results();
        let output = format_result_detail(&results[0], &ScoringWeights::default(), false);
        assert!(output.contains("Beta Supplies <bids@beta.test>"));
        assert!(output.contains("Price: 80"));
        assert!(output.contains("Delivery: 20 days"));
        assert!(output.contains("Warranty: 2 years"));
        assert!(output.contains("Price    100.00 x 0.50 =  50.00"));
        assert!(output.contains("Total: 85.00"));
    }

    #[test]
    fn test_result_detail_missing_fields() {
        let results = sample_results();
        let output = format_result_detail(&results[1], &ScoringWeights::default(), false);
        assert!(output.contains("Delivery: - days"));
        assert!(output.contains("Warranty: -"));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Short", 10), "Short");
        assert_eq!(truncate_name("A very long vendor name", 10), "A very ...");
        assert_eq!(truncate_name("Ünïcödé Vendor", 7), "Ünïc...");
    }

    #[test]
    fn test_write_report() {
        let path = env::temp_dir().join("vendor_rank_test_report.json");
        let _ = fs::remove_file(&path);

        write_report(&path, &sample_results()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<ScoredResult> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, sample_results());

        let _ = fs::remove_file(&path);
    }
}
