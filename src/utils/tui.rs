//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::generator::Distribution;
use crate::record::MeasurementRecord;
use crate::registry::AlgorithmRegistry;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Absent counts are shown as `-`.
fn format_count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Print the application header with the run parameters
pub fn print_header(algorithms: &[String], sizes: &[usize], distributions: &[Distribution]) {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Sorting Algorithm Analyzer ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);

    let types: Vec<&str> = distributions.iter().map(|d| d.as_str()).collect();
    println!("  Algorithms:  {}", algorithms.join(", "));
    println!("  Array Sizes: {:?}", sizes);
    println!("  Array Types: {}", types.join(", "));
    println!();
}

/// Print the list of available algorithms
pub fn print_registry(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<26} [{}] - {}",
            algo.name,
            algo.capability.label(),
            algo.description
        );
    }
}

/// Build the summary table lines for `records` at the given terminal width.
fn summary_lines(records: &[MeasurementRecord], term_width: usize) -> Vec<String> {
    let fixed_width = 8 + 10 + 12 + 14 + 14 + 5;
    let name_width = term_width.saturating_sub(fixed_width + 4).clamp(12, 30);
    let table_width = name_width + fixed_width;

    let mut lines = Vec::with_capacity(records.len() + 3);
    lines.push(format!("  {}", "─".repeat(table_width)));
    lines.push(format!(
        "  {:<n_width$} {:>8} {:>10} {:>12} {:>14} {:>14}",
        "Algorithm",
        "Size",
        "Type",
        "Time (ms)",
        "Comparisons",
        "Swaps",
        n_width = name_width
    ));
    lines.push(format!("  {}", "─".repeat(table_width)));

    for r in records {
        lines.push(format!(
            "  {:<n_width$} {:>8} {:>10} {:>12.4} {:>14} {:>14}",
            truncate(&r.algorithm, name_width),
            r.size,
            r.distribution.as_str(),
            r.elapsed_ms,
            format_count(r.comparisons),
            format_count(r.swaps),
            n_width = name_width
        ));
    }

    lines
}

/// Print a results table with one row per record
pub fn print_summary(records: &[MeasurementRecord]) {
    if records.is_empty() {
        return;
    }
    for line in summary_lines(records, get_term_width()) {
        println!("{}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::OpCounts;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Quicksort", 20), "Quicksort");
        assert_eq!(truncate("Std Sort (Rust built-in)", 12), "Std Sort ...");
    }

    #[test]
    fn test_summary_marks_absent_counts() {
        let records = vec![
            MeasurementRecord::instrumented(
                "Merge Sort",
                10,
                Distribution::Sorted,
                0.01,
                OpCounts::new(15, 34),
            ),
            MeasurementRecord::opaque("Builtin", 10, Distribution::Sorted, 0.001),
        ];
        let lines = summary_lines(&records, 100);
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Comparisons"));
        assert!(lines[3].contains("34"));
        assert!(lines[4].trim_end().ends_with('-'));
    }
}
