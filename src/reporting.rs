//! Console and JSON output for ranking results.
//!
//! The text layout follows the classic report: solver settings, solve time,
//! the top entries as `rank(score): name`, then the iteration count.

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;

use crate::config::OutputFormat;
use crate::types::RankReport;

/// Prints a report in the requested format to stdout.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_report(report: &RankReport, format: OutputFormat) -> Result<()> {
    let out = match format {
        OutputFormat::Text => render_text(report)?,
        OutputFormat::Json => render_json(report)?,
    };
    print!("{out}");
    Ok(())
}

/// Renders the human-readable report.
///
/// # Errors
/// Returns error if writing to the buffer fails.
pub fn render_text(report: &RankReport) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Using damping factor d = {:.6}", report.damping)?;
    writeln!(
        out,
        "Using {} {}",
        report.threads,
        pluralize("thread", report.threads)
    )?;
    writeln!(
        out,
        "{}",
        format!(
            "Parallel time with {} {} is = {:.6} seconds",
            report.threads,
            pluralize("thread", report.threads),
            report.solve_seconds
        )
        .dimmed()
    )?;

    let heading = format!("The {} biggest sites are:", report.entries.len());
    writeln!(out, "{}", heading.bold())?;
    for entry in &report.entries {
        writeln!(
            out,
            "{}({}): {}",
            entry.rank,
            format!("{:.6}", entry.score).cyan(),
            entry.name
        )?;
    }

    writeln!(out, "The number of iterations is: {}", report.iterations)?;
    Ok(out)
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(report: &RankReport) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelaxationMode;
    use crate::types::RankedEntry;

    fn sample() -> RankReport {
        RankReport {
            entries: vec![
                RankedEntry {
                    rank: 1,
                    id: 1,
                    name: "http://b.example/".into(),
                    score: 7.0 / 11.0,
                },
                RankedEntry {
                    rank: 2,
                    id: 0,
                    name: "http://a.example/".into(),
                    score: 4.0 / 11.0,
                },
            ],
            entity_count: 2,
            edge_count: 1,
            dangling_count: 1,
            damping: 0.75,
            mode: RelaxationMode::Jacobi,
            threads: 4,
            iterations: 12,
            error: 5e-7,
            duration_ms: 0,
            solve_seconds: 0.0001,
        }
    }

    #[test]
    fn text_lists_entries_in_rank_order() {
        colored::control::set_override(false);
        let text = render_text(&sample()).unwrap();
        assert!(text.contains("Using damping factor d = 0.750000"));
        assert!(text.contains("The 2 biggest sites are:"));
        assert!(text.contains("1(0.636364): http://b.example/"));
        assert!(text.contains("2(0.363636): http://a.example/"));
        assert!(text.ends_with("The number of iterations is: 12\n"));
    }

    #[test]
    fn json_has_entries_and_mode() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"][0]["name"], "http://b.example/");
        assert_eq!(value["mode"], "jacobi");
        assert_eq!(value["iterations"], 12);
    }
}
