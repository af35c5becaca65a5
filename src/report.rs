//! Rendering of a finished [`Report`] as a plain-text table or JSON.

use crate::bench::{Algorithm, Outcome, Report};
use crate::error::BenchError;

const RECURSION_LIMIT_TEXT: &str = "Max Recursion Error";

fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Timed { avg_secs } => format!("{:.17}", avg_secs),
        Outcome::RecursionLimit => RECURSION_LIMIT_TEXT.to_string(),
    }
}

/// Render one line per row under a dashed header rule.
///
/// The first column is left aligned, the rest right aligned.
pub fn render_table(report: &Report) -> String {
    let mut headers = vec!["Dataset type".to_string(), "Input Size".to_string()];
    headers.extend(Algorithm::ALL.iter().map(|a| a.header().to_string()));

    let body: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            let mut line = vec![row.kind.to_string(), row.size.to_string()];
            line.extend(row.cells.iter().map(|cell| format_outcome(&cell.outcome)));
            line
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for line in &body {
        for (width, text) in widths.iter_mut().zip(line) {
            *width = (*width).max(text.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, &rule, &widths);
    for line in &body {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (text, &width))| {
            if col == 0 {
                format!("{:<width$}", text, width = width)
            } else {
                format!("{:>width$}", text, width = width)
            }
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

pub fn to_json(report: &Report) -> Result<String, BenchError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::{Cell, Row};
    use crate::dataset::DatasetKind;

    fn sample_report() -> Report {
        let cells = Algorithm::ALL
            .iter()
            .enumerate()
            .map(|(i, &algorithm)| Cell {
                algorithm: algorithm.sorter(1000).name(),
                outcome: if i == 1 {
                    Outcome::RecursionLimit
                } else {
                    Outcome::Timed { avg_secs: 0.25 }
                },
            })
            .collect();

        Report {
            runs: 10,
            seed: 1,
            recursion_limit: 1000,
            rows: vec![Row {
                kind: DatasetKind::ReverseSorted,
                size: 100,
                cells,
            }],
        }
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&sample_report());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Dataset type"));
        assert!(lines[0].contains("Heap Sort"));
        assert!(lines[1].chars().all(|c| c == '-' || c == ' '));
        assert!(lines[2].starts_with("REVERSE_SORTED"));
        assert!(lines[2].contains(RECURSION_LIMIT_TEXT));
        assert!(lines[2].contains("0.25000000000000000"));
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_json_output() {
        let json = to_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let row = &value["rows"][0];
        assert_eq!(row["kind"], "REVERSE_SORTED");
        assert_eq!(row["size"], 100);
        assert_eq!(row["cells"][0]["algorithm"], "selection_iterative");
        assert_eq!(row["cells"][0]["status"], "timed");
        assert_eq!(row["cells"][1]["status"], "recursion_limit");
        assert_eq!(row["cells"][7]["algorithm"], "heap_sort");
    }
}
