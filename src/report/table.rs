//! Iteration table rendering and CSV export.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::error::{JacobiError, Result};
use crate::solver::{to_fixed, IterationRecord, CONVERGENCE_DECIMALS};
use crate::system::{VariableSet, Vector};
use crate::DIMENSION;

/// Recorded iterations shown by [`IterationTable::render_display`].
pub const DISPLAY_ITERATION_LIMIT: usize = 50;

/// Minimum width of a rendered column.
const COLUMN_WIDTH: usize = 12;

const INDEX_HEADER: &str = "Iteration";

/// Tabular view of an iteration history.
///
/// Row 0 is always the all-zero starting vector, followed by every recorded
/// iterate in order.
#[derive(Debug, Clone, Copy)]
pub struct IterationTable<'a> {
    variables: &'a VariableSet,
    history: &'a [IterationRecord],
}

impl<'a> IterationTable<'a> {
    /// Create a table over a history.
    pub fn new(variables: &'a VariableSet, history: &'a [IterationRecord]) -> Self {
        Self { variables, history }
    }

    /// Number of rows, including the starting row.
    pub fn len(&self) -> usize {
        self.history.len() + 1
    }

    /// Always false: the starting row is present even without iterations.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Column headers: the index column followed by one column per variable.
    pub fn headers(&self) -> Vec<String> {
        std::iter::once(INDEX_HEADER.to_string())
            .chain(self.variables.names().iter().cloned())
            .collect()
    }

    /// All rows as `(iteration, values)`.
    pub fn rows(&self) -> impl Iterator<Item = (usize, Vector)> + 'a {
        let history = self.history;
        std::iter::once((0, [0.0; DIMENSION])).chain(history.iter().map(|r| (r.index, r.values)))
    }

    /// Render the starting row and at most `limit` recorded iterations.
    pub fn render(&self, limit: Option<usize>) -> String {
        let total = self.history.len();
        let shown = limit.map_or(total, |l| l.min(total));

        let headers = self.headers();
        let widths: Vec<usize> = headers
            .iter()
            .map(|h| h.chars().count().max(COLUMN_WIDTH))
            .collect();

        let mut out = String::new();
        push_row(&mut out, &widths, headers.iter().map(String::as_str));

        for (index, values) in self.rows().take(shown + 1) {
            let cells: Vec<String> = std::iter::once(index.to_string())
                .chain(values.iter().map(|v| to_fixed(*v, CONVERGENCE_DECIMALS)))
                .collect();
            push_row(&mut out, &widths, cells.iter().map(String::as_str));
        }

        if shown == total {
            let _ = write!(out, "Showing all {} iterations", total);
        } else {
            let _ = write!(out, "Showing the first {} of {} iterations", shown, total);
        }
        out
    }

    /// Render with the display cap of [`DISPLAY_ITERATION_LIMIT`] iterations.
    pub fn render_display(&self) -> String {
        self.render(Some(DISPLAY_ITERATION_LIMIT))
    }

    /// Write every row as CSV.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        self.write_records(&mut csv)?;
        csv.flush()
            .map_err(|e| JacobiError::export(format!("failed to flush CSV: {}", e)))
    }

    /// Export every row to a CSV file.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let mut csv = csv::Writer::from_path(path).map_err(|e| {
            JacobiError::export(format!("failed to create '{}': {}", path.display(), e))
        })?;
        self.write_records(&mut csv)?;
        csv.flush().map_err(|e| {
            JacobiError::export(format!("failed to write '{}': {}", path.display(), e))
        })
    }

    /// Every row as a CSV document.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| JacobiError::export(format!("CSV output is not UTF-8: {}", e)))
    }

    fn write_records<W: io::Write>(&self, csv: &mut csv::Writer<W>) -> Result<()> {
        let to_export = |e: csv::Error| JacobiError::export(format!("failed to write CSV: {}", e));

        csv.write_record(self.headers()).map_err(to_export)?;
        for (index, values) in self.rows() {
            let record = std::iter::once(index.to_string())
                .chain(values.iter().map(|v| to_fixed(*v, CONVERGENCE_DECIMALS)));
            csv.write_record(record).map_err(to_export)?;
        }
        Ok(())
    }
}

fn push_row<'s>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'s str>) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
        .collect();
    out.push_str(line.join(" ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz() -> VariableSet {
        VariableSet::new(vec!["x".into(), "y".into(), "z".into()])
    }

    fn history(n: usize) -> Vec<IterationRecord> {
        (1..=n)
            .map(|i| IterationRecord {
                index: i,
                values: [i as f64, -(i as f64) / 3.0, 0.5],
            })
            .collect()
    }

    #[test]
    fn test_rows_start_with_zero_vector() {
        let vars = xyz();
        let hist = history(2);
        let table = IterationTable::new(&vars, &hist);
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(table.len(), 3);
        assert_eq!(rows[0], (0, [0.0, 0.0, 0.0]));
        assert_eq!(rows[2].0, 2);
    }

    #[test]
    fn test_render_small_history() {
        let vars = xyz();
        let hist = history(2);
        let text = IterationTable::new(&vars, &hist).render_display();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with('z'));
        assert!(lines[0].contains("Iteration"));
        assert!(lines[1].trim_start().starts_with("0"));
        assert!(lines[1].contains("0.0000"));
        assert!(lines[3].contains("-0.6667"));
        assert_eq!(lines[4], "Showing all 2 iterations");
    }

    #[test]
    fn test_render_caps_display() {
        let vars = xyz();
        let hist = history(60);
        let text = IterationTable::new(&vars, &hist).render_display();
        let lines: Vec<&str> = text.lines().collect();
        // Header + row 0 + 50 iterations + footer
        assert_eq!(lines.len(), 53);
        assert_eq!(lines[52], "Showing the first 50 of 60 iterations");
    }

    #[test]
    fn test_csv_export_is_complete() {
        let vars = xyz();
        let hist = history(60);
        let csv = IterationTable::new(&vars, &hist).to_csv_string().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 62);
        assert_eq!(lines[0], "Iteration,x,y,z");
        assert_eq!(lines[1], "0,0.0000,0.0000,0.0000");
        assert_eq!(lines[2], "1,1.0000,-0.3333,0.5000");
        assert!(lines[61].starts_with("60,60.0000,"));
    }

    #[test]
    fn test_export_csv_file() {
        let vars = xyz();
        let hist = history(3);
        let path = std::env::temp_dir().join("jacobi_core_table_test.csv");
        IterationTable::new(&vars, &hist).export_csv(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 5);
        std::fs::remove_file(&path).ok();
    }
}
