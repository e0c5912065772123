//! Table output: human-readable, JSON and CSV.
//!
//! [`write_rows`] renders any list of serializable rows; columns follow the
//! struct's field order. In the human format, floats are shown with four
//! decimals and columns that are empty in every row are left out.

use std::io::Write;

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TidyError};
use crate::frequency::FrequencyRecord;
use crate::report::Reporter;

/// Table output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Human,
    Json,
    Csv,
}

/// Renders records as a table.
#[derive(Clone, Debug, Default)]
pub struct TableReporter {
    format: TableFormat,
}

impl TableReporter {
    /// Create a table reporter.
    pub fn new(format: TableFormat) -> Self {
        TableReporter { format }
    }
}

impl Reporter for TableReporter {
    fn render(&self, records: &[FrequencyRecord], out: &mut dyn Write) -> Result<()> {
        write_rows(records, self.format, out)
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

/// Write rows in the given format.
pub fn write_rows<T: Serialize>(
    rows: &[T],
    format: TableFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        TableFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        TableFormat::Csv => {
            let mut writer = WriterBuilder::new().from_writer(&mut *out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        TableFormat::Human => write_human(rows, out)?,
    }
    Ok(())
}

/// Flatten rows into a header and string cells.
///
/// The header comes from CSV serialization, which keeps the struct's field
/// order. Cell values come from `serde_json`, so only fields that serialize
/// as floats get the fixed four-decimal format.
fn to_cells<T: Serialize>(rows: &[T]) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let header = match rows.first() {
        Some(first) => column_names(first)?,
        None => Vec::new(),
    };

    let mut cells = Vec::with_capacity(rows.len());
    for row in rows {
        let value = serde_json::to_value(row)?;
        cells.push(
            header
                .iter()
                .map(|column| format_cell(value.get(column)))
                .collect(),
        );
    }
    Ok((header, cells))
}

fn column_names<T: Serialize>(row: &T) -> Result<Vec<String>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.serialize(row)?;
    let data = writer
        .into_inner()
        .map_err(|e| TidyError::other(format!("failed to buffer table: {e}")))?;

    let mut reader = ReaderBuilder::new().from_reader(data.as_slice());
    Ok(reader.headers()?.iter().map(str::to_string).collect())
}

fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.is_f64() => match n.as_f64() {
            Some(f) => format!("{f:.4}"),
            None => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

fn pad_line<'a, I: Iterator<Item = &'a str>>(values: I, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, &width)| format!("{value:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn write_human<T: Serialize>(rows: &[T], out: &mut dyn Write) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "(no rows)")?;
        return Ok(());
    }

    let (header, cells) = to_cells(rows)?;
    let columns: Vec<usize> = (0..header.len())
        .filter(|&col| cells.iter().any(|row| !row[col].is_empty()))
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .map(|&col| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    writeln!(
        out,
        "{}",
        pad_line(columns.iter().map(|&c| header[c].as_str()), &widths)
    )?;
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("  "))?;
    for row in &cells {
        writeln!(
            out,
            "{}",
            pad_line(columns.iter().map(|&c| row[c].as_str()), &widths)
        )?;
    }
    Ok(())
}
