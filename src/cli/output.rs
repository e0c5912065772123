//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, RenderArgs, TidywordArgs};
use crate::error::Result;
use crate::frequency::{FrequencyRecord, total_count};
use crate::report::{ChartKind, RenderConfig, reporter_for, write_rows};

/// Output rows in the selected format.
///
/// In human mode with `-v`, a one-line summary precedes the table.
pub fn output_rows<T: Serialize>(
    message: &str,
    rows: &[T],
    args: &TidywordArgs,
    out: &mut dyn Write,
) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }
    write_rows(rows, args.output_format.into(), out)
}

/// Output frequency records with the chart chosen on the command line.
pub fn output_records(
    message: &str,
    records: &[FrequencyRecord],
    render: &RenderArgs,
    config: &RenderConfig,
    args: &TidywordArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let kind = ChartKind::from(render.chart);
    if kind == ChartKind::Table {
        let message = format!("{message} ({} occurrences)", total_count(records));
        return output_rows(&message, records, args, out);
    }

    let reporter = reporter_for(kind, args.output_format.into(), config.clone())?;
    reporter.render(records, out)
}
