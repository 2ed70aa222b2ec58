//! Output of views as tables, CSV or single filtered fields.

mod fields;
mod table;

use std::io::Write;

pub use fields::{Field, StatusField, StopField, Tabular, TripField};
pub use table::write_table;

/// Errors while rendering output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Filter token doesn't name a column of the view
    #[error("unknown filter field: {0}")]
    UnknownFilterField(String),

    /// Writing to the output failed
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Output format for whole views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns with a header line
    #[default]
    Table,
    /// Comma-separated values, one line per row, no header
    Csv,
}

/// Write `rows` in the given format.
pub fn write_rows<W: Write, R: Tabular>(
    out: &mut W,
    format: OutputFormat,
    rows: &[R],
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Table => write_table(out, rows)?,
        OutputFormat::Csv => write_csv(out, rows)?,
    }
    Ok(())
}

/// Write `rows` as CSV without a header line.
pub fn write_csv<W: Write, R: Tabular>(out: &mut W, rows: &[R]) -> Result<(), RenderError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    for row in rows {
        writer.write_record(row.cells())?;
    }
    writer.flush()?;
    Ok(())
}

/// Values of the column named by `token`, one per row.
pub fn select_field<R: Tabular>(rows: &[R], token: &str) -> Result<Vec<String>, RenderError> {
    let field = R::Field::parse(token)?;
    Ok(rows.iter().map(|r| r.cell(field)).collect())
}
