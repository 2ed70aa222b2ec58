//! Plain-text table output.

use std::io::Write;

use super::fields::{Field, Tabular};

/// Column separator.
const GAP: &str = "   ";

/// Write `rows` as a left-aligned table with a header line.
///
/// Column widths are measured in characters so umlauts line up.
pub fn write_table<W: Write, R: Tabular>(out: &mut W, rows: &[R]) -> std::io::Result<()> {
    let headers: Vec<&str> = R::Field::ALL.iter().map(|f| f.header()).collect();
    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(out, &headers, &widths)?;
    for row in &cells {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        write_line(out, &row, &widths)?;
    }
    Ok(())
}

fn write_line<W: Write>(out: &mut W, cells: &[&str], widths: &[usize]) -> std::io::Result<()> {
    let last = cells.len().saturating_sub(1);
    for (idx, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if idx == last {
            write!(out, "{cell}")?;
        } else {
            write!(out, "{cell:<width$}{GAP}")?;
        }
    }
    writeln!(out)
}
