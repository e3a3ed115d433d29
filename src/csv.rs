// src/csv.rs
use std::io::{self, Write};

use crate::data::NormalizedTable;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full Copy/Export text.
/// - `headers`: emitted first when `include_headers` is set
/// - `rows`: cell text, one inner Vec per line
/// - `sep`: field separator
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // Writes into a Vec<u8> cannot fail.
    if include_headers {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// `to_export_string` over a normalized table's semantic columns.
pub fn table_to_string(table: &NormalizedTable, include_headers: bool, sep: char) -> String {
    to_export_string(&table.headers(), &table.rows(), include_headers, sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let out = to_export_string(
            &strings!["Team", "Attendance"],
            &[strings!["Brighton & Hove Albion", "31,477"], strings!["Say \"hi\"", "1"]],
            true,
            ',',
        );
        assert_eq!(
            out,
            "Team,Attendance\nBrighton & Hove Albion,\"31,477\"\n\"Say \"\"hi\"\"\",1\n"
        );
    }

    #[test]
    fn tsv_leaves_commas_alone_and_can_skip_headers() {
        let out = to_export_string(&strings!["A", "B"], &[strings!["1,5", "x"]], false, '\t');
        assert_eq!(out, "1,5\tx\n");
    }
}
