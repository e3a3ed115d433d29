// src/core/html.rs
//! Generic HTML table extraction.
//!
//! Only knows about `<table>` structure, not about any particular page:
//! - the **first** non-empty `<table>` in document order is taken;
//! - header rows come from `<thead>`, or failing that the leading rows made of
//!   `<th>` only; multi-level headers flatten to the **last** header row;
//! - `colspan`/`rowspan` are expanded so every row lines up with the labels;
//! - repeated header rows (`class="thead"`) and `spacer` rows inside the body
//!   are dropped.
//!
//! Page-specific meaning of the columns lives in `specs`.

use scraper::{ElementRef, Html};

use crate::core::sanitize::normalize_ws;
use crate::data::RawTable;

/// Upper bound for span attributes; anything larger is treated as malformed.
const MAX_SPAN: usize = 1000;

struct Cell {
    text: String,
    header: bool,
    colspan: usize,
    rowspan: usize,
}

struct Row {
    cells: Vec<Cell>,
    classes: Vec<String>,
}

/// Parse `doc` and return its first table holding labels or rows, or `None`
/// if there is no such `<table>`.
pub fn first_table(doc: &str) -> Option<RawTable> {
    let html = Html::parse_document(doc);
    html.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "table")
        .map(parse_table)
        .find(|t| t.ncols() > 0 || t.nrows() > 0)
}

/// Number of `<table>` elements in the document (diagnostics).
pub fn count_tables(doc: &str) -> usize {
    Html::parse_document(doc)
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "table")
        .count()
}

fn parse_table(table: ElementRef<'_>) -> RawTable {
    let mut head_rows: Vec<Row> = Vec::new();
    let mut body_rows: Vec<Row> = Vec::new();

    for section in child_elements(table) {
        match section.value().name() {
            "thead" => head_rows.extend(child_elements(section).filter(is_tr).map(read_row)),
            "tbody" => body_rows.extend(child_elements(section).filter(is_tr).map(read_row)),
            // The HTML parser normally wraps stray rows in <tbody>; keep them if not.
            "tr" => body_rows.push(read_row(section)),
            _ => {}
        }
    }

    // No <thead>: leading all-<th> rows are the header.
    if head_rows.is_empty() {
        let n = body_rows
            .iter()
            .take_while(|r| !r.cells.is_empty() && r.cells.iter().all(|c| c.header))
            .count();
        head_rows = body_rows.drain(..n).collect();
    }

    let header_grid = expand_spans(&head_rows);
    let mut headers: Vec<String> = header_grid.last().cloned().unwrap_or_default();

    let kept: Vec<Row> = body_rows
        .into_iter()
        .filter(|r| !r.cells.is_empty())
        .filter(|r| !has_class(r, "thead") && !has_class(r, "spacer"))
        .filter(|r| !repeats_header(r, &headers))
        .collect();
    let mut rows = expand_spans(&kept);

    // Align: every row as wide as the widest of headers/rows.
    let width = rows.iter().map(Vec::len).chain(std::iter::once(headers.len())).max().unwrap_or(0);
    for i in headers.len()..width {
        headers.push(format!("Unnamed: {}", i));
    }
    for r in &mut rows {
        r.resize(width, s!());
    }

    RawTable { headers, rows }
}

fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

fn is_tr(el: &ElementRef<'_>) -> bool {
    el.value().name() == "tr"
}

fn read_row(tr: ElementRef<'_>) -> Row {
    let classes = tr.value().classes().map(|c| c.to_ascii_lowercase()).collect();
    let cells = child_elements(tr)
        .filter(|c| matches!(c.value().name(), "th" | "td"))
        .map(|c| Cell {
            text: normalize_ws(&c.text().collect::<String>()),
            header: c.value().name() == "th",
            colspan: span_attr(&c, "colspan"),
            rowspan: span_attr(&c, "rowspan"),
        })
        .collect();
    Row { cells, classes }
}

fn span_attr(cell: &ElementRef<'_>, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| (1..=MAX_SPAN).contains(n))
        .unwrap_or(1)
}

fn has_class(row: &Row, class: &str) -> bool {
    row.classes.iter().any(|c| c == class)
}

fn repeats_header(row: &Row, headers: &[String]) -> bool {
    if headers.is_empty() || !row.cells.iter().all(|c| c.header) {
        return false;
    }
    let texts: Vec<&str> = row.cells.iter().map(|c| c.text.as_str()).collect();
    texts.len() <= headers.len() && texts.iter().zip(headers).all(|(a, b)| *a == b.as_str())
}

/// Lay rows out on a grid, copying spanned cells into every slot they cover.
fn expand_spans(rows: &[Row]) -> Vec<Vec<String>> {
    // Per column: (text, rows still to fill) carried down by rowspan.
    let mut carry: Vec<Option<(String, usize)>> = Vec::new();
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let mut line: Vec<String> = Vec::new();
        let mut col = 0usize;

        for cell in &row.cells {
            take_carried(&mut carry, &mut col, &mut line);
            for _ in 0..cell.colspan {
                line.push(cell.text.clone());
                if cell.rowspan > 1 {
                    if carry.len() <= col { carry.resize(col + 1, None); }
                    carry[col] = Some((cell.text.clone(), cell.rowspan - 1));
                }
                col += 1;
            }
        }
        fill_trailing(&mut carry, &mut col, &mut line);
        out.push(line);
    }
    out
}

fn take_carried(carry: &mut [Option<(String, usize)>], col: &mut usize, line: &mut Vec<String>) {
    while let Some(slot) = carry.get_mut(*col) {
        let Some((text, left)) = slot else { break };
        line.push(text.clone());
        *left -= 1;
        if *left == 0 { *slot = None; }
        *col += 1;
    }
}

/// Spans reaching past the row's last cell still occupy their columns.
fn fill_trailing(carry: &mut [Option<(String, usize)>], col: &mut usize, line: &mut Vec<String>) {
    while carry.iter().skip(*col).any(Option::is_some) {
        take_carried(carry, col, line);
        if carry.get(*col).is_some_and(Option::is_none) {
            line.push(s!());
            *col += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_table_yields_none() {
        assert!(first_table("<html><body><p>nothing here</p></body></html>").is_none());
        assert_eq!(count_tables("<div></div>"), 0);
    }

    #[test]
    fn takes_first_table_only() {
        let doc = r#"
            <table><tr><th>A</th></tr><tr><td>1</td></tr></table>
            <table><tr><th>B</th></tr><tr><td>2</td></tr></table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.headers, strings!["A"]);
        assert_eq!(t.rows, vec![strings!["1"]]);
        assert_eq!(count_tables(doc), 2);
    }

    #[test]
    fn multi_level_header_flattens_to_last_level() {
        let doc = r#"
            <table>
              <thead>
                <tr class="over_header"><th colspan="2"></th><th colspan="2">Goals</th></tr>
                <tr><th> Rk </th><th>Squad</th><th>GF</th><th>GA</th></tr>
              </thead>
              <tbody>
                <tr><th>1</th><td>Arsenal</td><td>88</td><td>43</td></tr>
              </tbody>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.headers, strings!["Rk", "Squad", "GF", "GA"]);
        assert_eq!(t.rows[0], strings!["1", "Arsenal", "88", "43"]);
    }

    #[test]
    fn rowspan_header_is_carried_into_last_level() {
        let doc = r#"
            <table>
              <thead>
                <tr><th rowspan="2">Squad</th><th colspan="2">Home</th></tr>
                <tr><th>W</th><th>L</th></tr>
              </thead>
              <tbody><tr><td>X</td><td>3</td><td>1</td></tr></tbody>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.headers, strings!["Squad", "W", "L"]);
    }

    #[test]
    fn repeated_header_and_spacer_rows_are_dropped() {
        let doc = r#"
            <table>
              <thead><tr><th>Date</th><th>Home</th></tr></thead>
              <tbody>
                <tr><td>2023-08-11</td><td>Burnley</td></tr>
                <tr class="spacer partial_table"><td></td><td></td></tr>
                <tr class="thead"><th>Date</th><th>Home</th></tr>
                <tr><th>Date</th><th>Home</th></tr>
                <tr><td>2023-08-12</td><td>Arsenal</td></tr>
              </tbody>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[1][1], "Arsenal");
    }

    #[test]
    fn short_rows_are_padded_and_extra_cells_get_names() {
        let doc = r#"
            <table>
              <tr><th>A</th><th>B</th></tr>
              <tr><td>1</td></tr>
              <tr><td>1</td><td>2</td><td>3</td></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.headers, strings!["A", "B", "Unnamed: 2"]);
        assert_eq!(t.rows[0], strings!["1", "", ""]);
        assert_eq!(t.rows[1], strings!["1", "2", "3"]);
    }

    #[test]
    fn rowspan_covers_exactly_its_rows_under_short_rows() {
        let doc = r#"
            <table>
              <tr><th>A</th><th>B</th><th>C</th></tr>
              <tr><td>1</td><td>2</td><td rowspan="3">x</td></tr>
              <tr><td>3</td></tr>
              <tr><td>4</td><td>5</td></tr>
              <tr><td>6</td><td>7</td><td>8</td></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.headers, strings!["A", "B", "C"]);
        assert_eq!(t.rows[0], strings!["1", "2", "x"]);
        assert_eq!(t.rows[1], strings!["3", "", "x"]);
        assert_eq!(t.rows[2], strings!["4", "5", "x"]);
        assert_eq!(t.rows[3], strings!["6", "7", "8"]);
    }

    #[test]
    fn empty_tables_are_skipped() {
        let t = first_table("<table></table><table><tr><th>Rk</th></tr></table>").unwrap();
        assert_eq!(t.headers, strings!["Rk"]);
        assert!(t.rows.is_empty());

        assert!(first_table("<table></table><table><tbody></tbody></table>").is_none());
    }
}
