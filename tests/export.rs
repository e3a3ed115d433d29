// tests/export.rs
mod common;

use std::fs;

use common::STANDINGS_HTML;
use fbref_dash::config::options::{DocumentKind, ExportFormat, ExportOptions, Query};
use fbref_dash::core::html::first_table;
use fbref_dash::csv::table_to_string;
use fbref_dash::data::NormalizedTable;
use fbref_dash::file::{self, ExportError};
use fbref_dash::specs::normalize;

fn table() -> NormalizedTable {
    normalize(&first_table(STANDINGS_HTML).unwrap(), DocumentKind::Standings).unwrap()
}

#[test]
fn csv_has_header_line_and_quotes_thousands() {
    let text = table_to_string(&table(), true, ',');
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Rank,Team,Matches Played,Wins,Draws,Losses,Goals For,Goals Against,Goal Difference,Points,Attendance")
    );
    assert_eq!(lines.next(), Some("1,Arsenal,14,12,2,0,33,10,+23,38,\"60,191\""));
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn tsv_without_headers() {
    let text = table_to_string(&table(), false, '\t');
    assert!(text.starts_with("1\tArsenal\t14\t"));
    assert!(text.contains("\t60,191\n"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn export_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested/deeper/pl.tsv");

    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.set_path(target.to_str().unwrap());

    let written = file::export_table(&export, &Query::default(), &table()).unwrap();
    assert_eq!(written, target);
    let body = fs::read_to_string(&written).unwrap();
    assert!(body.starts_with("Rank\tTeam\t"));
}

#[test]
fn export_refuses_a_file_as_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("taken");
    fs::write(&blocker, "x").unwrap();

    let mut export = ExportOptions::default();
    export.set_path(blocker.join("out.csv").to_str().unwrap());

    match file::export_table(&export, &Query::default(), &table()) {
        Err(ExportError::NotADirectory(p)) => assert_eq!(p, blocker),
        other => panic!("expected NotADirectory, got {other:?}"),
    }
}

#[test]
fn resolve_out_path_into_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let p = file::resolve_out_path(dir.path().to_str().unwrap(), "premier_league_2023-2024_standings.csv");
    assert_eq!(p, dir.path().join("premier_league_2023-2024_standings.csv"));
}
