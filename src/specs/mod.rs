// src/specs/mod.rs
//! # Page layouts
//!
//! One module per fbref document kind. Each encodes *where the page lives*
//! and *which columns of its first table matter*:
//!
//! - **URL template** (`url`) built from competition + season. Pure string
//!   formatting, no I/O.
//! - **Schema** (`FIELDS`): ordered raw-label → display-label pairs. Columns not
//!   named here are dropped.
//! - **Typed row** (`StandingsRow`, `FixtureRow`) the projected cells land in.
//!
//! ## What does **not** live here
//! - Fetching and caching (`scrape`, `store`).
//! - Generic `<table>` walking (`core::html`).
//! - Charts and GUI concerns.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::Pipeline::run → specs::url_for()
//!                                   → core::net / core::html::first_table()
//!                                   → specs::normalize()
//! ```
//!
//! ## Invariant
//! `normalize` either returns every schema field for every raw row, or fails
//! with `SchemaMismatch` listing the absent raw labels. There are no partial
//! rows.
pub mod fixtures;
pub mod standings;

use crate::config::options::{DocumentKind, Query, Season};
use crate::data::{NormalizedTable, RawTable};
use crate::error::PipelineError;

/// Raw column label on the page → label shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub raw: &'static str,
    pub label: &'static str,
}

/// Source locator: document URL for (season, competition name, competition id, kind).
/// Spaces in the name become `-`; nothing is validated.
pub fn locate(season: &Season, name: &str, id: &str, kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Standings => standings::url(name, id, season),
        DocumentKind::Fixtures => fixtures::url(name, id, season),
    }
}

pub fn url_for(query: &Query) -> String {
    locate(&query.season, query.competition.name, query.competition.id, query.kind)
}

pub fn fields(kind: DocumentKind) -> &'static [Field] {
    match kind {
        DocumentKind::Standings => &standings::FIELDS,
        DocumentKind::Fixtures => &fixtures::FIELDS,
    }
}

/// Project `raw` onto the schema for `kind`, keeping row order.
pub fn normalize(raw: &RawTable, kind: DocumentKind) -> Result<NormalizedTable, PipelineError> {
    let table = match kind {
        DocumentKind::Standings => NormalizedTable::Standings(
            project(raw, &standings::FIELDS, kind)?.into_iter().map(Into::into).collect(),
        ),
        DocumentKind::Fixtures => NormalizedTable::Fixtures(
            project(raw, &fixtures::FIELDS, kind)?.into_iter().map(Into::into).collect(),
        ),
    };
    logd!("Normalize: {:?} {}x{} → {} rows", kind, raw.nrows(), raw.ncols(), table.len());
    Ok(table)
}

/// Pick the schema's columns out of every row, in schema order.
fn project<const N: usize>(
    raw: &RawTable,
    fields: &[Field; N],
    kind: DocumentKind,
) -> Result<Vec<[String; N]>, PipelineError> {
    let mut missing = Vec::new();
    let mut index = [0usize; N];
    for (slot, field) in index.iter_mut().zip(fields) {
        match raw.column_index(field.raw) {
            Some(ci) => *slot = ci,
            None => missing.push(s!(field.raw)),
        }
    }
    if !missing.is_empty() {
        loge!("Normalize: {:?} table lacks {:?} (have {:?})", kind, missing, raw.headers);
        return Err(PipelineError::SchemaMismatch { kind, missing });
    }

    Ok(raw
        .rows
        .iter()
        .map(|row| index.map(|ci| row.get(ci).cloned().unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| s!(*h)).collect(),
            rows: rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()).collect(),
        }
    }

    #[test]
    fn fixtures_projection_renames_reorders_and_drops() {
        let t = raw(
            &["Wk", "Day", "Date", "Time", "Home", "xG", "Score", "xG", "Away", "Attendance", "Venue", "Referee"],
            &[&["1", "Fri", "2023-08-11", "20:00", "Burnley", "0.3", "0–3", "1.9", "Manchester City", "21,572", "Turf Moor", "Craig Pawson"]],
        );
        let n = normalize(&t, DocumentKind::Fixtures).unwrap();
        assert_eq!(n.headers(), strings!["Date", "Time", "Home Team", "Score", "Away Team", "Attendance", "Venue"]);
        assert_eq!(
            n.rows()[0],
            strings!["2023-08-11", "20:00", "Burnley", "0–3", "Manchester City", "21,572", "Turf Moor"]
        );
    }

    #[test]
    fn every_missing_column_is_reported() {
        let t = raw(&["Date", "Home", "Away"], &[]);
        match normalize(&t, DocumentKind::Fixtures) {
            Err(PipelineError::SchemaMismatch { kind, missing }) => {
                assert_eq!(kind, DocumentKind::Fixtures);
                assert_eq!(missing, strings!["Time", "Score", "Attendance", "Venue"]);
            }
            other => panic!("expected schema mismatch, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_normalizes_to_empty_table() {
        let labels: Vec<&str> = fields(DocumentKind::Standings).iter().map(|f| f.raw).collect();
        let t = raw(&labels, &[]);
        let n = normalize(&t, DocumentKind::Standings).unwrap();
        assert!(n.is_empty());
        assert_eq!(n.headers().len(), 11);
    }
}
