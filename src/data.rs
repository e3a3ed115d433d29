// src/data.rs
//
// Table shapes flowing through the pipeline.
//
// - RawTable: whatever the first <table> on the page held, labels flattened.
// - NormalizedTable: the same rows projected onto a fixed schema, as typed
//   records. Built only by `specs::normalize`, so a NormalizedTable always has
//   every schema field for every row.

use crate::config::options::DocumentKind;
use crate::specs::{fixtures::{self, FixtureRow}, standings::{self, StandingsRow}};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    /// Every row is exactly `headers.len()` cells wide.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// First column carrying `label` (labels are already trimmed).
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    pub fn ncols(&self) -> usize { self.headers.len() }
    pub fn nrows(&self) -> usize { self.rows.len() }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NormalizedTable {
    Standings(Vec<StandingsRow>),
    Fixtures(Vec<FixtureRow>),
}

impl NormalizedTable {
    pub fn kind(&self) -> DocumentKind {
        match self {
            NormalizedTable::Standings(_) => DocumentKind::Standings,
            NormalizedTable::Fixtures(_) => DocumentKind::Fixtures,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NormalizedTable::Standings(r) => r.len(),
            NormalizedTable::Fixtures(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Semantic column labels, in schema order.
    pub fn headers(&self) -> Vec<String> {
        crate::specs::fields(self.kind()).iter().map(|f| s!(f.label)).collect()
    }

    /// Cell text in schema order (table widget, copy/export).
    pub fn rows(&self) -> Vec<Vec<String>> {
        match self {
            NormalizedTable::Standings(rows) => rows.iter().map(|r| r.cells().map(String::from).to_vec()).collect(),
            NormalizedTable::Fixtures(rows) => rows.iter().map(|r| r.cells().map(String::from).to_vec()).collect(),
        }
    }

    /// Columns holding numbers (right/center alignment in the table widget).
    pub fn numeric_columns(&self) -> &'static [usize] {
        match self {
            NormalizedTable::Standings(_) => standings::NUMERIC_COLUMNS,
            NormalizedTable::Fixtures(_) => fixtures::NUMERIC_COLUMNS,
        }
    }

    pub fn standings(&self) -> Option<&[StandingsRow]> {
        match self {
            NormalizedTable::Standings(rows) => Some(rows),
            NormalizedTable::Fixtures(_) => None,
        }
    }

    pub fn fixtures(&self) -> Option<&[FixtureRow]> {
        match self {
            NormalizedTable::Fixtures(rows) => Some(rows),
            NormalizedTable::Standings(_) => None,
        }
    }
}
