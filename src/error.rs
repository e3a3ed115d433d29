// src/error.rs
//! Pipeline outcome taxonomy.
//!
//! Every request ends in one of: a table, `DataUnavailable`, `Fetch`, or
//! `SchemaMismatch`. All three errors are terminal for that request; the shell
//! shows the message and renders nothing else.

use thiserror::Error;

use crate::config::options::{DocumentKind, Season};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// No document for the season, or the document holds no table.
    #[error("No tables found for the {season} season.")]
    DataUnavailable { season: Season },

    /// Transport or parsing failure while retrieving the document.
    #[error("Error scraping data: {0}")]
    Fetch(String),

    /// The table is there but a required column is not.
    #[error("Unexpected {kind} table layout: missing column(s) {}", .missing.join(", "))]
    SchemaMismatch {
        kind: DocumentKind,
        missing: Vec<String>,
    },
}

impl PipelineError {
    /// Short tag for logs/status lines.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::DataUnavailable { .. } => "data-unavailable",
            PipelineError::Fetch(_) => "fetch-error",
            PipelineError::SchemaMismatch { .. } => "schema-mismatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_dashboard_wording() {
        let e = PipelineError::DataUnavailable { season: Season::starting(2015) };
        assert_eq!(e.to_string(), "No tables found for the 2015-2016 season.");

        let e = PipelineError::Fetch(s!("connection reset"));
        assert_eq!(e.to_string(), "Error scraping data: connection reset");

        let e = PipelineError::SchemaMismatch {
            kind: DocumentKind::Standings,
            missing: strings!["GD", "Pts"],
        };
        assert_eq!(
            e.to_string(),
            "Unexpected Standings table layout: missing column(s) GD, Pts"
        );
    }
}
