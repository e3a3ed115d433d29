// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use super::consts::*;
use super::leagues::{self, Competition};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub query: Query,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            query: Query::default(),
            export: ExportOptions::default(),
        }
    }
}

/* ---------------- Season ---------------- */

/// A competition's annual run, e.g. `2022-2023`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season {
    pub start: u16,
    pub end: u16,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeasonParseError {
    #[error("season must look like YYYY-YYYY, got {0:?}")]
    Shape(String),
    #[error("season year {0:?} is not a number")]
    Year(String),
}

impl Season {
    pub fn starting(start: u16) -> Self {
        Self { start, end: start + 1 }
    }

    /// Seasons offered by the selectors, most recent first.
    pub fn available() -> Vec<Season> {
        (FIRST_SEASON_START..=LAST_SEASON_START)
            .rev()
            .map(Season::starting)
            .collect()
    }

    pub fn latest() -> Season {
        Season::starting(LAST_SEASON_START)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for Season {
    type Err = SeasonParseError;

    /// Split on the single `-` separator; both halves must be years.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (a, b) = s
            .split_once('-')
            .filter(|(_, b)| !b.contains('-'))
            .ok_or_else(|| SeasonParseError::Shape(s!(s)))?;
        let start = a.trim().parse().map_err(|_| SeasonParseError::Year(s!(a)))?;
        let end = b.trim().parse().map_err(|_| SeasonParseError::Year(s!(b)))?;
        Ok(Season { start, end })
    }
}

/* ---------------- Document kind ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Standings,
    Fixtures,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown data type {0:?} (expected standings or fixtures)")]
pub struct KindParseError(pub String);

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Standings, DocumentKind::Fixtures];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Standings => "Standings",
            DocumentKind::Fixtures => "Fixtures",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standings" | "table" => Ok(DocumentKind::Standings),
            "fixtures" | "schedule" => Ok(DocumentKind::Fixtures),
            other => Err(KindParseError(s!(other))),
        }
    }
}

/* ---------------- Query ---------------- */

/// One user selection: which competition, which season, which document.
/// Also the cache key for pipeline results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Query {
    pub competition: Competition,
    pub season: Season,
    pub kind: DocumentKind,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            competition: *leagues::default_league(),
            season: Season::latest(),
            kind: DocumentKind::Standings,
        }
    }
}

impl Query {
    /// "Premier League Standings - Season 2022-2023"
    pub fn heading(&self) -> String {
        format!("{} {} - Season {}", self.competition.name, self.kind, self.season)
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// User override; `None` means "derive from the query".
    out_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: None,
        }
    }
}

impl ExportOptions {
    /// `out/premier_league_2022-2023_standings.csv`
    pub fn default_path_for(&self, query: &Query) -> PathBuf {
        let stem = join!(
            &crate::core::sanitize::file_stem(query.competition.name),
            "_",
            &query.season.to_string(),
            "_",
            &query.kind.label().to_ascii_lowercase()
        );
        PathBuf::from(DEFAULT_OUT_DIR).join(join!(stem, ".", self.format.ext()))
    }

    pub fn out_path(&self, query: &Query) -> PathBuf {
        match &self.out_path {
            Some(p) => p.clone(),
            None => self.default_path_for(query),
        }
    }

    /// Empty text resets to the derived default.
    pub fn set_path(&mut self, text: &str) {
        let t = text.trim();
        self.out_path = if t.is_empty() { None } else { Some(PathBuf::from(t)) };
    }

    pub fn has_custom_path(&self) -> bool {
        self.out_path.is_some()
    }
}
