// src/specs/fixtures.rs
//! Layout of the season schedule ("Fixtures").
//!
//! Page: `/en/comps/{id}/{Y1-Y2}/schedule/{Y1-Y2}-{League-Name}-Scores-and-Fixtures`.
//! First table: one row per match, played or not (future matches have an empty
//! Score). Matchweek separators come through as `spacer` rows and are dropped
//! by the extractor.

use super::Field;
use crate::config::{consts::BASE_URL, options::Season};
use crate::core::sanitize::url_segment;

pub static FIELDS: [Field; 7] = [
    Field { raw: "Date", label: "Date" },
    Field { raw: "Time", label: "Time" },
    Field { raw: "Home", label: "Home Team" },
    Field { raw: "Score", label: "Score" },
    Field { raw: "Away", label: "Away Team" },
    Field { raw: "Attendance", label: "Attendance" },
    Field { raw: "Venue", label: "Venue" },
];

pub static NUMERIC_COLUMNS: &[usize] = &[5];

pub fn url(name: &str, id: &str, season: &Season) -> String {
    format!(
        "{base}/{id}/{season}/schedule/{season}-{name}-Scores-and-Fixtures",
        base = BASE_URL,
        id = id,
        season = season,
        name = url_segment(name),
    )
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixtureRow {
    pub date: String,
    pub time: String,
    pub home_team: String,
    pub score: String,
    pub away_team: String,
    pub attendance: String,
    pub venue: String,
}

impl From<[String; 7]> for FixtureRow {
    fn from(cells: [String; 7]) -> Self {
        let [date, time, home_team, score, away_team, attendance, venue] = cells;
        Self { date, time, home_team, score, away_team, attendance, venue }
    }
}

impl FixtureRow {
    pub fn cells(&self) -> [&str; 7] {
        [
            self.date.as_str(), self.time.as_str(), self.home_team.as_str(),
            self.score.as_str(), self.away_team.as_str(), self.attendance.as_str(),
            self.venue.as_str(),
        ]
    }

    /// Played matches carry a score like "2–1"; fixtures still to come don't.
    pub fn is_played(&self) -> bool {
        !self.score.trim().is_empty()
    }
}
