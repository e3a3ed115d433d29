// src/specs/standings.rs
//! Layout of the league table ("Standings").
//!
//! Page: `/en/comps/{id}/{Y1-Y2}/{Y1-Y2}-{League-Name}-Stats`. The first table
//! on that page is the overall league table, one row per squad in rank order.

use super::Field;
use crate::config::{consts::BASE_URL, options::Season};
use crate::core::sanitize::{parse_number, url_segment};

pub static FIELDS: [Field; 11] = [
    Field { raw: "Rk", label: "Rank" },
    Field { raw: "Squad", label: "Team" },
    Field { raw: "MP", label: "Matches Played" },
    Field { raw: "W", label: "Wins" },
    Field { raw: "D", label: "Draws" },
    Field { raw: "L", label: "Losses" },
    Field { raw: "GF", label: "Goals For" },
    Field { raw: "GA", label: "Goals Against" },
    Field { raw: "GD", label: "Goal Difference" },
    Field { raw: "Pts", label: "Points" },
    Field { raw: "Attendance", label: "Attendance" },
];

/// Everything but Team.
pub static NUMERIC_COLUMNS: &[usize] = &[0, 2, 3, 4, 5, 6, 7, 8, 9, 10];

pub fn url(name: &str, id: &str, season: &Season) -> String {
    format!(
        "{base}/{id}/{season}/{season}-{name}-Stats",
        base = BASE_URL,
        id = id,
        season = season,
        name = url_segment(name),
    )
}

/// Numeric columns of a standings row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    Rank,
    MatchesPlayed,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    Points,
    Attendance,
}

impl Stat {
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Rank => "Rank",
            Stat::MatchesPlayed => "Matches Played",
            Stat::Wins => "Wins",
            Stat::Draws => "Draws",
            Stat::Losses => "Losses",
            Stat::GoalsFor => "Goals For",
            Stat::GoalsAgainst => "Goals Against",
            Stat::GoalDifference => "Goal Difference",
            Stat::Points => "Points",
            Stat::Attendance => "Attendance",
        }
    }
}

/// One squad's line in the league table. Cells are kept as found on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StandingsRow {
    pub rank: String,
    pub team: String,
    pub matches_played: String,
    pub wins: String,
    pub draws: String,
    pub losses: String,
    pub goals_for: String,
    pub goals_against: String,
    pub goal_difference: String,
    pub points: String,
    pub attendance: String,
}

impl From<[String; 11]> for StandingsRow {
    fn from(cells: [String; 11]) -> Self {
        let [rank, team, matches_played, wins, draws, losses, goals_for, goals_against, goal_difference, points, attendance] =
            cells;
        Self {
            rank, team, matches_played, wins, draws, losses,
            goals_for, goals_against, goal_difference, points, attendance,
        }
    }
}

impl StandingsRow {
    /// Schema order, matching `FIELDS`.
    pub fn cells(&self) -> [&str; 11] {
        [
            self.rank.as_str(), self.team.as_str(), self.matches_played.as_str(),
            self.wins.as_str(), self.draws.as_str(), self.losses.as_str(),
            self.goals_for.as_str(), self.goals_against.as_str(),
            self.goal_difference.as_str(), self.points.as_str(), self.attendance.as_str(),
        ]
    }

    fn cell(&self, stat: Stat) -> &str {
        match stat {
            Stat::Rank => &self.rank,
            Stat::MatchesPlayed => &self.matches_played,
            Stat::Wins => &self.wins,
            Stat::Draws => &self.draws,
            Stat::Losses => &self.losses,
            Stat::GoalsFor => &self.goals_for,
            Stat::GoalsAgainst => &self.goals_against,
            Stat::GoalDifference => &self.goal_difference,
            Stat::Points => &self.points,
            Stat::Attendance => &self.attendance,
        }
    }

    /// `None` when the cell is blank or not a number.
    pub fn value(&self, stat: Stat) -> Option<f64> {
        parse_number(self.cell(stat))
    }

    pub fn rank_value(&self) -> Option<f64> {
        self.value(Stat::Rank)
    }
}
