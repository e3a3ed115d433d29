// src/charts.rs
//! Chart builders for the Standings table.
//!
//! Both builders are pure: they read rows and return a chart model. Painting
//! lives in `gui::components::charts`; the CLI prints the same models as text.

use eframe::egui::Color32;
use thiserror::Error;

use crate::specs::standings::{Stat, StandingsRow};

/// Radar axes, clockwise from the top.
pub const COMPARISON_AXES: [Stat; 7] = [
    Stat::MatchesPlayed,
    Stat::Wins,
    Stat::Draws,
    Stat::Losses,
    Stat::GoalsFor,
    Stat::GoalsAgainst,
    Stat::Points,
];

pub const FIRST_COLOR: Color32 = Color32::from_rgb(0, 0, 255);
pub const SECOND_COLOR: Color32 = Color32::from_rgb(173, 216, 230);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("At least two teams are needed for a comparison")]
    NotEnoughTeams,
    #[error("Team {0:?} is not in the table")]
    UnknownTeam(String),
}

/* ---------------- Bar chart ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Degrees, negative = counter-clockwise.
    pub tick_angle_deg: f32,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Tallest bar, or 0 for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// Points per team, in table order. A blank or unreadable Points cell draws
/// as a zero-height bar.
pub fn bar_chart(rows: &[StandingsRow]) -> BarChart {
    BarChart {
        title: "Team Points",
        x_label: "Team",
        y_label: "Points",
        tick_angle_deg: -45.0,
        bars: rows
            .iter()
            .map(|r| Bar {
                label: r.team.clone(),
                value: r.value(Stat::Points).unwrap_or(0.0),
            })
            .collect(),
    }
}

/* ---------------- Radar chart ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct RadarSeries {
    pub team: String,
    pub color: Color32,
    /// One value per axis, same order as `RadarChart::axes`.
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarChart {
    pub title: String,
    pub axes: Vec<&'static str>,
    pub series: Vec<RadarSeries>,
    /// Shared radial scale, `(0, max)`.
    pub range: (f64, f64),
}

impl RadarChart {
    /// Polygon corners for `series` on a unit circle, y pointing down, first
    /// axis at the top. The GUI scales and closes the ring.
    pub fn vertices(&self, series: &RadarSeries) -> Vec<[f32; 2]> {
        let n = self.axes.len().max(1);
        let span = self.range.1 - self.range.0;
        series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let frac = if span > 0.0 { ((v - self.range.0) / span).clamp(0.0, 1.0) } else { 0.0 };
                let [x, y] = axis_direction(i, n);
                [x * frac as f32, y * frac as f32]
            })
            .collect()
    }
}

/// Unit vector of axis `i` of `n`.
pub fn axis_direction(i: usize, n: usize) -> [f32; 2] {
    let theta = std::f32::consts::TAU * i as f32 / n.max(1) as f32;
    [theta.sin(), -theta.cos()]
}

/// The two teams with the smallest Rank, ties kept in row order. Rows whose
/// rank does not parse come after every ranked row.
pub fn default_pair(rows: &[StandingsRow]) -> Option<(&str, &str)> {
    let key = |r: &StandingsRow| r.rank_value().unwrap_or(f64::INFINITY);

    let mut best: Option<(usize, f64)> = None;
    let mut second: Option<(usize, f64)> = None;
    for (i, row) in rows.iter().enumerate() {
        let k = key(row);
        match best {
            Some((_, b)) if k >= b => {
                if second.is_none_or(|(_, s)| k < s) {
                    second = Some((i, k));
                }
            }
            _ => {
                second = best;
                best = Some((i, k));
            }
        }
    }
    let (a, _) = best?;
    let (b, _) = second?;
    Some((rows[a].team.as_str(), rows[b].team.as_str()))
}

/// Largest value across every row and every comparison axis.
pub fn radial_max(rows: &[StandingsRow]) -> f64 {
    rows.iter()
        .flat_map(|r| COMPARISON_AXES.iter().filter_map(move |s| r.value(*s)))
        .fold(0.0, f64::max)
}

/// Radar comparison of two teams over `COMPARISON_AXES`. Picking the same team
/// twice is allowed and gives two coincident polygons.
pub fn comparison_chart(rows: &[StandingsRow], team1: &str, team2: &str) -> Result<RadarChart, ChartError> {
    if rows.len() < 2 {
        return Err(ChartError::NotEnoughTeams);
    }

    let series = |team: &str, color: Color32| -> Result<RadarSeries, ChartError> {
        let row = rows
            .iter()
            .find(|r| r.team == team)
            .ok_or_else(|| ChartError::UnknownTeam(s!(team)))?;
        Ok(RadarSeries {
            team: row.team.clone(),
            color,
            values: COMPARISON_AXES.iter().map(|s| row.value(*s).unwrap_or(0.0)).collect(),
        })
    };

    let first = series(team1, FIRST_COLOR)?;
    let second = series(team2, SECOND_COLOR)?;
    logd!("Chart: compare {:?} vs {:?}", first.team, second.team);

    Ok(RadarChart {
        title: format!("Comparison between {} and {}", team1, team2),
        axes: COMPARISON_AXES.iter().map(Stat::label).collect(),
        series: vec![first, second],
        range: (0.0, radial_max(rows)),
    })
}
