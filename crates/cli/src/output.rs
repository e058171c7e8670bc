// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Console and CSV rendering of the ranked table.
//!
//! The CSV layout is a file-format contract:
//! `Pos,Team,MP,H_W,A_W,H_D,A_D,H_L,A_L,H_GF,A_GF,H_GA,A_GA,GD,Pts,Last_5`,
//! one row per team in league order with the team name capitalized and the
//! last five results oldest first.

use crate::error::CliError;
use league_table_domain::{Standing, WeekError};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Column names of `pl_table.csv`, in the order `TableRow` serializes them.
pub const CSV_HEADER: [&str; 16] = [
    "Pos", "Team", "MP", "H_W", "A_W", "H_D", "A_D", "H_L", "A_L", "H_GF", "A_GF", "H_GA",
    "A_GA", "GD", "Pts", "Last_5",
];

/// One line of `pl_table.csv`; the serde names are the column headers.
#[derive(Debug, Serialize)]
struct TableRow {
    #[serde(rename = "Pos")]
    position: usize,
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "MP")]
    played: u32,
    #[serde(rename = "H_W")]
    home_wins: u32,
    #[serde(rename = "A_W")]
    away_wins: u32,
    #[serde(rename = "H_D")]
    home_draws: u32,
    #[serde(rename = "A_D")]
    away_draws: u32,
    #[serde(rename = "H_L")]
    home_losses: u32,
    #[serde(rename = "A_L")]
    away_losses: u32,
    #[serde(rename = "H_GF")]
    home_goals_for: u64,
    #[serde(rename = "A_GF")]
    away_goals_for: u64,
    #[serde(rename = "H_GA")]
    home_goals_against: u64,
    #[serde(rename = "A_GA")]
    away_goals_against: u64,
    #[serde(rename = "GD")]
    goal_difference: i64,
    #[serde(rename = "Pts")]
    points: u32,
    #[serde(rename = "Last_5")]
    last_five: String,
}

impl From<&Standing> for TableRow {
    fn from(standing: &Standing) -> Self {
        let stats = &standing.stats;
        Self {
            position: standing.position,
            team: standing.team.display_name(),
            played: stats.played(),
            home_wins: stats.home_wins(),
            away_wins: stats.away_wins(),
            home_draws: stats.home_draws(),
            away_draws: stats.away_draws(),
            home_losses: stats.home_losses(),
            away_losses: stats.away_losses(),
            home_goals_for: stats.home_goals_for(),
            away_goals_for: stats.away_goals_for(),
            home_goals_against: stats.home_goals_against(),
            away_goals_against: stats.away_goals_against(),
            goal_difference: stats.goal_difference(),
            points: stats.points(),
            last_five: stats.last_five(),
        }
    }
}

/// Renders the fixed-width console table.
#[must_use]
pub fn render_table(standings: &[Standing]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(standings.len() + 1);
    lines.push(format!(
        "{:<3} {:<15}{:>3}{:>3}{:>3}{:>3}{:>4}{:>4}{:>4}{:>4}  {}",
        "Pos", "Team", "MP", "W", "D", "L", "GF", "GA", "GD", "Pts", "Last5"
    ));

    for standing in standings {
        let stats = &standing.stats;
        lines.push(format!(
            "{:<3} {:<15}{:>3}{:>3}{:>3}{:>3}{:>4}{:>4}{:>4}{:>4}  {}",
            standing.position,
            standing.team.display_name(),
            stats.played(),
            stats.wins(),
            stats.draws(),
            stats.losses(),
            stats.goals_for(),
            stats.goals_against(),
            stats.goal_difference(),
            stats.points(),
            stats.last_five(),
        ));
    }

    lines.join("\n")
}

/// Renders one diagnostic line per error.
#[must_use]
pub fn render_diagnostics(errors: &[WeekError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Writes the ranked table as CSV to any writer.
///
/// The header comes from the first serialized row; an empty table still
/// gets a header line.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized or written.
pub fn write_table<W: Write>(out: W, standings: &[Standing]) -> Result<(), csv::Error> {
    let mut writer: csv::Writer<W> = csv::Writer::from_writer(out);

    if standings.is_empty() {
        writer.write_record(CSV_HEADER)?;
    }
    for standing in standings {
        writer.serialize(TableRow::from(standing))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the ranked table to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_table_file(path: &Path, standings: &[Standing]) -> Result<(), CliError> {
    let file: std::fs::File = std::fs::File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_table(file, standings).map_err(|source| CliError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
