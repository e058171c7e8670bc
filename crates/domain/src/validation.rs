// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::duplicates::detect_duplicates;
use crate::fixture_error::FixtureError;
use crate::types::{FixtureColumn, RawRow, Team, ValidatedFixture};
use crate::whitelist::Whitelist;

/// The only accepted header row (compared after normalization).
pub const EXPECTED_HEADER: &str = "team_home,home_score,team_away,away_score";

/// The score value marking a fixture that has not been played.
pub const POSTPONED_SENTINEL: &str = "tbd";

/// The outcome of validating one week file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidatedWeek {
    /// Fixtures that passed every check, in file order.
    pub fixtures: Vec<ValidatedFixture>,
    /// Every problem found, in row order, with duplicate-team errors last.
    pub errors: Vec<FixtureError>,
}

impl ValidatedWeek {
    /// Returns whether any error would block aggregation of this week.
    #[must_use]
    pub fn has_blocking_errors(&self) -> bool {
        self.errors.iter().any(|e| !e.is_recoverable())
    }
}

/// Splits file text into numbered, normalized rows.
///
/// Row 0 is the header.
#[must_use]
pub fn normalize_rows(text: &str) -> Vec<RawRow> {
    text.lines()
        .enumerate()
        .map(|(index, line)| RawRow::new(index, line))
        .collect()
}

/// Validates the contents of one week file against the whitelist.
///
/// Every data row is checked field by field and all problems are collected,
/// not just the first. Rows with any problem are left out of the validated
/// fixtures. Duplicate detection then runs over the surviving fixtures.
///
/// This function is pure: validating the same text twice gives the same
/// result.
///
/// # Arguments
///
/// * `text` - The raw week file contents
/// * `whitelist` - The valid teams for the season
#[must_use]
pub fn validate_fixtures(text: &str, whitelist: &Whitelist) -> ValidatedWeek {
    let rows: Vec<RawRow> = normalize_rows(text);

    let header: RawRow = rows.first().cloned().unwrap_or_else(|| RawRow::new(0, ""));
    if header.text != EXPECTED_HEADER {
        return ValidatedWeek {
            fixtures: Vec::new(),
            errors: vec![FixtureError::BadHeader { row: header }],
        };
    }

    let mut candidates: Vec<ValidatedFixture> = Vec::new();
    let mut errors: Vec<FixtureError> = Vec::new();

    for row in rows.iter().skip(1) {
        match validate_row(row, whitelist) {
            Ok(fixture) => candidates.push(fixture),
            Err(mut row_errors) => errors.append(&mut row_errors),
        }
    }

    let (fixtures, mut duplicate_errors) = detect_duplicates(candidates, &rows);
    errors.append(&mut duplicate_errors);

    ValidatedWeek { fixtures, errors }
}

enum ScoreProblem {
    NotInteger,
    Negative(i64),
}

fn parse_score(field: &str) -> Result<u32, ScoreProblem> {
    let value: i64 = field.parse().map_err(|_| ScoreProblem::NotInteger)?;
    if value < 0 {
        return Err(ScoreProblem::Negative(value));
    }
    u32::try_from(value).map_err(|_| ScoreProblem::NotInteger)
}

/// Checks a single data row.
///
/// A row is postponed only when both scores are the sentinel; in that case
/// the score checks are skipped but the team checks still run.
fn validate_row(
    row: &RawRow,
    whitelist: &Whitelist,
) -> Result<ValidatedFixture, Vec<FixtureError>> {
    let fields: Vec<&str> = row.text.split(',').map(str::trim).collect();

    if fields.len() != FixtureColumn::ALL.len() {
        return Err(vec![FixtureError::NotFourFields {
            row: row.clone(),
            found: fields.len(),
        }]);
    }

    let postponed: bool = fields[FixtureColumn::HomeScore.index()] == POSTPONED_SENTINEL
        && fields[FixtureColumn::AwayScore.index()] == POSTPONED_SENTINEL;

    let mut errors: Vec<FixtureError> = Vec::new();
    if postponed {
        errors.push(FixtureError::Postponed { row: row.clone() });
    }

    let mut home_goals: Option<u32> = None;
    let mut away_goals: Option<u32> = None;

    for (column, field) in FixtureColumn::ALL.into_iter().zip(fields.iter().copied()) {
        if field.is_empty() {
            errors.push(FixtureError::MissingValue {
                row: row.clone(),
                column,
            });
            continue;
        }

        if column.is_team() {
            if !whitelist.contains(field) {
                errors.push(FixtureError::InvalidTeam {
                    row: row.clone(),
                    column,
                    team: field.to_string(),
                });
            }
            continue;
        }

        if postponed {
            continue;
        }

        match parse_score(field) {
            Ok(goals) if column == FixtureColumn::HomeScore => home_goals = Some(goals),
            Ok(goals) => away_goals = Some(goals),
            Err(ScoreProblem::NotInteger) => errors.push(FixtureError::InvalidScore {
                row: row.clone(),
                column,
                value: field.to_string(),
            }),
            Err(ScoreProblem::Negative(value)) => errors.push(FixtureError::NegativeScore {
                row: row.clone(),
                column,
                value,
            }),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    match (home_goals, away_goals) {
        (Some(home_score), Some(away_score)) => Ok(ValidatedFixture {
            row: row.index,
            home_team: Team::new(fields[FixtureColumn::HomeTeam.index()]),
            home_score,
            away_team: Team::new(fields[FixtureColumn::AwayTeam.index()]),
            away_score,
        }),
        _ => Err(errors),
    }
}
