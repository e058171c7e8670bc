// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structured records for problems found in week files.
//!
//! These are data, not control flow: validation collects every problem it
//! finds and the run driver decides what to do with them.

use crate::types::{FixtureColumn, RawRow, Team};

/// The fixed taxonomy of fixture problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The header row is not the expected four column names.
    BadHeader,
    /// A data row does not split into exactly four fields.
    NotFourFields,
    /// A field is empty.
    MissingValue,
    /// A team name is not in the whitelist.
    InvalidTeam,
    /// A score is not an integer.
    InvalidScore,
    /// A score is a negative integer.
    NegativeScore,
    /// Both scores carry the postponement sentinel.
    Postponed,
    /// A team appears in more than one fixture of the same week.
    DuplicateTeams,
}

impl ErrorKind {
    /// Returns the upper-case code used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadHeader => "BAD_HEADER",
            Self::NotFourFields => "NOT_4_FIELDS",
            Self::MissingValue => "MISSING_VALUE",
            Self::InvalidTeam => "INVALID_TEAM",
            Self::InvalidScore => "INVALID_SCORE",
            Self::NegativeScore => "NEGATIVE_SCORE",
            Self::Postponed => "POSTPONED",
            Self::DuplicateTeams => "DUPLICATE_TEAMS",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A problem found while validating one week file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// The header row is wrong; no data rows were examined.
    BadHeader {
        /// The header row (row 0).
        row: RawRow,
    },
    /// A data row has the wrong number of fields.
    NotFourFields {
        /// The offending row.
        row: RawRow,
        /// The number of fields found.
        found: usize,
    },
    /// A field is empty.
    MissingValue {
        /// The offending row.
        row: RawRow,
        /// The empty column.
        column: FixtureColumn,
    },
    /// A team name is not whitelisted.
    InvalidTeam {
        /// The offending row.
        row: RawRow,
        /// The team column.
        column: FixtureColumn,
        /// The unrecognized team name.
        team: String,
    },
    /// A score does not parse as an integer.
    InvalidScore {
        /// The offending row.
        row: RawRow,
        /// The score column.
        column: FixtureColumn,
        /// The unparseable value.
        value: String,
    },
    /// A score parsed to a negative integer.
    NegativeScore {
        /// The offending row.
        row: RawRow,
        /// The score column.
        column: FixtureColumn,
        /// The parsed value.
        value: i64,
    },
    /// The fixture has not been played yet.
    Postponed {
        /// The postponed row.
        row: RawRow,
    },
    /// A team appears in several fixtures of the same week.
    DuplicateTeams {
        /// The repeated team.
        team: Team,
        /// Every row the team appears in.
        rows: Vec<RawRow>,
    },
}

impl FixtureError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BadHeader { .. } => ErrorKind::BadHeader,
            Self::NotFourFields { .. } => ErrorKind::NotFourFields,
            Self::MissingValue { .. } => ErrorKind::MissingValue,
            Self::InvalidTeam { .. } => ErrorKind::InvalidTeam,
            Self::InvalidScore { .. } => ErrorKind::InvalidScore,
            Self::NegativeScore { .. } => ErrorKind::NegativeScore,
            Self::Postponed { .. } => ErrorKind::Postponed,
            Self::DuplicateTeams { .. } => ErrorKind::DuplicateTeams,
        }
    }

    /// Returns whether this error still allows the rest of the week to count.
    ///
    /// Only postponements are recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Postponed { .. })
    }

    /// Returns the raw rows this error refers to.
    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        match self {
            Self::BadHeader { row }
            | Self::NotFourFields { row, .. }
            | Self::MissingValue { row, .. }
            | Self::InvalidTeam { row, .. }
            | Self::InvalidScore { row, .. }
            | Self::NegativeScore { row, .. }
            | Self::Postponed { row } => std::slice::from_ref(row),
            Self::DuplicateTeams { rows, .. } => rows,
        }
    }

    /// Returns the 0-based row indices this error refers to.
    #[must_use]
    pub fn row_indices(&self) -> Vec<usize> {
        self.rows().iter().map(|row| row.index).collect()
    }

    /// Returns the offending raw text, one entry per row.
    #[must_use]
    pub fn data(&self) -> Vec<&str> {
        self.rows().iter().map(|row| row.text.as_str()).collect()
    }

    /// Returns the columns this error refers to, if any.
    #[must_use]
    pub fn columns(&self) -> Vec<FixtureColumn> {
        match self {
            Self::MissingValue { column, .. }
            | Self::InvalidTeam { column, .. }
            | Self::InvalidScore { column, .. }
            | Self::NegativeScore { column, .. } => vec![*column],
            Self::Postponed { .. } => vec![FixtureColumn::HomeScore, FixtureColumn::AwayScore],
            Self::BadHeader { .. } | Self::NotFourFields { .. } | Self::DuplicateTeams { .. } => {
                Vec::new()
            }
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::BadHeader { .. } => String::from("header does not match expected columns"),
            Self::NotFourFields { found, .. } => format!("expected 4 fields, found {found}"),
            Self::MissingValue { column, .. } => format!("'{}' is empty", column.name()),
            Self::InvalidTeam { team, .. } => format!("unknown team '{team}'"),
            Self::InvalidScore { value, .. } => format!("'{value}' is not a valid score"),
            Self::NegativeScore { value, .. } => format!("score {value} is negative"),
            Self::Postponed { .. } => String::from("fixture postponed"),
            Self::DuplicateTeams { team, .. } => format!("team '{team}' appears more than once"),
        }
    }
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .row_indices()
            .iter()
            .map(ToString::to_string)
            .collect();
        let columns: Vec<String> = self.columns().iter().map(ToString::to_string).collect();

        write!(f, "{} at ", self.kind())?;
        match rows.as_slice() {
            [single] => write!(f, "row {single}")?,
            _ => write!(f, "rows {}", rows.join(", "))?,
        }
        match columns.as_slice() {
            [] => {}
            [single] => write!(f, ", col {single}")?,
            _ => write!(f, ", cols {}", columns.join(", "))?,
        }
        write!(f, ": {} [{}]", self.detail(), self.data().join(" | "))
    }
}

/// A fixture error tagged with the week it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekError {
    /// The 1-based match week.
    pub week: u32,
    /// The underlying error.
    pub error: FixtureError,
}

impl WeekError {
    /// Tags an error with its week.
    #[must_use]
    pub const fn new(week: u32, error: FixtureError) -> Self {
        Self { week, error }
    }
}

impl std::fmt::Display for WeekError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "week {}: {}", self.week, self.error)
    }
}
