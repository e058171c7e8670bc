// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A normalized team identifier.
///
/// Identifiers are trimmed and lowercased on construction, so two teams are
/// equal exactly when their normalized strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Team(String);

impl Team {
    /// Creates a new team identifier from raw input.
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw identifier (will be trimmed and lowercased)
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Returns the normalized identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }

    /// Returns the identifier with its first character capitalized.
    ///
    /// This is the form used in the rendered table (`man_city` -> `Man_city`).
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four fixed columns of a fixture row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FixtureColumn {
    /// `team_home`
    HomeTeam,
    /// `home_score`
    HomeScore,
    /// `team_away`
    AwayTeam,
    /// `away_score`
    AwayScore,
}

impl FixtureColumn {
    /// All columns in file order.
    pub const ALL: [Self; 4] = [
        Self::HomeTeam,
        Self::HomeScore,
        Self::AwayTeam,
        Self::AwayScore,
    ];

    /// Returns the 0-based column index within a row.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::HomeTeam => 0,
            Self::HomeScore => 1,
            Self::AwayTeam => 2,
            Self::AwayScore => 3,
        }
    }

    /// Returns the header name of this column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HomeTeam => "team_home",
            Self::HomeScore => "home_score",
            Self::AwayTeam => "team_away",
            Self::AwayScore => "away_score",
        }
    }

    /// Returns whether this column holds a team name.
    #[must_use]
    pub const fn is_team(self) -> bool {
        matches!(self, Self::HomeTeam | Self::AwayTeam)
    }
}

impl std::fmt::Display for FixtureColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A single line of a week file, as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// The 0-based line number (row 0 is the header).
    pub index: usize,
    /// The line text, trimmed and lowercased.
    pub text: String,
}

impl RawRow {
    /// Creates a new raw row, normalizing its text.
    #[must_use]
    pub fn new(index: usize, line: &str) -> Self {
        Self {
            index,
            text: line.trim().to_lowercase(),
        }
    }
}

/// A fixture row that passed every field-level check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFixture {
    /// The row this fixture was read from.
    pub row: usize,
    /// The home team (present in the whitelist).
    pub home_team: Team,
    /// Goals scored by the home team.
    pub home_score: u32,
    /// The away team (present in the whitelist).
    pub away_team: Team,
    /// Goals scored by the away team.
    pub away_score: u32,
}

impl ValidatedFixture {
    /// Returns the result of this fixture from the home side's perspective.
    #[must_use]
    pub const fn home_result(&self) -> MatchResult {
        MatchResult::from_scores(self.home_score, self.away_score)
    }

    /// Returns whether the given team plays in this fixture.
    #[must_use]
    pub fn involves(&self, team: &Team) -> bool {
        &self.home_team == team || &self.away_team == team
    }
}

/// The outcome of a fixture for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// The team scored more goals.
    Win,
    /// Both teams scored the same number of goals.
    Draw,
    /// The team scored fewer goals.
    Loss,
}

impl MatchResult {
    /// Computes the result for a team given its goals and the opponent's.
    #[must_use]
    pub const fn from_scores(scored: u32, conceded: u32) -> Self {
        if scored > conceded {
            Self::Win
        } else if scored < conceded {
            Self::Loss
        } else {
            Self::Draw
        }
    }

    /// Returns the result as seen by the opponent.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Draw => Self::Draw,
            Self::Loss => Self::Win,
        }
    }

    /// Returns the single-letter form code (`W`, `D` or `L`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Win => 'W',
            Self::Draw => 'D',
            Self::Loss => 'L',
        }
    }
}
