// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Team;
use std::collections::BTreeSet;

/// The number of teams a season whitelist must contain.
pub const WHITELIST_SIZE: usize = 20;

/// The closed set of valid team identifiers for a season.
///
/// A whitelist is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    teams: BTreeSet<Team>,
}

impl Whitelist {
    /// Builds a whitelist from whitespace-separated team tokens.
    ///
    /// Only the token count is checked. A team listed more than once
    /// collapses into a single entry, so the result may hold fewer than
    /// [`WHITELIST_SIZE`] teams.
    ///
    /// # Arguments
    ///
    /// * `text` - The raw whitelist contents
    ///
    /// # Errors
    ///
    /// Returns an error if the number of tokens is not exactly
    /// [`WHITELIST_SIZE`].
    pub fn from_tokens(text: &str) -> Result<Self, DomainError> {
        let tokens: Vec<Team> = text.split_whitespace().map(Team::new).collect();

        if tokens.len() != WHITELIST_SIZE {
            return Err(DomainError::WhitelistSize {
                found: tokens.len(),
                expected: WHITELIST_SIZE,
            });
        }

        Ok(Self {
            teams: tokens.into_iter().collect(),
        })
    }

    /// Checks whether a normalized team name is whitelisted.
    #[must_use]
    pub fn contains(&self, team: &str) -> bool {
        self.teams.contains(&Team::new(team))
    }

    /// Returns the number of teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Returns whether the whitelist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Iterates the teams in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }
}
