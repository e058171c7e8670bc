// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The run driver.
//!
//! A [`Season`] owns the standings table for the duration of a run and
//! accepts week files strictly in order. Each week is validated in full
//! before anything is aggregated:
//!
//! - no errors, or only postponements: the valid fixtures are aggregated
//!   and the season moves on to the next week
//! - any other error: nothing from the week is aggregated and the season
//!   is aborted

use crate::error::CoreError;
use crate::state::{RunOutcome, RunState, WeekReport, WeekStatus};
use league_table_domain::{
    FixtureError, StandingsTable, ValidatedWeek, WeekError, Whitelist, validate_fixtures,
};
use tracing::{debug, error, info, warn};

/// Cumulative state of one run over the week files.
#[derive(Debug, Clone)]
pub struct Season {
    whitelist: Whitelist,
    table: StandingsTable,
    state: RunState,
    weeks_aggregated: u32,
    postponed: Vec<WeekError>,
    blocking: Vec<WeekError>,
}

impl Season {
    /// Starts a season with an already loaded whitelist.
    #[must_use]
    pub const fn new(whitelist: Whitelist) -> Self {
        Self {
            whitelist,
            table: StandingsTable::new(),
            state: RunState::ProcessingWeek(1),
            weeks_aggregated: 0,
            postponed: Vec::new(),
            blocking: Vec::new(),
        }
    }

    /// Loads the whitelist from raw text and starts a season.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Whitelist` if the text does not hold exactly the
    /// expected number of team tokens.
    pub fn load(whitelist_text: &str) -> Result<Self, CoreError> {
        let whitelist: Whitelist = Whitelist::from_tokens(whitelist_text)?;
        debug!(teams = whitelist.len(), "Whitelist loaded");
        Ok(Self::new(whitelist))
    }

    /// The current run state.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// The week the season is waiting for, if it is still running.
    #[must_use]
    pub const fn next_week(&self) -> Option<u32> {
        match self.state {
            RunState::ProcessingWeek(week) => Some(week),
            RunState::Done | RunState::Aborted { .. } => None,
        }
    }

    /// The teams accepted in week files.
    #[must_use]
    pub const fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// The standings accumulated so far.
    #[must_use]
    pub const fn table(&self) -> &StandingsTable {
        &self.table
    }

    /// Every postponement seen so far.
    #[must_use]
    pub fn postponed(&self) -> &[WeekError] {
        &self.postponed
    }

    /// The blocking errors that aborted the run, if any.
    #[must_use]
    pub fn blocking_errors(&self) -> &[WeekError] {
        &self.blocking
    }

    /// Validates one week file and, if allowed, aggregates it.
    ///
    /// # Arguments
    ///
    /// * `week` - The 1-based week number; must be the week the season expects
    /// * `text` - The raw week file contents
    ///
    /// # Returns
    ///
    /// A report describing how the week was handled. Fixture problems are
    /// reported here, not as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The season has already finished or aborted
    /// - `week` is not the next expected week
    pub fn ingest_week(&mut self, week: u32, text: &str) -> Result<WeekReport, CoreError> {
        let expected: u32 = match self.state {
            RunState::ProcessingWeek(expected) => expected,
            RunState::Done | RunState::Aborted { .. } => {
                return Err(CoreError::SeasonClosed(self.state));
            }
        };
        if week != expected {
            return Err(CoreError::UnexpectedWeek {
                expected,
                found: week,
            });
        }

        let validated: ValidatedWeek = validate_fixtures(text, &self.whitelist);
        let (postponed, blocking): (Vec<FixtureError>, Vec<FixtureError>) = validated
            .errors
            .into_iter()
            .partition(FixtureError::is_recoverable);
        let postponed: Vec<WeekError> = tag(week, postponed);
        let blocking: Vec<WeekError> = tag(week, blocking);

        for err in postponed.iter().chain(blocking.iter()) {
            debug!(week, kind = %err.error.kind(), "{}", err.error);
        }
        if !postponed.is_empty() {
            warn!(week, postponed = postponed.len(), "Postponed fixtures found");
        }

        if !blocking.is_empty() {
            error!(
                week,
                errors = blocking.len(),
                "Week contains blocking errors; aborting run"
            );
            self.state = RunState::Aborted { week };
            self.postponed.extend(postponed.iter().cloned());
            self.blocking.clone_from(&blocking);
            return Ok(WeekReport {
                week,
                status: WeekStatus::Blocked,
                aggregated: 0,
                postponed,
                blocking,
            });
        }

        let aggregated: usize = validated.fixtures.len();
        self.table = std::mem::take(&mut self.table).aggregate(&validated.fixtures);
        self.weeks_aggregated += 1;
        self.state = RunState::ProcessingWeek(week + 1);
        self.postponed.extend(postponed.iter().cloned());

        let status: WeekStatus = if postponed.is_empty() {
            WeekStatus::Clean
        } else {
            WeekStatus::PostponedOnly
        };
        info!(
            week,
            fixtures = aggregated,
            postponed = postponed.len(),
            "Week aggregated"
        );

        Ok(WeekReport {
            week,
            status,
            aggregated,
            postponed,
            blocking,
        })
    }

    /// Signals that no further week files exist.
    ///
    /// A running season moves to `Done`; terminal states are unchanged.
    pub fn end_of_input(&mut self) -> RunState {
        if let RunState::ProcessingWeek(next) = self.state {
            info!(weeks = next - 1, "No further week files; run complete");
            self.state = RunState::Done;
        }
        self.state
    }

    /// Ends the run and produces its outcome.
    ///
    /// A completed run yields the ranked table; an aborted one yields the
    /// errors that stopped it.
    #[must_use]
    pub fn finish(mut self) -> RunOutcome {
        match self.end_of_input() {
            RunState::Aborted { week } => RunOutcome::Aborted {
                week,
                errors: self.blocking,
                postponed: self.postponed,
            },
            RunState::Done | RunState::ProcessingWeek(_) => RunOutcome::Completed {
                standings: self.table.ranked(),
                weeks: self.weeks_aggregated,
                postponed: self.postponed,
            },
        }
    }
}

/// Validates a week file without touching any standings.
///
/// Used to keep reporting problems in later weeks after a run has aborted.
#[must_use]
pub fn diagnose_week(week: u32, text: &str, whitelist: &Whitelist) -> Vec<WeekError> {
    tag(week, validate_fixtures(text, whitelist).errors)
}

fn tag(week: u32, errors: Vec<FixtureError>) -> Vec<WeekError> {
    errors
        .into_iter()
        .map(|error| WeekError::new(week, error))
        .collect()
}
