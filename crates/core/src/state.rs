// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_table_domain::{Standing, WeekError};

/// Where a run currently is.
///
/// Loading the whitelist happens before a [`crate::Season`] exists, so a
/// season starts in `ProcessingWeek(1)`. `Done` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Waiting for the given 1-based week.
    ProcessingWeek(u32),
    /// Every available week was processed without a blocking error.
    Done,
    /// The given week contained a blocking error.
    Aborted {
        /// The week that stopped the run.
        week: u32,
    },
}

impl RunState {
    /// Returns whether no further weeks can be processed.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Aborted { .. })
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProcessingWeek(week) => write!(f, "processing week {week}"),
            Self::Done => write!(f, "done"),
            Self::Aborted { week } => write!(f, "aborted at week {week}"),
        }
    }
}

/// How a single week was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekStatus {
    /// No problems; every fixture was aggregated.
    Clean,
    /// Only postponements; the remaining fixtures were aggregated.
    PostponedOnly,
    /// At least one blocking error; nothing was aggregated.
    Blocked,
}

/// The result of processing one week file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekReport {
    /// The 1-based week number.
    pub week: u32,
    /// How the week was handled.
    pub status: WeekStatus,
    /// The number of fixtures folded into the table.
    pub aggregated: usize,
    /// Postponed fixtures found in this week.
    pub postponed: Vec<WeekError>,
    /// Blocking errors found in this week.
    pub blocking: Vec<WeekError>,
}

impl WeekReport {
    /// Returns every error of the week, postponements first.
    pub fn errors(&self) -> impl Iterator<Item = &WeekError> {
        self.postponed.iter().chain(self.blocking.iter())
    }
}

/// The final result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// All weeks were processed; the table can be written.
    Completed {
        /// The ranked league table.
        standings: Vec<Standing>,
        /// The number of weeks aggregated.
        weeks: u32,
        /// Every postponement seen during the run.
        postponed: Vec<WeekError>,
    },
    /// A week contained blocking errors; no table is produced.
    Aborted {
        /// The week that stopped the run.
        week: u32,
        /// The blocking errors of that week.
        errors: Vec<WeekError>,
        /// Every postponement seen during the run.
        postponed: Vec<WeekError>,
    },
}

impl RunOutcome {
    /// Returns whether the run produced a table.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
