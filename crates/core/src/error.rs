// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::RunState;
use league_table_domain::DomainError;

/// Errors that can occur while driving a run.
///
/// Problems inside week files are reported through [`crate::WeekReport`],
/// never through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The whitelist could not be built.
    Whitelist(DomainError),
    /// A week was offered out of sequence.
    UnexpectedWeek {
        /// The week the run is waiting for.
        expected: u32,
        /// The week that was offered.
        found: u32,
    },
    /// The run has already reached a terminal state.
    SeasonClosed(RunState),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Whitelist(err) => write!(f, "Invalid whitelist: {err}"),
            Self::UnexpectedWeek { expected, found } => {
                write!(f, "Expected match week {expected}, got week {found}")
            }
            Self::SeasonClosed(state) => {
                write!(f, "No further weeks can be processed: run is {state}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Whitelist(err)
    }
}
