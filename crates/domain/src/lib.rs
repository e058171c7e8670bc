// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod duplicates;
mod error;
mod fixture_error;
mod standings;
mod types;
mod validation;
mod whitelist;

#[cfg(test)]
mod tests;

pub use duplicates::detect_duplicates;
pub use error::DomainError;
pub use fixture_error::{ErrorKind, FixtureError, WeekError};
pub use standings::{FORM_LENGTH, Standing, StandingsTable, TeamStats};
pub use types::{FixtureColumn, MatchResult, RawRow, Team, ValidatedFixture};
pub use validation::{
    EXPECTED_HEADER, POSTPONED_SENTINEL, ValidatedWeek, normalize_rows, validate_fixtures,
};
pub use whitelist::{WHITELIST_SIZE, Whitelist};

/// Points awarded for a win.
pub const POINTS_FOR_WIN: u32 = 3;

/// Points awarded for a draw.
pub const POINTS_FOR_DRAW: u32 = 1;
