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

mod error;
mod season;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::CoreError;
pub use season::{Season, diagnose_week};
pub use state::{RunOutcome, RunState, WeekReport, WeekStatus};
