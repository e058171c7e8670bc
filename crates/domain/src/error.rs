// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing domain objects.
///
/// Problems found inside fixture files are not `DomainError`s; they are
/// collected as [`crate::FixtureError`] records instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The whitelist does not contain the expected number of team tokens.
    WhitelistSize {
        /// The number of tokens found.
        found: usize,
        /// The number of tokens required.
        expected: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WhitelistSize { found, expected } => {
                write!(
                    f,
                    "{found} teams found instead of the allowed {expected}. \
                     Check for spaces instead of underscores in team names"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
