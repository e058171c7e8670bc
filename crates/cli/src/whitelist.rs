// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CliError;
use league_table_domain::{WHITELIST_SIZE, Whitelist};
use std::path::Path;
use tracing::{info, warn};

/// Reads and validates the team whitelist file.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or does not hold
/// exactly the expected number of team tokens. Repeated teams are not an
/// error; they collapse into one entry and a warning is logged.
pub fn load_whitelist(path: &Path) -> Result<Whitelist, CliError> {
    if !path.exists() {
        return Err(CliError::WhitelistMissing {
            path: path.to_path_buf(),
        });
    }

    let text: String = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let whitelist: Whitelist =
        Whitelist::from_tokens(&text).map_err(|source| CliError::InvalidWhitelist {
            path: path.to_path_buf(),
            source,
        })?;

    if whitelist.len() < WHITELIST_SIZE {
        warn!(
            path = %path.display(),
            teams = whitelist.len(),
            "Whitelist repeats a team; duplicates were collapsed"
        );
    }
    info!(path = %path.display(), teams = whitelist.len(), "Loaded team whitelist");
    Ok(whitelist)
}
