// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Locating week files on disk.
//!
//! Week files are named `match_week_<N>.csv` with N counting up from 1.
//! The first missing number ends the sequence; later files are ignored.

use crate::error::CliError;
use std::path::{Path, PathBuf};

/// A week file that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekFile {
    /// The 1-based week number.
    pub week: u32,
    /// The file location.
    pub path: PathBuf,
}

impl WeekFile {
    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn read(&self) -> Result<String, CliError> {
        std::fs::read_to_string(&self.path).map_err(|source| CliError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Returns the path of the given week's file inside `dir`.
#[must_use]
pub fn week_file_path(dir: &Path, week: u32) -> PathBuf {
    dir.join(format!("match_week_{week}.csv"))
}

/// Lists the contiguous run of week files starting at week 1.
///
/// Only existence is checked; files are read later, one at a time.
#[must_use]
pub fn discover_week_files(dir: &Path) -> Vec<WeekFile> {
    (1..)
        .map(|week| WeekFile {
            week,
            path: week_file_path(dir, week),
        })
        .take_while(|file| file.path.is_file())
        .collect()
}
