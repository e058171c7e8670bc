// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

pub const TEAMS: [&str; 20] = [
    "arsenal",
    "aston_villa",
    "bournemouth",
    "brentford",
    "brighton",
    "burnley",
    "chelsea",
    "crystal_palace",
    "everton",
    "fulham",
    "leeds",
    "liverpool",
    "man_city",
    "man_utd",
    "newcastle",
    "nottm_forest",
    "spurs",
    "sunderland",
    "west_ham",
    "wolves",
];

pub const HEADER: &str = "team_home,home_score,team_away,away_score";

/// A scratch directory removed when dropped.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(name: &str) -> Self {
        let path: PathBuf =
            std::env::temp_dir().join(format!("pl-table-{}-{name}", std::process::id()));
        if path.exists() {
            std::fs::remove_dir_all(&path).unwrap();
        }
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, file: &str, contents: &str) -> PathBuf {
        let path: PathBuf = self.path.join(file);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_week(&self, week: u32, rows: &[&str]) -> PathBuf {
        let mut text: String = format!("{HEADER}\n");
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        self.write(&format!("match_week_{week}.csv"), &text)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
