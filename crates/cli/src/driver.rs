// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sequences the whole run: whitelist, week files, table output.

use crate::discovery::{WeekFile, discover_week_files};
use crate::error::CliError;
use crate::output::write_table_file;
use crate::whitelist::load_whitelist;
use league_table::{RunOutcome, Season, WeekReport, diagnose_week};
use league_table_domain::{WeekError, Whitelist};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where to read inputs and write the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory holding the whitelist and week files.
    pub data_dir: PathBuf,
    /// Whitelist file; relative paths are resolved under `data_dir`.
    pub whitelist: PathBuf,
    /// Output CSV; relative paths are resolved under `data_dir`.
    pub output: PathBuf,
    /// Keep validating later weeks after an abort, for diagnostics only.
    pub report_all: bool,
}

impl RunConfig {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    /// The resolved whitelist location.
    #[must_use]
    pub fn whitelist_path(&self) -> PathBuf {
        self.resolve(&self.whitelist)
    }

    /// The resolved output location.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }
}

/// Everything the caller needs to report a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The run outcome from the driver.
    pub outcome: RunOutcome,
    /// Every fixture problem found, in week order.
    pub diagnostics: Vec<WeekError>,
    /// The table file, if one was written.
    pub written: Option<PathBuf>,
}

/// Runs the tool end to end.
///
/// Week files are read one at a time and only while the season is still
/// accepting weeks. After an abort, later weeks are only validated when
/// `report_all` is set.
///
/// # Errors
///
/// Returns an error if the whitelist is missing or invalid, or a file
/// cannot be read or written. Fixture problems are not errors; they end up
/// in [`RunSummary::diagnostics`].
pub fn run(config: &RunConfig) -> Result<RunSummary, CliError> {
    let whitelist: Whitelist = load_whitelist(&config.whitelist_path())?;
    let week_files: Vec<WeekFile> = discover_week_files(&config.data_dir);
    info!(
        dir = %config.data_dir.display(),
        weeks = week_files.len(),
        "Discovered week files"
    );

    let mut season: Season = Season::new(whitelist);
    let mut diagnostics: Vec<WeekError> = Vec::new();
    let mut remaining = week_files.iter();

    for file in remaining.by_ref() {
        info!(week = file.week, path = %file.path.display(), "Parsing week file");
        let text: String = file.read()?;
        let report: WeekReport = season.ingest_week(file.week, &text)?;
        diagnostics.extend(report.errors().cloned());
        if season.next_week().is_none() {
            break;
        }
    }

    if config.report_all && season.next_week().is_none() {
        for file in remaining {
            let text: String = file.read()?;
            let errors: Vec<WeekError> = diagnose_week(file.week, &text, season.whitelist());
            warn!(
                week = file.week,
                errors = errors.len(),
                "Validated week after abort; not aggregated"
            );
            diagnostics.extend(errors);
        }
    }

    let outcome: RunOutcome = season.finish();
    let written: Option<PathBuf> = match &outcome {
        RunOutcome::Completed { standings, .. } => {
            let path: PathBuf = config.output_path();
            write_table_file(&path, standings)?;
            info!(path = %path.display(), teams = standings.len(), "Table written");
            Some(path)
        }
        RunOutcome::Aborted { .. } => None,
    };

    Ok(RunSummary {
        outcome,
        diagnostics,
        written,
    })
}
