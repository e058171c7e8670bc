// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors raised at the file-system boundary.

use league_table::CoreError;
use league_table_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the tool before or after the run itself.
///
/// Problems inside week files are not `CliError`s; they are reported as
/// diagnostics and turn into a failed run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The whitelist file does not exist.
    #[error("Team whitelist \"{}\" is not in the directory", .path.display())]
    WhitelistMissing { path: PathBuf },

    /// The whitelist file exists but is not a valid whitelist.
    #[error("Invalid team whitelist \"{}\": {source}", .path.display())]
    InvalidWhitelist { path: PathBuf, source: DomainError },

    /// A file could not be read or written.
    #[error("Failed to access \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output table could not be serialized.
    #[error("Failed to write table \"{}\": {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    /// The run driver rejected an operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}
