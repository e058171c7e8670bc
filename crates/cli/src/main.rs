// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `pl-table` builds a league table from weekly fixture files.
//!
//! The data directory holds a team whitelist and a sequence of
//! `match_week_<N>.csv` files. Weeks are validated and aggregated in order;
//! the ranked table is printed and written to `pl_table.csv` unless a week
//! contains a blocking error.

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

mod discovery;
mod driver;
mod error;
mod output;
#[cfg(test)]
mod test_support;
mod whitelist;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use driver::{RunConfig, RunSummary, run};
use league_table::RunOutcome;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;

/// Generate a league table from weekly fixture files.
#[derive(Debug, Parser)]
#[command(name = "pl-table", version, about)]
struct Args {
    /// Directory containing the whitelist and `match_week_<N>.csv` files
    #[arg(long, short = 'd', default_value = ".")]
    data_dir: PathBuf,

    /// Team whitelist file, relative to the data directory unless absolute
    #[arg(long, short = 'w', default_value = "whitelist.txt")]
    whitelist: PathBuf,

    /// Output table file, relative to the data directory unless absolute
    #[arg(long, short = 'o', default_value = "pl_table.csv")]
    output: PathBuf,

    /// Keep validating later weeks after a blocking error (nothing more is aggregated)
    #[arg(long)]
    report_all: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn config(&self) -> RunConfig {
        RunConfig {
            data_dir: self.data_dir.clone(),
            whitelist: self.whitelist.clone(),
            output: self.output.clone(),
            report_all: self.report_all,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    info!(data_dir = %args.data_dir.display(), "Starting league table run");

    match run(&args.config()) {
        Ok(summary) => {
            if !report(&summary) {
                std::process::exit(1);
            }
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Prints the run result to stdout and returns whether a table was produced.
fn report(summary: &RunSummary) -> bool {
    for line in output::render_diagnostics(&summary.diagnostics) {
        println!("{line}");
    }

    match &summary.outcome {
        RunOutcome::Completed { standings, .. } => {
            println!("{}", output::render_table(standings));
            if let Some(path) = &summary.written {
                println!("Table written to {}", path.display());
            }
            true
        }
        RunOutcome::Aborted { .. } => {
            let blocking: usize = summary
                .diagnostics
                .iter()
                .filter(|e| !e.error.is_recoverable())
                .count();
            println!("{blocking} error(s) found, could not generate table!");
            false
        }
    }
}
