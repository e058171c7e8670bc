// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::fixture_error::FixtureError;
use crate::types::{RawRow, Team, ValidatedFixture};
use std::collections::HashSet;

/// Removes every fixture involving a team that plays more than once in a week.
///
/// Appearances are counted over both the home and away columns, so a team
/// scheduled against itself is also a duplicate. One `DuplicateTeams` error
/// is produced per repeated team (in order of the team's first appearance),
/// listing each distinct row it appears in. All of those rows are dropped,
/// not just the extra ones.
///
/// Duplicate detection is scoped to a single week file.
///
/// # Arguments
///
/// * `fixtures` - The fixtures that passed field-level validation
/// * `rows` - The week's raw rows, used to echo the offending text
///
/// # Returns
///
/// The surviving fixtures and the duplicate errors.
#[must_use]
pub fn detect_duplicates(
    fixtures: Vec<ValidatedFixture>,
    rows: &[RawRow],
) -> (Vec<ValidatedFixture>, Vec<FixtureError>) {
    let mut appearances: Vec<(Team, Vec<usize>)> = Vec::new();

    for fixture in &fixtures {
        for team in [&fixture.home_team, &fixture.away_team] {
            match appearances.iter_mut().find(|(seen, _)| seen == team) {
                Some((_, seen_rows)) => seen_rows.push(fixture.row),
                None => appearances.push((team.clone(), vec![fixture.row])),
            }
        }
    }

    let mut duplicated: HashSet<Team> = HashSet::new();
    let mut errors: Vec<FixtureError> = Vec::new();

    for (team, mut seen_rows) in appearances {
        if seen_rows.len() < 2 {
            continue;
        }
        seen_rows.dedup();

        let offending: Vec<RawRow> = seen_rows
            .iter()
            .filter_map(|index| rows.iter().find(|row| row.index == *index).cloned())
            .collect();

        duplicated.insert(team.clone());
        errors.push(FixtureError::DuplicateTeams {
            team,
            rows: offending,
        });
    }

    let kept: Vec<ValidatedFixture> = fixtures
        .into_iter()
        .filter(|fixture| !duplicated.iter().any(|team| fixture.involves(team)))
        .collect();

    (kept, errors)
}
