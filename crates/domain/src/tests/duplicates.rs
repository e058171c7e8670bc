// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_whitelist, fixture, week_file};
use crate::{
    FixtureError, RawRow, Team, ValidatedFixture, ValidatedWeek, Whitelist, detect_duplicates,
    normalize_rows, validate_fixtures,
};

#[test]
fn test_repeated_home_team_drops_both_rows() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&[
        "arsenal,2,chelsea,1",
        "spurs,1,everton,0",
        "arsenal,0,fulham,0",
    ]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(week.fixtures.len(), 1);
    assert_eq!(week.fixtures[0].home_team, Team::new("spurs"));
    assert_eq!(week.errors.len(), 1);
    assert_eq!(
        week.errors[0],
        FixtureError::DuplicateTeams {
            team: Team::new("arsenal"),
            rows: vec![
                RawRow::new(1, "arsenal,2,chelsea,1"),
                RawRow::new(3, "arsenal,0,fulham,0"),
            ],
        }
    );
    assert_eq!(week.errors[0].row_indices(), vec![1, 3]);
    assert_eq!(
        week.errors[0].data(),
        vec!["arsenal,2,chelsea,1", "arsenal,0,fulham,0"]
    );
}

#[test]
fn test_team_appearing_three_times_drops_every_row() {
    let rows: Vec<RawRow> = normalize_rows(&week_file(&[
        "arsenal,1,chelsea,0",
        "fulham,1,arsenal,0",
        "arsenal,2,spurs,2",
        "leeds,0,wolves,0",
    ]));
    let fixtures: Vec<ValidatedFixture> = vec![
        fixture(1, "arsenal", 1, "chelsea", 0),
        fixture(2, "fulham", 1, "arsenal", 0),
        fixture(3, "arsenal", 2, "spurs", 2),
        fixture(4, "leeds", 0, "wolves", 0),
    ];

    let (kept, errors) = detect_duplicates(fixtures, &rows);

    assert_eq!(kept, vec![fixture(4, "leeds", 0, "wolves", 0)]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row_indices(), vec![1, 2, 3]);
}

#[test]
fn test_one_error_per_duplicated_team_in_first_appearance_order() {
    let rows: Vec<RawRow> = normalize_rows(&week_file(&[
        "chelsea,1,arsenal,0",
        "arsenal,1,chelsea,0",
    ]));
    let fixtures: Vec<ValidatedFixture> = vec![
        fixture(1, "chelsea", 1, "arsenal", 0),
        fixture(2, "arsenal", 1, "chelsea", 0),
    ];

    let (kept, errors) = detect_duplicates(fixtures, &rows);

    assert!(kept.is_empty());
    let teams: Vec<&str> = errors
        .iter()
        .map(|e| match e {
            FixtureError::DuplicateTeams { team, .. } => team.id(),
            _ => "",
        })
        .collect();
    assert_eq!(teams, vec!["chelsea", "arsenal"]);
}

#[test]
fn test_team_playing_itself_is_a_duplicate() {
    let rows: Vec<RawRow> = normalize_rows(&week_file(&["arsenal,1,arsenal,1"]));
    let fixtures: Vec<ValidatedFixture> = vec![fixture(1, "arsenal", 1, "arsenal", 1)];

    let (kept, errors) = detect_duplicates(fixtures, &rows);

    assert!(kept.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row_indices(), vec![1]);
}

#[test]
fn test_distinct_teams_are_untouched() {
    let rows: Vec<RawRow> = normalize_rows(&week_file(&[
        "arsenal,1,chelsea,0",
        "spurs,1,everton,0",
    ]));
    let fixtures: Vec<ValidatedFixture> = vec![
        fixture(1, "arsenal", 1, "chelsea", 0),
        fixture(2, "spurs", 1, "everton", 0),
    ];

    let (kept, errors) = detect_duplicates(fixtures.clone(), &rows);

    assert_eq!(kept, fixtures);
    assert!(errors.is_empty());
}

#[test]
fn test_rows_rejected_earlier_do_not_count_as_duplicates() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal,tbd,chelsea,tbd", "arsenal,1,fulham,0"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(week.fixtures.len(), 1);
    assert_eq!(week.errors.len(), 1);
    assert!(week.errors[0].is_recoverable());
}
