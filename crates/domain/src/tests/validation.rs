// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_whitelist, week_file};
use crate::{
    ErrorKind, FixtureColumn, FixtureError, Team, ValidatedWeek, Whitelist, normalize_rows,
    validate_fixtures,
};

fn kinds(week: &ValidatedWeek) -> Vec<ErrorKind> {
    week.errors.iter().map(FixtureError::kind).collect()
}

#[test]
fn test_mixed_case_header_with_valid_row() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: &str = "Team_Home,Home_Score,Team_Away,Away_Score\narsenal,2,chelsea,1\n";

    let week: ValidatedWeek = validate_fixtures(text, &whitelist);

    assert!(week.errors.is_empty());
    assert_eq!(week.fixtures.len(), 1);
    let fixture = &week.fixtures[0];
    assert_eq!(fixture.row, 1);
    assert_eq!(fixture.home_team, Team::new("arsenal"));
    assert_eq!(fixture.home_score, 2);
    assert_eq!(fixture.away_team, Team::new("chelsea"));
    assert_eq!(fixture.away_score, 1);
}

#[test]
fn test_rows_are_normalized_with_indices() {
    let rows = normalize_rows("  HEADER  \r\nArsenal,1,Chelsea,0");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].index, 0);
    assert_eq!(rows[0].text, "header");
    assert_eq!(rows[1].index, 1);
    assert_eq!(rows[1].text, "arsenal,1,chelsea,0");
}

#[test]
fn test_bad_header_stops_processing() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: &str = "home,home_score,away,away_score\narsenal,-1,madrid,x\n";

    let week: ValidatedWeek = validate_fixtures(text, &whitelist);

    assert!(week.fixtures.is_empty());
    assert_eq!(week.errors.len(), 1);
    assert!(matches!(
        &week.errors[0],
        FixtureError::BadHeader { row }
            if row.index == 0 && row.text == "home,home_score,away,away_score"
    ));
    assert!(week.errors[0].columns().is_empty());
}

#[test]
fn test_empty_file_is_bad_header() {
    let whitelist: Whitelist = create_test_whitelist();
    let week: ValidatedWeek = validate_fixtures("", &whitelist);

    assert_eq!(kinds(&week), vec![ErrorKind::BadHeader]);
    assert_eq!(week.errors[0].row_indices(), vec![0]);
}

#[test]
fn test_header_only_file_is_valid_and_empty() {
    let whitelist: Whitelist = create_test_whitelist();
    let week: ValidatedWeek = validate_fixtures(&week_file(&[]), &whitelist);

    assert!(week.fixtures.is_empty());
    assert!(week.errors.is_empty());
}

#[test]
fn test_wrong_field_count_skips_other_checks() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal,2,chelsea", "madrid,x,chelsea,1,extra"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert!(week.fixtures.is_empty());
    assert_eq!(
        week.errors,
        vec![
            FixtureError::NotFourFields {
                row: crate::RawRow::new(1, "arsenal,2,chelsea"),
                found: 3,
            },
            FixtureError::NotFourFields {
                row: crate::RawRow::new(2, "madrid,x,chelsea,1,extra"),
                found: 5,
            },
        ]
    );
}

#[test]
fn test_blank_interior_line_is_not_four_fields() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal,2,chelsea,1", "", "spurs,0,everton,0"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(kinds(&week), vec![ErrorKind::NotFourFields]);
    assert_eq!(week.errors[0].row_indices(), vec![2]);
    assert_eq!(week.fixtures.len(), 2);
}

#[test]
fn test_negative_score_is_rejected_at_its_column() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal,-1,chelsea,2"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert!(week.fixtures.is_empty());
    assert_eq!(week.errors.len(), 1);
    assert!(matches!(
        &week.errors[0],
        FixtureError::NegativeScore {
            column: FixtureColumn::HomeScore,
            value: -1,
            ..
        }
    ));
    assert_eq!(week.errors[0].columns(), vec![FixtureColumn::HomeScore]);
}

#[test]
fn test_non_integer_scores_are_invalid() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal,two,chelsea,1.5"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert!(week.fixtures.is_empty());
    assert_eq!(
        kinds(&week),
        vec![ErrorKind::InvalidScore, ErrorKind::InvalidScore]
    );
    assert_eq!(week.errors[0].columns(), vec![FixtureColumn::HomeScore]);
    assert_eq!(week.errors[1].columns(), vec![FixtureColumn::AwayScore]);
}

#[test]
fn test_score_out_of_range_is_invalid() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal,99999999999,chelsea,1"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(kinds(&week), vec![ErrorKind::InvalidScore]);
}

#[test]
fn test_scores_tolerate_surrounding_spaces_and_plus_sign() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal, 3 ,chelsea,+1"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert!(week.errors.is_empty());
    assert_eq!(week.fixtures[0].home_score, 3);
    assert_eq!(week.fixtures[0].away_score, 1);
}

#[test]
fn test_unknown_team_is_never_validated() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["real_madrid,2,chelsea,1", "arsenal,0,barcelona,0"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert!(week.fixtures.is_empty());
    assert_eq!(
        week.errors,
        vec![
            FixtureError::InvalidTeam {
                row: crate::RawRow::new(1, "real_madrid,2,chelsea,1"),
                column: FixtureColumn::HomeTeam,
                team: String::from("real_madrid"),
            },
            FixtureError::InvalidTeam {
                row: crate::RawRow::new(2, "arsenal,0,barcelona,0"),
                column: FixtureColumn::AwayTeam,
                team: String::from("barcelona"),
            },
        ]
    );
}

#[test]
fn test_missing_values_are_reported_per_column() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&[",2,chelsea,", "arsenal, ,spurs,1"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert!(week.fixtures.is_empty());
    assert_eq!(
        kinds(&week),
        vec![
            ErrorKind::MissingValue,
            ErrorKind::MissingValue,
            ErrorKind::MissingValue
        ]
    );
    assert_eq!(week.errors[0].columns(), vec![FixtureColumn::HomeTeam]);
    assert_eq!(week.errors[1].columns(), vec![FixtureColumn::AwayScore]);
    assert_eq!(week.errors[2].columns(), vec![FixtureColumn::HomeScore]);
    assert_eq!(week.errors[2].row_indices(), vec![2]);
}

#[test]
fn test_all_errors_in_a_row_are_collected_in_column_order() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["madrid,-2,barcelona,x"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(
        kinds(&week),
        vec![
            ErrorKind::InvalidTeam,
            ErrorKind::NegativeScore,
            ErrorKind::InvalidTeam,
            ErrorKind::InvalidScore
        ]
    );
}

#[test]
fn test_both_scores_tbd_is_a_single_postponement() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal,tbd,chelsea,tbd", "spurs,1,everton,1"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(kinds(&week), vec![ErrorKind::Postponed]);
    assert!(week.errors[0].is_recoverable());
    assert_eq!(
        week.errors[0].columns(),
        vec![FixtureColumn::HomeScore, FixtureColumn::AwayScore]
    );
    assert!(!week.has_blocking_errors());
    assert_eq!(week.fixtures.len(), 1);
    assert_eq!(week.fixtures[0].home_team, Team::new("spurs"));
}

#[test]
fn test_postponed_sentinel_is_case_insensitive() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal,TBD,chelsea,Tbd"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(kinds(&week), vec![ErrorKind::Postponed]);
}

#[test]
fn test_single_tbd_score_is_an_invalid_score() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["arsenal,tbd,chelsea,2"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert!(week.fixtures.is_empty());
    assert_eq!(kinds(&week), vec![ErrorKind::InvalidScore]);
    assert!(week.has_blocking_errors());
}

#[test]
fn test_postponed_row_still_checks_teams() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&["madrid,tbd,chelsea,tbd"]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(
        kinds(&week),
        vec![ErrorKind::Postponed, ErrorKind::InvalidTeam]
    );
    assert!(week.has_blocking_errors());
}

#[test]
fn test_duplicate_errors_follow_field_errors() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&[
        "arsenal,2,chelsea,1",
        "madrid,1,spurs,1",
        "arsenal,0,everton,0",
    ]);

    let week: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(
        kinds(&week),
        vec![ErrorKind::InvalidTeam, ErrorKind::DuplicateTeams]
    );
    assert!(week.fixtures.is_empty());
}

#[test]
fn test_revalidation_is_idempotent() {
    let whitelist: Whitelist = create_test_whitelist();
    let text: String = week_file(&[
        "arsenal,2,chelsea,1",
        "madrid,1,spurs,1",
        "leeds,tbd,fulham,tbd",
        "wolves,3,everton,3",
        "wolves,0,burnley,1",
    ]);

    let first: ValidatedWeek = validate_fixtures(&text, &whitelist);
    let second: ValidatedWeek = validate_fixtures(&text, &whitelist);

    assert_eq!(first, second);
}
