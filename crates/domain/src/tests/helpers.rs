// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Team, ValidatedFixture, Whitelist};

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

pub fn create_test_whitelist() -> Whitelist {
    Whitelist::from_tokens(&TEAMS.join("\n")).unwrap()
}

pub fn week_file(rows: &[&str]) -> String {
    let mut text: String = String::from("team_home,home_score,team_away,away_score\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

pub fn fixture(
    row: usize,
    home: &str,
    home_score: u32,
    away: &str,
    away_score: u32,
) -> ValidatedFixture {
    ValidatedFixture {
        row,
        home_team: Team::new(home),
        home_score,
        away_team: Team::new(away),
        away_score,
    }
}
