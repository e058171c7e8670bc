// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Season;
use league_table_domain::Whitelist;

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
    Whitelist::from_tokens(&TEAMS.join(" ")).unwrap()
}

pub fn create_test_season() -> Season {
    Season::new(create_test_whitelist())
}

pub fn week_file(rows: &[&str]) -> String {
    let mut text: String = String::from("Team_Home,Home_Score,Team_Away,Away_Score\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}
