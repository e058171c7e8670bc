// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cumulative per-team statistics and league ranking.

use crate::types::{MatchResult, Team, ValidatedFixture};
use crate::{POINTS_FOR_DRAW, POINTS_FOR_WIN};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The number of recent results shown in a team's form string.
pub const FORM_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Venue {
    Home,
    Away,
}

/// Accumulated statistics for one team, split by venue.
///
/// `goal_difference` and `points` are kept in step with the counters after
/// every recorded fixture. Goal counters are `u64`; summed `u32` scores
/// cannot overflow them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamStats {
    played: u32,
    home_wins: u32,
    away_wins: u32,
    home_draws: u32,
    away_draws: u32,
    home_losses: u32,
    away_losses: u32,
    home_goals_for: u64,
    away_goals_for: u64,
    home_goals_against: u64,
    away_goals_against: u64,
    goal_difference: i64,
    points: u32,
    form: Vec<MatchResult>,
}

impl TeamStats {
    fn record(&mut self, venue: Venue, scored: u32, conceded: u32) {
        let result: MatchResult = MatchResult::from_scores(scored, conceded);

        self.played += 1;
        match (venue, result) {
            (Venue::Home, MatchResult::Win) => self.home_wins += 1,
            (Venue::Away, MatchResult::Win) => self.away_wins += 1,
            (Venue::Home, MatchResult::Draw) => self.home_draws += 1,
            (Venue::Away, MatchResult::Draw) => self.away_draws += 1,
            (Venue::Home, MatchResult::Loss) => self.home_losses += 1,
            (Venue::Away, MatchResult::Loss) => self.away_losses += 1,
        }

        match venue {
            Venue::Home => {
                self.home_goals_for += u64::from(scored);
                self.home_goals_against += u64::from(conceded);
            }
            Venue::Away => {
                self.away_goals_for += u64::from(scored);
                self.away_goals_against += u64::from(conceded);
            }
        }

        self.points = POINTS_FOR_WIN * self.wins() + POINTS_FOR_DRAW * self.draws();
        self.goal_difference =
            signed(self.goals_for()).saturating_sub(signed(self.goals_against()));
        self.form.push(result);
    }

    /// Matches played.
    #[must_use]
    pub const fn played(&self) -> u32 {
        self.played
    }

    /// Wins at home.
    #[must_use]
    pub const fn home_wins(&self) -> u32 {
        self.home_wins
    }

    /// Wins away.
    #[must_use]
    pub const fn away_wins(&self) -> u32 {
        self.away_wins
    }

    /// Draws at home.
    #[must_use]
    pub const fn home_draws(&self) -> u32 {
        self.home_draws
    }

    /// Draws away.
    #[must_use]
    pub const fn away_draws(&self) -> u32 {
        self.away_draws
    }

    /// Losses at home.
    #[must_use]
    pub const fn home_losses(&self) -> u32 {
        self.home_losses
    }

    /// Losses away.
    #[must_use]
    pub const fn away_losses(&self) -> u32 {
        self.away_losses
    }

    /// Goals scored at home.
    #[must_use]
    pub const fn home_goals_for(&self) -> u64 {
        self.home_goals_for
    }

    /// Goals scored away.
    #[must_use]
    pub const fn away_goals_for(&self) -> u64 {
        self.away_goals_for
    }

    /// Goals conceded at home.
    #[must_use]
    pub const fn home_goals_against(&self) -> u64 {
        self.home_goals_against
    }

    /// Goals conceded away.
    #[must_use]
    pub const fn away_goals_against(&self) -> u64 {
        self.away_goals_against
    }

    /// Wins at either venue.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.home_wins + self.away_wins
    }

    /// Draws at either venue.
    #[must_use]
    pub const fn draws(&self) -> u32 {
        self.home_draws + self.away_draws
    }

    /// Losses at either venue.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.home_losses + self.away_losses
    }

    /// Goals scored at either venue.
    #[must_use]
    pub const fn goals_for(&self) -> u64 {
        self.home_goals_for + self.away_goals_for
    }

    /// Goals conceded at either venue.
    #[must_use]
    pub const fn goals_against(&self) -> u64 {
        self.home_goals_against + self.away_goals_against
    }

    /// Goals for minus goals against.
    #[must_use]
    pub const fn goal_difference(&self) -> i64 {
        self.goal_difference
    }

    /// League points.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Every result in chronological order.
    #[must_use]
    pub fn form(&self) -> &[MatchResult] {
        &self.form
    }

    /// The last [`FORM_LENGTH`] results as letter codes, oldest first.
    #[must_use]
    pub fn last_five(&self) -> String {
        let start: usize = self.form.len().saturating_sub(FORM_LENGTH);
        self.form[start..].iter().map(|result| result.code()).collect()
    }
}

fn signed(goals: u64) -> i64 {
    i64::try_from(goals).unwrap_or(i64::MAX)
}

/// One ranked row of the league table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The 1-based league position.
    pub position: usize,
    /// The team.
    pub team: Team,
    /// The team's statistics.
    pub stats: TeamStats,
}

/// Cumulative statistics for every team seen so far.
///
/// The table has no intrinsic order; [`StandingsTable::ranked`] produces the
/// league order on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StandingsTable {
    teams: BTreeMap<Team, TeamStats>,
}

impl StandingsTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            teams: BTreeMap::new(),
        }
    }

    /// Records one validated fixture.
    ///
    /// Both teams are created with zeroed statistics the first time they
    /// are seen. The fixture must already have passed validation.
    pub fn record(&mut self, fixture: &ValidatedFixture) {
        self.teams
            .entry(fixture.home_team.clone())
            .or_default()
            .record(Venue::Home, fixture.home_score, fixture.away_score);
        self.teams
            .entry(fixture.away_team.clone())
            .or_default()
            .record(Venue::Away, fixture.away_score, fixture.home_score);
    }

    /// Folds a week's fixtures into the table, returning the updated table.
    #[must_use]
    pub fn aggregate(mut self, fixtures: &[ValidatedFixture]) -> Self {
        for fixture in fixtures {
            self.record(fixture);
        }
        self
    }

    /// Looks up a team's statistics.
    #[must_use]
    pub fn get(&self, team: &str) -> Option<&TeamStats> {
        self.teams.get(&Team::new(team))
    }

    /// Returns the number of teams in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Returns whether no fixtures have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Iterates teams in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&Team, &TeamStats)> {
        self.teams.iter()
    }

    /// Produces the league order.
    ///
    /// Teams are ranked by points, then goal difference, then goals scored
    /// (all descending), and finally by name ascending.
    #[must_use]
    pub fn ranked(&self) -> Vec<Standing> {
        let mut entries: Vec<(&Team, &TeamStats)> = self.teams.iter().collect();
        entries.sort_by(compare_standing);

        entries
            .into_iter()
            .enumerate()
            .map(|(idx, (team, stats))| Standing {
                position: idx + 1,
                team: team.clone(),
                stats: stats.clone(),
            })
            .collect()
    }
}

fn compare_standing(a: &(&Team, &TeamStats), b: &(&Team, &TeamStats)) -> Ordering {
    let (team_a, stats_a) = a;
    let (team_b, stats_b) = b;

    stats_b
        .points()
        .cmp(&stats_a.points())
        .then_with(|| stats_b.goal_difference().cmp(&stats_a.goal_difference()))
        .then_with(|| stats_b.goals_for().cmp(&stats_a.goals_for()))
        .then_with(|| team_a.cmp(team_b))
}
