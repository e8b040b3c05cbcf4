//! # API Facade
//!
//! [`LeagueApi`] is a thin facade over the command layer and the single entry
//! point for every league operation. It owns one [`LeagueStore`], dispatches
//! to the matching command function, and returns structured
//! [`CmdResult`](crate::commands::CmdResult) values — no business logic, no
//! I/O, no presentation.
//!
//! There is no ambient instance: a `LeagueApi` is explicitly constructed and
//! owned by whoever drives it, so tests can run any number of independent
//! leagues in one process.

use crate::commands;
use crate::commands::{CmdResult, MatchSummary};
use crate::error::Result;
use crate::store::LeagueStore;
use chrono::NaiveDate;

#[derive(Debug, Default)]
pub struct LeagueApi {
    store: LeagueStore,
}

impl LeagueApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_team(&mut self, name: &str) -> Result<CmdResult> {
        commands::add_team::run(&mut self.store, name)
    }

    pub fn record_match(
        &mut self,
        date: NaiveDate,
        home: &str,
        away: &str,
        home_score: u32,
        away_score: u32,
    ) -> Result<CmdResult> {
        commands::record_match::run(&mut self.store, date, home, away, home_score, away_score)
    }

    pub fn schedule_match(&mut self, date: NaiveDate, home: &str, away: &str) -> Result<CmdResult> {
        commands::schedule_match::run(&mut self.store, date, home, away)
    }

    /// The fixture the next [`play_scheduled`](Self::play_scheduled) call
    /// would play, if any. Lets the CLI announce the teams before asking for
    /// the score.
    pub fn next_fixture(&self) -> Option<MatchSummary> {
        self.store
            .next_fixture()
            .map(|id| commands::helpers::summarize(&self.store, id))
    }

    pub fn play_scheduled(&mut self, home_score: u32, away_score: u32) -> Result<CmdResult> {
        commands::play_scheduled::run(&mut self.store, home_score, away_score)
    }

    pub fn undo_last(&mut self) -> Result<CmdResult> {
        commands::undo::run(&mut self.store)
    }

    pub fn standings(&self) -> Result<CmdResult> {
        commands::standings::run(&self.store)
    }

    pub fn search_matches(&self, start: NaiveDate, end: NaiveDate) -> Result<CmdResult> {
        commands::search::run(&self.store, start, end)
    }

    pub fn report(&self) -> Result<CmdResult> {
        commands::report::run(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeagueError;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn full_lifecycle_through_the_facade() {
        let mut api = LeagueApi::new();
        api.add_team("Alpha").unwrap();
        api.add_team("Beta").unwrap();

        api.record_match(date("2024-01-01"), "Alpha", "Beta", 3, 1).unwrap();
        api.schedule_match(date("2024-02-01"), "Beta", "Alpha").unwrap();

        let fixture = api.next_fixture().unwrap();
        assert_eq!(fixture.home, "Beta");
        assert_eq!((fixture.home_score, fixture.away_score), (0, 0));

        api.play_scheduled(2, 2).unwrap();
        assert!(api.next_fixture().is_none());

        let standings = api.standings().unwrap().standings;
        assert_eq!(standings[0].name, "Alpha");
        assert_eq!(standings[0].points, 4);
        assert_eq!(standings[1].points, 1);

        let search = api.search_matches(date("2024-01-01"), date("2024-12-31")).unwrap();
        assert_eq!(search.matches.len(), 2);

        api.undo_last().unwrap();
        let report = api.report().unwrap().report.unwrap();
        assert_eq!(report.match_count, 1);
        assert_eq!(report.total_goals, 4);
    }

    #[test]
    fn independent_leagues_do_not_share_state() {
        let mut first = LeagueApi::new();
        let mut second = LeagueApi::new();

        first.add_team("Alpha").unwrap();
        assert!(matches!(
            second.record_match(date("2024-01-01"), "Alpha", "Alpha", 1, 0),
            Err(LeagueError::TeamNotFound(_))
        ));
    }
}
