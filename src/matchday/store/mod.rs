//! # Record Store
//!
//! [`LeagueStore`] owns every record in the league. Match storage lives in a
//! single append-only arena; the three match structures (date index, undo
//! history, fixture queue) hold [`MatchId`] values into that arena, never
//! references. Nothing is ever physically deleted — an undone match is marked
//! [`MatchStatus::Retracted`] and skipped by every query — so a removal in
//! one structure can never invalidate another.
//!
//! The store is purely in-memory and process-scoped. A store is the state of
//! exactly one league; independent leagues are independent stores.

use crate::error::{LeagueError, Result};
use crate::model::{Match, MatchId, MatchStatus, Team, TeamId};
use chrono::NaiveDate;
use std::ops::RangeInclusive;

pub mod history;
pub mod index;
pub mod registry;
pub mod schedule;

use history::MatchHistory;
use index::MatchIndex;
use registry::TeamRegistry;
use schedule::MatchSchedule;

#[derive(Debug, Default)]
pub struct LeagueStore {
    registry: TeamRegistry,
    /// Append-only match arena; the canonical owner of all match storage.
    matches: Vec<Match>,
    index: MatchIndex,
    history: MatchHistory,
    schedule: MatchSchedule,
}

impl LeagueStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- teams ---

    pub fn add_team(&mut self, name: &str) -> Result<TeamId> {
        self.registry.add(name)
    }

    pub fn find_team(&self, name: &str) -> Result<TeamId> {
        self.registry
            .find(name)
            .ok_or_else(|| LeagueError::TeamNotFound(name.to_string()))
    }

    pub fn team(&self, id: TeamId) -> &Team {
        self.registry.get(id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut Team {
        self.registry.get_mut(id)
    }

    pub fn teams(&self) -> &[Team] {
        self.registry.all()
    }

    pub fn team_count(&self) -> usize {
        self.registry.len()
    }

    // --- matches ---

    pub fn insert_match(&mut self, record: Match) -> MatchId {
        self.matches.push(record);
        MatchId(self.matches.len() - 1)
    }

    pub fn match_record(&self, id: MatchId) -> &Match {
        &self.matches[id.0]
    }

    pub fn match_mut(&mut self, id: MatchId) -> &mut Match {
        &mut self.matches[id.0]
    }

    /// Files a played match under the date index and the undo history.
    pub fn record_played(&mut self, id: MatchId) {
        let date = self.matches[id.0].date;
        self.index.insert(date, id);
        self.history.push(id);
    }

    pub fn schedule_fixture(&mut self, id: MatchId) {
        self.schedule.enqueue(id);
    }

    pub fn next_fixture(&self) -> Option<MatchId> {
        self.schedule.front()
    }

    pub fn dequeue_fixture(&mut self) -> Result<MatchId> {
        self.schedule.dequeue().ok_or(LeagueError::EmptySchedule)
    }

    pub fn pop_history(&mut self) -> Result<MatchId> {
        self.history.pop().ok_or(LeagueError::EmptyHistory)
    }

    pub fn history_is_empty(&self) -> bool {
        self.history.is_empty()
    }

    // --- queries ---

    /// Played matches with a date in the closed interval, ascending by date,
    /// insertion order within a date. Retracted matches are skipped.
    pub fn matches_in_range(
        &self,
        interval: RangeInclusive<NaiveDate>,
    ) -> impl Iterator<Item = (MatchId, &Match)> + '_ {
        self.index
            .range(interval)
            .map(|id| (id, &self.matches[id.0]))
            .filter(|(_, m)| m.status == MatchStatus::Played)
    }

    /// All played matches in ascending date order.
    pub fn all_played(&self) -> impl Iterator<Item = &Match> + '_ {
        self.index
            .iter()
            .map(|id| &self.matches[id.0])
            .filter(|m| m.status == MatchStatus::Played)
    }
}
