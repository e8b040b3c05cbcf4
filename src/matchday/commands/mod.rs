use crate::ranking::StandingsRow;
use chrono::NaiveDate;
use std::fmt;

pub mod add_team;
pub mod helpers;
pub mod play_scheduled;
pub mod record_match;
pub mod report;
pub mod schedule_match;
pub mod search;
pub mod standings;
pub mod undo;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A match as shown to the user: names resolved, ready to format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub date: NaiveDate,
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} - {} {}",
            self.date.format("%Y-%m-%d"),
            self.home,
            self.home_score,
            self.away_score,
            self.away
        )
    }
}

/// Aggregate figures for the report command.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueReport {
    pub team_count: usize,
    pub match_count: usize,
    pub total_goals: u32,
    pub average_goals: f64,
    pub processed_teams: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub standings: Vec<StandingsRow>,
    pub matches: Vec<MatchSummary>,
    pub report: Option<LeagueReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_standings(mut self, standings: Vec<StandingsRow>) -> Self {
        self.standings = standings;
        self
    }

    pub fn with_matches(mut self, matches: Vec<MatchSummary>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_report(mut self, report: LeagueReport) -> Self {
        self.report = Some(report);
        self
    }
}
