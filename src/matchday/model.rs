use chrono::NaiveDate;

/// Index into the team registry. Issued only by the registry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamId(pub(crate) usize);

/// Index into the match arena. Issued only by the store itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchId(pub(crate) usize);

#[derive(Debug, Clone)]
pub struct Team {
    pub name: String,
    pub points: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
            goals_scored: 0,
            goals_conceded: 0,
        }
    }

    /// Always recomputed, never stored.
    pub fn goal_difference(&self) -> i32 {
        self.goals_scored as i32 - self.goals_conceded as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Queued fixture; the 0-0 score is a placeholder.
    Scheduled,
    /// Counted in standings, the date index, and reports.
    Played,
    /// Undone. Kept in the arena but excluded from every query.
    Retracted,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub date: NaiveDate,
    pub home: TeamId,
    pub away: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
}

impl Match {
    pub fn played(
        date: NaiveDate,
        home: TeamId,
        away: TeamId,
        home_score: u32,
        away_score: u32,
    ) -> Self {
        Self {
            date,
            home,
            away,
            home_score,
            away_score,
            status: MatchStatus::Played,
        }
    }

    /// A scheduled fixture; the real score arrives when it is played.
    pub fn fixture(date: NaiveDate, home: TeamId, away: TeamId) -> Self {
        Self {
            date,
            home,
            away,
            home_score: 0,
            away_score: 0,
            status: MatchStatus::Scheduled,
        }
    }
}
