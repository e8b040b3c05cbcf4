use crate::commands::MatchSummary;
use crate::error::Result;
use crate::model::{MatchId, TeamId};
use crate::store::LeagueStore;

/// Resolves both team names before anything is mutated, so a failed lookup
/// leaves every structure untouched.
pub fn resolve_pair(store: &LeagueStore, home: &str, away: &str) -> Result<(TeamId, TeamId)> {
    let home_id = store.find_team(home)?;
    let away_id = store.find_team(away)?;
    Ok((home_id, away_id))
}

pub fn summarize(store: &LeagueStore, id: MatchId) -> MatchSummary {
    let record = store.match_record(id);
    MatchSummary {
        date: record.date,
        home: store.team(record.home).name.clone(),
        away: store.team(record.away).name.clone(),
        home_score: record.home_score,
        away_score: record.away_score,
    }
}

/// Files a played match and applies the standings-update rule. Directly
/// recorded and scheduled-then-played matches both come through here; there
/// is exactly one update path.
pub fn commit_result(store: &mut LeagueStore, id: MatchId) {
    store.record_played(id);
    apply_result(store, id);
}

/// The standings-update rule, applied exactly once per played match:
/// winner +3 points, draw +1 each, goals added to both sides regardless
/// of outcome.
pub fn apply_result(store: &mut LeagueStore, id: MatchId) {
    let record = store.match_record(id);
    let (home, away) = (record.home, record.away);
    let (home_score, away_score) = (record.home_score, record.away_score);

    let home_team = store.team_mut(home);
    home_team.goals_scored += home_score;
    home_team.goals_conceded += away_score;
    let away_team = store.team_mut(away);
    away_team.goals_scored += away_score;
    away_team.goals_conceded += home_score;

    if home_score > away_score {
        store.team_mut(home).points += 3;
    } else if away_score > home_score {
        store.team_mut(away).points += 3;
    } else {
        store.team_mut(home).points += 1;
        store.team_mut(away).points += 1;
    }
}

/// Exact inverse of [`apply_result`]; only ever called on a match whose
/// result has been applied, so the subtractions cannot underflow.
pub fn revert_result(store: &mut LeagueStore, id: MatchId) {
    let record = store.match_record(id);
    let (home, away) = (record.home, record.away);
    let (home_score, away_score) = (record.home_score, record.away_score);

    let home_team = store.team_mut(home);
    home_team.goals_scored -= home_score;
    home_team.goals_conceded -= away_score;
    let away_team = store.team_mut(away);
    away_team.goals_scored -= away_score;
    away_team.goals_conceded -= home_score;

    if home_score > away_score {
        store.team_mut(home).points -= 3;
    } else if away_score > home_score {
        store.team_mut(away).points -= 3;
    } else {
        store.team_mut(home).points -= 1;
        store.team_mut(away).points -= 1;
    }
}
