use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MatchStatus;
use crate::store::LeagueStore;

/// Undoes the most recently played match: its statistics are reversed and the
/// record is retracted, dropping out of standings, searches, and reports. The
/// arena keeps the record, so nothing else holding its id can dangle.
pub fn run(store: &mut LeagueStore) -> Result<CmdResult> {
    let id = store.pop_history()?;

    helpers::revert_result(store, id);
    store.match_mut(id).status = MatchStatus::Retracted;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Match undone: {}",
        helpers::summarize(store, id)
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_team, record_match};
    use crate::error::LeagueError;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn store_with_teams() -> LeagueStore {
        let mut store = LeagueStore::new();
        add_team::run(&mut store, "Alpha").unwrap();
        add_team::run(&mut store, "Beta").unwrap();
        store
    }

    #[test]
    fn undo_restores_prior_statistics() {
        let mut store = store_with_teams();
        record_match::run(&mut store, date("2024-01-01"), "Alpha", "Beta", 2, 0).unwrap();
        record_match::run(&mut store, date("2024-01-08"), "Beta", "Alpha", 1, 1).unwrap();

        run(&mut store).unwrap();

        // Back to the state after only the first match.
        let alpha = store.team(store.find_team("Alpha").unwrap());
        assert_eq!((alpha.points, alpha.goals_scored, alpha.goals_conceded), (3, 2, 0));
        let beta = store.team(store.find_team("Beta").unwrap());
        assert_eq!((beta.points, beta.goals_scored, beta.goals_conceded), (0, 0, 2));
    }

    #[test]
    fn undo_is_most_recent_first_and_bottoms_out() {
        let mut store = store_with_teams();
        record_match::run(&mut store, date("2024-01-01"), "Alpha", "Beta", 2, 0).unwrap();
        record_match::run(&mut store, date("2024-01-08"), "Alpha", "Beta", 1, 0).unwrap();

        run(&mut store).unwrap();
        run(&mut store).unwrap();
        assert!(matches!(run(&mut store), Err(LeagueError::EmptyHistory)));

        for team in store.teams() {
            assert_eq!((team.points, team.goals_scored, team.goals_conceded), (0, 0, 0));
        }
    }

    #[test]
    fn undone_match_leaves_queries_and_reports() {
        let mut store = store_with_teams();
        record_match::run(&mut store, date("2024-01-01"), "Alpha", "Beta", 2, 0).unwrap();

        run(&mut store).unwrap();

        assert_eq!(store.all_played().count(), 0);
        assert_eq!(
            store
                .matches_in_range(date("2024-01-01")..=date("2024-01-01"))
                .count(),
            0
        );
    }
}
