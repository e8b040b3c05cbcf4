use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Match;
use crate::store::LeagueStore;
use chrono::NaiveDate;

pub fn run(
    store: &mut LeagueStore,
    date: NaiveDate,
    home: &str,
    away: &str,
    home_score: u32,
    away_score: u32,
) -> Result<CmdResult> {
    let (home_id, away_id) = helpers::resolve_pair(store, home, away)?;

    let id = store.insert_match(Match::played(date, home_id, away_id, home_score, away_score));
    helpers::commit_result(store, id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Match recorded: {}",
        helpers::summarize(store, id)
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add_team;
    use crate::error::LeagueError;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn store_with(names: &[&str]) -> LeagueStore {
        let mut store = LeagueStore::new();
        for name in names {
            add_team::run(&mut store, name).unwrap();
        }
        store
    }

    #[test]
    fn updates_both_teams_statistics() {
        let mut store = store_with(&["Alpha", "Beta"]);
        run(&mut store, date("2024-01-01"), "Alpha", "Beta", 3, 1).unwrap();

        let alpha = store.team(store.find_team("Alpha").unwrap());
        assert_eq!(alpha.points, 3);
        assert_eq!(alpha.goals_scored, 3);
        assert_eq!(alpha.goals_conceded, 1);
        assert_eq!(alpha.goal_difference(), 2);

        let beta = store.team(store.find_team("Beta").unwrap());
        assert_eq!(beta.points, 0);
        assert_eq!(beta.goals_scored, 1);
        assert_eq!(beta.goals_conceded, 3);
        assert_eq!(beta.goal_difference(), -2);
    }

    #[test]
    fn points_equal_three_per_win_plus_one_per_draw() {
        let mut store = store_with(&["Alpha", "Beta"]);
        run(&mut store, date("2024-01-01"), "Alpha", "Beta", 2, 0).unwrap();
        run(&mut store, date("2024-01-08"), "Beta", "Alpha", 1, 1).unwrap();
        run(&mut store, date("2024-01-15"), "Alpha", "Beta", 4, 2).unwrap();

        let alpha = store.team(store.find_team("Alpha").unwrap());
        assert_eq!(alpha.points, 3 * 2 + 1);
        let beta = store.team(store.find_team("Beta").unwrap());
        assert_eq!(beta.points, 1);
    }

    #[test]
    fn unknown_team_leaves_the_store_untouched() {
        let mut store = store_with(&["Alpha"]);

        let err = run(&mut store, date("2024-01-01"), "Alpha", "Ghosts", 3, 1).unwrap_err();
        assert!(matches!(err, LeagueError::TeamNotFound(name) if name == "Ghosts"));

        assert_eq!(store.all_played().count(), 0);
        assert!(store.history_is_empty());
        let alpha = store.team(store.find_team("Alpha").unwrap());
        assert_eq!((alpha.points, alpha.goals_scored, alpha.goals_conceded), (0, 0, 0));
    }

    #[test]
    fn recorded_match_is_queryable_by_date() {
        let mut store = store_with(&["Alpha", "Beta"]);
        run(&mut store, date("2024-01-01"), "Alpha", "Beta", 1, 0).unwrap();

        let hits: Vec<_> = store
            .matches_in_range(date("2024-01-01")..=date("2024-01-01"))
            .collect();
        assert_eq!(hits.len(), 1);
    }
}
