use crate::commands::{CmdMessage, CmdResult, LeagueReport};
use crate::error::Result;
use crate::store::LeagueStore;

pub fn run(store: &LeagueStore) -> Result<CmdResult> {
    let mut match_count = 0;
    let mut total_goals = 0;
    for record in store.all_played() {
        match_count += 1;
        total_goals += record.home_score + record.away_score;
    }

    let average_goals = if match_count == 0 {
        0.0
    } else {
        f64::from(total_goals) / match_count as f64
    };

    let report = LeagueReport {
        team_count: store.team_count(),
        match_count,
        total_goals,
        average_goals,
        processed_teams: store.teams().iter().map(|t| t.name.clone()).collect(),
    };

    let mut result = CmdResult::default();
    if match_count == 0 {
        result.add_message(CmdMessage::warning("No matches played yet."));
    }
    Ok(result.with_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_team, record_match, schedule_match, undo};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn totals_cover_played_matches_only() {
        let mut store = LeagueStore::new();
        add_team::run(&mut store, "Alpha").unwrap();
        add_team::run(&mut store, "Beta").unwrap();
        record_match::run(&mut store, date("2024-01-01"), "Alpha", "Beta", 3, 1).unwrap();
        record_match::run(&mut store, date("2024-01-08"), "Beta", "Alpha", 2, 2).unwrap();
        // Scheduled fixtures do not count.
        schedule_match::run(&mut store, date("2024-02-01"), "Alpha", "Beta").unwrap();

        let report = run(&store).unwrap().report.unwrap();
        assert_eq!(report.team_count, 2);
        assert_eq!(report.match_count, 2);
        assert_eq!(report.total_goals, 8);
        assert!((report.average_goals - 4.0).abs() < f64::EPSILON);
        assert_eq!(report.processed_teams, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn undone_matches_drop_out_of_the_report() {
        let mut store = LeagueStore::new();
        add_team::run(&mut store, "Alpha").unwrap();
        add_team::run(&mut store, "Beta").unwrap();
        record_match::run(&mut store, date("2024-01-01"), "Alpha", "Beta", 5, 0).unwrap();
        undo::run(&mut store).unwrap();

        let report = run(&store).unwrap().report.unwrap();
        assert_eq!(report.match_count, 0);
        assert_eq!(report.total_goals, 0);
    }

    #[test]
    fn empty_league_reports_zeroes_with_a_warning() {
        let store = LeagueStore::new();
        let result = run(&store).unwrap();
        let report = result.report.unwrap();
        assert_eq!(report.match_count, 0);
        assert_eq!(report.average_goals, 0.0);
        assert_eq!(result.messages.len(), 1);
    }
}
