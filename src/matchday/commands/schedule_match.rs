use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Match;
use crate::store::LeagueStore;
use chrono::NaiveDate;

pub fn run(store: &mut LeagueStore, date: NaiveDate, home: &str, away: &str) -> Result<CmdResult> {
    let (home_id, away_id) = helpers::resolve_pair(store, home, away)?;

    let id = store.insert_match(Match::fixture(date, home_id, away_id));
    store.schedule_fixture(id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Match scheduled: {home} vs {away} on {}",
        date.format("%Y-%m-%d")
    )));
    Ok(result)
}
