use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MatchStatus;
use crate::store::LeagueStore;

/// Plays the earliest-scheduled fixture with the supplied score. From here on
/// the match goes through the same path as a directly recorded one.
pub fn run(store: &mut LeagueStore, home_score: u32, away_score: u32) -> Result<CmdResult> {
    let id = store.dequeue_fixture()?;

    let record = store.match_mut(id);
    record.home_score = home_score;
    record.away_score = away_score;
    record.status = MatchStatus::Played;

    helpers::commit_result(store, id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Match played: {}",
        helpers::summarize(store, id)
    )));
    Ok(result)
}
