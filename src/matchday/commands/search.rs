use crate::commands::{helpers, CmdMessage, CmdResult, MatchSummary};
use crate::error::Result;
use crate::store::LeagueStore;
use chrono::NaiveDate;

pub fn run(store: &LeagueStore, start: NaiveDate, end: NaiveDate) -> Result<CmdResult> {
    let matches: Vec<MatchSummary> = store
        .matches_in_range(start..=end)
        .map(|(id, _)| helpers::summarize(store, id))
        .collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Total matches: {}", matches.len())));
    Ok(result.with_matches(matches))
}
