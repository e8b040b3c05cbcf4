use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ranking;
use crate::store::LeagueStore;

pub fn run(store: &LeagueStore) -> Result<CmdResult> {
    let (rows, strategy) = ranking::rank(store.teams());

    let mut result = CmdResult::default();
    if rows.is_empty() {
        result.add_message(CmdMessage::warning("No teams registered yet."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Ranked {} teams using {strategy}.",
            rows.len()
        )));
    }
    Ok(result.with_standings(rows))
}
