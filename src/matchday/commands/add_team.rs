use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::LeagueStore;

pub fn run(store: &mut LeagueStore, name: &str) -> Result<CmdResult> {
    store.add_team(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Team added: {name}")));
    Ok(result)
}
