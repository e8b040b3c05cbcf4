use crate::model::MatchId;

/// Played matches, most recent on top. Popping supports undo; what undo
/// means for standings is the command layer's decision.
#[derive(Debug, Default)]
pub struct MatchHistory {
    played: Vec<MatchId>,
}

impl MatchHistory {
    pub fn push(&mut self, id: MatchId) {
        self.played.push(id);
    }

    pub fn pop(&mut self) -> Option<MatchId> {
        self.played.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }
}
