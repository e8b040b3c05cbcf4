use crate::model::MatchId;
use std::collections::VecDeque;

/// Unplayed fixtures in scheduling order; the earliest-scheduled fixture is
/// played first.
#[derive(Debug, Default)]
pub struct MatchSchedule {
    fixtures: VecDeque<MatchId>,
}

impl MatchSchedule {
    pub fn enqueue(&mut self, id: MatchId) {
        self.fixtures.push_back(id);
    }

    pub fn dequeue(&mut self) -> Option<MatchId> {
        self.fixtures.pop_front()
    }

    /// The fixture the next dequeue would return, without removing it.
    pub fn front(&self) -> Option<MatchId> {
        self.fixtures.front().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_scheduling_order() {
        let mut schedule = MatchSchedule::default();
        schedule.enqueue(MatchId(0));
        schedule.enqueue(MatchId(1));

        assert_eq!(schedule.front(), Some(MatchId(0)));
        assert_eq!(schedule.dequeue(), Some(MatchId(0)));
        assert_eq!(schedule.dequeue(), Some(MatchId(1)));
        assert_eq!(schedule.dequeue(), None);
        assert!(schedule.is_empty());
    }

    #[test]
    fn front_does_not_remove() {
        let mut schedule = MatchSchedule::default();
        schedule.enqueue(MatchId(4));

        assert_eq!(schedule.front(), Some(MatchId(4)));
        assert_eq!(schedule.front(), Some(MatchId(4)));
        assert!(!schedule.is_empty());
    }
}
