use crate::model::MatchId;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// The date-ordered match index.
///
/// Matches are keyed by date; several matches on the same day keep their
/// insertion order within the per-date bucket. Range queries walk the map in
/// ascending date order and borrow the index, so they are lazy and can be
/// restarted at will.
#[derive(Debug, Default)]
pub struct MatchIndex {
    by_date: BTreeMap<NaiveDate, Vec<MatchId>>,
}

impl MatchIndex {
    pub fn insert(&mut self, date: NaiveDate, id: MatchId) {
        self.by_date.entry(date).or_default().push(id);
    }

    /// Match ids whose date lies in the closed interval, ascending by date,
    /// insertion order within a date. An inverted interval is empty, not a
    /// panic (`BTreeMap::range` would panic on start > end).
    pub fn range(
        &self,
        interval: RangeInclusive<NaiveDate>,
    ) -> impl Iterator<Item = MatchId> + '_ {
        let (start, end) = interval.into_inner();
        (start <= end)
            .then(move || {
                self.by_date
                    .range(start..=end)
                    .flat_map(|(_, ids)| ids.iter().copied())
            })
            .into_iter()
            .flatten()
    }

    /// All indexed match ids in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.by_date.values().flat_map(|ids| ids.iter().copied())
    }
}
