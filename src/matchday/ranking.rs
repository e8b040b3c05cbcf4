//! # Standings Ranker
//!
//! Ranks a snapshot of the team list by points, then goal difference, then
//! goals scored, all descending. Ties beyond that key keep whatever order the
//! sort leaves them in.
//!
//! Two interchangeable strategies sit behind [`rank`]: an adaptive bubble
//! sort that exits early on an already-ordered table, and an in-place
//! quicksort (Lomuto partition, last-element pivot, worst-case O(n²) on
//! adversarial pivot choices). Which one runs is a size-based performance
//! choice, not a behavior difference; [`SMALL_LEAGUE_LIMIT`] is tunable and
//! both strategies must produce the same total order.

use crate::model::Team;
use std::fmt;

/// Team counts below this are sorted with the adaptive strategy.
pub const SMALL_LEAGUE_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Bubble sort with an early exit; O(n) on a sorted table.
    Adaptive,
    /// In-place quicksort, Lomuto partition, pivot = last element.
    Partition,
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStrategy::Adaptive => write!(f, "bubble sort"),
            SortStrategy::Partition => write!(f, "quicksort"),
        }
    }
}

/// One line of the standings table, snapshotted from a [`Team`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub name: String,
    pub points: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
}

impl StandingsRow {
    fn from_team(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            points: team.points,
            goals_scored: team.goals_scored,
            goals_conceded: team.goals_conceded,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_scored as i32 - self.goals_conceded as i32
    }
}

/// Ranks the given teams, picking a strategy by table size. Returns the
/// strategy alongside the rows so the CLI can announce it.
pub fn rank(teams: &[Team]) -> (Vec<StandingsRow>, SortStrategy) {
    let strategy = if teams.len() < SMALL_LEAGUE_LIMIT {
        SortStrategy::Adaptive
    } else {
        SortStrategy::Partition
    };
    let rows = teams.iter().map(StandingsRow::from_team).collect();
    (rank_with(rows, strategy), strategy)
}

/// Ranks with an explicit strategy. Both strategies produce the same total
/// order; this entry point exists so each can be tested on its own.
pub fn rank_with(mut rows: Vec<StandingsRow>, strategy: SortStrategy) -> Vec<StandingsRow> {
    match strategy {
        SortStrategy::Adaptive => bubble_sort(&mut rows),
        SortStrategy::Partition => quick_sort(&mut rows),
    }
    rows
}

/// Higher key ranks earlier.
fn rank_key(row: &StandingsRow) -> (u32, i32, u32) {
    (row.points, row.goal_difference(), row.goals_scored)
}

fn bubble_sort(rows: &mut [StandingsRow]) {
    for pass in 0..rows.len().saturating_sub(1) {
        let mut swapped = false;
        for j in 0..rows.len() - pass - 1 {
            if rank_key(&rows[j]) < rank_key(&rows[j + 1]) {
                rows.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

// Recursion depth is bounded by the team count.
fn quick_sort(rows: &mut [StandingsRow]) {
    if rows.len() <= 1 {
        return;
    }
    let pivot = partition(rows);
    let (left, right) = rows.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

fn partition(rows: &mut [StandingsRow]) -> usize {
    let last = rows.len() - 1;
    let pivot_key = rank_key(&rows[last]);
    let mut boundary = 0;
    for j in 0..last {
        if rank_key(&rows[j]) > pivot_key {
            rows.swap(boundary, j);
            boundary += 1;
        }
    }
    rows.swap(boundary, last);
    boundary
}
