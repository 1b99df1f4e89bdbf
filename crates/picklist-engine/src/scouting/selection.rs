// Pool candidates and already-selected pick-list entries.

use serde::{Deserialize, Serialize};

use super::record::StatsRecord;

/// An unselected team eligible for recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub display_name: String,
    /// Absent when the team has not been scouted yet.
    #[serde(default)]
    pub stats: Option<StatsRecord>,
}

/// A team already placed on the pick list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub stats: Option<StatsRecord>,
    /// 1-based pick order. Informational only; scoring ignores it.
    pub rank: u32,
}

impl Candidate {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Candidate {
            id: id.into(),
            display_name: display_name.into(),
            stats: None,
        }
    }

    /// Attach a statistics record.
    pub fn with_stats(mut self, stats: StatsRecord) -> Self {
        self.stats = Some(stats);
        self
    }
}

impl SelectionEntry {
    /// Turn a candidate into the selection entry picked at `rank`.
    pub fn from_candidate(candidate: Candidate, rank: u32) -> Self {
        SelectionEntry {
            id: candidate.id,
            display_name: candidate.display_name,
            stats: candidate.stats,
            rank,
        }
    }
}

/// Iterate over the statistics records of selection members that have them.
pub fn scouted_stats(selection: &[SelectionEntry]) -> impl Iterator<Item = &StatsRecord> {
    selection.iter().filter_map(|entry| entry.stats.as_ref())
}
