// Set-relative compatibility of a candidate with the current selection.

use std::collections::BTreeSet;

use crate::analysis::clamp01;
use crate::analysis::traits::{strength_set, strengths, weakness_set, Trait};
use crate::config::CompatibilityPolicy;
use crate::scouting::record::StatsRecord;
use crate::scouting::selection::{scouted_stats, SelectionEntry};

/// How a candidate's strengths line up against the selection's traits.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityBreakdown {
    /// Candidate strengths that cover a weakness somewhere in the selection.
    pub filled_gaps: Vec<Trait>,
    /// Candidate strengths the selection already has.
    pub redundant: Vec<Trait>,
    /// Final score in `[0, 1]`.
    pub score: f64,
}

/// Score how well `candidate` complements `selection`.
///
/// An empty selection is maximally compatible (1.0). Otherwise the score
/// starts at `policy.base`, gains `gap_fill_weight` per normalized filled
/// gap and loses `redundancy_weight` per normalized redundant strength.
/// Selection members without stats contribute no traits.
pub fn compatibility(
    selection: &[SelectionEntry],
    candidate: &StatsRecord,
    policy: &CompatibilityPolicy,
) -> f64 {
    compatibility_breakdown(selection, candidate, policy).score
}

/// Same as [`compatibility`], keeping the matched traits.
pub fn compatibility_breakdown(
    selection: &[SelectionEntry],
    candidate: &StatsRecord,
    policy: &CompatibilityPolicy,
) -> CompatibilityBreakdown {
    if selection.is_empty() {
        return CompatibilityBreakdown {
            filled_gaps: Vec::new(),
            redundant: Vec::new(),
            score: 1.0,
        };
    }

    let current_weaknesses: BTreeSet<Trait> = weakness_set(scouted_stats(selection));
    let current_strengths: BTreeSet<Trait> = strength_set(scouted_stats(selection));
    let candidate_strengths = strengths(candidate);

    let filled_gaps: Vec<Trait> = candidate_strengths
        .iter()
        .copied()
        .filter(|t| current_weaknesses.contains(t))
        .collect();
    let redundant: Vec<Trait> = candidate_strengths
        .iter()
        .copied()
        .filter(|t| current_strengths.contains(t))
        .collect();

    let normalizer = policy.trait_normalizer;
    let score = policy.base
        + (filled_gaps.len() as f64 / normalizer) * policy.gap_fill_weight
        - (redundant.len() as f64 / normalizer) * policy.redundancy_weight;

    CompatibilityBreakdown {
        filled_gaps,
        redundant,
        score: clamp01(score),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
