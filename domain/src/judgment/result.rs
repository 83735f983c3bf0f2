//! Deliberation results
//!
//! Immutable snapshot of one deliberation: per proposal, its rank and its
//! ranking key, with the analysis that produced them, in input order and
//! in rank order.

use crate::judgment::analysis::ProposalAnalysis;
use crate::judgment::score::Score;
use crate::judgment::tally::ProposalTally;
use serde::{Deserialize, Serialize};

/// Result computed for one proposal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalResult {
    /// Index of the proposal in the input tallies; useful in the sorted view
    pub index: usize,
    /// Rank starts at 1, the best. Proposals with equal scores share a
    /// rank, and the next distinct score skips the shared positions.
    pub rank: usize,
    /// Ranking key; higher compares better
    pub score: Score,
    /// Analysis the score was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ProposalAnalysis>,
    /// Input tally, when the deliberator was asked to attach it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tally: Option<ProposalTally>,
}

/// Result of one whole deliberation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PollResult {
    /// One result per proposal, in the order of the input tallies
    pub proposals: Vec<ProposalResult>,
    /// The same results, sorted by rank
    pub proposals_sorted: Vec<ProposalResult>,
}

impl PollResult {
    /// Result of a poll without proposals
    pub fn empty() -> Self {
        Self {
            proposals: Vec::new(),
            proposals_sorted: Vec::new(),
        }
    }

    /// Best-ranked proposal, if any
    pub fn winner(&self) -> Option<&ProposalResult> {
        self.proposals_sorted.first()
    }
}
