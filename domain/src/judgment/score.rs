//! Deliberation scores
//!
//! A score is the ranking key of one proposal: one round per grade, emitted
//! by the collapsing loop of the deliberator. Rounds compare in order,
//! median grade before adhesion term, so the derived lexicographic ordering
//! on scores reproduces the Majority Judgment ranking without any digit
//! strings or widened signed arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One round of score construction.
///
/// The adhesion term is `judgments + sign * second group size` and sits in
/// `[0, 2 * judgments]`: exactly `judgments` when the flanks balance out,
/// above when adhesion prevails, below when contestation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRound {
    /// Median grade of the round
    pub median_grade: usize,
    /// Adhesion term of the round
    pub adhesion_term: u64,
}

/// Ranking key of one proposal, one [`ScoreRound`] per grade.
///
/// Scores of the same poll compare lexicographically, round by round;
/// higher compares better.
///
/// # Example
///
/// ```
/// use mj_domain::{MajorityJudgment, ProposalTally};
///
/// let mj = MajorityJudgment::new();
/// let better = mj.compute_score(&ProposalTally::from(vec![0, 1, 2]), true)?;
/// let worse = mj.compute_score(&ProposalTally::from(vec![1, 1, 1]), true)?;
/// assert!(better > worse);
/// # Ok::<(), mj_domain::DomainError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    rounds: Vec<ScoreRound>,
    judgments: u64,
}

impl Score {
    pub(crate) fn new(rounds: Vec<ScoreRound>, judgments: u64) -> Self {
        Self { rounds, judgments }
    }

    /// Rounds in emission order, one per grade
    pub fn rounds(&self) -> &[ScoreRound] {
        &self.rounds
    }

    /// Total amount of judgments of the scored proposal
    pub fn judgments(&self) -> u64 {
        self.judgments
    }
}

/// Renders the fixed-width decimal form: for each round, the median grade
/// zero-padded to the width of the highest grade, then the adhesion term
/// zero-padded to the width of twice the judgment total. Two rendered
/// scores of the same poll compare bytewise the way the scores themselves
/// compare.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade_width = decimal_width(self.rounds.len().saturating_sub(1) as u128);
        let term_width = decimal_width(2 * self.judgments as u128);
        for round in &self.rounds {
            write!(
                f,
                "{:0gw$}{:0tw$}",
                round.median_grade,
                round.adhesion_term,
                gw = grade_width,
                tw = term_width
            )?;
        }
        Ok(())
    }
}

/// Amount of decimal digits needed to render `n`; 1 for zero.
fn decimal_width(mut n: u128) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
