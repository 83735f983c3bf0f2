//! Poll and proposal tallies
//!
//! A tally counts judgments per grade. Proposal tallies are the input unit
//! of deliberation; a poll tally groups them with the declared amount of
//! judges and owns the balancing operations that equalize judgment totals
//! before scoring.

use crate::core::error::DomainError;
use crate::judgment::analysis::ProposalAnalysis;
use serde::{Deserialize, Serialize};

/// Judgment counts for a single proposal, one count per grade,
/// from "worst" grade to "best" grade.
///
/// # Example
///
/// ```
/// use mj_domain::ProposalTally;
///
/// let tally = ProposalTally::from(vec![1, 2, 4, 2, 1]);
/// assert_eq!(tally.grade_count(), 5);
/// assert_eq!(tally.count_judgments(), 10);
/// assert_eq!(tally.analyze().median_grade, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProposalTally {
    /// Amount of judgments received for each grade, worst to best.
    pub counts: Vec<u64>,
}

impl ProposalTally {
    /// Create a tally from per-grade judgment counts
    pub fn new(counts: impl Into<Vec<u64>>) -> Self {
        Self {
            counts: counts.into(),
        }
    }

    /// Amount of grades available in this tally
    pub fn grade_count(&self) -> usize {
        self.counts.len()
    }

    /// Total amount of judgments across all grades.
    ///
    /// Totals are plain `u64` sums; scoring fails with
    /// [`DomainError::ArithmeticOverflow`] when its adhesion arithmetic
    /// would exceed `u64` rather than wrapping.
    pub fn count_judgments(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Analyze this tally with the default tie-break, favoring contestation
    pub fn analyze(&self) -> ProposalAnalysis {
        ProposalAnalysis::from_tally(self, true)
    }

    /// Analyze this tally with an explicit tie-break policy
    pub fn analyze_with(&self, favor_contestation: bool) -> ProposalAnalysis {
        ProposalAnalysis::from_tally(self, favor_contestation)
    }

    /// Move all judgments counted at `from` into `into`, zeroing `from`.
    ///
    /// Regrading a grade into itself is a no-op. Fails without mutating
    /// when either grade is out of range.
    pub fn regrade_judgments(&mut self, from: usize, into: usize) -> Result<(), DomainError> {
        if from == into {
            return Ok(());
        }
        let grades = self.grade_count();
        if from >= grades {
            return Err(DomainError::GradeOutOfRange { grade: from, grades });
        }
        if into >= grades {
            return Err(DomainError::GradeOutOfRange { grade: into, grades });
        }
        self.counts[into] += self.counts[from];
        self.counts[from] = 0;
        Ok(())
    }

    /// Add judgments at `default_grade` until the total reaches `up_to`.
    ///
    /// Reaching the target exactly is a no-op. Fails without mutating when
    /// the tally already holds more than `up_to` judgments, or when the
    /// shortfall is non-zero and `default_grade` is out of range.
    pub fn fill_with_static_default(
        &mut self,
        up_to: u64,
        default_grade: usize,
    ) -> Result<(), DomainError> {
        let total = self.count_judgments();
        if up_to < total {
            return Err(DomainError::TargetBelowTotal {
                target: up_to,
                total,
            });
        }
        let missing = up_to - total;
        if missing == 0 {
            return Ok(());
        }
        let grades = self.grade_count();
        if default_grade >= grades {
            return Err(DomainError::GradeOutOfRange {
                grade: default_grade,
                grades,
            });
        }
        self.counts[default_grade] += missing;
        Ok(())
    }

    /// Add judgments at this tally's own median grade until the total
    /// reaches `up_to`.
    pub fn fill_with_median_default(&mut self, up_to: u64) -> Result<(), DomainError> {
        let median_grade = self.analyze().median_grade;
        self.fill_with_static_default(up_to, median_grade)
    }
}

impl From<Vec<u64>> for ProposalTally {
    fn from(counts: Vec<u64>) -> Self {
        Self { counts }
    }
}

impl From<&[u64]> for ProposalTally {
    fn from(counts: &[u64]) -> Self {
        Self {
            counts: counts.to_vec(),
        }
    }
}

/// Tallies of every proposal in a poll, with the declared amount of judges.
///
/// The order of proposals is semantically significant: it is preserved in
/// the `index` of each proposal result.
///
/// # Example
///
/// ```
/// use mj_domain::{PollTally, ProposalTally};
///
/// let mut poll = PollTally::new(5, vec![
///     ProposalTally::from(vec![1, 1, 2]),
///     ProposalTally::from(vec![0, 2, 1]),
/// ]);
/// poll.balance_with_static_default(0)?;
/// assert_eq!(poll.proposals[0].counts, vec![2, 1, 2]);
/// assert_eq!(poll.proposals[1].counts, vec![2, 2, 1]);
/// # Ok::<(), mj_domain::DomainError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PollTally {
    /// Amount of judges in the poll. Helps balancing tallies with default
    /// judgments.
    pub judge_count: u64,
    /// Tallies of each proposal.
    pub proposals: Vec<ProposalTally>,
}

impl PollTally {
    /// Create a poll tally with a declared amount of judges
    pub fn new(judge_count: u64, proposals: Vec<ProposalTally>) -> Self {
        Self {
            judge_count,
            proposals,
        }
    }

    /// Create a poll tally without a declared amount of judges.
    ///
    /// Deliberation infers the amount from the biggest proposal total, or
    /// call [`PollTally::guess_judge_count`] to settle it explicitly.
    pub fn from_proposals(proposals: Vec<ProposalTally>) -> Self {
        Self::new(0, proposals)
    }

    /// Biggest judgment total across all proposals
    pub fn max_judgment_total(&self) -> u64 {
        self.proposals
            .iter()
            .map(ProposalTally::count_judgments)
            .max()
            .unwrap_or(0)
    }

    /// Settle an unset judge count from the biggest proposal total.
    ///
    /// Returns the effective amount of judges. A non-zero declared count is
    /// left untouched.
    pub fn guess_judge_count(&mut self) -> u64 {
        if self.judge_count == 0 {
            self.judge_count = self.max_judgment_total();
        }
        self.judge_count
    }

    /// Balance every proposal up to the declared judge count by adding
    /// default judgments at one fixed grade. Mutates the tallies.
    pub fn balance_with_static_default(&mut self, default_grade: usize) -> Result<(), DomainError> {
        let target = self.judge_count;
        for proposal in &mut self.proposals {
            proposal.fill_with_static_default(target, default_grade)?;
        }
        Ok(())
    }

    /// Balance every proposal up to the declared judge count by adding
    /// default judgments at each proposal's own median grade. Mutates the
    /// tallies.
    pub fn balance_with_median_default(&mut self) -> Result<(), DomainError> {
        let target = self.judge_count;
        for proposal in &mut self.proposals {
            proposal.fill_with_median_default(target)?;
        }
        Ok(())
    }
}
