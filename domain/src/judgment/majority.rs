//! The Majority Judgment deliberator
//!
//! Scores every proposal by iterated median extraction: each round records
//! the current median grade and the adhesion term, then collapses the
//! median grade into the second group so the next round finds a deeper
//! median. The resulting scores sort the proposals.

use crate::core::error::DomainError;
use crate::judgment::analysis::ProposalAnalysis;
use crate::judgment::deliberator::Deliberator;
use crate::judgment::result::{PollResult, ProposalResult};
use crate::judgment::score::{Score, ScoreRound};
use crate::judgment::tally::{PollTally, ProposalTally};
use tracing::{debug, trace};

/// Majority Judgment deliberator.
///
/// Median ties on even judgment totals are broken toward contestation by
/// default, the standard Majority Judgment low-median rule.
///
/// # Example
///
/// ```
/// use mj_domain::{Deliberator, MajorityJudgment, PollTally, ProposalTally};
///
/// let poll = PollTally::new(3, vec![
///     ProposalTally::from(vec![1, 1, 1]),
///     ProposalTally::from(vec![1, 2, 0]),
///     ProposalTally::from(vec![0, 2, 1]),
/// ]);
/// let result = MajorityJudgment::new().deliberate(&poll)?;
/// let ranks: Vec<usize> = result.proposals.iter().map(|p| p.rank).collect();
/// assert_eq!(ranks, vec![2, 3, 1]);
/// # Ok::<(), mj_domain::DomainError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MajorityJudgment {
    favor_contestation: bool,
    include_tallies: bool,
}

impl Default for MajorityJudgment {
    fn default() -> Self {
        Self {
            favor_contestation: true,
            include_tallies: false,
        }
    }
}

impl MajorityJudgment {
    /// Create a deliberator with the default low-median tie-break
    pub fn new() -> Self {
        Self::default()
    }

    /// Break even-total median ties toward adhesion, using the high median
    pub fn favoring_adhesion(mut self) -> Self {
        self.favor_contestation = false;
        self
    }

    /// Attach a copy of each input tally to its proposal result
    pub fn with_tallies(mut self) -> Self {
        self.include_tallies = true;
        self
    }

    /// Compute the ranking key of a single proposal.
    ///
    /// Runs one analysis per grade on a scratch copy of `tally`, emitting
    /// a score round and collapsing the median grade into the second group
    /// after each pass; `tally` itself is left untouched. Fails when the
    /// adhesion term would exceed `u64`.
    pub fn compute_score(
        &self,
        tally: &ProposalTally,
        favor_contestation: bool,
    ) -> Result<Score, DomainError> {
        let judgments = tally.count_judgments();
        let grades = tally.grade_count();
        let mut rounds = Vec::with_capacity(grades);
        let mut scratch = tally.clone();
        for _ in 0..grades {
            let analysis = ProposalAnalysis::from_tally(&scratch, favor_contestation);
            let adhesion_term = if analysis.second_group_sign > 0 {
                judgments
                    .checked_add(analysis.second_group_size)
                    .ok_or(DomainError::ArithmeticOverflow)?
            } else if analysis.second_group_sign < 0 {
                judgments
                    .checked_sub(analysis.second_group_size)
                    .ok_or(DomainError::ArithmeticOverflow)?
            } else {
                judgments
            };
            rounds.push(ScoreRound {
                median_grade: analysis.median_grade,
                adhesion_term,
            });
            // Without a second group the whole remaining mass already sits
            // at the median grade; collapsing targets the median itself.
            let into = if analysis.second_group_sign == 0 {
                analysis.median_grade
            } else {
                analysis.second_median_grade
            };
            scratch.regrade_judgments(analysis.median_grade, into)?;
        }
        Ok(Score::new(rounds, judgments))
    }
}

impl Deliberator for MajorityJudgment {
    fn deliberate(&self, tally: &PollTally) -> Result<PollResult, DomainError> {
        if tally.proposals.is_empty() {
            return Ok(PollResult::empty());
        }

        let grades = tally.proposals[0].grade_count();
        if tally.proposals.iter().any(|p| p.grade_count() != grades) {
            return Err(DomainError::ShapeMismatch);
        }

        let max_judgments = tally.max_judgment_total();
        let judges = if tally.judge_count == 0 {
            max_judgments
        } else {
            tally.judge_count
        };
        debug!(
            proposals = tally.proposals.len(),
            grades, judges, "deliberating poll tally"
        );

        if judges < max_judgments {
            return Err(DomainError::IncoherentTally {
                judges,
                judgments: max_judgments,
            });
        }
        for (index, proposal) in tally.proposals.iter().enumerate() {
            if proposal.count_judgments() != judges {
                return Err(DomainError::UnbalancedProposal { proposal: index });
            }
        }

        let mut proposals = Vec::with_capacity(tally.proposals.len());
        for (index, proposal) in tally.proposals.iter().enumerate() {
            let score = self.compute_score(proposal, self.favor_contestation)?;
            trace!(proposal = index, score = %score, "scored proposal");
            proposals.push(ProposalResult {
                index,
                rank: 0,
                score,
                analysis: Some(ProposalAnalysis::from_tally(
                    proposal,
                    self.favor_contestation,
                )),
                tally: self.include_tallies.then(|| proposal.clone()),
            });
        }

        let mut sorted = proposals.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));

        // Proposals with equal scores share a rank; the next distinct
        // score resumes at its position, leaving a gap.
        for position in 0..sorted.len() {
            let rank = if position > 0 && sorted[position].score == sorted[position - 1].score {
                sorted[position - 1].rank
            } else {
                position + 1
            };
            sorted[position].rank = rank;
        }
        for ranked in &sorted {
            proposals[ranked.index].rank = ranked.rank;
        }

        Ok(PollResult {
            proposals,
            proposals_sorted: sorted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll(judge_count: u64, tallies: &[&[u64]]) -> PollTally {
        PollTally::new(
            judge_count,
            tallies.iter().map(|t| ProposalTally::from(*t)).collect(),
        )
    }

    fn ranks(result: &PollResult) -> Vec<usize> {
        result.proposals.iter().map(|p| p.rank).collect()
    }

    #[test]
    fn test_basic_scenario() {
        let poll = poll(3, &[&[1, 1, 1], &[1, 2, 0], &[0, 2, 1]]);
        let result = MajorityJudgment::new().deliberate(&poll).unwrap();
        assert_eq!(ranks(&result), vec![2, 3, 1]);
    }

    #[test]
    fn test_billions_of_participants() {
        let poll = poll(
            20_000_000_000,
            &[
                &[10_000_000_000, 10_000_000_000],
                &[9_999_999_999, 10_000_000_001],
            ],
        );
        let result = MajorityJudgment::new().deliberate(&poll).unwrap();
        assert_eq!(ranks(&result), vec![2, 1]);
    }

    #[test]
    fn test_readme_demo() {
        let poll = poll(
            10,
            &[
                &[2, 2, 2, 2, 2],
                &[2, 1, 1, 1, 5],
                &[2, 1, 1, 2, 4],
                &[2, 1, 5, 0, 2],
                &[2, 2, 2, 2, 2],
            ],
        );
        let result = MajorityJudgment::new().deliberate(&poll).unwrap();
        assert_eq!(result.proposals.len(), 5);
        assert_eq!(ranks(&result), vec![4, 1, 2, 3, 4]);

        let sorted_ranks: Vec<usize> = result.proposals_sorted.iter().map(|p| p.rank).collect();
        assert_eq!(sorted_ranks, vec![1, 2, 3, 4, 4]);
        let sorted_indices: Vec<usize> = result.proposals_sorted.iter().map(|p| p.index).collect();
        assert_eq!(sorted_indices, vec![1, 2, 3, 0, 4]);
        assert_eq!(result.winner().unwrap().index, 1);
    }

    #[test]
    fn test_guessing_judge_count() {
        let poll = PollTally::from_proposals(vec![
            ProposalTally::from(vec![2, 2, 2, 2, 2]),
            ProposalTally::from(vec![2, 1, 1, 1, 5]),
            ProposalTally::from(vec![2, 1, 1, 2, 4]),
            ProposalTally::from(vec![2, 1, 5, 0, 2]),
            ProposalTally::from(vec![2, 2, 2, 2, 2]),
        ]);
        let result = MajorityJudgment::new().deliberate(&poll).unwrap();
        assert_eq!(ranks(&result), vec![4, 1, 2, 3, 4]);
        // Inference is local to the deliberation; the input stays unset.
        assert_eq!(poll.judge_count, 0);
    }

    #[test]
    fn test_no_proposals() {
        let poll = PollTally::new(0, Vec::new());
        let result = MajorityJudgment::new().deliberate(&poll).unwrap();
        assert!(result.proposals.is_empty());
        assert!(result.proposals_sorted.is_empty());
    }

    #[test]
    fn test_incoherent_tally() {
        let poll = poll(2, &[&[4, 4], &[2, 6]]);
        let err = MajorityJudgment::new().deliberate(&poll).unwrap_err();
        assert_eq!(
            err,
            DomainError::IncoherentTally {
                judges: 2,
                judgments: 8
            }
        );
    }

    #[test]
    fn test_mismatched_tally_shape() {
        let poll = poll(10, &[&[2, 2, 2, 2, 2], &[2, 2, 2, 2]]);
        let err = MajorityJudgment::new().deliberate(&poll).unwrap_err();
        assert_eq!(err, DomainError::ShapeMismatch);
    }

    #[test]
    fn test_unbalanced_tally() {
        let poll = poll(10, &[&[2, 2, 2, 2, 2], &[2, 0, 0, 0, 2]]);
        let err = MajorityJudgment::new().deliberate(&poll).unwrap_err();
        assert_eq!(err, DomainError::UnbalancedProposal { proposal: 1 });
    }

    #[test]
    fn test_adhesion_term_overflow() {
        let half = u64::MAX / 2;
        let poll = poll(0, &[&[half, half], &[half, half]]);
        let err = MajorityJudgment::new().deliberate(&poll).unwrap_err();
        assert_eq!(err, DomainError::ArithmeticOverflow);
    }

    #[test]
    fn test_identical_proposals_share_rank() {
        let poll = poll(10, &[&[2, 2, 2, 2, 2], &[2, 2, 2, 2, 2]]);
        let result = MajorityJudgment::new().deliberate(&poll).unwrap();
        assert_eq!(ranks(&result), vec![1, 1]);
        assert_eq!(
            result.proposals[0].score,
            result.proposals[1].score
        );
    }

    #[test]
    fn test_favoring_adhesion_flips_even_total_median() {
        let tally = ProposalTally::from(vec![1, 1, 1, 1, 1, 1]);
        let poll = PollTally::new(6, vec![tally]);

        let low = MajorityJudgment::new().deliberate(&poll).unwrap();
        let high = MajorityJudgment::new()
            .favoring_adhesion()
            .deliberate(&poll)
            .unwrap();

        let low_analysis = low.proposals[0].analysis.as_ref().unwrap();
        let high_analysis = high.proposals[0].analysis.as_ref().unwrap();
        assert_eq!(low_analysis.median_grade, 2);
        assert_eq!(high_analysis.median_grade, 3);
    }

    #[test]
    fn test_tallies_attached_on_request() {
        let poll = poll(6, &[&[2, 2, 2]]);
        let bare = MajorityJudgment::new().deliberate(&poll).unwrap();
        assert!(bare.proposals[0].tally.is_none());

        let result = MajorityJudgment::new()
            .with_tallies()
            .deliberate(&poll)
            .unwrap();
        assert_eq!(
            result.proposals[0].tally,
            Some(ProposalTally::from(vec![2, 2, 2]))
        );
    }

    #[test]
    fn test_deliberation_leaves_input_untouched() {
        let poll = poll(10, &[&[2, 1, 1, 1, 5], &[2, 1, 1, 2, 4]]);
        let before = poll.clone();
        MajorityJudgment::new().deliberate(&poll).unwrap();
        assert_eq!(poll, before);
    }

    #[test]
    fn test_score_rendering_of_scratch_collapse() {
        let score = MajorityJudgment::new()
            .compute_score(&ProposalTally::from(vec![2, 1, 1, 1, 5]), true)
            .unwrap();
        assert_eq!(score.to_string(), "315406207108010");
    }
}
