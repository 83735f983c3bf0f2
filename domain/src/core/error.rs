//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every failure of the deliberation core is one of these; they are
/// deterministic input-validation failures, never transient conditions,
/// so retrying is pointless.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "mismatched tally shape: proposals hold different amounts of grades; \
         provide tallies of the same shape"
    )]
    ShapeMismatch,

    #[error(
        "incoherent tally: a proposal holds {judgments} judgments for only {judges} judges; \
         set the poll judge count or guess it from the tallies"
    )]
    IncoherentTally { judges: u64, judgments: u64 },

    #[error(
        "unbalanced tally: proposal #{proposal} holds fewer judgments than there are judges; \
         balance the poll tally first"
    )]
    UnbalancedProposal { proposal: usize },

    #[error("target amount {target} is lower than the current {total} judgments")]
    TargetBelowTotal { target: u64, total: u64 },

    #[error("grade #{grade} is out of range: the tally holds {grades} grades")]
    GradeOutOfRange { grade: usize, grades: usize },

    #[error("arithmetic overflow: too many judgments to score")]
    ArithmeticOverflow,
}

impl DomainError {
    /// Check if this error can be fixed by balancing the poll tally
    pub fn is_balance_failure(&self) -> bool {
        matches!(
            self,
            DomainError::IncoherentTally { .. } | DomainError::UnbalancedProposal { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbalanced_error_display() {
        let error = DomainError::UnbalancedProposal { proposal: 3 };
        assert!(error.to_string().contains("proposal #3"));
    }

    #[test]
    fn test_grade_out_of_range_display() {
        let error = DomainError::GradeOutOfRange { grade: 9, grades: 7 };
        assert_eq!(
            error.to_string(),
            "grade #9 is out of range: the tally holds 7 grades"
        );
    }

    #[test]
    fn test_is_balance_failure() {
        assert!(DomainError::UnbalancedProposal { proposal: 0 }.is_balance_failure());
        assert!(
            DomainError::IncoherentTally {
                judges: 2,
                judgments: 8
            }
            .is_balance_failure()
        );
        assert!(!DomainError::ShapeMismatch.is_balance_failure());
        assert!(!DomainError::ArithmeticOverflow.is_balance_failure());
    }
}
