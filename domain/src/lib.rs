//! Domain layer for majority-judgment
//!
//! This crate contains the deliberation core: tallies, median analyses,
//! scores and the Majority Judgment deliberator. It has no dependencies on
//! storage, transport or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Majority Judgment
//!
//! Majority Judgment ranks competing proposals from the distribution of
//! judgments each received on a shared ordered scale of grades:
//!
//! - **Median grade**: the grade at the median position of a proposal's
//!   judgments, the starting point of its rank
//! - **Contestation and adhesion**: the groups of judgments below and
//!   above the median, used to break ties between equal medians
//! - **Score**: the per-proposal ranking key built by extracting medians
//!   round after round
//!
//! ## Deliberators
//!
//! Deliberation is modeled as a capability (the [`Deliberator`] trait) so
//! other social-choice methods can be added next to [`MajorityJudgment`].
//!
//! # Example
//!
//! ```
//! use mj_domain::{Deliberator, MajorityJudgment, PollTally, ProposalTally};
//!
//! let poll = PollTally::new(10, vec![
//!     ProposalTally::from(vec![2, 2, 2, 2, 2]),
//!     ProposalTally::from(vec![2, 1, 1, 1, 5]),
//! ]);
//! let result = MajorityJudgment::new().deliberate(&poll)?;
//! assert_eq!(result.proposals[0].rank, 2);
//! assert_eq!(result.proposals[1].rank, 1);
//! # Ok::<(), mj_domain::DomainError>(())
//! ```

pub mod core;
pub mod judgment;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use crate::judgment::{
    analysis::ProposalAnalysis,
    deliberator::Deliberator,
    majority::MajorityJudgment,
    result::{PollResult, ProposalResult},
    score::{Score, ScoreRound},
    tally::{PollTally, ProposalTally},
};
