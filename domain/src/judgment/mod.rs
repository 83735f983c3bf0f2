//! Majority Judgment deliberation domain
//!
//! This module contains the core concepts for median-based deliberation.
//!
//! # Core Concepts
//!
//! ## Grades and Judgments
//! Judges assign each proposal one grade on a shared ordered scale, grade 0
//! being the worst. A [`ProposalTally`] counts the judgments a proposal
//! received per grade; a [`PollTally`] groups the proposal tallies of one
//! poll with the declared amount of judges.
//!
//! ## Median Analysis
//! A [`ProposalAnalysis`] splits a tally around its median grade into a
//! contestation group (judgments below the median) and an adhesion group
//! (judgments above it), and picks the second group that challenges the
//! median under the configured tie-break.
//!
//! ## Deliberation
//! The [`MajorityJudgment`] deliberator turns analyses into a [`Score`]
//! per proposal by collapsing the median grade round after round, then
//! ranks the proposals by score.
//!
//! # Data Flow
//!
//! ```text
//! PollTally ──(optional balancing)──▶ validated ProposalTally, per proposal
//!                                          │
//!                                          ▼
//!                      ProposalAnalysis, once per grade ──▶ Score
//!                                                             │
//!                                        sort + competition ranking
//!                                                             │
//!                                                             ▼
//!                                                        PollResult
//! ```

pub mod analysis;
pub mod deliberator;
pub mod majority;
pub mod result;
pub mod score;
pub mod tally;

// Re-export main types
pub use analysis::ProposalAnalysis;
pub use deliberator::Deliberator;
pub use majority::MajorityJudgment;
pub use result::{PollResult, ProposalResult};
pub use score::{Score, ScoreRound};
pub use tally::{PollTally, ProposalTally};
