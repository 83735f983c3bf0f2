//! Deliberator trait
//!
//! A deliberator turns a poll tally into a ranked poll result. Majority
//! Judgment is the one deliberator implemented today; other social-choice
//! methods can slot in behind the same trait without disturbing the data
//! model.

use crate::core::error::DomainError;
use crate::judgment::result::PollResult;
use crate::judgment::tally::PollTally;

/// Deliberation strategy: rank every proposal of a poll tally.
pub trait Deliberator {
    /// Rank the proposals of `tally`, leaving the tally untouched.
    ///
    /// All-or-nothing: either a complete, internally consistent result or
    /// an error, never a partial ranking.
    fn deliberate(&self, tally: &PollTally) -> Result<PollResult, DomainError>;
}
