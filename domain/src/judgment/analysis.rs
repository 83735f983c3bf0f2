//! Median analysis of a proposal tally
//!
//! The analysis splits the judgments of one proposal into three groups:
//! the contestation group below the median grade, the median group, and
//! the adhesion group above it. The second group is whichever flank the
//! tie-break policy picks to challenge the median; its sign drives the
//! adhesion term of the score.

use crate::judgment::tally::ProposalTally;
use serde::{Deserialize, Serialize};

/// Median, contestation and adhesion groups of one proposal tally.
///
/// A plain value object, recomputed fresh from its inputs on every call.
///
/// # Example
///
/// ```
/// use mj_domain::{ProposalAnalysis, ProposalTally};
///
/// let tally = ProposalTally::from(vec![1, 1, 1, 1, 1, 1, 1]);
/// let analysis = ProposalAnalysis::from_tally(&tally, true);
/// assert_eq!(analysis.median_grade, 3);
/// assert_eq!(analysis.contestation_group_size, 3);
/// assert_eq!(analysis.adhesion_group_size, 3);
/// assert_eq!(analysis.second_group_sign, -1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalAnalysis {
    /// Total amount of judgments across all grades
    pub total_size: u64,
    /// Median grade; 0 is the worst grade
    pub median_grade: usize,
    /// Amount of judgments at the median grade
    pub median_group_size: u64,
    /// Grade of the second group, the collapse target during scoring
    pub second_median_grade: usize,
    /// Size of the second group, either contestation or adhesion
    pub second_group_size: u64,
    /// -1 when the second group is contestation, +1 when adhesion, 0 when
    /// both flanks are empty
    pub second_group_sign: i8,
    /// Lowest grade above the median holding any judgments
    pub adhesion_group_grade: usize,
    /// Amount of judgments above the median grade
    pub adhesion_group_size: u64,
    /// Highest grade below the median holding any judgments
    pub contestation_group_grade: usize,
    /// Amount of judgments below the median grade
    pub contestation_group_size: u64,
}

impl ProposalAnalysis {
    /// Analyze `tally`, leaving it untouched.
    ///
    /// Majority Judgment uses the low median by default, which favors
    /// contestation on even judgment totals; pass `favor_contestation =
    /// false` for the high median. An empty tally yields the all-zero
    /// analysis, not an error.
    pub fn from_tally(tally: &ProposalTally, favor_contestation: bool) -> Self {
        let total_size = tally.count_judgments();
        if total_size == 0 {
            return Self::default();
        }

        let adjusted_total = if favor_contestation {
            total_size - 1
        } else {
            total_size
        };
        let median_index = adjusted_total / 2;

        let mut analysis = Self {
            total_size,
            ..Self::default()
        };
        let mut cursor = 0u64;
        for (grade, &count) in tally.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let start = cursor;
            cursor += count;
            if start < median_index && cursor <= median_index {
                // Entirely below the median index; the last such grade is
                // the one flanking the median.
                analysis.contestation_group_size += count;
                analysis.contestation_group_grade = grade;
            } else if start <= median_index && median_index < cursor {
                analysis.median_grade = grade;
                analysis.median_group_size = count;
            } else {
                // Entirely above; the first such grade flanks the median.
                if analysis.adhesion_group_size == 0 {
                    analysis.adhesion_group_grade = grade;
                }
                analysis.adhesion_group_size += count;
            }
        }

        let contestation_prevails = if favor_contestation {
            analysis.adhesion_group_size <= analysis.contestation_group_size
        } else {
            analysis.adhesion_group_size < analysis.contestation_group_size
        };
        if contestation_prevails {
            analysis.second_median_grade = analysis.contestation_group_grade;
            analysis.second_group_size = analysis.contestation_group_size;
            if analysis.second_group_size > 0 {
                analysis.second_group_sign = -1;
            }
        } else {
            analysis.second_median_grade = analysis.adhesion_group_grade;
            analysis.second_group_size = analysis.adhesion_group_size;
            if analysis.second_group_size > 0 {
                analysis.second_group_sign = 1;
            }
        }

        analysis
    }

    /// Check if the second group challenges the median from below
    pub fn second_group_is_contestation(&self) -> bool {
        self.second_group_sign < 0
    }

    /// Check if the second group challenges the median from above
    pub fn second_group_is_adhesion(&self) -> bool {
        self.second_group_sign > 0
    }
}
