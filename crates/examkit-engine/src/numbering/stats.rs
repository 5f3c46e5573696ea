use crate::models::{Difficulty, QuestionType};
use crate::numbering::range::QuestionRange;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-block statistics, one record per input block in block order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStats {
    /// Position of the block in the input sequence.
    pub block_index: usize,
    pub difficulty: Difficulty,
    pub question_count: usize,
    pub question_range: QuestionRange,
    /// Question count per tag, buckets created on first encounter.
    /// Unknown tags count under their literal value.
    pub question_types: BTreeMap<QuestionType, usize>,
}

/// Count of blocks per difficulty bucket, zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DifficultyBreakdown {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyBreakdown {
    pub fn record(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
    }

    pub fn count(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Sum over all buckets. Equals the number of blocks recorded.
    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }
}

/// Whole-input summary for overview cards and badges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_blocks: usize,
    pub total_questions: usize,
    /// `total_questions / total_blocks`, rounded half away from zero;
    /// `0` when there are no blocks.
    pub average_per_block: usize,
    pub difficulty_breakdown: DifficultyBreakdown,
}
