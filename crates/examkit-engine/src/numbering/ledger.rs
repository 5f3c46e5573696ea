use crate::models::{Block, BlockContent, QuestionType};
use crate::numbering::range::QuestionRange;
use crate::numbering::stats::{BlockStats, DifficultyBreakdown, Summary};
use std::collections::BTreeMap;

/// Running state of one numbering pass.
///
/// The global counter lives here rather than in a closure captured across
/// the nested loops, so each nesting level stays testable on its own:
/// `push` consumes one block and returns its numbered copy, `finish`
/// produces the aggregate.
#[derive(Debug)]
pub(crate) struct NumberingLedger {
    /// Next number to hand out. Starts at 1.
    next: u32,
    per_block: Vec<BlockStats>,
    breakdown: DifficultyBreakdown,
}

impl NumberingLedger {
    pub(crate) fn new() -> Self {
        Self {
            next: 1,
            per_block: Vec::new(),
            breakdown: DifficultyBreakdown::default(),
        }
    }

    /// Number one block's questions in traversal order (group order, then
    /// item order) and record its stats. The input block is left untouched.
    pub(crate) fn push<C>(&mut self, block: &Block<C>) -> Block<C>
    where
        C: BlockContent + Clone,
    {
        let start = self.next;
        let mut numbered = block.clone();
        let mut question_types: BTreeMap<QuestionType, usize> = BTreeMap::new();

        for group in &mut numbered.groups {
            let question_type = group.question_type();
            for item in group.questions_mut() {
                item.number = Some(self.next);
                self.next += 1;
                *question_types.entry(question_type.clone()).or_insert(0) += 1;
            }
        }

        let difficulty = numbered.content.difficulty();
        self.breakdown.record(difficulty);
        self.per_block.push(BlockStats {
            block_index: self.per_block.len(),
            difficulty,
            question_count: (self.next - start) as usize,
            question_range: QuestionRange::from_bounds(start, self.next),
            question_types,
        });

        numbered
    }

    /// Close the pass and produce the per-block records plus the summary.
    pub(crate) fn finish(self) -> (Vec<BlockStats>, Summary) {
        let total_questions = (self.next - 1) as usize;
        let total_blocks = self.per_block.len();
        let average_per_block = if total_blocks == 0 {
            0
        } else {
            (total_questions as f64 / total_blocks as f64).round() as usize
        };

        let summary = Summary {
            total_blocks,
            total_questions,
            average_per_block,
            difficulty_breakdown: self.breakdown,
        };

        (self.per_block, summary)
    }
}
