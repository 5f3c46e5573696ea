pub mod ledger;
pub mod range;
pub mod stats;

pub use range::QuestionRange;
pub use stats::{BlockStats, DifficultyBreakdown, Summary};

use crate::models::{Block, BlockContent};
use ledger::NumberingLedger;

/// Output of one numbering pass: the numbered copy of the input plus the
/// aggregates the dashboard renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct Numbered<C> {
    /// Same blocks as the input, every question now carrying its number.
    pub blocks: Vec<Block<C>>,
    /// One stats record per block, in block order.
    pub per_block: Vec<BlockStats>,
    /// Whole-input totals and the difficulty breakdown.
    pub summary: Summary,
}

/// Assign one globally consistent numbering to every question in `blocks`
/// and compute the summary statistics the listing and overview widgets
/// consume.
///
/// Numbers form a contiguous run starting at 1, strictly increasing in
/// traversal order: block order, then group order within a block, then item
/// order within a group. Each block's stats record carries the sub-range it
/// received, so successive ranges are disjoint and appear in block order.
///
/// The input is not mutated; the pass works on a structural copy, which
/// makes it safe to call on every render and idempotent: running it on its
/// own output re-derives the same numbering. Blocks without groups and
/// groups without questions contribute nothing and never fail the pass.
///
/// ```rust
/// use examkit_engine::models::{Block, ChoiceGroup, Passage, QuestionGroup, QuestionItem};
/// use examkit_engine::numbering::number_and_aggregate;
///
/// let group = QuestionGroup::MultipleChoice(ChoiceGroup {
///     questions: vec![QuestionItem::new("First?"), QuestionItem::new("Second?")],
///     options: vec!["A".into(), "B".into()],
///     instruction: None,
/// });
/// let blocks = vec![Block::with_groups(Passage::default(), vec![group])];
///
/// let numbered = number_and_aggregate(&blocks);
/// assert_eq!(numbered.summary.total_questions, 2);
/// assert_eq!(numbered.per_block[0].question_range.to_string(), "1-2");
/// assert_eq!(numbered.blocks[0].groups[0].questions()[0].number, Some(1));
/// ```
pub fn number_and_aggregate<C>(blocks: &[Block<C>]) -> Numbered<C>
where
    C: BlockContent + Clone,
{
    let mut ledger = NumberingLedger::new();
    let numbered = blocks.iter().map(|block| ledger.push(block)).collect();
    let (per_block, summary) = ledger.finish();

    Numbered {
        blocks: numbered,
        per_block,
        summary,
    }
}
