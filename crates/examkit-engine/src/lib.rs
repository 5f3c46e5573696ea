pub mod decode;
pub mod models;
pub mod numbering;

// Re-export key types for easier usage
pub use decode::{DecodeError, blocks_from_str, blocks_from_value};
pub use models::{
    AudioSegment, Block, BlockContent, Difficulty, ListeningBlock, Passage, QuestionGroup,
    QuestionItem, QuestionType, ReadingBlock,
};
pub use numbering::{
    BlockStats, DifficultyBreakdown, Numbered, QuestionRange, Summary, number_and_aggregate,
};
