pub mod block;
pub mod group;
pub mod question;

pub use block::{AudioSegment, Block, BlockContent, Difficulty, ListeningBlock, Passage, ReadingBlock};
pub use group::{
    ChoiceGroup, CompletionGroup, DecisionGroup, DiagramGroup, FallbackGroup, MatchingGroup,
    QuestionGroup, ShortAnswerGroup,
};
pub use question::{QuestionItem, QuestionType};
