use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Tag identifying which kind of question cluster a group holds.
///
/// The set of known tags is closed, but the wire format is not: content
/// authored against a newer schema can carry tags this build has never seen.
/// Those round-trip through [`QuestionType::Other`] with the tag preserved
/// verbatim, so a listing never fails to load because of one new type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionType {
    MultipleChoice,
    MultipleChoiceMultipleAnswers,
    TrueFalseNotGiven,
    YesNoNotGiven,
    MatchingInformation,
    MatchingHeadings,
    MatchingFeatures,
    MatchingSentenceEndings,
    SentenceCompletion,
    SummaryCompletion,
    NoteCompletion,
    TableCompletion,
    FormCompletion,
    FlowChartCompletion,
    DiagramLabelCompletion,
    ShortAnswer,
    /// Tag not in the known set, preserved verbatim.
    Other(String),
}

impl QuestionType {
    /// The wire tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::MultipleChoiceMultipleAnswers => "multiple-choice-multiple-answers",
            Self::TrueFalseNotGiven => "true-false-not-given",
            Self::YesNoNotGiven => "yes-no-not-given",
            Self::MatchingInformation => "matching-information",
            Self::MatchingHeadings => "matching-headings",
            Self::MatchingFeatures => "matching-features",
            Self::MatchingSentenceEndings => "matching-sentence-endings",
            Self::SentenceCompletion => "sentence-completion",
            Self::SummaryCompletion => "summary-completion",
            Self::NoteCompletion => "note-completion",
            Self::TableCompletion => "table-completion",
            Self::FormCompletion => "form-completion",
            Self::FlowChartCompletion => "flow-chart-completion",
            Self::DiagramLabelCompletion => "diagram-label-completion",
            Self::ShortAnswer => "short-answer",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this tag is part of the known set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for QuestionType {
    fn from(tag: &str) -> Self {
        match tag {
            "multiple-choice" => Self::MultipleChoice,
            "multiple-choice-multiple-answers" => Self::MultipleChoiceMultipleAnswers,
            "true-false-not-given" => Self::TrueFalseNotGiven,
            "yes-no-not-given" => Self::YesNoNotGiven,
            "matching-information" => Self::MatchingInformation,
            "matching-headings" => Self::MatchingHeadings,
            "matching-features" => Self::MatchingFeatures,
            "matching-sentence-endings" => Self::MatchingSentenceEndings,
            "sentence-completion" => Self::SentenceCompletion,
            "summary-completion" => Self::SummaryCompletion,
            "note-completion" => Self::NoteCompletion,
            "table-completion" => Self::TableCompletion,
            "form-completion" => Self::FormCompletion,
            "flow-chart-completion" => Self::FlowChartCompletion,
            "diagram-label-completion" => Self::DiagramLabelCompletion,
            "short-answer" => Self::ShortAnswer,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for QuestionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(QuestionType::from(tag.as_str()))
    }
}

/// A single gradable question inside a group.
///
/// `number` is the slot the numbering pass fills in; on freshly fetched
/// content it is absent. Fields beyond the prompt vary by group variant and
/// ride along untouched in `extra` for the per-type renderers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl QuestionItem {
    /// Question with just a prompt, number unassigned.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}
