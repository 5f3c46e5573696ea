use crate::models::question::{QuestionItem, QuestionType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Decode a question list leniently: a missing, `null` or non-sequence
/// value contributes zero questions instead of failing the whole listing.
fn questions_or_empty<'de, D>(deserializer: D) -> Result<Vec<QuestionItem>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => {
            tracing::debug!("question list is not a sequence, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Payload for choice-based groups (single or multiple answers).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceGroup {
    #[serde(default, deserialize_with = "questions_or_empty")]
    pub questions: Vec<QuestionItem>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// Payload for three-way decision groups (true/false/not-given and
/// yes/no/not-given).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionGroup {
    #[serde(default, deserialize_with = "questions_or_empty")]
    pub questions: Vec<QuestionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// Payload for matching groups. `options` is the bank being matched
/// against: headings, features, sentence endings or paragraph letters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingGroup {
    #[serde(default, deserialize_with = "questions_or_empty")]
    pub questions: Vec<QuestionItem>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// Payload for gap-fill groups (sentence, summary, note, table, form and
/// flow-chart completion). `text` is the scaffold the gaps sit in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionGroup {
    #[serde(default, deserialize_with = "questions_or_empty")]
    pub questions: Vec<QuestionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_limit: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// Payload for diagram labelling groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramGroup {
    #[serde(default, deserialize_with = "questions_or_empty")]
    pub questions: Vec<QuestionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_limit: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// Payload for short-answer groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortAnswerGroup {
    #[serde(default, deserialize_with = "questions_or_empty")]
    pub questions: Vec<QuestionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_limit: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// Payload for groups with an unrecognized tag. The fields we don't model
/// are kept in `extra` so the payload survives a round trip and the UI's
/// generic renderer still has them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackGroup {
    #[serde(default, deserialize_with = "questions_or_empty")]
    pub questions: Vec<QuestionItem>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One question-type cluster inside a content block.
///
/// The variant determines which auxiliary fields exist (options, word
/// limits, diagram references), but the numbering pass only ever touches
/// the shared surface: [`QuestionGroup::question_type`] and
/// [`QuestionGroup::questions`]. Variant payloads are for the per-type
/// renderers.
///
/// On the wire a group is a flat object tagged by `questionType`. Groups
/// with a tag outside the known set decode into
/// [`QuestionGroup::Unrecognized`] rather than failing; the UI renders
/// those with its generic fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionGroup {
    MultipleChoice(ChoiceGroup),
    MultipleChoiceMultipleAnswers(ChoiceGroup),
    TrueFalseNotGiven(DecisionGroup),
    YesNoNotGiven(DecisionGroup),
    MatchingInformation(MatchingGroup),
    MatchingHeadings(MatchingGroup),
    MatchingFeatures(MatchingGroup),
    MatchingSentenceEndings(MatchingGroup),
    SentenceCompletion(CompletionGroup),
    SummaryCompletion(CompletionGroup),
    NoteCompletion(CompletionGroup),
    TableCompletion(CompletionGroup),
    FormCompletion(CompletionGroup),
    FlowChartCompletion(CompletionGroup),
    DiagramLabelCompletion(DiagramGroup),
    ShortAnswer(ShortAnswerGroup),
    /// Group whose tag this build does not know.
    Unrecognized { tag: String, payload: FallbackGroup },
}

impl QuestionGroup {
    /// The tag of this group, unknown tags included.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::MultipleChoice(_) => QuestionType::MultipleChoice,
            Self::MultipleChoiceMultipleAnswers(_) => QuestionType::MultipleChoiceMultipleAnswers,
            Self::TrueFalseNotGiven(_) => QuestionType::TrueFalseNotGiven,
            Self::YesNoNotGiven(_) => QuestionType::YesNoNotGiven,
            Self::MatchingInformation(_) => QuestionType::MatchingInformation,
            Self::MatchingHeadings(_) => QuestionType::MatchingHeadings,
            Self::MatchingFeatures(_) => QuestionType::MatchingFeatures,
            Self::MatchingSentenceEndings(_) => QuestionType::MatchingSentenceEndings,
            Self::SentenceCompletion(_) => QuestionType::SentenceCompletion,
            Self::SummaryCompletion(_) => QuestionType::SummaryCompletion,
            Self::NoteCompletion(_) => QuestionType::NoteCompletion,
            Self::TableCompletion(_) => QuestionType::TableCompletion,
            Self::FormCompletion(_) => QuestionType::FormCompletion,
            Self::FlowChartCompletion(_) => QuestionType::FlowChartCompletion,
            Self::DiagramLabelCompletion(_) => QuestionType::DiagramLabelCompletion,
            Self::ShortAnswer(_) => QuestionType::ShortAnswer,
            Self::Unrecognized { tag, .. } => QuestionType::Other(tag.clone()),
        }
    }

    /// The ordered questions in this group.
    pub fn questions(&self) -> &[QuestionItem] {
        match self {
            Self::MultipleChoice(g) | Self::MultipleChoiceMultipleAnswers(g) => &g.questions,
            Self::TrueFalseNotGiven(g) | Self::YesNoNotGiven(g) => &g.questions,
            Self::MatchingInformation(g)
            | Self::MatchingHeadings(g)
            | Self::MatchingFeatures(g)
            | Self::MatchingSentenceEndings(g) => &g.questions,
            Self::SentenceCompletion(g)
            | Self::SummaryCompletion(g)
            | Self::NoteCompletion(g)
            | Self::TableCompletion(g)
            | Self::FormCompletion(g)
            | Self::FlowChartCompletion(g) => &g.questions,
            Self::DiagramLabelCompletion(g) => &g.questions,
            Self::ShortAnswer(g) => &g.questions,
            Self::Unrecognized { payload, .. } => &payload.questions,
        }
    }

    /// Mutable access to the ordered questions in this group.
    pub fn questions_mut(&mut self) -> &mut Vec<QuestionItem> {
        match self {
            Self::MultipleChoice(g) | Self::MultipleChoiceMultipleAnswers(g) => &mut g.questions,
            Self::TrueFalseNotGiven(g) | Self::YesNoNotGiven(g) => &mut g.questions,
            Self::MatchingInformation(g)
            | Self::MatchingHeadings(g)
            | Self::MatchingFeatures(g)
            | Self::MatchingSentenceEndings(g) => &mut g.questions,
            Self::SentenceCompletion(g)
            | Self::SummaryCompletion(g)
            | Self::NoteCompletion(g)
            | Self::TableCompletion(g)
            | Self::FormCompletion(g)
            | Self::FlowChartCompletion(g) => &mut g.questions,
            Self::DiagramLabelCompletion(g) => &mut g.questions,
            Self::ShortAnswer(g) => &mut g.questions,
            Self::Unrecognized { payload, .. } => &mut payload.questions,
        }
    }

    /// Number of questions in this group.
    pub fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Build a group from its wire tag and the raw group object.
    ///
    /// The residual `questionType` key is ignored by the payload structs,
    /// except the fallback whose flattened map would swallow it.
    fn from_tagged_value(
        tag: QuestionType,
        mut value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        use serde_json::from_value;

        Ok(match tag {
            QuestionType::MultipleChoice => Self::MultipleChoice(from_value(value)?),
            QuestionType::MultipleChoiceMultipleAnswers => {
                Self::MultipleChoiceMultipleAnswers(from_value(value)?)
            }
            QuestionType::TrueFalseNotGiven => Self::TrueFalseNotGiven(from_value(value)?),
            QuestionType::YesNoNotGiven => Self::YesNoNotGiven(from_value(value)?),
            QuestionType::MatchingInformation => Self::MatchingInformation(from_value(value)?),
            QuestionType::MatchingHeadings => Self::MatchingHeadings(from_value(value)?),
            QuestionType::MatchingFeatures => Self::MatchingFeatures(from_value(value)?),
            QuestionType::MatchingSentenceEndings => {
                Self::MatchingSentenceEndings(from_value(value)?)
            }
            QuestionType::SentenceCompletion => Self::SentenceCompletion(from_value(value)?),
            QuestionType::SummaryCompletion => Self::SummaryCompletion(from_value(value)?),
            QuestionType::NoteCompletion => Self::NoteCompletion(from_value(value)?),
            QuestionType::TableCompletion => Self::TableCompletion(from_value(value)?),
            QuestionType::FormCompletion => Self::FormCompletion(from_value(value)?),
            QuestionType::FlowChartCompletion => Self::FlowChartCompletion(from_value(value)?),
            QuestionType::DiagramLabelCompletion => {
                Self::DiagramLabelCompletion(from_value(value)?)
            }
            QuestionType::ShortAnswer => Self::ShortAnswer(from_value(value)?),
            QuestionType::Other(tag) => {
                tracing::debug!(%tag, "unrecognized question type, keeping as fallback group");
                if let serde_json::Value::Object(map) = &mut value {
                    map.remove("questionType");
                }
                Self::Unrecognized {
                    tag,
                    payload: from_value(value)?,
                }
            }
        })
    }
}

impl<'de> Deserialize<'de> for QuestionGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        let tag = value
            .get("questionType")
            .and_then(serde_json::Value::as_str)
            .map(QuestionType::from)
            .ok_or_else(|| D::Error::missing_field("questionType"))?;

        Self::from_tagged_value(tag, value).map_err(D::Error::custom)
    }
}

impl Serialize for QuestionGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;

        let mut value = match self {
            Self::MultipleChoice(g) | Self::MultipleChoiceMultipleAnswers(g) => {
                serde_json::to_value(g)
            }
            Self::TrueFalseNotGiven(g) | Self::YesNoNotGiven(g) => serde_json::to_value(g),
            Self::MatchingInformation(g)
            | Self::MatchingHeadings(g)
            | Self::MatchingFeatures(g)
            | Self::MatchingSentenceEndings(g) => serde_json::to_value(g),
            Self::SentenceCompletion(g)
            | Self::SummaryCompletion(g)
            | Self::NoteCompletion(g)
            | Self::TableCompletion(g)
            | Self::FormCompletion(g)
            | Self::FlowChartCompletion(g) => serde_json::to_value(g),
            Self::DiagramLabelCompletion(g) => serde_json::to_value(g),
            Self::ShortAnswer(g) => serde_json::to_value(g),
            Self::Unrecognized { payload, .. } => serde_json::to_value(payload),
        }
        .map_err(S::Error::custom)?;

        let question_type = self.question_type();
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "questionType".to_string(),
                serde_json::Value::String(question_type.as_str().to_string()),
            );
        }

        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_known_group() {
        let json = r#"{
            "questionType": "multiple-choice",
            "instruction": "Choose the correct letter, A, B, C or D.",
            "options": ["A", "B", "C", "D"],
            "questions": [
                {"prompt": "What does the writer say about bees?"},
                {"prompt": "Which claim is supported by paragraph 2?"}
            ]
        }"#;

        let group: QuestionGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.question_type(), QuestionType::MultipleChoice);
        assert_eq!(group.question_count(), 2);

        match &group {
            QuestionGroup::MultipleChoice(g) => {
                assert_eq!(g.options, vec!["A", "B", "C", "D"]);
                assert_eq!(
                    g.instruction.as_deref(),
                    Some("Choose the correct letter, A, B, C or D.")
                );
            }
            other => panic!("expected MultipleChoice, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_group_without_questions_field() {
        let json = r#"{"questionType": "short-answer"}"#;
        let group: QuestionGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.question_count(), 0);
    }

    #[test]
    fn test_non_sequence_question_list_contributes_zero() {
        for bad in [
            r#"{"questionType": "short-answer", "questions": null}"#,
            r#"{"questionType": "short-answer", "questions": "tbd"}"#,
            r#"{"questionType": "short-answer", "questions": 7}"#,
        ] {
            let group: QuestionGroup = serde_json::from_str(bad).unwrap();
            assert_eq!(group.question_count(), 0, "payload: {bad}");
        }
    }

    #[test]
    fn test_unknown_tag_becomes_fallback_not_error() {
        let json = r#"{
            "questionType": "drag-and-drop",
            "dropZones": ["a", "b"],
            "questions": [{"prompt": "Drag the label"}]
        }"#;

        let group: QuestionGroup = serde_json::from_str(json).unwrap();
        assert_eq!(
            group.question_type(),
            QuestionType::Other("drag-and-drop".to_string())
        );
        assert_eq!(group.question_count(), 1);

        match &group {
            QuestionGroup::Unrecognized { tag, payload } => {
                assert_eq!(tag, "drag-and-drop");
                assert!(payload.extra.contains_key("dropZones"));
            }
            other => panic!("expected Unrecognized, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_tag_is_an_error() {
        let json = r#"{"questions": []}"#;
        let result: Result<QuestionGroup, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_restores_wire_shape() {
        let group = QuestionGroup::MatchingHeadings(MatchingGroup {
            questions: vec![QuestionItem::new("Paragraph A")],
            options: vec!["i".to_string(), "ii".to_string()],
            instruction: None,
        });

        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["questionType"], "matching-headings");
        assert_eq!(value["options"][1], "ii");
        assert_eq!(value["questions"][0]["prompt"], "Paragraph A");
    }

    #[test]
    fn test_fallback_round_trips_tag_and_payload() {
        let json = r#"{
            "questionType": "word-cloud",
            "cloudSize": 40,
            "questions": [{"prompt": "Pick words"}]
        }"#;

        let group: QuestionGroup = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&group).unwrap();

        assert_eq!(value["questionType"], "word-cloud");
        assert_eq!(value["cloudSize"], 40);
        assert_eq!(value["questions"][0]["prompt"], "Pick words");
    }

    #[test]
    fn test_round_trip_preserves_equality() {
        let json = r#"{
            "questionType": "summary-completion",
            "text": "Bees navigate by ___ and ___.",
            "wordLimit": 2,
            "questions": [{"prompt": "gap 1"}, {"prompt": "gap 2"}]
        }"#;

        let group: QuestionGroup = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&group).unwrap();
        let again: QuestionGroup = serde_json::from_str(&encoded).unwrap();
        assert_eq!(group, again);
    }
}
