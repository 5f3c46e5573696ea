use crate::models::Block;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload's block list was not a sequence. This is a caller bug,
    /// kept distinct from an empty dataset.
    #[error("expected a sequence of blocks, got {found}")]
    NotASequence { found: &'static str },
    #[error("malformed block payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Decode the block list of an already-fetched listing payload.
///
/// Accepts exactly a JSON array; anything else is the contract violation
/// [`DecodeError::NotASequence`]. Within the array, absent `groups` or
/// `questions` fields decode to empty collections and unrecognized
/// `questionType` tags land in the fallback group variant, so partial
/// content degrades to zero counts instead of failing the view.
pub fn blocks_from_value<C>(value: Value) -> Result<Vec<Block<C>>, DecodeError>
where
    C: DeserializeOwned,
{
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DecodeError::NotASequence {
                found: json_kind(&other),
            });
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(DecodeError::from))
        .collect()
}

/// [`blocks_from_value`] over raw JSON text.
pub fn blocks_from_str<C>(payload: &str) -> Result<Vec<Block<C>>, DecodeError>
where
    C: DeserializeOwned,
{
    let value: Value = serde_json::from_str(payload)?;
    blocks_from_value(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
