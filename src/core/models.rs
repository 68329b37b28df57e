use std::collections::BTreeSet;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

use super::TaggerError;

pub const TAGS_KEY: &str = "tags";

// Older decks spell the word fields `targetWord` / `nativeTranslation`.
const TARGET_KEYS: &[&str] = &["wordTarget", "targetWord"];
const NATIVE_KEYS: &[&str] = &["wordNative", "nativeTranslation"];

/// The part of a flashcard the tagger reads and writes. Every other field of the stored
/// record stays in the document untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub word_target: String,             // The word being learned
    pub word_native: String,             // Gloss, possibly several senses split by `,` or `;`
    pub tags: BTreeSet<String>,          // Unique and always iterated in sorted order
}

impl Card {
    pub fn new(word_target: &str, word_native: &str, tags: &[&str]) -> Self {
        Card {
            word_target: word_target.to_string(),
            word_native: word_native.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Reads a card out of a stored record. Missing or non-string word fields become empty
    /// strings; a `tags` value that is not a list of strings is refused so it is never
    /// overwritten.
    pub fn from_object(object: &Map<String, Value>) -> Result<Self, TaggerError> {
        Ok(Card {
            word_target: first_string(object, TARGET_KEYS),
            word_native: first_string(object, NATIVE_KEYS),
            tags: read_tags(object)?,
        })
    }

    /// Replaces the record's tag list with this card's tags in sorted order.
    pub fn write_tags(&self, object: &mut Map<String, Value>) {
        let tags = self.tags.iter().cloned().map(Value::String).collect();
        object.insert(TAGS_KEY.to_string(), Value::Array(tags));
    }

    pub fn tag_list(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }
}

fn first_string(object: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn read_tags(object: &Map<String, Value>) -> Result<BTreeSet<String>, TaggerError> {
    match object.get(TAGS_KEY) {
        None | Some(Value::Null) => Ok(BTreeSet::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    TaggerError::Custom(format!("tag {} is not a string", item))
                })
            })
            .collect(),
        Some(other) => Err(TaggerError::Custom(format!("`tags` must be a list, found {}", other))),
    }
}

/// "If a card carries `when`, it must also carry `add`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpliedTag {
    pub when: String,
    pub add: String,
}

impl ImpliedTag {
    pub fn new(when: &str, add: &str) -> Self {
        ImpliedTag { when: when.to_string(), add: add.to_string() }
    }
}
