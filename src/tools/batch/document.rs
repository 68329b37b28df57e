use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use super::models::DocumentOutcome;
use crate::{
    core::{
        models::TAGS_KEY,
        Card,
        TaggerError,
    },
    persistence::{
        read_json,
        write_json_atomic,
    },
    tagging::{
        classify,
        RuleSet,
    },
};

pub const CARDS_KEY: &str = "cards";

/// A card collection held as raw JSON so fields the tagger does not own survive untouched,
/// key order included.
#[derive(Debug, Clone)]
pub struct CardDocument {
    path: PathBuf,
    root: Value,
}

impl CardDocument {
    /// Returns `Ok(None)` for JSON documents that are not card collections.
    pub fn load(path: &Path) -> Result<Option<Self>, TaggerError> {
        let root: Value = read_json(path).map_err(|e| TaggerError::document(path, e))?;

        match root.get(CARDS_KEY) {
            None => return Ok(None),
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(TaggerError::document(path, "expected `cards` to be an array"));
            }
        }

        Ok(Some(CardDocument { path: path.to_path_buf(), root }))
    }

    pub fn from_value(path: impl Into<PathBuf>, root: Value) -> Self {
        CardDocument { path: path.into(), root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    fn cards(&self) -> &[Value] {
        self.root.get(CARDS_KEY).and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn card_count(&self) -> usize {
        self.cards().len()
    }

    /// Classifies every card and rewrites the tag list of each one whose set changed. Records
    /// that are not objects, or whose tags are malformed, are left as they are.
    pub fn classify_cards(&mut self, rules: &RuleSet) -> DocumentOutcome {
        let mut outcome = DocumentOutcome::new(&self.path);

        let Some(cards) = self.root.get_mut(CARDS_KEY).and_then(Value::as_array_mut) else {
            return outcome;
        };

        for (idx, record) in cards.iter_mut().enumerate() {
            let Some(object) = record.as_object_mut() else {
                tracing::warn!("{}: card #{} is not an object, skipping", self.path.display(), idx);
                continue;
            };

            let card = match Card::from_object(object) {
                Ok(card) => card,
                Err(e) => {
                    tracing::warn!("{}: card #{} left untouched: {}", self.path.display(), idx, e);
                    continue;
                }
            };

            let classification = classify(&card, rules);
            if classification.changed {
                let updated = Card { tags: classification.tags, ..card };
                updated.write_tags(object);
                outcome.record(&classification.added);
            }
        }

        outcome
    }

    /// Target words of cards that carry no tags at all.
    pub fn untagged_targets(&self) -> Vec<String> {
        self.cards()
            .iter()
            .filter_map(Value::as_object)
            .filter(|object| match object.get(TAGS_KEY) {
                None | Some(Value::Null) => true,
                Some(Value::Array(items)) => items.is_empty(),
                Some(_) => false,
            })
            .map(|object| {
                Card::from_object(object)
                    .ok()
                    .map(|card| card.word_target)
                    .filter(|target| !target.is_empty())
                    .unwrap_or_else(|| "Unknown".to_string())
            })
            .collect()
    }

    pub fn save(&self) -> Result<(), TaggerError> {
        write_json_atomic(&self.path, &self.root).map_err(|e| TaggerError::document(&self.path, e))
    }
}
