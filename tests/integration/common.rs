//! Shared fixtures for the integration tests.

use std::{
    fs,
    path::Path,
};

use deck_tagger::TaggerConfig;
use serde_json::{
    json,
    Value,
};
use tempfile::TempDir;

pub const TAXONOMY: &str = r#"{
    "Grammar Topics": {
        "description": "Core grammatical concepts.",
        "tags": {
            "Verbs": { "description": "Action words.", "words": ["to "] },
            "Adjectives": { "description": "Descriptive words.", "words": ["(adj)"] }
        }
    },
    "Basic Topics": {
        "description": "Everyday vocabulary.",
        "tags": {
            "Food": { "description": "Meals.", "words": ["bread", "pan"] },
            "Colors": { "description": "Colors.", "words": ["red"] },
            "Time": { "description": "Clock words.", "words": ["hour"] }
        }
    },
    "Time & Calendar": {
        "description": "Dates.",
        "tags": {
            "Time": { "description": "Calendar words.", "words": ["week"] }
        }
    }
}"#;

pub fn write_json(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

pub fn tags_of(document: &Value, index: usize) -> Vec<String> {
    document["cards"][index]["tags"]
        .as_array()
        .map(|tags| tags.iter().filter_map(|t| t.as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}

/// A deck tree with one taxonomy, two card decks, a settings document and a broken file.
pub fn create_deck_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("tag_taxonomy.json"), TAXONOMY).unwrap();
    write_json(&root.join("settings.json"), &json!({ "theme": "dark" }));
    fs::write(root.join("broken.json"), "{ \"cards\": [ {").unwrap();

    write_json(
        &root.join("spanish").join("basics.json"),
        &json!({
            "deckName": "Basics",
            "cards": [
                { "id": "b1", "wordTarget": "pan", "wordNative": "bread", "sentenceTarget": "Quiero pan.", "tags": [] },
                { "id": "b2", "wordTarget": "rojo", "wordNative": "red", "tags": ["Rank 40"] },
                { "id": "b3", "wordTarget": "comer", "wordNative": "to eat, to dine", "tags": ["Verbs"] },
                { "id": "b4", "wordTarget": "semana", "wordNative": "week", "tags": ["Lesson 2"] }
            ]
        }),
    );

    write_json(
        &root.join("spanish").join("done.json"),
        &json!({
            "cards": [
                { "id": "d1", "wordTarget": "hora", "wordNative": "hour", "tags": ["Time"] },
                { "id": "d2", "wordTarget": "hola", "wordNative": "hello", "tags": [] }
            ]
        }),
    );

    dir
}

pub fn config_for(root: &Path) -> TaggerConfig {
    TaggerConfig {
        data_root: root.to_path_buf(),
        taxonomy_path: root.join("tag_taxonomy.json"),
        ..TaggerConfig::default()
    }
}
