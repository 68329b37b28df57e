//! Legacy table pass.

use deck_tagger::tools::batch::refactor_tags;
use serde_json::json;

use crate::common::{
    config_for,
    read_json,
    tags_of,
    write_json,
};

#[test]
fn test_refactor_single_deck_strips_rank_tags() {
    let dir = tempfile::tempdir().unwrap();
    let deck = dir.path().join("refold_es1k.json");
    write_json(
        &deck,
        &json!({
            "cards": [
                { "wordTarget": "agua", "wordNative": "water", "tags": ["Rank 1", "Frequency"] },
                { "wordTarget": "correr", "wordNative": "to run", "tags": ["Rank 2"] },
                { "wordTarget": "xyz", "wordNative": "unknown", "tags": ["Custom"] },
                { "wordTarget": "azul", "wordNative": "blue", "tags": [] }
            ]
        }),
    );

    let report = refactor_tags(&config_for(dir.path()), Some(&deck)).unwrap();

    assert_eq!(report.total_modified, 3);
    assert_eq!(report.tag_distribution(), vec![("Adjectives", 1), ("Food", 1), ("Nature", 1), ("Verbs", 1)]);

    let document = read_json(&deck);
    assert_eq!(tags_of(&document, 0), vec!["Food", "Frequency", "Nature"]);
    assert_eq!(tags_of(&document, 1), vec!["Verbs"]);
    assert_eq!(tags_of(&document, 2), vec!["Custom"]);
    // The legacy table has no color implication and no Colors category.
    assert_eq!(tags_of(&document, 3), vec!["Adjectives"]);
}
