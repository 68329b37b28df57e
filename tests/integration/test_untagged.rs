//! Untagged card report.

use deck_tagger::tools::batch::{
    find_untagged,
    BatchOptions,
    UntaggedReport,
};
use serde_json::json;

use crate::common::{
    config_for,
    create_deck_tree,
    write_json,
};

#[test]
fn test_untagged_report_groups_by_file() {
    let dir = create_deck_tree();
    let words: Vec<String> = (1..=7).map(|i| format!("palabra{}", i)).collect();
    let cards: Vec<_> = words.iter().map(|w| json!({ "wordTarget": w, "tags": [] })).collect();
    write_json(&dir.path().join("many.json"), &json!({ "cards": cards }));

    let report = find_untagged(&BatchOptions::from_config(&config_for(dir.path()))).unwrap();

    // basics: pan; done: hola; many: seven cards.
    assert_eq!(report.total, 9);
    assert_eq!(report.skipped_files.len(), 1);

    let many = report.by_file.iter().find(|(file, _)| file == "many.json").unwrap();
    assert_eq!(
        UntaggedReport::examples(&many.1),
        "palabra1, palabra2, palabra3, palabra4, palabra5, ..."
    );
    let basics = report.by_file.iter().find(|(file, _)| file == "basics.json").unwrap();
    assert_eq!(basics.1, vec!["pan"]);
}
