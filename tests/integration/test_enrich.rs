//! Taxonomy-driven enrichment over a deck tree.

use std::fs;

use deck_tagger::{
    tools::batch::enrich_tags,
    TaggerError,
};

use crate::common::{
    config_for,
    create_deck_tree,
    read_json,
    tags_of,
};

#[test]
fn test_enrich_updates_changed_decks_only() {
    let dir = create_deck_tree();
    let root = dir.path();
    let done_before = fs::read_to_string(root.join("spanish").join("done.json")).unwrap();
    let taxonomy_before = fs::read_to_string(root.join("tag_taxonomy.json")).unwrap();

    let report = enrich_tags(&config_for(root)).unwrap();

    // settings, broken, basics and done; the taxonomy itself is excluded.
    assert_eq!(report.files_scanned, 4);
    // pan -> Food, rojo -> Colors + Adjectives, semana -> Time. comer already had Verbs.
    assert_eq!(report.total_modified, 3);
    assert_eq!(report.tag_counts.get("Food"), Some(&1));
    assert_eq!(report.tag_counts.get("Colors"), Some(&1));
    assert_eq!(report.tag_counts.get("Adjectives"), Some(&1));
    assert_eq!(report.tag_counts.get("Time"), Some(&1));
    assert_eq!(report.skipped_files.len(), 1);
    assert!(report.skipped_files[0].0.ends_with("broken.json"));

    let basics = read_json(&root.join("spanish").join("basics.json"));
    assert_eq!(tags_of(&basics, 0), vec!["Food"]);
    assert_eq!(tags_of(&basics, 1), vec!["Adjectives", "Colors", "Rank 40"]);
    assert_eq!(tags_of(&basics, 2), vec!["Verbs"]);
    assert_eq!(tags_of(&basics, 3), vec!["Lesson 2", "Time"]);
    assert_eq!(basics["deckName"], "Basics");
    assert_eq!(basics["cards"][0]["sentenceTarget"], "Quiero pan.");

    let written = fs::read_to_string(root.join("spanish").join("basics.json")).unwrap();
    assert!(written.starts_with("{\n    \"deckName\": \"Basics\",\n    \"cards\": ["));

    assert_eq!(fs::read_to_string(root.join("spanish").join("done.json")).unwrap(), done_before);
    assert_eq!(fs::read_to_string(root.join("tag_taxonomy.json")).unwrap(), taxonomy_before);
}

#[test]
fn test_enrich_second_run_changes_nothing() {
    let dir = create_deck_tree();
    let config = config_for(dir.path());

    enrich_tags(&config).unwrap();
    let basics_path = dir.path().join("spanish").join("basics.json");
    let after_first = fs::read_to_string(&basics_path).unwrap();

    let second = enrich_tags(&config).unwrap();
    assert_eq!(second.total_modified, 0);
    assert!(second.tag_counts.is_empty());
    assert_eq!(fs::read_to_string(&basics_path).unwrap(), after_first);
}

#[test]
fn test_enrich_dry_run_writes_nothing() {
    let dir = create_deck_tree();
    let basics_path = dir.path().join("spanish").join("basics.json");
    let before = fs::read_to_string(&basics_path).unwrap();

    let mut config = config_for(dir.path());
    config.dry_run = true;
    let report = enrich_tags(&config).unwrap();

    assert_eq!(report.total_modified, 3);
    assert!(report.documents.iter().all(|d| !d.written));
    assert_eq!(fs::read_to_string(&basics_path).unwrap(), before);
}

#[test]
fn test_enrich_without_taxonomy_aborts() {
    let dir = create_deck_tree();
    let mut config = config_for(dir.path());
    config.taxonomy_path = dir.path().join("missing_taxonomy.json");

    let err = enrich_tags(&config).unwrap_err();
    assert!(matches!(err, TaggerError::Configuration(_)));
}

#[test]
fn test_enrich_with_empty_taxonomy_aborts() {
    let dir = create_deck_tree();
    fs::write(dir.path().join("tag_taxonomy.json"), r#"{ "Notes": { "description": "" } }"#).unwrap();

    let err = enrich_tags(&config_for(dir.path())).unwrap_err();
    assert!(matches!(err, TaggerError::Configuration(_)));
}
