use std::path::{
    Path,
    PathBuf,
};

use rayon::prelude::*;

use super::{
    document::CardDocument,
    models::{
        BatchReport,
        DocumentOutcome,
    },
    utils::{
        display_name,
        find_card_documents,
    },
};
use crate::{
    core::{
        TaggerConfig,
        TaggerError,
    },
    tagging::{
        load_rules,
        RuleSet,
    },
};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub root: PathBuf,
    pub excluded_files: Vec<String>,
    pub dry_run: bool,
}

impl BatchOptions {
    pub fn from_config(config: &TaggerConfig) -> Self {
        Self {
            root: config.data_root.clone(),
            excluded_files: config.excluded_files.clone(),
            dry_run: config.dry_run,
        }
    }

    pub fn with_root(mut self, root: &Path) -> Self {
        self.root = root.to_path_buf();
        self
    }
}

/// Loads, classifies and (unless `dry_run`) rewrites one document. The document is only
/// written when at least one card changed.
pub fn process_document(
    path: &Path,
    rules: &RuleSet,
    dry_run: bool,
) -> Result<Option<DocumentOutcome>, TaggerError> {
    let Some(mut document) = CardDocument::load(path)? else {
        tracing::debug!("{} has no cards, skipping", path.display());
        return Ok(None);
    };

    tracing::debug!("Classifying {} cards in {}", document.card_count(), display_name(path));
    let mut outcome = document.classify_cards(rules);

    if outcome.cards_modified > 0 && !dry_run {
        document.save()?;
        outcome.written = true;
        tracing::info!("Updated {} cards in {}", outcome.cards_modified, display_name(path));
    }

    Ok(Some(outcome))
}

/// Runs `rules` over every card document under `options.root`. Documents are independent, so
/// they are processed in parallel; failures are collected per file and never stop the run.
pub fn run_batch(rules: &RuleSet, options: &BatchOptions) -> Result<BatchReport, TaggerError> {
    if rules.is_empty() {
        return Err(TaggerError::Configuration("No rules loaded".to_string()));
    }

    let files = find_card_documents(&options.root, &options.excluded_files)?;
    tracing::info!(
        "Applying {} {} rules to {} documents under {}",
        rules.len(),
        rules.name,
        files.len(),
        options.root.display()
    );

    let results: Vec<(&PathBuf, Result<Option<DocumentOutcome>, TaggerError>)> = files
        .par_iter()
        .map(|path| (path, process_document(path, rules, options.dry_run)))
        .collect();

    let mut report = BatchReport { files_scanned: files.len(), ..Default::default() };

    for (path, result) in results {
        match result {
            Ok(Some(outcome)) => report.add_document(outcome),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                report.add_skipped(path.clone(), e.to_string());
            }
        }
    }

    Ok(report)
}

/// Taxonomy-driven enrichment over the configured data root.
pub fn enrich_tags(config: &TaggerConfig) -> Result<BatchReport, TaggerError> {
    let keywords = load_rules(&config.taxonomy_path)?;
    let rules = RuleSet::from_keywords(&keywords, &config.match_options())?;
    run_batch(&rules, &BatchOptions::from_config(config))
}

/// Legacy table pass over `target` (a single deck or a tree), defaulting to the data root.
pub fn refactor_tags(
    config: &TaggerConfig,
    target: Option<&Path>,
) -> Result<BatchReport, TaggerError> {
    let rules = RuleSet::legacy(&config.match_options());
    let options = BatchOptions::from_config(config);
    let options = match target {
        Some(path) => options.with_root(path),
        None => options,
    };
    run_batch(&rules, &options)
}
