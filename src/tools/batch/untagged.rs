use super::{
    document::CardDocument,
    models::UntaggedReport,
    runner::BatchOptions,
    utils::{
        display_name,
        find_card_documents,
    },
};
use crate::core::TaggerError;

/// Collects cards that carry no tags, grouped by file name.
pub fn find_untagged(options: &BatchOptions) -> Result<UntaggedReport, TaggerError> {
    let files = find_card_documents(&options.root, &options.excluded_files)?;
    let mut report = UntaggedReport::default();

    for path in files {
        let document = match CardDocument::load(&path) {
            Ok(Some(document)) => document,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!("Error reading {}: {}", display_name(&path), e);
                report.skipped_files.push((path, e.to_string()));
                continue;
            }
        };

        let targets = document.untagged_targets();
        if targets.is_empty() {
            continue;
        }

        report.total += targets.len();
        let name = display_name(&path);
        match report.by_file.iter_mut().find(|(file, _)| *file == name) {
            Some((_, words)) => words.extend(targets),
            None => report.by_file.push((name, targets)),
        }
    }

    Ok(report)
}
