use std::path::{
    Path,
    PathBuf,
};

use crate::core::TaggerError;

pub const DOCUMENT_EXTENSION: &str = "json";

fn is_candidate(path: &Path, excluded_files: &[String]) -> bool {
    let has_extension =
        path.extension().and_then(|e| e.to_str()).is_some_and(|ext| ext == DOCUMENT_EXTENSION);
    let excluded = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| excluded_files.iter().any(|e| e == name));

    has_extension && !excluded
}

fn collect_recursive(dir: &Path, excluded_files: &[String], files: &mut Vec<PathBuf>) {
    match std::fs::read_dir(dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    collect_recursive(&path, excluded_files, files);
                } else if path.is_file() && is_candidate(&path, excluded_files) {
                    files.push(path);
                }
            }
        }
        Err(e) => tracing::warn!("Cannot read directory {}: {}", dir.display(), e),
    }
}

/// Lists the `.json` documents under `root`, minus excluded file names, sorted by path. A
/// file given as `root` is returned on its own, exclusions aside.
pub fn find_card_documents(
    root: &Path,
    excluded_files: &[String],
) -> Result<Vec<PathBuf>, TaggerError> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    if !root.is_dir() {
        return Err(TaggerError::Configuration(format!(
            "Data root not found: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    collect_recursive(root, excluded_files, &mut files);
    files.sort();
    Ok(files)
}

pub fn display_name(path: &Path) -> String {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("Unknown File").to_string()
}
