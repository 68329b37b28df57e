use std::{
    collections::BTreeMap,
    path::{
        Path,
        PathBuf,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    pub path: PathBuf,
    pub cards_modified: usize,
    pub tag_counts: BTreeMap<String, usize>, // tag -> cards that newly received it
    pub written: bool,
}

impl DocumentOutcome {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            cards_modified: 0,
            tag_counts: BTreeMap::new(),
            written: false,
        }
    }

    pub fn record(&mut self, added: &[String]) {
        self.cards_modified += 1;
        for tag in added {
            *self.tag_counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub documents: Vec<DocumentOutcome>,
    pub skipped_files: Vec<(PathBuf, String)>,
    pub tag_counts: BTreeMap<String, usize>,
    pub total_modified: usize,
    pub files_scanned: usize,
}

impl BatchReport {
    pub fn add_document(&mut self, outcome: DocumentOutcome) {
        self.total_modified += outcome.cards_modified;
        for (tag, count) in &outcome.tag_counts {
            *self.tag_counts.entry(tag.clone()).or_insert(0) += count;
        }
        self.documents.push(outcome);
    }

    pub fn add_skipped(&mut self, path: PathBuf, reason: String) {
        self.skipped_files.push((path, reason));
    }

    /// Newly added tags, most frequent first, ties by name.
    pub fn tag_distribution(&self) -> Vec<(&str, usize)> {
        let mut distribution: Vec<(&str, usize)> =
            self.tag_counts.iter().map(|(tag, count)| (tag.as_str(), *count)).collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        distribution
    }

    pub fn updated_documents(&self) -> impl Iterator<Item = &DocumentOutcome> {
        self.documents.iter().filter(|d| d.cards_modified > 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UntaggedReport {
    pub total: usize,
    pub by_file: Vec<(String, Vec<String>)>, // file name -> target words of untagged cards
    pub skipped_files: Vec<(PathBuf, String)>,
}

impl UntaggedReport {
    pub const EXAMPLE_LIMIT: usize = 5;

    /// "a, b, c, d, e, ..." style preview of a file's untagged words.
    pub fn examples(words: &[String]) -> String {
        let mut preview = words
            .iter()
            .take(Self::EXAMPLE_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if words.len() > Self::EXAMPLE_LIMIT {
            preview.push_str(", ...");
        }
        preview
    }
}
