use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::{
    ImpliedTag,
    TaggerError,
};
use crate::{
    persistence::{
        get_config_file_path,
        read_json,
    },
    tagging::MatchOptions,
};

pub const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_DATA_ROOT: &str = "LearnCI/Resources/Data";
pub const DEFAULT_TAXONOMY_FILE: &str = "tag_taxonomy.json";
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["tag_taxonomy.json", "lang_taxonomy.json"];

/// Settings for a tagging run. Every field has a default, so a config file only needs the
/// keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    pub data_root: PathBuf,
    pub taxonomy_path: PathBuf,
    pub excluded_files: Vec<String>,
    pub infinitive_marker: String,
    pub verb_tag: String,
    pub rank_prefix: String,
    pub implied_tags: Vec<ImpliedTag>,
    pub dry_run: bool,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        let options = MatchOptions::default();
        Self {
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            taxonomy_path: Path::new(DEFAULT_DATA_ROOT).join(DEFAULT_TAXONOMY_FILE),
            excluded_files: DEFAULT_EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
            infinitive_marker: options.infinitive_marker,
            verb_tag: options.verb_tag,
            rank_prefix: options.rank_prefix,
            implied_tags: options.implied_tags,
            dry_run: false,
        }
    }
}

impl TaggerConfig {
    pub fn from_file(path: &Path) -> Result<Self, TaggerError> {
        let config: TaggerConfig = read_json(path).map_err(|e| {
            TaggerError::Configuration(format!("Failed to load config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Uses `explicit` when given, otherwise the per-user config file if one exists,
    /// otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, TaggerError> {
        if let Some(path) = explicit {
            tracing::info!("Loading config from: {}", path.display());
            return Self::from_file(path);
        }

        match get_config_file_path(CONFIG_FILE) {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            infinitive_marker: self.infinitive_marker.clone(),
            verb_tag: self.verb_tag.clone(),
            rank_prefix: self.rank_prefix.clone(),
            implied_tags: self.implied_tags.clone(),
        }
    }

    fn validate(&self) -> Result<(), TaggerError> {
        if self.infinitive_marker.is_empty() {
            return Err(TaggerError::Configuration("infinitive_marker must not be empty".into()));
        }
        if self.verb_tag.trim().is_empty() {
            return Err(TaggerError::Configuration("verb_tag must not be empty".into()));
        }
        if self.rank_prefix.is_empty() {
            // An empty prefix would strip every tag in the legacy pass.
            return Err(TaggerError::Configuration("rank_prefix must not be empty".into()));
        }
        Ok(())
    }
}
