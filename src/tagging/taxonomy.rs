use std::{
    collections::BTreeMap,
    fs,
    path::Path,
    str::FromStr,
};

use serde::Deserialize;
use serde_json::{
    Map,
    Value,
};

use crate::core::TaggerError;

#[derive(Debug, Clone, Deserialize)]
struct DomainData {
    #[serde(default)]
    description: String,
    tags: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
struct TagData {
    #[serde(default)]
    description: String,
    words: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagDefinition {
    pub name: String,
    pub description: String,
    pub words: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub name: String,
    pub description: String,
    pub tags: Vec<TagDefinition>,
}

/// Rule definitions grouped by domain, kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Taxonomy {
    pub domains: Vec<Domain>,
}

impl Taxonomy {
    pub fn from_file(path: &Path) -> Result<Self, TaggerError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TaggerError::Configuration(format!(
                "Taxonomy file not found at {}: {}",
                path.display(),
                e
            ))
        })?;
        content.parse::<Taxonomy>().map_err(|e| match e {
            TaggerError::Configuration(message) => {
                TaggerError::Configuration(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Flattens to `tag -> keywords`. A tag defined under several domains gets the
    /// concatenation of its lists in document order; tags without `words` are skipped.
    pub fn flatten(&self) -> BTreeMap<String, Vec<String>> {
        let mut rules: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for domain in &self.domains {
            for tag in &domain.tags {
                if let Some(words) = &tag.words {
                    rules.entry(tag.name.clone()).or_default().extend(words.iter().cloned());
                }
            }
        }

        rules
    }
}

impl FromStr for Taxonomy {
    type Err = TaggerError;

    fn from_str(content: &str) -> Result<Self, TaggerError> {
        let root: Map<String, Value> = serde_json::from_str(content)
            .map_err(|e| TaggerError::Configuration(format!("Invalid taxonomy: {}", e)))?;

        let mut domains = Vec::with_capacity(root.len());
        for (domain_name, domain_value) in root {
            if !domain_value.is_object() {
                tracing::warn!("Ignoring taxonomy entry '{}': not a domain object", domain_name);
                continue;
            }

            let data: DomainData = serde_json::from_value(domain_value).map_err(|e| {
                TaggerError::Configuration(format!("Invalid domain '{}': {}", domain_name, e))
            })?;

            let mut tags = Vec::new();
            // Domains without a tag table contribute nothing.
            for (tag_name, tag_value) in data.tags.unwrap_or_default() {
                let tag: TagData = serde_json::from_value(tag_value).map_err(|e| {
                    TaggerError::Configuration(format!(
                        "Invalid tag '{}' in domain '{}': {}",
                        tag_name, domain_name, e
                    ))
                })?;
                tags.push(TagDefinition {
                    name: tag_name,
                    description: tag.description,
                    words: tag.words,
                });
            }

            domains.push(Domain { name: domain_name, description: data.description, tags });
        }

        Ok(Taxonomy { domains })
    }
}

/// Reads a taxonomy document and returns its flattened keyword rules.
pub fn load_rules(path: &Path) -> Result<BTreeMap<String, Vec<String>>, TaggerError> {
    let taxonomy = Taxonomy::from_file(path)?;
    let rules = taxonomy.flatten();
    tracing::info!(
        "Loaded {} categories from {} domains in {}",
        rules.len(),
        taxonomy.domains.len(),
        path.display()
    );
    Ok(rules)
}
