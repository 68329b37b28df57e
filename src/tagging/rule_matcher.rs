use std::collections::{
    BTreeMap,
    HashSet,
};

use regex::Regex;

use crate::core::{
    Card,
    ImpliedTag,
    TaggerError,
};

/**
 * Rules are plain data: a tag plus the matchers that can fire it. Every way a rule can match
 * is a variant of `Matcher`, so the matching step stays a closed switch.
 */

pub const DEFAULT_INFINITIVE_MARKER: &str = "to ";
pub const DEFAULT_VERB_TAG: &str = "Verbs";
pub const DEFAULT_RANK_PREFIX: &str = "Rank";

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    pub infinitive_marker: String,
    pub verb_tag: String,
    pub rank_prefix: String,
    pub implied_tags: Vec<ImpliedTag>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            infinitive_marker: DEFAULT_INFINITIVE_MARKER.to_string(),
            verb_tag: DEFAULT_VERB_TAG.to_string(),
            rank_prefix: DEFAULT_RANK_PREFIX.to_string(),
            implied_tags: vec![ImpliedTag::new("Colors", "Adjectives")],
        }
    }
}

/// Lower-cased, trimmed views of the two card fields rules look at.
#[derive(Debug, Clone)]
pub struct CardText {
    pub gloss: String,
    pub target: String,
}

impl CardText {
    pub fn new(word_target: &str, word_native: &str) -> Self {
        CardText { gloss: normalize(word_native), target: normalize(word_target) }
    }
}

impl From<&Card> for CardText {
    fn from(card: &Card) -> Self {
        CardText::new(&card.word_target, &card.word_native)
    }
}

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub enum Matcher {
    /// Keyword bounded by word edges on both sides, so `mesa` hits "la mesa" but not "mesada".
    WordBoundary { keyword: String, pattern: Regex },
    /// Punctuation-bearing token such as `(adj)`, matched anywhere.
    Substring(String),
    /// Gloss starts with the marker. With `multi_sense`, a later sense introduced by `, ` or
    /// `; ` also counts ("to eat, to dine").
    InfinitiveMarker { marker: String, multi_sense: bool },
    /// Exact membership of the normalized target word.
    TargetIn(HashSet<String>),
}

impl Matcher {
    /// Picks the strategy for one taxonomy keyword. Blank keywords yield no matcher.
    pub fn from_keyword(keyword: &str) -> Result<Option<Self>, TaggerError> {
        let keyword = keyword.to_lowercase();
        if keyword.trim().is_empty() {
            return Ok(None);
        }

        if is_symbol_keyword(&keyword) {
            return Ok(Some(Matcher::Substring(keyword)));
        }

        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&keyword)))?;
        Ok(Some(Matcher::WordBoundary { keyword, pattern }))
    }

    pub fn infinitive(marker: &str, multi_sense: bool) -> Self {
        Matcher::InfinitiveMarker { marker: marker.to_lowercase(), multi_sense }
    }

    pub fn target_in<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Matcher::TargetIn(words.into_iter().map(normalize).collect())
    }

    /// Keyword matchers try the gloss and then the target word; the infinitive marker only
    /// reads the gloss and `TargetIn` only the target.
    pub fn matches(&self, text: &CardText) -> bool {
        match self {
            Matcher::WordBoundary { pattern, .. } => {
                pattern.is_match(&text.gloss) || pattern.is_match(&text.target)
            }
            Matcher::Substring(token) => text.gloss.contains(token) || text.target.contains(token),
            Matcher::InfinitiveMarker { marker, multi_sense } => {
                text.gloss.starts_with(marker.as_str())
                    || (*multi_sense
                        && (text.gloss.contains(&format!(", {}", marker))
                            || text.gloss.contains(&format!("; {}", marker))))
            }
            Matcher::TargetIn(words) => words.contains(&text.target),
        }
    }
}

/// Not wholly alphanumeric, longer than one character and free of spaces: `(adj)`, `adj.`.
fn is_symbol_keyword(keyword: &str) -> bool {
    !keyword.chars().all(char::is_alphanumeric)
        && keyword.chars().count() > 1
        && !keyword.contains(' ')
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub tag: String,
    pub matchers: Vec<Matcher>,
}

impl Rule {
    /// Matchers are tried in order and the first hit wins.
    pub fn fires(&self, text: &CardText) -> bool {
        self.matchers.iter().any(|matcher| matcher.matches(text))
    }
}

/// What happens to a card's tags around rule evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergePolicy {
    /// Tags starting with this prefix are dropped before new tags are added.
    pub strip_prefix: Option<String>,
    /// Applied after rule evaluation until nothing more is added.
    pub implied_tags: Vec<ImpliedTag>,
}

impl MergePolicy {
    pub fn strips(&self, tag: &str) -> bool {
        self.strip_prefix.as_deref().is_some_and(|prefix| tag.starts_with(prefix))
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: &'static str,
    rules: Vec<Rule>,
    policy: MergePolicy,
}

impl RuleSet {
    pub fn new(name: &'static str, rules: Vec<Rule>, policy: MergePolicy) -> Self {
        RuleSet { name, rules, policy }
    }

    /// Builds the taxonomy-driven rule set from a flattened `tag -> keywords` mapping. The
    /// verb tag's marker keyword becomes the infinitive heuristic; every other keyword is a
    /// substring or word-boundary matcher. Implied tags apply, rank tags are kept.
    pub fn from_keywords(
        keywords: &BTreeMap<String, Vec<String>>,
        options: &MatchOptions,
    ) -> Result<Self, TaggerError> {
        let mut rules = Vec::with_capacity(keywords.len());

        for (tag, words) in keywords {
            let mut matchers = Vec::with_capacity(words.len());
            for word in words {
                if *tag == options.verb_tag && *word == options.infinitive_marker {
                    matchers.push(Matcher::infinitive(&options.infinitive_marker, true));
                } else if let Some(matcher) = Matcher::from_keyword(word)? {
                    matchers.push(matcher);
                }
            }
            rules.push(Rule { tag: tag.clone(), matchers });
        }

        let policy =
            MergePolicy { strip_prefix: None, implied_tags: options.implied_tags.clone() };
        Ok(RuleSet::new("taxonomy", rules, policy))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn policy(&self) -> &MergePolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
