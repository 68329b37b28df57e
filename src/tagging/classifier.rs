use std::collections::BTreeSet;

use super::rule_matcher::{
    CardText,
    RuleSet,
};
use crate::core::Card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub tags: BTreeSet<String>,  // The card's full tag set after merging
    pub added: Vec<String>,      // Tags the card did not carry before, sorted
    pub changed: bool,           // Set equality against the original tags
}

/// Evaluates every rule against the card and merges the hits into its existing tags.
/// Pure: the card is not touched.
pub fn classify(card: &Card, rules: &RuleSet) -> Classification {
    let text = CardText::from(card);
    let policy = rules.policy();

    let mut tags: BTreeSet<String> =
        card.tags.iter().filter(|tag| !policy.strips(tag)).cloned().collect();

    for rule in rules.rules() {
        if !tags.contains(&rule.tag) && rule.fires(&text) {
            tags.insert(rule.tag.clone());
        }
    }

    // Implications may chain, so repeat until a pass adds nothing.
    loop {
        let mut grew = false;
        for implied in &policy.implied_tags {
            if tags.contains(&implied.when) && !tags.contains(&implied.add) {
                tags.insert(implied.add.clone());
                grew = true;
            }
        }
        if !grew {
            break;
        }
    }

    let added = tags.difference(&card.tags).cloned().collect();
    let changed = tags != card.tags;

    Classification { tags, added, changed }
}

/// Classifies the card and replaces its tags when the set changed.
pub fn classify_card(card: &mut Card, rules: &RuleSet) -> Classification {
    let classification = classify(card, rules);
    if classification.changed {
        card.tags = classification.tags.clone();
    }
    classification
}
