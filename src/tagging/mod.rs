pub mod classifier;

pub mod legacy_rules;

pub mod rule_matcher;

pub mod taxonomy;

pub use classifier::{ classify, classify_card, Classification };
pub use rule_matcher::{ CardText, MatchOptions, Matcher, MergePolicy, Rule, RuleSet };
pub use taxonomy::{ load_rules, Taxonomy };
