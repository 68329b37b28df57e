pub mod core;
pub mod persistence;
pub mod tagging;
pub mod tools;

pub use crate::core::{ Card, TaggerConfig, TaggerError };
pub use tagging::{ classify, classify_card, Classification, RuleSet, Taxonomy };
