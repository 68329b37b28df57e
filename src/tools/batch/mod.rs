pub mod document;
pub mod models;
pub mod runner;
pub mod untagged;
pub mod utils;

pub use document::CardDocument;
pub use models::{
    BatchReport,
    DocumentOutcome,
    UntaggedReport,
};
pub use runner::{
    enrich_tags,
    process_document,
    refactor_tags,
    run_batch,
    BatchOptions,
};
pub use untagged::find_untagged;
pub use utils::find_card_documents;
