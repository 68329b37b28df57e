pub mod config;
pub mod errors;
pub mod models;

pub use config::TaggerConfig;
pub use errors::TaggerError;
pub use models::{ Card, ImpliedTag };
