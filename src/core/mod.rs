pub mod aggregate;
pub mod engine;
pub mod report;
pub mod salary;

pub use crate::domain::model::{FetchedListings, LanguageSummary, Statistics};
pub use crate::domain::ports::Provider;
pub use crate::utils::error::Result;
