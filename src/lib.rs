pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{HeadHunter, SuperJob};
pub use config::{CliConfig, SurveyConfig};
pub use crate::core::{engine::SurveyEngine, report::render};
pub use domain::{model::Statistics, ports::Provider};
pub use utils::error::{Result, SurveyError};
