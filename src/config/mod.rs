pub mod cli;
pub mod toml_config;

pub use cli::{CliConfig, ProviderChoice};
pub use toml_config::{HeadHunterConfig, SuperJobConfig, SurveyConfig};
