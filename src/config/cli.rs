use crate::config::toml_config::SurveyConfig;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderChoice {
    All,
    Headhunter,
    Superjob,
}

impl ProviderChoice {
    pub fn includes_headhunter(self) -> bool {
        matches!(self, ProviderChoice::All | ProviderChoice::Headhunter)
    }

    pub fn includes_superjob(self) -> bool {
        matches!(self, ProviderChoice::All | ProviderChoice::Superjob)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Compare vacancy counts and average salaries per programming language")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// SuperJob application secret key
    #[arg(long, env = "SUPERJOB_KEY", hide_env_values = true)]
    pub superjob_key: Option<String>,

    /// Comma-separated languages, replacing the configured list
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Only count vacancies published within this many days
    #[arg(long)]
    pub period: Option<u32>,

    /// Which job boards to query
    #[arg(long, value_enum, default_value_t = ProviderChoice::All)]
    pub provider: ProviderChoice,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Configuration file (or defaults) with command-line overrides applied.
    pub fn survey_config(&self) -> Result<SurveyConfig> {
        let mut config = match &self.config {
            Some(path) => SurveyConfig::from_file(path)?,
            None => SurveyConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut SurveyConfig) {
        if !self.languages.is_empty() {
            config.survey.languages = self
                .languages
                .iter()
                .map(|language| language.trim().to_string())
                .collect();
        }
        if let Some(period) = self.period {
            config.survey.period_days = period;
        }
        if let Some(key) = &self.superjob_key {
            config.superjob.api_key = Some(key.clone());
        }
    }
}
