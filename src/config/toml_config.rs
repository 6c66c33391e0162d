use crate::domain::model::VacancyTemplate;
use crate::utils::error::{Result, SurveyError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_template,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub survey: SurveySection,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySection {
    pub languages: Vec<String>,
    pub vacancy_template: String,
    pub period_days: u32,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for SurveySection {
    fn default() -> Self {
        Self {
            languages: [
                "C++", "C", "C#", "Python", "Java", "JavaScript", "Ruby", "PHP", "Go", "Scala",
                "Swift", "R", "Kotlin", "1С",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            vacancy_template: "программист {}".to_string(),
            period_days: 30,
            timeout_seconds: 30,
            user_agent: concat!("vacancy-stats/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub title: String,
    pub endpoint: String,
    pub area: u32,
    pub currency: String,
    pub threshold: usize,
    pub per_page: u32,
    /// The API refuses to page past 2000 results.
    pub max_pages: u32,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            title: "HeadHunter Moscow".to_string(),
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            area: 1,
            currency: "RUR".to_string(),
            threshold: 100,
            per_page: 100,
            max_pages: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub title: String,
    pub endpoint: String,
    pub town: u32,
    /// "Development, programming" catalogue.
    pub catalogues: String,
    pub currency: String,
    pub threshold: usize,
    pub count: u32,
    pub api_key: Option<String>,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            title: "SuperJob Moscow".to_string(),
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            town: 4,
            catalogues: "48".to_string(),
            currency: "rub".to_string(),
            threshold: 0,
            count: 100,
            api_key: None,
        }
    }
}

impl SuperJobConfig {
    /// The key, ignoring blanks and `${VAR}` placeholders left unresolved.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.starts_with("${"))
    }
}

impl SurveyConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SurveyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SurveyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders, leaving unknown variables as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SurveyError::ConfigError {
            message: format!("env placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn template(&self) -> VacancyTemplate {
        VacancyTemplate::new(self.survey.vacancy_template.clone())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.survey.languages.is_empty() {
            return Err(SurveyError::ConfigValidationError {
                field: "survey.languages".to_string(),
                message: "at least one language is required".to_string(),
            });
        }
        for language in &self.survey.languages {
            validate_non_empty_string("survey.languages", language)?;
        }
        validate_template("survey.vacancy_template", &self.survey.vacancy_template)?;
        validate_range("survey.period_days", self.survey.period_days, 1, 30)?;
        validate_positive_number("survey.timeout_seconds", self.survey.timeout_seconds, 1)?;
        validate_non_empty_string("survey.user_agent", &self.survey.user_agent)?;

        validate_url("headhunter.endpoint", &self.headhunter.endpoint)?;
        validate_non_empty_string("headhunter.currency", &self.headhunter.currency)?;
        validate_range("headhunter.per_page", self.headhunter.per_page, 1, 100)?;
        validate_positive_number("headhunter.max_pages", self.headhunter.max_pages.into(), 1)?;

        validate_url("superjob.endpoint", &self.superjob.endpoint)?;
        validate_non_empty_string("superjob.currency", &self.superjob.currency)?;
        validate_range("superjob.count", self.superjob.count, 1, 100)?;

        Ok(())
    }
}

impl Validate for SurveyConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = SurveyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.survey.languages.len(), 14);
        assert_eq!(config.headhunter.currency, "RUR");
        assert_eq!(config.superjob.currency, "rub");
        assert_eq!(config.superjob.api_key(), None);
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[survey]
languages = ["Python", "Go"]
vacancy_template = "programmer {}"
period_days = 7

[headhunter]
threshold = 10
area = 2
"#;

        let config = SurveyConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.survey.languages, vec!["Python", "Go"]);
        assert_eq!(config.template().keyword_for("Go"), "programmer Go");
        assert_eq!(config.survey.period_days, 7);
        assert_eq!(config.headhunter.threshold, 10);
        assert_eq!(config.headhunter.area, 2);
        assert_eq!(config.headhunter.endpoint, "https://api.hh.ru/vacancies");
        assert_eq!(config.superjob.town, 4);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VACANCY_STATS_TEST_SJ_KEY", "v3.r.secret");

        let toml_content = r#"
[superjob]
api_key = "${VACANCY_STATS_TEST_SJ_KEY}"
"#;

        let config = SurveyConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.superjob.api_key(), Some("v3.r.secret"));

        std::env::remove_var("VACANCY_STATS_TEST_SJ_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_is_not_a_key() {
        let toml_content = r#"
[superjob]
api_key = "${VACANCY_STATS_TEST_UNSET_VARIABLE}"
"#;

        let config = SurveyConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.superjob.api_key.as_deref(),
            Some("${VACANCY_STATS_TEST_UNSET_VARIABLE}")
        );
        assert_eq!(config.superjob.api_key(), None);
    }

    #[test]
    fn test_config_validation() {
        let config = SurveyConfig::from_toml_str(
            r#"
[headhunter]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = SurveyConfig::from_toml_str(
            r#"
[survey]
vacancy_template = "programmer"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = SurveyConfig::from_toml_str(
            r#"
[survey]
languages = []
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = SurveyConfig::from_toml_str("[survey\nlanguages = 1").unwrap_err();
        assert!(matches!(err, SurveyError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[superjob]
title = "SuperJob St. Petersburg"
town = 14
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SurveyConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.superjob.title, "SuperJob St. Petersburg");
        assert_eq!(config.superjob.town, 14);
    }
}
