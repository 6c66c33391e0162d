use crate::core::aggregate::aggregate;
use crate::domain::model::{Statistics, VacancyTemplate};
use crate::domain::ports::Provider;
use crate::utils::error::Result;
use std::time::Instant;

/// Runs one provider over every configured language, strictly in order.
pub struct SurveyEngine<P: Provider> {
    provider: P,
    languages: Vec<String>,
    template: VacancyTemplate,
    period: u32,
}

impl<P: Provider> SurveyEngine<P> {
    pub fn new(provider: P, languages: Vec<String>, template: VacancyTemplate, period: u32) -> Self {
        Self {
            provider,
            languages,
            template,
            period,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn run(&self) -> Result<Statistics> {
        let started = Instant::now();
        tracing::info!(
            "🚀 Collecting {} languages from {}",
            self.languages.len(),
            self.provider.name()
        );

        let mut by_language = Vec::with_capacity(self.languages.len());
        for language in &self.languages {
            let query = self.template.query(language, self.period);
            let fetched = self.provider.fetch_listings(&query).await?;
            tracing::info!(
                "{} / {}: fetched {} listings (reported {})",
                self.provider.name(),
                language,
                fetched.listings.len(),
                fetched.found
            );
            by_language.push((language.clone(), fetched));
        }

        let statistics = aggregate(&self.provider, by_language);
        for language in &self.languages {
            match statistics.get(language) {
                Some(summary) => tracing::info!(
                    "{} / {}: processed {}, average {}",
                    self.provider.name(),
                    language,
                    summary.processed,
                    summary.average_salary
                ),
                None => tracing::info!(
                    "{} / {}: skipped (threshold {} or no salaries)",
                    self.provider.name(),
                    language,
                    self.provider.threshold()
                ),
            }
        }

        tracing::info!(
            "✅ {} done: {} of {} languages reported in {:?}",
            self.provider.name(),
            statistics.len(),
            self.languages.len(),
            started.elapsed()
        );
        Ok(statistics)
    }
}
