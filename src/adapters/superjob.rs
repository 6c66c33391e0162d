use crate::adapters::http::read_json;
use crate::config::SuperJobConfig;
use crate::core::salary::predict_salary;
use crate::domain::model::{PageBatch, Pagination, SalaryBounds, SearchQuery};
use crate::domain::ports::Provider;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const API_KEY_HEADER: &str = "X-Api-App-Id";

/// SuperJob reports absent payment bounds as 0.
#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub profession: String,
    pub payment_from: Option<u64>,
    pub payment_to: Option<u64>,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct SjPage {
    objects: Vec<SjVacancy>,
    total: u64,
    more: bool,
}

/// SuperJob only knows 1, 3 and 7 day windows; anything wider means all time (0).
pub fn period_filter(days: u32) -> u32 {
    match days {
        0 => 0,
        1 => 1,
        2..=3 => 3,
        4..=7 => 7,
        _ => 0,
    }
}

pub struct SuperJob {
    config: SuperJobConfig,
    client: Client,
}

impl SuperJob {
    pub fn new(config: SuperJobConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl Provider for SuperJob {
    type Listing = SjVacancy;

    fn name(&self) -> &str {
        "SuperJob"
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn threshold(&self) -> usize {
        self.config.threshold
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<PageBatch<SjVacancy>> {
        let api_key = *validate_required_field("SUPERJOB_KEY", &self.config.api_key())?;

        tracing::debug!(
            "Requesting {} page {} for '{}'",
            self.config.endpoint,
            page,
            query.keyword
        );

        let response = self
            .client
            .get(&self.config.endpoint)
            .header(API_KEY_HEADER, api_key)
            .query(&[
                ("keyword", query.keyword.as_str()),
                ("catalogues", self.config.catalogues.as_str()),
            ])
            .query(&[
                ("town", self.config.town),
                ("period", period_filter(query.period)),
                ("page", page),
                ("count", self.config.count),
            ])
            .send()
            .await?;

        let body: SjPage = read_json(self.name(), response).await?;

        Ok(PageBatch {
            listings: body.objects,
            found: body.total,
            pagination: Pagination::More(body.more),
        })
    }

    fn estimate_salary(&self, listing: &SjVacancy) -> Option<u64> {
        if listing.currency != self.config.currency {
            return None;
        }
        predict_salary(SalaryBounds::new(listing.payment_from, listing.payment_to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::build_client;
    use crate::utils::error::SurveyError;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn provider(server: &MockServer, api_key: Option<&str>) -> SuperJob {
        let config = SuperJobConfig {
            endpoint: server.url("/2.0/vacancies/"),
            api_key: api_key.map(str::to_string),
            ..SuperJobConfig::default()
        };
        let client = build_client("vacancy-stats-test", Duration::from_secs(5)).unwrap();
        SuperJob::new(config, client)
    }

    fn query() -> SearchQuery {
        SearchQuery {
            language: "Go".to_string(),
            keyword: "programmer Go".to_string(),
            period: 7,
        }
    }

    fn vacancy(from: u64, to: u64, currency: &str) -> SjVacancy {
        SjVacancy {
            id: 1,
            profession: "Go developer".to_string(),
            payment_from: Some(from),
            payment_to: Some(to),
            currency: currency.to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_sends_key_and_parameters() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/2.0/vacancies/")
                .header("x-api-app-id", "secret")
                .query_param("keyword", "programmer Go")
                .query_param("catalogues", "48")
                .query_param("town", "4")
                .query_param("period", "7")
                .query_param("page", "0")
                .query_param("count", "100");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "objects": [{"id": 1, "payment_from": 0, "payment_to": 0, "currency": "rub"}],
                    "total": 1,
                    "more": false
                }));
        });

        let batch = provider(&server, Some("secret"))
            .fetch_page(&query(), 0)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(batch.found, 1);
        assert_eq!(batch.pagination, Pagination::More(false));
    }

    #[tokio::test]
    async fn test_fetch_listings_follows_more_flag() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/").query_param("page", "0");
            then.status(200).json_body(json!({
                "objects": [{"id": 1, "currency": "rub"}, {"id": 2, "currency": "rub"}],
                "total": 3,
                "more": true
            }));
        });
        let second = server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/").query_param("page", "1");
            then.status(200).json_body(json!({
                "objects": [{"id": 3, "currency": "rub"}],
                "total": 3,
                "more": false
            }));
        });
        let overshoot = server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/").query_param("page", "2");
            then.status(200).json_body(json!({"objects": [], "total": 3, "more": false}));
        });

        let fetched = provider(&server, Some("secret"))
            .fetch_listings(&query())
            .await
            .unwrap();

        first.assert();
        second.assert();
        overshoot.assert_hits(0);
        assert_eq!(fetched.found, 3);
        let ids: Vec<u64> = fetched.listings.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(200).json_body(json!({"objects": [], "total": 0, "more": false}));
        });

        let err = provider(&server, None).fetch_listings(&query()).await.unwrap_err();

        api_mock.assert_hits(0);
        match err {
            SurveyError::MissingConfigError { field } => assert_eq!(field, "SUPERJOB_KEY"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejected_key_fails_the_fetch() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(403).json_body(json!({"error": {"code": 403, "message": "bad key"}}));
        });

        let err = provider(&server, Some("wrong"))
            .fetch_listings(&query())
            .await
            .unwrap_err();

        assert!(matches!(err, SurveyError::UnexpectedStatus { .. }));
        assert_eq!(
            err.recovery_suggestion(),
            "Check that SUPERJOB_KEY holds a valid application secret key"
        );
    }

    #[test]
    fn test_period_filter() {
        assert_eq!(period_filter(1), 1);
        assert_eq!(period_filter(2), 3);
        assert_eq!(period_filter(7), 7);
        assert_eq!(period_filter(30), 0);
    }

    #[test]
    fn test_estimate_salary_treats_zero_as_missing() {
        let server = MockServer::start();
        let sj = provider(&server, Some("secret"));

        assert_eq!(sj.estimate_salary(&vacancy(80_000, 120_000, "rub")), Some(100_000));
        assert_eq!(sj.estimate_salary(&vacancy(50_000, 0, "rub")), Some(60_000));
        assert_eq!(sj.estimate_salary(&vacancy(0, 100_000, "rub")), Some(80_000));
        assert_eq!(sj.estimate_salary(&vacancy(0, 0, "rub")), None);
        assert_eq!(sj.estimate_salary(&vacancy(80_000, 120_000, "usd")), None);
    }
}
