use crate::adapters::http::read_json;
use crate::config::HeadHunterConfig;
use crate::core::salary::predict_salary;
use crate::domain::model::{PageBatch, Pagination, SalaryBounds, SearchQuery};
use crate::domain::ports::Provider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhPage {
    items: Vec<HhVacancy>,
    found: u64,
    pages: u32,
}

pub struct HeadHunter {
    config: HeadHunterConfig,
    client: Client,
}

impl HeadHunter {
    pub fn new(config: HeadHunterConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl Provider for HeadHunter {
    type Listing = HhVacancy;

    fn name(&self) -> &str {
        "HeadHunter"
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn threshold(&self) -> usize {
        self.config.threshold
    }

    fn max_pages(&self) -> Option<u32> {
        Some(self.config.max_pages)
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<PageBatch<HhVacancy>> {
        tracing::debug!(
            "Requesting {} page {} for '{}'",
            self.config.endpoint,
            page,
            query.keyword
        );

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("text", query.keyword.as_str())])
            .query(&[
                ("area", self.config.area),
                ("period", query.period),
                ("page", page),
                ("per_page", self.config.per_page),
            ])
            .send()
            .await?;

        let body: HhPage = read_json(self.name(), response).await?;

        Ok(PageBatch {
            listings: body.items,
            found: body.found,
            pagination: Pagination::TotalPages(body.pages),
        })
    }

    fn estimate_salary(&self, listing: &HhVacancy) -> Option<u64> {
        let salary = listing.salary.as_ref()?;
        if salary.currency.as_deref() != Some(self.config.currency.as_str()) {
            return None;
        }
        predict_salary(SalaryBounds::new(salary.from, salary.to))
    }
}
