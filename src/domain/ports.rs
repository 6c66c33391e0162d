use crate::domain::model::{FetchedListings, PageBatch, SearchQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A job board that can be searched page by page.
#[async_trait]
pub trait Provider: Send + Sync {
    type Listing: Send;

    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Caption of the report table.
    fn title(&self) -> &str;

    /// A language needs strictly more listings than this to be reported.
    fn threshold(&self) -> usize;

    /// Hard cap on pages per search, if the provider has one.
    fn max_pages(&self) -> Option<u32> {
        None
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<PageBatch<Self::Listing>>;

    fn estimate_salary(&self, listing: &Self::Listing) -> Option<u64>;

    /// Walks pages from 0 until the provider reports exhaustion.
    async fn fetch_listings(&self, query: &SearchQuery) -> Result<FetchedListings<Self::Listing>> {
        let mut fetched = FetchedListings::default();

        for page in 0u32.. {
            let batch = self.fetch_page(query, page).await?;
            if page == 0 {
                fetched.found = batch.found;
            }
            tracing::debug!(
                "{}: '{}' page {} returned {} listings",
                self.name(),
                query.keyword,
                page,
                batch.listings.len()
            );
            fetched.listings.extend(batch.listings);

            let capped = self
                .max_pages()
                .is_some_and(|max| page.saturating_add(1) >= max);
            if batch.pagination.is_exhausted(page) || capped {
                break;
            }
        }

        Ok(fetched)
    }
}
