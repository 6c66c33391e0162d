use crate::core::salary::average;
use crate::domain::model::{FetchedListings, LanguageSummary, Statistics};
use crate::domain::ports::Provider;

/// Summary for one language, or `None` when it has too few listings or
/// none of them could be estimated.
pub fn summarize<P: Provider + ?Sized>(
    provider: &P,
    fetched: &FetchedListings<P::Listing>,
) -> Option<LanguageSummary> {
    if fetched.listings.len() <= provider.threshold() {
        return None;
    }

    let salaries: Vec<u64> = fetched
        .listings
        .iter()
        .filter_map(|listing| provider.estimate_salary(listing))
        .collect();

    let average_salary = average(&salaries)?;

    Some(LanguageSummary {
        found: fetched.found,
        processed: salaries.len() as u64,
        average_salary,
    })
}

/// Summaries for every language that qualifies, in input order.
pub fn aggregate<P, I, S>(provider: &P, by_language: I) -> Statistics
where
    P: Provider + ?Sized,
    I: IntoIterator<Item = (S, FetchedListings<P::Listing>)>,
    S: Into<String>,
{
    let mut statistics = Statistics::new();
    for (language, fetched) in by_language {
        if let Some(summary) = summarize(provider, &fetched) {
            statistics.insert(language, summary);
        }
    }
    statistics
}
