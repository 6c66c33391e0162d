/// One search issued to a provider for a single language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub language: String,
    pub keyword: String,
    /// Recency window in days.
    pub period: u32,
}

/// Vacancy title template with a single `{}` placeholder for the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyTemplate(String);

impl VacancyTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn keyword_for(&self, language: &str) -> String {
        self.0.replacen("{}", language, 1)
    }

    pub fn query(&self, language: &str, period: u32) -> SearchQuery {
        SearchQuery {
            language: language.to_string(),
            keyword: self.keyword_for(language),
            period,
        }
    }
}

/// How a provider tells us whether another page exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    TotalPages(u32),
    More(bool),
}

impl Pagination {
    /// True once `page` (zero-based, already fetched) was the last one.
    pub fn is_exhausted(&self, page: u32) -> bool {
        match *self {
            Pagination::TotalPages(total) => page.saturating_add(1) >= total,
            Pagination::More(more) => !more,
        }
    }
}

/// One HTTP response worth of listings.
#[derive(Debug, Clone)]
pub struct PageBatch<L> {
    pub listings: Vec<L>,
    pub found: u64,
    pub pagination: Pagination,
}

/// Every listing of every page for one language.
#[derive(Debug, Clone)]
pub struct FetchedListings<L> {
    pub found: u64,
    pub listings: Vec<L>,
}

impl<L> Default for FetchedListings<L> {
    fn default() -> Self {
        Self {
            found: 0,
            listings: Vec::new(),
        }
    }
}

/// Salary fork of a listing. Zero counts as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalaryBounds {
    pub lower: Option<u64>,
    pub upper: Option<u64>,
}

impl SalaryBounds {
    pub fn new(lower: Option<u64>, upper: Option<u64>) -> Self {
        Self {
            lower: lower.filter(|v| *v > 0),
            upper: upper.filter(|v| *v > 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSummary {
    pub found: u64,
    pub processed: u64,
    pub average_salary: u64,
}

/// Language summaries in the order they were collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    entries: Vec<(String, LanguageSummary)>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces an existing entry for the same language in place.
    pub fn insert(&mut self, language: impl Into<String>, summary: LanguageSummary) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = summary,
            None => self.entries.push((language, summary)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageSummary> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, summary)| summary)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageSummary)> {
        self.entries
            .iter()
            .map(|(name, summary)| (name.as_str(), summary))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
