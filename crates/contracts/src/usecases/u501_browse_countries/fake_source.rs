use async_trait::async_trait;
use std::cell::RefCell;

use crate::domain::a001_country::aggregate::fixtures::country;
use crate::domain::a001_country::{Country, CountrySource};
use crate::shared::error::{AppError, AppResult};

/// In-memory upstream that answers like the real API (404 on no matches) and
/// records every call it receives.
pub struct FakeSource {
    pub catalog: Vec<Country>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new(catalog: Vec<Country>) -> Self {
        Self {
            catalog,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn world() -> Self {
        Self::new(vec![
            country("FI", "Finland", "Europe", Some("Northern Europe")),
            country("IE", "Ireland", "Europe", Some("Northern Europe")),
            country("IS", "Iceland", "Europe", Some("Northern Europe")),
            country("PL", "Poland", "Europe", Some("Central Europe")),
            country("FR", "France", "Europe", Some("Western Europe")),
            country("NZ", "New Zealand", "Oceania", Some("Australia and New Zealand")),
            country("TH", "Thailand", "Asia", Some("South-Eastern Asia")),
            country("JP", "Japan", "Asia", Some("Eastern Asia")),
            country("NG", "Nigeria", "Africa", Some("Western Africa")),
            country("KE", "Kenya", "Africa", Some("Eastern Africa")),
        ])
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn matching(&self, what: &str, keep: impl Fn(&Country) -> bool) -> AppResult<Vec<Country>> {
        let found: Vec<Country> = self.catalog.iter().filter(|c| keep(c)).cloned().collect();
        if found.is_empty() {
            Err(AppError::NotFound(format!("no match for {what}")))
        } else {
            Ok(found)
        }
    }
}

#[async_trait(?Send)]
impl CountrySource for FakeSource {
    async fn fetch_all(&self) -> AppResult<Vec<Country>> {
        self.record("all".into());
        Ok(self.catalog.clone())
    }

    async fn fetch_by_code(&self, code: &str) -> AppResult<Country> {
        self.record(format!("alpha:{code}"));
        self.catalog
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no country {code}")))
    }

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Country>> {
        self.record(format!("name:{term}"));
        let needle = term.to_lowercase();
        self.matching(term, |c| c.common_name().to_lowercase().contains(&needle))
    }

    async fn search_by_region(&self, region: &str) -> AppResult<Vec<Country>> {
        self.record(format!("region:{region}"));
        self.matching(region, |c| c.is_in_region(region))
    }

    async fn search_by_subregion(&self, subregion: &str) -> AppResult<Vec<Country>> {
        self.record(format!("subregion:{subregion}"));
        self.matching(subregion, |c| c.is_in_subregion(subregion))
    }
}

/// Upstream that fails every call.
pub struct DownSource;

#[async_trait(?Send)]
impl CountrySource for DownSource {
    async fn fetch_all(&self) -> AppResult<Vec<Country>> {
        Err(AppError::network("Request failed: 503"))
    }

    async fn fetch_by_code(&self, _code: &str) -> AppResult<Country> {
        Err(AppError::network("Request failed: 503"))
    }

    async fn search_by_name(&self, _term: &str) -> AppResult<Vec<Country>> {
        Err(AppError::network("Request failed: 503"))
    }

    async fn search_by_region(&self, _region: &str) -> AppResult<Vec<Country>> {
        Err(AppError::network("Request failed: 503"))
    }

    async fn search_by_subregion(&self, _subregion: &str) -> AppResult<Vec<Country>> {
        Err(AppError::network("Request failed: 503"))
    }
}
