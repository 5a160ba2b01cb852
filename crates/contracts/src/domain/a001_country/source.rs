use async_trait::async_trait;

use super::aggregate::Country;
use crate::shared::error::AppResult;

/// Read access to the upstream country-data API.
///
/// One call per method, no local matching and no retries: whatever the
/// upstream answers is what the caller gets.
#[async_trait(?Send)]
pub trait CountrySource {
    async fn fetch_all(&self) -> AppResult<Vec<Country>>;

    async fn fetch_by_code(&self, code: &str) -> AppResult<Country>;

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Country>>;

    async fn search_by_region(&self, region: &str) -> AppResult<Vec<Country>>;

    async fn search_by_subregion(&self, subregion: &str) -> AppResult<Vec<Country>>;
}
