use async_trait::async_trait;
use contracts::domain::a001_country::{Country, CountrySource, Endpoint};
use contracts::shared::error::{AppError, AppResult};
use gloo_net::http::Request;

use crate::shared::api_utils::{countries_base, send_json, with_bearer};

/// Country-data API client over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestCountriesClient;

impl RestCountriesClient {
    async fn get_list(&self, endpoint: Endpoint, what: &str) -> AppResult<Vec<Country>> {
        let url = endpoint.url(&countries_base());
        log::debug!("GET {}", url);
        send_json(with_bearer(Request::get(&url)), what).await
    }
}

#[async_trait(?Send)]
impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> AppResult<Vec<Country>> {
        self.get_list(Endpoint::All, "countries").await
    }

    /// The alpha endpoint answers with a list; the first entry is the country.
    async fn fetch_by_code(&self, code: &str) -> AppResult<Country> {
        self.get_list(Endpoint::Alpha(code.to_string()), "country")
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("No country with code {}", code)))
    }

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Country>> {
        self.get_list(Endpoint::Name(term.to_string()), "countries").await
    }

    async fn search_by_region(&self, region: &str) -> AppResult<Vec<Country>> {
        self.get_list(Endpoint::Region(region.to_string()), "countries").await
    }

    async fn search_by_subregion(&self, subregion: &str) -> AppResult<Vec<Country>> {
        self.get_list(Endpoint::Subregion(subregion.to_string()), "countries")
            .await
    }
}
