use contracts::domain::a001_country::{Country, CountrySource};
use contracts::shared::error::AppError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_country::api::RestCountriesClient;

#[derive(Clone, Copy)]
pub struct CountryDetailsViewModel {
    pub country: RwSignal<Option<Country>>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    /// Code of the latest load; answers for any other code are dropped.
    requested: RwSignal<String>,
}

impl CountryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            country: RwSignal::new(None),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            requested: RwSignal::new(String::new()),
        }
    }

    pub fn load(&self, code: String) {
        let vm = *self;
        vm.requested.set(code.clone());
        vm.is_loading.set(true);
        vm.error.set(None);

        spawn_local(async move {
            let result = RestCountriesClient.fetch_by_code(&code).await;
            if vm.requested.get_untracked() != code {
                log::debug!("details for {} arrived after navigation, dropping", code);
                return;
            }
            match result {
                Ok(country) => vm.country.set(Some(country)),
                Err(AppError::NotFound(_)) => {
                    vm.country.set(None);
                    vm.error.set(Some(format!("Country {} not found", code)));
                }
                Err(e) => {
                    log::error!("failed to load country {}: {}", code, e);
                    vm.country.set(None);
                    vm.error.set(Some(e.to_string()));
                }
            }
            vm.is_loading.set(false);
        });
    }
}

impl Default for CountryDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
