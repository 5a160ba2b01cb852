use log::{debug, warn};

use crate::domain::a001_country::Country;
use crate::shared::error::AppResult;
use crate::shared::filter::options::{distinct_regions, distinct_subregions};
use crate::shared::filter::{FilterPlan, FilterState};
use crate::shared::pagination::{PageLink, Pagination};
use crate::shared::sequence::{RequestSequence, Ticket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Ready,
    Failed(String),
}

/// A resolution that has been issued and awaits its upstream answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingResolution {
    pub ticket: Ticket,
    pub plan: FilterPlan,
}

/// What a region change needs before the subregion select is current again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubregionRefresh {
    /// Options come from `search_by_region(region)`.
    Fetch { ticket: Ticket, region: String },
    /// Options were recomputed from the catalog already held.
    Resolved,
}

/// State machine behind the country listing page.
///
/// Filter edits are applied synchronously; every upstream round-trip goes
/// through a `begin_*` / `complete_*` pair so a late answer to a superseded
/// request never overwrites a newer one.
#[derive(Debug, Clone)]
pub struct CountryListEngine {
    filter: FilterState,
    results: Vec<Country>,
    pagination: Pagination,
    status: ListStatus,
    catalog: Vec<Country>,
    catalog_loaded: bool,
    /// Failure of the catalog load; kept until a catalog load succeeds or
    /// the filter is reset.
    catalog_error: Option<String>,
    /// Failure of the latest subregion refresh; kept until the region
    /// changes again or the filter is reset.
    subregion_error: Option<String>,
    regions: Vec<String>,
    subregions: Vec<String>,
    resolutions: RequestSequence,
    subregion_requests: RequestSequence,
}

impl Default for CountryListEngine {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl CountryListEngine {
    pub fn new(filter: FilterState) -> Self {
        Self {
            filter,
            results: Vec::new(),
            pagination: Pagination::default(),
            status: ListStatus::Loading,
            catalog: Vec::new(),
            catalog_loaded: false,
            catalog_error: None,
            subregion_error: None,
            regions: Vec::new(),
            subregions: Vec::new(),
            resolutions: RequestSequence::new(),
            subregion_requests: RequestSequence::new(),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    /// The failure to show instead of the listing, if any. Catalog and
    /// subregion failures outlive later successful resolutions.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Failed(message) => Some(message),
            _ => self
                .catalog_error
                .as_deref()
                .or(self.subregion_error.as_deref()),
        }
    }

    pub fn catalog_loaded(&self) -> bool {
        self.catalog_loaded
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn subregion_options(&self) -> &[String] {
        &self.subregions
    }

    pub fn results(&self) -> &[Country] {
        &self.results
    }

    pub fn current_items(&self) -> &[Country] {
        self.pagination.slice(&self.results)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn page_links(&self) -> Vec<PageLink> {
        self.pagination.links()
    }

    // ---- filter edits ----

    /// Returns whether the term changed.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        if self.filter.search_term == term {
            return false;
        }
        self.filter.set_search_term(term);
        true
    }

    /// Selects a region (`"all"` or empty clears it) and drops the subregion.
    pub fn select_region(&mut self, value: &str) -> SubregionRefresh {
        self.filter.select_region(value);
        self.subregion_error = None;
        let ticket = self.subregion_requests.issue();

        match self.filter.region.clone() {
            Some(region) => SubregionRefresh::Fetch { ticket, region },
            None => {
                self.subregions = distinct_subregions(&self.catalog, None);
                SubregionRefresh::Resolved
            }
        }
    }

    /// Returns whether the subregion changed.
    pub fn select_subregion(&mut self, value: &str) -> bool {
        let before = self.filter.subregion.clone();
        self.filter.select_subregion(value);
        before != self.filter.subregion
    }

    /// Clears every criterion and any kept failure. The caller follows up
    /// with an immediate [`begin_resolution`](Self::begin_resolution), which
    /// will be `NoFilter`; when the catalog never loaded, that resolution is
    /// answered by reloading it.
    pub fn reset(&mut self) {
        self.filter.clear();
        self.catalog_error = None;
        self.subregion_error = None;
        self.subregion_requests.invalidate();
        self.subregions = distinct_subregions(&self.catalog, None);
    }

    // ---- upstream round-trips ----

    pub fn begin_resolution(&mut self) -> PendingResolution {
        let ticket = self.resolutions.issue();
        let plan = FilterPlan::from_state(&self.filter);
        debug!(
            "resolution #{} issued with {} plan",
            ticket.value(),
            plan.label()
        );
        self.status = ListStatus::Loading;
        PendingResolution { ticket, plan }
    }

    /// Applies a resolution result if `ticket` is still the latest issued.
    /// Returns whether it was applied.
    pub fn complete_resolution(&mut self, ticket: Ticket, result: AppResult<Vec<Country>>) -> bool {
        if !self.resolutions.is_current(ticket) {
            debug!("resolution #{} superseded, dropping result", ticket.value());
            return false;
        }

        match result {
            Ok(countries) => {
                self.pagination.reset(countries.len());
                self.results = countries;
                self.status = ListStatus::Ready;
            }
            Err(err) => {
                warn!("resolution #{} failed: {}", ticket.value(), err);
                self.status = ListStatus::Failed(err.to_string());
            }
        }
        true
    }

    /// Installs the full catalog, from which the region list and the initial
    /// subregion options are derived. When `resolution` is given the catalog
    /// also answers that (no-filter) resolution.
    pub fn complete_catalog(&mut self, result: AppResult<Vec<Country>>, resolution: Option<Ticket>) {
        match result {
            Ok(countries) => {
                self.regions = distinct_regions(&countries);
                self.subregions = distinct_subregions(&countries, self.filter.region.as_deref());
                self.catalog_loaded = true;
                self.catalog_error = None;
                if let Some(ticket) = resolution {
                    self.complete_resolution(ticket, Ok(countries.clone()));
                }
                self.catalog = countries;
            }
            Err(err) => {
                warn!("catalog load failed: {}", err);
                self.catalog_error = Some(err.to_string());
                if let Some(ticket) = resolution {
                    self.complete_resolution(ticket, Err(err));
                }
            }
        }
    }

    pub fn complete_subregion_refresh(
        &mut self,
        ticket: Ticket,
        result: AppResult<Vec<String>>,
    ) -> bool {
        if !self.subregion_requests.is_current(ticket) {
            debug!("subregion refresh #{} superseded", ticket.value());
            return false;
        }
        match result {
            Ok(options) => self.subregions = options,
            Err(err) => {
                warn!("subregion refresh failed: {}", err);
                self.subregion_error = Some(err.to_string());
            }
        }
        true
    }

    // ---- paging ----

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let moved = self.pagination.go_to(page);
        if !moved {
            debug!(
                "page {} ignored, staying on {} of {}",
                page,
                self.pagination.current_page(),
                self.pagination.total_pages()
            );
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.pagination.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.pagination.current_page().saturating_sub(1))
    }
}
