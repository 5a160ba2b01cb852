pub mod state;

use contracts::domain::a001_country::CountrySource;
use contracts::shared::filter::{normalize_choice, FilterPlan, ALL_OPTION};
use contracts::shared::sequence::Ticket;
use contracts::usecases::u501_browse_countries::{
    region_subregions, resolve, CountryListEngine, PendingResolution, SubregionRefresh,
    DEBOUNCE_MS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::card::CountryCard;
use crate::domain::a001_country::api::RestCountriesClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;

fn select_value(choice: Option<&str>) -> String {
    choice.unwrap_or(ALL_OPTION).to_string()
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn CountryListPage() -> impl IntoView {
    let restored = state::load_persisted();
    let engine = RwSignal::new(CountryListEngine::new(restored.clone()));
    let debouncer = Debouncer::new(DEBOUNCE_MS);

    // RwSignals bound to controls
    let search_term = RwSignal::new(restored.search_term.clone());
    let region = RwSignal::new(select_value(restored.region.as_deref()));
    let subregion = RwSignal::new(select_value(restored.subregion.as_deref()));

    let persist = move || {
        engine.with_untracked(|e| state::persist_filter(e.filter()));
    };

    let resolve_now = move || {
        let Some(PendingResolution { ticket, plan }) = engine.try_update(|e| e.begin_resolution())
        else {
            return;
        };
        spawn_local(async move {
            let result = resolve(&RestCountriesClient, &plan).await;
            engine.update(|e| {
                e.complete_resolution(ticket, result);
            });
        });
    };

    let schedule_resolution = move || debouncer.schedule(resolve_now);

    // The catalog feeds the selects; with `resolution` it also answers that
    // no-filter resolution.
    let load_catalog = move |resolution: Option<Ticket>| {
        spawn_local(async move {
            let catalog = RestCountriesClient.fetch_all().await;
            engine.update(|e| e.complete_catalog(catalog, resolution));
        });
    };

    // Initial load
    Effect::new(move |_| {
        if engine.with_untracked(|e| e.catalog_loaded()) {
            return;
        }
        let Some(PendingResolution { ticket, plan }) = engine.try_update(|e| e.begin_resolution())
        else {
            return;
        };
        if plan == FilterPlan::NoFilter {
            load_catalog(Some(ticket));
            return;
        }
        load_catalog(None);
        spawn_local(async move {
            let result = resolve(&RestCountriesClient, &plan).await;
            engine.update(|e| {
                e.complete_resolution(ticket, result);
            });
        });
    });

    // Sync RwSignals → engine
    Effect::new(move |_| {
        let term = search_term.get();
        let changed = engine
            .try_update(|e| e.set_search_term(&term))
            .unwrap_or(false);
        if changed {
            persist();
            schedule_resolution();
        }
    });

    Effect::new(move |_| {
        let value = region.get();
        let unchanged = engine.with_untracked(|e| e.filter().region == normalize_choice(&value));
        if unchanged {
            return;
        }
        let refresh = engine.try_update(|e| e.select_region(&value));
        subregion.set(ALL_OPTION.to_string());
        persist();

        if let Some(SubregionRefresh::Fetch { ticket, region }) = refresh {
            spawn_local(async move {
                let result = region_subregions(&RestCountriesClient, &region).await;
                engine.update(|e| {
                    e.complete_subregion_refresh(ticket, result);
                });
            });
        }
        schedule_resolution();
    });

    Effect::new(move |_| {
        let value = subregion.get();
        let changed = engine
            .try_update(|e| e.select_subregion(&value))
            .unwrap_or(false);
        if changed {
            persist();
            schedule_resolution();
        }
    });

    let reset = move || {
        debouncer.cancel();
        engine.update(|e| e.reset());
        search_term.set(String::new());
        region.set(ALL_OPTION.to_string());
        subregion.set(ALL_OPTION.to_string());
        state::clear_persisted();
        if engine.with_untracked(|e| e.catalog_loaded()) {
            resolve_now();
        } else if let Some(pending) = engine.try_update(|e| e.begin_resolution()) {
            load_catalog(Some(pending.ticket));
        }
    };

    let go_to_page = move |page: usize| {
        if engine.try_update(|e| e.go_to_page(page)).unwrap_or(false) {
            scroll_to_top();
        }
    };
    let previous_page = move |_: ()| {
        if engine.try_update(|e| e.previous_page()).unwrap_or(false) {
            scroll_to_top();
        }
    };
    let next_page = move |_: ()| {
        if engine.try_update(|e| e.next_page()).unwrap_or(false) {
            scroll_to_top();
        }
    };

    let active_filters_count = Signal::derive(move || engine.with(|e| e.filter().active_count()));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Explore Countries"</h1>
                    <p class="page__subtitle">
                        "Discover flags, capitals and populations from around the world"
                    </p>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div class="filter-panel__search">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <Input value=search_term placeholder="Search for a country..." />
                            </Flex>
                        </div>

                        <div class="filter-panel__select">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Region"</Label>
                                <Select value=region>
                                    <option value=ALL_OPTION>"All Regions"</option>
                                    {move || engine.with(|e| e.regions().to_vec()).into_iter().map(|name| {
                                        view! { <option value=name.clone()>{name.clone()}</option> }
                                    }).collect_view()}
                                </Select>
                            </Flex>
                        </div>

                        <div class="filter-panel__select">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Subregion"</Label>
                                <Select value=subregion>
                                    <option value=ALL_OPTION>"All Subregions"</option>
                                    {move || engine.with(|e| e.subregion_options().to_vec()).into_iter().map(|name| {
                                        view! { <option value=name.clone()>{name.clone()}</option> }
                                    }).collect_view()}
                                </Select>
                            </Flex>
                        </div>

                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| reset()
                            disabled=Signal::derive(move || active_filters_count.get() == 0)
                        >
                            {icon("x")}
                            " Reset"
                        </Button>
                    </Flex>
                </div>

                {move || {
                    engine.with(|e| {
                        if let Some(message) = e.error() {
                            return view! {
                                <div class="alert alert--error">
                                    {format!("Error: {}", message)}
                                </div>
                            }
                            .into_any();
                        }

                        if !e.catalog_loaded() && e.is_loading() {
                            return view! {
                                <div class="page__loading">
                                    <Spinner />
                                    <p>"Loading countries..."</p>
                                </div>
                            }
                            .into_any();
                        }

                        if e.results().is_empty() && !e.is_loading() {
                            return view! {
                                <div class="empty-state">
                                    <p>"No countries found matching your criteria."</p>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| reset()
                                    >
                                        "Reset Filters"
                                    </Button>
                                </div>
                            }
                            .into_any();
                        }

                        let showing = format!(
                            "Showing {} of {} countries",
                            e.current_items().len(),
                            e.results().len()
                        );
                        let cards = e
                            .current_items()
                            .iter()
                            .cloned()
                            .map(|country| view! { <CountryCard country=country /> })
                            .collect_view();

                        view! {
                            <p class="page__counter">{showing}</p>
                            <div class="country-grid">{cards}</div>
                        }
                        .into_any()
                    })
                }}

                <PaginationControls
                    links=Signal::derive(move || engine.with(|e| {
                        if e.error().is_some() { Vec::new() } else { e.page_links() }
                    }))
                    has_previous=Signal::derive(move || engine.with(|e| e.pagination().has_previous()))
                    has_next=Signal::derive(move || engine.with(|e| e.pagination().has_next()))
                    on_page_change=Callback::new(go_to_page)
                    on_previous=Callback::new(previous_page)
                    on_next=Callback::new(next_page)
                />
            </div>
        </div>
    }
}
