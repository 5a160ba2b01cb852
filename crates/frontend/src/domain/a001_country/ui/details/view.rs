use chrono::Utc;
use contracts::domain::a001_country::timezone::{timezone_rows, NO_TIMEZONE_DATA};
use contracts::domain::a001_country::Country;
use contracts::shared::error::AppError;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use super::view_model::CountryDetailsViewModel;
use crate::shared::components::info_card::{InfoCard, InfoRow};
use crate::shared::icons::icon;
use crate::system::favorites::context::use_favorites;

fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

#[component]
pub fn CountryDetailsPage() -> impl IntoView {
    let vm = CountryDetailsViewModel::new();
    let params = use_params_map();

    // Load data when the code in the URL changes
    Effect::new(move |_| {
        let code = params.with(|p| p.get("code").unwrap_or_default());
        if !code.is_empty() {
            vm.load(code);
        }
    });

    view! {
        <div class="page country-details">
            <div class="page__header">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| go_back()>
                    {icon("arrow-left")}
                    " Go Back"
                </Button>
            </div>

            {move || {
                if vm.is_loading.get() {
                    return view! {
                        <div class="page__loading">
                            <Spinner />
                        </div>
                    }
                    .into_any();
                }
                if let Some(message) = vm.error.get() {
                    return view! {
                        <div class="alert alert--error">{format!("Error: {}", message)}</div>
                    }
                    .into_any();
                }
                match vm.country.get() {
                    Some(country) => view! { <CountryDetails country=country /> }.into_any(),
                    None => view! { <></> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn FavoriteToggle(code: String) -> impl IntoView {
    let favorites = use_favorites();
    let navigate = use_navigate();
    let code = StoredValue::new(code);

    let is_favorite = Signal::derive(move || code.with_value(|c| favorites.is_favorite(c)));
    let tooltip = move || {
        if is_favorite.get() {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    };

    let on_click = move |_| {
        let result = code.with_value(|c| favorites.toggle(c));
        if let Err(AppError::Unauthenticated) = result {
            log::info!("favorite toggle while signed out, redirecting to sign-in");
            navigate("/sign-in", Default::default());
        }
    };

    view! {
        <button
            class="favorite-toggle"
            class:favorite-toggle--active=move || is_favorite.get()
            title=tooltip
            aria-label=tooltip
            on:click=on_click
        >
            {move || if is_favorite.get() { icon("heart") } else { icon("heart-outline") }}
        </button>
    }
}

#[component]
fn CountryDetails(country: Country) -> impl IntoView {
    let code = country.code().to_string();
    let official = country.distinct_official_name().map(str::to_string);
    let flag = country
        .flag_svg()
        .unwrap_or_else(|| country.flag_png())
        .to_string();

    let rows = timezone_rows(&country.timezones, Utc::now());
    let timezones = if rows.is_empty() {
        view! { <p class="country-details__empty">{NO_TIMEZONE_DATA}</p> }.into_any()
    } else {
        let items = rows
            .into_iter()
            .map(|row| {
                view! {
                    <li class="timezone">
                        {icon("clock")}
                        <span class="timezone__label">{row.label}</span>
                        {row.local_time.map(|t| view! { <span class="timezone__time">{t}</span> })}
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="timezone-list">{items}</ul> }.into_any()
    };

    let capital_label = country.capital_label().to_string();
    let region_label = country.region_label().to_string();
    let subregion_label = country.subregion_label().to_string();
    let population_label = country.population_label().to_string();
    let languages_label = country.languages_label().to_string();
    let currencies_label = country.currencies_label().to_string();

    view! {
        <div class="country-details__hero">
            <img class="country-details__flag" src=flag alt=country.flag_alt() />
            <div class="country-details__titles">
                <div class="country-details__name-row">
                    <h1 class="page__title">{country.common_name().to_string()}</h1>
                    <FavoriteToggle code=code.clone() />
                </div>
                {official.map(|name| view! { <p class="country-details__official">{name}</p> })}
                <span class="badge badge--primary">{code}</span>
            </div>
        </div>

        <div class="country-details__cards">
            <InfoCard title="Geography">
                <InfoRow label="Capital" value=capital_label icon_name="city" />
                <InfoRow label="Region" value=region_label icon_name="map" />
                <InfoRow label="Subregion" value=subregion_label />
            </InfoCard>
            <InfoCard title="Demographics">
                <InfoRow
                    label="Population"
                    value=population_label
                    icon_name="people"
                />
                <InfoRow label="Languages" value=languages_label />
                <InfoRow label="Currencies" value=currencies_label />
            </InfoCard>
        </div>

        <section class="country-details__timezones">
            <h3>"Timezones"</h3>
            {timezones}
        </section>
    }
}
