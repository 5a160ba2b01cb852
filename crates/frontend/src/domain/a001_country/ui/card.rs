use contracts::domain::a001_country::Country;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

/// Summary tile on the listing page, linking to the country's detail page.
#[component]
pub fn CountryCard(country: Country) -> impl IntoView {
    let href = format!("/country/{}", country.code());
    let flag = country.flag_png().to_string();
    let alt = country.flag_alt();
    let name = country.common_name().to_string();
    let region = country.region_label().to_string();
    let subregion = country.subregion_label().to_string();
    let capital = country.capital_label().to_string();
    let code = country.code().to_string();
    let population = country.population_label();

    view! {
        <A href=href attr:class="country-card">
            <img class="country-card__flag" src=flag alt=alt loading="lazy" />
            <div class="country-card__body">
                <div class="country-card__header">
                    <h3 class="country-card__name">{name}</h3>
                    <span class="country-card__code">{code}</span>
                </div>
                <div class="country-card__region">
                    {icon("map")}
                    <span>{region}</span>
                    <span class="country-card__subregion">{subregion}</span>
                </div>
                <div class="country-card__row">
                    {icon("city")}
                    <span>"Capital: "{capital}</span>
                </div>
                <div class="country-card__row">
                    {icon("people")}
                    <span>"Population: "{population}</span>
                </div>
            </div>
        </A>
    }
}
