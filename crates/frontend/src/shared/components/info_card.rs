use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Card;

/// Titled card grouping label/value rows on the detail page.
#[component]
pub fn InfoCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <Card class="info-card">
            <h3 class="info-card__title">{title}</h3>
            <dl class="info-card__rows">{children()}</dl>
        </Card>
    }
}

#[component]
pub fn InfoRow(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] icon_name: Option<String>,
) -> impl IntoView {
    view! {
        <div class="info-row">
            <dt class="info-row__label">
                {icon_name.map(|name| icon(&name))}
                {label}
            </dt>
            <dd class="info-row__value">{value}</dd>
        </div>
    }
}
