//! TopHeader component - application top navigation bar.
//!
//! Contains the brand link, the favorites count and the session controls.

use crate::shared::icons::icon;
use crate::system::auth::context::{do_sign_out, use_auth};
use crate::system::favorites::context::use_favorites;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let favorites = use_favorites();

    let sign_out = move || {
        spawn_local(async move {
            do_sign_out(set_auth_state).await;
        });
    };

    let greeting = move || {
        auth_state.with(|s| {
            s.user
                .as_ref()
                .map(|u| format!("Hi, {} 👋", u.greeting_name()))
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <A href="/" attr:class="top-header__title">"Worldly 🌏"</A>
            </div>

            <div class="top-header__actions">
                <div class="top-header__favorites" title="Favorite countries">
                    {icon("heart")}
                    <span>{move || favorites.count()}</span>
                </div>

                <Show
                    when=move || auth_state.get().is_signed_in()
                    fallback=|| view! {
                        <A href="/sign-in" attr:class="button button--primary">"Sign In"</A>
                    }
                >
                    <span class="top-header__user">{greeting}</span>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| sign_out()>
                        "Sign Out"
                    </Button>
                </Show>
            </div>
        </div>
    }
}
