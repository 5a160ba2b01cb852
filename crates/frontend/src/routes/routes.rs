use crate::domain::a001_country::ui::details::CountryDetailsPage;
use crate::domain::a001_country::ui::list::CountryListPage;
use crate::layout::Shell;
use crate::system::pages::sign_in::SignInPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page empty-state">
            <h1>"Page not found"</h1>
            <a href="/">"Back to all countries"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CountryListPage />
                    <Route path=path!("/country/:code") view=CountryDetailsPage />
                    <Route path=path!("/sign-in") view=SignInPage />
                </Routes>
            </Shell>
        </Router>
    }
}
