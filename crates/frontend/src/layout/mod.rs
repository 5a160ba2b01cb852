pub mod top_header;

use crate::shared::components::toast::Toaster;
use leptos::prelude::*;
use top_header::TopHeader;

/// Page chrome: top bar, routed content and the toast stack.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">{children()}</main>
            <Toaster />
        </div>
    }
}
