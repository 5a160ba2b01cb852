use crate::routes::routes::AppRoutes;
use crate::shared::components::toast::ToastService;
use crate::system::auth::context::AuthProvider;
use crate::system::favorites::context::FavoritesProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are used by the favorites provider, so they come first.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <FavoritesProvider>
                <AppRoutes />
            </FavoritesProvider>
        </AuthProvider>
    }
}
