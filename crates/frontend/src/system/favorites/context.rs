use contracts::shared::error::{AppError, AppResult};
use contracts::system::favorites::FavoritesStore;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::shared::components::toast::{use_toasts, ToastService};
use crate::system::auth::api::HttpProfileClient;
use crate::system::auth::context::use_auth;

type Store = FavoritesStore<HttpProfileClient>;

/// Reactive handle on the favorites store.
///
/// The store itself is not reactive; `revision` is bumped on every local
/// change so readers re-run.
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    store: StoredValue<Rc<Store>, LocalStorage>,
    revision: RwSignal<u64>,
    toasts: ToastService,
}

impl FavoritesContext {
    fn new(toasts: ToastService) -> Self {
        Self {
            store: StoredValue::new_local(Rc::new(FavoritesStore::new(HttpProfileClient))),
            revision: RwSignal::new(0),
            toasts,
        }
    }

    fn bump(&self) {
        self.revision.update(|r| *r += 1);
    }

    pub fn list(&self) -> Vec<String> {
        self.revision.track();
        self.store.with_value(|s| s.list())
    }

    pub fn count(&self) -> usize {
        self.list().len()
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.revision.track();
        self.store.with_value(|s| s.is_favorite(code))
    }

    /// Flips `code` locally and writes the list back in the background.
    ///
    /// Returns [`AppError::Unauthenticated`] without touching anything when
    /// nobody is signed in; the caller redirects to sign-in.
    pub fn toggle(&self, code: &str) -> AppResult<()> {
        let store = self.store.get_value();
        let pending = store.begin_toggle(code)?;
        self.bump();

        let toasts = self.toasts;
        spawn_local(async move {
            match store.persist(pending).await {
                Ok(toggle) => toasts.success(toggle.message()),
                Err(AppError::Unauthenticated) => {
                    toasts.error("Your session has expired, please sign in again")
                }
                Err(e) => toasts.error(format!("Could not save favorites: {}", e)),
            }
        });
        Ok(())
    }
}

/// Keeps the favorites store in step with the signed-in profile.
#[component]
pub fn FavoritesProvider(children: ChildrenFn) -> impl IntoView {
    let favorites = FavoritesContext::new(use_toasts());
    let (auth_state, _) = use_auth();

    Effect::new(move |_| {
        let user = auth_state.get().user;
        favorites.store.with_value(|s| s.sync_from_profile(user));
        favorites.bump();
    });

    provide_context(favorites);

    children()
}

pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>().expect("FavoritesProvider not found in component tree")
}
