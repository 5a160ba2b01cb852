use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(token) = storage::get_token() else {
                return;
            };
            match api::current_user().await {
                Ok(user) => {
                    log::info!("session restored for {}", user.username);
                    set_auth_state.set(AuthState {
                        token: Some(token),
                        user: Some(user),
                    });
                }
                Err(e) => {
                    log::warn!("stored session rejected: {}", e);
                    storage::clear_token();
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Sign out at the provider, then forget the session locally either way.
pub async fn do_sign_out(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::sign_out().await {
        log::warn!("sign-out request failed: {}", e);
    }
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
