use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;
use std::cell::RefCell;

use crate::shared::error::{AppError, AppResult};
use crate::system::auth::UserProfile;

/// Write access to the signed-in user's profile at the identity provider.
#[async_trait(?Send)]
pub trait ProfileClient {
    /// Replaces the profile's freeform metadata and returns the updated profile.
    async fn update_metadata(&self, metadata: Value) -> AppResult<UserProfile>;
}

/// Outcome of a toggle, for user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub code: String,
    pub favorited: bool,
}

impl FavoriteToggle {
    pub fn message(&self) -> &'static str {
        if self.favorited {
            "Added to favorites ❤️"
        } else {
            "Removed from favorites 💔"
        }
    }
}

/// A toggle already applied locally whose profile write is still to be sent.
#[derive(Debug, Clone)]
pub struct PendingWrite {
    pub toggle: FavoriteToggle,
    metadata: Value,
}

#[derive(Debug, Default)]
struct FavoritesState {
    profile: Option<UserProfile>,
    codes: Vec<String>,
}

/// In-memory copy of the favorites list kept in the user profile.
///
/// Writes are optimistic: the local list changes first and the full list is
/// then written back. A failed write is reported but not rolled back, and two
/// toggles racing against the same snapshot can lose one update.
pub struct FavoritesStore<C> {
    client: C,
    state: RefCell<FavoritesState>,
}

impl<C: ProfileClient> FavoritesStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: RefCell::new(FavoritesState::default()),
        }
    }

    /// Reloads from the profile on sign-in, sign-out or profile change.
    pub fn sync_from_profile(&self, profile: Option<UserProfile>) {
        let mut state = self.state.borrow_mut();
        state.codes = Vec::new();
        if let Some(profile) = &profile {
            for code in profile.favorites() {
                if !state.codes.contains(&code) {
                    state.codes.push(code);
                }
            }
        }
        debug!("favorites synced: {} codes", state.codes.len());
        state.profile = profile;
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().profile.is_some()
    }

    pub fn list(&self) -> Vec<String> {
        self.state.borrow().codes.clone()
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.state.borrow().codes.iter().any(|c| c == code)
    }

    /// Flips `code` locally. Fails with [`AppError::Unauthenticated`] and
    /// leaves everything untouched when nobody is signed in.
    pub fn begin_toggle(&self, code: &str) -> AppResult<PendingWrite> {
        let mut state = self.state.borrow_mut();
        let Some(profile) = state.profile.clone() else {
            return Err(AppError::Unauthenticated);
        };

        let favorited = match state.codes.iter().position(|c| c == code) {
            Some(index) => {
                state.codes.remove(index);
                false
            }
            None => {
                state.codes.push(code.to_string());
                true
            }
        };

        Ok(PendingWrite {
            toggle: FavoriteToggle {
                code: code.to_string(),
                favorited,
            },
            metadata: profile.metadata_with_favorites(&state.codes),
        })
    }

    /// Writes the list captured by `pending` back to the profile.
    pub async fn persist(&self, pending: PendingWrite) -> AppResult<FavoriteToggle> {
        match self.client.update_metadata(pending.metadata).await {
            Ok(profile) => {
                let mut state = self.state.borrow_mut();
                if state.profile.as_ref().map(|p| &p.id) == Some(&profile.id) {
                    state.profile = Some(profile);
                }
                Ok(pending.toggle)
            }
            Err(err) => {
                warn!(
                    "favorites write for {} failed, local list kept: {}",
                    pending.toggle.code, err
                );
                Err(err)
            }
        }
    }

    pub async fn toggle(&self, code: &str) -> AppResult<FavoriteToggle> {
        let pending = self.begin_toggle(code)?;
        self.persist(pending).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    struct FakeProfileClient {
        fail: bool,
        writes: RefCell<Vec<Value>>,
    }

    impl FakeProfileClient {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                writes: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ProfileClient for FakeProfileClient {
        async fn update_metadata(&self, metadata: Value) -> AppResult<UserProfile> {
            self.writes.borrow_mut().push(metadata.clone());
            if self.fail {
                return Err(AppError::network("Request failed: 502"));
            }
            Ok(UserProfile {
                id: "user_1".into(),
                username: "ada".into(),
                first_name: None,
                unsafe_metadata: metadata,
            })
        }
    }

    fn signed_in(fail: bool, favorites: Value) -> FavoritesStore<FakeProfileClient> {
        let store = FavoritesStore::new(FakeProfileClient::new(fail));
        store.sync_from_profile(Some(UserProfile {
            id: "user_1".into(),
            username: "ada".into(),
            first_name: Some("Ada".into()),
            unsafe_metadata: json!({ "favorites": favorites, "theme": "dark" }),
        }));
        store
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let store = signed_in(false, json!(["JP"]));
        let first = block_on(store.toggle("FR")).unwrap();
        assert!(first.favorited);
        assert!(store.is_favorite("FR"));
        assert_eq!(first.message(), "Added to favorites ❤️");

        let second = block_on(store.toggle("FR")).unwrap();
        assert!(!second.favorited);
        assert!(!store.is_favorite("FR"));
        assert_eq!(store.list(), ["JP"]);
        assert_eq!(second.message(), "Removed from favorites 💔");
    }

    #[test]
    fn test_full_list_is_written_with_other_metadata() {
        let store = signed_in(false, json!(["JP"]));
        block_on(store.toggle("FR")).unwrap();
        let writes = store.client.writes.borrow();
        assert_eq!(
            writes.as_slice(),
            [json!({"favorites": ["JP", "FR"], "theme": "dark"})]
        );
    }

    #[test]
    fn test_signed_out_toggle_is_rejected_without_mutation() {
        let store = FavoritesStore::new(FakeProfileClient::new(false));
        store.sync_from_profile(None);
        let err = block_on(store.toggle("FR")).unwrap_err();
        assert_eq!(err, AppError::Unauthenticated);
        assert!(store.list().is_empty());
        assert!(!store.is_signed_in());
        assert!(store.client.writes.borrow().is_empty());
    }

    #[test]
    fn test_failed_write_is_not_rolled_back() {
        let store = signed_in(true, json!([]));
        let err = block_on(store.toggle("FR")).unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
        assert!(store.is_favorite("FR"));
    }

    #[test]
    fn test_sign_out_clears_list() {
        let store = signed_in(false, json!(["FR", "FR", "JP"]));
        assert_eq!(store.list(), ["FR", "JP"]);
        store.sync_from_profile(None);
        assert!(store.list().is_empty());
        assert!(!store.is_favorite("FR"));
    }

    #[test]
    fn test_begin_toggle_is_visible_before_persist() {
        let store = signed_in(false, json!([]));
        let pending = store.begin_toggle("IS").unwrap();
        assert!(store.is_favorite("IS"));
        let toggle = block_on(store.persist(pending)).unwrap();
        assert_eq!(
            toggle,
            FavoriteToggle {
                code: "IS".into(),
                favorited: true
            }
        );
    }
}
