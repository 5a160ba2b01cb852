//! Filter criteria survive reloads within the browser session.

use std::fmt::Debug;

use contracts::shared::filter::FilterState;

const REGION_KEY: &str = "selectedRegion";
const SUBREGION_KEY: &str = "selectedSubregion";
const SEARCH_KEY: &str = "searchTerm";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

fn read(storage: &web_sys::Storage, key: &str) -> String {
    storage.get_item(key).ok().flatten().unwrap_or_default()
}

/// Logs a failed storage call; returns whether it succeeded.
fn report<E: Debug>(result: Result<(), E>, action: &str, key: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("session storage {} of {} failed: {:?}", action, key, e);
            false
        }
    }
}

fn write(storage: &web_sys::Storage, key: &str, value: &str) {
    if value.is_empty() {
        report(storage.remove_item(key), "remove", key);
    } else {
        report(storage.set_item(key, value), "write", key);
    }
}

/// Criteria saved earlier in this session, or none.
pub fn load_persisted() -> FilterState {
    let Some(storage) = storage() else {
        return FilterState::default();
    };
    FilterState::new(
        &read(&storage, SEARCH_KEY),
        &read(&storage, REGION_KEY),
        &read(&storage, SUBREGION_KEY),
    )
}

/// Writes every criterion; unset ones are removed.
pub fn persist_filter(filter: &FilterState) {
    let Some(storage) = storage() else { return };
    write(&storage, SEARCH_KEY, &filter.search_term);
    write(&storage, REGION_KEY, filter.region.as_deref().unwrap_or_default());
    write(
        &storage,
        SUBREGION_KEY,
        filter.subregion.as_deref().unwrap_or_default(),
    );
}

pub fn clear_persisted() {
    let Some(storage) = storage() else { return };
    for key in [SEARCH_KEY, REGION_KEY, SUBREGION_KEY] {
        report(storage.remove_item(key), "remove", key);
    }
}
