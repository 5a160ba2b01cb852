pub mod store;

pub use store::{FavoriteToggle, FavoritesStore, PendingWrite, ProfileClient};
