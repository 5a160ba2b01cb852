//! Country detail page.
//!
//! - view_model.rs: loading state and the fetch command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::CountryDetailsPage;
pub use view_model::CountryDetailsViewModel;
