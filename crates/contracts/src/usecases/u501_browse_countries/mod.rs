//! Country listing: filter edits, upstream resolution and paging.

pub mod engine;
pub mod resolver;

#[cfg(test)]
pub(crate) mod fake_source;

pub use engine::{CountryListEngine, ListStatus, PendingResolution, SubregionRefresh};
pub use resolver::{region_subregions, resolve};

/// Quiet period after the last filter edit before a resolution is issued.
pub const DEBOUNCE_MS: u32 = 300;
