pub mod options;
pub mod plan;
pub mod state;

pub use plan::{FilterPlan, UpstreamQuery};
pub use state::{normalize_choice, FilterState, ALL_OPTION};
