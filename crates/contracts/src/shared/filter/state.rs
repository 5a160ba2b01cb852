use serde::{Deserialize, Serialize};

/// Select value meaning "no restriction".
pub const ALL_OPTION: &str = "all";

/// User-selected listing criteria.
///
/// `region` and `subregion` are `None` when cleared; the select value
/// [`ALL_OPTION`] and the empty string both clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub region: Option<String>,
    pub subregion: Option<String>,
}

/// Select value as a criterion; `"all"` and the empty string clear it.
pub fn normalize_choice(value: &str) -> Option<String> {
    if value.is_empty() || value == ALL_OPTION {
        None
    } else {
        Some(value.to_string())
    }
}

impl FilterState {
    pub fn new(search_term: &str, region: &str, subregion: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            region: normalize_choice(region),
            subregion: normalize_choice(subregion),
        }
    }

    /// Search term as it takes part in resolution; whitespace-only counts as unset.
    pub fn effective_search(&self) -> Option<&str> {
        let trimmed = self.search_term.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Changing the region always drops the subregion.
    pub fn select_region(&mut self, value: &str) {
        self.region = normalize_choice(value);
        self.subregion = None;
    }

    pub fn select_subregion(&mut self, value: &str) {
        self.subregion = normalize_choice(value);
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_empty(&self) -> bool {
        self.effective_search().is_none() && self.region.is_none() && self.subregion.is_none()
    }

    pub fn active_count(&self) -> usize {
        [
            self.effective_search().is_some(),
            self.region.is_some(),
            self.subregion.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_empty_clear() {
        let state = FilterState::new("", ALL_OPTION, "");
        assert_eq!(state.region, None);
        assert_eq!(state.subregion, None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_region_change_always_clears_subregion() {
        for next in ["Asia", ALL_OPTION, "", "Europe"] {
            let mut state = FilterState::new("fra", "Europe", "Western Europe");
            state.select_region(next);
            assert_eq!(state.subregion, None, "after selecting {next:?}");
            assert_eq!(state.search_term, "fra");
        }
    }

    #[test]
    fn test_whitespace_search_is_unset() {
        let state = FilterState::new("   ", "", "");
        assert_eq!(state.effective_search(), None);
        assert!(state.is_empty());
        assert_eq!(FilterState::new(" land ", "", "").effective_search(), Some("land"));
    }

    #[test]
    fn test_active_count() {
        assert_eq!(FilterState::default().active_count(), 0);
        assert_eq!(FilterState::new("a", "Europe", "Western Europe").active_count(), 3);
        let mut state = FilterState::new("a", "Europe", "Western Europe");
        state.clear();
        assert_eq!(state, FilterState::default());
    }
}
