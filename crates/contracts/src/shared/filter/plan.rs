use super::state::FilterState;
use crate::domain::a001_country::aggregate::Country;

/// How a [`FilterState`] is answered: which upstream query runs, and which
/// criteria are then applied locally to its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPlan {
    NoFilter,
    NameOnly {
        term: String,
    },
    RegionOnly {
        region: String,
    },
    SubregionOnly {
        subregion: String,
    },
    NameAndRegion {
        term: String,
        region: String,
        subregion: Option<String>,
    },
    RegionAndSubregion {
        region: String,
        subregion: String,
    },
}

/// The single upstream query a plan starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamQuery<'a> {
    All,
    Name(&'a str),
    Region(&'a str),
    Subregion(&'a str),
}

impl FilterPlan {
    /// Branches are tried in priority order and are mutually exclusive.
    ///
    /// With region and subregion both set and no search term the subregion
    /// branch wins, so `RegionAndSubregion` is never produced here; it is kept
    /// for callers that build a plan directly.
    pub fn from_state(state: &FilterState) -> Self {
        let term = state.effective_search();
        let region = state.region.as_deref();
        let subregion = state.subregion.as_deref();

        match (term, region, subregion) {
            (Some(term), None, None) => FilterPlan::NameOnly {
                term: term.to_string(),
            },
            (None, Some(region), None) => FilterPlan::RegionOnly {
                region: region.to_string(),
            },
            (None, _, Some(subregion)) => FilterPlan::SubregionOnly {
                subregion: subregion.to_string(),
            },
            (Some(term), Some(region), subregion) => FilterPlan::NameAndRegion {
                term: term.to_string(),
                region: region.to_string(),
                subregion: subregion.map(str::to_string),
            },
            // A search term with an unscoped subregion has no branch of its
            // own and falls back to the full catalog.
            (Some(_), None, Some(_)) | (None, None, None) => FilterPlan::NoFilter,
        }
    }

    pub fn query(&self) -> UpstreamQuery<'_> {
        match self {
            FilterPlan::NoFilter => UpstreamQuery::All,
            FilterPlan::NameOnly { term }
            | FilterPlan::NameAndRegion { term, .. } => UpstreamQuery::Name(term),
            FilterPlan::RegionOnly { region } | FilterPlan::RegionAndSubregion { region, .. } => {
                UpstreamQuery::Region(region)
            }
            FilterPlan::SubregionOnly { subregion } => UpstreamQuery::Subregion(subregion),
        }
    }

    /// Applies the criteria the upstream query could not express.
    pub fn refine(&self, countries: Vec<Country>) -> Vec<Country> {
        match self {
            FilterPlan::NameAndRegion {
                region, subregion, ..
            } => countries
                .into_iter()
                .filter(|c| c.is_in_region(region))
                .filter(|c| subregion.as_deref().map_or(true, |s| c.is_in_subregion(s)))
                .collect(),
            FilterPlan::RegionAndSubregion { subregion, .. } => countries
                .into_iter()
                .filter(|c| c.is_in_subregion(subregion))
                .collect(),
            _ => countries,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterPlan::NoFilter => "no-filter",
            FilterPlan::NameOnly { .. } => "name",
            FilterPlan::RegionOnly { .. } => "region",
            FilterPlan::SubregionOnly { .. } => "subregion",
            FilterPlan::NameAndRegion { .. } => "name+region",
            FilterPlan::RegionAndSubregion { .. } => "region+subregion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_country::aggregate::fixtures::country;

    fn plan(term: &str, region: &str, subregion: &str) -> FilterPlan {
        FilterPlan::from_state(&FilterState::new(term, region, subregion))
    }

    #[test]
    fn test_branch_table() {
        assert_eq!(plan("", "", ""), FilterPlan::NoFilter);
        assert_eq!(
            plan("land", "", ""),
            FilterPlan::NameOnly { term: "land".into() }
        );
        assert_eq!(
            plan("", "Europe", ""),
            FilterPlan::RegionOnly { region: "Europe".into() }
        );
        assert_eq!(
            plan("", "", "Western Europe"),
            FilterPlan::SubregionOnly { subregion: "Western Europe".into() }
        );
        assert_eq!(
            plan("", "Europe", "Western Europe"),
            FilterPlan::SubregionOnly { subregion: "Western Europe".into() }
        );
        assert_eq!(
            plan("land", "Europe", ""),
            FilterPlan::NameAndRegion {
                term: "land".into(),
                region: "Europe".into(),
                subregion: None
            }
        );
        assert_eq!(
            plan("land", "Europe", "Northern Europe"),
            FilterPlan::NameAndRegion {
                term: "land".into(),
                region: "Europe".into(),
                subregion: Some("Northern Europe".into())
            }
        );
    }

    #[test]
    fn test_single_criterion_maps_to_one_query() {
        assert_eq!(plan("fra", "", "").query(), UpstreamQuery::Name("fra"));
        assert_eq!(plan("", "Asia", "").query(), UpstreamQuery::Region("Asia"));
        assert_eq!(
            plan("", "", "Caribbean").query(),
            UpstreamQuery::Subregion("Caribbean")
        );
        assert_eq!(plan("", "all", "all").query(), UpstreamQuery::All);
    }

    #[test]
    fn test_name_and_region_refine_is_subset_in_region() {
        let matches = vec![
            country("FI", "Finland", "Europe", Some("Northern Europe")),
            country("NZ", "New Zealand", "Oceania", Some("Australia and New Zealand")),
            country("IE", "Ireland", "Europe", Some("Northern Europe")),
            country("TH", "Thailand", "Asia", Some("South-Eastern Asia")),
            country("PL", "Poland", "Europe", Some("Central Europe")),
        ];
        let refined = plan("land", "Europe", "").refine(matches.clone());
        let codes: Vec<_> = refined.iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["FI", "IE", "PL"]);
        assert!(refined.iter().all(|c| matches.contains(c) && c.region == "Europe"));

        let narrowed = plan("land", "Europe", "Northern Europe").refine(matches);
        let codes: Vec<_> = narrowed.iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["FI", "IE"]);
    }

    #[test]
    fn test_region_and_subregion_refine() {
        let plan = FilterPlan::RegionAndSubregion {
            region: "Europe".into(),
            subregion: "Western Europe".into(),
        };
        assert_eq!(plan.query(), UpstreamQuery::Region("Europe"));
        let refined = plan.refine(vec![
            country("FR", "France", "Europe", Some("Western Europe")),
            country("DE", "Germany", "Europe", Some("Western Europe")),
            country("PL", "Poland", "Europe", Some("Central Europe")),
            country("XK", "Kosovo", "Europe", None),
        ]);
        assert_eq!(refined.len(), 2);
    }

    #[test]
    fn test_name_with_unscoped_subregion_falls_back_to_catalog() {
        let plan = plan("a", "", "Eastern Africa");
        assert_eq!(plan, FilterPlan::NoFilter);
        assert_eq!(plan.query(), UpstreamQuery::All);
        let all = vec![
            country("KE", "Kenya", "Africa", Some("Eastern Africa")),
            country("CA", "Canada", "Americas", Some("North America")),
        ];
        assert_eq!(plan.refine(all.clone()), all);
    }

    #[test]
    fn test_single_query_plans_do_not_refine() {
        let all = vec![
            country("FR", "France", "Europe", Some("Western Europe")),
            country("JP", "Japan", "Asia", Some("Eastern Asia")),
        ];
        assert_eq!(plan("", "Europe", "").refine(all.clone()), all);
    }
}
