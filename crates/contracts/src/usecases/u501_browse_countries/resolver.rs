use log::debug;

use crate::domain::a001_country::{Country, CountrySource};
use crate::shared::error::AppResult;
use crate::shared::filter::options::distinct_subregions;
use crate::shared::filter::{FilterPlan, UpstreamQuery};

/// Runs the plan's single upstream query and applies its local criteria.
///
/// The upstream answers "no matches" on the search endpoints with 404, which
/// is an empty listing rather than a failure.
pub async fn resolve<S>(source: &S, plan: &FilterPlan) -> AppResult<Vec<Country>>
where
    S: CountrySource + ?Sized,
{
    debug!("resolving listing with {} plan", plan.label());

    let fetched = match plan.query() {
        UpstreamQuery::All => source.fetch_all().await,
        UpstreamQuery::Name(term) => source.search_by_name(term).await,
        UpstreamQuery::Region(region) => source.search_by_region(region).await,
        UpstreamQuery::Subregion(subregion) => source.search_by_subregion(subregion).await,
    };

    let countries = match fetched {
        Ok(countries) => countries,
        Err(err) if err.is_not_found() && plan.query() != UpstreamQuery::All => {
            debug!("no upstream matches: {err}");
            Vec::new()
        }
        Err(err) => return Err(err),
    };

    Ok(plan.refine(countries))
}

/// Subregion choices offered once `region` is selected.
pub async fn region_subregions<S>(source: &S, region: &str) -> AppResult<Vec<String>>
where
    S: CountrySource + ?Sized,
{
    match source.search_by_region(region).await {
        Ok(countries) => Ok(distinct_subregions(&countries, Some(region))),
        Err(err) if err.is_not_found() => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AppError;
    use crate::shared::filter::FilterState;
    use crate::usecases::u501_browse_countries::fake_source::{DownSource, FakeSource};
    use futures::executor::block_on;

    fn run(source: &FakeSource, term: &str, region: &str, subregion: &str) -> Vec<String> {
        let plan = FilterPlan::from_state(&FilterState::new(term, region, subregion));
        block_on(resolve(source, &plan))
            .unwrap()
            .into_iter()
            .map(|c| c.cca2)
            .collect()
    }

    #[test]
    fn test_single_criterion_issues_exactly_one_call() {
        let cases = [
            (("land", "", ""), "name:land"),
            (("", "Europe", ""), "region:Europe"),
            (("", "", "Eastern Asia"), "subregion:Eastern Asia"),
        ];
        for ((term, region, subregion), expected) in cases {
            let source = FakeSource::world();
            run(&source, term, region, subregion);
            assert_eq!(source.calls(), [expected]);
        }
    }

    #[test]
    fn test_no_filter_fetches_catalog() {
        let source = FakeSource::world();
        assert_eq!(run(&source, "", "", "").len(), 10);
        assert_eq!(source.calls(), ["all"]);
    }

    #[test]
    fn test_land_in_europe() {
        let source = FakeSource::world();
        let codes = run(&source, "land", "Europe", "");
        assert_eq!(source.calls(), ["name:land"]);
        assert_eq!(codes, ["FI", "IE", "IS", "PL"]);
    }

    #[test]
    fn test_name_region_and_subregion() {
        let source = FakeSource::world();
        let codes = run(&source, "land", "Europe", "Central Europe");
        assert_eq!(source.calls(), ["name:land"]);
        assert_eq!(codes, ["PL"]);
    }

    #[test]
    fn test_region_and_subregion_without_search_uses_subregion_call() {
        let source = FakeSource::world();
        let codes = run(&source, "", "Europe", "Western Europe");
        assert_eq!(source.calls(), ["subregion:Western Europe"]);
        assert_eq!(codes, ["FR"]);
    }

    #[test]
    fn test_search_with_unscoped_subregion_fetches_catalog() {
        let source = FakeSource::world();
        let codes = run(&source, "a", "", "Eastern Africa");
        assert_eq!(source.calls(), ["all"]);
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn test_upstream_no_match_is_empty_listing() {
        let source = FakeSource::world();
        assert!(run(&source, "zzz", "", "").is_empty());
    }

    #[test]
    fn test_network_failure_propagates() {
        let plan = FilterPlan::RegionOnly {
            region: "Asia".into(),
        };
        let err = block_on(resolve(&DownSource, &plan)).unwrap_err();
        assert_eq!(err, AppError::network("Request failed: 503"));
    }

    #[test]
    fn test_region_subregions() {
        let source = FakeSource::world();
        let options = block_on(region_subregions(&source, "Africa")).unwrap();
        assert_eq!(options, ["Western Africa", "Eastern Africa"]);
        assert_eq!(source.calls(), ["region:Africa"]);
        assert!(block_on(region_subregions(&source, "Atlantis"))
            .unwrap()
            .is_empty());
    }
}
