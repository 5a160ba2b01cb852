use crate::domain::a001_country::aggregate::Country;

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Distinct non-empty regions, in first-seen order.
pub fn distinct_regions(countries: &[Country]) -> Vec<String> {
    distinct(countries.iter().map(|c| c.region.as_str()))
}

/// Distinct non-empty subregions among countries in `region`, or among all
/// countries when no region is given.
pub fn distinct_subregions(countries: &[Country], region: Option<&str>) -> Vec<String> {
    distinct(
        countries
            .iter()
            .filter(|c| region.map_or(true, |r| c.is_in_region(r)))
            .filter_map(|c| c.subregion.as_deref()),
    )
}
