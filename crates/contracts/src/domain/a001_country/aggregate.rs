use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder rendered for any missing optional field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fallback image when the upstream record carries no png flag.
pub const FLAG_PLACEHOLDER: &str = "/placeholder.svg";

/// Field projection requested by the full-catalog call.
pub const CATALOG_FIELDS: &[&str] = &[
    "name",
    "population",
    "region",
    "languages",
    "flags",
    "currencies",
    "subregion",
    "timezones",
    "capital",
    "cca2",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Country record as served by the upstream source.
///
/// `cca2` is the identity used for routing, favorites and list keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub cca2: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub timezones: Vec<String>,
}

impl Country {
    pub fn code(&self) -> &str {
        &self.cca2
    }

    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// Official name, only when it adds something over the common one.
    pub fn distinct_official_name(&self) -> Option<&str> {
        let official = self.name.official.as_str();
        if official.is_empty() || official == self.name.common {
            None
        } else {
            Some(official)
        }
    }

    pub fn is_in_region(&self, region: &str) -> bool {
        self.region == region
    }

    pub fn is_in_subregion(&self, subregion: &str) -> bool {
        self.subregion.as_deref() == Some(subregion)
    }

    pub fn capital_label(&self) -> &str {
        self.capital
            .first()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn region_label(&self) -> &str {
        if self.region.is_empty() {
            NOT_AVAILABLE
        } else {
            &self.region
        }
    }

    pub fn subregion_label(&self) -> &str {
        self.subregion
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn languages_label(&self) -> String {
        if self.languages.is_empty() {
            return NOT_AVAILABLE.to_string();
        }
        self.languages
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn currencies_label(&self) -> String {
        if self.currencies.is_empty() {
            return NOT_AVAILABLE.to_string();
        }
        self.currencies
            .values()
            .map(|c| {
                let symbol = c
                    .symbol
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .unwrap_or("No symbol");
                format!("{} ({})", c.name, symbol)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Grouped population, or the placeholder when upstream reports none.
    pub fn population_label(&self) -> String {
        if self.population == 0 {
            return NOT_AVAILABLE.to_string();
        }
        group_thousands(self.population)
    }

    pub fn flag_png(&self) -> &str {
        self.flags
            .png
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(FLAG_PLACEHOLDER)
    }

    pub fn flag_svg(&self) -> Option<&str> {
        self.flags.svg.as_deref().filter(|s| !s.is_empty())
    }

    pub fn flag_alt(&self) -> String {
        self.flags
            .alt
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("Flag of {}", self.name.common))
    }
}

/// Groups the digits of `value` in threes with `,`, e.g. `5530719` -> `"5,530,719"`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}


#[cfg(test)]
mod tests {
    use super::*;

    const FRANCE_JSON: &str = r#"{
        "name": {"common": "France", "official": "French Republic", "nativeName": {"fra": {"official": "République française", "common": "France"}}},
        "cca2": "FR",
        "region": "Europe",
        "subregion": "Western Europe",
        "population": 67391582,
        "capital": ["Paris"],
        "languages": {"fra": "French"},
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg", "alt": "The flag of France"},
        "timezones": ["UTC-10:00", "UTC+01:00"]
    }"#;

    #[test]
    fn test_decode_full_record() {
        let france: Country = serde_json::from_str(FRANCE_JSON).unwrap();
        assert_eq!(france.code(), "FR");
        assert_eq!(france.capital_label(), "Paris");
        assert_eq!(france.subregion_label(), "Western Europe");
        assert_eq!(france.languages_label(), "French");
        assert_eq!(france.currencies_label(), "Euro (€)");
        assert_eq!(france.distinct_official_name(), Some("French Republic"));
        assert_eq!(france.flag_svg(), Some("https://flagcdn.com/fr.svg"));
        assert_eq!(france.timezones.len(), 2);
    }

    #[test]
    fn test_missing_optional_fields_render_placeholder() {
        let raw = r#"{"name": {"common": "Antarctica"}, "cca2": "AQ", "region": "Antarctic"}"#;
        let aq: Country = serde_json::from_str(raw).unwrap();
        assert_eq!(aq.capital_label(), NOT_AVAILABLE);
        assert_eq!(aq.subregion_label(), NOT_AVAILABLE);
        assert_eq!(aq.languages_label(), NOT_AVAILABLE);
        assert_eq!(aq.currencies_label(), NOT_AVAILABLE);
        assert_eq!(aq.flag_png(), FLAG_PLACEHOLDER);
        assert_eq!(aq.flag_alt(), "Flag of Antarctica");
        assert_eq!(aq.distinct_official_name(), None);
        assert_eq!(aq.population, 0);
        assert_eq!(aq.population_label(), NOT_AVAILABLE);

        let mut cn = aq.clone();
        cn.population = 1_402_112_000;
        assert_eq!(cn.population_label(), "1,402,112,000");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_345), "12,345");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn test_currency_without_symbol() {
        let raw = r#"{"name": {"common": "X"}, "cca2": "XX",
            "currencies": {"AAA": {"name": "Alpha"}, "BBB": {"name": "Beta", "symbol": "β"}}}"#;
        let c: Country = serde_json::from_str(raw).unwrap();
        assert_eq!(c.currencies_label(), "Alpha (No symbol), Beta (β)");
    }

    #[test]
    fn test_region_membership() {
        let c = fixtures::country("IE", "Ireland", "Europe", Some("Northern Europe"));
        assert!(c.is_in_region("Europe"));
        assert!(!c.is_in_region("Asia"));
        assert!(c.is_in_subregion("Northern Europe"));
        assert!(!c.is_in_subregion("Western Europe"));
    }
}
