use super::aggregate::CATALOG_FIELDS;

/// Upstream country-data endpoints, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    All,
    Alpha(String),
    Name(String),
    Region(String),
    Subregion(String),
}

impl Endpoint {
    /// Relative path with percent-encoded segments, e.g. `/region/Europe`.
    pub fn path(&self) -> String {
        match self {
            Endpoint::All => format!("/all?fields={}", CATALOG_FIELDS.join(",")),
            Endpoint::Alpha(code) => format!("/alpha/{}", urlencoding::encode(code)),
            Endpoint::Name(term) => format!("/name/{}", urlencoding::encode(term)),
            Endpoint::Region(region) => format!("/region/{}", urlencoding::encode(region)),
            Endpoint::Subregion(subregion) => {
                format!("/subregion/{}", urlencoding::encode(subregion))
            }
        }
    }

    /// Joins the path onto a base URL, tolerating a trailing slash on the base.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}
