//! Request construction for the country-data API.

use crate::domain::Query;

/// Default endpoint: REST Countries v2 name search.
pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v2/name";

/// Fields requested from the API, matching what [`crate::domain::CountryRecord`] reads.
const RESPONSE_FIELDS: &str = "name,capital,population,flags,languages,alpha2Code";

/// Context key carrying the request generation through the host round-trip.
pub const CONTEXT_GENERATION: &str = "generation";

/// Context key carrying the query text, for logging only.
pub const CONTEXT_QUERY: &str = "query";

/// Builds the name-search URL for a validated query.
///
/// The query becomes one percent-encoded path segment. Trailing slashes on
/// `base_url` are ignored.
///
/// # Examples
///
/// ```
/// use zcountry::api::search_url;
/// use zcountry::domain::Query;
///
/// let query = Query::parse("peru").unwrap().unwrap();
/// assert_eq!(
///     search_url("https://restcountries.com/v2/name/", &query),
///     "https://restcountries.com/v2/name/peru?fields=name,capital,population,flags,languages,alpha2Code"
/// );
/// ```
#[must_use]
pub fn search_url(base_url: &str, query: &Query) -> String {
    format!(
        "{}/{}?fields={RESPONSE_FIELDS}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query.as_str())
    )
}

/// Reads the request generation back out of a web request context map.
///
/// Returns `None` for responses that did not originate from a country fetch.
#[must_use]
pub fn generation_from_context(context: &std::collections::BTreeMap<String, String>) -> Option<u64> {
    context.get(CONTEXT_GENERATION)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_search_url_encodes_spaces() {
        let query = Query::parse("united kingdom").unwrap().unwrap();
        let url = search_url(DEFAULT_API_BASE_URL, &query);
        assert!(url.starts_with("https://restcountries.com/v2/name/united%20kingdom?"));
        assert!(url.ends_with("fields=name,capital,population,flags,languages,alpha2Code"));
    }

    #[test]
    fn test_search_url_encodes_inner_whitespace_as_one_segment() {
        let query = Query::parse("south  africa").unwrap().unwrap();
        assert!(search_url(DEFAULT_API_BASE_URL, &query).contains("/name/south%20%20africa?"));

        let tabbed = Query::parse("a\tb").unwrap().unwrap();
        assert!(search_url("http://localhost/v2/name/", &tabbed).starts_with("http://localhost/v2/name/a%09b?"));
    }

    #[test]
    fn test_generation_round_trip_through_context() {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_GENERATION.to_string(), "42".to_string());
        assert_eq!(generation_from_context(&context), Some(42));

        context.insert(CONTEXT_GENERATION.to_string(), "x".to_string());
        assert_eq!(generation_from_context(&context), None);
        assert_eq!(generation_from_context(&BTreeMap::new()), None);
    }
}
