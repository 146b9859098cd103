//! Response decoding for the country-data API.
//!
//! The host hands back a raw status code and body. [`decode_search_response`]
//! turns that into a non-empty `SearchResult` or a typed failure; the "no
//! matches" case is always a failure, never an empty success.

use crate::domain::error::{CountryLookupError, Result};
use crate::domain::CountryRecord;
use serde::Deserialize;

/// Error document the API returns instead of an array.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    status: u16,
    #[serde(default)]
    message: Option<String>,
}

/// Decodes a name-search response.
///
/// # Errors
///
/// - [`CountryLookupError::NotFound`] for status 404, an error document with
///   status 404, or an empty array
/// - [`CountryLookupError::Http`] for any other non-2xx status or error document
/// - [`CountryLookupError::Decode`] when a 2xx body is not a country array
pub fn decode_search_response(status: u16, body: &[u8]) -> Result<Vec<CountryRecord>> {
    if status == 404 {
        return Err(CountryLookupError::NotFound);
    }
    if !(200..300).contains(&status) {
        return Err(CountryLookupError::Http { status });
    }

    match serde_json::from_slice::<Vec<CountryRecord>>(body) {
        Ok(records) if records.is_empty() => Err(CountryLookupError::NotFound),
        Ok(records) => Ok(records),
        Err(decode_error) => match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(api_error) => {
                tracing::debug!(
                    status = api_error.status,
                    message = ?api_error.message,
                    "api returned an error document"
                );
                if api_error.status == 404 {
                    Err(CountryLookupError::NotFound)
                } else {
                    Err(CountryLookupError::Http { status: api_error.status })
                }
            }
            Err(_) => Err(decode_error.into()),
        },
    }
}
