//! Validated search query.
//!
//! The country API is only ever asked about names made of ASCII letters and
//! whitespace. [`Query::parse`] enforces that rule and trims the surrounding
//! whitespace so that a field holding only spaces counts as empty.

use super::error::{CountryLookupError, Result};

/// A validated, trimmed, non-empty country name fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Validates raw field text.
    ///
    /// Returns `Ok(None)` when the text is empty after trimming: the caller
    /// clears its output and skips the fetch.
    ///
    /// # Errors
    ///
    /// Returns [`CountryLookupError::InvalidQuery`] with the first character
    /// that is neither an ASCII letter nor whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcountry::domain::Query;
    ///
    /// let query = Query::parse("  new zealand ").unwrap().unwrap();
    /// assert_eq!(query.as_str(), "new zealand");
    /// assert!(Query::parse("   ").unwrap().is_none());
    /// assert!(Query::parse("p3ru").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphabetic() || c.is_whitespace()))
        {
            return Err(CountryLookupError::InvalidQuery(bad));
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self(trimmed.to_string())))
    }

    /// Returns the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_spaces_are_valid() {
        let query = Query::parse("United States").unwrap().unwrap();
        assert_eq!(query.as_str(), "United States");
    }

    #[test]
    fn test_digits_and_punctuation_are_rejected() {
        for raw in ["peru1", "côte", "a-b", "fr.", "9", "s?"] {
            assert!(
                matches!(Query::parse(raw), Err(CountryLookupError::InvalidQuery(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_reports_first_offending_character() {
        match Query::parse("ab,c1") {
            Err(CountryLookupError::InvalidQuery(c)) => assert_eq!(c, ','),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_and_blank_are_none() {
        assert!(Query::parse("").unwrap().is_none());
        assert!(Query::parse(" \t ").unwrap().is_none());
    }
}
