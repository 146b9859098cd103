//! Render policy: which view a search result produces.

use crate::domain::CountryRecord;

/// Default upper bound on the number of countries shown as a list.
pub const DEFAULT_MAX_LIST_ITEMS: usize = 10;

/// What to write into the output regions for a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan {
    /// Nothing matched. Treated like a failed lookup.
    NoMatches,
    /// Exactly one match: show its detail panel directly.
    Detail(CountryRecord),
    /// A short list of matches to choose from.
    List(Vec<CountryRecord>),
    /// Too many matches to list; the user should narrow the query.
    TooMany { count: usize },
}

/// Classifies a search result by its length.
///
/// `max_list_items` is the largest result still rendered as a list. The
/// result is consumed so the chosen records move straight into the regions.
#[must_use]
pub fn classify(mut records: Vec<CountryRecord>, max_list_items: usize) -> RenderPlan {
    match records.len() {
        0 => RenderPlan::NoMatches,
        1 => records.pop().map_or(RenderPlan::NoMatches, RenderPlan::Detail),
        count if count > max_list_items => RenderPlan::TooMany { count },
        _ => RenderPlan::List(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<CountryRecord> {
        (0..count).map(|i| CountryRecord::new(format!("Country {i}"))).collect()
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(records(0), 10), RenderPlan::NoMatches);
        assert!(matches!(classify(records(1), 10), RenderPlan::Detail(r) if r.name == "Country 0"));
        assert!(matches!(classify(records(2), 10), RenderPlan::List(l) if l.len() == 2));
        assert!(matches!(classify(records(10), 10), RenderPlan::List(l) if l.len() == 10));
        assert_eq!(classify(records(11), 10), RenderPlan::TooMany { count: 11 });
    }

    #[test]
    fn test_custom_limit() {
        assert_eq!(classify(records(4), 3), RenderPlan::TooMany { count: 4 });
    }

    #[test]
    fn test_list_preserves_order() {
        let RenderPlan::List(list) = classify(records(3), 10) else {
            panic!("expected a list");
        };
        let names: Vec<_> = list.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Country 0", "Country 1", "Country 2"]);
    }
}
