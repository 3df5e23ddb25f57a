//! # List Query Parser
//!
//! Parses the query string of the list operation into filters and a page
//! window.

use std::collections::HashMap;
use std::ops::Range;

use super::airport::Airport;

/// Page returned when none is requested
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when none is requested
pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// Parsed list parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    /// Exact-match city filter
    pub city: Option<String>,

    /// Exact-match country filter
    pub country: Option<String>,

    /// 1-based page number; `None` when the given value is unusable
    pub page: Option<u64>,

    /// Records per page; `None` when the given value is unusable
    pub page_size: Option<u64>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            city: None,
            country: None,
            page: Some(DEFAULT_PAGE),
            page_size: Some(DEFAULT_PAGE_SIZE),
        }
    }
}

impl ListParams {
    /// Parse query parameters from a HashMap
    ///
    /// Empty values count as not given. Unknown keys are ignored. A page or
    /// page size that is not a positive integer can never select anything,
    /// so it is kept as `None` and the query yields an empty page.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let mut result = Self::default();

        for (key, value) in params {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "city" => result.city = Some(value.clone()),
                "country" => result.country = Some(value.clone()),
                "page" => result.page = parse_positive(value),
                "pageSize" => result.page_size = parse_positive(value),
                _ => {}
            }
        }

        result
    }

    /// Builder-style city filter
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Builder-style country filter
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Builder-style page window
    pub fn with_page(mut self, page: u64, page_size: u64) -> Self {
        self.page = Some(page).filter(|p| *p > 0);
        self.page_size = Some(page_size).filter(|s| *s > 0);
        self
    }

    /// Whether a record passes every given filter
    pub fn matches(&self, airport: &Airport) -> bool {
        self.city.as_ref().map_or(true, |c| airport.city == *c)
            && self.country.as_ref().map_or(true, |c| airport.country == *c)
    }

    /// Index window `[(page-1)*pageSize, page*pageSize)` over the filtered
    /// records. Saturates instead of overflowing.
    pub fn window(&self) -> Option<Range<usize>> {
        let (page, size) = (self.page?, self.page_size?);
        let start = (page - 1).saturating_mul(size);
        let end = page.saturating_mul(size);
        Some(to_index(start)..to_index(end))
    }

    /// Filter then slice a record set
    pub fn apply<'a>(&self, records: &'a [Airport]) -> Vec<&'a Airport> {
        let Some(window) = self.window() else {
            return Vec::new();
        };
        records
            .iter()
            .filter(|a| self.matches(a))
            .skip(window.start)
            .take(window.end - window.start)
            .collect()
    }
}

fn parse_positive(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|v| *v > 0)
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let params = ListParams::parse(&HashMap::new());
        assert_eq!(params, ListParams::default());
        assert_eq!(params.window(), Some(0..25));
    }

    #[test]
    fn test_parse_all_fields() {
        let params = ListParams::parse(&query(&[
            ("city", "Moscow"),
            ("country", "RU"),
            ("page", "3"),
            ("pageSize", "10"),
            ("order", "name"),
        ]));

        assert_eq!(params.city.as_deref(), Some("Moscow"));
        assert_eq!(params.country.as_deref(), Some("RU"));
        assert_eq!(params.window(), Some(20..30));
    }

    #[test]
    fn test_empty_values_mean_default() {
        let params = ListParams::parse(&query(&[("city", ""), ("page", ""), ("pageSize", "")]));
        assert_eq!(params, ListParams::default());
    }

    #[test]
    fn test_unusable_page_selects_nothing() {
        for bad in ["0", "-1", "abc", "1.5"] {
            let params = ListParams::parse(&query(&[("page", bad)]));
            assert_eq!(params.window(), None, "page={}", bad);
            let params = ListParams::parse(&query(&[("pageSize", bad)]));
            assert_eq!(params.window(), None, "pageSize={}", bad);
        }
    }

    #[test]
    fn test_window_saturates() {
        let params = ListParams::default().with_page(u64::MAX, u64::MAX);
        let window = params.window().unwrap();
        assert_eq!(window.end, usize::MAX);
    }

    #[test]
    fn test_apply_filters_and_slices() {
        let records = vec![
            Airport {
                country: "RU".to_string(),
                ..Airport::new("UUEE", "Sheremetyevo", "Moscow")
            },
            Airport {
                country: "RU".to_string(),
                ..Airport::new("UUOO", "Voronezh", "Voronezh")
            },
            Airport {
                country: "RU".to_string(),
                ..Airport::new("UUDD", "Domodedovo", "Moscow")
            },
            Airport {
                country: "US".to_string(),
                ..Airport::new("KMOS", "Fake", "Moscow")
            },
        ];

        let page = ListParams::default()
            .with_city("Moscow")
            .with_country("RU")
            .apply(&records);
        let codes: Vec<_> = page.iter().map(|a| a.icao.as_str()).collect();
        assert_eq!(codes, vec!["UUEE", "UUDD"]);

        let page = ListParams::default().with_city("Moscow").with_page(2, 2).apply(&records);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].icao, "KMOS");

        assert!(ListParams::default().with_page(3, 2).apply(&records).is_empty());
    }
}
