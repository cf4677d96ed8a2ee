//! Filtering of the school list and lookups derived from the catalog.
//! Everything here is a pure function of its inputs and is recomputed on every change.
use crate::models::review::Review;
use crate::models::school::{School, SchoolId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Option value the state and city selects use for "no restriction".
pub const ALL_OPTION: &str = "all";

/// Exact-match restriction on a text field of a school.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldFilter {
    #[default]
    Any,
    Exactly(String),
}

impl FieldFilter {
    /// Maps a select option value to a filter; `"all"` means no restriction.
    pub fn from_option_value(value: &str) -> Self {
        if value == ALL_OPTION {
            FieldFilter::Any
        } else {
            FieldFilter::Exactly(value.to_string())
        }
    }

    pub fn option_value(&self) -> &str {
        match self {
            FieldFilter::Any => ALL_OPTION,
            FieldFilter::Exactly(value) => value,
        }
    }

    // Case-sensitive on purpose: state codes and city names are compared as stored.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFilter::Any => true,
            FieldFilter::Exactly(expected) => expected == value,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SchoolFilters {
    pub state: FieldFilter,
    pub city: FieldFilter,
    /// Maximum yearly fee as typed; empty means no ceiling.
    pub fees: String,
}

impl SchoolFilters {
    fn fee_matches(&self, fees: u64) -> bool {
        if self.fees.is_empty() {
            return true;
        }
        // A ceiling that is not a number matches nothing.
        match parse_leading_int(&self.fees) {
            Some(ceiling) => i128::from(fees) <= i128::from(ceiling),
            None => false,
        }
    }
}

/// Search text plus the discrete filters, i.e. everything the list view is narrowed by.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SchoolQuery {
    pub search_term: String,
    pub filters: SchoolFilters,
}

/// Text fields of a school that filter options are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchoolField {
    State,
    City,
}

impl SchoolField {
    fn value(self, school: &School) -> &str {
        match self {
            SchoolField::State => &school.state,
            SchoolField::City => &school.city,
        }
    }
}

/// Schools matching the search term and every filter, in catalog order.
pub fn filter_schools<'a>(
    schools: &'a [School],
    search_term: &str,
    filters: &SchoolFilters,
) -> Vec<&'a School> {
    let needle = search_term.to_lowercase();
    schools
        .iter()
        .filter(|school| school.name.to_lowercase().contains(&needle))
        .filter(|school| filters.state.matches(&school.state))
        .filter(|school| filters.city.matches(&school.city))
        .filter(|school| filters.fee_matches(school.fees))
        .collect()
}

/// Reviews written about one school, in the order they were submitted.
pub fn reviews_for_school(reviews: &[Review], school_id: SchoolId) -> Vec<&Review> {
    reviews
        .iter()
        .filter(|review| review.school_id == school_id)
        .collect()
}

/// Each distinct value of `field` once, in order of first appearance.
pub fn distinct_values(schools: &[School], field: SchoolField) -> Vec<String> {
    let mut seen = HashSet::new();
    schools
        .iter()
        .map(|school| field.value(school))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Reads the integer at the start of `input`: leading whitespace, an optional sign,
/// then decimal digits. Anything after the digits is ignored. Returns `None` when no
/// digit follows, which callers treat as "not a number".
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    // Values too large for i64 saturate; they still compare correctly against any fee.
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::ReviewId;

    fn school(id: u32, name: &str, state: &str, city: &str, fees: u64) -> School {
        School::unrated(SchoolId(id), name.into(), state.into(), city.into(), fees)
    }

    fn review(id: u32, school_id: u32, author: &str) -> Review {
        Review {
            id: ReviewId(id),
            school_id: SchoolId(school_id),
            author: author.into(),
            grade: "5th".into(),
            division: "A".into(),
            rating: 4,
            comment: "Fine".into(),
        }
    }

    fn sample() -> Vec<School> {
        vec![
            school(1, "Springfield Elementary", "IL", "Springfield", 5000),
            school(2, "Shelbyville High", "IL", "Shelbyville", 7000),
            school(3, "Capital City Academy", "OR", "Capital City", 12000),
            school(4, "Springfield Prep", "OR", "Springfield", 9000),
        ]
    }

    fn ids(found: &[&School]) -> Vec<u32> {
        found.iter().map(|s| s.id.0).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let schools = sample();
        let found = filter_schools(&schools, "", &SchoolFilters::default());
        assert_eq!(ids(&found), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let schools = sample();
        assert_eq!(ids(&filter_schools(&schools, "SPRING", &SchoolFilters::default())), vec![1, 4]);
        assert_eq!(ids(&filter_schools(&schools, "ville h", &SchoolFilters::default())), vec![2]);
        for s in &schools {
            let found = filter_schools(std::slice::from_ref(s), &s.name.to_uppercase(), &SchoolFilters::default());
            assert_eq!(found.len(), 1);
        }
    }

    #[test]
    fn state_and_city_match_exactly() {
        let schools = sample();
        let filters = SchoolFilters {
            state: FieldFilter::Exactly("OR".into()),
            ..SchoolFilters::default()
        };
        assert_eq!(ids(&filter_schools(&schools, "", &filters)), vec![3, 4]);

        let filters = SchoolFilters {
            state: FieldFilter::Exactly("OR".into()),
            city: FieldFilter::Exactly("Springfield".into()),
            ..SchoolFilters::default()
        };
        assert_eq!(ids(&filter_schools(&schools, "", &filters)), vec![4]);

        let lowercase = SchoolFilters {
            state: FieldFilter::Exactly("il".into()),
            ..SchoolFilters::default()
        };
        assert!(filter_schools(&schools, "", &lowercase).is_empty());
    }

    #[test]
    fn fee_ceiling_is_inclusive() {
        let schools = sample();
        let filters = SchoolFilters {
            fees: "7000".into(),
            ..SchoolFilters::default()
        };
        assert_eq!(ids(&filter_schools(&schools, "", &filters)), vec![1, 2]);
    }

    #[test]
    fn non_numeric_fee_ceiling_matches_nothing() {
        let schools = sample();
        for fees in ["abc", "-", " ", "$5000"] {
            let filters = SchoolFilters {
                fees: fees.into(),
                ..SchoolFilters::default()
            };
            assert!(filter_schools(&schools, "", &filters).is_empty(), "fees = {fees:?}");
        }
    }

    #[test]
    fn springfield_scenario() {
        let catalog = vec![school(1, "Springfield Elementary", "IL", "Springfield", 5000)];
        let mut filters = SchoolFilters {
            fees: "4000".into(),
            ..SchoolFilters::default()
        };
        assert!(filter_schools(&catalog, "spring", &filters).is_empty());

        filters.fees = "6000".into();
        assert_eq!(ids(&filter_schools(&catalog, "spring", &filters)), vec![1]);
    }

    #[test]
    fn reviews_are_selected_by_school_in_append_order() {
        let reviews = vec![review(1, 1, "John D."), review(2, 2, "Amy"), review(3, 1, "Jane")];
        let authors: Vec<_> = reviews_for_school(&reviews, SchoolId(1))
            .iter()
            .map(|r| r.author.as_str())
            .collect();
        assert_eq!(authors, vec!["John D.", "Jane"]);
        assert!(reviews_for_school(&reviews, SchoolId(42)).is_empty());
    }

    #[test]
    fn distinct_values_keep_first_appearance() {
        let schools = sample();
        assert_eq!(distinct_values(&schools, SchoolField::State), vec!["IL", "OR"]);
        assert_eq!(
            distinct_values(&schools, SchoolField::City),
            vec!["Springfield", "Shelbyville", "Capital City"]
        );
        assert!(distinct_values(&[], SchoolField::City).is_empty());
    }

    #[test]
    fn option_values_round_trip_through_the_sentinel() {
        assert_eq!(FieldFilter::from_option_value("all"), FieldFilter::Any);
        assert_eq!(FieldFilter::from_option_value("IL"), FieldFilter::Exactly("IL".into()));
        assert_eq!(FieldFilter::Any.option_value(), "all");
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("6000"), Some(6000));
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("12.9"), Some(12));
        assert_eq!(parse_leading_int("4000abc"), Some(4000));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("--1"), None);
    }
}
