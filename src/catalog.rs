use crate::error::CatalogError;
use crate::filter::{filter_schools, SchoolQuery};
use crate::models::review::{NewReview, Review, ReviewId};
use crate::models::school::{NewSchool, School, SchoolId};
use crate::seed;
use leptos::logging::{log, warn};
use serde::{Deserialize, Serialize};

/// In-memory store of every school and review in the session.
///
/// Ids come from counters that only move forward, so they stay unique no matter
/// how the lists change. A counter that has handed out `u32::MAX` is exhausted.
/// Review submissions do not touch the school's aggregate rating fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    schools: Vec<School>,
    reviews: Vec<Review>,
    next_school_id: Option<u32>,
    next_review_id: Option<u32>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            schools: Vec::new(),
            reviews: Vec::new(),
            next_school_id: Some(1),
            next_review_id: Some(1),
        }
    }

    /// Builds a catalog from existing records. New ids continue after the highest id present.
    pub fn with_records(schools: Vec<School>, reviews: Vec<Review>) -> Self {
        let next_school_id = schools.iter().map(|s| s.id.0).max().map_or(Some(1), |max| max.checked_add(1));
        let next_review_id = reviews.iter().map(|r| r.id.0).max().map_or(Some(1), |max| max.checked_add(1));
        Self {
            schools,
            reviews,
            next_school_id,
            next_review_id,
        }
    }

    /// The mock catalog a session starts with.
    pub fn seeded() -> Self {
        Self::with_records(seed::schools(), seed::reviews())
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn school(&self, id: SchoolId) -> Option<&School> {
        self.schools.iter().find(|school| school.id == id)
    }

    pub fn filtered(&self, query: &SchoolQuery) -> Vec<&School> {
        filter_schools(&self.schools, &query.search_term, &query.filters)
    }

    /// Lists a new school with zeroed ratings and returns a copy of it.
    pub fn add_school(&mut self, request: NewSchool) -> Result<School, CatalogError> {
        let validated = validate_school(request).inspect_err(|err| {
            warn!("[CATALOG] Rejected new school: {}", err);
        })?;
        let (name, state, city, fees) = validated;

        let next = self.next_school_id.ok_or(CatalogError::IdsExhausted("school"))?;
        let id = SchoolId(next);
        self.next_school_id = next.checked_add(1);

        let school = School::unrated(id, name, state, city, fees);
        log!("[CATALOG] Added school {} ({})", school.id, school.name);
        self.schools.push(school.clone());
        Ok(school)
    }

    /// Appends a review for an existing school and returns a copy of it.
    pub fn add_review(&mut self, school_id: SchoolId, request: NewReview) -> Result<Review, CatalogError> {
        if self.school(school_id).is_none() {
            warn!("[CATALOG] Review submitted for unknown school {}", school_id);
            return Err(CatalogError::UnknownSchool(school_id));
        }
        let request = validate_review(request).inspect_err(|err| {
            warn!("[CATALOG] Rejected review for school {}: {}", school_id, err);
        })?;

        let next = self.next_review_id.ok_or(CatalogError::IdsExhausted("review"))?;
        let id = ReviewId(next);
        self.next_review_id = next.checked_add(1);

        let review = Review {
            id,
            school_id,
            author: request.author,
            grade: request.grade,
            division: request.division,
            rating: request.rating,
            comment: request.comment,
        };
        log!("[CATALOG] Added review {} for school {}", review.id.0, school_id);
        self.reviews.push(review.clone());
        Ok(review)
    }
}

fn required(field: &'static str, value: String) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::required(field));
    }
    Ok(trimmed.to_string())
}

fn validate_school(request: NewSchool) -> Result<(String, String, String, u64), CatalogError> {
    let name = required("name", request.name)?;
    let state = required("state", request.state)?;
    let city = required("city", request.city)?;
    let fees_text = required("fees", request.fees)?;
    let fees = fees_text
        .parse::<u64>()
        .map_err(|_| CatalogError::InvalidInput {
            field: "fees",
            reason: format!("'{}' is not a whole, non-negative amount", fees_text),
        })?;
    Ok((name, state, city, fees))
}

fn validate_review(request: NewReview) -> Result<NewReview, CatalogError> {
    let author = required("author", request.author)?;
    let grade = required("grade", request.grade)?;
    let division = required("division", request.division)?;
    if !(1..=5).contains(&request.rating) {
        return Err(CatalogError::InvalidInput {
            field: "rating",
            reason: format!("{} is outside 1-5", request.rating),
        });
    }
    let comment = required("comment", request.comment)?;
    Ok(NewReview {
        author,
        grade,
        division,
        rating: request.rating,
        comment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{distinct_values, reviews_for_school, SchoolField};

    fn new_school(name: &str, state: &str, city: &str, fees: &str) -> NewSchool {
        NewSchool {
            name: name.into(),
            state: state.into(),
            city: city.into(),
            fees: fees.into(),
        }
    }

    fn new_review(author: &str, rating: u8) -> NewReview {
        NewReview {
            author: author.into(),
            grade: "5th".into(),
            division: "B".into(),
            rating,
            comment: "Great".into(),
        }
    }

    #[test]
    fn add_school_assigns_increasing_ids_and_zero_ratings() {
        let mut catalog = Catalog::new();
        let first = catalog.add_school(new_school("Springfield Elementary", "IL", "Springfield", "5000")).unwrap();
        let second = catalog.add_school(new_school("Shelbyville High", "IL", "Shelbyville", "7000")).unwrap();

        assert_eq!(first.id, SchoolId(1));
        assert_eq!(second.id, SchoolId(2));
        assert_eq!(second.fees, 7000);
        assert_eq!(second.avg_rating, 0.0);
        assert_eq!(catalog.schools().len(), 2);
        assert_eq!(catalog.school(SchoolId(2)), Some(&second));
    }

    #[test]
    fn ids_continue_after_existing_records() {
        let mut catalog = Catalog::seeded();
        let highest = catalog.schools().iter().map(|s| s.id).max().unwrap();
        let added = catalog.add_school(new_school("New School", "TX", "Austin", "100")).unwrap();
        assert!(added.id > highest);
    }

    #[test]
    fn exhausted_id_counter_is_an_error_not_an_overflow() {
        let last = School::unrated(SchoolId(u32::MAX), "Last".into(), "IL".into(), "Springfield".into(), 1);
        let mut catalog = Catalog::with_records(vec![last], Vec::new());

        let err = catalog.add_school(new_school("One More", "IL", "Springfield", "1")).unwrap_err();
        assert_eq!(err, CatalogError::IdsExhausted("school"));
        assert_eq!(catalog.schools().len(), 1);

        // The review counter is independent of the school counter.
        let review = catalog.add_review(SchoolId(u32::MAX), new_review("Jane", 4)).unwrap();
        assert_eq!(review.id, ReviewId(1));
    }

    #[test]
    fn add_school_trims_input() {
        let mut catalog = Catalog::new();
        let school = catalog.add_school(new_school("  Lakeside  ", " WA ", " Seattle", " 3000 ")).unwrap();
        assert_eq!(school.name, "Lakeside");
        assert_eq!(school.state, "WA");
        assert_eq!(school.city, "Seattle");
        assert_eq!(school.fees, 3000);
    }

    #[test]
    fn add_school_rejects_missing_or_malformed_fields() {
        let mut catalog = Catalog::new();
        let cases = [
            (new_school("", "IL", "Springfield", "5000"), "name"),
            (new_school("A", "  ", "Springfield", "5000"), "state"),
            (new_school("A", "IL", "", "5000"), "city"),
            (new_school("A", "IL", "Springfield", ""), "fees"),
            (new_school("A", "IL", "Springfield", "lots"), "fees"),
            (new_school("A", "IL", "Springfield", "-10"), "fees"),
            (new_school("A", "IL", "Springfield", "12.5"), "fees"),
        ];
        for (request, expected_field) in cases {
            match catalog.add_school(request) {
                Err(CatalogError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected invalid {expected_field}, got {other:?}"),
            }
        }
        assert!(catalog.schools().is_empty());

        // Rejected attempts do not consume ids.
        let school = catalog.add_school(new_school("A", "IL", "Springfield", "1")).unwrap();
        assert_eq!(school.id, SchoolId(1));
    }

    #[test]
    fn added_state_appears_once_in_distinct_values() {
        let mut catalog = Catalog::new();
        catalog.add_school(new_school("One", "IL", "Springfield", "1")).unwrap();
        catalog.add_school(new_school("Two", "IL", "Chicago", "2")).unwrap();
        catalog.add_school(new_school("Three", "OR", "Portland", "3")).unwrap();

        let states = distinct_values(catalog.schools(), SchoolField::State);
        assert_eq!(states.iter().filter(|s| *s == "IL").count(), 1);
        assert_eq!(states.len(), 2);
    }

    #[test]
    fn add_review_is_listed_for_its_school() {
        let mut catalog = Catalog::new();
        let school = catalog.add_school(new_school("Springfield Elementary", "IL", "Springfield", "5000")).unwrap();
        catalog.add_review(school.id, new_review("Jane", 5)).unwrap();

        let reviews = reviews_for_school(catalog.reviews(), SchoolId(1));
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating, 5);
        assert_eq!(reviews[0].author, "Jane");
    }

    #[test]
    fn add_review_leaves_school_aggregates_alone() {
        let mut catalog = Catalog::seeded();
        let before = catalog.school(SchoolId(1)).cloned().unwrap();
        catalog.add_review(SchoolId(1), new_review("Jane", 1)).unwrap();
        assert_eq!(catalog.school(SchoolId(1)), Some(&before));
    }

    #[test]
    fn add_review_rejects_unknown_school() {
        let mut catalog = Catalog::new();
        let err = catalog.add_review(SchoolId(7), new_review("Jane", 5)).unwrap_err();
        assert_eq!(err, CatalogError::UnknownSchool(SchoolId(7)));
        assert!(catalog.reviews().is_empty());
    }

    #[test]
    fn add_review_rejects_out_of_range_rating_and_blank_text() {
        let mut catalog = Catalog::new();
        let school = catalog.add_school(new_school("A", "IL", "Springfield", "1")).unwrap();

        for rating in [0, 6] {
            let err = catalog.add_review(school.id, new_review("Jane", rating)).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidInput { field: "rating", .. }));
        }
        let err = catalog.add_review(school.id, new_review(" ", 3)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput { field: "author", .. }));
        assert!(catalog.reviews().is_empty());

        let review = catalog.add_review(school.id, new_review("Jane", 3)).unwrap();
        assert_eq!(review.id, ReviewId(1));
    }

    #[test]
    fn filtered_view_uses_the_query() {
        let catalog = Catalog::seeded();
        let query = SchoolQuery {
            search_term: "springfield".into(),
            ..SchoolQuery::default()
        };
        let found = catalog.filtered(&query);
        assert!(!found.is_empty());
        assert!(found.iter().all(|s| s.name.to_lowercase().contains("springfield")));
    }
}
