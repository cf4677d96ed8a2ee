//! Mock records a fresh session starts with. Nothing here is persisted.
use crate::models::review::{Review, ReviewId};
use crate::models::school::{CategoryRatings, RatingBreakdown, School, SchoolId};

#[allow(clippy::too_many_arguments)]
fn school(
    id: u32,
    name: &str,
    state: &str,
    city: &str,
    fees: u64,
    avg_rating: f32,
    verified_reviews: u32,
    breakdown: [f32; 5],
    categories: [f32; 4],
) -> School {
    let [academic, faculty, infrastructure, placement] = categories;
    School {
        id: SchoolId(id),
        name: name.to_string(),
        state: state.to_string(),
        city: city.to_string(),
        fees,
        avg_rating,
        verified_reviews,
        rating_breakdown: RatingBreakdown::from_descending(breakdown),
        category_ratings: CategoryRatings {
            academic,
            faculty,
            infrastructure,
            placement,
        },
    }
}

fn review(id: u32, school_id: u32, author: &str, grade: &str, division: &str, rating: u8, comment: &str) -> Review {
    Review {
        id: ReviewId(id),
        school_id: SchoolId(school_id),
        author: author.to_string(),
        grade: grade.to_string(),
        division: division.to_string(),
        rating,
        comment: comment.to_string(),
    }
}

pub fn schools() -> Vec<School> {
    vec![
        school(1, "Springfield Elementary", "IL", "Springfield", 5000, 4.2, 12,
            [67.0, 11.0, 22.0, 0.0, 0.0], [4.5, 4.0, 3.5, 4.3]),
        school(2, "Shelbyville High", "IL", "Shelbyville", 7500, 3.6, 8,
            [25.0, 38.0, 25.0, 12.0, 0.0], [3.8, 3.5, 3.2, 3.9]),
        school(3, "Lincoln Park Academy", "IL", "Chicago", 14000, 4.7, 31,
            [81.0, 13.0, 6.0, 0.0, 0.0], [4.8, 4.6, 4.4, 4.9]),
        school(4, "Cascade Valley School", "OR", "Portland", 9800, 3.9, 15,
            [40.0, 33.0, 20.0, 7.0, 0.0], [4.0, 4.1, 3.6, 3.8]),
        school(5, "Riverside Public School", "OR", "Salem", 3200, 2.8, 6,
            [0.0, 17.0, 50.0, 33.0, 0.0], [3.0, 2.9, 2.4, 2.7]),
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        review(1, 1, "John D.", "5th", "A", 4, "Great teachers and supportive environment."),
        review(2, 1, "Priya S.", "3rd", "B", 5, "My daughter looks forward to school every day."),
        review(3, 2, "Marcus L.", "10th", "C", 3, "Good sports program, the labs need an upgrade."),
        review(4, 3, "Elena R.", "12th", "A", 5, "Outstanding college counselling and faculty."),
        review(5, 4, "Tom H.", "7th", "B", 4, "Friendly staff and a lovely campus."),
    ]
}
