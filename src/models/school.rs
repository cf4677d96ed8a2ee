// src/models/school.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a school within one catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SchoolId(pub u32);

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of areas a school is rated on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academic,
    Faculty,
    Infrastructure,
    Placement,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Academic,
        Category::Faculty,
        Category::Infrastructure,
        Category::Placement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::Faculty => "Faculty",
            Category::Infrastructure => "Infrastructure",
            Category::Placement => "Placement",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Academic => "🎓",
            Category::Faculty => "👥",
            Category::Infrastructure => "🏢",
            Category::Placement => "💼",
        }
    }
}

/// Percentage of reviews per star value. Index 0 holds 1-star, index 4 holds 5-star.
/// Values are expected to sum to roughly 100 but nothing enforces it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(transparent)]
pub struct RatingBreakdown([f32; 5]);

impl RatingBreakdown {
    /// Builds a breakdown from percentages listed 5 stars first, the way it is displayed.
    pub fn from_descending(percentages: [f32; 5]) -> Self {
        let mut slots = percentages;
        slots.reverse();
        Self(slots)
    }

    /// Percentage for a star value; anything outside 1..=5 reads as 0.
    pub fn percentage(&self, stars: u8) -> f32 {
        match stars {
            1..=5 => self.0[usize::from(stars - 1)],
            _ => 0.0,
        }
    }

    /// Rows in display order, 5 stars down to 1.
    pub fn rows(&self) -> impl Iterator<Item = (u8, f32)> + '_ {
        (1..=5u8).rev().map(move |stars| (stars, self.percentage(stars)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryRatings {
    pub academic: f32,
    pub faculty: f32,
    pub infrastructure: f32,
    pub placement: f32,
}

impl CategoryRatings {
    pub fn get(&self, category: Category) -> f32 {
        match category {
            Category::Academic => self.academic,
            Category::Faculty => self.faculty,
            Category::Infrastructure => self.infrastructure,
            Category::Placement => self.placement,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub state: String,          // State code, e.g. "IL"
    pub city: String,
    pub fees: u64,              // Yearly fee
    pub avg_rating: f32,        // 0.0 - 5.0
    pub verified_reviews: u32,
    pub rating_breakdown: RatingBreakdown,
    pub category_ratings: CategoryRatings,
}

impl School {
    /// A freshly listed school with no ratings yet.
    pub fn unrated(id: SchoolId, name: String, state: String, city: String, fees: u64) -> Self {
        Self {
            id,
            name,
            state,
            city,
            fees,
            avg_rating: 0.0,
            verified_reviews: 0,
            rating_breakdown: RatingBreakdown::default(),
            category_ratings: CategoryRatings::default(),
        }
    }

    /// Summary line shown on the school card, e.g. `Springfield, IL - $5000/year`.
    pub fn location_line(&self) -> String {
        format!("{}, {} - ${}/year", self.city, self.state, self.fees)
    }
}

/// Structured input for listing a new school. Fields hold the raw text as typed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NewSchool {
    pub name: String,
    pub state: String,
    pub city: String,
    pub fees: String,
}
