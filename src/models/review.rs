// src/models/review.rs
use crate::models::school::SchoolId;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ReviewId(pub u32);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub school_id: SchoolId, // School the review is about
    pub author: String,      // Display name of the reviewer
    pub grade: String,
    pub division: String,
    pub rating: u8,          // 1 - 5 stars
    pub comment: String,
}

/// Review as submitted from the form, before the catalog assigns an id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NewReview {
    pub author: String,
    pub grade: String,
    pub division: String,
    pub rating: u8,
    pub comment: String,
}
