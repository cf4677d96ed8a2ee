//! Numeric helpers behind the star, progress bar and rating widgets.

pub const MAX_STARS: u8 = 5;

/// Number of lit stars for an average rating: rounded half up, kept within 0..=5.
pub fn filled_stars(rating: f32) -> u8 {
    if rating.is_nan() {
        return 0;
    }
    // f32::round rounds half away from zero, which is half up for non-negative input.
    rating.round().clamp(0.0, f32::from(MAX_STARS)) as u8
}

/// Lit/unlit state of each of the five stars, first star first.
pub fn star_states(filled: u8) -> [bool; 5] {
    std::array::from_fn(|i| (i as u8) < filled)
}

/// Width of a progress bar in percent.
pub fn clamp_percentage(percentage: f32) -> f32 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

pub fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}

/// Label of an option in the review form's rating select.
pub fn rating_option_label(stars: u8) -> String {
    if stars == 1 {
        "1 Star".to_string()
    } else {
        format!("{} Stars", stars)
    }
}
