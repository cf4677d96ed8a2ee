//! Aggregate rating panel for the selected school: overall score, star
//! breakdown and the per-category scores.
use leptos::*;
use crate::components::{progress_bar::ProgressBar, star_rating::StarRating};
use crate::models::school::{Category, School};
use crate::rating::{filled_stars, format_rating};

#[component]
pub fn DetailedRating(school: School) -> impl IntoView {
    let breakdown = school.rating_breakdown;
    let categories = school.category_ratings;

    view! {
        <div class="detailed-rating">
            <div class="overall">
                <span class="overall-score">{ format_rating(school.avg_rating) }</span>
                <div>
                    <StarRating filled=filled_stars(school.avg_rating) />
                    <div class="verified">{ format!("({} Verified Reviews)", school.verified_reviews) }</div>
                </div>
            </div>

            // Rating breakdown, 5 stars first
            <div class="breakdown">
                {breakdown.rows().map(|(stars, percentage)| view! {
                    <div class="breakdown-row">
                        <span class="breakdown-stars">{ stars }</span>
                        <span class="star lit">{ "★" }</span>
                        <ProgressBar percentage=percentage />
                        <span class="breakdown-percentage">{ format!("({}%)", percentage) }</span>
                    </div>
                }).collect::<Vec<_>>()}
            </div>

            <div class="categories">
                {Category::ALL.into_iter().map(|category| view! {
                    <div class="category">
                        <span class="category-icon">{ category.icon() }</span>
                        <div>
                            <div class="category-name">{ category.label() }</div>
                            <div>
                                <span>{ format_rating(categories.get(category)) }</span>
                                <span class="star lit">{ "★" }</span>
                            </div>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
