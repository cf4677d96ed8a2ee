use leptos::*;
use crate::rating::star_states;

/// Row of five stars with the first `filled` lit.
#[component]
pub fn StarRating(filled: u8) -> impl IntoView {
    view! {
        <div class="star-rating">
            {star_states(filled).into_iter().map(|lit| view! {
                <span class="star" class:lit=lit>{ "★" }</span>
            }).collect::<Vec<_>>()}
        </div>
    }
}
