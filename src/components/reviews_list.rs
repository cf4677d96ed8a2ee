use leptos::*;
use crate::components::star_rating::StarRating;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        {move || {
            let reviews = reviews.get();
            if reviews.is_empty() {
                view! { <p class="no-reviews">{ "No reviews yet. Be the first to review!" }</p> }.into_view()
            } else {
                view! {
                    <div class="reviews">
                        {reviews.into_iter().map(|review| view! {
                            <div class="review">
                                <div class="review-header">
                                    <div>
                                        <span class="review-author">{ review.author }</span>
                                        <span class="review-meta">
                                            { format!("Grade: {}, Division: {}", review.grade, review.division) }
                                        </span>
                                    </div>
                                    <StarRating filled=review.rating />
                                </div>
                                <p>{ review.comment }</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_view()
            }
        }}
    }
}
